// File: src/config.rs
use crate::color_utils::ColorMode;
use crate::model::adapter::hhmm;
use anyhow::{Context, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON file with the starting events. The built-in set is used when unset.
    pub fixture: Option<PathBuf>,
    /// Derive event colors from their text instead of re-rolling them on
    /// every change.
    pub stable_colors: bool,
    /// Event titles shown inside a grid cell before "+N more".
    pub events_per_cell: usize,
    #[serde(with = "hhmm")]
    pub default_start: NaiveTime,
    #[serde(with = "hhmm")]
    pub default_end: NaiveTime,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fixture: None,
            stable_colors: false,
            events_per_cell: 2,
            default_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN),
            default_end: NaiveTime::from_hms_opt(10, 0, 0).unwrap_or(NaiveTime::MIN),
        }
    }
}

impl Config {
    /// A missing file is not an error: everything has a default.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Could not read config {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Config = toml::from_str(raw)?;
        if config.default_start >= config.default_end {
            anyhow::bail!("default_end must be after default_start");
        }
        Ok(config)
    }

    pub fn color_mode(&self) -> ColorMode {
        if self.stable_colors {
            ColorMode::Stable
        } else {
            ColorMode::Random
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = Config::from_toml("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.events_per_cell, 2);
        assert_eq!(cfg.color_mode(), ColorMode::Random);
    }

    #[test]
    fn reads_all_keys() {
        let cfg = Config::from_toml(
            r#"
            fixture = "/tmp/events.json"
            stable_colors = true
            events_per_cell = 3
            default_start = "08:30"
            default_end = "09:15"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.fixture, Some(PathBuf::from("/tmp/events.json")));
        assert_eq!(cfg.color_mode(), ColorMode::Stable);
        assert_eq!(cfg.events_per_cell, 3);
        assert_eq!(cfg.default_start, NaiveTime::from_hms_opt(8, 30, 0).unwrap());
    }

    #[test]
    fn rejects_backwards_defaults() {
        assert!(Config::from_toml("default_start = \"11:00\"\ndefault_end = \"10:00\"").is_err());
    }

    #[test]
    fn loads_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "stable_colors = true\nevents_per_cell = 4\n").unwrap();

        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.color_mode(), ColorMode::Stable);
        assert_eq!(cfg.events_per_cell, 4);
        assert_eq!(cfg.default_end, Config::default().default_end);
    }

    #[test]
    fn invalid_file_error_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "stable_colors = \"sometimes\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains(&path.display().to_string()));
    }

    #[test]
    fn missing_file_is_fine() {
        let cfg = Config::load(Path::new("/definitely/not/here/config.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }
}
