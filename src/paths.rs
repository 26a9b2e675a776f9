// File: src/paths.rs
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Where calpane keeps its files on this platform.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub config_file: PathBuf,
    pub log_file: PathBuf,
}

impl AppPaths {
    pub fn discover() -> Result<Self> {
        let dirs = ProjectDirs::from("com", "calpane", "calpane")
            .context("Could not determine a home directory")?;
        Ok(Self {
            config_file: dirs.config_dir().join("config.toml"),
            log_file: dirs.data_local_dir().join("calpane.log"),
        })
    }
}
