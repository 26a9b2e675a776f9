// File: ./src/model/adapter.rs
// Handles fixture (JSON) serialization/deserialization
use crate::model::event::Event;
use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer};
use std::path::Path;
use tracing::{info, warn};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Events shipped with the binary, used when no fixture path is configured.
pub const DEFAULT_FIXTURE: &str = include_str!("../../assets/events.json");

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT).ok()
}

/// `HH:MM` (de)serialization for times. chrono's default would write seconds.
pub mod hhmm {
    use super::TIME_FORMAT;
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&time.format(TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_time(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid time '{}', expected HH:MM", raw)))
    }
}

/// Blank descriptions are treated as absent.
pub fn optional_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<String>::deserialize(d)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

pub fn parse_fixture(raw: &str) -> Result<Vec<Event>> {
    let events: Vec<Event> = serde_json::from_str(raw).context("Malformed event fixture")?;

    // The fixture is trusted; odd rows are kept as-is but worth a note in the log.
    for (idx, ev) in events.iter().enumerate() {
        if !ev.is_well_ordered() {
            warn!(index = idx, signature = %ev.signature(), "fixture event does not end after it starts");
        }
        if ev.title.trim().is_empty() {
            warn!(index = idx, date = %ev.date, "fixture event has an empty title");
        }
    }
    Ok(events)
}

pub fn load_fixture(path: Option<&Path>) -> Result<Vec<Event>> {
    let events = match path {
        Some(p) => {
            let raw = std::fs::read_to_string(p)
                .with_context(|| format!("Could not read fixture {}", p.display()))?;
            parse_fixture(&raw).with_context(|| format!("In fixture {}", p.display()))?
        }
        None => parse_fixture(DEFAULT_FIXTURE)?,
    };
    info!(
        count = events.len(),
        source = %path.map(|p| p.display().to_string()).unwrap_or_else(|| "built-in".to_string()),
        "loaded event fixture"
    );
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_camel_case_rows() {
        let raw = r#"[
            {"date":"2024-03-15","startTime":"09:00","endTime":"10:30","title":"Standup","description":"Room 4"},
            {"date":"2024-03-16","startTime":"14:00","endTime":"15:00","title":"Review"}
        ]"#;
        let events = parse_fixture(raw).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(events[0].end_time, NaiveTime::from_hms_opt(10, 30, 0).unwrap());
        assert_eq!(events[0].description.as_deref(), Some("Room 4"));
        assert_eq!(events[1].description, None);
    }

    #[test]
    fn empty_description_becomes_none() {
        let raw = r#"[{"date":"2024-03-15","startTime":"09:00","endTime":"10:00","title":"X","description":"  "}]"#;
        assert_eq!(parse_fixture(raw).unwrap()[0].description, None);
    }

    #[test]
    fn rejects_bad_time() {
        let raw = r#"[{"date":"2024-03-15","startTime":"9am","endTime":"10:00","title":"X"}]"#;
        assert!(parse_fixture(raw).is_err());
    }

    #[test]
    fn keeps_backwards_rows_from_fixture() {
        let raw = r#"[{"date":"2024-03-15","startTime":"11:00","endTime":"10:00","title":"X"}]"#;
        assert_eq!(parse_fixture(raw).unwrap().len(), 1);
    }

    #[test]
    fn serializes_times_without_seconds() {
        let raw = r#"[{"date":"2024-03-15","startTime":"09:00","endTime":"10:00","title":"X"}]"#;
        let events = parse_fixture(raw).unwrap();
        let json = serde_json::to_string(&events[0]).unwrap();
        assert!(json.contains(r#""startTime":"09:00""#));
        assert!(!json.contains("description"));
    }

    #[test]
    fn configured_fixture_replaces_built_in() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"date":"2031-07-04","startTime":"12:00","endTime":"13:00","title":"Picnic"}}]"#
        )
        .unwrap();

        let events = load_fixture(Some(file.path())).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Picnic");
        assert_eq!(events[0].date, NaiveDate::from_ymd_opt(2031, 7, 4).unwrap());
        assert_ne!(events, parse_fixture(DEFAULT_FIXTURE).unwrap());
    }

    #[test]
    fn malformed_fixture_error_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[{{\"date\": \"not a date\"").unwrap();

        let err = load_fixture(Some(file.path())).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(
            chain.contains(&file.path().display().to_string()),
            "error chain was: {chain}"
        );
    }

    #[test]
    fn unreadable_fixture_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        let err = load_fixture(Some(&missing)).unwrap_err();
        assert!(format!("{:#}", err).contains("absent.json"));
    }

    #[test]
    fn built_in_fixture_is_valid() {
        let events = load_fixture(None).unwrap();
        assert!(!events.is_empty());
        assert!(events.iter().all(Event::is_well_ordered));
    }
}
