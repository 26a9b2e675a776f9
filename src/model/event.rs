// File: src/model/event.rs
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single calendar entry. Events have no identity beyond their fields:
/// duplicates are allowed and indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub date: NaiveDate,
    #[serde(with = "super::adapter::hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "super::adapter::hhmm")]
    pub end_time: NaiveTime,
    pub title: String,
    #[serde(
        default,
        deserialize_with = "super::adapter::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

impl Event {
    pub fn signature(&self) -> Signature {
        Signature {
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            title: self.title.clone(),
        }
    }

    /// `true` when the event ends strictly after it starts.
    pub fn is_well_ordered(&self) -> bool {
        self.start_time < self.end_time
    }

    pub fn time_range_display(&self) -> String {
        format!(
            "{} – {}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }
}

/// Key used to decide whether two events are "the same" for coloring.
/// Not a primary key: two stored events may share one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub title: String,
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.date.format("%Y-%m-%d"),
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M"),
            self.title
        )
    }
}
