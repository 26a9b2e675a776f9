// File: src/store.rs
use crate::error::ValidationError;
use crate::form::EventDraft;
use crate::model::Event;
use chrono::NaiveDate;
use tracing::{info, warn};

/// Append-only list of events in insertion order. There is no way to edit
/// or remove an entry once it is in.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_events(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// Events falling on `date`, in the order they were added.
    /// No date means no events.
    pub fn events_on(&self, date: Option<NaiveDate>) -> Vec<&Event> {
        match date {
            Some(d) => self.events.iter().filter(|ev| ev.date == d).collect(),
            None => Vec::new(),
        }
    }

    /// Validates `draft` and appends the resulting event.
    pub fn submit(&mut self, draft: &EventDraft) -> Result<&Event, ValidationError> {
        let event = draft.validate().inspect_err(|e| {
            warn!(error = %e, title = %draft.title, date = %draft.date, "rejected event submission");
        })?;
        info!(signature = %event.signature(), "event added");
        self.events.push(event);
        Ok(&self.events[self.events.len() - 1])
    }
}

impl<'a> IntoIterator for &'a EventStore {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
