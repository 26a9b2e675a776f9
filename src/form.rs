// File: src/form.rs
use crate::error::ValidationError;
use crate::model::Event;
use crate::model::adapter::{DATE_FORMAT, parse_date, parse_time};
use chrono::{NaiveDate, NaiveTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Date,
    StartTime,
    EndTime,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::Date,
        FormField::StartTime,
        FormField::EndTime,
        FormField::Description,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title*",
            FormField::Date => "Date*",
            FormField::StartTime => "Start Time*",
            FormField::EndTime => "End Time*",
            FormField::Description => "Description",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Text buffers behind the add-event form. Everything is kept as typed so a
/// failed submission can be corrected in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    pub focus: FormField,
    default_start: NaiveTime,
    default_end: NaiveTime,
}

impl EventDraft {
    pub fn new(date: NaiveDate, default_start: NaiveTime, default_end: NaiveTime) -> Self {
        Self {
            title: String::new(),
            date: date.format(DATE_FORMAT).to_string(),
            start_time: default_start.format("%H:%M").to_string(),
            end_time: default_end.format("%H:%M").to_string(),
            description: String::new(),
            focus: FormField::Title,
            default_start,
            default_end,
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Date => &self.date,
            FormField::StartTime => &self.start_time,
            FormField::EndTime => &self.end_time,
            FormField::Description => &self.description,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Date => &mut self.date,
            FormField::StartTime => &mut self.start_time,
            FormField::EndTime => &mut self.end_time,
            FormField::Description => &mut self.description,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    pub fn push_char(&mut self, c: char) {
        let focus = self.focus;
        self.field_mut(focus).push(c);
    }

    pub fn backspace(&mut self) {
        let focus = self.focus;
        self.field_mut(focus).pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Checks the draft and builds the event it describes.
    ///
    /// Required fields are checked before anything is parsed, so an empty
    /// form always reports `MissingFields`.
    pub fn validate(&self) -> Result<Event, ValidationError> {
        let required = [&self.title, &self.date, &self.start_time, &self.end_time];
        if required.iter().any(|s| s.trim().is_empty()) {
            return Err(ValidationError::MissingFields);
        }

        let date = parse_date(&self.date).ok_or(ValidationError::InvalidDate)?;
        let start_time = parse_time(&self.start_time).ok_or(ValidationError::InvalidTime)?;
        let end_time = parse_time(&self.end_time).ok_or(ValidationError::InvalidTime)?;
        if start_time >= end_time {
            return Err(ValidationError::EndBeforeStart);
        }

        let description = Some(self.description.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Ok(Event {
            date,
            start_time,
            end_time,
            title: self.title.trim().to_string(),
            description,
        })
    }

    /// After a successful save: blank everything except the date.
    pub fn reset_keeping_date(&mut self) {
        let date = std::mem::take(&mut self.date);
        self.reset_with_date(date);
    }

    /// The "Clear" button: blank everything, date set to `date`.
    pub fn clear(&mut self, date: NaiveDate) {
        self.reset_with_date(date.format(DATE_FORMAT).to_string());
    }

    fn reset_with_date(&mut self, date: String) {
        *self = Self {
            date,
            ..Self::new(NaiveDate::MIN, self.default_start, self.default_end)
        };
    }
}
