//! Errors surfaced to the person filling in the add-event form.

use thiserror::Error;

/// Why a submission was refused. The store is never touched when one of
/// these is returned, and the form keeps what was typed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill all required fields.")]
    MissingFields,

    #[error("Date must look like YYYY-MM-DD.")]
    InvalidDate,

    #[error("Times must look like HH:MM.")]
    InvalidTime,

    #[error("End time must be after start time.")]
    EndBeforeStart,
}
