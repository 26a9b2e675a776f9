use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    PrevMonth,
    NextMonth,
    PrevYear,
    NextYear,
    MoveCursor(i64),
    Today,
    /// The wall-clock date, sent by the event loop so "today" follows midnight.
    Tick(NaiveDate),

    // Selection
    Select(NaiveDate),
    SelectCursor,
    Deselect,

    // Form
    ToggleForm,
    ClearForm,
    Submit,
}
