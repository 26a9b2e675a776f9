// File: src/tui/state.rs
use crate::app::CalendarApp;

pub struct AppState {
    pub app: CalendarApp,

    // UI State
    pub show_full_help: bool,
    pub message: String,
    /// Blocking notification. While set, the only accepted input dismisses it.
    pub alert: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(app: CalendarApp) -> Self {
        Self {
            app,
            show_full_help: false,
            message: "Enter: select a day  a: add event  ?: help".to_string(),
            alert: None,
            should_quit: false,
        }
    }

    /// Keys go to the form while it is on screen.
    pub fn editing(&self) -> bool {
        self.app.form_visible()
    }
}
