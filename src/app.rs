// File: src/app.rs
use crate::action::Action;
use crate::color_utils::{ColorMap, ColorMode, Rgb};
use crate::config::Config;
use crate::error::ValidationError;
use crate::form::EventDraft;
use crate::grid::{self, Cell};
use crate::model::Event;
use crate::store::EventStore;
use chrono::{Days, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

/// All state behind the calendar view. Rendering only reads it; every
/// change goes through [`CalendarApp::dispatch`].
#[derive(Debug)]
pub struct CalendarApp {
    today: NaiveDate,
    /// Reference date of the displayed month, doubling as the keyboard cursor.
    current: NaiveDate,
    selected: Option<NaiveDate>,
    show_form: bool,
    pub form: EventDraft,
    store: EventStore,
    colors: ColorMap,
    color_mode: ColorMode,
    events_per_cell: usize,
    rng: StdRng,
}

impl CalendarApp {
    pub fn new(events: Vec<Event>, today: NaiveDate, config: &Config) -> Self {
        Self::with_rng(events, today, config, StdRng::from_rng(&mut rand::rng()))
    }

    pub fn with_rng(events: Vec<Event>, today: NaiveDate, config: &Config, rng: StdRng) -> Self {
        let mut app = Self {
            today,
            current: today,
            selected: None,
            show_form: false,
            form: EventDraft::new(today, config.default_start, config.default_end),
            store: EventStore::from_events(events),
            colors: ColorMap::default(),
            color_mode: config.color_mode(),
            events_per_cell: config.events_per_cell,
            rng,
        };
        app.recolor();
        app
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn current(&self) -> NaiveDate {
        self.current
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// The form lives in the side panel, which only exists while a date is
    /// selected.
    pub fn form_visible(&self) -> bool {
        self.show_form && self.selected.is_some()
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn colors(&self) -> &ColorMap {
        &self.colors
    }

    pub fn month_title(&self) -> String {
        self.current.format("%B %Y").to_string()
    }

    pub fn grid(&self) -> Vec<Cell> {
        grid::month_grid(self.current)
    }

    pub fn events_on(&self, date: Option<NaiveDate>) -> Vec<&Event> {
        self.store.events_on(date)
    }

    /// What a grid cell shows: the first few events and how many were left out.
    pub fn cell_preview(&self, date: NaiveDate) -> (Vec<&Event>, usize) {
        let mut events = self.store.events_on(Some(date));
        let hidden = events.len().saturating_sub(self.events_per_cell);
        events.truncate(self.events_per_cell);
        (events, hidden)
    }

    pub fn color_of(&self, event: &Event) -> Option<Rgb> {
        self.colors.color_of(event)
    }

    pub fn dispatch(&mut self, action: Action) -> Result<(), ValidationError> {
        if !matches!(action, Action::Tick(_)) {
            debug!(?action, "dispatch");
        }
        match action {
            Action::PrevMonth => self.current = grid::shift_months(self.current, -1),
            Action::NextMonth => self.current = grid::shift_months(self.current, 1),
            Action::PrevYear => self.current = grid::shift_years(self.current, -1),
            Action::NextYear => self.current = grid::shift_years(self.current, 1),
            Action::MoveCursor(days) => self.current = shift_days(self.current, days),
            Action::Today => self.current = self.today,
            Action::Tick(date) => {
                if date != self.today {
                    info!(%date, "date changed");
                    self.today = date;
                }
            }

            Action::Select(date) => self.selected = Some(date),
            Action::SelectCursor => self.selected = Some(self.current),
            Action::Deselect => self.selected = None,

            Action::ToggleForm => {
                if self.selected.is_some() {
                    self.show_form = !self.show_form;
                }
            }
            Action::ClearForm => {
                let date = self.selected.unwrap_or(self.today);
                self.form.clear(date);
            }
            Action::Submit => self.submit()?,
        }
        Ok(())
    }

    fn submit(&mut self) -> Result<(), ValidationError> {
        let date = self.store.submit(&self.form)?.date;
        self.show_form = false;
        self.selected = Some(date);
        self.form.reset_keeping_date();
        self.recolor();
        info!(total = self.store.len(), "store updated");
        Ok(())
    }

    /// Rebuilt from scratch, as on every store change.
    fn recolor(&mut self) {
        self.colors = ColorMap::rebuild(&self.store, self.color_mode, &mut self.rng);
    }
}

fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}
