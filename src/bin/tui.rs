// File: src/bin/tui.rs
use anyhow::{Context, Result};
use calpane::action::Action;
use calpane::app::CalendarApp;
use calpane::config::Config;
use calpane::model::adapter::load_fixture;
use calpane::paths::AppPaths;
use calpane::tui::{input::handle_key, state::AppState, view::draw};
use chrono::Local;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info};

const TICK_RATE: Duration = Duration::from_secs(1);

fn main() -> Result<()> {
    let paths = AppPaths::discover()?;
    calpane::logging::init(&paths.log_file)?;

    let config = Config::load(&paths.config_file)?;
    let events = load_fixture(config.fixture.as_deref())?;
    let today = Local::now().date_naive();
    info!(%today, events = events.len(), "starting calpane");

    let mut state = AppState::new(CalendarApp::new(events, today, &config));

    enable_raw_mode().context("Could not enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_loop(&mut terminal, &mut state);

    // Restore the terminal even when the loop failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "terminal loop failed");
    }
    info!("bye");
    result
}

fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
) -> Result<()> {
    while !state.should_quit {
        // Keeps the "today" highlight right when the session spans midnight.
        let _ = state.app.dispatch(Action::Tick(Local::now().date_naive()));
        terminal.draw(|f| draw(f, state))?;
        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            handle_key(state, key);
        }
    }
    Ok(())
}
