// File: src/tui/input.rs
use crate::action::Action;
use crate::tui::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if state.alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            state.alert = None;
        }
        return;
    }

    if state.editing() {
        handle_form_key(state, key);
    } else {
        handle_normal_key(state, key);
    }
}

fn handle_form_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => run(state, Action::ToggleForm),
        KeyCode::Tab => state.app.form.focus_next(),
        KeyCode::BackTab => state.app.form.focus_prev(),
        KeyCode::Enter => match state.app.dispatch(Action::Submit) {
            Ok(()) => state.message = "Event saved.".to_string(),
            Err(e) => state.alert = Some(e.to_string()),
        },
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            run(state, Action::ClearForm);
            state.message = "Form cleared.".to_string();
        }
        KeyCode::Backspace => state.app.form.backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.app.form.push_char(c)
        }
        _ => {}
    }
}

fn handle_normal_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Char('?') => state.show_full_help = !state.show_full_help,

        KeyCode::Char('h') | KeyCode::Left => run(state, Action::MoveCursor(-1)),
        KeyCode::Char('l') | KeyCode::Right => run(state, Action::MoveCursor(1)),
        KeyCode::Char('k') | KeyCode::Up => run(state, Action::MoveCursor(-7)),
        KeyCode::Char('j') | KeyCode::Down => run(state, Action::MoveCursor(7)),
        KeyCode::Char('[') => run(state, Action::PrevMonth),
        KeyCode::Char(']') => run(state, Action::NextMonth),
        KeyCode::Char('{') => run(state, Action::PrevYear),
        KeyCode::Char('}') => run(state, Action::NextYear),
        KeyCode::Char('t') => run(state, Action::Today),

        KeyCode::Enter => run(state, Action::SelectCursor),
        KeyCode::Esc | KeyCode::Char('x') => run(state, Action::Deselect),

        KeyCode::Char('a') => {
            if state.app.selected().is_none() {
                state.message = "Select a day first (Enter).".to_string();
            } else {
                run(state, Action::ToggleForm);
            }
        }
        _ => {}
    }
}

/// Dispatches an action that cannot fail validation.
fn run(state: &mut AppState, action: Action) {
    if let Err(e) = state.app.dispatch(action) {
        warn!(error = %e, "unexpected validation error");
        state.alert = Some(e.to_string());
    }
}
