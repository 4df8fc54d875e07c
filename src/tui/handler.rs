//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog or to the entry screen.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::error::OutlayError;
use crate::numpad::NumpadKey;

use super::app::{ActiveDialog, App};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => {
            handle_key_event(app, key);
            Ok(())
        }
        Event::Tick => {
            app.on_tick(Instant::now());
            Ok(())
        }
        Event::Mouse(_) | Event::Resize(_, _) => Ok(()),
        Event::Failed(message) => Err(OutlayError::Tui(message).into()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match app.active_dialog {
        ActiveDialog::None => handle_screen_key(app, key),
        ActiveDialog::Date => handle_date_key(app, key),
        // Help and report close on any key
        ActiveDialog::Help | ActiveDialog::Report(_) => app.close_dialog(),
    }
}

/// Handle keys on the entry screen
fn handle_screen_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Char('d') => app.open_dialog(ActiveDialog::Date),
        KeyCode::Char('r') => app.open_report(),
        KeyCode::Char('u') => app.undo_newest(),

        // Amount editing
        KeyCode::Backspace => {
            app.screen.press_key(NumpadKey::Backspace);
        }
        KeyCode::Char('c') | KeyCode::Delete => {
            app.screen.press_key(NumpadKey::Clear);
        }
        KeyCode::Char(c) if NumpadKey::from_char(c).is_some() => {
            app.screen.press_char(c);
        }

        // Grid navigation
        KeyCode::Char('h') | KeyCode::Left => app.move_left(),
        KeyCode::Char('l') | KeyCode::Right => app.move_right(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),

        KeyCode::Enter => app.tap_selected(),
        KeyCode::Esc => app.clear_status(),

        _ => {}
    }
}

/// Handle keys in the date dialog
fn handle_date_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.clear_status();
            app.close_dialog();
        }
        KeyCode::Enter => app.submit_date(),
        KeyCode::Backspace => app.date_input.backspace(),
        KeyCode::Left => app.date_input.move_left(),
        KeyCode::Right => app.date_input.move_right(),
        KeyCode::Char(c) => {
            app.date_input.insert(c);
        }
        _ => {}
    }
}
