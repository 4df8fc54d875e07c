//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use crate::config::Settings;
use crate::screen::MainScreen;
use crate::storage::MemoryStore;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;
use super::host::TuiHost;

/// Short enough for the title fade and the amount shake to animate
const TICK_RATE: Duration = Duration::from_millis(50);

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the entry screen until the user quits
pub fn run_tui(store: MemoryStore, settings: &Settings) -> Result<()> {
    let host = TuiHost::new(Duration::from_secs(settings.undo_window_secs));
    let mut screen = MainScreen::new(store, host, settings);
    screen.resume()?;

    let mut app = App::new(screen, settings);

    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, &mut app);
    restore_terminal()?;

    result
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let events = EventHandler::new(TICK_RATE);

    while !app.should_quit {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        handle_event(app, events.next()?)?;
    }

    Ok(())
}
