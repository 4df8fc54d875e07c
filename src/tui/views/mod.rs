//! TUI Views module
//!
//! The entry screen's panels: title bar, amount field, keypad legend,
//! category grid, summary drawer and status bar.

pub mod amount;
pub mod category_grid;
pub mod drawer;
pub mod status_bar;
pub mod title_bar;

use std::time::Instant;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::ScreenLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = ScreenLayout::new(frame.area());
    let now = Instant::now();

    title_bar::render(frame, app, layout.title_bar, now);
    amount::render_amount(frame, app, layout.amount, now);
    amount::render_numpad(frame, layout.numpad);
    category_grid::render(frame, app, layout.categories);
    drawer::render(frame, app, layout.drawer);
    status_bar::render(frame, app, layout.status_bar, now);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::Date => dialogs::date::render(frame, app),
        ActiveDialog::Report(date) => dialogs::report::render(frame, app, date),
        ActiveDialog::None => {}
    }
}
