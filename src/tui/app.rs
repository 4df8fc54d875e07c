//! Application state for the TUI
//!
//! The App struct owns the entry screen and the terminal-only state around
//! it: grid selection and scrolling, the open dialog and the status message.

use std::time::Instant;

use chrono::NaiveDate;

use crate::config::Settings;
use crate::entry::SubmitOutcome;
use crate::screen::MainScreen;
use crate::storage::MemoryStore;

use super::dialogs::date::parse_date_triple;
use super::host::TuiHost;
use super::widgets::{Notification, PendingUndo, TextInput};

/// Number of columns in the category grid
pub const GRID_COLUMNS: usize = 4;

/// The screen as hosted by the terminal
pub type TuiScreen = MainScreen<MemoryStore, TuiHost>;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    Date,
    /// Read-only summary for a date
    Report(NaiveDate),
}

/// Main application state
pub struct App {
    pub screen: TuiScreen,

    /// Whether the app should quit
    pub should_quit: bool,

    pub active_dialog: ActiveDialog,

    /// Selected cell in the category grid
    pub selected_category_index: usize,

    /// First visible grid row
    pub scroll_offset: usize,

    /// Grid rows that fit on screen, as of the last render
    pub visible_rows: usize,

    pub date_input: TextInput,

    /// Status message to display
    pub status_message: Option<Notification>,

    pub currency_symbol: String,
    pub long_date_format: String,
}

impl App {
    pub fn new(screen: TuiScreen, settings: &Settings) -> Self {
        let mut app = Self {
            screen,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            selected_category_index: 0,
            scroll_offset: 0,
            visible_rows: 1,
            date_input: TextInput::date(),
            status_message: None,
            currency_symbol: settings.currency_symbol.clone(),
            long_date_format: settings.long_date_format.clone(),
        };
        app.sync_grid_viewport(usize::MAX);
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, notification: Notification) {
        self.status_message = Some(notification);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if dialog == ActiveDialog::Date {
            let current = self.screen.selected_date().format("%Y-%m-%d").to_string();
            self.date_input.set_value(&current);
        }
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn category_count(&self) -> usize {
        self.screen.host().categories().len()
    }

    /// Total rows in the category grid
    pub fn grid_rows(&self) -> usize {
        self.category_count().div_ceil(GRID_COLUMNS)
    }

    /// How many rows the grid can scroll
    pub fn scroll_range(&self) -> usize {
        self.grid_rows().saturating_sub(self.visible_rows)
    }

    pub fn move_left(&mut self) {
        if self.selected_category_index % GRID_COLUMNS > 0 {
            self.select(self.selected_category_index - 1);
        }
    }

    pub fn move_right(&mut self) {
        let next = self.selected_category_index + 1;
        if next % GRID_COLUMNS != 0 {
            self.select(next);
        }
    }

    pub fn move_up(&mut self) {
        if let Some(index) = self.selected_category_index.checked_sub(GRID_COLUMNS) {
            self.select(index);
        }
    }

    pub fn move_down(&mut self) {
        self.select(self.selected_category_index + GRID_COLUMNS);
    }

    /// Record the typed amount against the selected category
    pub fn tap_selected(&mut self) {
        match self.screen.tap_category(self.selected_category_index) {
            Ok(SubmitOutcome::Recorded(_)) => self.clear_status(),
            Ok(SubmitOutcome::Rejected) => {}
            Ok(SubmitOutcome::Busy) => self.set_status(Notification::info("Still saving...")),
            Err(e) => self.set_status(Notification::error(e.to_string())),
        }
    }

    /// Reverse the most recent expense that is still inside its undo window
    pub fn undo_newest(&mut self) {
        let Some(PendingUndo { notification, token }) = self.screen.host_mut().take_newest_undo()
        else {
            self.set_status(Notification::info("Nothing to undo"));
            return;
        };

        match self.screen.reverse(token) {
            Ok(()) => self.set_status(Notification::info("Expense removed")),
            Err(failed) => {
                self.set_status(Notification::error(failed.error.to_string()));
                if let Some(token) = failed.token {
                    self.screen
                        .host_mut()
                        .restore_undo(PendingUndo { notification, token });
                }
            }
        }
    }

    /// Apply the date typed in the date dialog
    pub fn submit_date(&mut self) {
        let Some((year, month, day)) = parse_date_triple(self.date_input.value()) else {
            self.set_status(Notification::error("Use YYYY-MM-DD"));
            return;
        };

        match self.screen.confirm_date(year, month, day) {
            Ok(()) => {
                self.clear_status();
                self.close_dialog();
            }
            Err(e) => self.set_status(Notification::error(e.to_string())),
        }
    }

    /// Ask the screen for its report and show it if it navigated
    pub fn open_report(&mut self) {
        self.screen.open_report();
        if let Some(date) = self.screen.host_mut().take_report_request() {
            self.open_dialog(ActiveDialog::Report(date));
        }
    }

    /// Periodic housekeeping: close undo windows and stale status messages
    pub fn on_tick(&mut self, now: Instant) {
        self.screen.host_mut().expire_confirmations(now);
        if self
            .status_message
            .as_ref()
            .is_some_and(|status| status.is_expired_at(now))
        {
            self.clear_status();
        }
    }

    /// Layout callback from the grid view.
    ///
    /// Keeps the selection on screen and feeds the scroll position to the
    /// collapsing title bar.
    pub fn sync_grid_viewport(&mut self, visible_rows: usize) {
        self.visible_rows = visible_rows.max(1);

        let row = self.selected_category_index / GRID_COLUMNS;
        if row < self.scroll_offset {
            self.scroll_offset = row;
        } else if row >= self.scroll_offset.saturating_add(self.visible_rows) {
            self.scroll_offset = row + 1 - self.visible_rows;
        }
        self.scroll_offset = self.scroll_offset.min(self.scroll_range());

        let range = i32::try_from(self.scroll_range()).unwrap_or(i32::MAX);
        let offset = i32::try_from(self.scroll_offset).unwrap_or(i32::MAX);
        self.screen.on_offset_changed(-offset, range);
    }

    fn select(&mut self, index: usize) {
        if index < self.category_count() {
            self.selected_category_index = index;
            self.sync_grid_viewport(self.visible_rows);
        }
    }
}
