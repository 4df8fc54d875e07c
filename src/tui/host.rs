//! Terminal implementation of the screen's presentation collaborators

use std::time::{Duration, Instant};

use chrono::NaiveDate;

use crate::entry::Confirmation;
use crate::host::{Navigator, PresentationHost};
use crate::models::{Category, Summary};

use super::widgets::{Notification, PendingUndo, UndoQueue};

/// Holds what the screen last pushed, for the views to draw
#[derive(Debug)]
pub struct TuiHost {
    summary: Option<Summary>,
    categories: Vec<Category>,
    undo: UndoQueue,
    undo_window: Duration,
    report_request: Option<NaiveDate>,
}

impl TuiHost {
    pub fn new(undo_window: Duration) -> Self {
        Self {
            summary: None,
            categories: Vec::new(),
            undo: UndoQueue::new(),
            undo_window,
            report_request: None,
        }
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The newest reversible confirmation, if any
    pub fn newest_confirmation(&self) -> Option<&Notification> {
        self.undo.newest()
    }

    pub fn pending_undo_count(&self) -> usize {
        self.undo.len()
    }

    /// The newest confirmation still inside its window
    pub fn take_newest_undo(&mut self) -> Option<PendingUndo> {
        self.undo.take_newest()
    }

    /// Requeue a confirmation whose undo failed
    pub fn restore_undo(&mut self, pending: PendingUndo) {
        self.undo.restore(pending);
    }

    /// Close the undo window on expired confirmations
    pub fn expire_confirmations(&mut self, now: Instant) -> usize {
        self.undo.expire(now)
    }

    /// A report the screen asked to open since the last call
    pub fn take_report_request(&mut self) -> Option<NaiveDate> {
        self.report_request.take()
    }
}

impl PresentationHost for TuiHost {
    fn display_summary(&mut self, summary: Summary) {
        self.summary = Some(summary);
    }

    fn display_categories(&mut self, categories: &[Category]) {
        self.categories = categories.to_vec();
    }

    fn show_confirmation(&mut self, confirmation: Confirmation) {
        self.undo.push(confirmation, self.undo_window);
    }
}

impl Navigator for TuiHost {
    fn go_to_report(&mut self, date: NaiveDate) {
        self.report_request = Some(date);
    }
}
