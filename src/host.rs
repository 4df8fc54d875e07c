//! Collaborator contracts the entry screen depends on
//!
//! Storage, the presentation surface and navigation are supplied by whoever
//! hosts the screen. The terminal UI provides one set of implementations and
//! the tests provide recording doubles.

use chrono::NaiveDate;

use crate::entry::Confirmation;
use crate::error::OutlayResult;
use crate::models::{Category, ExpenseId, NewExpense, Summary};

/// Storage collaborator for categories, expenses and summaries
pub trait ExpenseRepository {
    /// Store a new expense and return its assigned id
    fn create_expense(&mut self, expense: &NewExpense) -> OutlayResult<ExpenseId>;

    /// Remove a previously created expense
    fn delete_expense(&mut self, id: ExpenseId) -> OutlayResult<()>;

    /// Categories in display order
    fn load_categories(&self) -> OutlayResult<Vec<Category>>;

    /// Summary of spending up to `date`
    fn load_summary(&self, date: NaiveDate) -> OutlayResult<Summary>;
}

/// Surface that shows the screen's results
pub trait PresentationHost {
    fn display_summary(&mut self, summary: Summary);

    fn display_categories(&mut self, categories: &[Category]);

    /// Show a transient confirmation carrying an undo token. Dropping the
    /// confirmation without reversing commits the expense.
    fn show_confirmation(&mut self, confirmation: Confirmation);
}

/// Navigation away from the entry screen
pub trait Navigator {
    fn go_to_report(&mut self, date: NaiveDate);
}
