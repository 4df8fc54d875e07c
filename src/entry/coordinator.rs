//! Expense entry coordinator
//!
//! Idle -> Submitting -> Idle, with the undo window represented by the
//! `UndoToken` handed to the presentation host. Submissions are independent:
//! an outstanding token never blocks the next tap, and reversing one token
//! never touches another expense.

use chrono::NaiveDate;

use crate::display::today;
use crate::error::OutlayResult;
use crate::host::{ExpenseRepository, PresentationHost};
use crate::models::{Category, ExpenseId, NewExpense};
use crate::numpad::{parse_amount, NumpadController, NumpadEditable, NumpadValidator, TextObserver};

use super::undo::{Confirmation, UndoFailed, UndoToken};

/// Coordinator state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryState {
    #[default]
    Idle,
    /// A create/refresh pair is in flight
    Submitting,
}

/// What a category tap did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The expense was stored and a confirmation shown
    Recorded(ExpenseId),
    /// The amount failed full validation; nothing was stored
    Rejected,
    /// A previous submission has not finished
    Busy,
}

/// Orchestrates validation, creation, undo and summary refresh
#[derive(Debug, Clone)]
pub struct ExpenseEntryCoordinator {
    state: EntryState,
    currency_symbol: String,
    clock: fn() -> NaiveDate,
}

impl ExpenseEntryCoordinator {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            state: EntryState::Idle,
            currency_symbol: currency_symbol.into(),
            clock: today,
        }
    }

    /// Replace the source of "today" used for summary refreshes
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    pub fn state(&self) -> EntryState {
        self.state
    }

    /// Handle a category tap.
    ///
    /// An invalid amount shakes the field and leaves everything untouched.
    /// A storage failure while creating leaves the buffer as it was.
    pub fn submit<E, V, O, R, H>(
        &mut self,
        category: &Category,
        numpad: &mut NumpadController<E, V, O>,
        selected_date: NaiveDate,
        repo: &mut R,
        host: &mut H,
    ) -> OutlayResult<SubmitOutcome>
    where
        E: NumpadEditable,
        V: NumpadValidator,
        O: TextObserver,
        R: ExpenseRepository + ?Sized,
        H: PresentationHost + ?Sized,
    {
        if self.state != EntryState::Idle {
            return Ok(SubmitOutcome::Busy);
        }

        let amount_text = numpad.text();
        let amount = match parse_amount(&amount_text) {
            Some(amount) if numpad.is_valid() => amount,
            _ => {
                numpad.reject_current();
                return Ok(SubmitOutcome::Rejected);
            }
        };

        self.state = EntryState::Submitting;
        let result = self.record(
            NewExpense::new(category, amount, selected_date),
            amount_text,
            numpad,
            repo,
            host,
        );
        self.state = EntryState::Idle;
        result
    }

    /// Reverse a recorded expense and put its amount back in the buffer.
    ///
    /// Whatever was typed since the submission is overwritten. If the
    /// repository refuses the delete, the token comes back inside the error
    /// and nothing else changes.
    pub fn reverse<E, V, O, R, H>(
        &mut self,
        token: UndoToken,
        numpad: &mut NumpadController<E, V, O>,
        repo: &mut R,
        host: &mut H,
    ) -> Result<(), UndoFailed>
    where
        E: NumpadEditable,
        V: NumpadValidator,
        O: TextObserver,
        R: ExpenseRepository + ?Sized,
        H: PresentationHost + ?Sized,
    {
        if let Err(error) = repo.delete_expense(token.expense_id()) {
            return Err(UndoFailed {
                error,
                token: Some(token),
            });
        }

        let amount_text = token.into_amount_text();
        let refreshed = self.refresh_summary(repo, host);
        numpad.set_text(&amount_text);
        refreshed.map_err(|error| UndoFailed { error, token: None })
    }

    fn record<E, V, O, R, H>(
        &self,
        expense: NewExpense,
        amount_text: String,
        numpad: &mut NumpadController<E, V, O>,
        repo: &mut R,
        host: &mut H,
    ) -> OutlayResult<SubmitOutcome>
    where
        E: NumpadEditable,
        V: NumpadValidator,
        O: TextObserver,
        R: ExpenseRepository + ?Sized,
        H: PresentationHost + ?Sized,
    {
        let expense_id = repo.create_expense(&expense)?;
        numpad.set_text("");

        let refreshed = self.refresh_summary(repo, host);

        let message = format!(
            "Recorded {}{} for {}",
            self.currency_symbol, expense.amount, expense.category_title
        );
        host.show_confirmation(Confirmation {
            message,
            token: UndoToken::new(expense_id, amount_text),
        });

        refreshed?;
        Ok(SubmitOutcome::Recorded(expense_id))
    }

    fn refresh_summary<R, H>(&self, repo: &R, host: &mut H) -> OutlayResult<()>
    where
        R: ExpenseRepository + ?Sized,
        H: PresentationHost + ?Sized,
    {
        let summary = repo.load_summary((self.clock)())?;
        host.display_summary(summary);
        Ok(())
    }
}
