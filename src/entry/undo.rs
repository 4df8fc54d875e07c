//! Single-use reversal of a just-recorded expense
//!
//! An `UndoToken` is created only by the coordinator and consumed by
//! `ExpenseEntryCoordinator::reverse`, so an expense can be reversed at most
//! once. Dropping the token is how the undo window closes. A reversal that
//! fails before anything was deleted hands the token back.

use std::fmt;

use thiserror::Error;

use crate::error::OutlayError;
use crate::models::ExpenseId;

/// Reversal handle for one recorded expense
#[derive(Debug, PartialEq, Eq)]
pub struct UndoToken {
    expense_id: ExpenseId,
    amount_text: String,
}

impl UndoToken {
    pub(crate) fn new(expense_id: ExpenseId, amount_text: String) -> Self {
        Self {
            expense_id,
            amount_text,
        }
    }

    /// The expense this token reverses
    pub fn expense_id(&self) -> ExpenseId {
        self.expense_id
    }

    /// The amount exactly as it was typed before submission
    pub fn amount_text(&self) -> &str {
        &self.amount_text
    }

    pub(crate) fn into_amount_text(self) -> String {
        self.amount_text
    }
}

/// A reversal that did not complete
#[derive(Error, Debug)]
#[error("{error}")]
pub struct UndoFailed {
    #[source]
    pub error: OutlayError,
    /// Still usable when the expense was not deleted
    pub token: Option<UndoToken>,
}

impl From<UndoFailed> for OutlayError {
    fn from(failed: UndoFailed) -> Self {
        failed.error
    }
}

/// Message plus undo action handed to the presentation host
#[derive(Debug, PartialEq, Eq)]
pub struct Confirmation {
    pub message: String,
    pub token: UndoToken,
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
