//! Expense entry: submit an amount against a category, with a reversible
//! confirmation.

pub mod coordinator;
pub mod undo;

pub use coordinator::{EntryState, ExpenseEntryCoordinator, SubmitOutcome};
pub use undo::{Confirmation, UndoFailed, UndoToken};
