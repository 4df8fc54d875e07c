//! Core data models for Outlay
//!
//! Categories, expenses and the summary aggregate exchanged between the entry
//! screen and its storage collaborator.

pub mod category;
pub mod expense;
pub mod ids;
pub mod summary;

pub use category::{Category, CategoryValidationError};
pub use expense::{Expense, NewExpense};
pub use ids::{CategoryId, ExpenseId};
pub use summary::Summary;
