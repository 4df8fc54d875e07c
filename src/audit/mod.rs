//! Audit logging system for Outlay
//!
//! Every expense the screen records, and every expense it reverses, is
//! appended to a line-delimited JSON log (JSONL). This is the application's
//! structured log: one self-describing object per event, flushed on write.
//!
//! # Example
//!
//! ```rust,ignore
//! use outlay::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(
//!     EntityType::Expense,
//!     expense.id.to_string(),
//!     Some(expense.category_title.clone()),
//!     &expense,
//! ))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
