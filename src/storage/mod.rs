//! Storage collaborators
//!
//! Expenses are kept in memory for the life of the session; the audit log is
//! the only thing written to disk.

pub mod memory;

pub use memory::MemoryStore;
