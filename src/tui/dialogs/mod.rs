//! Dialog modules for the TUI
//!
//! Contains modal dialogs drawn over the entry screen

pub mod date;
pub mod help;
pub mod report;
