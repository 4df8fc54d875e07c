//! Display formatting for terminal output
//!
//! Date labels, amounts, category listings and summary lines shared by the
//! CLI and the TUI.

pub mod category;
pub mod date;
pub mod summary;

pub use category::format_category_list;
pub use date::{to_long_string, today};
pub use summary::{format_amount, format_summary_lines};
