//! Terminal User Interface module
//!
//! Hosts the entry screen in the terminal using ratatui: the app state, an
//! event thread, the key handler, views, widgets and dialogs.

pub mod app;
pub mod event;
pub mod handler;
pub mod host;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use host::TuiHost;
pub use terminal::run_tui;
