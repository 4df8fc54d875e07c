//! Outlay - quick expense entry for the terminal
//!
//! This library provides the core of the Outlay expense entry screen: a
//! numeric keypad with validation, an entry coordinator that records expenses
//! with a single-use undo, and a collapsing title bar driven by scroll
//! position. The terminal UI in `tui` is one host for these pieces.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `numpad`: Keypad keys, validators and the keypad controller
//! - `entry`: Expense entry coordinator and undo tokens
//! - `collapse`: Title-bar visibility with a single threshold
//! - `screen`: The screen controller composing the three above
//! - `host`: Collaborator traits (storage, presentation, navigation)
//! - `models`: Categories, expenses and summaries
//! - `storage`: In-memory collaborator
//! - `audit`: Audit logging system
//! - `config`: Configuration and path management
//! - `display`: Date and amount formatting
//! - `error`: Custom error types
//! - `tui`: Terminal host built on ratatui
//!
//! # Example
//!
//! ```rust,ignore
//! use outlay::config::{OutlayPaths, Settings};
//! use outlay::screen::MainScreen;
//! use outlay::storage::MemoryStore;
//!
//! let paths = OutlayPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut screen = MainScreen::new(MemoryStore::from_settings(&settings), host, &settings);
//! screen.resume()?;
//! ```

pub mod audit;
pub mod collapse;
pub mod config;
pub mod display;
pub mod entry;
pub mod error;
pub mod host;
pub mod models;
pub mod numpad;
pub mod screen;
pub mod storage;
pub mod tui;

pub use error::OutlayError;
