//! Configuration module for Outlay
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence (currency, date format, undo window, categories)

pub mod paths;
pub mod settings;

pub use paths::OutlayPaths;
pub use settings::{CategorySeed, Settings};
