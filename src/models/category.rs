//! Spending categories shown in the quick-entry grid
//!
//! Categories are read-only from the screen's point of view; the storage
//! collaborator owns them and hands out ordered snapshots.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use crate::config::CategorySeed;

/// A spending category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,

    /// Display title, used in confirmations ("Recorded $5 for Food")
    pub title: String,

    /// Short glyph rendered next to the title in the grid
    #[serde(default)]
    pub icon: String,

    /// Position in the grid
    pub sort_order: i32,
}

impl Category {
    /// Create a new category
    pub fn new(title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            title: title.into(),
            icon: icon.into(),
            sort_order: 0,
        }
    }

    /// Create a new category with a specific sort order
    pub fn with_sort_order(title: impl Into<String>, icon: impl Into<String>, sort_order: i32) -> Self {
        let mut category = Self::new(title, icon);
        category.sort_order = sort_order;
        category
    }

    /// Build the ordered category list declared in the settings file
    pub fn from_seeds(seeds: &[CategorySeed]) -> Vec<Self> {
        seeds
            .iter()
            .enumerate()
            .map(|(i, seed)| Self::with_sort_order(seed.title.clone(), seed.icon.clone(), i as i32))
            .collect()
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.title.trim().is_empty() {
            return Err(CategoryValidationError::EmptyTitle);
        }

        if self.title.len() > 50 {
            return Err(CategoryValidationError::TitleTooLong(self.title.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyTitle,
    TitleTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Category title cannot be empty"),
            Self::TitleTooLong(len) => {
                write!(f, "Category title too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_seeds_keeps_order() {
        let seeds = vec![
            CategorySeed::new("Food", "F"),
            CategorySeed::new("Transport", "T"),
            CategorySeed::new("Fun", "*"),
        ];

        let categories = Category::from_seeds(&seeds);
        let titles: Vec<_> = categories.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Food", "Transport", "Fun"]);
        assert_eq!(categories[2].sort_order, 2);
        assert_eq!(categories[1].icon, "T");
    }

    #[test]
    fn test_validation() {
        assert!(Category::new("Food", "F").validate().is_ok());
        assert_eq!(
            Category::new("   ", "").validate(),
            Err(CategoryValidationError::EmptyTitle)
        );
        assert_eq!(
            Category::new("x".repeat(51), "").validate(),
            Err(CategoryValidationError::TitleTooLong(51))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::new("Health", "H").to_string(), "Health");
    }
}
