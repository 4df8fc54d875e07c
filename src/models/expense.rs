//! Expense model
//!
//! A `NewExpense` is what the entry screen builds from the amount buffer, the
//! tapped category and the selected day. The storage collaborator assigns an
//! id when it accepts one, producing an `Expense`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, ExpenseId};
use super::Category;

/// An expense that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExpense {
    pub category_id: CategoryId,

    /// Title of the category at the time of entry
    pub category_title: String,

    /// Strictly positive amount
    pub amount: Decimal,

    /// Day the expense is reported against
    pub reported_at: NaiveDate,
}

impl NewExpense {
    pub fn new(category: &Category, amount: Decimal, reported_at: NaiveDate) -> Self {
        Self {
            category_id: category.id,
            category_title: category.title.clone(),
            amount,
            reported_at,
        }
    }
}

/// A stored expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub category_id: CategoryId,
    pub category_title: String,
    pub amount: Decimal,
    pub reported_at: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Materialize a new expense under the given id
    pub fn from_new(id: ExpenseId, new: NewExpense) -> Self {
        Self {
            id,
            category_id: new.category_id,
            category_title: new.category_title,
            amount: new.amount,
            reported_at: new.reported_at,
            created_at: Utc::now(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.id, self.reported_at, self.amount, self.category_title
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_new_expense_copies_category() {
        let category = Category::new("Food", "F");
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let new = NewExpense::new(&category, Decimal::from_str("12.50").unwrap(), date);

        assert_eq!(new.category_id, category.id);
        assert_eq!(new.category_title, "Food");
        assert_eq!(new.reported_at, date);
    }

    #[test]
    fn test_from_new_keeps_amount_scale() {
        let category = Category::new("Fun", "*");
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let id = ExpenseId::new();
        let expense = Expense::from_new(
            id,
            NewExpense::new(&category, Decimal::from_str("7.50").unwrap(), date),
        );

        assert_eq!(expense.id, id);
        assert_eq!(expense.amount.to_string(), "7.50");
        assert!(expense.to_string().contains("2024-03-09 7.50 (Fun)"));
    }
}
