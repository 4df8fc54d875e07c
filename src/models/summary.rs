//! Spending summary pushed to the drawer
//!
//! The screen only asks for a summary and forwards it; what goes into it is
//! the storage collaborator's business.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate of recorded expenses up to a date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// The day this summary was requested for
    pub date: NaiveDate,
    /// Total reported on `date`
    pub day_total: Decimal,
    /// Total reported from the first of the month through `date`
    pub month_total: Decimal,
    /// Number of expenses contributing to `month_total`
    pub expense_count: usize,
}

impl Summary {
    /// A summary with nothing recorded
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            day_total: Decimal::ZERO,
            month_total: Decimal::ZERO,
            expense_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expense_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let summary = Summary::empty(date);
        assert!(summary.is_empty());
        assert_eq!(summary.day_total, Decimal::ZERO);
        assert_eq!(summary.date, date);
    }
}
