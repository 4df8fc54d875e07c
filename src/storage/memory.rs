//! In-memory storage collaborator
//!
//! Holds categories and expenses for the lifetime of the process. Every create
//! and delete is written to the audit log first when one is attached, so the
//! log never records an expense that the store rejected.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::Settings;
use crate::error::{OutlayError, OutlayResult};
use crate::host::ExpenseRepository;
use crate::models::{Category, Expense, ExpenseId, NewExpense, Summary};

/// Process-local category and expense store
#[derive(Debug, Default)]
pub struct MemoryStore {
    categories: Vec<Category>,
    expenses: Vec<Expense>,
    audit: Option<AuditLogger>,
}

impl MemoryStore {
    /// Create a store with the given categories, sorted by `sort_order`
    pub fn new(mut categories: Vec<Category>) -> Self {
        categories.sort_by_key(|c| c.sort_order);
        Self {
            categories,
            expenses: Vec::new(),
            audit: None,
        }
    }

    /// Create a store seeded from the settings' category list
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(Category::from_seeds(&settings.categories))
    }

    /// Attach an audit logger
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Expenses in creation order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    fn log(&self, entry: AuditEntry) -> OutlayResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&entry),
            None => Ok(()),
        }
    }
}

impl ExpenseRepository for MemoryStore {
    fn create_expense(&mut self, expense: &NewExpense) -> OutlayResult<ExpenseId> {
        if expense.amount <= Decimal::ZERO {
            return Err(OutlayError::Validation(format!(
                "Expense amount must be positive, got {}",
                expense.amount
            )));
        }
        if !self.categories.iter().any(|c| c.id == expense.category_id) {
            return Err(OutlayError::category_not_found(expense.category_title.clone()));
        }

        let stored = Expense::from_new(ExpenseId::new(), expense.clone());
        self.log(AuditEntry::create(
            EntityType::Expense,
            stored.id.as_uuid().to_string(),
            Some(stored.category_title.clone()),
            &stored,
        ))?;

        let id = stored.id;
        self.expenses.push(stored);
        Ok(id)
    }

    fn delete_expense(&mut self, id: ExpenseId) -> OutlayResult<()> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| OutlayError::expense_not_found(id.to_string()))?;

        let expense = &self.expenses[index];
        self.log(AuditEntry::delete(
            EntityType::Expense,
            expense.id.as_uuid().to_string(),
            Some(expense.category_title.clone()),
            expense,
        ))?;

        self.expenses.remove(index);
        Ok(())
    }

    fn load_categories(&self) -> OutlayResult<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn load_summary(&self, date: NaiveDate) -> OutlayResult<Summary> {
        let mut summary = Summary::empty(date);
        let in_month = self.expenses.iter().filter(|e| {
            e.reported_at <= date
                && e.reported_at.year() == date.year()
                && e.reported_at.month() == date.month()
        });

        for expense in in_month {
            summary.month_total += expense.amount;
            summary.expense_count += 1;
            if expense.reported_at == date {
                summary.day_total += expense.amount;
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use std::str::FromStr;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn amount(text: &str) -> Decimal {
        Decimal::from_str(text).unwrap()
    }

    fn store_with_food() -> (MemoryStore, Category) {
        let food = Category::new("Food", "F");
        (MemoryStore::new(vec![food.clone()]), food)
    }

    #[test]
    fn test_categories_are_sorted() {
        let store = MemoryStore::new(vec![
            Category::with_sort_order("B", "", 2),
            Category::with_sort_order("A", "", 1),
        ]);
        let titles: Vec<_> = store
            .load_categories()
            .unwrap()
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_from_settings() {
        let store = MemoryStore::from_settings(&Settings::default());
        assert_eq!(store.load_categories().unwrap()[0].title, "Food");
    }

    #[test]
    fn test_create_and_delete() {
        let (mut store, food) = store_with_food();
        let id = store
            .create_expense(&NewExpense::new(&food, amount("2.5"), date(2024, 1, 3)))
            .unwrap();

        assert_eq!(store.get(id).unwrap().amount, amount("2.5"));
        store.delete_expense(id).unwrap();
        assert_eq!(store.expense_count(), 0);
        assert!(store.delete_expense(id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_rejects_non_positive_and_unknown_category() {
        let (mut store, food) = store_with_food();
        let zero = NewExpense::new(&food, Decimal::ZERO, date(2024, 1, 3));
        assert!(store.create_expense(&zero).unwrap_err().is_validation());

        let stranger = Category::new("Travel", "");
        let unknown = NewExpense::new(&stranger, amount("1"), date(2024, 1, 3));
        assert!(store.create_expense(&unknown).unwrap_err().is_not_found());
        assert_eq!(store.expense_count(), 0);
    }

    #[test]
    fn test_summary_up_to_date() {
        let (mut store, food) = store_with_food();
        for (text, day) in [("1.10", date(2024, 2, 1)), ("2", date(2024, 2, 10)), ("3", date(2024, 2, 10)), ("4", date(2024, 2, 11)), ("5", date(2024, 1, 31))] {
            store.create_expense(&NewExpense::new(&food, amount(text), day)).unwrap();
        }

        let summary = store.load_summary(date(2024, 2, 10)).unwrap();
        assert_eq!(summary.day_total, amount("5"));
        assert_eq!(summary.month_total, amount("6.10"));
        assert_eq!(summary.expense_count, 3);
    }

    #[test]
    fn test_audit_log_records_create_and_delete() {
        let temp = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp.path().join("audit.log"));
        let food = Category::new("Food", "F");
        let mut store = MemoryStore::new(vec![food.clone()]).with_audit(logger.clone());

        let id = store
            .create_expense(&NewExpense::new(&food, amount("7"), date(2024, 1, 3)))
            .unwrap();
        store.delete_expense(id).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[1].operation, Operation::Delete);
        assert_eq!(entries[0].entity_id, id.as_uuid().to_string());
        assert_eq!(entries[1].entity_name.as_deref(), Some("Food"));
    }
}
