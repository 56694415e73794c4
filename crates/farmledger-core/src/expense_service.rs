//! Business logic for recording expenses.

use farmledger_domain::{Expense, FarmLedger, NewExpense, User};
use tracing::debug;

use crate::CoreResult;

/// Provides mutations for [`Expense`] records on behalf of an authenticated
/// user.
///
/// Amounts are stored as supplied; range checks stay with the data-entry
/// layer. Dangling `crop_id` references are surfaced by
/// [`crate::storage::ledger_warnings`] rather than rejected here.
pub struct ExpenseService;

impl ExpenseService {
    /// Stamps ownership and identity onto the input and appends the
    /// expense. Returns the stored record.
    pub fn add(ledger: &mut FarmLedger, owner: &User, new: NewExpense) -> CoreResult<Expense> {
        let expense = Expense::from_new(owner.id, new);
        debug!(
            expense = %expense.id,
            category = %expense.category,
            amount = expense.amount,
            "expense recorded"
        );
        let stored = expense.clone();
        ledger.add_expense(expense);
        Ok(stored)
    }

    /// Returns a snapshot of the expenses currently tracked in the ledger.
    pub fn list(ledger: &FarmLedger) -> Vec<&Expense> {
        ledger.expenses.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use farmledger_domain::ExpenseCategory;

    fn new_expense(category: ExpenseCategory, amount: f64) -> NewExpense {
        NewExpense {
            crop_id: None,
            category,
            amount,
            description: "inputs".into(),
            date: NaiveDate::from_ymd_opt(2025, 6, 21).unwrap(),
            receipt: None,
        }
    }

    #[test]
    fn add_appends_and_stamps_owner() {
        let mut ledger = FarmLedger::new();
        let owner = User::new();
        let stored =
            ExpenseService::add(&mut ledger, &owner, new_expense(ExpenseCategory::Seed, 500.0))
                .unwrap();
        assert_eq!(stored.user_id, owner.id);
        assert_eq!(ledger.expense_count(), 1);
    }

    #[test]
    fn totals_reflect_successive_adds() {
        let mut ledger = FarmLedger::new();
        let owner = User::new();
        ExpenseService::add(&mut ledger, &owner, new_expense(ExpenseCategory::Seed, 500.0))
            .unwrap();
        ExpenseService::add(&mut ledger, &owner, new_expense(ExpenseCategory::Labor, 300.0))
            .unwrap();
        assert!((ledger.total_expenses(None) - 800.0).abs() < f64::EPSILON);
    }
}
