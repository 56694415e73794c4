//! Business logic for recording harvest income.

use farmledger_domain::{FarmLedger, Income, NewIncome, User};
use tracing::debug;

use crate::CoreResult;

/// Provides mutations for [`Income`] records on behalf of an authenticated
/// user.
///
/// The stored amount is derived from quantity and price by construction, so
/// the `amount == quantity * price_per_unit` invariant cannot be violated.
/// Whether `crop_id` resolves to a stored crop is left to the data-entry
/// layer; [`crate::storage::ledger_warnings`] surfaces dangling references.
pub struct IncomeService;

impl IncomeService {
    /// Stamps ownership and identity onto the input, derives the amount,
    /// and appends the income. Returns the stored record.
    pub fn add(ledger: &mut FarmLedger, owner: &User, new: NewIncome) -> CoreResult<Income> {
        let income = Income::from_new(owner.id, new);
        debug!(
            income = %income.id,
            crop = %income.crop_id,
            amount = income.amount,
            "income recorded"
        );
        let stored = income.clone();
        ledger.add_income(income);
        Ok(stored)
    }

    /// Returns a snapshot of the incomes currently tracked in the ledger.
    pub fn list(ledger: &FarmLedger) -> Vec<&Income> {
        ledger.incomes.iter().collect()
    }
}
