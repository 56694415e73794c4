//! The in-memory holder of crop, expense, and income collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{crop::Crop, expense::Expense, income::Income};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Session-scoped collections of financial records plus their aggregate
/// queries.
///
/// Collections are insertion-ordered and append-only: no record is mutated
/// or removed once stored. All aggregate queries are linear scans, which is
/// fine at single-session scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmLedger {
    #[serde(default)]
    pub crops: Vec<Crop>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub incomes: Vec<Income>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "FarmLedger::schema_version_default")]
    pub schema_version: u8,
}

impl FarmLedger {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            crops: Vec::new(),
            expenses: Vec::new(),
            incomes: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_crop(&mut self, crop: Crop) -> Uuid {
        let id = crop.id;
        self.crops.push(crop);
        self.touch();
        id
    }

    pub fn add_expense(&mut self, expense: Expense) -> Uuid {
        let id = expense.id;
        self.expenses.push(expense);
        self.touch();
        id
    }

    pub fn add_income(&mut self, income: Income) -> Uuid {
        let id = income.id;
        self.incomes.push(income);
        self.touch();
        id
    }

    pub fn crop(&self, id: Uuid) -> Option<&Crop> {
        self.crops.iter().find(|crop| crop.id == id)
    }

    pub fn crop_count(&self) -> usize {
        self.crops.len()
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    pub fn income_count(&self) -> usize {
        self.incomes.len()
    }

    /// Sums expense amounts, optionally narrowed to a single crop. Returns
    /// 0.0 for an empty or non-matching set.
    pub fn total_expenses(&self, crop: Option<Uuid>) -> f64 {
        self.expenses
            .iter()
            .filter(|expense| crop.is_none() || expense.crop_id == crop)
            .map(|expense| expense.amount)
            .sum()
    }

    /// Sums income amounts, optionally narrowed to a single crop. Returns
    /// 0.0 for an empty or non-matching set.
    pub fn total_income(&self, crop: Option<Uuid>) -> f64 {
        self.incomes
            .iter()
            .filter(|income| crop.is_none() || Some(income.crop_id) == crop)
            .map(|income| income.amount)
            .sum()
    }

    /// Total income minus total expenses, optionally scoped to one crop.
    pub fn profit(&self, crop: Option<Uuid>) -> f64 {
        self.total_income(crop) - self.total_expenses(crop)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

impl Default for FarmLedger {
    fn default() -> Self {
        Self::new()
    }
}
