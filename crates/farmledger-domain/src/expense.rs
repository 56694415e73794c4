//! Domain types representing farming expenses.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Amounted, Displayable, Identifiable, OwnedByUser};

/// A money-out record, optionally attributed to a single crop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_id: Option<Uuid>,
    pub category: ExpenseCategory,
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
    /// URL of an uploaded receipt image, once receipt handling exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new expense. Identifier, owner, and
/// timestamps are assigned by [`Expense::from_new`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewExpense {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_id: Option<Uuid>,
    pub category: ExpenseCategory,
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
}

impl Expense {
    /// Builds a stored record from caller input, stamping identity, owner,
    /// and creation/update timestamps.
    pub fn from_new(user_id: Uuid, new: NewExpense) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            crop_id: new.crop_id,
            category: new.category,
            amount: new.amount,
            description: new.description,
            date: new.date,
            receipt: new.receipt,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl OwnedByUser for Expense {
    fn user_id(&self) -> Uuid {
        self.user_id
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        format!("{} ({})", self.description, self.category)
    }
}

/// Spending buckets for farm expenses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Seed,
    Fertilizer,
    Pesticide,
    Labor,
    Equipment,
    Others,
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpenseCategory::Seed => "Seed",
            ExpenseCategory::Fertilizer => "Fertilizer",
            ExpenseCategory::Pesticide => "Pesticide",
            ExpenseCategory::Labor => "Labor",
            ExpenseCategory::Equipment => "Equipment",
            ExpenseCategory::Others => "Others",
        };
        f.write_str(label)
    }
}
