//! Domain types representing harvest sales.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Amounted, Displayable, Identifiable, OwnedByUser};

/// A money-in record from selling produce of a specific crop.
///
/// `amount` is always `quantity * price_per_unit`; callers never supply it
/// directly (see [`NewIncome`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Income {
    pub id: Uuid,
    pub user_id: Uuid,
    pub crop_id: Uuid,
    pub amount: f64,
    pub quantity: f64,
    pub unit: String,
    pub price_per_unit: f64,
    pub buyer: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new income record. The stored `amount` is
/// derived, never accepted as input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewIncome {
    pub crop_id: Uuid,
    pub quantity: f64,
    pub unit: String,
    pub price_per_unit: f64,
    pub buyer: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Income {
    /// Builds a stored record from caller input, deriving `amount` from
    /// quantity and price and stamping identity, owner, and timestamps.
    pub fn from_new(user_id: Uuid, new: NewIncome) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            crop_id: new.crop_id,
            amount: new.quantity * new.price_per_unit,
            quantity: new.quantity,
            unit: new.unit,
            price_per_unit: new.price_per_unit,
            buyer: new.buyer,
            date: new.date,
            notes: new.notes,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Identifiable for Income {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl OwnedByUser for Income {
    fn user_id(&self) -> Uuid {
        self.user_id
    }
}

impl Amounted for Income {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Income {
    fn display_label(&self) -> String {
        format!("{} {} to {}", self.quantity, self.unit, self.buyer)
    }
}
