//! Domain types representing planted crops.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Displayable, Identifiable, OwnedByUser, Season};

/// A planted crop tracked across its growing lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Crop {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub area: f64,
    pub area_unit: String,
    pub planting_date: NaiveDate,
    pub season: Season,
    pub status: CropStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_harvest_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new crop. Identifier, owner, and timestamps
/// are assigned by [`Crop::from_new`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCrop {
    pub name: String,
    pub area: f64,
    pub area_unit: String,
    pub planting_date: NaiveDate,
    pub season: Season,
    pub status: CropStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_harvest_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Crop {
    /// Builds a stored record from caller input, stamping identity, owner,
    /// and creation/update timestamps.
    pub fn from_new(user_id: Uuid, new: NewCrop) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: new.name,
            area: new.area,
            area_unit: new.area_unit,
            planting_date: new.planting_date,
            season: new.season,
            status: new.status,
            expected_harvest_date: new.expected_harvest_date,
            notes: new.notes,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Identifiable for Crop {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl OwnedByUser for Crop {
    fn user_id(&self) -> Uuid {
        self.user_id
    }
}

impl Displayable for Crop {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.season)
    }
}

/// Lifecycle states a crop can be in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CropStatus {
    #[default]
    Active,
    Harvested,
    Failed,
}

impl fmt::Display for CropStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CropStatus::Active => "Active",
            CropStatus::Harvested => "Harvested",
            CropStatus::Failed => "Failed",
        };
        f.write_str(label)
    }
}
