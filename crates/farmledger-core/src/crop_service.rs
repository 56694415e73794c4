//! Business logic for recording crops.

use farmledger_domain::{Crop, FarmLedger, NewCrop, User};
use tracing::debug;

use crate::CoreResult;

/// Provides mutations for [`Crop`] records on behalf of an authenticated
/// user.
pub struct CropService;

impl CropService {
    /// Stamps ownership and identity onto the input and appends the crop.
    /// Returns the stored record.
    pub fn add(ledger: &mut FarmLedger, owner: &User, new: NewCrop) -> CoreResult<Crop> {
        let crop = Crop::from_new(owner.id, new);
        debug!(crop = %crop.id, name = %crop.name, "crop recorded");
        let stored = crop.clone();
        ledger.add_crop(crop);
        Ok(stored)
    }

    /// Returns a snapshot of the crops currently tracked in the ledger.
    pub fn list(ledger: &FarmLedger) -> Vec<&Crop> {
        ledger.crops.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use farmledger_domain::{CropStatus, Season};

    fn new_crop(name: &str) -> NewCrop {
        NewCrop {
            name: name.into(),
            area: 1.5,
            area_unit: "acre".into(),
            planting_date: NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
            season: Season::Kharif,
            status: CropStatus::Active,
            expected_harvest_date: NaiveDate::from_ymd_opt(2025, 10, 5),
            notes: Some("North field".into()),
        }
    }

    #[test]
    fn add_appends_and_returns_the_stored_record() {
        let mut ledger = FarmLedger::new();
        let owner = User::new().with_email("ravi@example.com");

        let stored = CropService::add(&mut ledger, &owner, new_crop("Rice")).unwrap();
        assert_eq!(stored.user_id, owner.id);
        assert_eq!(ledger.crop_count(), 1);
        assert_eq!(ledger.crop(stored.id).unwrap().name, "Rice");
    }

    #[test]
    fn add_assigns_fresh_identifiers() {
        let mut ledger = FarmLedger::new();
        let owner = User::new();
        let first = CropService::add(&mut ledger, &owner, new_crop("Rice")).unwrap();
        let second = CropService::add(&mut ledger, &owner, new_crop("Rice")).unwrap();
        assert_ne!(first.id, second.id);
    }
}
