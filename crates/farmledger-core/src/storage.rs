//! Persistence seam for ledgers.

use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use farmledger_domain::FarmLedger;

use crate::CoreError;

/// Abstraction over persistence backends capable of storing ledgers.
///
/// The current scope ships only [`MemoryLedgerStorage`]; a real backend
/// slots in behind the same trait without touching the callers.
pub trait LedgerStorage: Send + Sync {
    fn save_ledger(&self, name: &str, ledger: &FarmLedger) -> Result<(), CoreError>;
    fn load_ledger(&self, name: &str) -> Result<FarmLedger, CoreError>;
    fn list_ledgers(&self) -> Result<Vec<String>, CoreError>;
    fn delete_ledger(&self, name: &str) -> Result<(), CoreError>;
}

/// In-memory ledger store holding named snapshots for the process lifetime.
///
/// The mutex exists so the store can be shared behind `&self` trait calls;
/// mutations still happen one at a time from UI-event scheduling.
#[derive(Debug, Default)]
pub struct MemoryLedgerStorage {
    ledgers: Mutex<HashMap<String, FarmLedger>>,
}

impl MemoryLedgerStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStorage for MemoryLedgerStorage {
    fn save_ledger(&self, name: &str, ledger: &FarmLedger) -> Result<(), CoreError> {
        let mut ledgers = self.ledgers.lock().expect("ledger store poisoned");
        ledgers.insert(name.to_string(), ledger.clone());
        Ok(())
    }

    fn load_ledger(&self, name: &str) -> Result<FarmLedger, CoreError> {
        let ledgers = self.ledgers.lock().expect("ledger store poisoned");
        ledgers
            .get(name)
            .cloned()
            .ok_or_else(|| CoreError::LedgerNotFound(name.to_string()))
    }

    fn list_ledgers(&self) -> Result<Vec<String>, CoreError> {
        let ledgers = self.ledgers.lock().expect("ledger store poisoned");
        let mut names: Vec<String> = ledgers.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    fn delete_ledger(&self, name: &str) -> Result<(), CoreError> {
        let mut ledgers = self.ledgers.lock().expect("ledger store poisoned");
        if ledgers.remove(name).is_none() {
            return Err(CoreError::LedgerNotFound(name.to_string()));
        }
        Ok(())
    }
}

/// Detects dangling crop references within a ledger snapshot.
///
/// The store does not reject records whose `crop_id` points nowhere; this
/// diagnostic lets callers surface them instead.
pub fn ledger_warnings(ledger: &FarmLedger) -> Vec<String> {
    let crop_ids: HashSet<_> = ledger.crops.iter().map(|crop| crop.id).collect();
    let mut warnings = Vec::new();

    for expense in &ledger.expenses {
        if let Some(crop_id) = expense.crop_id {
            if !crop_ids.contains(&crop_id) {
                warnings.push(format!(
                    "expense {} references unknown crop {}",
                    expense.id, crop_id
                ));
            }
        }
    }
    for income in &ledger.incomes {
        if !crop_ids.contains(&income.crop_id) {
            warnings.push(format!(
                "income {} references unknown crop {}",
                income.id, income.crop_id
            ));
        }
    }
    warnings
}
