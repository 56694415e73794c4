use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Stores user-configurable application preferences and metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default = "Config::default_area_unit_value")]
    pub default_area_unit: String,
    #[serde(default = "Config::default_season_value")]
    pub default_season: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_opened_ledger: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for ledgers. Defaults to
    /// `~/Documents/FarmLedgers`.
    pub default_ledger_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-IN".into(),
            currency: "INR".into(),
            default_area_unit: Self::default_area_unit_value(),
            default_season: Self::default_season_value(),
            last_opened_ledger: None,
            default_ledger_root: None,
        }
    }
}

impl Config {
    pub fn default_area_unit_value() -> String {
        "acre".into()
    }

    pub fn default_season_value() -> String {
        "kharif".into()
    }

    pub fn resolve_default_ledger_root(&self) -> PathBuf {
        if let Some(path) = &self.default_ledger_root {
            return path.clone();
        }

        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("FarmLedgers")
    }
}
