#![doc(test(attr(deny(warnings))))]

//! FarmLedger offers foundational crop, expense, and income tracking
//! primitives plus the session and profit/loss queries that power the
//! dashboard and data-entry surfaces built on top.

pub mod app;
pub mod utils;

pub use farmledger_config as config;
pub use farmledger_core as core;
pub use farmledger_domain as domain;

pub use app::App;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("FarmLedger tracing initialized.");
    });
}
