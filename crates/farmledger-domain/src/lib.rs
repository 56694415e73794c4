//! farmledger-domain
//!
//! Pure domain models (FarmLedger, User, Crop, Expense, Income).
//! No I/O, no logging, no storage. Only data types and core enums.

pub mod common;
pub mod crop;
pub mod expense;
pub mod income;
pub mod ledger;
pub mod user;

pub use common::*;
pub use crop::*;
pub use expense::*;
pub use income::*;
pub use ledger::*;
pub use user::*;
