//! farmledger-core
//!
//! Business logic and services for FarmLedger.
//! Depends on farmledger-domain. No UI, no terminal I/O, no direct disk
//! interactions.

pub mod crop_service;
pub mod error;
pub mod expense_service;
pub mod income_service;
pub mod session;
pub mod storage;
pub mod summary_service;

pub use crop_service::*;
pub use error::{CoreError, CoreResult};
pub use expense_service::*;
pub use income_service::*;
pub use session::*;
pub use storage::*;
pub use summary_service::*;
