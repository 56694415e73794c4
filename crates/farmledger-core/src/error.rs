use thiserror::Error;
use uuid::Uuid;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("No authenticated user")]
    NotAuthenticated,
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Crop not found: {0}")]
    CropNotFound(Uuid),
    #[error("Ledger not found: {0}")]
    LedgerNotFound(String),
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
