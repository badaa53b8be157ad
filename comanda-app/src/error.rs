//! Application error types

use shared::error::AppError;
use thiserror::Error;

/// Draft validation failure
///
/// Recovered locally: the editor records the message inline and blocks
/// submission; nothing propagates past the UI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    MissingName,
    #[error("Price is required")]
    MissingPrice,
    #[error("Price must be a valid number")]
    InvalidPrice,
}

/// Catalog editor failure
#[derive(Debug, Clone, Error)]
pub enum EditorError {
    /// Draft failed local validation; submission blocked
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Create/update/delete call failed; draft retained, user may resubmit
    #[error("Persistence error: {0}")]
    Persistence(AppError),

    /// Product load failed; editing blocked
    #[error("Fetch error: {0}")]
    Fetch(AppError),

    /// A submit or delete is already in flight
    #[error("Operation already in progress")]
    Busy,

    /// Delete requested for a product that was never persisted
    #[error("Product has not been created yet")]
    NotPersisted,
}
