//! Engine error model: domain failures and store failures, kept apart.

use thiserror::Error;

use stocktrail_core::DomainError;
use stocktrail_store::StoreError;

pub type EngineResult<T> = Result<T, EngineError>;

/// Failure of a reconciliation operation.
///
/// All errors are terminal for the current operation; the engine never
/// retries and reports no partial success.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Deterministic domain failure (malformed request, missing record).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Underlying persistence failure, propagated as-is.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EngineError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Domain(DomainError::InvalidInput(_)))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Domain(DomainError::NotFound(_)))
    }
}
