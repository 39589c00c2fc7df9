//! Error taxonomy for the booking core
//!
//! Three categories, matching how operations fail:
//! - `Validation`: bad input or a referential-integrity guard fired
//! - `PolicyViolation`: the record exists but policy forbids the transition
//! - `NotFound`: mutation against a missing id
//!
//! Validation and policy failures are recovered at the intent boundary and
//! surfaced as a rejected [`crate::intent::IntentResult`] with the reason
//! string; `NotFound` is fatal to that single operation only and never
//! affects sibling records.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed input or a delete against a still-referenced record.
    #[error("validation error: {0}")]
    Validation(String),

    /// Transition forbidden by policy (refund outside the 48h window,
    /// re-cancelling an already-cancelled enrollment, ...).
    #[error("policy violation: {0}")]
    PolicyViolation(String),

    /// No record under the given id.
    #[error("not found: {0}")]
    NotFound(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Whether this error is recovered into a rejected intent result
    /// rather than propagated to the caller.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DomainError::Validation(_) | DomainError::PolicyViolation(_)
        )
    }
}
