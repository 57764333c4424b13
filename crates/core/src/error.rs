//! Domain error model.

use thiserror::Error;

/// Result type used across the engine.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The engine is total over well-formed input: business-data gaps (missing
/// mapping, missing rate plan, missing base price) are absorbed by fallback
/// chains and never surface here. Only structurally invalid input produces
/// an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. an inverted date range).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The computation succeeded but produced zero sellable lines.
    ///
    /// Distinct from a validation failure; callers must not retry it as if
    /// it were transient.
    #[error("no availability data to synchronize")]
    NoAvailability,

    /// Rate resolution could not pick a single plan.
    ///
    /// A correct resolver never constructs this; any occurrence is a defect,
    /// not a recoverable condition.
    #[error("ambiguous rate resolution: {0}")]
    ResolutionAmbiguity(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn no_availability() -> Self {
        Self::NoAvailability
    }

    pub fn ambiguity(msg: impl Into<String>) -> Self {
        Self::ResolutionAmbiguity(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
