//! Domain error types.
//!
//! These errors represent construction-time validation failures in the
//! domain layer. They are distinct from routing errors.

use super::StationId;

/// Domain-level errors for value validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Section distances must be strictly positive
    #[error("section distance must be positive")]
    NonPositiveDistance,

    /// A section cannot start and end at the same station
    #[error("section cannot connect station {0} to itself")]
    SelfLoop(StationId),
}
