// [libs/domain/models/src/errors.rs]
//! Domain-level invariant violations. Every value-type constructor in this
//! crate returns `Result<_, DomainError>` rather than panicking; callers at
//! the HTTP boundary map these onto `422 Unprocessable Entity`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A `CompanyId` or `PersonId` failed its checksum or digit-count check.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A `Money` or `Share` value violated its range invariant.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A structural invariant on an entity (e.g. `start <= end`) did not hold.
    #[error("invalid entity state: {0}")]
    InvalidState(String),
}
