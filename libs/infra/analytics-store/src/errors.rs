// [libs/infra/analytics-store/src/errors.rs]
//! Error catalog for the analytical-store adapter. Every repository method
//! returns `Result<_, StoreError>`; the HTTP layer maps these onto `500`
//! without ever forwarding `Display` text to the client (§7).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to open the analytical store: {0}")]
    Connection(String),

    #[error("query rejected by the store engine: {0}")]
    Query(#[from] libsql::Error),

    #[error("row from the store did not match the expected shape: {0}")]
    Mapping(String),

    #[error("domain invariant rejected a row read from the store: {0}")]
    InvalidRow(#[from] sentinel_domain_models::DomainError),
}
