// [libs/infra/analytics-store/src/lib.rs]
//! Adapter over the read-only analytical store (§5, §6). Exposes one
//! repository per capability group named in §4.3; nothing here runs
//! business logic — that lives in `sentinel-domain-risk` and in the
//! application services that call these repositories.

pub mod client;
pub mod errors;
pub mod mapping;
pub mod repositories;
pub mod schema;

pub use client::StoreClient;
pub use errors::StoreError;
pub use repositories::{
    AlertRepository, ContractFilter, ContractRepository, DonationRepository, GraphRepository, OrgRepository,
    PartnerRepository, SanctionRepository, StatsRepository, SupplierRepository,
};
