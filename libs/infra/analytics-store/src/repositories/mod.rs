// [libs/infra/analytics-store/src/repositories/mod.rs]
//! Capability-shaped repository contracts over the analytical store (§4.3).
//! Every statement below is parameterized; no identifier literal is ever
//! composed into query text.

pub mod alert;
pub mod contract;
pub mod donation;
pub mod graph;
pub mod org;
pub mod partner;
pub mod sanction;
pub mod stats;
pub mod supplier;

pub use alert::AlertRepository;
pub use contract::{ContractFilter, ContractRepository};
pub use donation::DonationRepository;
pub use graph::GraphRepository;
pub use org::OrgRepository;
pub use partner::PartnerRepository;
pub use sanction::SanctionRepository;
pub use stats::StatsRepository;
pub use supplier::SupplierRepository;
