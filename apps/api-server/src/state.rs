// [apps/api-server/src/state.rs]
//! Shared, cloneable application state (§4.5's "single wiring function").
//! Every repository is pre-built once at boot and handed to the services;
//! handlers never construct a repository themselves.

use crate::config::Settings;
use crate::middleware::rate_limit::RateLimiter;
use sentinel_infra_store::{
    AlertRepository, ContractRepository, DonationRepository, GraphRepository, OrgRepository, PartnerRepository,
    SanctionRepository, StatsRepository, StoreClient, StoreError, SupplierRepository,
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub rate_limiter: Arc<RateLimiter>,
    pub suppliers: Arc<SupplierRepository>,
    pub contracts: Arc<ContractRepository>,
    pub sanctions: Arc<SanctionRepository>,
    pub partners: Arc<PartnerRepository>,
    pub donations: Arc<DonationRepository>,
    pub alerts: Arc<AlertRepository>,
    pub stats: Arc<StatsRepository>,
    pub orgs: Arc<OrgRepository>,
    pub graph: Arc<GraphRepository>,
    pub store: StoreClient,
}

impl AppState {
    /// Opens the analytical store and pre-builds every repository. The
    /// store is opened read-only exactly once per process (§5) and its
    /// handle is shared, cheaply cloned, across all repositories.
    pub async fn bootstrap(settings: Settings) -> Result<Self, StoreError> {
        let store = StoreClient::open_read_only(&settings.store_path).await?;
        let schema_version = store.schema_version().await.unwrap_or(0);
        info!(schema_version, "analytical store schema version");

        Ok(Self {
            rate_limiter: Arc::new(RateLimiter::new(settings.rate_limit_cap, settings.rate_limit_window)),
            settings: Arc::new(settings),
            suppliers: Arc::new(SupplierRepository::new(store.clone())),
            contracts: Arc::new(ContractRepository::new(store.clone())),
            sanctions: Arc::new(SanctionRepository::new(store.clone())),
            partners: Arc::new(PartnerRepository::new(store.clone())),
            donations: Arc::new(DonationRepository::new(store.clone())),
            alerts: Arc::new(AlertRepository::new(store.clone())),
            stats: Arc::new(StatsRepository::new(store.clone())),
            orgs: Arc::new(OrgRepository::new(store.clone())),
            graph: Arc::new(GraphRepository::new(store.clone())),
            store,
        })
    }
}
