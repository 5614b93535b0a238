// [libs/infra/analytics-store/src/repositories/sanction.rs]
use crate::client::StoreClient;
use crate::errors::StoreError;
use crate::mapping::map_sanction_row;
use libsql::params;
use sentinel_domain_models::Sanction;
use tracing::instrument;

pub struct SanctionRepository {
    client: StoreClient,
}

impl SanctionRepository {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn sanctions_for(&self, supplier_id: &str) -> Result<Vec<Sanction>, StoreError> {
        let conn = self.client.connection()?;
        let mut rows = conn
            .query(
                "SELECT id, supplier_id, kind, sanctioning_body, reason, start_date, end_date
                 FROM sanctions WHERE supplier_id = ?1 ORDER BY start_date ASC",
                params![supplier_id],
            )
            .await?;

        let mut sanctions = Vec::new();
        while let Some(row) = rows.next().await? {
            sanctions.push(map_sanction_row(&row)?);
        }
        Ok(sanctions)
    }
}
