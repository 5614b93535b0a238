// [libs/infra/analytics-store/src/repositories/stats.rs]
use crate::client::StoreClient;
use crate::errors::StoreError;
use chrono::{DateTime, Utc};
use sentinel_domain_models::{SourceFreshness, Stats};
use tracing::instrument;

pub struct StatsRepository {
    client: StoreClient,
}

impl StatsRepository {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn stats_rollup(&self) -> Result<Stats, StoreError> {
        let conn = self.client.connection()?;

        let supplier_count = scalar_count(&conn, "SELECT COUNT(*) FROM suppliers").await?;
        let contract_count = scalar_count(&conn, "SELECT COUNT(*) FROM contracts").await?;
        let alert_count = scalar_count(&conn, "SELECT COUNT(*) FROM critical_alerts").await?;
        let sanctioned_supplier_count =
            scalar_count(&conn, "SELECT COUNT(DISTINCT supplier_id) FROM sanctions WHERE end_date IS NULL").await?;

        let mut rows = conn
            .query("SELECT source_name, last_update, row_count FROM source_freshness ORDER BY source_name ASC", ())
            .await?;

        let mut sources = Vec::new();
        while let Some(row) = rows.next().await? {
            let last_update: String = row.get(1)?;
            let last_update: DateTime<Utc> = DateTime::parse_from_rfc3339(&last_update)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| StoreError::Mapping(format!("invalid timestamp '{last_update}': {e}")))?;

            sources.push(SourceFreshness {
                source_name: row.get(0)?,
                last_update,
                row_count: row.get::<i64>(2)? as u64,
            });
        }

        Ok(Stats {
            supplier_count,
            contract_count,
            alert_count,
            sanctioned_supplier_count,
            sources,
        })
    }
}

async fn scalar_count(conn: &libsql::Connection, sql: &str) -> Result<u64, StoreError> {
    let mut rows = conn.query(sql, ()).await?;
    let row = rows.next().await?.ok_or_else(|| StoreError::Mapping("scalar query returned no row".into()))?;
    Ok(row.get::<i64>(0)? as u64)
}
