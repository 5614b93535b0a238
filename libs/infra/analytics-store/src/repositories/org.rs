// [libs/infra/analytics-store/src/repositories/org.rs]
use crate::client::StoreClient;
use crate::errors::StoreError;
use crate::mapping::{parse_band, sum_money};
use libsql::params;
use sentinel_domain_models::{CompanyId, Money, OrgDashboard, SupplierSummary};
use tracing::instrument;

pub struct OrgRepository {
    client: StoreClient,
}

impl OrgRepository {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Aggregate contracting activity for a single government body, with the
    /// ten highest-scored suppliers that contract with it (§4.3 `orgDashboard`).
    /// Every monetary total below is summed in Rust over exact `Money`
    /// values, never via SQLite's own `SUM` — SQLite has no decimal type, so
    /// an in-SQL aggregate would silently round-trip through binary floating
    /// point (§3, §8).
    #[instrument(skip(self))]
    pub async fn org_dashboard(&self, org_code: &str) -> Result<Option<OrgDashboard>, StoreError> {
        let conn = self.client.connection()?;

        let mut counts = conn
            .query(
                "SELECT COUNT(*), COUNT(DISTINCT supplier_id) FROM contracts WHERE org_code = ?1",
                params![org_code],
            )
            .await?;

        let row = match counts.next().await? {
            Some(row) => row,
            None => return Ok(None),
        };

        let contract_count: u64 = row.get::<i64>(0)? as u64;
        if contract_count == 0 {
            return Ok(None);
        }
        let distinct_supplier_count: u64 = row.get::<i64>(1)? as u64;

        let mut value_rows = conn.query("SELECT value FROM contracts WHERE org_code = ?1", params![org_code]).await?;
        let mut raw_values = Vec::new();
        while let Some(row) = value_rows.next().await? {
            raw_values.push(row.get::<String>(0)?);
        }
        let total_contracted_value = sum_money(raw_values)?;

        let mut rows = conn
            .query(
                "SELECT DISTINCT s.company_id, s.legal_name, sc.total, sc.band
                 FROM contracts c
                 JOIN suppliers s ON s.company_id = c.supplier_id
                 JOIN supplier_scores sc ON sc.supplier_id = s.company_id
                 WHERE c.org_code = ?1",
                params![org_code],
            )
            .await?;

        let mut candidates = Vec::new();
        while let Some(row) = rows.next().await? {
            let id: String = row.get(0)?;
            let band: String = row.get(3)?;
            let org_value = sum_contract_values_for_org(&conn, org_code, &id).await?;

            candidates.push(SupplierSummary {
                id: CompanyId::parse(&id).map_err(|e| StoreError::Mapping(e.to_string()))?,
                legal_name: row.get(1)?,
                score_total: row.get::<i64>(2)? as u32,
                band: parse_band(&band)?,
                total_contracted_value: org_value,
            });
        }

        candidates.sort_by(|a, b| {
            b.score_total.cmp(&a.score_total).then_with(|| b.total_contracted_value.cmp(&a.total_contracted_value))
        });
        candidates.truncate(10);

        Ok(Some(OrgDashboard {
            org_code: org_code.to_string(),
            total_contracted_value,
            contract_count,
            distinct_supplier_count,
            top_suppliers: candidates,
        }))
    }
}

/// A single supplier's contracted total restricted to one government body,
/// used for the dashboard's per-supplier ranking (distinct from
/// [`sum_contract_values`], which sums across every org).
async fn sum_contract_values_for_org(conn: &libsql::Connection, org_code: &str, supplier_id: &str) -> Result<Money, StoreError> {
    let mut rows = conn
        .query(
            "SELECT value FROM contracts WHERE org_code = ?1 AND supplier_id = ?2",
            params![org_code, supplier_id],
        )
        .await?;

    let mut values = Vec::new();
    while let Some(row) = rows.next().await? {
        values.push(row.get::<String>(0)?);
    }
    sum_money(values)
}
