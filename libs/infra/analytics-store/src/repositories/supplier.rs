// [libs/infra/analytics-store/src/repositories/supplier.rs]
use crate::client::StoreClient;
use crate::errors::StoreError;
use crate::mapping::{map_supplier_row, parse_band, sum_money};
use libsql::{params, Connection};
use sentinel_domain_models::{CompanyId, Money, Supplier, SupplierSummary};
use std::collections::HashMap;
use tracing::instrument;

pub struct SupplierRepository {
    client: StoreClient,
}

impl SupplierRepository {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn supplier_by_id(&self, id: &CompanyId) -> Result<Option<Supplier>, StoreError> {
        let conn = self.client.connection()?;
        let mut rows = conn
            .query(
                "SELECT company_id, legal_name, opening_date, capital, primary_activity_code,
                        street, number, complement, city, state, cadastral_status
                 FROM suppliers WHERE company_id = ?1",
                params![id.as_str()],
            )
            .await?;

        match rows.next().await? {
            Some(row) => Ok(Some(map_supplier_row(&row)?)),
            None => Ok(None),
        }
    }

    /// Whether another supplier shares this one's street + number, ignoring
    /// complement (§4.2 `SHARED_ADDRESS` — "noise in commercial buildings is
    /// accepted because the signal is only meaningful in combination").
    #[instrument(skip(self))]
    pub async fn shares_address_with_another(&self, supplier: &Supplier) -> Result<bool, StoreError> {
        let conn = self.client.connection()?;
        let mut rows = conn
            .query(
                "SELECT COUNT(*) FROM suppliers
                 WHERE street = ?1 AND number = ?2 AND company_id != ?3",
                params![supplier.address.street.clone(), supplier.address.number.clone(), supplier.id.as_str()],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| StoreError::Mapping("COUNT query returned no row".into()))?;
        Ok(row.get::<i64>(0)? > 0)
    }

    #[instrument(skip(self))]
    pub async fn count_suppliers(&self) -> Result<u64, StoreError> {
        let conn = self.client.connection()?;
        let mut rows = conn.query("SELECT COUNT(*) FROM suppliers", ()).await?;
        let row = rows.next().await?.ok_or_else(|| StoreError::Mapping("COUNT query returned no row".into()))?;
        Ok(row.get::<i64>(0)? as u64)
    }

    /// Ordered by score descending, then by total-contracted-value descending
    /// (§4.4 tiebreak). The per-supplier contracted total is aggregated here
    /// in Rust over exact `Money` values rather than with a SQL `SUM`, which
    /// SQLite can only evaluate through binary floating point (§3, §8 "Money
    /// arithmetic is exact to two fractional digits").
    #[instrument(skip(self))]
    pub async fn rank_by_score(&self, limit: i64, offset: i64) -> Result<Vec<SupplierSummary>, StoreError> {
        let conn = self.client.connection()?;

        let mut rows = conn
            .query(
                "SELECT s.company_id, s.legal_name, sc.total, sc.band
                 FROM suppliers s
                 JOIN supplier_scores sc ON sc.supplier_id = s.company_id",
                (),
            )
            .await?;

        let mut summaries = Vec::new();
        while let Some(row) = rows.next().await? {
            let band: String = row.get(3)?;
            summaries.push((
                row.get::<String>(0)?,
                row.get::<String>(1)?,
                row.get::<i64>(2)? as u32,
                band,
            ));
        }

        let totals = contract_totals_by_supplier(&conn).await?;

        let mut summaries: Vec<SupplierSummary> = summaries
            .into_iter()
            .map(|(id, legal_name, score_total, band)| {
                Ok(SupplierSummary {
                    id: CompanyId::parse(&id).map_err(|e| StoreError::Mapping(e.to_string()))?,
                    legal_name,
                    score_total,
                    band: parse_band(&band)?,
                    total_contracted_value: totals.get(&id).copied().unwrap_or(Money::ZERO),
                })
            })
            .collect::<Result<_, StoreError>>()?;

        summaries.sort_by(|a, b| {
            b.score_total.cmp(&a.score_total).then_with(|| b.total_contracted_value.cmp(&a.total_contracted_value))
        });

        let offset = offset.max(0) as usize;
        let limit = limit.max(0) as usize;
        Ok(summaries.into_iter().skip(offset).take(limit).collect())
    }

    /// Identifier-prefix match when the query is all digits; otherwise a
    /// case-folded substring match on legal name (§4.4). Boundary validation
    /// of the query length happens in the HTTP layer (§6).
    #[instrument(skip(self, query))]
    pub async fn search_by_name_or_id(&self, query: &str, limit: i64) -> Result<Vec<SupplierSummary>, StoreError> {
        let conn = self.client.connection()?;
        let is_all_digits = !query.is_empty() && query.chars().all(|c| c.is_ascii_digit());

        let sql = if is_all_digits {
            "SELECT s.company_id, s.legal_name, sc.total, sc.band
             FROM suppliers s
             JOIN supplier_scores sc ON sc.supplier_id = s.company_id
             WHERE s.company_id LIKE ?1
             ORDER BY sc.total DESC
             LIMIT ?2"
        } else {
            "SELECT s.company_id, s.legal_name, sc.total, sc.band
             FROM suppliers s
             JOIN supplier_scores sc ON sc.supplier_id = s.company_id
             WHERE LOWER(s.legal_name) LIKE '%' || LOWER(?1) || '%'
             ORDER BY sc.total DESC
             LIMIT ?2"
        };

        let pattern = if is_all_digits { format!("{query}%") } else { query.to_string() };
        let mut rows = conn.query(sql, params![pattern, limit]).await?;

        let mut summaries = Vec::new();
        while let Some(row) = rows.next().await? {
            let id: String = row.get(0)?;
            let band: String = row.get(3)?;
            let total_contracted_value = sum_contract_values(&conn, &id).await?;

            summaries.push(SupplierSummary {
                id: CompanyId::parse(&id).map_err(|e| StoreError::Mapping(e.to_string()))?,
                legal_name: row.get(1)?,
                score_total: row.get::<i64>(2)? as u32,
                band: parse_band(&band)?,
                total_contracted_value,
            });
        }
        Ok(summaries)
    }
}

/// Raw contract values for every supplier, grouped client-side. A single
/// unaggregated scan keeps the ranking endpoint to two queries total instead
/// of one `SUM` per supplier, while still never handing SQLite's aggregator
/// a monetary value to add.
async fn contract_totals_by_supplier(conn: &Connection) -> Result<HashMap<String, Money>, StoreError> {
    let mut rows = conn.query("SELECT supplier_id, value FROM contracts", ()).await?;

    let mut by_supplier: HashMap<String, Vec<String>> = HashMap::new();
    while let Some(row) = rows.next().await? {
        let supplier_id: String = row.get(0)?;
        let value: String = row.get(1)?;
        by_supplier.entry(supplier_id).or_default().push(value);
    }

    by_supplier
        .into_iter()
        .map(|(supplier_id, values)| Ok((supplier_id, sum_money(values)?)))
        .collect()
}

/// Exact contracted total for a single supplier (§3, §8).
pub(crate) async fn sum_contract_values(conn: &Connection, supplier_id: &str) -> Result<Money, StoreError> {
    let mut rows = conn.query("SELECT value FROM contracts WHERE supplier_id = ?1", params![supplier_id]).await?;

    let mut values = Vec::new();
    while let Some(row) = rows.next().await? {
        values.push(row.get::<String>(0)?);
    }
    sum_money(values)
}
