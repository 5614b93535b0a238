// [libs/infra/analytics-store/src/repositories/alert.rs]
use crate::client::StoreClient;
use crate::errors::StoreError;
use chrono::{DateTime, Utc};
use libsql::{params, Row};
use sentinel_domain_models::{AlertFeedItem, AlertKind, CompanyId, CriticalAlert, PersonIdHash, Severity};
use std::str::FromStr;
use tracing::instrument;

pub struct AlertRepository {
    client: StoreClient,
}

impl AlertRepository {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Precomputed alert facts, newest first (§4.3 `alertFeed`). These rows
    /// are produced by the ingestion/seed step, not recomputed per request —
    /// the live rule engine only runs against a single supplier's dossier.
    #[instrument(skip(self))]
    pub async fn alert_feed(&self, limit: i64, offset: i64) -> Result<Vec<AlertFeedItem>, StoreError> {
        let conn = self.client.connection()?;
        let mut rows = conn
            .query(
                "SELECT a.id, a.supplier_id, a.kind, a.severity, a.description, a.evidence,
                        a.detected_at, a.partner_reference, s.legal_name, p.name
                 FROM critical_alerts a
                 JOIN suppliers s ON s.company_id = a.supplier_id
                 LEFT JOIN partner_profiles p ON p.person_id_hash = a.partner_reference
                 ORDER BY a.detected_at DESC
                 LIMIT ?1 OFFSET ?2",
                params![limit, offset],
            )
            .await?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(map_feed_row(&row)?);
        }
        Ok(items)
    }

    #[instrument(skip(self))]
    pub async fn alert_feed_by_kind(
        &self,
        kind: AlertKind,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AlertFeedItem>, StoreError> {
        let conn = self.client.connection()?;
        let mut rows = conn
            .query(
                "SELECT a.id, a.supplier_id, a.kind, a.severity, a.description, a.evidence,
                        a.detected_at, a.partner_reference, s.legal_name, p.name
                 FROM critical_alerts a
                 JOIN suppliers s ON s.company_id = a.supplier_id
                 LEFT JOIN partner_profiles p ON p.person_id_hash = a.partner_reference
                 WHERE a.kind = ?1
                 ORDER BY a.detected_at DESC
                 LIMIT ?2 OFFSET ?3",
                params![kind.as_str(), limit, offset],
            )
            .await?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(map_feed_row(&row)?);
        }
        Ok(items)
    }
}

fn map_feed_row(row: &Row) -> Result<AlertFeedItem, StoreError> {
    let kind: String = row.get(2)?;
    let severity: String = row.get(3)?;
    let detected_at: String = row.get(6)?;
    let partner_reference: Option<String> = row.get(7)?;

    let kind = AlertKind::from_str(&kind).map_err(|e| StoreError::Mapping(e.to_string()))?;
    let severity = match severity.as_str() {
        "SEVERE" => Severity::Severe,
        "MOST_SEVERE" => Severity::MostSevere,
        other => return Err(StoreError::Mapping(format!("unknown severity '{other}'"))),
    };
    let detected_at = DateTime::parse_from_rfc3339(&detected_at)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::Mapping(format!("invalid timestamp '{detected_at}': {e}")))?;

    let alert = CriticalAlert {
        kind,
        severity,
        description: row.get(4)?,
        evidence: row.get(5)?,
        detected_at,
        partner_reference: partner_reference.map(PersonIdHash::new),
    };

    Ok(AlertFeedItem {
        alert,
        supplier_id: CompanyId::parse(&row.get::<String>(1)?).map_err(|e| StoreError::Mapping(e.to_string()))?,
        supplier_legal_name: row.get(8)?,
        partner_name: row.get(9)?,
    })
}
