// [libs/infra/analytics-store/src/schema.rs]
//! DDL for the analytical store's dimensional layout (§6). In production the
//! file carrying this schema is produced entirely by the external ingestion
//! pipeline; this module exists only for the `migrate`/`seed` developer
//! binaries and for integration tests against an in-memory store.

use libsql::Connection;
use tracing::{debug, info, instrument};

const TABLES: &[(&str, &str)] = &[
    ("suppliers", r#"
        CREATE TABLE IF NOT EXISTS suppliers (
            company_id TEXT PRIMARY KEY,
            legal_name TEXT NOT NULL,
            opening_date TEXT NOT NULL,
            capital TEXT NOT NULL,
            primary_activity_code TEXT NOT NULL,
            street TEXT NOT NULL,
            number TEXT NOT NULL,
            complement TEXT,
            city TEXT NOT NULL,
            state TEXT NOT NULL,
            cadastral_status TEXT NOT NULL
        );
    "#),
    ("contracts", r#"
        CREATE TABLE IF NOT EXISTS contracts (
            id TEXT PRIMARY KEY,
            supplier_id TEXT NOT NULL,
            org_code TEXT NOT NULL,
            value TEXT NOT NULL,
            subject TEXT NOT NULL,
            tender_number TEXT,
            signing_date TEXT NOT NULL,
            validity_date TEXT
        );
    "#),
    ("sanctions", r#"
        CREATE TABLE IF NOT EXISTS sanctions (
            id TEXT PRIMARY KEY,
            supplier_id TEXT NOT NULL,
            kind TEXT NOT NULL,
            sanctioning_body TEXT NOT NULL,
            reason TEXT NOT NULL,
            start_date TEXT NOT NULL,
            end_date TEXT
        );
    "#),
    ("partner_profiles", r#"
        CREATE TABLE IF NOT EXISTS partner_profiles (
            person_id_hash TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            is_public_servant INTEGER NOT NULL DEFAULT 0,
            employing_body TEXT,
            is_sanctioned INTEGER NOT NULL DEFAULT 0,
            age_years INTEGER
        );
    "#),
    ("ownership_links", r#"
        CREATE TABLE IF NOT EXISTS ownership_links (
            supplier_id TEXT NOT NULL,
            partner_id_hash TEXT NOT NULL,
            qualification TEXT NOT NULL,
            entry_date TEXT NOT NULL,
            exit_date TEXT,
            capital_share TEXT NOT NULL,
            PRIMARY KEY (supplier_id, partner_id_hash)
        );
    "#),
    ("donations", r#"
        CREATE TABLE IF NOT EXISTS donations (
            id TEXT PRIMARY KEY,
            supplier_id TEXT,
            partner_id_hash TEXT,
            candidate_name TEXT NOT NULL,
            candidate_party TEXT NOT NULL,
            candidate_office TEXT NOT NULL,
            amount TEXT NOT NULL,
            election_year INTEGER NOT NULL,
            resource_type TEXT NOT NULL
        );
    "#),
    ("critical_alerts", r#"
        CREATE TABLE IF NOT EXISTS critical_alerts (
            id TEXT PRIMARY KEY,
            supplier_id TEXT NOT NULL,
            kind TEXT NOT NULL,
            severity TEXT NOT NULL,
            description TEXT NOT NULL,
            evidence TEXT NOT NULL,
            detected_at TEXT NOT NULL,
            partner_reference TEXT
        );
    "#),
    ("supplier_scores", r#"
        CREATE TABLE IF NOT EXISTS supplier_scores (
            supplier_id TEXT PRIMARY KEY,
            total INTEGER NOT NULL,
            band TEXT NOT NULL
        );
    "#),
    ("source_freshness", r#"
        CREATE TABLE IF NOT EXISTS source_freshness (
            source_name TEXT PRIMARY KEY,
            last_update TEXT NOT NULL,
            row_count INTEGER NOT NULL
        );
    "#),
];

const INDEXES: &[(&str, &str)] = &[
    ("idx_contracts_supplier", "CREATE INDEX IF NOT EXISTS idx_contracts_supplier ON contracts(supplier_id);"),
    ("idx_contracts_org", "CREATE INDEX IF NOT EXISTS idx_contracts_org ON contracts(org_code);"),
    ("idx_sanctions_supplier", "CREATE INDEX IF NOT EXISTS idx_sanctions_supplier ON sanctions(supplier_id);"),
    ("idx_links_partner", "CREATE INDEX IF NOT EXISTS idx_links_partner ON ownership_links(partner_id_hash);"),
    ("idx_donations_supplier", "CREATE INDEX IF NOT EXISTS idx_donations_supplier ON donations(supplier_id);"),
    ("idx_donations_partner", "CREATE INDEX IF NOT EXISTS idx_donations_partner ON donations(partner_id_hash);"),
    ("idx_alerts_supplier", "CREATE INDEX IF NOT EXISTS idx_alerts_supplier ON critical_alerts(supplier_id);"),
    ("idx_alerts_kind", "CREATE INDEX IF NOT EXISTS idx_alerts_kind ON critical_alerts(kind);"),
    ("idx_alerts_detected", "CREATE INDEX IF NOT EXISTS idx_alerts_detected ON critical_alerts(detected_at DESC);"),
];

#[instrument(skip(conn))]
pub async fn apply_schema(conn: &Connection) -> anyhow::Result<()> {
    info!("🏗️  [SCHEMA_ENGINE]: Applying analytical store schema");
    for (name, ddl) in TABLES {
        debug!(table = *name, "creating table");
        conn.execute(ddl, ()).await?;
    }
    for (name, ddl) in INDEXES {
        debug!(index = *name, "creating index");
        conn.execute(ddl, ()).await?;
    }
    info!("✅ [SCHEMA_ENGINE]: Analytical store schema level and certified.");
    Ok(())
}
