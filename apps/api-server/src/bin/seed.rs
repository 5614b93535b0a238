// [apps/api-server/src/bin/seed.rs]
//! Developer utility: populates `STORE_PATH` with a handful of suppliers
//! illustrative of the scenarios in spec §8 — a clean supplier, one with a
//! public-servant partner, one with an active sanction and a later
//! contract, and one flagged by several cumulative-score indicators. Not
//! used by the service itself; only by local smoke-testing against `curl`.

use libsql::{params, Builder};
use sentinel_infra_store::schema::apply_schema;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    sentinel_shared_telemetry::init_tracing("sentinel_seed");

    let store_path = std::env::var("STORE_PATH").expect("STORE_PATH must be set to the analytical store file path");

    let database = Builder::new_local(&store_path).build().await?;
    let conn = database.connect()?;
    apply_schema(&conn).await?;

    seed_clean_supplier(&conn).await?;
    seed_public_servant_supplier(&conn).await?;
    seed_sanctioned_supplier(&conn).await?;
    seed_moderate_score_supplier(&conn).await?;
    seed_source_freshness(&conn).await?;

    tracing::info!(store = %store_path, "seed data inserted");
    Ok(())
}

async fn seed_clean_supplier(conn: &libsql::Connection) -> anyhow::Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO suppliers
         (company_id, legal_name, opening_date, capital, primary_activity_code, street, number, complement, city, state, cadastral_status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, NULL, ?8, ?9, ?10)",
        params![
            "11444777000161",
            "Fornecedora Limpa Ltda",
            "2015-03-10",
            "500000.00",
            "4721",
            "Avenida Central",
            "500",
            "Brasilia",
            "DF",
            "ACTIVE"
        ],
    )
    .await?;

    conn.execute(
        "INSERT OR REPLACE INTO contracts (id, supplier_id, org_code, value, subject, tender_number, signing_date, validity_date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            "contract-clean-1",
            "11444777000161",
            "ORG-SAUDE",
            "80000.00",
            "fornecimento de generos alimenticios",
            "PE-2024-001",
            "2024-02-01",
            "2025-02-01"
        ],
    )
    .await?;

    conn.execute(
        "INSERT OR REPLACE INTO supplier_scores (supplier_id, total, band) VALUES (?1, 0, 'LOW')",
        params!["11444777000161"],
    )
    .await?;
    Ok(())
}

async fn seed_public_servant_supplier(conn: &libsql::Connection) -> anyhow::Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO suppliers
         (company_id, legal_name, opening_date, capital, primary_activity_code, street, number, complement, city, state, cadastral_status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, NULL, ?8, ?9, ?10)",
        params![
            "22555888000172",
            "Servicos Suspeitos Ltda",
            "2020-01-01",
            "1000000.00",
            "8020",
            "Rua das Acacias",
            "42",
            "Sao Paulo",
            "SP",
            "ACTIVE"
        ],
    )
    .await?;

    conn.execute(
        "INSERT OR REPLACE INTO contracts (id, supplier_id, org_code, value, subject, tender_number, signing_date, validity_date)
         VALUES (?1, ?2, ?3, ?4, ?5, NULL, ?6, NULL)",
        params!["contract-servant-1", "22555888000172", "ORG-SEGURANCA", "50000.00", "servico de vigilancia", "2025-06-01"],
    )
    .await?;

    conn.execute(
        "INSERT OR REPLACE INTO partner_profiles (person_id_hash, name, is_public_servant, employing_body, is_sanctioned, age_years)
         VALUES (?1, ?2, 1, ?3, 0, 45)",
        params!["hash-partner-a1b2", "Fulano de Tal", "Ministerio da Fazenda"],
    )
    .await?;

    conn.execute(
        "INSERT OR REPLACE INTO ownership_links (supplier_id, partner_id_hash, qualification, entry_date, exit_date, capital_share)
         VALUES (?1, ?2, 'Socio-Administrador', ?3, NULL, ?4)",
        params!["22555888000172", "hash-partner-a1b2", "2020-01-01", "100.00"],
    )
    .await?;

    conn.execute(
        "INSERT OR REPLACE INTO supplier_scores (supplier_id, total, band) VALUES (?1, 0, 'LOW')",
        params!["22555888000172"],
    )
    .await?;
    Ok(())
}

async fn seed_sanctioned_supplier(conn: &libsql::Connection) -> anyhow::Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO suppliers
         (company_id, legal_name, opening_date, capital, primary_activity_code, street, number, complement, city, state, cadastral_status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, NULL, ?8, ?9, ?10)",
        params![
            "33666999000183",
            "Construtora Penalizada S.A.",
            "2010-05-20",
            "2000000.00",
            "4292",
            "Quadra 9",
            "10",
            "Goiania",
            "GO",
            "ACTIVE"
        ],
    )
    .await?;

    conn.execute(
        "INSERT OR REPLACE INTO contracts (id, supplier_id, org_code, value, subject, tender_number, signing_date, validity_date)
         VALUES (?1, ?2, ?3, ?4, ?5, NULL, ?6, NULL)",
        params!["contract-sanctioned-1", "33666999000183", "ORG-INFRA", "300000.00", "obras de pavimentacao", "2024-06-15"],
    )
    .await?;

    conn.execute(
        "INSERT OR REPLACE INTO sanctions (id, supplier_id, kind, sanctioning_body, reason, start_date, end_date)
         VALUES (?1, ?2, 'ADMINISTRATIVE_SANCTIONS_REGISTRY', ?3, ?4, ?5, NULL)",
        params!["sanction-1", "33666999000183", "TCU", "irregularidade em licitacao anterior", "2024-01-01"],
    )
    .await?;

    conn.execute(
        "INSERT OR REPLACE INTO supplier_scores (supplier_id, total, band) VALUES (?1, 0, 'LOW')",
        params!["33666999000183"],
    )
    .await?;
    Ok(())
}

async fn seed_moderate_score_supplier(conn: &libsql::Connection) -> anyhow::Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO suppliers
         (company_id, legal_name, opening_date, capital, primary_activity_code, street, number, complement, city, state, cadastral_status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, NULL, ?8, ?9, ?10)",
        params![
            "44777000000194",
            "Nova Empresa de Limpeza ME",
            "2025-10-01",
            "1000.00",
            "4711",
            "Travessa Sete",
            "7",
            "Curitiba",
            "PR",
            "ACTIVE"
        ],
    )
    .await?;

    conn.execute(
        "INSERT OR REPLACE INTO contracts (id, supplier_id, org_code, value, subject, tender_number, signing_date, validity_date)
         VALUES (?1, ?2, ?3, ?4, ?5, NULL, ?6, NULL)",
        params![
            "contract-moderate-1",
            "44777000000194",
            "ORG-EDUCACAO",
            "150000.00",
            "servico de limpeza predial",
            "2025-12-30"
        ],
    )
    .await?;

    conn.execute(
        "INSERT OR REPLACE INTO supplier_scores (supplier_id, total, band) VALUES (?1, 35, 'MODERATE')",
        params!["44777000000194"],
    )
    .await?;
    Ok(())
}

async fn seed_source_freshness(conn: &libsql::Connection) -> anyhow::Result<()> {
    let sources = [("suppliers_registry", "2026-07-20T00:00:00Z", 4_i64), ("sanctions_registries", "2026-07-20T00:00:00Z", 1)];

    for (name, last_update, row_count) in sources {
        conn.execute(
            "INSERT OR REPLACE INTO source_freshness (source_name, last_update, row_count) VALUES (?1, ?2, ?3)",
            params![name, last_update, row_count],
        )
        .await?;
    }
    Ok(())
}
