// [apps/api-server/src/bin/migrate.rs]
//! Developer utility: applies the analytical store's DDL (§6) to the file
//! at `STORE_PATH`. The production artifact is produced entirely by the
//! external ingestion pipeline (§1); this binary exists only so a developer
//! can stand up an empty store locally with the same shape `seed` and the
//! integration tests expect.

use libsql::Builder;
use sentinel_infra_store::schema::apply_schema;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    sentinel_shared_telemetry::init_tracing("sentinel_migrate");

    let store_path = std::env::var("STORE_PATH").expect("STORE_PATH must be set to the analytical store file path");

    let database = Builder::new_local(&store_path).build().await?;
    let conn = database.connect()?;

    apply_schema(&conn).await?;
    tracing::info!(store = %store_path, "schema applied");
    Ok(())
}
