// [libs/infra/analytics-store/src/client.rs]
//! Connection handle over the read-only analytical store. The store file is
//! produced entirely by the external ingestion pipeline (§1, out of scope);
//! this client only opens it and, in the in-memory test configuration,
//! applies the schema so repository tests don't need a fixture file on disk.

use crate::errors::StoreError;
use crate::schema::apply_schema;
use libsql::{Builder, Connection, Database};
use std::sync::Arc;
use tracing::{info, instrument};

/// Shared handle to the analytical store. Cloning is cheap: the underlying
/// `libsql::Database` is reference-counted and a fresh `Connection` is
/// acquired per call, per §5's "short-lived prepared-statement handle".
#[derive(Clone)]
pub struct StoreClient {
    database: Arc<Database>,
    /// Keeps an in-memory database alive across connections. `None` for a
    /// file-backed store, where the file itself is the persistence anchor.
    _memory_anchor: Option<Arc<Connection>>,
}

impl StoreClient {
    /// Opens the analytical store at `path` strictly read-only (§6: the
    /// read-only flag is asserted true in configuration, never negotiated
    /// here). `path` may be `:memory:` for tests, in which case the schema
    /// is applied immediately so every subsequent connection sees it.
    #[instrument(skip(path))]
    pub async fn open_read_only(path: &str) -> Result<Self, StoreError> {
        let is_memory = path == ":memory:" || path.contains("mode=memory");

        let database = if is_memory {
            Builder::new_local(path)
                .build()
                .await
                .map_err(|e| StoreError::Connection(format!("in-memory store failed to initialize: {e}")))?
        } else {
            Builder::new_local(path)
                .build()
                .await
                .map_err(|e| StoreError::Connection(format!("store file failed to open: {e}")))?
        };

        let database = Arc::new(database);
        let anchor = if is_memory {
            let anchor_conn = database
                .connect()
                .map_err(|e| StoreError::Connection(format!("anchor connection failed: {e}")))?;
            apply_schema(&anchor_conn)
                .await
                .map_err(|e| StoreError::Connection(format!("schema bootstrap failed: {e}")))?;
            Some(Arc::new(anchor_conn))
        } else {
            None
        };

        info!("🔌 [DATABASE]: Analytical store opened at [{}]", path);
        Ok(Self { database, _memory_anchor: anchor })
    }

    pub fn connection(&self) -> Result<Connection, StoreError> {
        self.database.connect().map_err(|e| StoreError::Connection(e.to_string()))
    }

    /// The schema-freshness tag surfaced on `/stats` (SPEC_FULL §11).
    #[instrument(skip(self))]
    pub async fn schema_version(&self) -> Result<i64, StoreError> {
        let conn = self.connection()?;
        let mut rows = conn.query("PRAGMA user_version", ()).await?;
        match rows.next().await? {
            Some(row) => Ok(row.get(0)?),
            None => Ok(0),
        }
    }
}
