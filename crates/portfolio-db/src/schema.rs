//! # Schema Bootstrap
//!
//! Creates the single `items` table when the server starts.
//!
//! ## How It Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Schema Bootstrap                                   │
//! │                                                                         │
//! │  Database::connect()                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Pick DDL for the backend                                              │
//! │       │                                                                 │
//! │       ├── Postgres: id BIGSERIAL PRIMARY KEY                           │
//! │       └── SQLite:   id INTEGER PRIMARY KEY AUTOINCREMENT               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CREATE TABLE IF NOT EXISTS items (...)                                │
//! │  CREATE INDEX IF NOT EXISTS ix_items_name ON items (name)              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no versioned migration history: existing tables are left as
//! they are, so column changes must be applied to the database by hand.

use sqlx::AnyPool;
use tracing::info;

use crate::error::{DbError, DbResult};
use crate::pool::Backend;

const POSTGRES_SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS items (
        id          BIGSERIAL PRIMARY KEY,
        name        TEXT NOT NULL,
        description TEXT
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_items_name ON items (name)",
];

// AUTOINCREMENT keeps ids of deleted rows from being handed out again,
// matching BIGSERIAL.
const SQLITE_SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS items (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        name        TEXT NOT NULL,
        description TEXT
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_items_name ON items (name)",
];

/// Returns the DDL statements for a backend, in execution order.
pub fn statements(backend: Backend) -> &'static [&'static str] {
    match backend {
        Backend::Postgres => POSTGRES_SCHEMA,
        Backend::Sqlite => SQLITE_SCHEMA,
    }
}

/// Creates all tables and indexes that do not exist yet.
///
/// ## Safety
/// - Idempotent: safe to run multiple times
/// - Never drops or alters existing objects
pub async fn ensure_schema(pool: &AnyPool, backend: Backend) -> DbResult<()> {
    info!(?backend, "Ensuring database schema");

    for statement in statements(backend) {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| DbError::SchemaFailed(e.to_string()))?;
    }

    info!("Database schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[test]
    fn test_postgres_uses_bigserial() {
        assert!(statements(Backend::Postgres)[0].contains("BIGSERIAL"));
        assert!(statements(Backend::Sqlite)[0].contains("AUTOINCREMENT"));
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let db = Database::connect(DbConfig::in_memory()).await.unwrap();

        // connect() already ran it once
        db.ensure_schema().await.unwrap();
        db.ensure_schema().await.unwrap();
    }
}
