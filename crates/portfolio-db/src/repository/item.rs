//! # Item Repository
//!
//! Database operations for items.
//!
//! ## Absence Is Not an Error
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Return Conventions                                   │
//! │                                                                         │
//! │  get / update / delete                                                 │
//! │       │                                                                 │
//! │       ├── row exists   → Ok(Some(item))                                │
//! │       ├── no such row  → Ok(None)      ← HTTP layer turns into 404     │
//! │       └── store failed → Err(DbError)  ← HTTP layer turns into 500     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Writes
//! `create`, `update` and `delete` each run in their own transaction and
//! commit before returning. A failed commit is returned as
//! `DbError::TransactionFailed`; an early return rolls back on drop.
//!
//! Statements use `$N` placeholders, which both PostgreSQL and SQLite
//! accept.

use sqlx::{AnyConnection, Connection};
use tracing::debug;

use crate::error::{DbError, DbResult};
use portfolio_core::{Item, ItemUpdate, NewItem};

const SELECT_BY_ID: &str = "SELECT id, name, description FROM items WHERE id = $1";

/// Repository for item database operations.
///
/// ## Usage
/// ```rust,ignore
/// let mut session = db.session().await?;
///
/// let created = session.items().create(&NewItem::new("Lamp", None)).await?;
/// let page = session.items().list(0, 100).await?;
/// ```
pub struct ItemRepository<'c> {
    conn: &'c mut AnyConnection,
}

impl<'c> ItemRepository<'c> {
    /// Creates a repository on a borrowed connection.
    pub fn new(conn: &'c mut AnyConnection) -> Self {
        ItemRepository { conn }
    }

    /// Gets an item by primary key.
    ///
    /// ## Returns
    /// * `Ok(Some(Item))` - Item found
    /// * `Ok(None)` - No item with this id
    pub async fn get(&mut self, id: i64) -> DbResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(item)
    }

    /// Lists items ordered by id.
    ///
    /// ## Arguments
    /// * `skip` - Number of leading rows to leave out
    /// * `limit` - Maximum rows to return
    pub async fn list(&mut self, skip: u32, limit: u32) -> DbResult<Vec<Item>> {
        debug!(skip, limit, "Listing items");

        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, description
            FROM items
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(limit))
        .bind(i64::from(skip))
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(items)
    }

    /// Inserts a new item and returns it with the generated id.
    pub async fn create(&mut self, new_item: &NewItem) -> DbResult<Item> {
        debug!(name = %new_item.name, "Creating item");

        let mut tx = self
            .conn
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(new_item.name.as_str())
        .bind(new_item.description.as_deref())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        debug!(id = item.id, "Item created");
        Ok(item)
    }

    /// Applies the supplied fields to an existing item.
    ///
    /// ## How It Works
    /// 1. Read the current row (absent → `Ok(None)`, nothing written)
    /// 2. Merge the supplied fields over it (no fields → return the row as read)
    /// 3. Write the merged row back and commit
    ///
    /// If the row disappears between steps 1 and 3 (a concurrent delete),
    /// the update matches nothing and `Ok(None)` is returned.
    pub async fn update(&mut self, id: i64, changes: ItemUpdate) -> DbResult<Option<Item>> {
        debug!(id, "Updating item");

        let mut tx = self
            .conn
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let current = sqlx::query_as::<_, Item>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(current) = current else {
            return Ok(None);
        };

        if changes.is_empty() {
            return Ok(Some(current));
        }

        let merged = changes.apply_to(current);

        let updated = sqlx::query_as::<_, Item>(
            r#"
            UPDATE items
            SET name = $2, description = $3
            WHERE id = $1
            RETURNING id, name, description
            "#,
        )
        .bind(merged.id)
        .bind(merged.name.as_str())
        .bind(merged.description.as_deref())
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(updated)
    }

    /// Removes an item, returning the row as it was before deletion.
    pub async fn delete(&mut self, id: i64) -> DbResult<Option<Item>> {
        debug!(id, "Deleting item");

        let mut tx = self
            .conn
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let deleted = sqlx::query_as::<_, Item>(
            "DELETE FROM items WHERE id = $1 RETURNING id, name, description",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        if deleted.is_none() {
            return Ok(None);
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(deleted)
    }

    /// Counts stored items (for diagnostics).
    pub async fn count(&mut self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
