//! # portfolio-db: Database Layer for the Portfolio API
//!
//! This crate provides database access for the Portfolio API.
//! It uses sqlx's `Any` driver so the same queries run on PostgreSQL in
//! production and on in-memory SQLite in tests.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Portfolio API Data Flow                            │
//! │                                                                         │
//! │  HTTP handler (GET /items/{id})                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   portfolio-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │    Session    │    │   Schema     │  │   │
//! │  │   │   (pool.rs)   │───►│ (one per req) │    │ (schema.rs)  │  │   │
//! │  │   │               │    │       │       │    │              │  │   │
//! │  │   │   AnyPool     │    │       ▼       │    │ CREATE TABLE │  │   │
//! │  │   │               │    │ ItemRepository│    │ IF NOT EXISTS│  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │        PostgreSQL (production)  /  SQLite :memory: (tests)      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Pool creation, configuration and per-request sessions
//! - [`schema`] - Table bootstrap for both backends
//! - [`error`] - Database error types
//! - [`repository`] - Item CRUD operations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use portfolio_db::{Database, DbConfig};
//! use portfolio_core::NewItem;
//!
//! let db = Database::connect(DbConfig::in_memory()).await?;
//!
//! let mut session = db.session().await?;
//! let item = session.items().create(&NewItem::new("Lamp", None)).await?;
//! let found = session.items().get(item.id).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Backend, Database, DbConfig, Session};

// Repository re-exports for convenience
pub use repository::item::ItemRepository;
