//! # portfolio-core: Domain Types for the Portfolio API
//!
//! This crate holds the single `Item` entity, the request shapes used to
//! create and update it, and the validation rules applied before any
//! database access.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Portfolio API                                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/api (axum)                              │   │
//! │  │    POST /items ──► GET /items ──► PUT /items/{id} ──► DELETE    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ portfolio-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌─────────────┐  ┌────────────┐               │   │
//! │  │   │   types   │  │ validation  │  │   error    │               │   │
//! │  │   │   Item    │  │ name rules  │  │ Validation │               │   │
//! │  │   │  NewItem  │  │ desc rules  │  │   Error    │               │   │
//! │  │   └───────────┘  └─────────────┘  └────────────┘               │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 portfolio-db (Database Layer)                   │   │
//! │  │              Pool, Session, ItemRepository                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Item`, `NewItem`, `ItemUpdate`, `Pagination`
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use portfolio_core::{ItemUpdate, Item};
//!
//! let item = Item { id: 1, name: "Lamp".into(), description: Some("Desk lamp".into()) };
//! let update = ItemUpdate { name: Some("Floor lamp".into()), description: None };
//!
//! let updated = update.apply_to(item);
//! assert_eq!(updated.name, "Floor lamp");
//! assert_eq!(updated.description.as_deref(), Some("Desk lamp"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of an item name, in characters.
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum length of an item description, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 4096;

/// Page size used by `GET /items` when `limit` is not given.
pub const DEFAULT_PAGE_LIMIT: u32 = 100;
