//! # Repository Module
//!
//! Database repository implementations for the Portfolio API.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  session.items().get(42)                                       │
//! │       ▼                                                                 │
//! │  ItemRepository (borrows the session's connection)                     │
//! │  ├── get(&mut self, id)                                                │
//! │  ├── list(&mut self, skip, limit)                                      │
//! │  ├── create(&mut self, new_item)                                       │
//! │  ├── update(&mut self, id, changes)                                    │
//! │  └── delete(&mut self, id)                                             │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  PostgreSQL / SQLite                                                   │
//! │                                                                         │
//! │  Repositories hold no state of their own: every call is one            │
//! │  statement or one short transaction on the borrowed connection.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`item::ItemRepository`] - Item CRUD

pub mod item;
