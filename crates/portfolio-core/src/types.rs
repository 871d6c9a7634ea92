//! # Domain Types
//!
//! The `Item` entity and the shapes clients send to create, update and page
//! through it.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │     NewItem     │   │   ItemUpdate    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64, PK)   │   │  name           │   │  name?          │       │
//! │  │  name           │   │  description?   │   │  description?   │       │
//! │  │  description?   │   │                 │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │   Pagination    │   GET /items?skip=0&limit=100                      │
//! │  │  skip, limit    │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is assigned by the database on insert and never changes afterwards.
//! Clients never send it in a body; it only travels in the URL path.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::DEFAULT_PAGE_LIMIT;

// =============================================================================
// Item
// =============================================================================

/// A stored item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Item {
    /// Primary key, generated by the store.
    #[ts(type = "number")]
    pub id: i64,

    /// Display name. Never blank.
    pub name: String,

    /// Optional free-form description.
    pub description: Option<String>,
}

// =============================================================================
// NewItem
// =============================================================================

/// Body of `POST /items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewItem {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

impl NewItem {
    /// Convenience constructor, mostly used by tests and seeding.
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
        NewItem {
            name: name.into(),
            description: description.map(str::to_string),
        }
    }
}

// =============================================================================
// ItemUpdate
// =============================================================================

/// Body of `PUT /items/{id}`.
///
/// ## Partial Update Semantics
/// ```text
/// stored:  { name: "Lamp", description: "Desk lamp" }
/// update:  { name: "Floor lamp" }
///            │
///            ▼
/// result:  { name: "Floor lamp", description: "Desk lamp" }
/// ```
/// A field that is omitted or `null` keeps its stored value. As a
/// consequence a description cannot be cleared back to `null` once set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemUpdate {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

impl ItemUpdate {
    /// Returns true when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }

    /// Merges the supplied fields over `item`, keeping everything else.
    pub fn apply_to(self, mut item: Item) -> Item {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(description) = self.description {
            item.description = Some(description);
        }
        item
    }
}

// =============================================================================
// Pagination
// =============================================================================

/// Offset/limit query parameters of `GET /items`.
///
/// Both are unsigned, so negative values are rejected while parsing the
/// query string rather than reaching the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Pagination {
    #[serde(default)]
    pub skip: u32,

    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            skip: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> Item {
        Item {
            id: 7,
            name: "Lamp".to_string(),
            description: Some("Desk lamp".to_string()),
        }
    }

    #[test]
    fn test_empty_update_keeps_item() {
        let update = ItemUpdate::default();
        assert!(update.is_empty());
        assert_eq!(update.apply_to(lamp()), lamp());
    }

    #[test]
    fn test_update_name_only() {
        let update = ItemUpdate {
            name: Some("Floor lamp".to_string()),
            description: None,
        };
        let updated = update.apply_to(lamp());

        assert_eq!(updated.id, 7);
        assert_eq!(updated.name, "Floor lamp");
        assert_eq!(updated.description.as_deref(), Some("Desk lamp"));
    }

    #[test]
    fn test_update_description_only() {
        let update = ItemUpdate {
            name: None,
            description: Some("Brass".to_string()),
        };
        let updated = update.apply_to(lamp());

        assert_eq!(updated.name, "Lamp");
        assert_eq!(updated.description.as_deref(), Some("Brass"));
    }

    #[test]
    fn test_new_item_description_is_optional() {
        let item: NewItem = serde_json::from_str(r#"{"name":"Chair"}"#).unwrap();
        assert_eq!(item, NewItem::new("Chair", None));

        let item: NewItem =
            serde_json::from_str(r#"{"name":"Chair","description":null}"#).unwrap();
        assert_eq!(item.description, None);
    }

    #[test]
    fn test_new_item_requires_name() {
        assert!(serde_json::from_str::<NewItem>(r#"{"description":"x"}"#).is_err());
        assert!(serde_json::from_str::<NewItem>(r#"{"name":42}"#).is_err());
        assert!(serde_json::from_str::<NewItem>(r#"{"name":null}"#).is_err());
    }

    #[test]
    fn test_null_update_field_means_unchanged() {
        let update: ItemUpdate =
            serde_json::from_str(r#"{"name":null,"description":"New"}"#).unwrap();
        assert_eq!(update.name, None);
        assert_eq!(update.description.as_deref(), Some("New"));
    }

    #[test]
    fn test_pagination_defaults() {
        let page: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(page, Pagination::default());
        assert_eq!(page.limit, DEFAULT_PAGE_LIMIT);

        assert!(serde_json::from_str::<Pagination>(r#"{"skip":-1}"#).is_err());
    }

    #[test]
    fn test_item_serializes_null_description() {
        let item = Item {
            id: 1,
            name: "Cup".to_string(),
            description: None,
        };
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"id":1,"name":"Cup","description":null}"#
        );
    }
}
