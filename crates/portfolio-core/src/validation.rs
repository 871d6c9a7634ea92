//! # Validation Module
//!
//! Input validation for item request bodies.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shape (serde, in the HTTP extractor)                          │
//! │  ├── Required fields present                                            │
//! │  └── Correct JSON types                                                 │
//! │                                                                         │
//! │  Layer 2: Content (THIS MODULE)                                         │
//! │  ├── name not blank                                                     │
//! │  └── length limits                                                      │
//! │                                                                         │
//! │  Layer 3: Database constraints                                          │
//! │  └── NOT NULL on name, primary key uniqueness                           │
//! │                                                                         │
//! │  Layers 1 and 2 both answer 422 and run before a session is acquired.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use portfolio_core::validation::Validate;
//! use portfolio_core::NewItem;
//!
//! assert!(NewItem::new("Chair", None).validate().is_ok());
//! assert!(NewItem::new("   ", None).validate().is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{ItemUpdate, NewItem};
use crate::{MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Content checks run on a deserialized request body.
pub trait Validate {
    fn validate(&self) -> ValidationResult<()>;
}

impl Validate for NewItem {
    fn validate(&self) -> ValidationResult<()> {
        validate_name(&self.name)?;
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        Ok(())
    }
}

impl Validate for ItemUpdate {
    fn validate(&self) -> ValidationResult<()> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        Ok(())
    }
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
/// - At most MAX_NAME_LENGTH (255) characters
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates an item description.
///
/// Empty descriptions are allowed; only the length is bounded.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Test Item").is_ok());
        assert!(validate_name(&"é".repeat(MAX_NAME_LENGTH)).is_ok());

        assert_eq!(
            validate_name(""),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );
        assert!(validate_name("  \t ").is_err());
        assert!(validate_name(&"A".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("").is_ok());
        assert!(validate_description("This is a test item").is_ok());
        assert!(validate_description(&"x".repeat(MAX_DESCRIPTION_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_new_item_validation() {
        assert!(NewItem::new("Test Item", Some("This is a test item"))
            .validate()
            .is_ok());
        assert!(NewItem::new("", Some("no name")).validate().is_err());
    }

    #[test]
    fn test_update_validation_only_checks_present_fields() {
        assert!(ItemUpdate::default().validate().is_ok());

        let blank_name = ItemUpdate {
            name: Some(" ".to_string()),
            description: None,
        };
        assert!(blank_name.validate().is_err());

        let description_only = ItemUpdate {
            name: None,
            description: Some(String::new()),
        };
        assert!(description_only.validate().is_ok());
    }
}
