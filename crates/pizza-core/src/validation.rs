//! # Validation Module
//!
//! The single text rule every builder mutator runs before it assigns.
//!
//! ## Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  require_text(value, field)                                             │
//! │                                                                         │
//! │  None            ──► Err(Blank { field })                              │
//! │  ""              ──► Err(Blank { field })                              │
//! │  "   "           ──► Err(Blank { field })                              │
//! │  "  Thick  "     ──► Ok("Thick")                                       │
//! │  " Ham & Onion " ──► Ok("Ham & Onion")   (inner spaces kept)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pizza_core::validation::require_text;
//! use pizza_core::PizzaField;
//!
//! assert_eq!(require_text("  Thick  ", PizzaField::Crust).unwrap(), "Thick");
//! assert!(require_text(None::<&str>, PizzaField::Crust).is_err());
//! ```

use tracing::debug;

use crate::error::ValidationError;
use crate::types::PizzaField;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates that a text value is present and not blank.
///
/// Accepts `&str` or `Option<&str>`; `None` stands for an absent value.
///
/// ## Returns
/// The value with leading and trailing whitespace removed.
pub fn require_text<'a>(
    value: impl Into<Option<&'a str>>,
    field: PizzaField,
) -> ValidationResult<String> {
    match value.into().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => {
            debug!(%field, "rejected blank value");
            Err(ValidationError::Blank { field })
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_trims() {
        assert_eq!(require_text("  Thick  ", PizzaField::Crust).unwrap(), "Thick");
        assert_eq!(require_text("\tLarge\n", PizzaField::Size).unwrap(), "Large");
        assert_eq!(require_text("Cheddar", PizzaField::Cheese).unwrap(), "Cheddar");
    }

    #[test]
    fn test_require_text_keeps_inner_whitespace() {
        assert_eq!(
            require_text("  Pepperoni & Sausage ", PizzaField::Topping).unwrap(),
            "Pepperoni & Sausage"
        );
    }

    #[test]
    fn test_require_text_rejects_absent_and_blank() {
        for input in [None, Some(""), Some("   "), Some("\t\n")] {
            let err = require_text(input, PizzaField::Sauce).unwrap_err();
            assert_eq!(
                err,
                ValidationError::Blank {
                    field: PizzaField::Sauce
                }
            );
        }
    }

    #[test]
    fn test_require_text_names_field() {
        let err = require_text("", PizzaField::Cheese).unwrap_err();
        assert!(err.to_string().contains("cheese"));
    }
}
