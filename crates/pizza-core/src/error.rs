//! # Error Types
//!
//! Domain-specific error types for pizza-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pizza-core errors (this file)                                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  pizza-cli errors (separate crate)                                     │
//! │  └── CliError         - Config, file and parse failures                │
//! │                                                                         │
//! │  Flow: ValidationError → CliError → anyhow (main)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every error names the field it is about
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::types::PizzaField;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by every builder mutator before any state is touched, so a
/// rejected call never changes the builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The value was absent, empty, or whitespace only.
    ///
    /// ## When This Occurs
    /// ```text
    /// builder.set_crust("   ")
    ///      │
    ///      ▼
    /// require_text: trimmed value is empty
    ///      │
    ///      ▼
    /// Blank { field: Crust }  →  "crust must not be blank"
    /// ```
    #[error("{field} must not be blank")]
    Blank { field: PizzaField },
}

impl ValidationError {
    /// Returns the field that failed validation.
    pub fn field(&self) -> PizzaField {
        match self {
            ValidationError::Blank { field } => *field,
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
    fn test_validation_error_messages() {
        let err = ValidationError::Blank {
            field: PizzaField::Crust,
        };
        assert_eq!(err.to_string(), "crust must not be blank");

        let err = ValidationError::Blank {
            field: PizzaField::Topping,
        };
        assert_eq!(err.to_string(), "topping must not be blank");
    }

    #[test]
    fn test_validation_error_field() {
        let err = ValidationError::Blank {
            field: PizzaField::Sauce,
        };
        assert_eq!(err.field(), PizzaField::Sauce);
    }
}
