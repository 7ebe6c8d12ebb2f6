//! # pizza-core: Pure Domain Logic for Pizza Builder
//!
//! This crate holds the builder and the immutable pizza it produces, with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Pizza Builder Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    pizza CLI (apps/pizza-cli)                   │   │
//! │  │        env config ──► order.toml ──► print pizza               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pizza-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │  builder  │  │   types   │  │ validation│                  │   │
//! │  │   │  Pizza-   │─►│   Pizza   │  │  require_ │                  │   │
//! │  │   │  Builder  │  │ PizzaOrder│  │   text    │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK                                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`builder`] - The mutable `PizzaBuilder`
//! - [`types`] - The immutable `Pizza`, `PizzaField` and the `PizzaOrder` DTO
//! - [`error`] - Domain error types
//! - [`validation`] - The shared text validation rule
//!
//! ## Example Usage
//!
//! ```rust
//! use pizza_core::PizzaBuilder;
//!
//! # fn main() -> Result<(), pizza_core::ValidationError> {
//! let mut builder = PizzaBuilder::new();
//! builder
//!     .set_crust("Thick")?
//!     .set_size("Large")?
//!     .add_topping("Pepperoni")?;
//!
//! let pizza = builder.build();
//! assert_eq!(pizza.crust(), "Thick");
//! assert_eq!(pizza.cheese(), "Mozzarella");
//! assert_eq!(pizza.toppings(), ["Pepperoni"]);
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod builder;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use pizza_core::PizzaBuilder` instead of
// `use pizza_core::builder::PizzaBuilder`

pub use builder::PizzaBuilder;
pub use error::ValidationError;
pub use types::*;
pub use validation::ValidationResult;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Crust used when `set_crust` is never called.
pub const DEFAULT_CRUST: &str = "Thin";

/// Size used when `set_size` is never called.
pub const DEFAULT_SIZE: &str = "Medium";

/// Cheese used when `set_cheese` is never called.
pub const DEFAULT_CHEESE: &str = "Mozzarella";

/// Sauce used when `set_sauce` is never called.
pub const DEFAULT_SAUCE: &str = "Tomato";
