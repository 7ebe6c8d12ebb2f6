//! # Builder Module
//!
//! Provides [`PizzaBuilder`], the mutable accumulator that produces
//! immutable [`Pizza`] values.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      PizzaBuilder Lifecycle                             │
//! │                                                                         │
//! │  new() ──► Thin / Medium / Mozzarella / Tomato, no toppings            │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  set_* / add_topping / apply_order   (any number, any order)           │
//! │    │         │                                                          │
//! │    │         └── blank value? → Err, builder unchanged                 │
//! │    ▼                                                                    │
//! │  build() ──► Pizza snapshot        (repeatable, builder not consumed)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pizza_core::PizzaBuilder;
//!
//! # fn main() -> Result<(), pizza_core::ValidationError> {
//! let mut builder = PizzaBuilder::new();
//! builder.set_crust("Thin")?.add_topping("Basil")?;
//! let margherita = builder.build();
//!
//! builder.add_topping("Salami")?;
//! let salami = builder.build();
//!
//! assert_eq!(margherita.toppings(), ["Basil"]);
//! assert_eq!(salami.toppings(), ["Basil", "Salami"]);
//! # Ok(())
//! # }
//! ```

use tracing::{debug, trace};

use crate::types::{Pizza, PizzaField, PizzaOrder};
use crate::validation::{require_text, ValidationResult};
use crate::{DEFAULT_CHEESE, DEFAULT_CRUST, DEFAULT_SAUCE, DEFAULT_SIZE};

// =============================================================================
// Pizza Builder
// =============================================================================

/// Accumulates pizza attributes and builds [`Pizza`] snapshots.
///
/// Every mutator takes `&str` or `Option<&str>` (`None` is an absent value)
/// and returns `&mut Self` so calls can be chained with `?`. Values are
/// trimmed on the way in; blank values are rejected before anything is
/// assigned.
#[derive(Debug, Clone)]
pub struct PizzaBuilder {
    crust: String,
    size: String,
    cheese: String,
    sauce: String,
    toppings: Vec<String>,
}

impl PizzaBuilder {
    /// Creates a builder holding the default pizza.
    pub fn new() -> Self {
        PizzaBuilder {
            crust: DEFAULT_CRUST.to_string(),
            size: DEFAULT_SIZE.to_string(),
            cheese: DEFAULT_CHEESE.to_string(),
            sauce: DEFAULT_SAUCE.to_string(),
            toppings: Vec::new(),
        }
    }

    /// Sets the crust, e.g. "Thin", "Thick", "Stuffed", "Gluten-Free".
    ///
    /// Last call wins.
    pub fn set_crust<'a>(
        &mut self,
        value: impl Into<Option<&'a str>>,
    ) -> ValidationResult<&mut Self> {
        self.crust = accept(value, PizzaField::Crust)?;
        Ok(self)
    }

    /// Sets the size, e.g. "Small", "Medium", "Large", "Extra Large".
    pub fn set_size<'a>(
        &mut self,
        value: impl Into<Option<&'a str>>,
    ) -> ValidationResult<&mut Self> {
        self.size = accept(value, PizzaField::Size)?;
        Ok(self)
    }

    /// Sets the cheese, e.g. "Mozzarella", "Cheddar", "Parmesan".
    pub fn set_cheese<'a>(
        &mut self,
        value: impl Into<Option<&'a str>>,
    ) -> ValidationResult<&mut Self> {
        self.cheese = accept(value, PizzaField::Cheese)?;
        Ok(self)
    }

    /// Sets the sauce, e.g. "Tomato", "BBQ", "White", "Pesto".
    pub fn set_sauce<'a>(
        &mut self,
        value: impl Into<Option<&'a str>>,
    ) -> ValidationResult<&mut Self> {
        self.sauce = accept(value, PizzaField::Sauce)?;
        Ok(self)
    }

    /// Appends a topping. Order is kept and duplicates are allowed.
    pub fn add_topping<'a>(
        &mut self,
        value: impl Into<Option<&'a str>>,
    ) -> ValidationResult<&mut Self> {
        let topping = accept(value, PizzaField::Topping)?;
        self.toppings.push(topping);
        Ok(self)
    }

    /// Applies every field present in `order` and appends its toppings.
    ///
    /// All values are validated before the builder is touched: if any of
    /// them is blank, the error names that field and nothing is applied.
    ///
    /// ## Example
    /// ```rust
    /// use pizza_core::{PizzaBuilder, PizzaField, PizzaOrder};
    ///
    /// let mut builder = PizzaBuilder::new();
    /// let order = PizzaOrder {
    ///     sauce: Some("Pesto".to_string()),
    ///     toppings: vec!["Olives".to_string(), " ".to_string()],
    ///     ..PizzaOrder::default()
    /// };
    ///
    /// let err = builder.apply_order(&order).unwrap_err();
    /// assert_eq!(err.field(), PizzaField::Topping);
    /// assert_eq!(builder.build().sauce(), "Tomato");
    /// ```
    pub fn apply_order(&mut self, order: &PizzaOrder) -> ValidationResult<&mut Self> {
        let mut staged = self.clone();

        if let Some(crust) = order.crust.as_deref() {
            staged.set_crust(crust)?;
        }
        if let Some(size) = order.size.as_deref() {
            staged.set_size(size)?;
        }
        if let Some(cheese) = order.cheese.as_deref() {
            staged.set_cheese(cheese)?;
        }
        if let Some(sauce) = order.sauce.as_deref() {
            staged.set_sauce(sauce)?;
        }
        for topping in &order.toppings {
            staged.add_topping(topping.as_str())?;
        }

        *self = staged;
        Ok(self)
    }

    /// Builds a pizza from the current state.
    ///
    /// The builder is left as is and can keep being mutated and built;
    /// each pizza holds its own copy of the toppings.
    pub fn build(&self) -> Pizza {
        debug!(
            crust = %self.crust,
            size = %self.size,
            cheese = %self.cheese,
            sauce = %self.sauce,
            toppings = self.toppings.len(),
            "building pizza"
        );
        Pizza::new(
            &self.crust,
            &self.size,
            &self.cheese,
            &self.sauce,
            &self.toppings,
        )
    }
}

impl Default for PizzaBuilder {
    fn default() -> Self {
        PizzaBuilder::new()
    }
}

fn accept<'a>(
    value: impl Into<Option<&'a str>>,
    field: PizzaField,
) -> ValidationResult<String> {
    let text = require_text(value, field)?;
    trace!(%field, value = %text, "accepted");
    Ok(text)
}

// =============================================================================
// Unit Tests
// =============================================================================
