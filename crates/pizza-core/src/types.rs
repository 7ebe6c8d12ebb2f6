//! # Domain Types
//!
//! The finished [`Pizza`], the [`PizzaField`] names used in errors, and the
//! [`PizzaOrder`] DTO that carries a pizza description in from outside.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Pizza       │   │   PizzaOrder    │   │   PizzaField    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  crust          │   │  crust?         │   │  Crust          │       │
//! │  │  size           │   │  size?          │   │  Size           │       │
//! │  │  cheese         │   │  cheese?        │   │  Cheese         │       │
//! │  │  sauce          │   │  sauce?         │   │  Sauce          │       │
//! │  │  toppings[]     │   │  toppings[]     │   │  Topping        │       │
//! │  │  (read-only)    │   │  (unvalidated)  │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `Pizza` owns copies of everything the builder held at `build()` time.
//! Later builder mutations never reach an existing pizza.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Pizza Field
// =============================================================================

/// Names a configurable pizza attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PizzaField {
    Crust,
    Size,
    Cheese,
    Sauce,
    /// A single entry in the toppings list.
    Topping,
}

impl PizzaField {
    /// Lowercase name used in error messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PizzaField::Crust => "crust",
            PizzaField::Size => "size",
            PizzaField::Cheese => "cheese",
            PizzaField::Sauce => "sauce",
            PizzaField::Topping => "topping",
        }
    }
}

impl fmt::Display for PizzaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Pizza
// =============================================================================

/// A finished pizza.
///
/// Only [`PizzaBuilder::build`](crate::PizzaBuilder::build) can create one.
/// All fields are private and there are no setters, so a pizza never changes
/// after it is built.
///
/// The toppings are exposed as a borrowed slice, which cannot be grown,
/// shrunk or cleared:
///
/// ```compile_fail
/// use pizza_core::PizzaBuilder;
///
/// let pizza = PizzaBuilder::new().build();
/// pizza.toppings().push("Olives".to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Pizza {
    crust: String,
    size: String,
    cheese: String,
    sauce: String,
    /// Toppings in the order they were added. Duplicates allowed.
    toppings: Vec<String>,
}

impl Pizza {
    /// Copies the builder's current values into a new pizza.
    ///
    /// Callers pass already validated, trimmed text.
    pub(crate) fn new(
        crust: &str,
        size: &str,
        cheese: &str,
        sauce: &str,
        toppings: &[String],
    ) -> Self {
        Pizza {
            crust: crust.to_string(),
            size: size.to_string(),
            cheese: cheese.to_string(),
            sauce: sauce.to_string(),
            toppings: toppings.to_vec(),
        }
    }

    #[inline]
    pub fn crust(&self) -> &str {
        &self.crust
    }

    #[inline]
    pub fn size(&self) -> &str {
        &self.size
    }

    #[inline]
    pub fn cheese(&self) -> &str {
        &self.cheese
    }

    #[inline]
    pub fn sauce(&self) -> &str {
        &self.sauce
    }

    /// Returns a read-only view of the toppings in insertion order.
    #[inline]
    pub fn toppings(&self) -> &[String] {
        &self.toppings
    }
}

/// Renders the pizza on one line, e.g.
/// `Pizza{crust='Thin', size='Medium', cheese='Mozzarella', sauce='Tomato', toppings=[Olives]}`.
impl fmt::Display for Pizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pizza{{crust='{}', size='{}', cheese='{}', sauce='{}', toppings=[{}]}}",
            self.crust,
            self.size,
            self.cheese,
            self.sauce,
            self.toppings.join(", ")
        )
    }
}

// =============================================================================
// Pizza Order
// =============================================================================

/// An unvalidated pizza description, as read from an order file.
///
/// Missing scalar fields keep whatever the builder already holds. Toppings
/// are appended. Apply it with
/// [`PizzaBuilder::apply_order`](crate::PizzaBuilder::apply_order).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PizzaOrder {
    #[serde(default)]
    pub crust: Option<String>,

    #[serde(default)]
    pub size: Option<String>,

    #[serde(default)]
    pub cheese: Option<String>,

    #[serde(default)]
    pub sauce: Option<String>,

    #[serde(default)]
    pub toppings: Vec<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
