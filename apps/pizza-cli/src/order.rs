//! Order file loading.
//!
//! ## File Format
//! ```toml
//! crust = "Thick"
//! size = "Large"
//! cheese = "Cheddar"
//! sauce = "BBQ"
//! toppings = ["Pepperoni", "Mushrooms"]
//! ```
//!
//! Every key is optional. Missing scalars keep the builder defaults.

use std::fs;
use std::path::Path;

use pizza_core::{Pizza, PizzaBuilder, PizzaOrder};
use tracing::{debug, info};

use crate::config::OutputFormat;
use crate::error::{CliError, CliResult};

/// Reads and parses the order file at `path`.
pub fn load_order(path: &Path) -> CliResult<PizzaOrder> {
    debug!(path = %path.display(), "reading order file");
    let contents = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_order(&contents)
}

/// Parses an order from TOML text.
pub fn parse_order(contents: &str) -> CliResult<PizzaOrder> {
    Ok(toml::from_str(contents)?)
}

/// Applies `order` to a fresh builder and builds the pizza.
pub fn build_pizza(order: &PizzaOrder) -> CliResult<Pizza> {
    let mut builder = PizzaBuilder::new();
    builder.apply_order(order)?;
    let pizza = builder.build();
    info!(toppings = pizza.toppings().len(), "pizza built from order");
    Ok(pizza)
}

/// Renders a pizza in the configured output format.
pub fn render(pizza: &Pizza, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(pizza.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(pizza)?),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
