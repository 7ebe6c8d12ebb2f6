//! # pizza
//!
//! Command-line entry point for Pizza Builder.
//!
//! ## Usage
//! ```text
//! pizza                      # prints the readiness banner
//! pizza order.toml           # also builds and prints the ordered pizza
//! PIZZA_OUTPUT=json pizza order.toml
//! ```

mod config;
mod error;
mod order;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

fn main() -> anyhow::Result<()> {
    init_tracing();

    println!("Pizza Builder ready");
    println!("Use PizzaBuilder to create your custom pizza!");

    let config = CliConfig::load()?.with_order_file_arg(std::env::args().nth(1));
    info!(output = %config.output, order_file = ?config.order_file, "configuration loaded");

    let Some(path) = config.order_file.as_deref() else {
        return Ok(());
    };

    let order = order::load_order(path)
        .with_context(|| format!("Failed to load order from {}", path.display()))?;
    let pizza = order::build_pizza(&order)?;
    println!("{}", order::render(&pizza, config.output)?);

    Ok(())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=pizza=trace` - Show trace for pizza crates only
/// - Default: INFO level, DEBUG for pizza crates
///
/// Logs go to stderr so stdout only carries the banner and the pizza.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pizza=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
