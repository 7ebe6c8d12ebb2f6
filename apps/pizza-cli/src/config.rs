//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. A positional argument can override the order file.
//!
//! ## Environment
//! ```text
//! PIZZA_ORDER_FILE=order.toml   # optional, order to build
//! PIZZA_OUTPUT=text|json        # default: text
//! RUST_LOG=debug                # log filter (see main.rs)
//! ```

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{CliError, CliResult};

/// Environment variable naming the order file.
pub const ORDER_FILE_VAR: &str = "PIZZA_ORDER_FILE";

/// Environment variable selecting the output format.
pub const OUTPUT_VAR: &str = "PIZZA_OUTPUT";

// =============================================================================
// Output Format
// =============================================================================

/// How a built pizza is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The one-line `Display` form.
    #[default]
    Text,

    /// Pretty-printed JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidConfig(format!(
                "Unknown output format: '{}'. Valid options: text, json",
                other
            ))),
        }
    }
}

// =============================================================================
// CLI Configuration
// =============================================================================

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Order file to build, if any.
    pub order_file: Option<PathBuf>,

    /// Output format for the built pizza.
    pub output: OutputFormat,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> CliResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CliResult<Self> {
        let order_file = lookup(ORDER_FILE_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let output = match lookup(OUTPUT_VAR) {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };

        Ok(CliConfig { order_file, output })
    }

    /// Overrides the order file with a command-line argument, when given.
    pub fn with_order_file_arg(mut self, arg: Option<String>) -> Self {
        if let Some(path) = arg {
            self.order_file = Some(PathBuf::from(path));
        }
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CliConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.output, OutputFormat::Text);
        assert!(config.order_file.is_none());
    }

    #[test]
    fn test_reads_environment_values() {
        let config = CliConfig::from_lookup(lookup_from(&[
            (ORDER_FILE_VAR, "orders/friday.toml"),
            (OUTPUT_VAR, "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.order_file, Some(PathBuf::from("orders/friday.toml")));
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_blank_order_file_is_ignored() {
        let config = CliConfig::from_lookup(lookup_from(&[(ORDER_FILE_VAR, "  ")])).unwrap();
        assert!(config.order_file.is_none());
    }

    #[test]
    fn test_rejects_unknown_output_format() {
        let err = CliConfig::from_lookup(lookup_from(&[(OUTPUT_VAR, "yaml")])).unwrap_err();
        assert!(matches!(err, CliError::InvalidConfig(_)));
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn test_only_text_and_json_formats_are_accepted() {
        assert_eq!(" Text ".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);

        for value in ["plain", "", "txt"] {
            let err = value.parse::<OutputFormat>().unwrap_err();
            assert!(matches!(err, CliError::InvalidConfig(_)));
        }
    }

    #[test]
    fn test_argument_overrides_environment() {
        let config = CliConfig::from_lookup(lookup_from(&[(ORDER_FILE_VAR, "env.toml")]))
            .unwrap()
            .with_order_file_arg(Some("arg.toml".to_string()));
        assert_eq!(config.order_file, Some(PathBuf::from("arg.toml")));

        let config = CliConfig::from_lookup(lookup_from(&[(ORDER_FILE_VAR, "env.toml")]))
            .unwrap()
            .with_order_file_arg(None);
        assert_eq!(config.order_file, Some(PathBuf::from("env.toml")));
    }

    #[test]
    fn test_output_format_display_round_trip() {
        for format in [OutputFormat::Text, OutputFormat::Json] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }
}
