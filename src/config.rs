//! Tool configuration.
//!
//! Handles loading and validating `larder.toml`. Every setting has a stock
//! default, so the file is optional and may be sparse; command-line flags
//! override whatever the file says.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! catalog = "recipes.txt"   # Recipe catalog file
//!
//! [shopping]
//! persons = 1               # Head count when --persons is not given
//!
//! [bundle]
//! output = "bundle.txt"     # Bundle file name, created inside the notes dir
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings loaded from `larder.toml`.
///
/// All fields have sensible defaults. A config file need only specify the
/// values it wants to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path to the recipe catalog file.
    #[serde(default = "default_catalog")]
    pub catalog: String,
    /// Shopping list settings.
    pub shopping: ShoppingConfig,
    /// Note bundling settings.
    pub bundle: BundleConfig,
}

fn default_catalog() -> String {
    "recipes.txt".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            shopping: ShoppingConfig::default(),
            bundle: BundleConfig::default(),
        }
    }
}

impl Config {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.is_empty() {
            return Err(ConfigError::Validation("catalog must not be empty".into()));
        }
        if self.shopping.persons == 0 {
            return Err(ConfigError::Validation(
                "shopping.persons must be at least 1".into(),
            ));
        }
        if self.bundle.output.is_empty() {
            return Err(ConfigError::Validation(
                "bundle.output must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Shopping list settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShoppingConfig {
    /// Head count used when `--persons` is not given on the command line.
    pub persons: u64,
}

impl Default for ShoppingConfig {
    fn default() -> Self {
        Self { persons: 1 }
    }
}

/// Note bundling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BundleConfig {
    /// Output file name. Resolved against the notes directory unless it is
    /// an absolute path.
    pub output: String,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            output: "bundle.txt".to_string(),
        }
    }
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Load config from the given file, falling back to stock defaults when it
/// does not exist.
///
/// A file that exists but fails to parse or validate is an error; silently
/// ignoring a broken config would hide typos.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `larder.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Larder Configuration
# ====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Unknown keys will cause an error.

# Path to the recipe catalog file.
catalog = "recipes.txt"

# ---------------------------------------------------------------------------
# Shopping lists
# ---------------------------------------------------------------------------
[shopping]
# Head count used when --persons is not given on the command line.
persons = 1

# ---------------------------------------------------------------------------
# Note bundling
# ---------------------------------------------------------------------------
[bundle]
# Output file name, created inside the notes directory unless --out points
# somewhere else. An absolute path is used as-is.
output = "bundle.txt"
"##
}
