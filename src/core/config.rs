use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::chain::ChainDescriptor;

/// Session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// The chain every connect flow steers the provider towards.
    #[serde(default = "SessionConfig::default_target_chain")]
    pub target_chain: ChainDescriptor,

    /// Fractional digits shown in the formatted balance.
    #[serde(default = "SessionConfig::default_balance_display_digits")]
    pub balance_display_digits: u32,
}

impl SessionConfig {
    fn default_target_chain() -> ChainDescriptor {
        ChainDescriptor::sepolia()
    }

    fn default_balance_display_digits() -> u32 {
        4
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("invalid session config")
    }

    /// Loads a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            target_chain: Self::default_target_chain(),
            balance_display_digits: Self::default_balance_display_digits(),
        }
    }
}
