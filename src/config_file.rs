//! Configuration file handling for saving and loading demo configs.
//!
//! This module uses the type-safe [`EngineKind`] enum instead of strings for
//! engine selection, providing compile-time validation and preventing typos.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::types::EngineKind;

/// Demo configuration that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Engine the car is constructed with
    pub first_engine: EngineKind,
    /// Engine swapped in after the first start/stop cycle
    pub second_engine: EngineKind,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            first_engine: EngineKind::Petrol,
            second_engine: EngineKind::Electric,
        }
    }
}

impl DemoConfig {
    /// Create a new configuration with sensible defaults
    #[allow(dead_code)] // API: Constructor for external consumers
    pub fn new() -> Self {
        Self::default()
    }

    /// Save configuration to a JSON file
    #[allow(dead_code)] // API: Used when persisting a configured demo
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // The demo shows engine replacement; swapping in the same kind would
        // make the "never the old variant's output" property vacuous.
        if self.first_engine == self.second_engine {
            anyhow::bail!(
                "First and second engine must differ (both are {})",
                self.first_engine
            );
        }

        Ok(())
    }
}
