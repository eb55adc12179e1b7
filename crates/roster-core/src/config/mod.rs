//! Configuration for every Roster subsystem, loaded from TOML.
//!
//! Every section is `#[serde(default)]`, so an empty document yields the
//! defaults in [`defaults`].

pub mod defaults;
mod id_config;
mod observability_config;
mod validation_config;

pub use id_config::{IdConfig, IdStrategy};
pub use observability_config::ObservabilityConfig;
pub use validation_config::ValidationConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{RosterError, RosterResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub ids: IdConfig,
    pub validation: ValidationConfig,
    pub observability: ObservabilityConfig,
}

impl RosterConfig {
    /// Parse a TOML document and check the resulting values.
    pub fn from_toml(source: &str) -> RosterResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| RosterError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> RosterResult<String> {
        toml::to_string(self).map_err(|e| RosterError::ConfigError(e.to_string()))
    }

    /// Reject combinations no subsystem can work with.
    pub fn validate(&self) -> RosterResult<()> {
        self.ids.validate()?;
        self.validation.validate()?;
        Ok(())
    }
}
