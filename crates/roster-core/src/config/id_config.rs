use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{RosterError, RosterResult};

/// How record ids are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// `prefix + random(0..upper_bound)`. Collisions are possible.
    #[default]
    Random,
    /// `prefix + n` with a per-session counter starting at 1.
    Sequential,
}

/// Id generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IdConfig {
    pub strategy: IdStrategy,
    /// Text prepended to every id.
    pub prefix: String,
    /// Exclusive upper bound of the random suffix.
    pub random_upper_bound: u32,
}

impl IdConfig {
    pub(crate) fn validate(&self) -> RosterResult<()> {
        if self.random_upper_bound == 0 {
            return Err(RosterError::ConfigError(
                "ids.random_upper_bound must be > 0".into(),
            ));
        }
        Ok(())
    }
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            strategy: IdStrategy::default(),
            prefix: defaults::DEFAULT_ID_PREFIX.to_string(),
            random_upper_bound: defaults::DEFAULT_RANDOM_ID_UPPER_BOUND,
        }
    }
}
