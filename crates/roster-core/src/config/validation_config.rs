use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{RosterError, RosterResult};

/// Bounds used by the field rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Fewest digits accepted in a mobile number.
    pub mobile_min_digits: usize,
    /// Most digits accepted in a mobile number.
    pub mobile_max_digits: usize,
    /// Smallest accepted payment limit (inclusive).
    pub min_payment_limit: f64,
}

impl ValidationConfig {
    pub(crate) fn validate(&self) -> RosterResult<()> {
        if self.mobile_min_digits == 0 {
            return Err(RosterError::ConfigError(
                "validation.mobile_min_digits must be > 0".into(),
            ));
        }
        if self.mobile_min_digits > self.mobile_max_digits {
            return Err(RosterError::ConfigError(format!(
                "validation.mobile_min_digits ({}) exceeds mobile_max_digits ({})",
                self.mobile_min_digits, self.mobile_max_digits
            )));
        }
        if !self.min_payment_limit.is_finite() {
            return Err(RosterError::ConfigError(
                "validation.min_payment_limit must be finite".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            mobile_min_digits: defaults::DEFAULT_MOBILE_MIN_DIGITS,
            mobile_max_digits: defaults::DEFAULT_MOBILE_MAX_DIGITS,
            min_payment_limit: defaults::DEFAULT_MIN_PAYMENT_LIMIT,
        }
    }
}
