//! Gateway configuration
//!
//! Every field has a default, so a config file only needs the values it
//! overrides:
//!
//! ```json
//! { "default_currency": "MYR", "wealth_latency_ms": 1000 }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::currency::Currency;
use crate::error::ConfigError;
use crate::projection::Engine;

/// Simulated thinking time of the career engine
pub const DEFAULT_CAREER_LATENCY_MS: u64 = 2_200;

/// Simulated thinking time of the wealth engine
pub const DEFAULT_WEALTH_LATENCY_MS: u64 = 2_500;

/// Upper bound accepted for either latency
pub const MAX_LATENCY_MS: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Currency selected when the session starts
    pub default_currency: Currency,

    /// Wizard visible when the gateway starts
    pub default_mode: Engine,

    pub career_latency_ms: u64,
    pub wealth_latency_ms: u64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            default_currency: Currency::Usd,
            default_mode: Engine::Career,
            career_latency_ms: DEFAULT_CAREER_LATENCY_MS,
            wealth_latency_ms: DEFAULT_WEALTH_LATENCY_MS,
        }
    }
}

impl SimulatorConfig {
    /// Load and validate a JSON config file
    pub fn from_json_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("career_latency_ms", self.career_latency_ms),
            ("wealth_latency_ms", self.wealth_latency_ms),
        ] {
            if value > MAX_LATENCY_MS {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{} ms exceeds the {} ms limit", value, MAX_LATENCY_MS),
                });
            }
        }
        Ok(())
    }

    /// Pending-state latency for `engine`
    pub fn latency(&self, engine: Engine) -> Duration {
        match engine {
            Engine::Career => Duration::from_millis(self.career_latency_ms),
            Engine::Wealth => Duration::from_millis(self.wealth_latency_ms),
        }
    }
}
