//! Error types for the simulation core

use thiserror::Error;

/// Errors raised by generators and wizard actions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// A form field could not be used by a generator
    #[error("invalid input for `{field}`: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },

    /// A currency code outside the fixed registry
    #[error("unsupported currency code `{0}`")]
    UnsupportedCurrency(String),

    /// Action is not available in the wizard's current state
    #[error("`{action}` is not available while the wizard is in the {state} state")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
}

impl SimulationError {
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        SimulationError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors raised while loading a [`crate::config::SimulatorConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_names_field() {
        let err = SimulationError::invalid_input("principal", "not a number");
        assert_eq!(
            err.to_string(),
            "invalid input for `principal`: not a number"
        );
    }

    #[test]
    fn test_invalid_transition_message() {
        let err = SimulationError::InvalidTransition {
            action: "submit",
            state: "result",
        };
        assert!(err.to_string().contains("result state"));
    }
}
