// ABOUTME: Configuration error types for plan, onboarding and storage settings
// ABOUTME: Defines error variants for invalid ranges, parse failures and env access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types.

use crate::errors::{AppError, ErrorCode};
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two bounds are in the wrong order (e.g., minimum above maximum)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let message = error.to_string();
        let app_error = match &error {
            ConfigError::EnvVar(_) => Self::config(message),
            _ => Self::new(ErrorCode::ConfigInvalid, message),
        };
        app_error.with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_access_failure_is_a_config_error() {
        let error = AppError::from(ConfigError::EnvVar(env::VarError::NotPresent));
        assert_eq!(error.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_bad_value_is_invalid_config() {
        let error = AppError::from(ConfigError::ValueOutOfRange("horizon"));
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
        assert!(error.message.contains("horizon"));
    }
}
