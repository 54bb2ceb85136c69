// ABOUTME: Configuration module for nutrition plan formulas, onboarding limits and storage
// ABOUTME: Provides typed defaults, environment overrides and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration
//!
//! All configuration is environment-driven: every struct starts from typed
//! defaults and applies `CALPLAN_*` overrides, then validates.
//!
//! - `plan` - Formula coefficients and the formula version flag
//! - `environment` - Storage backend and onboarding input limits
//! - `error` - Configuration error type

/// Storage backend and onboarding limits loaded from the environment
pub mod environment;
/// Configuration error type
pub mod error;
/// Nutrition plan formula configuration
pub mod plan;

pub use environment::{OnboardingLimits, StorageBackend, StorageConfig};
pub use error::ConfigError;
pub use plan::{
    ActivityFactorsConfig, BmrConfig, DeficitStrategy, FormulaVersion, GoalAdjustmentConfig,
    MacronutrientConfig, PlanConfig,
};

use std::env;
use std::str::FromStr;

/// Parse and apply an environment variable override when the variable is set
pub(crate) fn apply_env_var<T: FromStr>(
    env_var_name: &str,
    target: &mut T,
) -> Result<(), ConfigError> {
    if let Ok(val) = env::var(env_var_name) {
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
    }
    Ok(())
}
