// ABOUTME: Environment configuration for storage location and onboarding input limits
// ABOUTME: Parses CALPLAN_* variables into typed, validated configuration structs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration for storage and onboarding

use super::{apply_env_var, ConfigError};
use calplan_core::constants::{env_config, onboarding, service_names};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// File name of the profile document inside the data directory
const PROFILE_DOCUMENT_NAME: &str = "profile.json";

/// Where profile documents are kept
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local, lost on exit
    Memory,
    /// JSON document in the data directory
    #[default]
    File,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "file" | "json" => Ok(Self::File),
            other => Err(ConfigError::Parse(format!(
                "Unknown storage backend '{other}' (expected 'memory' or 'file')"
            ))),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::File => write!(f, "file"),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Selected backend
    pub backend: StorageBackend,
    /// Directory holding the profile document
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `CALPLAN_STORAGE` names an unknown backend
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        apply_env_var(env_config::STORAGE_BACKEND, &mut config.backend)?;
        if let Ok(dir) = env::var(env_config::DATA_DIR) {
            config.data_dir = PathBuf::from(dir);
        }
        info!(
            storage.backend = %config.backend,
            storage.data_dir = %config.data_dir.display(),
            "Storage configuration loaded"
        );
        Ok(config)
    }

    /// Full path of the profile document
    #[must_use]
    pub fn document_path(&self) -> PathBuf {
        self.data_dir.join(PROFILE_DOCUMENT_NAME)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(service_names::CALPLAN)
}

/// Bounds applied to onboarding inputs, matching the wizard's selection lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingLimits {
    /// Smallest accepted height (cm)
    pub min_height_cm: f64,
    /// Largest accepted height (cm)
    pub max_height_cm: f64,
    /// Smallest accepted weight (kg)
    pub min_weight_kg: f64,
    /// Largest accepted weight (kg)
    pub max_weight_kg: f64,
    /// Earliest accepted birth year
    pub min_birth_year: i32,
}

impl Default for OnboardingLimits {
    fn default() -> Self {
        Self {
            min_height_cm: onboarding::MIN_HEIGHT_CM,
            max_height_cm: onboarding::MAX_HEIGHT_CM,
            min_weight_kg: onboarding::MIN_WEIGHT_KG,
            max_weight_kg: onboarding::MAX_WEIGHT_KG,
            min_birth_year: onboarding::MIN_BIRTH_YEAR,
        }
    }
}

impl OnboardingLimits {
    /// Load limits from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or bounds are inverted
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut limits = Self::default();
        apply_env_var(env_config::MIN_HEIGHT_CM, &mut limits.min_height_cm)?;
        apply_env_var(env_config::MAX_HEIGHT_CM, &mut limits.max_height_cm)?;
        apply_env_var(env_config::MIN_WEIGHT_KG, &mut limits.min_weight_kg)?;
        apply_env_var(env_config::MAX_WEIGHT_KG, &mut limits.max_weight_kg)?;
        limits.validate()?;
        Ok(limits)
    }

    /// Validate bound ordering
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not finite, or a minimum is non-positive or
    /// not below its maximum
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bounds = [
            self.min_height_cm,
            self.max_height_cm,
            self.min_weight_kg,
            self.max_weight_kg,
        ];
        if !bounds.into_iter().all(f64::is_finite) {
            return Err(ConfigError::ValueOutOfRange(
                "Height and weight bounds must be finite numbers",
            ));
        }
        if self.min_height_cm <= 0.0 || self.min_weight_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Minimum height and weight must be positive",
            ));
        }
        if self.min_height_cm >= self.max_height_cm {
            return Err(ConfigError::InvalidRange(
                "min_height_cm must be < max_height_cm",
            ));
        }
        if self.min_weight_kg >= self.max_weight_kg {
            return Err(ConfigError::InvalidRange(
                "min_weight_kg must be < max_weight_kg",
            ));
        }
        Ok(())
    }

    /// Whether a height lies within the selectable range
    #[must_use]
    pub fn accepts_height(&self, height_cm: f64) -> bool {
        (self.min_height_cm..=self.max_height_cm).contains(&height_cm)
    }

    /// Whether a weight lies within the selectable range
    #[must_use]
    pub fn accepts_weight(&self, weight_kg: f64) -> bool {
        (self.min_weight_kg..=self.max_weight_kg).contains(&weight_kg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_backend_parsing() {
        assert_eq!("MEMORY".parse::<StorageBackend>().unwrap(), StorageBackend::Memory);
        assert_eq!("file".parse::<StorageBackend>().unwrap(), StorageBackend::File);
        assert!("redis".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn test_document_path() {
        let config = StorageConfig {
            backend: StorageBackend::File,
            data_dir: PathBuf::from("/tmp/calplan-test"),
        };
        assert_eq!(
            config.document_path(),
            PathBuf::from("/tmp/calplan-test/profile.json")
        );
    }

    #[test]
    fn test_onboarding_limits_bounds_are_inclusive() {
        let limits = OnboardingLimits::default();
        assert!(limits.accepts_height(140.0));
        assert!(limits.accepts_height(220.0));
        assert!(!limits.accepts_height(221.0));
        assert!(limits.accepts_weight(40.0));
        assert!(!limits.accepts_weight(39.9));
        assert!(!limits.accepts_weight(f64::NAN));
    }

    #[test]
    fn test_onboarding_limits_reject_non_finite_bounds() {
        for bound in [f64::NAN, f64::INFINITY] {
            let limits = OnboardingLimits {
                max_height_cm: bound,
                ..OnboardingLimits::default()
            };
            assert!(limits.validate().is_err(), "max_height_cm = {bound}");
        }
    }

    #[test]
    fn test_onboarding_limits_reject_inverted_range() {
        let limits = OnboardingLimits {
            min_weight_kg: 150.0,
            max_weight_kg: 40.0,
            ..OnboardingLimits::default()
        };
        assert!(limits.validate().is_err());
    }
}
