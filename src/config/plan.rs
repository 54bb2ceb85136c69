// ABOUTME: Nutrition plan formula configuration with versioned coefficient sets
// ABOUTME: Configures BMR coefficients, activity factors, goal adjustments and macro ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Plan Configuration
//!
//! Coefficients for the plan calculator. Two formula versions exist:
//!
//! - [`FormulaVersion::Current`] (default): 2.2 g/kg protein, 0.88 g/kg fat,
//!   weight loss modelled as a daily deficit of `rate * 7700 / 7` kcal.
//! - [`FormulaVersion::Legacy`]: 1.0 g/kg protein, 0.4 g/kg fat, weight loss
//!   modelled as 80% of TDEE.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241

use super::{apply_env_var, ConfigError};
use calplan_core::constants::{energy, env_config, horizon};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static PLAN_CONFIG: OnceLock<PlanConfig> = OnceLock::new();

/// Which generation of the plan formula to apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormulaVersion {
    /// Flat 1.0/0.4 g/kg macros with a percentage calorie cut
    Legacy,
    /// 2.2/0.88 g/kg macros with an energy-balance deficit
    #[default]
    Current,
}

impl FormulaVersion {
    /// Wire name of the version
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Current => "current",
        }
    }
}

impl fmt::Display for FormulaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormulaVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy" | "v1" => Ok(Self::Legacy),
            "current" | "v2" => Ok(Self::Current),
            other => Err(ConfigError::Parse(format!(
                "Unknown formula version '{other}' (expected 'current' or 'legacy')"
            ))),
        }
    }
}

/// Complete plan calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Formula generation these coefficients belong to
    pub formula_version: FormulaVersion,
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// Activity multipliers per workout frequency bucket
    pub activity_factors: ActivityFactorsConfig,
    /// Goal-specific calorie adjustment and weight change rate
    pub goal_adjustment: GoalAdjustmentConfig,
    /// Protein and fat targets per kilogram of body weight
    pub macronutrients: MacronutrientConfig,
    /// Projection window for target weight and date
    pub horizon_weeks: u32,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub weight_coef: f64,
    /// Height coefficient (6.25)
    pub height_coef: f64,
    /// Age coefficient (-5.0)
    pub age_coef: f64,
    /// Male constant (+5)
    pub male_constant: f64,
    /// Constant for female and other (-161)
    pub female_constant: f64,
}

/// Activity factor multipliers for TDEE, one per workout frequency bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// 0-2 workouts per week: 1.2
    pub occasional: f64,
    /// 3-5 workouts per week: 1.375
    pub regular: f64,
    /// 6+ workouts per week: 1.55
    pub dedicated: f64,
}

/// How a weight-loss goal turns TDEE into a calorie target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeficitStrategy {
    /// Subtract the daily share of `|weekly rate| * kcal_per_kg`
    EnergyBalance {
        /// Energy stored per kilogram of body weight
        kcal_per_kg: f64,
    },
    /// Multiply TDEE by a fixed factor
    CalorieFraction {
        /// Fraction of TDEE kept (0.8 = 20% cut)
        factor: f64,
    },
}

/// Goal-specific calorie adjustment configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Weekly weight change when losing weight (kg/week, negative)
    pub lose_weekly_rate_kg: f64,
    /// How the loss rate becomes a calorie target
    pub lose_strategy: DeficitStrategy,
    /// Weekly weight change when gaining weight (kg/week)
    pub gain_weekly_rate_kg: f64,
    /// TDEE multiplier when gaining weight (1.15)
    pub gain_calorie_factor: f64,
}

/// Macronutrient targets per kilogram of body weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacronutrientConfig {
    /// Protein (g/kg)
    pub protein_g_per_kg: f64,
    /// Fat (g/kg)
    pub fat_g_per_kg: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            weight_coef: 10.0,
            height_coef: 6.25,
            age_coef: -5.0,
            male_constant: 5.0,
            female_constant: -161.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            occasional: 1.2,
            regular: 1.375,
            dedicated: 1.55,
        }
    }
}

impl GoalAdjustmentConfig {
    /// Goal adjustment coefficients for a formula version
    #[must_use]
    pub const fn for_version(version: FormulaVersion) -> Self {
        let lose_strategy = match version {
            FormulaVersion::Legacy => DeficitStrategy::CalorieFraction { factor: 0.8 },
            FormulaVersion::Current => DeficitStrategy::EnergyBalance {
                kcal_per_kg: energy::KCAL_PER_KG_BODY_MASS,
            },
        };
        Self {
            lose_weekly_rate_kg: -0.5,
            lose_strategy,
            gain_weekly_rate_kg: 0.3,
            gain_calorie_factor: 1.15,
        }
    }
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self::for_version(FormulaVersion::Current)
    }
}

impl MacronutrientConfig {
    /// Macro ratios for a formula version
    #[must_use]
    pub const fn for_version(version: FormulaVersion) -> Self {
        match version {
            FormulaVersion::Legacy => Self {
                protein_g_per_kg: 1.0,
                fat_g_per_kg: 0.4,
            },
            FormulaVersion::Current => Self {
                protein_g_per_kg: 2.2,
                fat_g_per_kg: 0.88,
            },
        }
    }
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self::for_version(FormulaVersion::Current)
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self::for_version(FormulaVersion::Current)
    }
}

impl PlanConfig {
    /// Default coefficients for a formula version
    #[must_use]
    pub fn for_version(version: FormulaVersion) -> Self {
        Self {
            formula_version: version,
            bmr: BmrConfig::default(),
            activity_factors: ActivityFactorsConfig::default(),
            goal_adjustment: GoalAdjustmentConfig::for_version(version),
            macronutrients: MacronutrientConfig::for_version(version),
            horizon_weeks: horizon::DEFAULT_HORIZON_WEEKS,
        }
    }

    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLAN_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load plan config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from the environment
    ///
    /// The formula version is read first so that the remaining overrides are
    /// applied on top of that version's defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let version = match env::var(env_config::FORMULA_VERSION) {
            Ok(raw) => raw.parse()?,
            Err(env::VarError::NotPresent) => FormulaVersion::default(),
            Err(e) => return Err(e.into()),
        };

        let config = Self::for_version(version).apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        apply_env_var(env_config::HORIZON_WEEKS, &mut self.horizon_weeks)?;
        apply_env_var(
            env_config::PROTEIN_G_PER_KG,
            &mut self.macronutrients.protein_g_per_kg,
        )?;
        apply_env_var(
            env_config::FAT_G_PER_KG,
            &mut self.macronutrients.fat_g_per_kg,
        )?;

        if let DeficitStrategy::EnergyBalance { kcal_per_kg } =
            &mut self.goal_adjustment.lose_strategy
        {
            apply_env_var(env_config::KCAL_PER_KG_BODY_MASS, kcal_per_kg)?;
        }

        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid coefficient
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bmr = &self.bmr;
        let coefficients = [
            bmr.weight_coef,
            bmr.height_coef,
            bmr.age_coef,
            bmr.male_constant,
            bmr.female_constant,
        ];
        if !coefficients.into_iter().all(f64::is_finite) {
            return Err(ConfigError::ValueOutOfRange(
                "BMR coefficients must be finite numbers",
            ));
        }
        if bmr.weight_coef <= 0.0 || bmr.height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &self.activity_factors;
        if ![factors.occasional, factors.regular, factors.dedicated]
            .iter()
            .all(|factor| (1.0..=2.5).contains(factor))
        {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.occasional > factors.regular || factors.regular > factors.dedicated {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        self.validate_goal_adjustment()?;

        let macros = &self.macronutrients;
        if !(0.0..=4.0).contains(&macros.protein_g_per_kg) || macros.protein_g_per_kg == 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Protein target must be between 0 and 4.0 g/kg",
            ));
        }
        if !(0.0..=3.0).contains(&macros.fat_g_per_kg) || macros.fat_g_per_kg == 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Fat target must be between 0 and 3.0 g/kg",
            ));
        }

        if !(1..=52).contains(&self.horizon_weeks) {
            return Err(ConfigError::ValueOutOfRange(
                "Plan horizon must be between 1 and 52 weeks",
            ));
        }

        Ok(())
    }

    fn validate_goal_adjustment(&self) -> Result<(), ConfigError> {
        let goal = &self.goal_adjustment;
        if !goal.lose_weekly_rate_kg.is_finite() || goal.lose_weekly_rate_kg > 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Weight loss rate must not be positive",
            ));
        }
        if !goal.gain_weekly_rate_kg.is_finite() || goal.gain_weekly_rate_kg < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Weight gain rate must not be negative",
            ));
        }
        if !goal.gain_calorie_factor.is_finite() || goal.gain_calorie_factor < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Weight gain calorie factor must be a finite value of at least 1.0",
            ));
        }
        match goal.lose_strategy {
            DeficitStrategy::EnergyBalance { kcal_per_kg }
                if !kcal_per_kg.is_finite() || kcal_per_kg <= 0.0 =>
            {
                Err(ConfigError::ValueOutOfRange(
                    "Energy per kilogram must be a finite positive value",
                ))
            }
            DeficitStrategy::CalorieFraction { factor } if !(factor > 0.0 && factor <= 1.0) => {
                Err(ConfigError::ValueOutOfRange(
                    "Calorie fraction must be in (0, 1]",
                ))
            }
            _ => Ok(()),
        }
    }

    /// Projection window in days
    #[must_use]
    pub const fn horizon_days(&self) -> u64 {
        self.horizon_weeks as u64 * 7
    }
}
