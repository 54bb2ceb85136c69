// ABOUTME: Nutrition plan calculation from a user profile using Mifflin-St Jeor and TDEE
// ABOUTME: Goal adjustment, macro split, target weight projection and target date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Plan Calculator
//!
//! Maps a [`UserProfile`] to a [`NutritionPlan`]: daily calories and macros
//! plus a projected weight at the end of the planning horizon.
//!
//! The calculation is a single deterministic pass:
//!
//! 1. BMR (Mifflin-St Jeor)
//! 2. TDEE = BMR x activity factor
//! 3. Goal adjustment (deficit or surplus) and weekly weight change rate
//! 4. Target weight and date over the horizon
//! 5. Protein and fat from body weight, carbohydrates fill the remaining energy
//!
//! Carbohydrates are never clamped: a light person with an aggressive deficit
//! can get a negative carb target, and that value is reported as-is.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::{
    ActivityFactorsConfig, BmrConfig, DeficitStrategy, GoalAdjustmentConfig, MacronutrientConfig,
    PlanConfig,
};
use crate::errors::{AppError, AppResult};
use crate::models::{Gender, Goal, NutritionPlan, UserProfile, WorkoutFrequency};
use calplan_core::constants::energy::{
    DAYS_PER_WEEK, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Energy target and expected weight change for a goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalAdjustment {
    /// Daily calorie target after the goal adjustment (kcal/day)
    pub adjusted_calories: f64,
    /// Expected weight change (kg/week, negative when losing)
    pub weekly_rate_kg: f64,
}

/// Unrounded daily macro targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Protein (g)
    pub protein_g: f64,
    /// Energy from protein (kcal)
    pub protein_kcal: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Energy from fat (kcal)
    pub fat_kcal: f64,
    /// Carbohydrates (g), may be negative
    pub carbs_g: f64,
    /// Energy left for carbohydrates (kcal), may be negative
    pub carbs_kcal: f64,
}

/// Every intermediate value of one plan calculation, before rounding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanBreakdown {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Activity multiplier applied to BMR
    pub activity_factor: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Goal adjustment
    pub adjustment: GoalAdjustment,
    /// Macro targets
    pub macros: MacroTargets,
    /// Projected weight at the end of the horizon (kg, unrounded)
    pub target_weight_kg: f64,
    /// End of the projection window
    pub target_date: NaiveDate,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_constant`
/// - Male: +5
/// - Female and other: -161
///
/// No floor is applied; the result is the raw equation output.
#[must_use]
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let gender_constant = match gender {
        Gender::Male => config.male_constant,
        Gender::Female | Gender::Other => config.female_constant,
    };

    config.weight_coef.mul_add(
        weight_kg,
        config
            .height_coef
            .mul_add(height_cm, config.age_coef.mul_add(f64::from(age), gender_constant)),
    )
}

/// Activity multiplier for a workout frequency bucket
///
/// - 0-2 workouts/week: 1.2
/// - 3-5 workouts/week: 1.375
/// - 6+ workouts/week: 1.55
#[must_use]
pub const fn activity_factor(frequency: WorkoutFrequency, config: &ActivityFactorsConfig) -> f64 {
    match frequency {
        WorkoutFrequency::Occasional => config.occasional,
        WorkoutFrequency::Regular => config.regular,
        WorkoutFrequency::Dedicated => config.dedicated,
    }
}

/// Apply the goal to TDEE
///
/// - Lose weight: energy-balance deficit of `|rate| x kcal_per_kg / 7` per day
///   (550 kcal at 0.5 kg/week and 7700 kcal/kg), or a flat fraction of TDEE
///   under the legacy formula
/// - Maintain: TDEE unchanged, rate 0
/// - Gain weight: TDEE x 1.15, rate +0.3 kg/week
#[must_use]
pub fn adjust_for_goal(tdee: f64, goal: Goal, config: &GoalAdjustmentConfig) -> GoalAdjustment {
    match goal {
        Goal::LoseWeight => {
            let weekly_rate_kg = config.lose_weekly_rate_kg;
            let adjusted_calories = match config.lose_strategy {
                DeficitStrategy::EnergyBalance { kcal_per_kg } => {
                    tdee - weekly_rate_kg.abs() * kcal_per_kg / DAYS_PER_WEEK
                }
                DeficitStrategy::CalorieFraction { factor } => tdee * factor,
            };
            GoalAdjustment {
                adjusted_calories,
                weekly_rate_kg,
            }
        }
        Goal::Maintain => GoalAdjustment {
            adjusted_calories: tdee,
            weekly_rate_kg: 0.0,
        },
        Goal::GainWeight => GoalAdjustment {
            adjusted_calories: tdee * config.gain_calorie_factor,
            weekly_rate_kg: config.gain_weekly_rate_kg,
        },
    }
}

/// Split a calorie target into macros
///
/// Protein and fat scale with body weight; carbohydrates take whatever energy
/// remains, which can be negative.
#[must_use]
pub fn calculate_macros(
    weight_kg: f64,
    adjusted_calories: f64,
    config: &MacronutrientConfig,
) -> MacroTargets {
    let protein_g = weight_kg * config.protein_g_per_kg;
    let protein_kcal = protein_g * KCAL_PER_G_PROTEIN;
    let fat_g = weight_kg * config.fat_g_per_kg;
    let fat_kcal = fat_g * KCAL_PER_G_FAT;
    let carbs_kcal = adjusted_calories - (protein_kcal + fat_kcal);

    MacroTargets {
        protein_g,
        protein_kcal,
        fat_g,
        fat_kcal,
        carbs_g: carbs_kcal / KCAL_PER_G_CARBS,
        carbs_kcal,
    }
}

/// Add the horizon to `today` in calendar days
///
/// # Errors
///
/// Returns an error if the result overflows the supported date range
pub fn project_target_date(today: NaiveDate, horizon_days: u64) -> AppResult<NaiveDate> {
    today.checked_add_days(Days::new(horizon_days)).ok_or_else(|| {
        AppError::value_out_of_range(format!(
            "Cannot project {horizon_days} days past {today}"
        ))
    })
}

/// Round to the nearest integer with ties toward positive infinity
///
/// `-0.5` rounds to `0` and `2.5` to `3`, so negative carbohydrate values
/// round the same way positive ones do.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to one decimal place
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Plan calculator bound to a configuration
#[derive(Debug, Clone, Default)]
pub struct NutritionPlanCalculator {
    config: PlanConfig,
}

impl NutritionPlanCalculator {
    /// Create a calculator with explicit coefficients
    #[must_use]
    pub const fn new(config: PlanConfig) -> Self {
        Self { config }
    }

    /// Create a calculator from the environment-loaded global configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(PlanConfig::global().clone())
    }

    /// Coefficients in use
    #[must_use]
    pub const fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Run the calculation and keep every intermediate value
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error for unusable biometrics, or an error if the
    /// target date is out of range
    pub fn breakdown(&self, profile: &UserProfile, today: NaiveDate) -> AppResult<PlanBreakdown> {
        profile.validate()?;
        let config = &self.config;

        debug!(
            target: "calplan::plan",
            height_cm = profile.height_cm,
            weight_kg = profile.weight_kg,
            age = profile.age,
            gender = %profile.gender,
            goal = %profile.goal,
            workout_frequency = %profile.workout_frequency,
            formula = %config.formula_version,
            "Nutrition calculation start"
        );

        let bmr = calculate_bmr(
            profile.weight_kg,
            profile.height_cm,
            profile.age,
            profile.gender,
            &config.bmr,
        );
        debug!(target: "calplan::plan", bmr, "BMR (Mifflin-St Jeor)");

        let activity_factor = activity_factor(profile.workout_frequency, &config.activity_factors);
        let tdee = bmr * activity_factor;
        debug!(target: "calplan::plan", activity_factor, tdee, "TDEE");

        let adjustment = adjust_for_goal(tdee, profile.goal, &config.goal_adjustment);
        debug!(
            target: "calplan::plan",
            adjusted_calories = adjustment.adjusted_calories,
            weekly_rate_kg = adjustment.weekly_rate_kg,
            "Goal adjustment"
        );

        let target_weight_kg =
            adjustment.weekly_rate_kg.mul_add(f64::from(config.horizon_weeks), profile.weight_kg);
        let target_date = project_target_date(today, config.horizon_days())?;

        let macros = calculate_macros(
            profile.weight_kg,
            adjustment.adjusted_calories,
            &config.macronutrients,
        );
        debug!(
            target: "calplan::plan",
            protein_g = macros.protein_g,
            fat_g = macros.fat_g,
            carbs_g = macros.carbs_g,
            "Macronutrient breakdown"
        );

        Ok(PlanBreakdown {
            bmr,
            activity_factor,
            tdee,
            adjustment,
            macros,
            target_weight_kg,
            target_date,
        })
    }

    /// Compute the rounded nutrition plan
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error for unusable biometrics, or an error if the
    /// target date is out of range
    pub fn compute(&self, profile: &UserProfile, today: NaiveDate) -> AppResult<NutritionPlan> {
        let breakdown = self.breakdown(profile, today)?;
        let plan = NutritionPlan {
            calories: round_half_up(breakdown.adjustment.adjusted_calories) as i64,
            carbs: round_half_up(breakdown.macros.carbs_g) as i64,
            protein: round_half_up(breakdown.macros.protein_g) as i64,
            fats: round_half_up(breakdown.macros.fat_g) as i64,
            target_weight_kg: round_to_tenth(breakdown.target_weight_kg),
            target_date: breakdown.target_date,
            formula_version: self.config.formula_version,
        };

        debug!(
            target: "calplan::plan",
            calories = plan.calories,
            carbs = plan.carbs,
            protein = plan.protein,
            fats = plan.fats,
            target_weight_kg = plan.target_weight_kg,
            target_date = %plan.target_date,
            "Nutrition calculation end"
        );

        Ok(plan)
    }
}

/// Compute a plan with the canonical default coefficients
///
/// # Errors
///
/// Returns an error if the profile is invalid or the target date is out of range
pub fn compute_nutrition_plan(profile: &UserProfile, today: NaiveDate) -> AppResult<NutritionPlan> {
    NutritionPlanCalculator::default().compute(profile, today)
}
