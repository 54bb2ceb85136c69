// ABOUTME: Body composition metrics for the analytics view
// ABOUTME: BMI with weight category, gauge position and progress toward the target weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body Metrics
//!
//! BMI uses the WHO adult cut-offs. The gauge position is the marker placement
//! (percent of bar width) used on the analytics screen for each category.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// WHO adult BMI category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// 18.5 to below 25
    Healthy,
    /// 25 to below 30
    Overweight,
    /// 30 and above
    Obese,
}

impl BmiCategory {
    /// Categorize a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Healthy
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Marker position on the BMI gauge (0-100)
    #[must_use]
    pub const fn gauge_position(self) -> u8 {
        match self {
            Self::Underweight => 20,
            Self::Healthy => 60,
            Self::Overweight => 80,
            Self::Obese => 95,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Healthy => "Healthy",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// BMI value with its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiReading {
    /// Body Mass Index (kg/m^2)
    pub bmi: f64,
    /// Category of `bmi`
    pub category: BmiCategory,
}

impl BmiReading {
    /// Compute BMI and category
    ///
    /// # Errors
    ///
    /// Returns an error if height or weight is not a positive finite number
    pub fn new(height_cm: f64, weight_kg: f64) -> AppResult<Self> {
        let bmi = bmi(height_cm, weight_kg)?;
        Ok(Self {
            bmi,
            category: BmiCategory::from_bmi(bmi),
        })
    }
}

/// Body Mass Index: weight (kg) / height (m)^2
///
/// # Errors
///
/// Returns an `InvalidInput` error if height or weight is not a positive finite number
pub fn bmi(height_cm: f64, weight_kg: f64) -> AppResult<f64> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Height must be positive to compute BMI, got {height_cm}"
        )));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Weight must be positive to compute BMI, got {weight_kg}"
        )));
    }

    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Share of the planned weight change already achieved, in percent (0-100)
///
/// Movement away from the target counts as zero progress. A plan with no
/// change (start equals target) is complete.
#[must_use]
pub fn goal_progress_percent(start_kg: f64, current_kg: f64, target_kg: f64) -> f64 {
    let planned = target_kg - start_kg;
    if planned.abs() < f64::EPSILON {
        return 100.0;
    }
    ((current_kg - start_kg) / planned * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_value() {
        let value = bmi(170.0, 70.0).unwrap();
        assert!((value - 24.221_453).abs() < 1e-6);
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Healthy);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
        assert_eq!(BmiCategory::Healthy.gauge_position(), 60);
    }

    #[test]
    fn test_bmi_rejects_zero_height() {
        assert!(bmi(0.0, 70.0).is_err());
        assert!(BmiReading::new(170.0, -1.0).is_err());
    }

    #[test]
    fn test_goal_progress() {
        assert!((goal_progress_percent(70.0, 69.0, 68.0) - 50.0).abs() < 1e-9);
        assert!((goal_progress_percent(70.0, 71.0, 68.0)).abs() < 1e-9);
        assert!((goal_progress_percent(70.0, 72.0, 71.2) - 100.0).abs() < 1e-9);
        assert!((goal_progress_percent(70.0, 75.0, 70.0) - 100.0).abs() < 1e-9);
    }
}
