// ABOUTME: Daily intake versus plan targets and week-over-week calorie comparison
// ABOUTME: Produces calories left/over, macro remaining grams and weekly averages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Daily and weekly intake summaries for the dashboard.

use crate::errors::{AppError, AppResult};
use crate::intelligence::nutrition_plan::round_half_up;
use crate::models::NutritionPlan;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What was eaten in one day
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyIntake {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fats_g: f64,
}

impl DailyIntake {
    /// Reject negative or non-finite amounts
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error naming the first bad field
    pub fn validate(&self) -> AppResult<()> {
        let fields = [
            ("calories", self.calories),
            ("protein_g", self.protein_g),
            ("carbs_g", self.carbs_g),
            ("fats_g", self.fats_g),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::invalid_input(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Whether the day is under or over the calorie target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "calories", rename_all = "snake_case")]
pub enum CalorieBalance {
    /// Calories still available
    Left(i64),
    /// Calories eaten beyond the target; a day exactly on target is `Over(0)`
    Over(i64),
}

impl fmt::Display for CalorieBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(n) => write!(f, "{n} calories left"),
            Self::Over(n) => write!(f, "{n} calories over"),
        }
    }
}

/// Grams still to eat for each macro (negative when exceeded)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRemaining {
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fats_g: f64,
}

/// One day's intake measured against the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Intake for the day
    pub intake: DailyIntake,
    /// Target minus intake (kcal, signed, rounded)
    pub calories_remaining: i64,
    /// Left/over view of `calories_remaining`
    pub balance: CalorieBalance,
    /// Remaining grams per macro
    pub macros_remaining: MacroRemaining,
    /// Intake as a share of the calorie target (percent, not capped)
    pub calorie_progress_percent: f64,
}

impl DailySummary {
    /// Compare a day's intake with the plan
    ///
    /// # Errors
    ///
    /// Returns an error if the intake holds negative or non-finite amounts
    pub fn new(intake: DailyIntake, plan: &NutritionPlan) -> AppResult<Self> {
        intake.validate()?;

        let target = plan.calories as f64;
        let calories_remaining = round_half_up(target - intake.calories) as i64;
        let balance = if calories_remaining > 0 {
            CalorieBalance::Left(calories_remaining)
        } else {
            CalorieBalance::Over(-calories_remaining)
        };
        let calorie_progress_percent = if plan.calories > 0 {
            intake.calories / target * 100.0
        } else {
            0.0
        };

        Ok(Self {
            intake,
            calories_remaining,
            balance,
            macros_remaining: MacroRemaining {
                protein_g: plan.protein as f64 - intake.protein_g,
                carbs_g: plan.carbs as f64 - intake.carbs_g,
                fats_g: plan.fats as f64 - intake.fats_g,
            },
            calorie_progress_percent,
        })
    }
}

/// Calorie totals for a run of days
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyNutrition {
    /// Days included
    pub days: usize,
    /// Sum of calories
    pub total_calories: f64,
    /// Mean calories per day
    pub average_calories: f64,
}

impl WeeklyNutrition {
    /// Aggregate daily intakes
    ///
    /// # Errors
    ///
    /// Returns an error if `days` is empty or any intake is invalid
    pub fn from_days(days: &[DailyIntake]) -> AppResult<Self> {
        if days.is_empty() {
            return Err(AppError::invalid_input(
                "At least one day is required for a weekly summary",
            ));
        }
        for day in days {
            day.validate()?;
        }

        let total_calories: f64 = days.iter().map(|day| day.calories).sum();
        Ok(Self {
            days: days.len(),
            total_calories,
            average_calories: total_calories / days.len() as f64,
        })
    }
}

/// Week-over-week change in average daily calories
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyComparison {
    /// Difference in average calories (this week minus previous)
    pub change_calories: f64,
    /// Relative change, `None` when the previous week averaged zero
    pub change_percent: Option<f64>,
}

/// Compare two weeks by average daily calories
#[must_use]
pub fn compare(this_week: &WeeklyNutrition, previous_week: &WeeklyNutrition) -> WeeklyComparison {
    let change_calories = this_week.average_calories - previous_week.average_calories;
    let change_percent = (previous_week.average_calories > 0.0)
        .then(|| change_calories / previous_week.average_calories * 100.0);
    WeeklyComparison {
        change_calories,
        change_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormulaVersion;
    use chrono::NaiveDate;

    fn plan() -> NutritionPlan {
        NutritionPlan {
            calories: 1674,
            carbs: 126,
            protein: 154,
            fats: 62,
            target_weight_kg: 68.0,
            target_date: NaiveDate::from_ymd_opt(2025, 1, 29).unwrap(),
            formula_version: FormulaVersion::Current,
        }
    }

    fn intake(calories: f64) -> DailyIntake {
        DailyIntake {
            calories,
            protein_g: 100.0,
            carbs_g: 150.0,
            fats_g: 70.0,
        }
    }

    #[test]
    fn test_calories_left() {
        let summary = DailySummary::new(intake(1200.0), &plan()).unwrap();
        assert_eq!(summary.calories_remaining, 474);
        assert_eq!(summary.balance.to_string(), "474 calories left");
        assert!((summary.macros_remaining.protein_g - 54.0).abs() < 1e-9);
        assert!((summary.macros_remaining.carbs_g + 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_calories_over() {
        let summary = DailySummary::new(intake(1800.0), &plan()).unwrap();
        assert_eq!(summary.balance, CalorieBalance::Over(126));
        assert_eq!(summary.balance.to_string(), "126 calories over");
        assert!(summary.calorie_progress_percent > 100.0);
    }

    #[test]
    fn test_exact_target_reads_as_zero_over() {
        let summary = DailySummary::new(intake(1674.0), &plan()).unwrap();
        assert_eq!(summary.calories_remaining, 0);
        assert_eq!(summary.balance, CalorieBalance::Over(0));
        assert_eq!(summary.balance.to_string(), "0 calories over");
    }

    #[test]
    fn test_negative_intake_is_rejected() {
        assert!(DailySummary::new(intake(-1.0), &plan()).is_err());
    }

    #[test]
    fn test_weekly_comparison() {
        let previous = WeeklyNutrition::from_days(&[intake(2000.0), intake(2000.0)]).unwrap();
        let current = WeeklyNutrition::from_days(&[intake(1800.0), intake(1600.0)]).unwrap();
        assert!((current.average_calories - 1700.0).abs() < 1e-9);

        let comparison = compare(&current, &previous);
        assert!((comparison.change_calories + 300.0).abs() < 1e-9);
        assert!((comparison.change_percent.unwrap() + 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_week_is_rejected() {
        assert!(WeeklyNutrition::from_days(&[]).is_err());
    }
}
