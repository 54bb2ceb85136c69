// ABOUTME: Nutrition plan output record with rounded daily targets and projected weight
// ABOUTME: Formats target dates in long form and renders the goal summary sentence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition plan record produced by the calculator.

use crate::config::FormulaVersion;
use crate::models::profile::Goal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily calorie and macro targets plus the projected weight after the horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionPlan {
    /// Daily energy target (kcal, rounded)
    pub calories: i64,
    /// Daily carbohydrates (g, rounded; negative when protein and fat exceed the target)
    pub carbs: i64,
    /// Daily protein (g, rounded)
    pub protein: i64,
    /// Daily fat (g, rounded)
    pub fats: i64,
    /// Projected weight at `target_date` (kg, one decimal)
    pub target_weight_kg: f64,
    /// End of the projection window
    #[serde(with = "long_date")]
    pub target_date: NaiveDate,
    /// Formula that produced the plan
    #[serde(default)]
    pub formula_version: FormulaVersion,
}

impl NutritionPlan {
    /// Target date as shown to users, e.g. "January 5, 2025"
    #[must_use]
    pub fn target_date_label(&self) -> String {
        long_date::format(self.target_date)
    }

    /// One-line summary of what the plan expects for the given goal
    #[must_use]
    pub fn goal_summary(&self, goal: Goal, current_weight_kg: f64) -> String {
        match goal {
            Goal::LoseWeight => format!(
                "You should lose: {:.1} kg by {}",
                current_weight_kg - self.target_weight_kg,
                self.target_date_label()
            ),
            Goal::GainWeight => format!(
                "You should gain: {:.1} kg by {}",
                self.target_weight_kg - current_weight_kg,
                self.target_date_label()
            ),
            Goal::Maintain => format!("You should maintain: {current_weight_kg} kg"),
        }
    }
}

/// Long-form English date (de)serialization, e.g. "March 10, 2025"
pub mod long_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Output pattern (no zero padding on the day)
    const FORMAT: &str = "%B %-d, %Y";
    /// Input pattern (accepts one or two digit days)
    const PARSE_FORMAT: &str = "%B %d, %Y";

    /// Format a date in long form
    #[must_use]
    pub fn format(date: NaiveDate) -> String {
        date.format(FORMAT).to_string()
    }

    /// Parse a long-form date
    ///
    /// # Errors
    ///
    /// Returns the chrono parse error when the text is not a long-form date
    pub fn parse(text: &str) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(text.trim(), PARSE_FORMAT)
    }

    /// Serde serializer
    ///
    /// # Errors
    ///
    /// Propagates serializer errors
    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(*date))
    }

    /// Serde deserializer
    ///
    /// # Errors
    ///
    /// Returns a custom error when the string is not a long-form date
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse(&text).map_err(serde::de::Error::custom)
    }
}
