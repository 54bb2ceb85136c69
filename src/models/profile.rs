// ABOUTME: User profile model with biometric inputs, goal and workout frequency
// ABOUTME: Includes birth-date to age conversion and the step-by-step profile draft
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! User profile types.
//!
//! Enum values serialize to the same strings the onboarding screens use
//! (`lose-weight`, `3-5`, ...), so stored documents stay readable.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender used to pick the BMR constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
    /// Other, computed with the female constant
    Other,
}

impl Gender {
    /// All selectable values, in display order
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

/// Weight goal selected during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Goal {
    /// Lose weight
    #[serde(rename = "lose-weight")]
    LoseWeight,
    /// Maintain current weight
    #[serde(rename = "maintain")]
    Maintain,
    /// Gain weight
    #[serde(rename = "gain-weight")]
    GainWeight,
}

impl Goal {
    /// All selectable values, in display order
    pub const ALL: [Self; 3] = [Self::LoseWeight, Self::Maintain, Self::GainWeight];

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoseWeight => "lose-weight",
            Self::Maintain => "maintain",
            Self::GainWeight => "gain-weight",
        }
    }

    /// Label shown next to the option
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LoseWeight => "Lose weight",
            Self::Maintain => "Maintain",
            Self::GainWeight => "Gain weight",
        }
    }
}

/// Weekly workout frequency bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutFrequency {
    /// 0-2 workouts per week
    #[serde(rename = "0-2")]
    Occasional,
    /// 3-5 workouts per week
    #[serde(rename = "3-5")]
    Regular,
    /// 6 or more workouts per week
    #[serde(rename = "6+")]
    Dedicated,
}

impl WorkoutFrequency {
    /// All selectable values, in display order
    pub const ALL: [Self; 3] = [Self::Occasional, Self::Regular, Self::Dedicated];

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Occasional => "0-2",
            Self::Regular => "3-5",
            Self::Dedicated => "6+",
        }
    }

    /// Description shown under the option
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Occasional => "Workouts now and then",
            Self::Regular => "A few workouts per week",
            Self::Dedicated => "Dedicated athlete",
        }
    }
}

macro_rules! impl_wire_enum {
    ($ty:ty, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_lowercase();
                Self::ALL
                    .into_iter()
                    .find(|value| value.as_str() == wanted)
                    .ok_or_else(|| {
                        AppError::invalid_format(format!("Unknown {}: '{}'", $what, s.trim()))
                    })
            }
        }
    };
}

impl_wire_enum!(Gender, "gender");
impl_wire_enum!(Goal, "goal");
impl_wire_enum!(WorkoutFrequency, "workout frequency");

/// Whole years elapsed between `birth_date` and `today`
///
/// One year is subtracted when today's month/day precedes the birth month/day.
///
/// # Errors
///
/// Returns an error if `birth_date` is after `today`
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> AppResult<u32> {
    if birth_date > today {
        return Err(AppError::value_out_of_range(format!(
            "Birth date {birth_date} is in the future"
        )));
    }

    let mut years = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }

    u32::try_from(years)
        .map_err(|_| AppError::internal(format!("Negative age computed for {birth_date}")))
}

/// Input record for the nutrition plan calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Age in whole years
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Weight goal
    pub goal: Goal,
    /// Weekly workout frequency
    pub workout_frequency: WorkoutFrequency,
}

impl UserProfile {
    /// Build a profile, deriving age from a birth date
    ///
    /// # Errors
    ///
    /// Returns an error if the birth date is in the future or biometrics are invalid
    pub fn from_birth_date(
        height_cm: f64,
        weight_kg: f64,
        birth_date: NaiveDate,
        today: NaiveDate,
        gender: Gender,
        goal: Goal,
        workout_frequency: WorkoutFrequency,
    ) -> AppResult<Self> {
        let profile = Self {
            height_cm,
            weight_kg,
            age: age_on(birth_date, today)?,
            gender,
            goal,
            workout_frequency,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Check biometrics are usable by the calculator
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error for non-finite or non-positive height or weight
    pub fn validate(&self) -> AppResult<()> {
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Invalid profile: height must be a positive number of centimeters, got {}",
                self.height_cm
            )));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Invalid profile: weight must be a positive number of kilograms, got {}",
                self.weight_kg
            )));
        }
        Ok(())
    }
}

/// Profile under construction, filled one onboarding step at a time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Birth date
    pub birth_date: Option<NaiveDate>,
    /// Gender
    pub gender: Option<Gender>,
    /// Weight goal
    pub goal: Option<Goal>,
    /// Weekly workout frequency
    pub workout_frequency: Option<WorkoutFrequency>,
}

impl ProfileDraft {
    /// Names of the fields still missing
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let checks = [
            ("height_cm", self.height_cm.is_none()),
            ("weight_kg", self.weight_kg.is_none()),
            ("birth_date", self.birth_date.is_none()),
            ("gender", self.gender.is_none()),
            ("goal", self.goal.is_none()),
            ("workout_frequency", self.workout_frequency.is_none()),
        ];
        checks
            .into_iter()
            .filter_map(|(name, missing)| missing.then_some(name))
            .collect()
    }

    /// Whether every field has been provided
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Convert into a calculator profile as of `today`
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for the first absent field, or a validation error
    pub fn to_profile(&self, today: NaiveDate) -> AppResult<UserProfile> {
        UserProfile::from_birth_date(
            self.height_cm.ok_or_else(|| AppError::missing_field("height_cm"))?,
            self.weight_kg.ok_or_else(|| AppError::missing_field("weight_kg"))?,
            self.birth_date
                .ok_or_else(|| AppError::missing_field("birth_date"))?,
            today,
            self.gender.ok_or_else(|| AppError::missing_field("gender"))?,
            self.goal.ok_or_else(|| AppError::missing_field("goal"))?,
            self.workout_frequency
                .ok_or_else(|| AppError::missing_field("workout_frequency"))?,
        )
    }
}
