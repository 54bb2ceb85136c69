// ABOUTME: Application constants for energy conversion, legacy storage keys and defaults
// ABOUTME: Centralizes values shared between the calculator, storage import and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants organized by domain.

/// Energy density of macronutrients and body mass
pub mod energy {
    /// Protein energy density (kcal per gram)
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Carbohydrate energy density (kcal per gram)
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Fat energy density (kcal per gram)
    pub const KCAL_PER_G_FAT: f64 = 9.0;
    /// Energy stored in one kilogram of body weight change (kcal)
    pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;
    /// Days per week, used to spread weekly energy targets over days
    pub const DAYS_PER_WEEK: f64 = 7.0;
}

/// Planning horizon
pub mod horizon {
    /// Default projection window for target weight (weeks)
    pub const DEFAULT_HORIZON_WEEKS: u32 = 4;
}

/// Key names used by the flat per-key string storage of earlier app versions
pub mod legacy_keys {
    /// Height in centimeters
    pub const HEIGHT: &str = "userHeight";
    /// Weight in kilograms
    pub const WEIGHT: &str = "userWeight";
    /// Birth year (four digits)
    pub const BIRTH_YEAR: &str = "userBirthYear";
    /// Birth month (1-12)
    pub const BIRTH_MONTH: &str = "userBirthMonth";
    /// Birth day of month (1-31)
    pub const BIRTH_DAY: &str = "userBirthDay";
    /// Gender (`male`, `female`, `other`)
    pub const GENDER: &str = "userGender";
    /// Goal (`lose-weight`, `maintain`, `gain-weight`)
    pub const GOAL: &str = "userGoal";
    /// Workout frequency (`0-2`, `3-5`, `6+`)
    pub const WORKOUT_FREQUENCY: &str = "userWorkoutFrequency";
}

/// Values substituted for absent legacy keys
pub mod legacy_defaults {
    /// Height when `userHeight` is absent (cm)
    pub const HEIGHT_CM: f64 = 170.0;
    /// Weight when `userWeight` is absent (kg)
    pub const WEIGHT_KG: f64 = 70.0;
    /// Birth year when absent
    pub const BIRTH_YEAR: i32 = 1990;
    /// Birth month when absent
    pub const BIRTH_MONTH: u32 = 1;
    /// Birth day when absent
    pub const BIRTH_DAY: u32 = 1;
    /// Gender when absent
    pub const GENDER: &str = "male";
    /// Goal when absent
    pub const GOAL: &str = "lose-weight";
    /// Workout frequency when absent
    pub const WORKOUT_FREQUENCY: &str = "0-2";
}

/// Bounds offered by the onboarding selection lists
pub mod onboarding {
    /// Smallest selectable height (cm)
    pub const MIN_HEIGHT_CM: f64 = 140.0;
    /// Largest selectable height (cm)
    pub const MAX_HEIGHT_CM: f64 = 220.0;
    /// Smallest selectable weight (kg)
    pub const MIN_WEIGHT_KG: f64 = 40.0;
    /// Largest selectable weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 150.0;
    /// Earliest selectable birth year
    pub const MIN_BIRTH_YEAR: i32 = 1930;
}

/// Service identity used in logs
pub mod service_names {
    /// Library / CLI service name
    pub const CALPLAN: &str = "calplan";
}

/// Environment variable names
pub mod env_config {
    /// Formula version (`current` or `legacy`)
    pub const FORMULA_VERSION: &str = "CALPLAN_FORMULA_VERSION";
    /// Projection horizon in weeks
    pub const HORIZON_WEEKS: &str = "CALPLAN_HORIZON_WEEKS";
    /// Protein target (g per kg body weight)
    pub const PROTEIN_G_PER_KG: &str = "CALPLAN_PROTEIN_G_PER_KG";
    /// Fat target (g per kg body weight)
    pub const FAT_G_PER_KG: &str = "CALPLAN_FAT_G_PER_KG";
    /// Energy per kilogram of body weight change
    pub const KCAL_PER_KG_BODY_MASS: &str = "CALPLAN_KCAL_PER_KG_BODY_FAT";
    /// Storage backend (`memory` or `file`)
    pub const STORAGE_BACKEND: &str = "CALPLAN_STORAGE";
    /// Directory holding the profile document
    pub const DATA_DIR: &str = "CALPLAN_DATA_DIR";
    /// Minimum selectable height override
    pub const MIN_HEIGHT_CM: &str = "CALPLAN_MIN_HEIGHT_CM";
    /// Maximum selectable height override
    pub const MAX_HEIGHT_CM: &str = "CALPLAN_MAX_HEIGHT_CM";
    /// Minimum selectable weight override
    pub const MIN_WEIGHT_KG: &str = "CALPLAN_MIN_WEIGHT_KG";
    /// Maximum selectable weight override
    pub const MAX_WEIGHT_KG: &str = "CALPLAN_MAX_WEIGHT_KG";
}
