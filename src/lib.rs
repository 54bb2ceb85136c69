// ABOUTME: Main library entry point for the calplan nutrition planning engine
// ABOUTME: Provides the plan calculator, onboarding state machine, storage and analytics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # calplan
//!
//! Computational core of a calorie-tracking onboarding wizard.
//!
//! ## Features
//!
//! - **Plan calculation**: Mifflin-St Jeor BMR, activity-scaled TDEE, goal
//!   adjustment, macro split and a four-week target weight
//! - **Onboarding**: explicit state machine over the wizard screens
//! - **Storage**: structured profile documents in memory or on disk, plus
//!   import of the old flat key/value storage
//! - **Analytics**: BMI category, goal progress, calories left/over and weekly
//!   comparison
//!
//! ## Architecture
//!
//! - **Models**: profile and plan records
//! - **Intelligence**: pure calculations
//! - **Onboarding**: step table and flow
//! - **Storage**: `ProfileStore` backends
//! - **Config**: formula coefficients and environment overrides
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use calplan::errors::AppResult;
//! use calplan::intelligence::NutritionPlanCalculator;
//! use calplan::models::{Gender, Goal, UserProfile, WorkoutFrequency};
//! use chrono::NaiveDate;
//!
//! fn main() -> AppResult<()> {
//!     let profile = UserProfile {
//!         height_cm: 170.0,
//!         weight_kg: 70.0,
//!         age: 30,
//!         gender: Gender::Male,
//!         goal: Goal::LoseWeight,
//!         workout_frequency: WorkoutFrequency::Regular,
//!     };
//!     let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default();
//!     let plan = NutritionPlanCalculator::default().compute(&profile, today)?;
//!     println!("{} kcal/day", plan.calories);
//!     Ok(())
//! }
//! ```

/// Formula coefficients, onboarding limits and storage configuration
pub mod config;

/// Unified error handling
pub mod errors;

/// Nutrition plan calculation and analytics
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Profile and plan records
pub mod models;

/// Onboarding wizard state machine
pub mod onboarding;

/// Profile document storage
pub mod storage;
