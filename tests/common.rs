// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, fixture profiles and a fixed reference date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
#![allow(missing_docs)]

use calplan::models::{Gender, Goal, UserProfile, WorkoutFrequency};
use chrono::NaiveDate;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Fixed "today" so projections are deterministic
pub fn reference_today() -> NaiveDate {
    date(2025, 1, 1)
}

/// 170 cm, 70 kg, 30 years, male, lose weight, 3-5 workouts
pub fn reference_profile() -> UserProfile {
    UserProfile {
        height_cm: 170.0,
        weight_kg: 70.0,
        age: 30,
        gender: Gender::Male,
        goal: Goal::LoseWeight,
        workout_frequency: WorkoutFrequency::Regular,
    }
}

pub fn profile_with(goal: Goal, gender: Gender, frequency: WorkoutFrequency) -> UserProfile {
    UserProfile {
        goal,
        gender,
        workout_frequency: frequency,
        ..reference_profile()
    }
}

/// Every goal, gender and frequency combination for the reference biometrics
pub fn all_profiles() -> Vec<UserProfile> {
    let mut profiles = Vec::new();
    for goal in Goal::ALL {
        for gender in Gender::ALL {
            for frequency in WorkoutFrequency::ALL {
                profiles.push(profile_with(goal, gender, frequency));
            }
        }
    }
    profiles
}
