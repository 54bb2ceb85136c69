// ABOUTME: Data models for user profiles and nutrition plans
// ABOUTME: Re-exports the profile inputs and the plan output record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models

/// Nutrition plan output record
pub mod plan;
/// User profile inputs and the onboarding draft
pub mod profile;

pub use plan::NutritionPlan;
pub use profile::{age_on, Gender, Goal, ProfileDraft, UserProfile, WorkoutFrequency};
