// ABOUTME: Intelligence module for nutrition planning and body/intake analytics
// ABOUTME: Re-exports the plan calculator, BMI metrics and dashboard summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Pure calculations over profiles and intake data. Nothing here touches
//! storage or the terminal.

/// BMI, weight category and goal progress
pub mod body_metrics;
/// Daily intake versus plan and weekly comparison
pub mod daily_summary;
/// Profile to nutrition plan calculation
pub mod nutrition_plan;

pub use body_metrics::{bmi, goal_progress_percent, BmiCategory, BmiReading};
pub use daily_summary::{
    compare, CalorieBalance, DailyIntake, DailySummary, MacroRemaining, WeeklyComparison,
    WeeklyNutrition,
};
pub use nutrition_plan::{
    activity_factor, adjust_for_goal, calculate_bmr, calculate_macros, compute_nutrition_plan,
    project_target_date, round_half_up, round_to_tenth, GoalAdjustment, MacroTargets,
    NutritionPlanCalculator, PlanBreakdown,
};
