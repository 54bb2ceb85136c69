// ABOUTME: Analytics commands for calplan-cli
// ABOUTME: BMI for the stored profile and daily intake against the stored plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use calplan::errors::{AppError, AppResult};
use calplan::intelligence::{goal_progress_percent, BmiReading, DailyIntake, DailySummary};
use calplan::models::NutritionPlan;
use calplan::storage::{ProfileStore, StoreKey};

use super::Context;
use crate::helpers::display::{display_bmi, display_summary};

/// Print BMI and category, plus progress toward the stored target weight
pub async fn bmi(ctx: &Context, height: Option<f64>, weight: Option<f64>) -> AppResult<()> {
    let draft = ctx.stored_draft().await?;
    let height = height
        .or(draft.height_cm)
        .ok_or_else(|| AppError::missing_field("height_cm"))?;
    let weight = weight
        .or(draft.weight_kg)
        .ok_or_else(|| AppError::missing_field("weight_kg"))?;

    let reading = BmiReading::new(height, weight)?;
    let plan: Option<NutritionPlan> = ctx.storage.load(StoreKey::Plan).await?;
    let progress = match (plan, draft.weight_kg) {
        (Some(plan), Some(start)) => Some(goal_progress_percent(
            start,
            weight,
            plan.target_weight_kg,
        )),
        _ => None,
    };

    display_bmi(&reading, progress);
    Ok(())
}

/// Print calories left/over and remaining macros for a day
pub async fn summary(
    ctx: &Context,
    calories: f64,
    protein: f64,
    carbs: f64,
    fats: f64,
) -> AppResult<()> {
    let plan: NutritionPlan = ctx
        .storage
        .load(StoreKey::Plan)
        .await?
        .ok_or_else(|| AppError::not_found("Stored plan (run `plan --save` or finish onboarding)"))?;

    let intake = DailyIntake {
        calories,
        protein_g: protein,
        carbs_g: carbs,
        fats_g: fats,
    };
    display_summary(&DailySummary::new(intake, &plan)?, &plan);
    Ok(())
}
