// ABOUTME: Output formatting helpers for calplan-cli
// ABOUTME: Provides consistent display functions for plans, profiles, onboarding and analytics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use calplan::errors::AppResult;
use calplan::intelligence::{BmiReading, DailySummary, PlanBreakdown};
use calplan::models::{age_on, NutritionPlan, ProfileDraft, UserProfile};
use calplan::onboarding::OnboardingFlow;
use chrono::NaiveDate;
use serde::Serialize;

/// Pretty-print any serializable value as JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| v.to_string())
}

/// Display a computed plan with the goal summary line
pub fn display_plan(plan: &NutritionPlan, profile: &UserProfile) {
    println!("\nYour Custom Plan ({} formula)", plan.formula_version);
    println!("{}", "=".repeat(50));
    println!("   Calories: {} kcal/day", plan.calories);
    println!("   Protein:  {} g", plan.protein);
    println!("   Carbs:    {} g", plan.carbs);
    println!("   Fats:     {} g", plan.fats);
    println!("   Target:   {:.1} kg by {}", plan.target_weight_kg, plan.target_date_label());
    println!("\n{}", plan.goal_summary(profile.goal, profile.weight_kg));
}

/// Display every intermediate value of a calculation
pub fn display_breakdown(breakdown: &PlanBreakdown) {
    println!("\nCalculation breakdown");
    println!("{}", "-".repeat(50));
    println!("   BMR:              {:.2} kcal", breakdown.bmr);
    println!("   Activity factor:  {}", breakdown.activity_factor);
    println!("   TDEE:             {:.2} kcal", breakdown.tdee);
    println!(
        "   Adjusted:         {:.2} kcal ({:+} kg/week)",
        breakdown.adjustment.adjusted_calories, breakdown.adjustment.weekly_rate_kg
    );
    println!(
        "   Protein:          {:.1} g ({:.1} kcal)",
        breakdown.macros.protein_g, breakdown.macros.protein_kcal
    );
    println!(
        "   Fat:              {:.1} g ({:.1} kcal)",
        breakdown.macros.fat_g, breakdown.macros.fat_kcal
    );
    println!(
        "   Carbs:            {:.1} g ({:.1} kcal)",
        breakdown.macros.carbs_g, breakdown.macros.carbs_kcal
    );
}

/// Display a stored profile draft
pub fn display_draft(draft: &ProfileDraft, today: NaiveDate) {
    println!("\nProfile");
    println!("{}", "=".repeat(50));
    println!("   Height:    {} cm", or_dash(draft.height_cm));
    println!("   Weight:    {} kg", or_dash(draft.weight_kg));
    let age = draft.birth_date.and_then(|date| age_on(date, today).ok());
    println!(
        "   Born:      {} (age {})",
        or_dash(draft.birth_date),
        or_dash(age)
    );
    println!("   Gender:    {}", or_dash(draft.gender));
    println!("   Goal:      {}", or_dash(draft.goal.map(|goal| goal.label())));
    println!(
        "   Workouts:  {}",
        or_dash(
            draft
                .workout_frequency
                .map(|f| format!("{f} per week ({})", f.description()))
        )
    );

    let missing = draft.missing_fields();
    if !missing.is_empty() {
        println!("\n   Missing: {}", missing.join(", "));
    }
}

/// Display the onboarding position
pub fn display_flow(flow: &OnboardingFlow) {
    println!(
        "\nOnboarding step: {} ({:.0}% answered)",
        flow.step(),
        flow.progress() * 100.0
    );
    if flow.is_complete() {
        println!("Onboarding complete. Your plan has been saved.");
    }
}

/// Display BMI with category and gauge position
pub fn display_bmi(reading: &BmiReading, progress: Option<f64>) {
    println!("\nBMI: {:.1} ({})", reading.bmi, reading.category);
    let marker = usize::from(reading.category.gauge_position()) / 5;
    println!("[{}|{}]", "-".repeat(marker), "-".repeat(20 - marker));
    if let Some(progress) = progress {
        println!("Goal progress: {progress:.0}%");
    }
}

/// Display calories left/over and remaining macros
pub fn display_summary(summary: &DailySummary, plan: &NutritionPlan) {
    println!("\nToday");
    println!("{}", "=".repeat(50));
    println!(
        "   {} ({:.0} of {} kcal, {:.0}%)",
        summary.balance, summary.intake.calories, plan.calories, summary.calorie_progress_percent
    );
    let remaining = &summary.macros_remaining;
    println!(
        "   Protein: {:.0}/{} g ({:.0} g left)",
        summary.intake.protein_g, plan.protein, remaining.protein_g
    );
    println!(
        "   Carbs:   {:.0}/{} g ({:.0} g left)",
        summary.intake.carbs_g, plan.carbs, remaining.carbs_g
    );
    println!(
        "   Fats:    {:.0}/{} g ({:.0} g left)",
        summary.intake.fats_g, plan.fats, remaining.fats_g
    );
}
