// ABOUTME: Integration tests for BMI, goal progress and daily/weekly intake summaries
// ABOUTME: Uses plans computed by the calculator as the dashboard targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use calplan::intelligence::{
    compare, compute_nutrition_plan, goal_progress_percent, BmiCategory, BmiReading,
    CalorieBalance, DailyIntake, DailySummary, WeeklyNutrition,
};

mod common;

fn intake(calories: f64) -> DailyIntake {
    DailyIntake {
        calories,
        ..DailyIntake::default()
    }
}

#[test]
fn test_bmi_categories_for_reference_heights() {
    let cases = [
        (170.0, 50.0, BmiCategory::Underweight, 20),
        (170.0, 70.0, BmiCategory::Healthy, 60),
        (170.0, 80.0, BmiCategory::Overweight, 80),
        (170.0, 95.0, BmiCategory::Obese, 95),
    ];
    for (height, weight, category, gauge) in cases {
        let reading = BmiReading::new(height, weight).unwrap();
        assert_eq!(reading.category, category, "{height} cm / {weight} kg");
        assert_eq!(reading.category.gauge_position(), gauge);
    }
}

#[test]
fn test_goal_progress_toward_planned_target() {
    let plan = compute_nutrition_plan(&common::reference_profile(), common::reference_today())
        .unwrap();
    let start = common::reference_profile().weight_kg;

    assert!((goal_progress_percent(start, 70.0, plan.target_weight_kg)).abs() < 1e-9);
    assert!((goal_progress_percent(start, 69.5, plan.target_weight_kg) - 25.0).abs() < 1e-9);
    assert!((goal_progress_percent(start, 67.0, plan.target_weight_kg) - 100.0).abs() < 1e-9);
}

#[test]
fn test_dashboard_against_computed_plan() {
    let plan = compute_nutrition_plan(&common::reference_profile(), common::reference_today())
        .unwrap();

    let under = DailySummary::new(intake(1000.0), &plan).unwrap();
    assert_eq!(under.balance, CalorieBalance::Left(674));
    assert_eq!(under.balance.to_string(), "674 calories left");
    assert!((under.macros_remaining.protein_g - 154.0).abs() < 1e-9);

    let exact = DailySummary::new(intake(1674.0), &plan).unwrap();
    assert_eq!(exact.balance, CalorieBalance::Over(0));
    assert_eq!(exact.balance.to_string(), "0 calories over");

    let over = DailySummary::new(intake(2000.0), &plan).unwrap();
    assert_eq!(over.calories_remaining, -326);
    assert_eq!(over.balance.to_string(), "326 calories over");
}

#[test]
fn test_week_over_week() {
    let previous = WeeklyNutrition::from_days(&[intake(1800.0); 7]).unwrap();
    let current = WeeklyNutrition::from_days(&[
        intake(1700.0),
        intake(1650.0),
        intake(1600.0),
        intake(1750.0),
        intake(1700.0),
        intake(1650.0),
        intake(1550.0),
    ])
    .unwrap();

    assert_eq!(current.days, 7);
    assert!((current.total_calories - 11_600.0).abs() < 1e-9);

    let comparison = compare(&current, &previous);
    assert!(comparison.change_calories < 0.0);
    assert!(comparison.change_percent.unwrap() < 0.0);

    let empty_previous = WeeklyNutrition::from_days(&[intake(0.0)]).unwrap();
    assert!(compare(&current, &empty_previous).change_percent.is_none());
}
