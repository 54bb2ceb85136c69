// ABOUTME: Algorithm tests for the nutrition plan calculator
// ABOUTME: Covers goal adjustments, macro reconstruction, target dates and formula versions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Plan calculator tests
//!
//! - Reference profile end to end
//! - Goal adjustment and target weight per goal
//! - Macro reconstruction from rounded grams
//! - Target date arithmetic across month and year ends
//! - Legacy formula and validation errors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use calplan::{
    config::{FormulaVersion, PlanConfig},
    errors::ErrorCode,
    intelligence::nutrition_plan::{compute_nutrition_plan, NutritionPlanCalculator},
    models::{Gender, Goal, UserProfile, WorkoutFrequency},
};

mod common;

// ============================================================================
// END TO END
// ============================================================================

#[test]
fn test_reference_profile_plan() {
    common::init_test_logging();
    let plan = compute_nutrition_plan(&common::reference_profile(), common::reference_today())
        .unwrap();

    // BMR 1617.5, TDEE 2224.0625, adjusted 1674.0625
    assert_eq!(plan.calories, 1674);
    assert_eq!(plan.protein, 154);
    assert_eq!(plan.fats, 62);
    assert_eq!(plan.carbs, 126);
    assert!((plan.target_weight_kg - 68.0).abs() < 1e-9);
    assert_eq!(plan.target_date, common::date(2025, 1, 29));
}

#[test]
fn test_compute_is_deterministic() {
    let calculator = NutritionPlanCalculator::default();
    let profile = common::reference_profile();
    let today = common::reference_today();
    assert_eq!(
        calculator.compute(&profile, today).unwrap(),
        calculator.compute(&profile, today).unwrap()
    );
}

// ============================================================================
// GOAL ADJUSTMENT
// ============================================================================

#[test]
fn test_maintain_keeps_tdee_and_weight() {
    let calculator = NutritionPlanCalculator::default();
    for gender in Gender::ALL {
        for frequency in WorkoutFrequency::ALL {
            let profile = common::profile_with(Goal::Maintain, gender, frequency);
            let breakdown = calculator
                .breakdown(&profile, common::reference_today())
                .unwrap();
            assert!((breakdown.adjustment.adjusted_calories - breakdown.tdee).abs() < 1e-9);

            let plan = calculator
                .compute(&profile, common::reference_today())
                .unwrap();
            assert!((plan.target_weight_kg - profile.weight_kg).abs() < 1e-9);
        }
    }
}

#[test]
fn test_lose_weight_subtracts_550_and_two_kilos() {
    let calculator = NutritionPlanCalculator::default();
    for gender in Gender::ALL {
        for frequency in WorkoutFrequency::ALL {
            let profile = common::profile_with(Goal::LoseWeight, gender, frequency);
            let breakdown = calculator
                .breakdown(&profile, common::reference_today())
                .unwrap();
            assert!((breakdown.tdee - breakdown.adjustment.adjusted_calories - 550.0).abs() < 1e-9);

            let plan = calculator
                .compute(&profile, common::reference_today())
                .unwrap();
            assert!((plan.target_weight_kg - (profile.weight_kg - 2.0)).abs() < 1e-9);
        }
    }
}

#[test]
fn test_gain_weight_adds_fifteen_percent_and_1_2_kilos() {
    let calculator = NutritionPlanCalculator::default();
    for gender in Gender::ALL {
        for frequency in WorkoutFrequency::ALL {
            let profile = common::profile_with(Goal::GainWeight, gender, frequency);
            let breakdown = calculator
                .breakdown(&profile, common::reference_today())
                .unwrap();
            assert!((breakdown.adjustment.adjusted_calories - breakdown.tdee * 1.15).abs() < 1e-9);

            let plan = calculator
                .compute(&profile, common::reference_today())
                .unwrap();
            assert!((plan.target_weight_kg - 71.2).abs() < 1e-9);
        }
    }
}

#[test]
fn test_female_and_other_share_constant() {
    let calculator = NutritionPlanCalculator::default();
    let female = common::profile_with(Goal::Maintain, Gender::Female, WorkoutFrequency::Occasional);
    let other = common::profile_with(Goal::Maintain, Gender::Other, WorkoutFrequency::Occasional);
    let today = common::reference_today();
    assert_eq!(
        calculator.compute(&female, today).unwrap(),
        calculator.compute(&other, today).unwrap()
    );

    // 1451.5 * 1.2 = 1741.8
    assert_eq!(calculator.compute(&female, today).unwrap().calories, 1742);
}

// ============================================================================
// MACROS
// ============================================================================

#[test]
fn test_macro_energy_reconstructs_calories() {
    // Each rounded gram value is off by at most 0.5 g, so the reconstruction
    // can drift by up to 0.5 * (4 + 9 + 4) = 8.5 kcal plus calorie rounding.
    let calculator = NutritionPlanCalculator::default();
    for profile in common::all_profiles() {
        let plan = calculator
            .compute(&profile, common::reference_today())
            .unwrap();
        let reconstructed = plan.protein * 4 + plan.fats * 9 + plan.carbs * 4;
        assert!(
            (reconstructed - plan.calories).abs() <= 9,
            "reconstructed {reconstructed} vs {} for {profile:?}",
            plan.calories
        );
    }
}

#[test]
fn test_protein_and_fat_scale_with_weight() {
    let profile = UserProfile {
        weight_kg: 100.0,
        ..common::reference_profile()
    };
    let plan = compute_nutrition_plan(&profile, common::reference_today()).unwrap();
    assert_eq!(plan.protein, 220);
    assert_eq!(plan.fats, 88);
}

#[test]
fn test_negative_carbs_are_reported_unclamped() {
    // Light, short, older, sedentary woman losing weight: protein and fat
    // energy exceed the calorie target.
    let profile = UserProfile {
        height_cm: 140.0,
        weight_kg: 45.0,
        age: 80,
        gender: Gender::Female,
        goal: Goal::LoseWeight,
        workout_frequency: WorkoutFrequency::Occasional,
    };
    let plan = compute_nutrition_plan(&profile, common::reference_today()).unwrap();
    assert!(plan.carbs < 0, "carbs should be negative, got {}", plan.carbs);
}

#[test]
fn test_half_gram_carb_deficit_rounds_up() {
    let profile = UserProfile {
        height_cm: 140.0,
        weight_kg: 40.0,
        age: 20,
        gender: Gender::Female,
        goal: Goal::LoseWeight,
        workout_frequency: WorkoutFrequency::Occasional,
    };
    let calculator = NutritionPlanCalculator::default();
    let breakdown = calculator
        .breakdown(&profile, common::reference_today())
        .unwrap();
    assert!((breakdown.macros.carbs_g + 0.5).abs() < 1e-9);

    let plan = calculator.compute(&profile, common::reference_today()).unwrap();
    assert_eq!(plan.carbs, 0);
    assert_eq!(plan.calories, 667);
    assert_eq!(plan.protein, 88);
    assert_eq!(plan.fats, 35);
}

// ============================================================================
// TARGET DATE
// ============================================================================

#[test]
fn test_target_date_is_28_days_across_boundaries() {
    let calculator = NutritionPlanCalculator::default();
    let profile = common::reference_profile();
    let cases = [
        (common::date(2025, 1, 31), common::date(2025, 2, 28)),
        (common::date(2024, 2, 1), common::date(2024, 2, 29)),
        (common::date(2024, 12, 20), common::date(2025, 1, 17)),
    ];
    for (today, expected) in cases {
        let plan = calculator.compute(&profile, today).unwrap();
        assert_eq!(plan.target_date, expected);
    }
}

#[test]
fn test_target_date_label() {
    let plan = compute_nutrition_plan(&common::reference_profile(), common::date(2025, 2, 10))
        .unwrap();
    assert_eq!(plan.target_date_label(), "March 10, 2025");
}

// ============================================================================
// FORMULA VERSIONS AND VALIDATION
// ============================================================================

#[test]
fn test_legacy_formula() {
    let calculator = NutritionPlanCalculator::new(PlanConfig::for_version(FormulaVersion::Legacy));
    let plan = calculator
        .compute(&common::reference_profile(), common::reference_today())
        .unwrap();

    // TDEE 2224.0625 * 0.8 = 1779.25; protein 70 g, fat 28 g
    assert_eq!(plan.calories, 1779);
    assert_eq!(plan.protein, 70);
    assert_eq!(plan.fats, 28);
    assert_eq!(plan.carbs, 312);
    assert!((plan.target_weight_kg - 68.0).abs() < 1e-9);
    assert_eq!(plan.formula_version, FormulaVersion::Legacy);
}

#[test]
fn test_custom_horizon() {
    let config = PlanConfig {
        horizon_weeks: 8,
        ..PlanConfig::default()
    };
    let plan = NutritionPlanCalculator::new(config)
        .compute(&common::reference_profile(), common::reference_today())
        .unwrap();
    assert!((plan.target_weight_kg - 66.0).abs() < 1e-9);
    assert_eq!(plan.target_date, common::date(2025, 2, 26));
}

#[test]
fn test_invalid_biometrics_are_rejected() {
    let today = common::reference_today();
    for (height_cm, weight_kg) in [(0.0, 70.0), (170.0, -5.0), (f64::NAN, 70.0), (170.0, f64::INFINITY)]
    {
        let profile = UserProfile {
            height_cm,
            weight_kg,
            ..common::reference_profile()
        };
        let err = compute_nutrition_plan(&profile, today).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }
}
