// ABOUTME: Environment configuration tests for plan coefficients, limits and storage
// ABOUTME: Serialized because they mutate process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use calplan::config::{
    DeficitStrategy, FormulaVersion, OnboardingLimits, PlanConfig, StorageBackend, StorageConfig,
};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

mod common;

const PLAN_VARS: [&str; 5] = [
    "CALPLAN_FORMULA_VERSION",
    "CALPLAN_HORIZON_WEEKS",
    "CALPLAN_PROTEIN_G_PER_KG",
    "CALPLAN_FAT_G_PER_KG",
    "CALPLAN_KCAL_PER_KG_BODY_FAT",
];

fn clear_plan_vars() {
    for var in PLAN_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_without_overrides_is_default() {
    common::init_test_logging();
    clear_plan_vars();
    assert_eq!(PlanConfig::load().unwrap(), PlanConfig::default());
}

#[test]
#[serial]
fn test_formula_version_selects_legacy_coefficients() {
    clear_plan_vars();
    env::set_var("CALPLAN_FORMULA_VERSION", "legacy");
    let config = PlanConfig::load().unwrap();
    clear_plan_vars();

    assert_eq!(config.formula_version, FormulaVersion::Legacy);
    assert!((config.macronutrients.protein_g_per_kg - 1.0).abs() < f64::EPSILON);
    assert!(matches!(
        config.goal_adjustment.lose_strategy,
        DeficitStrategy::CalorieFraction { .. }
    ));
}

#[test]
#[serial]
fn test_numeric_overrides_apply_on_top_of_version() {
    clear_plan_vars();
    env::set_var("CALPLAN_HORIZON_WEEKS", "12");
    env::set_var("CALPLAN_PROTEIN_G_PER_KG", " 1.8 ");
    env::set_var("CALPLAN_KCAL_PER_KG_BODY_FAT", "7000");
    let config = PlanConfig::load().unwrap();
    clear_plan_vars();

    assert_eq!(config.horizon_weeks, 12);
    assert_eq!(config.horizon_days(), 84);
    assert!((config.macronutrients.protein_g_per_kg - 1.8).abs() < f64::EPSILON);
    assert_eq!(
        config.goal_adjustment.lose_strategy,
        DeficitStrategy::EnergyBalance {
            kcal_per_kg: 7000.0
        }
    );
}

#[test]
#[serial]
fn test_invalid_overrides_are_rejected() {
    clear_plan_vars();
    env::set_var("CALPLAN_FORMULA_VERSION", "v3");
    assert!(PlanConfig::load().is_err());

    clear_plan_vars();
    env::set_var("CALPLAN_HORIZON_WEEKS", "four");
    assert!(PlanConfig::load().is_err());

    clear_plan_vars();
    env::set_var("CALPLAN_PROTEIN_G_PER_KG", "9");
    assert!(PlanConfig::load().is_err());
    clear_plan_vars();
}

#[test]
#[serial]
fn test_non_finite_overrides_are_rejected() {
    for value in ["NaN", "inf", "-inf"] {
        clear_plan_vars();
        env::set_var("CALPLAN_KCAL_PER_KG_BODY_FAT", value);
        assert!(PlanConfig::load().is_err(), "kcal per kg = {value}");

        clear_plan_vars();
        env::set_var("CALPLAN_PROTEIN_G_PER_KG", value);
        assert!(PlanConfig::load().is_err(), "protein g/kg = {value}");
    }
    clear_plan_vars();

    for value in ["NaN", "inf"] {
        env::set_var("CALPLAN_MAX_WEIGHT_KG", value);
        assert!(OnboardingLimits::from_env().is_err(), "max weight = {value}");
    }
    env::remove_var("CALPLAN_MAX_WEIGHT_KG");
}

#[test]
#[serial]
fn test_onboarding_limits_from_env() {
    env::set_var("CALPLAN_MAX_WEIGHT_KG", "200");
    let limits = OnboardingLimits::from_env().unwrap();
    env::remove_var("CALPLAN_MAX_WEIGHT_KG");
    assert!(limits.accepts_weight(190.0));
    assert!(limits.accepts_height(140.0));

    env::set_var("CALPLAN_MIN_HEIGHT_CM", "250");
    assert!(OnboardingLimits::from_env().is_err());
    env::remove_var("CALPLAN_MIN_HEIGHT_CM");
}

#[test]
#[serial]
fn test_storage_config_from_env() {
    env::set_var("CALPLAN_STORAGE", "memory");
    env::set_var("CALPLAN_DATA_DIR", "/tmp/calplan-config-test");
    let config = StorageConfig::from_env().unwrap();
    env::remove_var("CALPLAN_STORAGE");
    env::remove_var("CALPLAN_DATA_DIR");

    assert_eq!(config.backend, StorageBackend::Memory);
    assert_eq!(
        config.document_path(),
        PathBuf::from("/tmp/calplan-config-test/profile.json")
    );
}
