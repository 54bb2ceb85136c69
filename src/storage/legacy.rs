// ABOUTME: Import of profile values from flat per-key string storage
// ABOUTME: Applies the historical fallbacks for absent keys and rejects malformed values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Earlier app versions kept each profile field as its own string entry
//! (`userHeight = "170"`, `userGoal = "lose-weight"`, ...). This module turns
//! such a key/value set into a [`ProfileDraft`].

use crate::errors::{AppError, AppResult};
use crate::models::{Gender, Goal, ProfileDraft, WorkoutFrequency};
use calplan_core::constants::{legacy_defaults, legacy_keys};
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashMap;
use std::str::FromStr;
use tracing::debug;

/// Convert flat string entries into a complete draft
///
/// Absent keys take the defaults the old screens used (170 cm, 70 kg,
/// 1990-01-01, male, lose-weight, 0-2). Unrelated keys are ignored.
///
/// # Errors
///
/// Returns `InvalidFormat` when a present value cannot be parsed or the birth
/// date parts do not form a calendar date
pub fn import_flat_keys(entries: &HashMap<String, String>) -> AppResult<ProfileDraft> {
    let height_cm = parse_or(entries, legacy_keys::HEIGHT, legacy_defaults::HEIGHT_CM)?;
    let weight_kg = parse_or(entries, legacy_keys::WEIGHT, legacy_defaults::WEIGHT_KG)?;
    let year = parse_or(entries, legacy_keys::BIRTH_YEAR, legacy_defaults::BIRTH_YEAR)?;
    let month = parse_or(entries, legacy_keys::BIRTH_MONTH, legacy_defaults::BIRTH_MONTH)?;
    let day = parse_or(entries, legacy_keys::BIRTH_DAY, legacy_defaults::BIRTH_DAY)?;
    let birth_date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        AppError::invalid_format(format!("Invalid birth date {year}-{month}-{day}"))
    })?;

    let gender: Gender = parse_or_text(entries, legacy_keys::GENDER, legacy_defaults::GENDER)?;
    let goal: Goal = parse_or_text(entries, legacy_keys::GOAL, legacy_defaults::GOAL)?;
    let workout_frequency: WorkoutFrequency = parse_or_text(
        entries,
        legacy_keys::WORKOUT_FREQUENCY,
        legacy_defaults::WORKOUT_FREQUENCY,
    )?;

    debug!(
        keys = entries.len(),
        %birth_date,
        "Imported legacy profile entries"
    );

    Ok(ProfileDraft {
        height_cm: Some(height_cm),
        weight_kg: Some(weight_kg),
        birth_date: Some(birth_date),
        gender: Some(gender),
        goal: Some(goal),
        workout_frequency: Some(workout_frequency),
    })
}

/// Read a JSON object export of the flat storage
///
/// Values may be strings or numbers; anything else is rejected.
///
/// # Errors
///
/// Returns an error if the text is not a JSON object of scalar values
pub fn parse_export(text: &str) -> AppResult<HashMap<String, String>> {
    let object: serde_json::Map<String, Value> = serde_json::from_str(text)?;
    object
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(s) => Ok((key, s)),
            Value::Number(n) => Ok((key, n.to_string())),
            other => Err(AppError::invalid_format(format!(
                "Unsupported value for '{key}': {other}"
            ))),
        })
        .collect()
}

fn parse_or<T: FromStr>(entries: &HashMap<String, String>, key: &str, default: T) -> AppResult<T> {
    entries.get(key).map_or(Ok(default), |raw| {
        raw.trim().parse().map_err(|_| {
            AppError::invalid_format(format!("Invalid value for {key}: '{raw}'"))
        })
    })
}

fn parse_or_text<T>(entries: &HashMap<String, String>, key: &str, default: &str) -> AppResult<T>
where
    T: FromStr<Err = AppError>,
{
    entries.get(key).map_or_else(|| default.parse(), |raw| raw.parse())
}
