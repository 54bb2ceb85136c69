// ABOUTME: Command modules for calplan-cli and the state they share
// ABOUTME: Provides the execution context and profile flag merging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod analytics;
pub mod onboard;
pub mod plan;
pub mod profile;

use calplan::config::OnboardingLimits;
use calplan::errors::AppResult;
use calplan::models::ProfileDraft;
use calplan::storage::{ProfileStorage, ProfileStore, StoreKey};
use chrono::NaiveDate;

use crate::ProfileArgs;

/// Everything a command needs besides its own arguments
pub struct Context {
    pub storage: ProfileStorage,
    pub limits: OnboardingLimits,
    pub today: NaiveDate,
}

impl Context {
    /// Stored profile draft, empty when nothing was saved yet
    pub async fn stored_draft(&self) -> AppResult<ProfileDraft> {
        Ok(self
            .storage
            .load(StoreKey::Profile)
            .await?
            .unwrap_or_default())
    }
}

impl ProfileArgs {
    /// Overlay the values given on the command line onto `draft`
    pub fn apply_to(&self, mut draft: ProfileDraft) -> ProfileDraft {
        if self.height.is_some() {
            draft.height_cm = self.height;
        }
        if self.weight.is_some() {
            draft.weight_kg = self.weight;
        }
        if self.birth_date.is_some() {
            draft.birth_date = self.birth_date;
        }
        if self.gender.is_some() {
            draft.gender = self.gender;
        }
        if self.goal.is_some() {
            draft.goal = self.goal;
        }
        if self.frequency.is_some() {
            draft.workout_frequency = self.frequency;
        }
        draft
    }
}
