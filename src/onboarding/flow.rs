// ABOUTME: Onboarding flow driving the step table while filling a profile draft
// ABOUTME: Validates submitted values against onboarding limits and computes the plan at the end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::step::{transition, OnboardingEvent, OnboardingStep, StepInput};
use crate::config::OnboardingLimits;
use crate::errors::{AppError, AppResult};
use crate::intelligence::NutritionPlanCalculator;
use crate::models::{NutritionPlan, ProfileDraft, UserProfile};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Onboarding progress: current step plus everything submitted so far
///
/// Serializable so an interrupted onboarding resumes where it stopped.
/// Limits are not persisted; reattach them with [`OnboardingFlow::with_limits`]
/// after loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingFlow {
    step: OnboardingStep,
    draft: ProfileDraft,
    #[serde(skip)]
    limits: OnboardingLimits,
}

impl OnboardingFlow {
    /// Fresh flow on the welcome screen
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the input limits
    #[must_use]
    pub fn with_limits(mut self, limits: OnboardingLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Current step
    #[must_use]
    pub const fn step(&self) -> OnboardingStep {
        self.step
    }

    /// Values collected so far
    #[must_use]
    pub const fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    /// Whether the wizard has finished
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.step == OnboardingStep::Complete
    }

    /// Fraction of data steps with a stored value (0.0-1.0)
    #[must_use]
    pub fn progress(&self) -> f64 {
        let draft = &self.draft;
        let done = [
            draft.gender.is_some(),
            draft.workout_frequency.is_some(),
            draft.height_cm.is_some() && draft.weight_kg.is_some(),
            draft.birth_date.is_some(),
            draft.goal.is_some(),
        ]
        .into_iter()
        .filter(|done| *done)
        .count();
        done as f64 / OnboardingStep::DATA_STEPS.len() as f64
    }

    /// Apply an event
    ///
    /// On error the flow is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` if the event is not allowed on the current step
    /// (including a submit for a different step), or a validation error for
    /// out-of-range input
    pub fn handle(&mut self, event: OnboardingEvent, today: NaiveDate) -> AppResult<OnboardingStep> {
        let kind = event.kind();
        let next = transition(self.step, kind).ok_or_else(|| {
            AppError::invalid_transition(format!("Cannot {kind} on step '{}'", self.step))
        })?;

        if let OnboardingEvent::Submit { input } = event {
            if input.step() != self.step {
                return Err(AppError::invalid_transition(format!(
                    "Input for step '{}' submitted on step '{}'",
                    input.step(),
                    self.step
                )));
            }
            self.apply_input(input, today)?;
        }

        debug!(
            target: "calplan::onboarding",
            from = %self.step,
            to = %next,
            event = %kind,
            "Onboarding transition"
        );
        self.step = next;
        if self.is_complete() {
            info!(target: "calplan::onboarding", "Onboarding complete");
        }
        Ok(next)
    }

    fn apply_input(&mut self, input: StepInput, today: NaiveDate) -> AppResult<()> {
        match input {
            StepInput::Gender { gender } => self.draft.gender = Some(gender),
            StepInput::WorkoutFrequency { frequency } => {
                self.draft.workout_frequency = Some(frequency);
            }
            StepInput::HeightWeight {
                height_cm,
                weight_kg,
            } => {
                if !self.limits.accepts_height(height_cm) {
                    return Err(AppError::value_out_of_range(format!(
                        "Height must be between {} and {} cm, got {height_cm}",
                        self.limits.min_height_cm, self.limits.max_height_cm
                    )));
                }
                if !self.limits.accepts_weight(weight_kg) {
                    return Err(AppError::value_out_of_range(format!(
                        "Weight must be between {} and {} kg, got {weight_kg}",
                        self.limits.min_weight_kg, self.limits.max_weight_kg
                    )));
                }
                self.draft.height_cm = Some(height_cm);
                self.draft.weight_kg = Some(weight_kg);
            }
            StepInput::Birthdate { date } => {
                if date.year() < self.limits.min_birth_year || date > today {
                    return Err(AppError::value_out_of_range(format!(
                        "Birth date must be between {}-01-01 and {today}, got {date}",
                        self.limits.min_birth_year
                    )));
                }
                self.draft.birth_date = Some(date);
            }
            StepInput::Goal { goal } => self.draft.goal = Some(goal),
        }
        Ok(())
    }

    /// Profile built from the collected values
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` while any data step is unanswered
    pub fn profile(&self, today: NaiveDate) -> AppResult<UserProfile> {
        self.draft.to_profile(today)
    }

    /// Nutrition plan for the collected profile
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` while any data step is unanswered, or a
    /// calculation error
    pub fn plan(
        &self,
        today: NaiveDate,
        calculator: &NutritionPlanCalculator,
    ) -> AppResult<NutritionPlan> {
        calculator.compute(&self.profile(today)?, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use crate::models::Gender;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_wrong_step_input_is_rejected_without_side_effects() {
        let mut flow = OnboardingFlow::new();
        flow.handle(OnboardingEvent::GetStarted, today()).unwrap();

        let before = flow.clone();
        let err = flow
            .handle(
                OnboardingEvent::Submit {
                    input: StepInput::Birthdate {
                        date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
                    },
                },
                today(),
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTransition);
        assert_eq!(flow, before);
    }

    #[test]
    fn test_submit_records_value_and_advances() {
        let mut flow = OnboardingFlow::new();
        flow.handle(OnboardingEvent::GetStarted, today()).unwrap();
        let next = flow
            .handle(
                OnboardingEvent::Submit {
                    input: StepInput::Gender {
                        gender: Gender::Female,
                    },
                },
                today(),
            )
            .unwrap();
        assert_eq!(next, OnboardingStep::WorkoutFrequency);
        assert_eq!(flow.draft().gender, Some(Gender::Female));
        assert!((flow.progress() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_continue_on_welcome_is_invalid() {
        let mut flow = OnboardingFlow::new();
        let err = flow.handle(OnboardingEvent::Continue, today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTransition);
        assert_eq!(flow.step(), OnboardingStep::Welcome);
    }
}
