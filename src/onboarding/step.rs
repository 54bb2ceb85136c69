// ABOUTME: Onboarding steps, events and the transition table between them
// ABOUTME: The table is the single source of truth for navigation order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::{Gender, Goal, WorkoutFrequency};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Screen of the onboarding wizard
/// Valid transitions are listed in [`transition`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    /// Landing screen
    #[default]
    Welcome,
    /// Gender selection
    Gender,
    /// Workouts per week
    WorkoutFrequency,
    /// Height and weight pickers
    HeightWeight,
    /// Birth date picker
    Birthdate,
    /// Weight goal
    Goal,
    /// Motivation screen before the plan
    ValueProposition,
    /// Computed plan review
    CustomPlan,
    /// Onboarding finished
    Complete,
}

impl OnboardingStep {
    /// Steps in wizard order
    pub const ORDER: [Self; 9] = [
        Self::Welcome,
        Self::Gender,
        Self::WorkoutFrequency,
        Self::HeightWeight,
        Self::Birthdate,
        Self::Goal,
        Self::ValueProposition,
        Self::CustomPlan,
        Self::Complete,
    ];

    /// Steps that collect profile data
    pub const DATA_STEPS: [Self; 5] = [
        Self::Gender,
        Self::WorkoutFrequency,
        Self::HeightWeight,
        Self::Birthdate,
        Self::Goal,
    ];

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Gender => "gender",
            Self::WorkoutFrequency => "workout_frequency",
            Self::HeightWeight => "height_weight",
            Self::Birthdate => "birthdate",
            Self::Goal => "goal",
            Self::ValueProposition => "value_proposition",
            Self::CustomPlan => "custom_plan",
            Self::Complete => "complete",
        }
    }

    /// Whether this step expects a [`StepInput`]
    #[must_use]
    pub const fn is_data_step(self) -> bool {
        matches!(
            self,
            Self::Gender | Self::WorkoutFrequency | Self::HeightWeight | Self::Birthdate | Self::Goal
        )
    }

    const fn next(self) -> Option<Self> {
        match self {
            Self::Welcome => Some(Self::Gender),
            Self::Gender => Some(Self::WorkoutFrequency),
            Self::WorkoutFrequency => Some(Self::HeightWeight),
            Self::HeightWeight => Some(Self::Birthdate),
            Self::Birthdate => Some(Self::Goal),
            Self::Goal => Some(Self::ValueProposition),
            Self::ValueProposition => Some(Self::CustomPlan),
            Self::CustomPlan => Some(Self::Complete),
            Self::Complete => None,
        }
    }

    const fn previous(self) -> Option<Self> {
        match self {
            Self::Welcome | Self::Complete => None,
            Self::Gender => Some(Self::Welcome),
            Self::WorkoutFrequency => Some(Self::Gender),
            Self::HeightWeight => Some(Self::WorkoutFrequency),
            Self::Birthdate => Some(Self::HeightWeight),
            Self::Goal => Some(Self::Birthdate),
            Self::ValueProposition => Some(Self::Goal),
            Self::CustomPlan => Some(Self::ValueProposition),
        }
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value submitted on a data step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum StepInput {
    /// Gender step
    Gender {
        /// Selected gender
        gender: Gender,
    },
    /// Workout frequency step
    WorkoutFrequency {
        /// Selected bucket
        frequency: WorkoutFrequency,
    },
    /// Height and weight step
    HeightWeight {
        /// Height (cm)
        height_cm: f64,
        /// Weight (kg)
        weight_kg: f64,
    },
    /// Birth date step
    Birthdate {
        /// Date of birth
        date: NaiveDate,
    },
    /// Goal step
    Goal {
        /// Selected goal
        goal: Goal,
    },
}

impl StepInput {
    /// Step this input belongs to
    #[must_use]
    pub const fn step(&self) -> OnboardingStep {
        match self {
            Self::Gender { .. } => OnboardingStep::Gender,
            Self::WorkoutFrequency { .. } => OnboardingStep::WorkoutFrequency,
            Self::HeightWeight { .. } => OnboardingStep::HeightWeight,
            Self::Birthdate { .. } => OnboardingStep::Birthdate,
            Self::Goal { .. } => OnboardingStep::Goal,
        }
    }
}

/// User action on the current step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum OnboardingEvent {
    /// Leave the welcome screen
    GetStarted,
    /// Submit a data step
    Submit {
        /// Submitted value
        input: StepInput,
    },
    /// Advance past a non-data screen
    Continue,
    /// Return to the previous screen
    Back,
}

impl OnboardingEvent {
    /// Payload-free kind of this event
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::GetStarted => EventKind::GetStarted,
            Self::Submit { .. } => EventKind::Submit,
            Self::Continue => EventKind::Continue,
            Self::Back => EventKind::Back,
        }
    }
}

/// Event without payload, used as the transition table key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// See [`OnboardingEvent::GetStarted`]
    GetStarted,
    /// See [`OnboardingEvent::Submit`]
    Submit,
    /// See [`OnboardingEvent::Continue`]
    Continue,
    /// See [`OnboardingEvent::Back`]
    Back,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::GetStarted => "get_started",
            Self::Submit => "submit",
            Self::Continue => "continue",
            Self::Back => "back",
        };
        f.write_str(name)
    }
}

/// Transition table: the step reached from `step` on `event`, or `None` if not allowed
///
/// | from | event | to |
/// |---|---|---|
/// | Welcome | `GetStarted` | Gender |
/// | data step | Submit | next step |
/// | `ValueProposition`, `CustomPlan` | Continue | next step |
/// | any but Welcome and Complete | Back | previous step |
#[must_use]
pub const fn transition(step: OnboardingStep, event: EventKind) -> Option<OnboardingStep> {
    match (step, event) {
        (OnboardingStep::Welcome, EventKind::GetStarted) => step.next(),
        (
            OnboardingStep::ValueProposition | OnboardingStep::CustomPlan,
            EventKind::Continue,
        ) => step.next(),
        (_, EventKind::Submit) if step.is_data_step() => step.next(),
        (_, EventKind::Back) => step.previous(),
        _ => None,
    }
}
