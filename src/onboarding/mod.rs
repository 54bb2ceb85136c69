// ABOUTME: Onboarding wizard modelled as an explicit state machine
// ABOUTME: Steps and events form a transition table; the flow collects the profile draft
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Onboarding
//!
//! ```text
//! Welcome -> Gender -> WorkoutFrequency -> HeightWeight -> Birthdate -> Goal
//!         -> ValueProposition -> CustomPlan -> Complete
//! ```
//!
//! Data steps advance on `Submit`, the welcome screen on `GetStarted`, the
//! last two screens on `Continue`. `Back` walks the chain in reverse and keeps
//! values already entered. Anything else fails with `InvalidTransition`.

/// Flow state and input validation
pub mod flow;
/// Steps, events and the transition table
pub mod step;

pub use flow::OnboardingFlow;
pub use step::{transition, EventKind, OnboardingEvent, OnboardingStep, StepInput};
