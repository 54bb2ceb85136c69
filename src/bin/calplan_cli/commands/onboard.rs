// ABOUTME: Onboarding wizard commands for calplan-cli
// ABOUTME: Loads the persisted flow, applies one event and stores the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use calplan::errors::AppResult;
use calplan::intelligence::NutritionPlanCalculator;
use calplan::onboarding::{OnboardingEvent, OnboardingFlow, OnboardingStep, StepInput};
use calplan::storage::{ProfileStore, StoreKey};
use tracing::info;

use super::Context;
use crate::helpers::display::{display_flow, display_plan};

async fn load_flow(ctx: &Context) -> AppResult<OnboardingFlow> {
    let flow: Option<OnboardingFlow> = ctx.storage.load(StoreKey::Onboarding).await?;
    Ok(flow.unwrap_or_default().with_limits(ctx.limits.clone()))
}

async fn apply(ctx: &Context, mut flow: OnboardingFlow, event: OnboardingEvent) -> AppResult<()> {
    let step = flow.handle(event, ctx.today)?;
    ctx.storage.save(StoreKey::Onboarding, &flow).await?;

    match step {
        OnboardingStep::CustomPlan => {
            let plan = flow.plan(ctx.today, &NutritionPlanCalculator::from_global())?;
            display_plan(&plan, &flow.profile(ctx.today)?);
        }
        OnboardingStep::Complete => {
            let plan = flow.plan(ctx.today, &NutritionPlanCalculator::from_global())?;
            ctx.storage.save(StoreKey::Profile, flow.draft()).await?;
            ctx.storage.save(StoreKey::Plan, &plan).await?;
            info!(calories = plan.calories, "Onboarding finished, profile and plan saved");
        }
        _ => {}
    }

    display_flow(&flow);
    Ok(())
}

/// Print where the wizard stands
pub async fn status(ctx: &Context) -> AppResult<()> {
    display_flow(&load_flow(ctx).await?);
    Ok(())
}

/// Discard progress and move to the first question
pub async fn start(ctx: &Context) -> AppResult<()> {
    let flow = OnboardingFlow::new().with_limits(ctx.limits.clone());
    apply(ctx, flow, OnboardingEvent::GetStarted).await
}

/// Answer the current step
pub async fn submit(ctx: &Context, input: StepInput) -> AppResult<()> {
    let flow = load_flow(ctx).await?;
    apply(ctx, flow, OnboardingEvent::Submit { input }).await
}

/// Go back one step
pub async fn back(ctx: &Context) -> AppResult<()> {
    let flow = load_flow(ctx).await?;
    apply(ctx, flow, OnboardingEvent::Back).await
}

/// Continue past a non-data screen
pub async fn advance(ctx: &Context) -> AppResult<()> {
    let flow = load_flow(ctx).await?;
    apply(ctx, flow, OnboardingEvent::Continue).await
}
