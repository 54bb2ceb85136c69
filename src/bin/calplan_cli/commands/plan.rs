// ABOUTME: Plan command for calplan-cli
// ABOUTME: Computes a nutrition plan from flags merged over the stored profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use calplan::config::{FormulaVersion, PlanConfig};
use calplan::errors::AppResult;
use calplan::intelligence::NutritionPlanCalculator;
use calplan::storage::{ProfileStore, StoreKey};
use tracing::info;

use super::Context;
use crate::helpers::display::{display_breakdown, display_plan, print_json};
use crate::ProfileArgs;

/// Compute and print a plan
pub async fn run(
    ctx: &Context,
    args: &ProfileArgs,
    formula: Option<FormulaVersion>,
    json: bool,
    breakdown: bool,
    save: bool,
) -> AppResult<()> {
    let draft = args.apply_to(ctx.stored_draft().await?);
    let profile = draft.to_profile(ctx.today)?;

    let config = formula.map_or_else(|| PlanConfig::global().clone(), PlanConfig::for_version);
    let calculator = NutritionPlanCalculator::new(config);
    let plan = calculator.compute(&profile, ctx.today)?;

    if json {
        print_json(&plan)?;
    } else {
        display_plan(&plan, &profile);
    }
    if breakdown {
        display_breakdown(&calculator.breakdown(&profile, ctx.today)?);
    }

    if save {
        ctx.storage.save(StoreKey::Plan, &plan).await?;
        info!(calories = plan.calories, "Plan saved");
    }
    Ok(())
}
