// ABOUTME: Profile management commands for calplan-cli
// ABOUTME: Handles show, set, legacy import and reset of the stored profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use calplan::errors::{AppError, AppResult};
use calplan::models::ProfileDraft;
use calplan::storage::{legacy, ProfileStore, StoreKey};
use std::path::Path;
use tracing::{info, warn};

use super::Context;
use crate::helpers::display::{display_draft, print_json};
use crate::ProfileArgs;

/// Print the stored profile
pub async fn show(ctx: &Context, json: bool) -> AppResult<()> {
    let draft = ctx.stored_draft().await?;
    if json {
        print_json(&draft)
    } else {
        display_draft(&draft, ctx.today);
        Ok(())
    }
}

/// Update stored profile values
pub async fn set(ctx: &Context, args: &ProfileArgs) -> AppResult<()> {
    let draft = args.apply_to(ctx.stored_draft().await?);
    check_limits(ctx, &draft)?;
    ctx.storage.save(StoreKey::Profile, &draft).await?;
    info!(missing = draft.missing_fields().len(), "Profile updated");
    display_draft(&draft, ctx.today);
    Ok(())
}

/// Replace the stored profile with values from a flat key/value export
pub async fn import_legacy(ctx: &Context, file: &Path) -> AppResult<()> {
    let text = tokio::fs::read_to_string(file).await.map_err(|e| {
        AppError::not_found(format!("legacy export {}", file.display())).with_source(e)
    })?;
    let entries = legacy::parse_export(&text)?;
    let draft = legacy::import_flat_keys(&entries)?;

    ctx.storage.save(StoreKey::Profile, &draft).await?;
    info!(file = %file.display(), keys = entries.len(), "Legacy profile imported");
    display_draft(&draft, ctx.today);
    Ok(())
}

/// Remove all stored data
pub async fn reset(ctx: &Context) -> AppResult<()> {
    ctx.storage.clear().await?;
    warn!("All stored profile data removed");
    println!("Logged out: profile, plan and onboarding progress removed.");
    Ok(())
}

fn check_limits(ctx: &Context, draft: &ProfileDraft) -> AppResult<()> {
    if let Some(height) = draft.height_cm {
        if !ctx.limits.accepts_height(height) {
            return Err(AppError::value_out_of_range(format!(
                "Height must be between {} and {} cm",
                ctx.limits.min_height_cm, ctx.limits.max_height_cm
            )));
        }
    }
    if let Some(weight) = draft.weight_kg {
        if !ctx.limits.accepts_weight(weight) {
            return Err(AppError::value_out_of_range(format!(
                "Weight must be between {} and {} kg",
                ctx.limits.min_weight_kg, ctx.limits.max_weight_kg
            )));
        }
    }
    if let Some(birth_date) = draft.birth_date {
        if birth_date > ctx.today {
            return Err(AppError::value_out_of_range("Birth date is in the future"));
        }
    }
    Ok(())
}
