// ABOUTME: calplan CLI - command-line front end for plan calculation and onboarding
// ABOUTME: Handles profile management, the onboarding wizard, BMI and daily summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Compute a plan without storing anything
//! calplan-cli plan --height 170 --weight 70 --birth-date 1994-05-01 \
//!     --gender male --goal lose-weight --frequency 3-5
//!
//! # Walk through onboarding
//! calplan-cli onboard start
//! calplan-cli onboard submit gender female
//! calplan-cli onboard submit height-weight 165 60
//! calplan-cli onboard status
//!
//! # Import profile values from an old flat key/value export
//! calplan-cli profile import-legacy storage.json
//!
//! # Compare today's intake with the stored plan
//! calplan-cli summary --calories 1450 --protein 120 --carbs 90 --fats 50
//! ```

mod commands;
mod helpers;

use calplan::config::{FormulaVersion, OnboardingLimits, StorageBackend, StorageConfig};
use calplan::logging::LoggingConfig;
use calplan::models::{Gender, Goal, WorkoutFrequency};
use calplan::storage::ProfileStorage;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use commands::Context;

#[derive(Parser)]
#[command(
    name = "calplan-cli",
    about = "Nutrition plan calculator",
    long_about = "Command-line tool for onboarding, nutrition plan calculation and daily intake tracking."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override (defaults to CALPLAN_DATA_DIR or the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep everything in memory for this invocation
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Date to treat as today (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute a nutrition plan
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Formula version (current or legacy)
        #[arg(long)]
        formula: Option<FormulaVersion>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Also print every intermediate value
        #[arg(long)]
        breakdown: bool,

        /// Store the resulting plan
        #[arg(long)]
        save: bool,
    },

    /// Stored profile management
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Onboarding wizard
    Onboard {
        #[command(subcommand)]
        action: OnboardCommand,
    },

    /// Body Mass Index for the stored profile or given values
    Bmi {
        /// Height (cm)
        #[arg(long)]
        height: Option<f64>,

        /// Weight (kg)
        #[arg(long)]
        weight: Option<f64>,
    },

    /// Compare a day's intake with the stored plan
    Summary {
        /// Calories eaten (kcal)
        #[arg(long)]
        calories: f64,

        /// Protein eaten (g)
        #[arg(long, default_value = "0")]
        protein: f64,

        /// Carbohydrates eaten (g)
        #[arg(long, default_value = "0")]
        carbs: f64,

        /// Fat eaten (g)
        #[arg(long, default_value = "0")]
        fats: f64,
    },
}

/// Profile values given on the command line; unset values fall back to the stored profile
#[derive(Args, Default)]
pub struct ProfileArgs {
    /// Height (cm)
    #[arg(long)]
    pub height: Option<f64>,

    /// Weight (kg)
    #[arg(long)]
    pub weight: Option<f64>,

    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    pub birth_date: Option<NaiveDate>,

    /// Gender (male, female, other)
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Goal (lose-weight, maintain, gain-weight)
    #[arg(long)]
    pub goal: Option<Goal>,

    /// Workouts per week (0-2, 3-5, 6+)
    #[arg(long)]
    pub frequency: Option<WorkoutFrequency>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Show the stored profile
    Show {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Update stored profile values
    Set {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Import values from a flat key/value JSON export
    ImportLegacy {
        /// Path to the export file
        file: PathBuf,
    },

    /// Remove all stored data (log out)
    Reset,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum OnboardCommand {
    /// Show the current step and collected values
    Status,

    /// Start over from the first question
    Start,

    /// Answer the current step
    Submit {
        #[command(subcommand)]
        answer: SubmitCommand,
    },

    /// Go back one step
    Back,

    /// Advance past the value proposition or plan screen
    Continue,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum SubmitCommand {
    /// Gender step
    Gender {
        /// male, female or other
        value: Gender,
    },

    /// Workout frequency step
    WorkoutFrequency {
        /// 0-2, 3-5 or 6+
        value: WorkoutFrequency,
    },

    /// Height and weight step
    HeightWeight {
        /// Height (cm)
        height: f64,
        /// Weight (kg)
        weight: f64,
    },

    /// Birth date step
    Birthdate {
        /// YYYY-MM-DD
        date: NaiveDate,
    },

    /// Goal step
    Goal {
        /// lose-weight, maintain or gain-weight
        value: Goal,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let mut storage_config = StorageConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        storage_config.data_dir = dir;
    }
    if cli.ephemeral {
        storage_config.backend = StorageBackend::Memory;
    }

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    debug!(%today, backend = %storage_config.backend, "calplan-cli starting");

    let ctx = Context {
        storage: ProfileStorage::new(&storage_config),
        limits: OnboardingLimits::from_env()?,
        today,
    };

    match cli.command {
        Command::Plan {
            profile,
            formula,
            json,
            breakdown,
            save,
        } => {
            commands::plan::run(&ctx, &profile, formula, json, breakdown, save).await?;
        }
        Command::Profile { action } => match action {
            ProfileCommand::Show { json } => commands::profile::show(&ctx, json).await?,
            ProfileCommand::Set { profile } => commands::profile::set(&ctx, &profile).await?,
            ProfileCommand::ImportLegacy { file } => {
                commands::profile::import_legacy(&ctx, &file).await?;
            }
            ProfileCommand::Reset => commands::profile::reset(&ctx).await?,
        },
        Command::Onboard { action } => match action {
            OnboardCommand::Status => commands::onboard::status(&ctx).await?,
            OnboardCommand::Start => commands::onboard::start(&ctx).await?,
            OnboardCommand::Submit { answer } => {
                commands::onboard::submit(&ctx, answer.into_input()).await?;
            }
            OnboardCommand::Back => commands::onboard::back(&ctx).await?,
            OnboardCommand::Continue => commands::onboard::advance(&ctx).await?,
        },
        Command::Bmi { height, weight } => {
            commands::analytics::bmi(&ctx, height, weight).await?;
        }
        Command::Summary {
            calories,
            protein,
            carbs,
            fats,
        } => {
            commands::analytics::summary(&ctx, calories, protein, carbs, fats).await?;
        }
    }

    Ok(())
}

impl SubmitCommand {
    fn into_input(self) -> calplan::onboarding::StepInput {
        use calplan::onboarding::StepInput;
        match self {
            Self::Gender { value } => StepInput::Gender { gender: value },
            Self::WorkoutFrequency { value } => StepInput::WorkoutFrequency { frequency: value },
            Self::HeightWeight { height, weight } => StepInput::HeightWeight {
                height_cm: height,
                weight_kg: weight,
            },
            Self::Birthdate { date } => StepInput::Birthdate { date },
            Self::Goal { value } => StepInput::Goal { goal: value },
        }
    }
}
