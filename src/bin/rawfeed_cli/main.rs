// ABOUTME: Rawfeed CLI - command-line front end to the feeding and nutrition rules engine
// ABOUTME: Computes intake, conversions, ratio checks, batch and bone amounts, and recipe balance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Daily intake for a 20 kg adult on maintenance
//! rawfeed-cli intake --weight 20
//!
//! # Puppy guidelines
//! rawfeed-cli intake --weight 8 --dob 2024-03-01 --puppy
//!
//! # Convert 44 lb to kg and snap to the nearest half kilogram
//! rawfeed-cli convert --lb 44 --commit
//!
//! # Check a ratio set
//! rawfeed-cli ratios --muscle-meat 0.6 --bone 0.1 --plant-matter 0.2
//!
//! # How long does a 10 kg batch last at 500 g/day?
//! rawfeed-cli batch --daily-grams 500 --batch-kg 10
//!
//! # Grams of a 20% bone ingredient for a 27 kg dog
//! rawfeed-cli bone --weight 27 --bone-percent 20
//!
//! # Balance check of a recipe against a catalog fixture
//! rawfeed-cli balance --catalog catalog.json --recipe recipe.json
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use rawfeed::logging::LoggingConfig;
use rawfeed::nutrition::config::NutritionRulesConfig;
use std::path::PathBuf;
use tracing::debug;

use helpers::display::print_json;

#[derive(Parser)]
#[command(
    name = "rawfeed-cli",
    about = "Rawfeed raw-feeding planner CLI",
    long_about = "Command-line front end to the rawfeed feeding and nutrition rules engine. Every command prints JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Evaluate date-dependent rules as of this date (defaults to today)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Resolve a dog's daily intake percent and grams
    Intake {
        /// Body weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Feeding goal: maintain, gain, lose, or custom
        #[arg(long, default_value = "maintain")]
        goal: String,

        /// Manual intake percent (implies the custom goal)
        #[arg(long)]
        intake_percent: Option<f64>,

        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: Option<NaiveDate>,

        /// Apply puppy feeding guidelines
        #[arg(long)]
        puppy: bool,
    },

    /// Convert a weight between kilograms and pounds
    Convert {
        /// Weight in kilograms
        #[arg(long, conflicts_with = "lb", required_unless_present = "lb")]
        kg: Option<String>,

        /// Weight in pounds
        #[arg(long)]
        lb: Option<String>,

        /// Snap to the nearest half kilogram, as when the edit is committed
        #[arg(long)]
        commit: bool,
    },

    /// Validate an ingredient ratio set (fractions, defaults to the preset)
    Ratios {
        /// Muscle meat fraction
        #[arg(long)]
        muscle_meat: Option<f64>,

        /// Bone fraction
        #[arg(long)]
        bone: Option<f64>,

        /// Liver fraction
        #[arg(long)]
        liver: Option<f64>,

        /// Secreting organ fraction
        #[arg(long)]
        secreting_organ: Option<f64>,

        /// Plant matter fraction
        #[arg(long)]
        plant_matter: Option<f64>,
    },

    /// Convert between batch size and number of days
    Batch {
        /// Daily intake in grams
        #[arg(long)]
        daily_grams: f64,

        /// Batch size in kilograms
        #[arg(long, conflicts_with = "days", required_unless_present = "days")]
        batch_kg: Option<f64>,

        /// Number of days
        #[arg(long)]
        days: Option<f64>,
    },

    /// Grams of a bone-bearing ingredient needed per day
    Bone {
        /// Body weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Feeding goal: maintain, gain, lose, or custom
        #[arg(long, default_value = "maintain")]
        goal: String,

        /// Manual intake percent (implies the custom goal)
        #[arg(long)]
        intake_percent: Option<f64>,

        /// Bone fraction of the diet (defaults to the preset; muscle meat absorbs the difference)
        #[arg(long)]
        bone_ratio: Option<f64>,

        /// Bone content of the ingredient in percent
        #[arg(long)]
        bone_percent: f64,
    },

    /// Check a recipe's category and nutrient coverage
    Balance {
        /// Catalog fixture (JSON)
        #[arg(long)]
        catalog: PathBuf,

        /// Recipe lines (JSON array of {ingredient_id, quantity_grams})
        #[arg(long)]
        recipe: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env().with_stderr();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let rules = NutritionRulesConfig::global();
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    debug!(%today, "Evaluating rules");

    let output = match cli.command {
        Command::Intake {
            weight,
            goal,
            intake_percent,
            dob,
            puppy,
        } => commands::feeding::intake(
            rules,
            today,
            &commands::feeding::DogArgs {
                weight,
                goal,
                intake_percent,
                dob,
                puppy,
                bone_ratio: None,
            },
        )?,
        Command::Convert { kg, lb, commit } => {
            commands::feeding::convert(kg.as_deref(), lb.as_deref(), commit)
        }
        Command::Ratios {
            muscle_meat,
            bone,
            liver,
            secreting_organ,
            plant_matter,
        } => commands::feeding::ratios(
            rules,
            commands::feeding::RatioArgs {
                muscle_meat,
                bone,
                liver,
                secreting_organ,
                plant_matter,
            },
        )?,
        Command::Batch {
            daily_grams,
            batch_kg,
            days,
        } => commands::feeding::batch(daily_grams, batch_kg, days),
        Command::Bone {
            weight,
            goal,
            intake_percent,
            bone_ratio,
            bone_percent,
        } => commands::feeding::bone(
            rules,
            today,
            &commands::feeding::DogArgs {
                weight,
                goal,
                intake_percent,
                dob: None,
                puppy: false,
                bone_ratio,
            },
            bone_percent,
        )?,
        Command::Balance { catalog, recipe } => {
            commands::balance::balance(rules, &catalog, &recipe).await?
        }
    };

    print_json(&output)?;
    Ok(())
}
