// ABOUTME: MealPilot CLI - food database search and meal recommendations from the terminal
// ABOUTME: Prints JSON to stdout; logs go to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Search the food database (requires FATSECRET_CLIENT_ID / FATSECRET_CLIENT_SECRET)
//! mealpilot-cli search "greek yogurt" --page-size 10
//!
//! # Recommend meals for the remaining budget
//! mealpilot-cli recommend --calories 650 --protein 40 --category dinner
//!
//! # Encouragement message for the remaining budget
//! mealpilot-cli coach --calories 900 --protein 10
//!
//! # Meal category for the current (or a given) hour
//! mealpilot-cli category --hour 19
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mealpilot::logging::LoggingConfig;
use mealpilot::models::MealCategory;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mealpilot-cli",
    about = "MealPilot food search and meal recommendation CLI",
    long_about = "Search the FatSecret food database and get meal recommendations for the remaining daily budget."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Search the food database
    Search {
        /// Search text
        query: String,

        /// Maximum results to request (clamped to 1-50)
        #[arg(long, default_value = "25")]
        page_size: u32,

        /// Request timeout in milliseconds (defaults to `FATSECRET_SEARCH_TIMEOUT_MS`)
        #[arg(long)]
        timeout_ms: Option<u64>,
    },

    /// Recommend meals for the remaining calorie and protein budget
    Recommend {
        /// Remaining calories
        #[arg(long)]
        calories: f64,

        /// Remaining protein grams
        #[arg(long)]
        protein: f64,

        /// Preferred category (breakfast, lunch, dinner, snacks)
        #[arg(long)]
        category: Option<MealCategory>,

        /// Meal dataset JSON file (defaults to the bundled dataset)
        #[arg(long)]
        meals: Option<PathBuf>,
    },

    /// Encouragement message for the remaining budget
    Coach {
        /// Remaining calories
        #[arg(long)]
        calories: f64,

        /// Remaining protein grams
        #[arg(long)]
        protein: f64,
    },

    /// Suggested meal category for the time of day
    Category {
        /// Hour of day (0-23), defaults to the local clock
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let output = match cli.command {
        Command::Search {
            query,
            page_size,
            timeout_ms,
        } => commands::search::run(&query, page_size, timeout_ms).await?,
        Command::Recommend {
            calories,
            protein,
            category,
            meals,
        } => commands::recommend::run(calories, protein, category, meals.as_deref())?,
        Command::Coach { calories, protein } => commands::recommend::coach(calories, protein)?,
        Command::Category { hour } => commands::recommend::category(hour)?,
    };

    println!("{output}");
    Ok(())
}
