//! CalmCast CLI - Mood tracking and stress forecast
//!
//! Usage:
//!   calmcast mood add --rating 7          Record today's mood
//!   calmcast forecast                     Today's stress forecast
//!   calmcast trends                       Mood over the trailing week
//!   calmcast score --sleep 6.5 --steps 4000 --heart-rate 78

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Forecast {
            journal,
            date,
            json,
        } => {
            let date = commands::resolve_date(date.as_deref())?;
            commands::cmd_forecast(&config, &journal, date, json).await
        }
        Commands::Score {
            mood,
            sleep,
            steps,
            heart_rate,
        } => commands::cmd_score(mood, sleep, steps, heart_rate),
        Commands::Trends { journal, date } => {
            let date = commands::resolve_date(date.as_deref())?;
            commands::cmd_trends(&config, &journal, date)
        }
        Commands::Mood { action } => match action {
            MoodAction::Add {
                journal,
                rating,
                notes,
            } => commands::cmd_mood_add(&journal, rating, notes, commands::now_local()),
        },
        Commands::Config => commands::cmd_config(&config),
    }
}
