//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// CalmCast - Mood tracking and stress forecast
#[derive(Parser)]
#[command(name = "calmcast")]
#[command(about = "Daily stress forecast from mood ratings and tracker data", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ~/.local/share/calmcast/config.toml, then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a stress forecast for a day
    Forecast {
        /// Journal file with mood history and tracker summaries
        #[arg(short, long, default_value = "calmcast.json")]
        journal: PathBuf,

        /// Day to forecast (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Print the forecast as JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Compute a stress score from raw values
    Score {
        /// Average mood (1-10)
        #[arg(long, default_value = "5")]
        mood: f64,

        /// Hours slept
        #[arg(long)]
        sleep: f64,

        /// Step count
        #[arg(long)]
        steps: u32,

        /// Resting heart rate (bpm)
        #[arg(long)]
        heart_rate: u32,
    },

    /// Show the trailing mood week, trend and volatility
    Trends {
        /// Journal file with mood history
        #[arg(short, long, default_value = "calmcast.json")]
        journal: PathBuf,

        /// Last day of the week (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Record mood ratings
    Mood {
        #[command(subcommand)]
        action: MoodAction,
    },

    /// Show the active configuration
    Config,
}

#[derive(Subcommand)]
pub enum MoodAction {
    /// Add a mood rating (creates the journal if needed)
    Add {
        /// Journal file to append to
        #[arg(short, long, default_value = "calmcast.json")]
        journal: PathBuf,

        /// Rating from 1 (worst) to 10 (best)
        #[arg(short, long)]
        rating: u8,

        /// Optional notes
        #[arg(short, long)]
        notes: Option<String>,
    },
}
