//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `config` - Show the resolved configuration
//! - `forecast` - Forecast, score and trend commands
//! - `mood` - Mood recording commands

pub mod config;
pub mod forecast;
pub mod mood;

// Re-export command functions for main.rs
pub use config::*;
pub use forecast::*;
pub use mood::*;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Local, NaiveDate};

/// Parse `--date`, defaulting to today in local time
pub fn resolve_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .context("Invalid --date format (use YYYY-MM-DD)"),
        None => Ok(Local::now().date_naive()),
    }
}

/// Current time with the local UTC offset attached
pub fn now_local() -> DateTime<FixedOffset> {
    let now = Local::now();
    now.with_timezone(now.offset())
}
