//! Configuration command implementations

use std::path::Path;

use anyhow::{Context, Result};
use calmcast_core::config::default_config_path;
use calmcast_core::Config;

/// Resolve config from --config, the data dir override, or built-in defaults
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    Config::load(path).context("Failed to load configuration")
}

pub fn cmd_config(config: &Config) -> Result<()> {
    println!();
    println!("⚙️  CalmCast Configuration");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Source: {}", config.source);
    println!(
        "   Override path: {}",
        default_config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not available)".to_string())
    );
    println!();
    println!("   Mood window: last {} entries", config.mood.window_days);
    if config.biometrics.allow_simulated {
        println!(
            "   Simulated biometrics: ALLOWED (seed {})",
            config.biometrics.simulation_seed
        );
    } else {
        println!("   Simulated biometrics: DISABLED");
    }
    println!();

    Ok(())
}
