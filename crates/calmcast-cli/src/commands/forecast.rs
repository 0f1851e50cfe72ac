//! Forecast command implementations (forecast, score, trends)

use std::path::Path;

use anyhow::{Context, Result};
use calmcast_core::biometrics::{BiometricSource, FallbackSource, SimulatedSource};
use calmcast_core::forecast::{
    analyze_mood_trends, classify_stress_level, compute_stress_score, quick_prediction, Forecast,
    ForecastEngine,
};
use calmcast_core::models::{BiometricReading, BiometricSnapshot};
use calmcast_core::mood::{compare_weeks, MoodInputs};
use calmcast_core::presenter::ForecastView;
use calmcast_core::{Config, Journal};
use chrono::NaiveDate;

/// Everything produced by one forecast run
pub struct ForecastRun {
    pub journal: Journal,
    pub reading: BiometricReading,
    pub inputs: MoodInputs,
    pub forecast: Forecast,
}

/// Load the journal, fetch the day's biometrics and run the engine
pub async fn run_forecast(
    config: &Config,
    journal_path: &Path,
    date: NaiveDate,
) -> Result<ForecastRun> {
    let journal = Journal::load(journal_path)
        .with_context(|| format!("Failed to load journal {}", journal_path.display()))?;

    let source = FallbackSource::new(
        Box::new(journal.summary_source()),
        SimulatedSource::new(config.biometrics.simulation_seed),
        config.simulation_policy(),
    );
    let reading = source
        .fetch(date)
        .await
        .with_context(|| format!("No biometric data for {}", date))?;

    let engine = ForecastEngine::new(config.mood.window_days);
    let inputs = engine.mood_inputs(&journal.mood_history, date);
    let forecast = calmcast_core::generate_forecast(&reading.snapshot, &inputs);

    Ok(ForecastRun {
        journal,
        reading,
        inputs,
        forecast,
    })
}

pub async fn cmd_forecast(
    config: &Config,
    journal_path: &Path,
    date: NaiveDate,
    json: bool,
) -> Result<()> {
    let run = run_forecast(config, journal_path, date).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&run.forecast)?);
        return Ok(());
    }

    let view = ForecastView::new(&run.forecast, &run.reading, run.inputs.average_mood)
        .with_name(run.journal.name.as_deref());
    print!("{}", view);

    if run.journal.mood_history.is_empty() {
        println!();
        println!("   💡 Tip: Record your mood with 'calmcast mood add --rating N'");
    }

    Ok(())
}

pub fn cmd_score(mood: f64, sleep: f64, steps: u32, heart_rate: u32) -> Result<()> {
    if !(1.0..=10.0).contains(&mood) {
        anyhow::bail!("--mood must be between 1 and 10, got {}", mood);
    }
    if sleep < 0.0 {
        anyhow::bail!("--sleep must not be negative, got {}", sleep);
    }

    let snapshot = BiometricSnapshot::new(steps, sleep, heart_rate);
    let score = compute_stress_score(&snapshot, mood);
    let classification = classify_stress_level(score);

    let quick = quick_prediction(&snapshot);

    println!("Stress score: {}/10 ({})", score, classification.level);
    println!("{}", classification.description);
    println!(
        "Quick estimate from biometrics alone: {} ({:.0}% confidence)",
        quick.level,
        quick.confidence * 100.0
    );

    Ok(())
}

pub fn cmd_trends(config: &Config, journal_path: &Path, date: NaiveDate) -> Result<()> {
    let journal = Journal::load(journal_path)
        .with_context(|| format!("Failed to load journal {}", journal_path.display()))?;

    let engine = ForecastEngine::new(config.mood.window_days);
    let inputs = engine.mood_inputs(&journal.mood_history, date);
    let trends = analyze_mood_trends(&inputs.weekly_mood);
    let comparison = compare_weeks(&journal.mood_history);

    println!();
    println!("📈 Mood Week ending {}", date);
    println!("   ─────────────────────────────");

    for point in &inputs.weekly_mood {
        match point.rating {
            Some(rating) => println!(
                "   {}  {:>2}  {}",
                point.date,
                rating,
                "█".repeat(rating as usize)
            ),
            None => println!("   {}   -", point.date),
        }
    }

    println!();
    println!(
        "   Average mood (last {} entries): {:.1}/10",
        config.mood.window_days, inputs.average_mood
    );
    println!("   Trend: {}", trends.trend);
    println!("   Volatility: {:.2}", trends.volatility);
    match comparison.difference() {
        Some(diff) => println!("   Week over week: {} ({:+.1})", comparison, diff),
        None => println!("   Week over week: {}", comparison),
    }
    println!();

    Ok(())
}
