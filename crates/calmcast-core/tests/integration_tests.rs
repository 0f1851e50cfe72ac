//! Integration tests for calmcast-core
//!
//! These tests exercise the full journal → biometrics → forecast → report workflow.

use calmcast_core::{
    biometrics::{BiometricSource, FallbackSource, SimulatedSource, SimulationPolicy},
    forecast::{generate_forecast, ForecastEngine, StressLevel},
    journal::Journal,
    models::{DailySummary, DataSource},
    mood::MoodInputs,
    presenter::ForecastView,
    Config,
};
use chrono::{DateTime, NaiveDate};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

/// A week where mood slides from good to poor, with a bad night on the last day
fn journal_json() -> &'static str {
    r#"{
  "name": "Robin",
  "mood_history": [
    { "rating": 8, "timestamp": "2026-10-12T08:30:00+02:00" },
    { "rating": 8, "timestamp": "2026-10-13T08:30:00+02:00", "notes": "good run" },
    { "rating": 7, "timestamp": "2026-10-14T21:10:00+02:00" },
    { "rating": 4, "timestamp": "2026-10-16T08:30:00+02:00" },
    { "rating": 3, "timestamp": "2026-10-17T08:30:00+02:00" },
    { "rating": 2, "timestamp": "2026-10-18T07:45:00+02:00", "notes": "deadline" }
  ],
  "biometrics": {
    "2026-10-18": { "steps": 2400, "total_minutes_asleep": 310, "resting_heart_rate": 84 }
  }
}"#
}

fn load_journal() -> (tempfile::TempDir, Journal) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("journal.json");
    std::fs::write(&path, journal_json()).expect("Failed to write journal");
    let journal = Journal::load(&path).expect("Failed to load journal");
    (dir, journal)
}

// =============================================================================
// Forecast Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_full_forecast_workflow() {
    let (_dir, journal) = load_journal();
    let config = Config::default();

    let source = FallbackSource::new(
        Box::new(journal.summary_source()),
        SimulatedSource::new(config.biometrics.simulation_seed),
        config.simulation_policy(),
    );
    let reading = source.fetch(today()).await.unwrap();
    assert_eq!(reading.source, DataSource::Device);
    // 310 minutes -> 5.2 hours
    assert_eq!(reading.snapshot.sleep_hours, 5.2);

    let engine = ForecastEngine::new(config.mood.window_days);
    let inputs = engine.mood_inputs(&journal.mood_history, today());

    // (8 + 8 + 7 + 4 + 3 + 2) / 6
    assert!((inputs.average_mood - 32.0 / 6.0).abs() < 1e-9);
    let ratings: Vec<Option<u8>> = inputs.weekly_mood.iter().map(|p| p.rating).collect();
    assert_eq!(
        ratings,
        vec![Some(8), Some(8), Some(7), None, Some(4), Some(3), Some(2)]
    );

    let forecast = generate_forecast(&reading.snapshot, &inputs);

    // 5 + 1.87 mood + 0.9 sleep + 1.04 activity + 0.9 heart = 9.71
    assert_eq!(forecast.stress_score, 10);
    assert_eq!(forecast.stress_level, StressLevel::High);
    assert_eq!(
        forecast.factors,
        vec![
            "Insufficient Sleep",
            "Low Physical Activity",
            "Elevated Resting Heart Rate"
        ]
    );
    assert!(forecast
        .weekly_insights
        .factors
        .contains(&"Declining Mood Trend".to_string()));
    assert!(forecast
        .weekly_insights
        .factors
        .contains(&"Mood Volatility".to_string()));

    let text = ForecastView::new(&forecast, &reading, inputs.average_mood)
        .with_name(journal.name.as_deref())
        .to_string();
    assert!(text.contains("Hello Robin"));
    assert!(text.contains("High (10/10)"));
}

#[tokio::test]
async fn test_missing_day_falls_back_to_simulation() {
    let (_dir, journal) = load_journal();
    let yesterday = today().pred_opt().unwrap();

    let allow = FallbackSource::new(
        Box::new(journal.summary_source()),
        SimulatedSource::new(7),
        SimulationPolicy::Allow,
    );
    let reading = allow.fetch(yesterday).await.unwrap();
    assert!(reading.is_simulated());

    let engine = ForecastEngine::default();
    let forecast = engine.forecast(&reading.snapshot, &journal.mood_history, yesterday);
    assert!((1..=10).contains(&forecast.stress_score));

    let text = ForecastView::new(&forecast, &reading, 5.0).to_string();
    assert!(text.contains("simulated"));

    let deny = FallbackSource::new(
        Box::new(journal.summary_source()),
        SimulatedSource::new(7),
        SimulationPolicy::Deny,
    );
    assert!(deny.fetch(yesterday).await.is_err());
}

#[test]
fn test_forecast_json_is_stable() {
    let (_dir, journal) = load_journal();
    let snapshot = DailySummary {
        steps: Some(9000),
        total_minutes_asleep: Some(480),
        resting_heart_rate: Some(66),
    }
    .to_snapshot();

    let inputs = MoodInputs::from_history(&journal.mood_history, 7, today());
    let a = serde_json::to_string(&generate_forecast(&snapshot, &inputs)).unwrap();
    let b = serde_json::to_string(&generate_forecast(&snapshot, &inputs)).unwrap();
    assert_eq!(a, b);

    let value: serde_json::Value = serde_json::from_str(&a).unwrap();
    assert!(value["weeklyInsights"]["patterns"].is_array());
    assert!(value["dailyInsights"]["factors"].is_array());
}

#[test]
fn test_add_mood_and_reload() {
    let (dir, mut journal) = load_journal();
    let path = dir.path().join("journal.json");

    let ts = DateTime::parse_from_rfc3339("2026-10-18T20:00:00+02:00").unwrap();
    journal.add_mood(5, ts, None).unwrap();
    journal.save(&path).unwrap();

    let reloaded = Journal::load(&path).unwrap();
    assert_eq!(reloaded.mood_history.len(), 7);

    // The first entry of the day still wins in the weekly view
    let inputs = MoodInputs::from_history(&reloaded.mood_history, 7, today());
    assert_eq!(inputs.weekly_mood[6].rating, Some(2));
}
