//! Forecast Engine - stress score and insights from mood and biometrics
//!
//! Pure, stateless functions. Given one day's biometric snapshot and the
//! user's mood inputs, the engine produces a `Forecast`:
//!
//! - **Stress score** - base 5 plus weighted mood, sleep, activity and heart
//!   rate deviations, rounded and clamped to 1..=10
//! - **Stress level** - High (>= 8), Moderate (>= 5) or Low
//! - **Daily insights** - rule checks over today's snapshot and average mood
//! - **Weekly insights** - mood trend and volatility over the trailing week
//! - **Stress factors** - a coarser summary of what is driving the score
//!
//! `quick_prediction` is a separate threshold-only estimate from biometrics.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use calmcast_core::forecast::ForecastEngine;
//!
//! let engine = ForecastEngine::new(config.mood.window_days);
//! let forecast = engine.forecast(&reading.snapshot, &history, today);
//! ```

pub mod engine;
pub mod insights;
pub mod score;
pub mod trends;
pub mod types;

pub use engine::{generate_forecast, ForecastEngine};
pub use insights::{derive_daily_insights, derive_weekly_insights, identify_stress_factors};
pub use score::{classify_stress_level, compute_stress_score, quick_prediction};
pub use trends::analyze_mood_trends;
pub use types::{
    Forecast, InsightSet, MoodTrend, QuickPrediction, StressClassification, StressLevel,
    TrendAnalysis,
};
