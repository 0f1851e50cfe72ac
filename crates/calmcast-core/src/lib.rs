//! CalmCast Core Library
//!
//! Shared functionality for the CalmCast mood tracker:
//! - Forecast engine turning mood history and biometrics into a stress forecast
//! - Mood window helpers (trailing average, calendar week)
//! - Pluggable biometric sources with a simulated fallback
//! - Presentation adapter for status cards and text reports
//! - Journal file format and configuration

pub mod biometrics;
pub mod config;
pub mod error;
pub mod forecast;
pub mod journal;
pub mod models;
pub mod mood;
pub mod presenter;

/// Test utilities including history and journal fixtures
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use biometrics::{
    BiometricSource, FallbackSource, SimulatedSource, SimulationPolicy, SummarySource,
};
pub use config::Config;
pub use error::{Error, Result};
pub use forecast::{
    generate_forecast, quick_prediction, Forecast, ForecastEngine, InsightSet, MoodTrend,
    QuickPrediction, StressClassification, StressLevel, TrendAnalysis,
};
pub use journal::Journal;
pub use models::{
    BiometricReading, BiometricSnapshot, DailySummary, DataSource, MoodEntry, MoodHistory,
    WeeklyMoodPoint,
};
pub use mood::{MoodInputs, WeekComparison};
pub use presenter::ForecastView;
