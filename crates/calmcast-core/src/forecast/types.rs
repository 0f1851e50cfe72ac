//! Core types for the Forecast Engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical stress level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StressLevel {
    Low,
    Moderate,
    High,
}

impl StressLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StressLevel::Low => "Low",
            StressLevel::Moderate => "Moderate",
            StressLevel::High => "High",
        }
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of the stress level threshold table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StressClassification {
    pub level: StressLevel,
    pub description: &'static str,
    /// Display tag for the level ("mood-low" means a bad mood, i.e. high stress)
    pub color_tag: &'static str,
}

/// Rule-of-thumb level from the biometric snapshot alone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuickPrediction {
    pub level: StressLevel,
    /// Fixed confidence attached to the rule that fired
    pub confidence: f64,
}

/// Direction of mood over the trailing week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodTrend {
    Improving,
    Declining,
    Stable,
}

impl MoodTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodTrend::Improving => "improving",
            MoodTrend::Declining => "declining",
            MoodTrend::Stable => "stable",
        }
    }
}

impl fmt::Display for MoodTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Trend and volatility of a week's recorded ratings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub trend: MoodTrend,
    /// Population standard deviation of the recorded ratings
    pub volatility: f64,
}

impl TrendAnalysis {
    /// Result used when there are too few ratings to compare
    pub fn insufficient() -> Self {
        Self {
            trend: MoodTrend::Stable,
            volatility: 0.0,
        }
    }
}

/// Narrative output of one insight pass.
///
/// For weekly insights `factors` holds the recurring patterns and is
/// serialized as `patterns`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightSet {
    pub insights: Vec<String>,
    pub tips: Vec<String>,
    #[serde(alias = "patterns")]
    pub factors: Vec<String>,
}

impl InsightSet {
    /// Append one insight/tip pair and an optional factor
    pub(crate) fn push(&mut self, insight: &str, tip: &str, factor: Option<&str>) {
        self.insights.push(insight.to_string());
        self.tips.push(tip.to_string());
        if let Some(factor) = factor {
            self.factors.push(factor.to_string());
        }
    }
}

/// Complete engine output for one forecast request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    pub stress_score: u8,
    pub stress_level: StressLevel,
    pub stress_description: String,
    pub stress_color: String,
    pub daily_insights: InsightSet,
    #[serde(serialize_with = "serialize_weekly")]
    pub weekly_insights: InsightSet,
    pub factors: Vec<String>,
}

fn serialize_weekly<S>(set: &InsightSet, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    #[derive(Serialize)]
    struct Weekly<'a> {
        insights: &'a [String],
        tips: &'a [String],
        patterns: &'a [String],
    }

    Weekly {
        insights: &set.insights,
        tips: &set.tips,
        patterns: &set.factors,
    }
    .serialize(serializer)
}
