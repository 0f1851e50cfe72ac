//! Presentation adapter
//!
//! Turns a `Forecast` and the reading it was computed from into status cards
//! and a plain-text report. Nothing here feeds back into the engine.

use std::fmt;

use crate::forecast::Forecast;
use crate::models::BiometricReading;

/// How a metric card should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStatus {
    Good,
    Average,
    NeedsImprovement,
}

impl CardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Average => "average",
            Self::NeedsImprovement => "needs-improvement",
        }
    }

    fn marker(&self) -> &'static str {
        match self {
            Self::Good => "✅",
            Self::Average => "➖",
            Self::NeedsImprovement => "⚠️ ",
        }
    }
}

/// One metric card of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCard {
    pub title: &'static str,
    pub value: String,
    /// Short status label, e.g. "Slightly High"
    pub label: Option<&'static str>,
    pub status: CardStatus,
    pub description: String,
}

pub fn sleep_card(sleep_hours: f64) -> StatusCard {
    let (status, description) = if sleep_hours < 6.0 {
        (
            CardStatus::NeedsImprovement,
            "Consider improving sleep duration for better stress management",
        )
    } else if sleep_hours > 9.0 {
        (
            CardStatus::Average,
            "Good sleep duration, maintain consistency",
        )
    } else {
        (
            CardStatus::Good,
            "Excellent sleep duration for stress recovery",
        )
    };

    StatusCard {
        title: "Sleep Quality",
        value: format!("{} hrs/night", sleep_hours),
        label: None,
        status,
        description: description.to_string(),
    }
}

pub fn activity_card(steps: u32) -> StatusCard {
    let (status, description) = if steps < 3000 {
        (
            CardStatus::NeedsImprovement,
            "Low activity can contribute to stress buildup",
        )
    } else if steps < 7000 {
        (
            CardStatus::Average,
            "Moderate activity helps manage daily stress",
        )
    } else {
        (
            CardStatus::Good,
            "High activity level supports stress resilience",
        )
    };

    StatusCard {
        title: "Activity Level",
        value: format!("{} steps/day", group_thousands(steps)),
        label: None,
        status,
        description: description.to_string(),
    }
}

pub fn heart_card(heart_rate: u32) -> StatusCard {
    let (label, status, description) = if heart_rate > 80 {
        (
            "Elevated",
            CardStatus::NeedsImprovement,
            "Elevated heart rate may indicate stress",
        )
    } else if heart_rate > 75 {
        (
            "Slightly High",
            CardStatus::Average,
            "Monitor for stress-related changes",
        )
    } else {
        ("Normal", CardStatus::Good, "Healthy resting heart rate")
    };

    StatusCard {
        title: "Heart Health",
        value: format!("{} bpm", heart_rate),
        label: Some(label),
        status,
        description: description.to_string(),
    }
}

pub fn stress_card(forecast: &Forecast) -> StatusCard {
    let status = if forecast.stress_score >= 8 {
        CardStatus::NeedsImprovement
    } else if forecast.stress_score >= 5 {
        CardStatus::Average
    } else {
        CardStatus::Good
    };

    StatusCard {
        title: "Stress Level",
        value: format!("{}/10", forecast.stress_score),
        label: Some(forecast.stress_level.as_str()),
        status,
        description: forecast.stress_description.clone(),
    }
}

/// Colour tag for the weekly average mood
pub fn weekly_mood_color(average_mood: f64) -> &'static str {
    if average_mood < 4.0 {
        "mood-low"
    } else if average_mood < 7.0 {
        "mood-medium"
    } else {
        "mood-high"
    }
}

/// Everything a front end needs to show one forecast.
///
/// `Display` renders the plain-text report.
#[derive(Debug, Clone)]
pub struct ForecastView<'a> {
    pub forecast: &'a Forecast,
    pub reading: &'a BiometricReading,
    pub average_mood: f64,
    pub weekly_color: &'static str,
    pub cards: Vec<StatusCard>,
    /// Greeting name, if the user has one
    pub name: Option<&'a str>,
}

impl<'a> ForecastView<'a> {
    pub fn new(forecast: &'a Forecast, reading: &'a BiometricReading, average_mood: f64) -> Self {
        let snapshot = &reading.snapshot;
        Self {
            forecast,
            reading,
            average_mood,
            weekly_color: weekly_mood_color(average_mood),
            cards: vec![
                sleep_card(snapshot.sleep_hours),
                activity_card(snapshot.steps),
                heart_card(snapshot.heart_rate),
                stress_card(forecast),
            ],
            name: None,
        }
    }

    pub fn with_name(mut self, name: Option<&'a str>) -> Self {
        self.name = name;
        self
    }
}

impl fmt::Display for ForecastView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let forecast = self.forecast;

        writeln!(f)?;
        match self.name {
            Some(name) => writeln!(
                f,
                "🌤️  Hello {}, here's your stress forecast for {}",
                name, self.reading.date
            )?,
            None => writeln!(f, "🌤️  Stress forecast for {}", self.reading.date)?,
        }
        writeln!(
            f,
            "   ─────────────────────────────────────────────────────────────"
        )?;

        if self.reading.is_simulated() {
            writeln!(
                f,
                "   ⚠️  No tracker data for this day: biometrics below are simulated."
            )?;
            writeln!(f)?;
        }

        writeln!(
            f,
            "   📊 Today's Stress Level: {} ({}/10)",
            forecast.stress_level, forecast.stress_score
        )?;
        writeln!(f, "      {}", forecast.stress_description)?;
        writeln!(f)?;
        for tip in &forecast.daily_insights.tips {
            writeln!(f, "      • {}", tip)?;
        }
        writeln!(
            f,
            "      Primary Stress Factors: {}",
            forecast.daily_insights.factors.join(", ")
        )?;

        writeln!(f)?;
        writeln!(f, "   📈 Weekly Average Mood: {:.1}/10", self.average_mood)?;
        writeln!(f, "      {}", forecast.weekly_insights.insights.join(" "))?;
        for tip in &forecast.weekly_insights.tips {
            writeln!(f, "      • {}", tip)?;
        }
        writeln!(
            f,
            "      Common Stress Patterns: {}",
            forecast.weekly_insights.factors.join(", ")
        )?;

        writeln!(f)?;
        for card in &self.cards {
            match card.label {
                Some(label) => writeln!(
                    f,
                    "   {} {:<15} {} ({})",
                    card.status.marker(),
                    card.title,
                    card.value,
                    label
                )?,
                None => writeln!(
                    f,
                    "   {} {:<15} {}",
                    card.status.marker(),
                    card.title,
                    card.value
                )?,
            }
            writeln!(f, "      {}", card.description)?;
        }

        writeln!(f)?;
        writeln!(f, "   Stress factors: {}", forecast.factors.join(", "))
    }
}

/// 12345 -> "12,345"
fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
