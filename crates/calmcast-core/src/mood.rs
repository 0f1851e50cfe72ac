//! Mood window helpers
//!
//! Derive the two mood inputs the forecast engine needs from a user's
//! ordered history: the trailing average and the calendar week. Also
//! compares the latest week of entries with the one before it.

use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{MoodEntry, MoodHistory, WeeklyMoodPoint};

/// Average used when there is no mood history to draw on
pub const NEUTRAL_MOOD: f64 = 5.0;

/// Default number of entries in the trailing average
pub const DEFAULT_WINDOW_DAYS: usize = 7;

/// Days in the trailing calendar week
pub const WEEK_LEN: usize = 7;

/// Mean rating of the last `window_days` entries, or 5 when there are none
pub fn average_mood(history: &MoodHistory, window_days: usize) -> f64 {
    let recent = history.last_n(window_days);
    if recent.is_empty() {
        return NEUTRAL_MOOD;
    }

    let sum: u32 = recent.iter().map(|e| e.rating as u32).sum();
    sum as f64 / recent.len() as f64
}

/// One point per calendar day from `today - 6` through `today`.
///
/// A day takes the rating of the first entry recorded on it.
pub fn weekly_mood_data(history: &MoodHistory, today: NaiveDate) -> Vec<WeeklyMoodPoint> {
    (0..WEEK_LEN as i64)
        .rev()
        .map(|days_back| {
            let day = today - Duration::days(days_back);
            let rating = history
                .entries()
                .iter()
                .find(|e| e.local_date() == day)
                .map(|e| e.rating);

            WeeklyMoodPoint {
                date: day.format("%a").to_string(),
                rating,
            }
        })
        .collect()
}

/// Latest week of entries measured against the previous week
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeekComparison {
    /// Fewer than two entries overall
    NotEnoughData,
    /// Nothing before the latest week
    FirstWeek,
    GreatImprovement(f64),
    SlightImprovement(f64),
    Stable(f64),
    SlightDecrease(f64),
    Decrease(f64),
}

impl WeekComparison {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotEnoughData => "Keep tracking to see trends!",
            Self::FirstWeek => "This is your first week tracking!",
            Self::GreatImprovement(_) => "Great improvement from last week! 📈",
            Self::SlightImprovement(_) => "Slight improvement from last week. ↗️",
            Self::Stable(_) => "Stable compared to last week. →",
            Self::SlightDecrease(_) => "Slight decrease from last week. ↘️",
            Self::Decrease(_) => "Your mood has decreased recently. 📉",
        }
    }

    /// Latest week's mean minus the previous week's, when both exist
    pub fn difference(&self) -> Option<f64> {
        match *self {
            Self::NotEnoughData | Self::FirstWeek => None,
            Self::GreatImprovement(d)
            | Self::SlightImprovement(d)
            | Self::Stable(d)
            | Self::SlightDecrease(d)
            | Self::Decrease(d) => Some(d),
        }
    }
}

impl fmt::Display for WeekComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Compare the mean of the last `WEEK_LEN` entries with the `WEEK_LEN` before them.
///
/// Works on entries, not calendar days.
pub fn compare_weeks(history: &MoodHistory) -> WeekComparison {
    let entries = history.entries();
    if entries.len() < 2 {
        return WeekComparison::NotEnoughData;
    }

    let recent_start = entries.len().saturating_sub(WEEK_LEN);
    let previous_start = recent_start.saturating_sub(WEEK_LEN);
    let recent = &entries[recent_start..];
    let previous = &entries[previous_start..recent_start];

    if previous.is_empty() {
        return WeekComparison::FirstWeek;
    }

    let difference = mean_rating(recent) - mean_rating(previous);

    if difference > 1.0 {
        WeekComparison::GreatImprovement(difference)
    } else if difference > 0.2 {
        WeekComparison::SlightImprovement(difference)
    } else if difference < -1.0 {
        WeekComparison::Decrease(difference)
    } else if difference < -0.2 {
        WeekComparison::SlightDecrease(difference)
    } else {
        WeekComparison::Stable(difference)
    }
}

fn mean_rating(entries: &[MoodEntry]) -> f64 {
    let sum: u32 = entries.iter().map(|e| e.rating as u32).sum();
    sum as f64 / entries.len() as f64
}

/// Mood inputs for a single forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodInputs {
    pub average_mood: f64,
    pub weekly_mood: Vec<WeeklyMoodPoint>,
}

impl MoodInputs {
    /// Inputs from an external source. `weekly_mood` may hold any number of
    /// points; the engine only reads the recorded ratings.
    pub fn new(average_mood: f64, weekly_mood: Vec<WeeklyMoodPoint>) -> Self {
        Self {
            average_mood,
            weekly_mood,
        }
    }

    pub fn from_history(history: &MoodHistory, window_days: usize, today: NaiveDate) -> Self {
        Self {
            average_mood: average_mood(history, window_days),
            weekly_mood: weekly_mood_data(history, today),
        }
    }
}
