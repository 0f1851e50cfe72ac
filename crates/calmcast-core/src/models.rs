//! Domain models for CalmCast

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Lowest accepted mood rating
pub const MIN_RATING: u8 = 1;
/// Highest accepted mood rating
pub const MAX_RATING: u8 = 10;

/// Sleep assumed when the tracker reports nothing for the night
pub const DEFAULT_SLEEP_HOURS: f64 = 7.5;
/// Resting heart rate assumed when the tracker reports nothing
pub const DEFAULT_HEART_RATE: u32 = 72;

/// A single self-reported mood rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Rating from 1 (worst) to 10 (best)
    pub rating: u8,
    /// When the rating was recorded, in the user's local offset
    pub timestamp: DateTime<FixedOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MoodEntry {
    /// Calendar day the entry was recorded on, in the offset it was recorded with
    pub fn local_date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// A user's mood entries in recording order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoodHistory {
    entries: Vec<MoodEntry>,
}

impl MoodHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a new entry
    pub fn record(
        &mut self,
        rating: u8,
        timestamp: DateTime<FixedOffset>,
        notes: Option<String>,
    ) -> Result<&MoodEntry> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(Error::InvalidData(format!(
                "Mood rating must be between {} and {}, got {}",
                MIN_RATING, MAX_RATING, rating
            )));
        }

        self.entries.push(MoodEntry {
            rating,
            timestamp,
            notes,
        });

        // Non-empty after the push
        Ok(&self.entries[self.entries.len() - 1])
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent `n` entries, oldest first
    pub fn last_n(&self, n: usize) -> &[MoodEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }
}

/// One day of biometric data as consumed by the forecast engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiometricSnapshot {
    pub steps: u32,
    pub sleep_hours: f64,
    /// Resting heart rate in bpm
    pub heart_rate: u32,
}

impl BiometricSnapshot {
    pub fn new(steps: u32, sleep_hours: f64, heart_rate: u32) -> Self {
        Self {
            steps,
            sleep_hours,
            heart_rate,
        }
    }
}

/// Cleaned per-day tracker payload. Any field may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_minutes_asleep: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resting_heart_rate: Option<u32>,
}

impl DailySummary {
    /// Fill missing fields with neutral defaults so the engine never sees gaps
    pub fn to_snapshot(&self) -> BiometricSnapshot {
        let sleep_hours = match self.total_minutes_asleep {
            Some(minutes) if minutes > 0 => round_tenth(minutes as f64 / 60.0),
            _ => DEFAULT_SLEEP_HOURS,
        };

        let heart_rate = match self.resting_heart_rate {
            Some(bpm) if bpm > 0 => bpm,
            _ => DEFAULT_HEART_RATE,
        };

        BiometricSnapshot {
            steps: self.steps.unwrap_or(0),
            sleep_hours,
            heart_rate,
        }
    }
}

/// Where a biometric reading came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Synced from a fitness tracker
    Device,
    /// Generated because no tracker data was available
    Simulated,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Device => "device",
            Self::Simulated => "simulated",
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A snapshot together with its provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiometricReading {
    pub date: NaiveDate,
    pub snapshot: BiometricSnapshot,
    pub calories_burned: u32,
    pub source: DataSource,
}

impl BiometricReading {
    /// Build a device reading from a tracker summary
    pub fn from_summary(date: NaiveDate, summary: &DailySummary) -> Self {
        let snapshot = summary.to_snapshot();
        Self {
            date,
            snapshot,
            calories_burned: (snapshot.steps as f64 * 0.04).floor() as u32,
            source: DataSource::Device,
        }
    }

    pub fn is_simulated(&self) -> bool {
        self.source == DataSource::Simulated
    }
}

/// One day of the trailing mood week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyMoodPoint {
    /// Short weekday label, e.g. "Mon"
    pub date: String,
    /// None when nothing was recorded that day
    pub rating: Option<u8>,
}

pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_record_rejects_out_of_range() {
        let mut history = MoodHistory::new();
        let at = ts("2026-10-01T09:00:00Z");
        assert!(history.record(0, at, None).is_err());
        assert!(history.record(11, at, None).is_err());
        assert!(history.is_empty());

        let entry = history.record(7, at, Some("ok".into())).unwrap();
        assert_eq!(entry.rating, 7);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_last_n() {
        let mut history = MoodHistory::new();
        for rating in 1..=5 {
            history
                .record(rating, ts("2026-10-01T09:00:00Z"), None)
                .unwrap();
        }
        let ratings: Vec<u8> = history.last_n(3).iter().map(|e| e.rating).collect();
        assert_eq!(ratings, vec![3, 4, 5]);
        assert_eq!(history.last_n(10).len(), 5);
        assert!(history.last_n(0).is_empty());
    }

    #[test]
    fn test_local_date_uses_recorded_offset() {
        let entry = MoodEntry {
            rating: 5,
            timestamp: ts("2026-10-01T23:30:00-07:00"),
            notes: None,
        };
        assert_eq!(
            entry.local_date(),
            NaiveDate::from_ymd_opt(2026, 10, 1).unwrap()
        );
    }

    #[test]
    fn test_summary_defaults() {
        let snapshot = DailySummary::default().to_snapshot();
        assert_eq!(snapshot.steps, 0);
        assert_eq!(snapshot.sleep_hours, DEFAULT_SLEEP_HOURS);
        assert_eq!(snapshot.heart_rate, DEFAULT_HEART_RATE);

        let zeroed = DailySummary {
            steps: Some(0),
            total_minutes_asleep: Some(0),
            resting_heart_rate: Some(0),
        };
        assert_eq!(zeroed.to_snapshot().sleep_hours, DEFAULT_SLEEP_HOURS);
        assert_eq!(zeroed.to_snapshot().heart_rate, DEFAULT_HEART_RATE);
    }

    #[test]
    fn test_summary_sleep_rounding() {
        let summary = DailySummary {
            steps: Some(6521),
            total_minutes_asleep: Some(412),
            resting_heart_rate: Some(61),
        };
        let snapshot = summary.to_snapshot();
        assert_eq!(snapshot.steps, 6521);
        assert_eq!(snapshot.sleep_hours, 6.9);
        assert_eq!(snapshot.heart_rate, 61);
    }

    #[test]
    fn test_reading_from_summary() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        let reading = BiometricReading::from_summary(
            date,
            &DailySummary {
                steps: Some(5000),
                ..Default::default()
            },
        );
        assert_eq!(reading.calories_burned, 200);
        assert_eq!(reading.source, DataSource::Device);
        assert!(!reading.is_simulated());
    }

    #[test]
    fn test_mood_entry_json_shape() {
        let json = r#"{"rating":6,"timestamp":"2026-10-12T09:00:00+02:00"}"#;
        let entry: MoodEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.rating, 6);
        assert!(entry.notes.is_none());
        assert!(!serde_json::to_string(&entry).unwrap().contains("notes"));
    }
}
