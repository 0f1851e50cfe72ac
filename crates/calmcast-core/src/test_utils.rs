//! Test utilities for calmcast-core
//!
//! Fixture builders for mood histories, weekly points and journals, shared
//! by the unit tests here and the CLI tests (via the `test-utils` feature).

use chrono::{Duration, FixedOffset, NaiveDate, TimeZone};

use crate::journal::Journal;
use crate::models::{DailySummary, MoodHistory, WeeklyMoodPoint};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Build a history from `(days_before_today, rating)` pairs, in the given order.
/// Every entry is recorded at 09:00 UTC.
pub fn history_on_days(today: NaiveDate, entries: &[(i64, u8)]) -> MoodHistory {
    let utc = FixedOffset::east_opt(0).unwrap();
    let mut history = MoodHistory::new();

    for &(days_back, rating) in entries {
        let day = today - Duration::days(days_back);
        let timestamp = utc
            .from_local_datetime(&day.and_hms_opt(9, 0, 0).unwrap())
            .unwrap();
        history.record(rating, timestamp, None).unwrap();
    }

    history
}

/// Weekly points with placeholder labels
pub fn weekly(ratings: &[Option<u8>]) -> Vec<WeeklyMoodPoint> {
    ratings
        .iter()
        .enumerate()
        .map(|(i, rating)| WeeklyMoodPoint {
            date: WEEKDAYS[i % WEEKDAYS.len()].to_string(),
            rating: *rating,
        })
        .collect()
}

/// Weekly points with every day recorded
pub fn full_week(ratings: &[u8]) -> Vec<WeeklyMoodPoint> {
    let ratings: Vec<Option<u8>> = ratings.iter().copied().map(Some).collect();
    weekly(&ratings)
}

/// A journal with a week of ratings and a tracker summary for `today`
pub fn sample_journal(today: NaiveDate) -> Journal {
    let mut journal = Journal {
        name: Some("Test User".to_string()),
        mood_history: history_on_days(today, &[(6, 6), (4, 5), (2, 7), (1, 6), (0, 8)]),
        ..Default::default()
    };
    journal.biometrics.insert(
        today,
        DailySummary {
            steps: Some(8200),
            total_minutes_asleep: Some(465),
            resting_heart_rate: Some(68),
        },
    );
    journal
}
