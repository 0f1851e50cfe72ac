//! Mood trend and volatility over the trailing week

use crate::models::WeeklyMoodPoint;

use super::types::{MoodTrend, TrendAnalysis};

/// Difference between half-week means that counts as a real change
const TREND_BAND: f64 = 0.5;

/// Compare the first and second half of the week's recorded ratings.
///
/// Days without a rating are skipped. With fewer than two ratings the week
/// is reported as stable with zero volatility.
pub fn analyze_mood_trends(weekly_mood: &[WeeklyMoodPoint]) -> TrendAnalysis {
    let ratings: Vec<f64> = weekly_mood
        .iter()
        .filter_map(|p| p.rating)
        .map(f64::from)
        .collect();

    if ratings.len() < 2 {
        return TrendAnalysis::insufficient();
    }

    let (first_half, second_half) = ratings.split_at(ratings.len() / 2);
    let avg_first = mean(first_half);
    let avg_second = mean(second_half);

    let trend = if avg_second > avg_first + TREND_BAND {
        MoodTrend::Improving
    } else if avg_second < avg_first - TREND_BAND {
        MoodTrend::Declining
    } else {
        MoodTrend::Stable
    };

    let overall = mean(&ratings);
    let variance =
        ratings.iter().map(|r| (r - overall).powi(2)).sum::<f64>() / ratings.len() as f64;

    TrendAnalysis {
        trend,
        volatility: variance.sqrt(),
    }
}

/// Mean of the recorded ratings, None when the week is empty
pub(crate) fn weekly_mean(weekly_mood: &[WeeklyMoodPoint]) -> Option<f64> {
    let ratings: Vec<f64> = weekly_mood
        .iter()
        .filter_map(|p| p.rating)
        .map(f64::from)
        .collect();

    if ratings.is_empty() {
        None
    } else {
        Some(mean(&ratings))
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
