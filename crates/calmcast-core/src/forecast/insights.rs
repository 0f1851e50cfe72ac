//! Rule-based daily and weekly insights
//!
//! Each rule is checked independently, in a fixed order, and appends at most
//! one insight/tip pair. Fallback text fills any list that stayed empty.

use crate::models::{BiometricSnapshot, WeeklyMoodPoint};

use super::trends::{analyze_mood_trends, weekly_mean};
use super::types::{InsightSet, MoodTrend};

const SHORT_SLEEP_HOURS: f64 = 6.0;
const GOOD_SLEEP_HOURS: f64 = 8.0;
const LONG_SLEEP_HOURS: f64 = 9.0;
const LOW_STEPS: u32 = 3000;
const HIGH_STEPS: u32 = 10000;
const WEEKLY_LOW_STEPS: u32 = 4000;
const ELEVATED_HEART_RATE: u32 = 80;
const LOW_MOOD: f64 = 4.0;
const HIGH_MOOD: f64 = 7.0;
const VOLATILE_MOOD: f64 = 2.0;

/// Insights for today's snapshot and the trailing average mood
pub fn derive_daily_insights(biometrics: &BiometricSnapshot, average_mood: f64) -> InsightSet {
    let mut set = InsightSet::default();

    if biometrics.sleep_hours < SHORT_SLEEP_HOURS {
        set.push(
            "You had less than 6 hours of sleep last night.",
            "Aim for 7-9 hours of quality sleep tonight",
            Some("Sleep Deprivation"),
        );
    } else if biometrics.sleep_hours >= GOOD_SLEEP_HOURS {
        set.push(
            "Great job getting enough sleep!",
            "Maintain your consistent sleep schedule",
            None,
        );
    }

    if biometrics.steps < LOW_STEPS {
        set.push(
            "Low activity level detected.",
            "Try to incorporate a 15-minute walk today",
            Some("Sedentary Lifestyle"),
        );
    } else if biometrics.steps > HIGH_STEPS {
        set.push(
            "Excellent activity level!",
            "Your active lifestyle is helping manage stress",
            None,
        );
    }

    if biometrics.heart_rate > ELEVATED_HEART_RATE {
        set.push(
            "Elevated resting heart rate observed.",
            "Practice deep breathing exercises for 5 minutes",
            Some("Elevated Heart Rate"),
        );
    }

    if average_mood < LOW_MOOD {
        set.push(
            "Your recent mood ratings have been low.",
            "Consider talking to a friend or trying mindfulness",
            Some("Low Mood"),
        );
    } else if average_mood > HIGH_MOOD {
        set.push(
            "Your mood has been consistently positive!",
            "Keep doing what makes you happy",
            None,
        );
    }

    if set.tips.is_empty() {
        set.tips = vec![
            "Maintain your current healthy habits".to_string(),
            "Stay hydrated throughout the day".to_string(),
            "Take short breaks during work".to_string(),
        ];
    }
    if set.insights.is_empty() {
        set.insights = vec!["Your daily metrics look balanced overall.".to_string()];
    }
    if set.factors.is_empty() {
        set.factors = vec!["No major stress factors identified".to_string()];
    }

    set
}

/// Insights for the trailing week. `factors` holds the weekly patterns.
pub fn derive_weekly_insights(
    weekly_mood: &[WeeklyMoodPoint],
    biometrics: &BiometricSnapshot,
) -> InsightSet {
    let trends = analyze_mood_trends(weekly_mood);
    let mut set = InsightSet::default();

    if trends.volatility > VOLATILE_MOOD {
        set.push(
            "Your mood has been fluctuating significantly this week.",
            "Try establishing a more consistent daily routine",
            Some("Mood Volatility"),
        );
    }

    match trends.trend {
        MoodTrend::Declining => set.push(
            "Your mood shows a declining trend this week.",
            "Identify and address potential stress sources",
            Some("Declining Mood Trend"),
        ),
        MoodTrend::Improving => set.push(
            "Your mood is improving - great progress!",
            "Continue with your current stress management strategies",
            None,
        ),
        MoodTrend::Stable => {}
    }

    if biometrics.steps < WEEKLY_LOW_STEPS {
        set.push(
            "Consider increasing your daily activity for better stress management.",
            "Aim for at least 30 minutes of moderate activity daily",
            Some("Low Activity Pattern"),
        );
    }

    if set.insights.is_empty() {
        set.push(
            "Your weekly patterns show good stability.",
            "Continue monitoring your metrics for early stress detection",
            Some("Stable Patterns"),
        );
    }
    if set.factors.is_empty() {
        set.factors = vec!["Consistent Weekly Patterns".to_string()];
    }

    set
}

/// Coarse summary of what is driving stress, independent of the insight sets
pub fn identify_stress_factors(
    biometrics: &BiometricSnapshot,
    weekly_mood: &[WeeklyMoodPoint],
) -> Vec<String> {
    let mut factors = Vec::new();

    if biometrics.sleep_hours < SHORT_SLEEP_HOURS {
        factors.push("Insufficient Sleep");
    } else if biometrics.sleep_hours > LONG_SLEEP_HOURS {
        factors.push("Oversleeping");
    }

    if biometrics.steps < LOW_STEPS {
        factors.push("Low Physical Activity");
    }

    if biometrics.heart_rate > ELEVATED_HEART_RATE {
        factors.push("Elevated Resting Heart Rate");
    }

    if weekly_mean(weekly_mood).is_some_and(|avg| avg < LOW_MOOD) {
        factors.push("Low Mood Levels");
    }

    if factors.is_empty() {
        factors.push("No specific stress factors identified");
    }

    factors.into_iter().map(String::from).collect()
}
