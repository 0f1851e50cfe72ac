//! Stress score heuristic and level thresholds

use crate::models::BiometricSnapshot;

use super::types::{QuickPrediction, StressClassification, StressLevel};

const BASE_SCORE: f64 = 5.0;
const MIN_SCORE: f64 = 1.0;
const MAX_SCORE: f64 = 10.0;

const MOOD_WEIGHT: f64 = 0.4;
const SLEEP_TARGET_HOURS: f64 = 7.0;
const SLEEP_WEIGHT: f64 = 0.5;
const STEPS_TARGET: u32 = 5000;
const ACTIVITY_WEIGHT: f64 = 2.0;
const HEART_RATE_BASELINE: u32 = 75;
const HEART_RATE_WEIGHT: f64 = 0.1;

const QUICK_HIGH_HEART_RATE: u32 = 85;
const QUICK_SHORT_SLEEP_HOURS: f64 = 6.0;

const HIGH_THRESHOLD: u8 = 8;
const MODERATE_THRESHOLD: u8 = 5;

/// Blend mood and biometrics into a 1..=10 stress score.
///
/// Each term only ever adds stress: oversleeping, extra steps and a low heart
/// rate do not pull the score below the base.
pub fn compute_stress_score(biometrics: &BiometricSnapshot, average_mood: f64) -> u8 {
    let mood_term = (10.0 - average_mood) * MOOD_WEIGHT;

    let sleep_term = (SLEEP_TARGET_HOURS - biometrics.sleep_hours).max(0.0) * SLEEP_WEIGHT;

    let activity_term = if biometrics.steps < STEPS_TARGET {
        (STEPS_TARGET - biometrics.steps) as f64 / STEPS_TARGET as f64 * ACTIVITY_WEIGHT
    } else {
        0.0
    };

    let heart_term = if biometrics.heart_rate > HEART_RATE_BASELINE {
        (biometrics.heart_rate - HEART_RATE_BASELINE) as f64 * HEART_RATE_WEIGHT
    } else {
        0.0
    };

    let raw = BASE_SCORE + mood_term + sleep_term + activity_term + heart_term;
    raw.round().clamp(MIN_SCORE, MAX_SCORE) as u8
}

/// Map a score onto the fixed level table
pub fn classify_stress_level(score: u8) -> StressClassification {
    if score >= HIGH_THRESHOLD {
        StressClassification {
            level: StressLevel::High,
            description: "You may be experiencing significant stress. Consider taking proactive steps to manage it.",
            color_tag: "mood-low",
        }
    } else if score >= MODERATE_THRESHOLD {
        StressClassification {
            level: StressLevel::Moderate,
            description: "You're managing well, but there might be some underlying stress factors.",
            color_tag: "mood-medium",
        }
    } else {
        StressClassification {
            level: StressLevel::Low,
            description: "Great job maintaining low stress levels! Keep up your healthy habits.",
            color_tag: "mood-high",
        }
    }
}

/// Threshold-only estimate that ignores mood.
///
/// Any one of a racing heart, short sleep or few steps means High; a mildly
/// raised heart rate or slightly short sleep means Moderate.
pub fn quick_prediction(biometrics: &BiometricSnapshot) -> QuickPrediction {
    let high = biometrics.heart_rate > QUICK_HIGH_HEART_RATE
        || biometrics.sleep_hours < QUICK_SHORT_SLEEP_HOURS
        || biometrics.steps < STEPS_TARGET;
    let moderate = biometrics.heart_rate > HEART_RATE_BASELINE
        || biometrics.sleep_hours < SLEEP_TARGET_HOURS;

    let (level, confidence) = if high {
        (StressLevel::High, 0.8)
    } else if moderate {
        (StressLevel::Moderate, 0.75)
    } else {
        (StressLevel::Low, 0.7)
    };

    QuickPrediction { level, confidence }
}
