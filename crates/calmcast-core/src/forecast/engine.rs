//! Forecast Engine - assembles a Forecast from the scoring and insight rules

use chrono::NaiveDate;

use crate::models::{BiometricSnapshot, MoodHistory};
use crate::mood::{MoodInputs, DEFAULT_WINDOW_DAYS};

use super::insights::{derive_daily_insights, derive_weekly_insights, identify_stress_factors};
use super::score::{classify_stress_level, compute_stress_score};
use super::types::Forecast;

/// Produce a complete forecast for one day.
///
/// Pure: the same snapshot and mood inputs always yield the same forecast.
pub fn generate_forecast(biometrics: &BiometricSnapshot, user: &MoodInputs) -> Forecast {
    let stress_score = compute_stress_score(biometrics, user.average_mood);
    let classification = classify_stress_level(stress_score);

    let forecast = Forecast {
        stress_score,
        stress_level: classification.level,
        stress_description: classification.description.to_string(),
        stress_color: classification.color_tag.to_string(),
        daily_insights: derive_daily_insights(biometrics, user.average_mood),
        weekly_insights: derive_weekly_insights(&user.weekly_mood, biometrics),
        factors: identify_stress_factors(biometrics, &user.weekly_mood),
    };

    tracing::debug!(
        score = forecast.stress_score,
        level = forecast.stress_level.as_str(),
        factors = forecast.factors.len(),
        "Forecast generated"
    );

    forecast
}

/// Forecast entry point that derives mood inputs from a raw history
#[derive(Debug, Clone, Copy)]
pub struct ForecastEngine {
    /// Number of most recent entries in the average mood
    window_days: usize,
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_DAYS)
    }
}

impl ForecastEngine {
    pub fn new(window_days: usize) -> Self {
        Self { window_days }
    }

    /// Mood inputs for `history` as of `today`
    pub fn mood_inputs(&self, history: &MoodHistory, today: NaiveDate) -> MoodInputs {
        MoodInputs::from_history(history, self.window_days, today)
    }

    /// Forecast for `today` from a snapshot and the user's full history
    pub fn forecast(
        &self,
        biometrics: &BiometricSnapshot,
        history: &MoodHistory,
        today: NaiveDate,
    ) -> Forecast {
        generate_forecast(biometrics, &self.mood_inputs(history, today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::types::StressLevel;
    use crate::test_utils::{date, full_week, history_on_days};

    #[test]
    fn test_generate_forecast_assembles_parts() {
        let snapshot = BiometricSnapshot::new(1000, 4.0, 90);
        let inputs = MoodInputs::new(2.0, full_week(&[3, 3, 2, 2, 2, 1, 2]));
        let forecast = generate_forecast(&snapshot, &inputs);

        assert_eq!(forecast.stress_score, 10);
        assert_eq!(forecast.stress_level, StressLevel::High);
        assert_eq!(forecast.stress_color, "mood-low");
        assert!(forecast
            .daily_insights
            .factors
            .contains(&"Low Mood".to_string()));
        assert!(forecast.factors.contains(&"Low Mood Levels".to_string()));
        assert!(forecast
            .weekly_insights
            .factors
            .contains(&"Low Activity Pattern".to_string()));
    }

    #[test]
    fn test_generate_forecast_is_idempotent() {
        let snapshot = BiometricSnapshot::new(4200, 6.5, 78);
        let inputs = MoodInputs::new(6.2, full_week(&[7, 4, 8, 3, 6, 5, 9]));

        let first = serde_json::to_string(&generate_forecast(&snapshot, &inputs)).unwrap();
        let second = serde_json::to_string(&generate_forecast(&snapshot, &inputs)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_engine_with_empty_history_uses_neutral_mood() {
        let engine = ForecastEngine::default();
        let snapshot = BiometricSnapshot::new(8000, 8.0, 70);
        let forecast = engine.forecast(&snapshot, &MoodHistory::new(), date(2026, 10, 18));

        // 5 + (10 - 5) * 0.4 = 7
        assert_eq!(forecast.stress_score, 7);
        assert_eq!(forecast.weekly_insights.factors, vec!["Stable Patterns"]);
    }

    #[test]
    fn test_engine_window() {
        let today = date(2026, 10, 18);
        let history = history_on_days(today, &[(3, 1), (2, 10), (1, 10), (0, 10)]);
        let snapshot = BiometricSnapshot::new(8000, 8.0, 70);

        // Last three entries average 10: score stays at base
        let narrow = ForecastEngine::new(3).forecast(&snapshot, &history, today);
        assert_eq!(narrow.stress_score, 5);

        // All four average 7.75: 5 + 0.9 = 5.9
        let wide = ForecastEngine::new(7).forecast(&snapshot, &history, today);
        assert_eq!(wide.stress_score, 6);
    }
}
