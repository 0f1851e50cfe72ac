//! Biometric sources
//!
//! The forecast engine only sees a `BiometricSnapshot`. Sources produce a
//! `BiometricReading`, which also records whether the data came from a
//! tracker or was simulated, so callers can tell the user.
//!
//! - `SummarySource` - tracker summaries keyed by day (e.g. from a journal)
//! - `SimulatedSource` - reproducible plausible values per day
//! - `FallbackSource` - primary source with a policy-controlled simulated fallback

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::models::{round_tenth, BiometricReading, BiometricSnapshot, DailySummary, DataSource};

/// Supplier of one day's biometric data
#[async_trait]
pub trait BiometricSource: Send + Sync {
    /// Short name for logging
    fn name(&self) -> &'static str;

    /// Reading for `date`
    async fn fetch(&self, date: NaiveDate) -> Result<BiometricReading>;
}

/// Tracker summaries keyed by calendar day
#[derive(Debug, Clone, Default)]
pub struct SummarySource {
    summaries: BTreeMap<NaiveDate, DailySummary>,
}

impl SummarySource {
    pub fn new(summaries: BTreeMap<NaiveDate, DailySummary>) -> Self {
        Self { summaries }
    }
}

#[async_trait]
impl BiometricSource for SummarySource {
    fn name(&self) -> &'static str {
        "summary"
    }

    async fn fetch(&self, date: NaiveDate) -> Result<BiometricReading> {
        self.summaries
            .get(&date)
            .map(|summary| BiometricReading::from_summary(date, summary))
            .ok_or_else(|| Error::NotFound(format!("No tracker summary for {}", date)))
    }
}

/// Deterministic stand-in for tracker data.
///
/// The same seed and date always produce the same reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedSource {
    seed: u64,
}

impl SimulatedSource {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Simulated reading for `date`
    pub fn reading(&self, date: NaiveDate) -> BiometricReading {
        let day = date.num_days_from_ce() as u64;
        let mut rng = StdRng::seed_from_u64(self.seed ^ day.wrapping_mul(0x9E37_79B9_7F4A_7C15));

        let snapshot = BiometricSnapshot {
            steps: rng.gen_range(2000..10000),
            sleep_hours: round_tenth(rng.gen_range(6.0..9.0)),
            heart_rate: rng.gen_range(65..85),
        };

        BiometricReading {
            date,
            snapshot,
            calories_burned: rng.gen_range(1800..2600),
            source: DataSource::Simulated,
        }
    }
}

#[async_trait]
impl BiometricSource for SimulatedSource {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn fetch(&self, date: NaiveDate) -> Result<BiometricReading> {
        Ok(self.reading(date))
    }
}

/// Whether simulated data may stand in for missing tracker data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationPolicy {
    /// Fall back to simulated data (the reading stays tagged as simulated)
    Allow,
    /// Fail when the tracker has no data
    Deny,
}

impl SimulationPolicy {
    pub fn from_allow(allow: bool) -> Self {
        if allow {
            Self::Allow
        } else {
            Self::Deny
        }
    }
}

/// Primary source with a simulated fallback
pub struct FallbackSource {
    primary: Box<dyn BiometricSource>,
    fallback: SimulatedSource,
    policy: SimulationPolicy,
}

impl FallbackSource {
    pub fn new(
        primary: Box<dyn BiometricSource>,
        fallback: SimulatedSource,
        policy: SimulationPolicy,
    ) -> Self {
        Self {
            primary,
            fallback,
            policy,
        }
    }
}

#[async_trait]
impl BiometricSource for FallbackSource {
    fn name(&self) -> &'static str {
        "fallback"
    }

    async fn fetch(&self, date: NaiveDate) -> Result<BiometricReading> {
        match self.primary.fetch(date).await {
            Ok(reading) => Ok(reading),
            Err(e) => match self.policy {
                SimulationPolicy::Allow => {
                    tracing::warn!(
                        source = self.primary.name(),
                        %date,
                        error = %e,
                        "Biometric fetch failed, using simulated data"
                    );
                    self.fallback.fetch(date).await
                }
                SimulationPolicy::Deny => Err(Error::BiometricsUnavailable(format!(
                    "{} source failed for {}: {}",
                    self.primary.name(),
                    date,
                    e
                ))),
            },
        }
    }
}
