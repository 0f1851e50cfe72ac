//! Journal file
//!
//! A user's display name, ordered mood history and per-day tracker summaries
//! in one JSON document:
//!
//! ```json
//! {
//!   "name": "Sam",
//!   "mood_history": [{ "rating": 6, "timestamp": "2026-10-12T09:00:00+02:00" }],
//!   "biometrics": { "2026-10-12": { "steps": 6521, "total_minutes_asleep": 412 } }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::biometrics::SummarySource;
use crate::error::{Error, Result};
use crate::models::{DailySummary, MoodEntry, MoodHistory, MAX_RATING, MIN_RATING};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub mood_history: MoodHistory,
    #[serde(default)]
    pub biometrics: BTreeMap<NaiveDate, DailySummary>,
}

impl Journal {
    /// Read a journal from disk
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound(format!(
                "Journal not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let journal: Journal = serde_json::from_str(&content)?;
        journal.validate()?;
        Ok(journal)
    }

    /// Read a journal, or start an empty one if the file does not exist yet
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the journal atomically (temp file in the same directory, then rename)
    pub fn save(&self, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, self)?;
        tmp.write_all(b"\n")?;
        tmp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::info!(
            path = %path.display(),
            entries = self.mood_history.len(),
            "Journal saved"
        );
        Ok(())
    }

    /// Record a new mood rating
    pub fn add_mood(
        &mut self,
        rating: u8,
        timestamp: DateTime<FixedOffset>,
        notes: Option<String>,
    ) -> Result<&MoodEntry> {
        self.mood_history.record(rating, timestamp, notes)
    }

    /// Biometric source backed by this journal's tracker summaries
    pub fn summary_source(&self) -> SummarySource {
        SummarySource::new(self.biometrics.clone())
    }

    /// Reject ratings a hand-edited file could contain but `record` would not accept
    fn validate(&self) -> Result<()> {
        let invalid = self
            .mood_history
            .entries()
            .iter()
            .find(|e| !(MIN_RATING..=MAX_RATING).contains(&e.rating));

        match invalid {
            Some(entry) => Err(Error::InvalidData(format!(
                "Mood rating must be between {} and {}, got {} at {}",
                MIN_RATING, MAX_RATING, entry.rating, entry.timestamp
            ))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, sample_journal};

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.json");

        let journal = sample_journal(date(2026, 10, 18));
        journal.save(&path).unwrap();

        let loaded = Journal::load(&path).unwrap();
        assert_eq!(loaded, journal);
    }

    #[test]
    fn test_load_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        assert!(matches!(Journal::load(&path), Err(Error::NotFound(_))));
        assert_eq!(Journal::load_or_default(&path).unwrap(), Journal::default());
    }

    #[test]
    fn test_load_minimal_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.json");
        fs::write(&path, "{}").unwrap();

        let journal = Journal::load(&path).unwrap();
        assert!(journal.mood_history.is_empty());
        assert!(journal.biometrics.is_empty());
    }

    #[test]
    fn test_load_rejects_bad_rating() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.json");
        fs::write(
            &path,
            r#"{"mood_history":[{"rating":12,"timestamp":"2026-10-12T09:00:00Z"}]}"#,
        )
        .unwrap();

        assert!(matches!(Journal::load(&path), Err(Error::InvalidData(_))));

        fs::write(
            &path,
            r#"{"mood_history":[{"rating":0,"timestamp":"2026-10-12T09:00:00Z"}]}"#,
        )
        .unwrap();
        assert!(matches!(Journal::load(&path), Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_load_accepts_rating_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.json");
        fs::write(
            &path,
            r#"{"mood_history":[
                {"rating":1,"timestamp":"2026-10-12T09:00:00Z"},
                {"rating":10,"timestamp":"2026-10-13T09:00:00Z"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(Journal::load(&path).unwrap().mood_history.len(), 2);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(Journal::load(&path), Err(Error::Json(_))));
    }

    #[test]
    fn test_add_mood() {
        let mut journal = Journal::default();
        let ts = DateTime::parse_from_rfc3339("2026-10-18T08:00:00+01:00").unwrap();

        journal.add_mood(7, ts, Some("slept well".into())).unwrap();
        assert!(journal.add_mood(0, ts, None).is_err());
        assert_eq!(journal.mood_history.len(), 1);
    }
}
