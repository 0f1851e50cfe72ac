//! Mood recording command implementations

use std::path::Path;

use anyhow::{Context, Result};
use calmcast_core::Journal;
use chrono::{DateTime, FixedOffset};

pub fn cmd_mood_add(
    journal_path: &Path,
    rating: u8,
    notes: Option<String>,
    timestamp: DateTime<FixedOffset>,
) -> Result<()> {
    let mut journal = Journal::load_or_default(journal_path)
        .with_context(|| format!("Failed to load journal {}", journal_path.display()))?;

    journal.add_mood(rating, timestamp, notes)?;
    journal
        .save(journal_path)
        .with_context(|| format!("Failed to save journal {}", journal_path.display()))?;

    println!(
        "✅ Recorded mood {}/10 ({} entries in {})",
        rating,
        journal.mood_history.len(),
        journal_path.display()
    );

    Ok(())
}
