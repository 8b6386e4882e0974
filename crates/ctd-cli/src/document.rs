//! The diary snapshot document.
//!
//! A JSON document exported by the upstream store: one record per calendar
//! day plus the venue catalogue. The day's entries and its risk
//! classification are independent fields; the classification is never
//! derived from the entries here.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use ctd_core::{DiaryDay, DiaryEntry, ExposureHistory, TraceLocation};
use serde::{Deserialize, Serialize};

/// One calendar day as stored in the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    /// Risk classification supplied by the upstream risk service.
    #[serde(default)]
    pub exposure: ExposureHistory,
    #[serde(default)]
    pub entries: Vec<DiaryEntry>,
}

/// The full diary snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiaryDocument {
    #[serde(default)]
    pub days: Vec<DayRecord>,
    #[serde(default)]
    pub trace_locations: Vec<TraceLocation>,
}

impl DiaryDocument {
    /// Loads and validates a snapshot from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read diary snapshot: {}", path.display()))?;
        let document: Self = serde_json::from_str(&content)
            .with_context(|| format!("malformed diary snapshot: {}", path.display()))?;
        document.validate()?;

        tracing::debug!(
            days = document.days.len(),
            trace_locations = document.trace_locations.len(),
            "loaded diary snapshot"
        );
        Ok(document)
    }

    /// Rejects documents with more than one record for the same date.
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for day in &self.days {
            if !seen.insert(day.date) {
                bail!("duplicate diary day: {}", day.date);
            }
        }
        Ok(())
    }

    /// The days with their classifications, most recent first regardless of
    /// document order. Entry order within a day is preserved.
    #[must_use]
    pub fn days_descending(self) -> Vec<(DiaryDay, ExposureHistory)> {
        let mut days: Vec<(DiaryDay, ExposureHistory)> = self
            .days
            .into_iter()
            .map(|record| {
                (
                    DiaryDay::new(record.date, record.entries),
                    record.exposure,
                )
            })
            .collect();
        days.sort_by_key(|(day, _)| std::cmp::Reverse(day.date));
        days
    }
}
