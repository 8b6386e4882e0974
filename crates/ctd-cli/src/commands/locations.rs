//! Locations command for listing the venue catalogue.
//!
//! This module implements `ctd locations` which displays every trace
//! location with its localized kind title, description, address, and
//! whether the venue is still active.

use std::fmt::Write;
use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use ctd_core::{TraceLocation, TraceLocationKind};
use ctd_l10n::Language;
use serde::Serialize;

use crate::document::DiaryDocument;

// ========== Human-Readable Output ==========

/// Format the venue catalogue for human-readable output.
pub fn format_locations(
    locations: &[TraceLocation],
    now: DateTime<Utc>,
    language: Language,
) -> String {
    let strings = ctd_l10n::trace_locations(language);

    let mut output = String::new();
    writeln!(output, "TRACE LOCATIONS").unwrap();
    writeln!(output).unwrap();

    if locations.is_empty() {
        writeln!(output, "No trace locations in the diary snapshot.").unwrap();
        return output;
    }

    // Header
    writeln!(
        output,
        "{:<26}  {:<28}  {:<24}  State",
        "Kind", "Description", "Address"
    )
    .unwrap();
    writeln!(
        output,
        "──────────────────────────  ────────────────────────────  ────────────────────────  ───────"
    )
    .unwrap();

    for location in locations {
        let state = if location.is_active(now) {
            "active"
        } else {
            "expired"
        };
        writeln!(
            output,
            "{:<26}  {:<28}  {:<24}  {state}",
            location.kind.title(strings),
            location.description,
            location.address
        )
        .unwrap();
    }

    output
}

// ========== JSON Output ==========

/// JSON venue entry.
#[derive(Debug, Serialize)]
pub struct JsonLocation {
    pub id: String,
    pub kind: TraceLocationKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub description: String,
    pub address: String,
    pub active: bool,
}

/// Format the venue catalogue as JSON.
pub fn format_locations_json(
    locations: &[TraceLocation],
    now: DateTime<Utc>,
    language: Language,
) -> Result<String> {
    let strings = ctd_l10n::trace_locations(language);

    let entries: Vec<JsonLocation> = locations
        .iter()
        .map(|location| JsonLocation {
            id: location.id.clone(),
            kind: location.kind,
            title: location.kind.title(strings).to_string(),
            subtitle: location.kind.subtitle(strings).map(ToString::to_string),
            description: location.description.clone(),
            address: location.address.clone(),
            active: location.is_active(now),
        })
        .collect();

    Ok(serde_json::to_string_pretty(&entries)?)
}

// ========== Public Interface ==========

/// Runs the locations command.
pub fn run(input: &Path, json: bool, language: Language) -> Result<()> {
    let document = DiaryDocument::load(input)?;
    let now = Utc::now();

    if json {
        let output = format_locations_json(&document.trace_locations, now, language)?;
        println!("{output}");
    } else {
        let output = format_locations(&document.trace_locations, now, language);
        print!("{output}");
    }

    Ok(())
}
