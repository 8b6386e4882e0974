//! Overview command for the per-day risk summary.
//!
//! This module implements `ctd overview`: one block per diary day, most
//! recent first, with the derived risk summary followed by the day's
//! entries and their detail texts.

use std::fmt::Write;
use std::path::Path;

use anyhow::Result;
use ctd_core::{DaySummary, DiaryDay, ExposureHistory, entry_detail};
use ctd_l10n::Language;
use serde::Serialize;

use crate::document::DiaryDocument;

/// Formats the human-readable overview output.
pub fn format_overview(
    days: &[(DiaryDay, ExposureHistory)],
    min_distinct_high_risk_encounters: u32,
    language: Language,
) -> String {
    let overview_strings = ctd_l10n::overview(language);
    let date_strings = ctd_l10n::dates(language);

    let mut output = String::new();
    for (index, (day, history)) in days.iter().enumerate() {
        if index > 0 {
            writeln!(output).unwrap();
        }
        writeln!(output, "{}", day.formatted_date(date_strings)).unwrap();

        let summary = DaySummary::new(
            day,
            *history,
            min_distinct_high_risk_encounters,
            overview_strings,
        );
        if !summary.hide_exposure_history {
            if let (Some(title), Some(icon)) =
                (summary.exposure_history_title, summary.exposure_history_icon)
            {
                writeln!(output, "  {title} ({})", icon.asset_name()).unwrap();
            }
            if let Some(detail) = &summary.exposure_history_detail {
                for line in detail.lines() {
                    writeln!(output, "  {line}").unwrap();
                }
            }
        }

        for entry in &day.entries {
            let detail = entry_detail(entry, overview_strings);
            if detail.is_empty() {
                writeln!(output, "  - {}", entry.name()).unwrap();
            } else {
                writeln!(output, "  - {} ({detail})", entry.name()).unwrap();
            }
        }
    }

    output
}

// ========== JSON Output ==========

/// JSON overview structure.
#[derive(Debug, Serialize)]
pub struct JsonOverview {
    pub language: Language,
    pub days: Vec<JsonDay>,
}

#[derive(Debug, Serialize)]
pub struct JsonDay {
    pub date: String,
    pub formatted_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exposure_history: Option<JsonExposureHistory>,
    pub entries: Vec<JsonEntry>,
}

#[derive(Debug, Serialize)]
pub struct JsonExposureHistory {
    pub title: String,
    pub icon: String,
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct JsonEntry {
    pub name: String,
    pub detail: String,
}

/// Formats the overview as JSON.
pub fn format_overview_json(
    days: &[(DiaryDay, ExposureHistory)],
    min_distinct_high_risk_encounters: u32,
    language: Language,
) -> Result<String> {
    let overview_strings = ctd_l10n::overview(language);
    let date_strings = ctd_l10n::dates(language);

    let json_days = days
        .iter()
        .map(|(day, history)| {
            let summary = DaySummary::new(
                day,
                *history,
                min_distinct_high_risk_encounters,
                overview_strings,
            );

            let exposure_history = match (
                summary.exposure_history_title,
                summary.exposure_history_icon,
                summary.exposure_history_detail,
            ) {
                (Some(title), Some(icon), Some(detail)) => Some(JsonExposureHistory {
                    title: title.to_string(),
                    icon: icon.asset_name().to_string(),
                    detail,
                }),
                _ => None,
            };

            JsonDay {
                date: day.date.to_string(),
                formatted_date: day.formatted_date(date_strings),
                exposure_history,
                entries: day
                    .entries
                    .iter()
                    .map(|entry| JsonEntry {
                        name: entry.name().to_string(),
                        detail: entry_detail(entry, overview_strings),
                    })
                    .collect(),
            }
        })
        .collect();

    let overview = JsonOverview {
        language,
        days: json_days,
    };
    Ok(serde_json::to_string_pretty(&overview)?)
}

// ========== Public Interface ==========

/// Runs the overview command.
pub fn run(
    input: &Path,
    days_limit: Option<usize>,
    json: bool,
    min_distinct_high_risk_encounters: u32,
    language: Language,
) -> Result<()> {
    let mut days = DiaryDocument::load(input)?.days_descending();
    if let Some(limit) = days_limit {
        days.truncate(limit);
    }

    if json {
        let output = format_overview_json(&days, min_distinct_high_risk_encounters, language)?;
        println!("{output}");
    } else {
        let output = format_overview(&days, min_distinct_high_risk_encounters, language);
        print!("{output}");
    }

    Ok(())
}
