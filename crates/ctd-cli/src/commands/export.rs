//! Export command for the plain-text diary hand-over.
//!
//! This module implements `ctd export`: a heading with the covered date
//! range, an intro sentence, then one line per entry with date, name,
//! detail text, and free-text circumstances.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ctd_core::{DiaryDay, DiaryEntry, ExposureHistory, entry_detail};
use ctd_l10n::Language;

use crate::document::DiaryDocument;

/// Formats the plain-text export. Days are expected most recent first.
pub fn format_export(days: &[(DiaryDay, ExposureHistory)], language: Language) -> String {
    let export_strings = ctd_l10n::export(language);
    let overview_strings = ctd_l10n::overview(language);

    let mut output = String::new();
    match (days.last(), days.first()) {
        (Some((oldest, _)), Some((newest, _))) => {
            writeln!(
                output,
                "{} ({} - {})",
                export_strings.heading,
                ctd_l10n::format_date(oldest.date, language),
                ctd_l10n::format_date(newest.date, language)
            )
            .unwrap();
        }
        _ => writeln!(output, "{}", export_strings.heading).unwrap(),
    }
    writeln!(output, "{}", export_strings.intro).unwrap();
    writeln!(output).unwrap();

    for (day, _) in days {
        for entry in &day.entries {
            write!(
                output,
                "{} {}",
                ctd_l10n::format_date(day.date, language),
                entry.name()
            )
            .unwrap();

            let detail = entry_detail(entry, overview_strings);
            if !detail.is_empty() {
                write!(output, "; {detail}").unwrap();
            }
            if let Some(circumstances) = entry_circumstances(entry).filter(|c| !c.is_empty()) {
                write!(output, "; {circumstances}").unwrap();
            }
            writeln!(output).unwrap();
        }
    }

    output
}

fn entry_circumstances(entry: &DiaryEntry) -> Option<&str> {
    match entry {
        DiaryEntry::ContactPerson { encounter, .. } => encounter.circumstances.as_deref(),
        DiaryEntry::Location { visit, .. } => visit.circumstances.as_deref(),
    }
}

/// Runs the export command.
pub fn run(input: &Path, output_path: Option<&Path>, language: Language) -> Result<()> {
    let days = DiaryDocument::load(input)?.days_descending();
    let output = format_export(&days, language);

    match output_path {
        Some(path) => {
            fs::write(path, &output)
                .with_context(|| format!("failed to write export: {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote diary export");
        }
        None => print!("{output}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ctd_core::{ContactPerson, EncounterDuration, Location, LocationVisit, PersonEncounter};
    use insta::assert_snapshot;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn fixture_days() -> Vec<(DiaryDay, ExposureHistory)> {
        let newest = date("2021-01-14");
        let oldest = date("2021-01-12");
        vec![
            (
                DiaryDay::new(
                    newest,
                    vec![
                        DiaryEntry::ContactPerson {
                            person: ContactPerson {
                                id: 0,
                                name: "Thomas Mesow".to_string(),
                            },
                            encounter: PersonEncounter {
                                id: 0,
                                date: newest,
                                duration: Some(EncounterDuration::LessThan15Minutes),
                                mask_situation: None,
                                setting: None,
                                circumstances: Some("met in the hallway".to_string()),
                            },
                        },
                        DiaryEntry::Location {
                            location: Location {
                                id: 1,
                                name: "Supermarkt".to_string(),
                                trace_location_id: None,
                            },
                            visit: LocationVisit {
                                id: 0,
                                date: newest,
                                duration_in_minutes: Some(90),
                                circumstances: None,
                                checkin_id: None,
                            },
                        },
                    ],
                ),
                ExposureHistory::None,
            ),
            (
                DiaryDay::new(
                    oldest,
                    vec![DiaryEntry::Location {
                        location: Location {
                            id: 2,
                            name: "Bäckerei".to_string(),
                            trace_location_id: None,
                        },
                        visit: LocationVisit {
                            id: 1,
                            date: oldest,
                            duration_in_minutes: None,
                            circumstances: None,
                            checkin_id: None,
                        },
                    }],
                ),
                ExposureHistory::None,
            ),
        ]
    }

    #[test]
    fn export_renders_heading_range_and_entry_lines() {
        let output = format_export(&fixture_days(), Language::En);
        assert_snapshot!(output, @r"
        Contact diary (Jan 12, 2021 - Jan 14, 2021)
        The following entries are a suggestion to make contact tracing easier.

        Jan 14, 2021 Thomas Mesow; less than 15 minutes; met in the hallway
        Jan 14, 2021 Supermarkt; 01:30 h
        Jan 12, 2021 Bäckerei
        ");
    }

    #[test]
    fn export_localizes_dates_and_phrases() {
        let output = format_export(&fixture_days(), Language::De);
        assert!(output.contains("(12.01.21 - 14.01.21)"));
        assert!(output.contains("14.01.21 Supermarkt; 01:30 Std."));
    }

    #[test]
    fn export_empty_document_has_heading_without_range() {
        let output = format_export(&[], Language::En);
        assert!(output.starts_with("Contact diary\n"));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn export_skips_empty_circumstances() {
        let day = date("2021-01-14");
        let days = vec![(
            DiaryDay::new(
                day,
                vec![DiaryEntry::ContactPerson {
                    person: ContactPerson {
                        id: 0,
                        name: "Thomas Mesow".to_string(),
                    },
                    encounter: PersonEncounter {
                        id: 0,
                        date: day,
                        duration: None,
                        mask_situation: None,
                        setting: None,
                        circumstances: Some(String::new()),
                    },
                }],
            ),
            ExposureHistory::None,
        )];

        let output = format_export(&days, Language::En);
        assert!(output.contains("Jan 14, 2021 Thomas Mesow\n"));
        assert!(!output.contains("Thomas Mesow;"));
    }

    #[test]
    fn run_writes_to_output_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let input = temp.path().join("diary.json");
        std::fs::write(&input, r#"{"days": [{"date": "2021-01-14"}]}"#).unwrap();
        let target = temp.path().join("export.txt");

        run(&input, Some(&target), Language::En).unwrap();

        let written = std::fs::read_to_string(&target).unwrap();
        assert!(written.contains("Contact diary"));
    }
}
