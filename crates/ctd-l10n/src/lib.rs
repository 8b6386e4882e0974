//! Localized-string provider for the contact diary.
//!
//! Supplies the fixed phrase sets the core crate references and localized
//! calendar-date formatting. Packs are compiled in; adding a language means
//! adding a module with the four pack tables.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use ctd_core::{DateStrings, ExportStrings, OverviewStrings, TraceLocationStrings};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod de;
mod en;

/// Error type for unknown language codes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown language: {0}")]
pub struct UnknownLanguage(String);

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "de" => Ok(Self::De),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// Overview phrases for the given language.
#[must_use]
pub const fn overview(language: Language) -> &'static OverviewStrings {
    match language {
        Language::En => &en::OVERVIEW,
        Language::De => &de::OVERVIEW,
    }
}

/// Trace-location titles and subtitles for the given language.
#[must_use]
pub const fn trace_locations(language: Language) -> &'static TraceLocationStrings {
    match language {
        Language::En => &en::TRACE_LOCATIONS,
        Language::De => &de::TRACE_LOCATIONS,
    }
}

/// Weekday names and date pattern for the given language.
#[must_use]
pub const fn dates(language: Language) -> &'static DateStrings {
    match language {
        Language::En => &en::DATES,
        Language::De => &de::DATES,
    }
}

/// Export heading and intro for the given language.
#[must_use]
pub const fn export(language: Language) -> &'static ExportStrings {
    match language {
        Language::En => &en::EXPORT,
        Language::De => &de::EXPORT,
    }
}

/// Formats a date in the language's day-header style, without the weekday.
#[must_use]
pub fn format_date(date: NaiveDate, language: Language) -> String {
    date.format(dates(language).date_pattern).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_roundtrip() {
        for language in [Language::En, Language::De] {
            let parsed: Language = language.as_str().parse().expect("should parse");
            assert_eq!(parsed, language);
        }
    }

    #[test]
    fn unknown_language_errors() {
        let result: Result<Language, _> = "fr".parse();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().to_string(), "unknown language: fr");
    }

    #[test]
    fn language_serde_agrees_with_as_str() {
        let json = serde_json::to_string(&Language::De).unwrap();
        assert_eq!(json, "\"de\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::En);
    }

    #[test]
    fn default_language_is_english() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn packs_have_no_empty_phrases() {
        for language in [Language::En, Language::De] {
            let strings = overview(language);
            assert!(!strings.low_risk_title.is_empty());
            assert!(!strings.increased_risk_title.is_empty());
            assert!(!strings.risk_text_standard_cause.is_empty());
            assert!(!strings.risk_text_low_risk_encounters_cause.is_empty());
            assert!(!strings.risk_text_disclaimer.is_empty());
            assert!(!strings.abbreviation_hours.is_empty());

            for weekday in dates(language).weekdays {
                assert!(!weekday.is_empty());
            }
        }
    }

    #[test]
    fn format_date_per_language() {
        let date = NaiveDate::from_ymd_opt(2021, 1, 14).unwrap();
        assert_eq!(format_date(date, Language::En), "Jan 14, 2021");
        assert_eq!(format_date(date, Language::De), "14.01.21");
    }

    #[test]
    fn day_header_uses_localized_weekday() {
        let day = ctd_core::DiaryDay::new(NaiveDate::from_ymd_opt(2021, 1, 14).unwrap(), vec![]);
        assert_eq!(
            day.formatted_date(dates(Language::En)),
            "Thursday, Jan 14, 2021"
        );
        assert_eq!(day.formatted_date(dates(Language::De)), "Donnerstag, 14.01.21");
    }
}
