//! Diary days and their entries.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::location::{Location, LocationVisit};
use crate::person::{ContactPerson, PersonEncounter};
use crate::strings::DateStrings;

/// A single diary entry: either a contact-person encounter or a location
/// visit. Callers must handle both variants exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiaryEntry {
    ContactPerson {
        person: ContactPerson,
        encounter: PersonEncounter,
    },
    Location {
        location: Location,
        visit: LocationVisit,
    },
}

impl DiaryEntry {
    /// Display name of the person or location.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::ContactPerson { person, .. } => &person.name,
            Self::Location { location, .. } => &location.name,
        }
    }

    /// Date of the encounter or visit.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        match self {
            Self::ContactPerson { encounter, .. } => encounter.date,
            Self::Location { visit, .. } => visit.date,
        }
    }
}

/// One calendar day of the diary with its recorded entries.
///
/// Immutable once constructed; entry order is insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryDay {
    pub date: NaiveDate,
    #[serde(default)]
    pub entries: Vec<DiaryEntry>,
}

impl DiaryDay {
    #[must_use]
    pub const fn new(date: NaiveDate, entries: Vec<DiaryEntry>) -> Self {
        Self { date, entries }
    }

    /// Localized day header, e.g. `"Thursday, Jan 14, 2021"`.
    #[must_use]
    pub fn formatted_date(&self, strings: &DateStrings) -> String {
        let weekday = strings.weekdays[self.date.weekday().num_days_from_monday() as usize];
        format!("{weekday}, {}", self.date.format(strings.date_pattern))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("valid test date")
    }

    const TEST_DATES: DateStrings = DateStrings {
        weekdays: [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ],
        date_pattern: "%b %-d, %Y",
    };

    #[test]
    fn formatted_date_uses_weekday_and_pattern() {
        // 2021-01-14 was a Thursday
        let day = DiaryDay::new(date("2021-01-14"), vec![]);
        assert_eq!(day.formatted_date(&TEST_DATES), "Thursday, Jan 14, 2021");
    }

    #[test]
    fn formatted_date_on_a_sunday() {
        let day = DiaryDay::new(date("2021-01-17"), vec![]);
        assert_eq!(day.formatted_date(&TEST_DATES), "Sunday, Jan 17, 2021");
    }

    #[test]
    fn entry_accessors() {
        let entry = DiaryEntry::ContactPerson {
            person: ContactPerson {
                id: 0,
                name: "Thomas Mesow".to_string(),
            },
            encounter: PersonEncounter {
                id: 0,
                date: date("2021-01-14"),
                duration: None,
                mask_situation: None,
                setting: None,
                circumstances: None,
            },
        };
        assert_eq!(entry.name(), "Thomas Mesow");
        assert_eq!(entry.date(), date("2021-01-14"));

        let entry = DiaryEntry::Location {
            location: Location {
                id: 1,
                name: "Supermarkt".to_string(),
                trace_location_id: None,
            },
            visit: LocationVisit {
                id: 0,
                date: date("2021-01-14"),
                duration_in_minutes: None,
                circumstances: None,
                checkin_id: None,
            },
        };
        assert_eq!(entry.name(), "Supermarkt");
    }

    #[test]
    fn entry_serde_roundtrip() {
        let entry = DiaryEntry::Location {
            location: Location {
                id: 1,
                name: "Supermarkt".to_string(),
                trace_location_id: Some("venue-1".to_string()),
            },
            visit: LocationVisit {
                id: 0,
                date: date("2021-01-14"),
                duration_in_minutes: Some(45),
                circumstances: None,
                checkin_id: None,
            },
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""type":"location""#));
        let parsed: DiaryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn day_entries_default_to_empty() {
        let day: DiaryDay = serde_json::from_str(r#"{"date": "2021-01-14"}"#).unwrap();
        assert!(day.entries.is_empty());
    }
}
