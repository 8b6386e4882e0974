//! Per-day risk summary derivation.
//!
//! Derives the four display values for a diary day from the day's entries,
//! the externally supplied exposure classification, and the high-risk
//! encounter threshold. Pure computation over borrowed inputs; safe to call
//! from any thread.

use crate::day::{DiaryDay, DiaryEntry};
use crate::location::LocationVisit;
use crate::person::{EncounterDuration, EncounterSetting, MaskSituation, PersonEncounter};
use crate::risk::{ExposureHistory, RiskIcon, RiskLevel};
use crate::strings::OverviewStrings;

/// Derived display values for one diary day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    /// Whether the exposure-history row is hidden entirely.
    pub hide_exposure_history: bool,
    pub exposure_history_title: Option<&'static str>,
    pub exposure_history_icon: Option<RiskIcon>,
    pub exposure_history_detail: Option<String>,
}

impl DaySummary {
    /// Computes the summary for a day.
    ///
    /// `min_distinct_high_risk_encounters` selects which cause text is shown
    /// on high-risk days. The threshold comparison differs between days with
    /// and without entries (`== 0` vs `< 2`); this mirrors the upstream risk
    /// policy and is covered by the tests below.
    #[must_use]
    pub fn new(
        day: &DiaryDay,
        history: ExposureHistory,
        min_distinct_high_risk_encounters: u32,
        strings: &OverviewStrings,
    ) -> Self {
        let title = match history {
            ExposureHistory::None => None,
            ExposureHistory::Encounter(RiskLevel::Low) => Some(strings.low_risk_title),
            ExposureHistory::Encounter(RiskLevel::High) => Some(strings.increased_risk_title),
        };

        let detail = match history {
            ExposureHistory::None => None,
            ExposureHistory::Encounter(RiskLevel::Low) => {
                if day.entries.is_empty() {
                    Some(strings.risk_text_standard_cause.to_string())
                } else {
                    Some(format!(
                        "{}\n{}",
                        strings.risk_text_standard_cause, strings.risk_text_disclaimer
                    ))
                }
            }
            ExposureHistory::Encounter(RiskLevel::High) => {
                if day.entries.is_empty() {
                    let cause = if min_distinct_high_risk_encounters < 2 {
                        strings.risk_text_low_risk_encounters_cause
                    } else {
                        strings.risk_text_standard_cause
                    };
                    Some(cause.to_string())
                } else {
                    let cause = if min_distinct_high_risk_encounters == 0 {
                        strings.risk_text_low_risk_encounters_cause
                    } else {
                        strings.risk_text_standard_cause
                    };
                    Some(format!("{cause}\n{}", strings.risk_text_disclaimer))
                }
            }
        };

        Self {
            hide_exposure_history: history == ExposureHistory::None,
            exposure_history_title: title,
            exposure_history_icon: history.risk_level().map(RiskIcon::from),
            exposure_history_detail: detail,
        }
    }
}

/// Detail text for a contact-person encounter.
///
/// Joins the set attribute phrases with `", "` in duration, mask, setting
/// order. Empty string when no attribute is set.
#[must_use]
pub fn person_encounter_detail(
    encounter: &PersonEncounter,
    strings: &OverviewStrings,
) -> String {
    let mut phrases: Vec<&str> = Vec::with_capacity(3);

    if let Some(duration) = encounter.duration {
        phrases.push(match duration {
            EncounterDuration::LessThan15Minutes => strings.duration_less_than_15_minutes,
            EncounterDuration::MoreThan15Minutes => strings.duration_more_than_15_minutes,
        });
    }

    if let Some(mask) = encounter.mask_situation {
        phrases.push(match mask {
            MaskSituation::WithMask => strings.mask_situation_with_mask,
            MaskSituation::WithoutMask => strings.mask_situation_without_mask,
        });
    }

    if let Some(setting) = encounter.setting {
        phrases.push(match setting {
            EncounterSetting::Outside => strings.setting_outside,
            EncounterSetting::Inside => strings.setting_inside,
        });
    }

    phrases.join(", ")
}

/// Detail text for a location visit.
///
/// Formats the duration as zero-padded `HH:MM` followed by the hours
/// abbreviation. Hours may exceed 24. Empty string when the duration is
/// unset or zero.
#[must_use]
pub fn location_visit_detail(visit: &LocationVisit, strings: &OverviewStrings) -> String {
    match visit.duration_in_minutes {
        Some(minutes) if minutes > 0 => {
            let hours = minutes / 60;
            let remainder = minutes % 60;
            format!("{hours:02}:{remainder:02} {}", strings.abbreviation_hours)
        }
        _ => String::new(),
    }
}

/// Detail text for any diary entry.
#[must_use]
pub fn entry_detail(entry: &DiaryEntry, strings: &OverviewStrings) -> String {
    match entry {
        DiaryEntry::ContactPerson { encounter, .. } => {
            person_encounter_detail(encounter, strings)
        }
        DiaryEntry::Location { visit, .. } => location_visit_detail(visit, strings),
    }
}
