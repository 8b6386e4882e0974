//! Phrase-set types crossing the localization boundary.
//!
//! The core crate only defines the shape of the fixed phrase sets it reads;
//! the per-language values live in the localization crate. All fields are
//! `&'static str` since packs are compiled in.

/// Phrases used by the day risk summary and entry detail texts.
#[derive(Debug, Clone, Copy)]
pub struct OverviewStrings {
    pub low_risk_title: &'static str,
    pub increased_risk_title: &'static str,

    pub risk_text_standard_cause: &'static str,
    pub risk_text_low_risk_encounters_cause: &'static str,
    pub risk_text_disclaimer: &'static str,

    pub duration_less_than_15_minutes: &'static str,
    pub duration_more_than_15_minutes: &'static str,
    pub mask_situation_with_mask: &'static str,
    pub mask_situation_without_mask: &'static str,
    pub setting_outside: &'static str,
    pub setting_inside: &'static str,

    /// Suffix after an `HH:MM` visit duration.
    pub abbreviation_hours: &'static str,
}

/// Titles and subtitles for the trace-location kinds.
#[derive(Debug, Clone, Copy)]
pub struct TraceLocationStrings {
    pub unspecified_title: &'static str,
    pub permanent_other_title: &'static str,
    pub temporary_other_title: &'static str,

    pub retail_title: &'static str,
    pub retail_subtitle: &'static str,
    pub food_service_title: &'static str,
    pub food_service_subtitle: &'static str,
    pub craft_title: &'static str,
    pub craft_subtitle: &'static str,
    pub workplace_title: &'static str,
    pub workplace_subtitle: &'static str,
    pub educational_institution_title: &'static str,
    pub educational_institution_subtitle: &'static str,
    pub public_building_title: &'static str,
    pub public_building_subtitle: &'static str,

    pub cultural_event_title: &'static str,
    pub cultural_event_subtitle: &'static str,
    pub club_activity_title: &'static str,
    pub club_activity_subtitle: &'static str,
    pub private_event_title: &'static str,
    pub private_event_subtitle: &'static str,
    pub worship_service_title: &'static str,
}

/// Weekday names and the date pattern for day headers.
#[derive(Debug, Clone, Copy)]
pub struct DateStrings {
    /// Weekday names, Monday first.
    pub weekdays: [&'static str; 7],
    /// `chrono` format pattern for the date part of a day header.
    pub date_pattern: &'static str,
}

/// Phrases for the plain-text diary export.
#[derive(Debug, Clone, Copy)]
pub struct ExportStrings {
    pub heading: &'static str,
    pub intro: &'static str,
}
