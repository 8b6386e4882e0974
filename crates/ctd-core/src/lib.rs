//! Core domain model for the contact diary.
//!
//! This crate contains the fundamental types and logic for:
//! - Diary days: contact-person encounters and location visits per calendar day
//! - Risk summaries: deriving the per-day exposure display values
//! - Trace locations: the venue catalogue model

pub mod day;
pub mod location;
pub mod person;
pub mod risk;
pub mod strings;
pub mod summary;
pub mod trace_location;

pub use day::{DiaryDay, DiaryEntry};
pub use location::{Location, LocationVisit};
pub use person::{
    ContactPerson, EncounterDuration, EncounterSetting, MaskSituation, PersonEncounter,
};
pub use risk::{ExposureHistory, RiskIcon, RiskLevel};
pub use strings::{DateStrings, ExportStrings, OverviewStrings, TraceLocationStrings};
pub use summary::{DaySummary, entry_detail, location_visit_detail, person_encounter_detail};
pub use trace_location::{TraceLocation, TraceLocationKind};
