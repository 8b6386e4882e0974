//! Venue catalogue model.
//!
//! Trace locations are created by venue operators and referenced from
//! location diary entries via `trace_location_id`. Only the data model
//! crosses into scope here; check-in flows and the signed wire payload
//! live upstream.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::strings::TraceLocationStrings;

/// Error type for unknown trace-location kind strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown trace location kind: {0}")]
pub struct UnknownTraceLocationKind(String);

/// Kind of venue, split into permanent places and temporary events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceLocationKind {
    Unspecified,
    PermanentOther,
    TemporaryOther,
    PermanentRetail,
    PermanentFoodService,
    PermanentCraft,
    PermanentWorkplace,
    PermanentEducationalInstitution,
    PermanentPublicBuilding,
    TemporaryCulturalEvent,
    TemporaryClubActivity,
    TemporaryPrivateEvent,
    TemporaryWorshipService,
}

impl TraceLocationKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::PermanentOther => "permanent_other",
            Self::TemporaryOther => "temporary_other",
            Self::PermanentRetail => "permanent_retail",
            Self::PermanentFoodService => "permanent_food_service",
            Self::PermanentCraft => "permanent_craft",
            Self::PermanentWorkplace => "permanent_workplace",
            Self::PermanentEducationalInstitution => "permanent_educational_institution",
            Self::PermanentPublicBuilding => "permanent_public_building",
            Self::TemporaryCulturalEvent => "temporary_cultural_event",
            Self::TemporaryClubActivity => "temporary_club_activity",
            Self::TemporaryPrivateEvent => "temporary_private_event",
            Self::TemporaryWorshipService => "temporary_worship_service",
        }
    }

    /// Localized title for this kind.
    #[must_use]
    pub const fn title(&self, strings: &TraceLocationStrings) -> &'static str {
        match self {
            Self::Unspecified => strings.unspecified_title,
            Self::PermanentOther => strings.permanent_other_title,
            Self::TemporaryOther => strings.temporary_other_title,
            Self::PermanentRetail => strings.retail_title,
            Self::PermanentFoodService => strings.food_service_title,
            Self::PermanentCraft => strings.craft_title,
            Self::PermanentWorkplace => strings.workplace_title,
            Self::PermanentEducationalInstitution => strings.educational_institution_title,
            Self::PermanentPublicBuilding => strings.public_building_title,
            Self::TemporaryCulturalEvent => strings.cultural_event_title,
            Self::TemporaryClubActivity => strings.club_activity_title,
            Self::TemporaryPrivateEvent => strings.private_event_title,
            Self::TemporaryWorshipService => strings.worship_service_title,
        }
    }

    /// Localized subtitle for this kind, absent for the unspecified, "other"
    /// and worship-service kinds.
    #[must_use]
    pub const fn subtitle(&self, strings: &TraceLocationStrings) -> Option<&'static str> {
        match self {
            Self::Unspecified
            | Self::PermanentOther
            | Self::TemporaryOther
            | Self::TemporaryWorshipService => None,
            Self::PermanentRetail => Some(strings.retail_subtitle),
            Self::PermanentFoodService => Some(strings.food_service_subtitle),
            Self::PermanentCraft => Some(strings.craft_subtitle),
            Self::PermanentWorkplace => Some(strings.workplace_subtitle),
            Self::PermanentEducationalInstitution => {
                Some(strings.educational_institution_subtitle)
            }
            Self::PermanentPublicBuilding => Some(strings.public_building_subtitle),
            Self::TemporaryCulturalEvent => Some(strings.cultural_event_subtitle),
            Self::TemporaryClubActivity => Some(strings.club_activity_subtitle),
            Self::TemporaryPrivateEvent => Some(strings.private_event_subtitle),
        }
    }
}

impl fmt::Display for TraceLocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraceLocationKind {
    type Err = UnknownTraceLocationKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unspecified" => Ok(Self::Unspecified),
            "permanent_other" => Ok(Self::PermanentOther),
            "temporary_other" => Ok(Self::TemporaryOther),
            "permanent_retail" => Ok(Self::PermanentRetail),
            "permanent_food_service" => Ok(Self::PermanentFoodService),
            "permanent_craft" => Ok(Self::PermanentCraft),
            "permanent_workplace" => Ok(Self::PermanentWorkplace),
            "permanent_educational_institution" => Ok(Self::PermanentEducationalInstitution),
            "permanent_public_building" => Ok(Self::PermanentPublicBuilding),
            "temporary_cultural_event" => Ok(Self::TemporaryCulturalEvent),
            "temporary_club_activity" => Ok(Self::TemporaryClubActivity),
            "temporary_private_event" => Ok(Self::TemporaryPrivateEvent),
            "temporary_worship_service" => Ok(Self::TemporaryWorshipService),
            _ => Err(UnknownTraceLocationKind(s.to_string())),
        }
    }
}

/// A venue in the trace-location catalogue.
///
/// The ID is generated by the server and treated as opaque here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceLocation {
    pub id: String,
    pub version: u32,
    pub kind: TraceLocationKind,
    pub description: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_checkin_length_min: Option<u32>,
}

impl TraceLocation {
    /// Whether the venue is still active at `now`. Venues without an end
    /// date never expire.
    #[must_use]
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.end.is_none_or(|end| now < end)
    }
}
