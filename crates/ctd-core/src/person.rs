//! Contact-person records and their encounter attributes.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parse errors for encounter attribute strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnknownAttribute {
    #[error("unknown encounter duration: {0}")]
    Duration(String),

    #[error("unknown mask situation: {0}")]
    MaskSituation(String),

    #[error("unknown encounter setting: {0}")]
    Setting(String),
}

/// How long an encounter lasted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncounterDuration {
    LessThan15Minutes,
    MoreThan15Minutes,
}

impl EncounterDuration {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LessThan15Minutes => "less_than_15_minutes",
            Self::MoreThan15Minutes => "more_than_15_minutes",
        }
    }
}

impl fmt::Display for EncounterDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncounterDuration {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "less_than_15_minutes" => Ok(Self::LessThan15Minutes),
            "more_than_15_minutes" => Ok(Self::MoreThan15Minutes),
            _ => Err(UnknownAttribute::Duration(s.to_string())),
        }
    }
}

/// Whether masks were worn during an encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskSituation {
    WithMask,
    WithoutMask,
}

impl MaskSituation {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WithMask => "with_mask",
            Self::WithoutMask => "without_mask",
        }
    }
}

impl fmt::Display for MaskSituation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaskSituation {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "with_mask" => Ok(Self::WithMask),
            "without_mask" => Ok(Self::WithoutMask),
            _ => Err(UnknownAttribute::MaskSituation(s.to_string())),
        }
    }
}

/// Whether an encounter took place outside or inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncounterSetting {
    Outside,
    Inside,
}

impl EncounterSetting {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Outside => "outside",
            Self::Inside => "inside",
        }
    }
}

impl fmt::Display for EncounterSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncounterSetting {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "outside" => Ok(Self::Outside),
            "inside" => Ok(Self::Inside),
            _ => Err(UnknownAttribute::Setting(s.to_string())),
        }
    }
}

/// A person recorded in the diary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPerson {
    pub id: i64,
    pub name: String,
}

/// A single recorded encounter with a contact person.
///
/// The attribute fields are optional; an unset attribute is simply omitted
/// from the entry detail text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonEncounter {
    pub id: i64,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<EncounterDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask_situation: Option<MaskSituation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setting: Option<EncounterSetting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circumstances: Option<String>,
}
