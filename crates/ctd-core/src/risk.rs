//! Exposure-risk classification attached to a diary day.
//!
//! The classification is computed by an upstream risk-aggregation service;
//! this module only models the result. The summarizer never derives a risk
//! level from the day's entries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for unknown risk level strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown risk level: {0}")]
pub struct UnknownRiskLevel(String);

/// Risk level attached to an exposure-history encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    High,
}

impl RiskLevel {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = UnknownRiskLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "high" => Ok(Self::High),
            _ => Err(UnknownRiskLevel(s.to_string())),
        }
    }
}

/// Aggregated risk classification for one diary day.
///
/// A day with no classification is `None`; the risk level only exists
/// together with an encounter, so the "no history but has a level" state
/// is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "risk_level", rename_all = "snake_case")]
pub enum ExposureHistory {
    #[default]
    None,
    Encounter(RiskLevel),
}

impl ExposureHistory {
    /// Returns the attached risk level, if any.
    #[must_use]
    pub const fn risk_level(&self) -> Option<RiskLevel> {
        match self {
            Self::None => None,
            Self::Encounter(level) => Some(*level),
        }
    }
}

/// Icon selection for the exposure-history row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskIcon {
    Low,
    High,
}

impl RiskIcon {
    /// Identifier of the icon resource in the asset catalogue.
    #[must_use]
    pub const fn asset_name(&self) -> &'static str {
        match self {
            Self::Low => "Icons_Attention_low",
            Self::High => "Icons_Attention_high",
        }
    }
}

impl From<RiskLevel> for RiskIcon {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Low => Self::Low,
            RiskLevel::High => Self::High,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_roundtrip() {
        for variant in [RiskLevel::Low, RiskLevel::High] {
            let parsed: RiskLevel = variant.as_str().parse().expect("should parse");
            assert_eq!(parsed, variant);
        }
    }

    #[test]
    fn unknown_risk_level_errors() {
        let result: Result<RiskLevel, _> = "medium".parse();
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "unknown risk level: medium"
        );
    }

    #[test]
    fn exposure_history_defaults_to_none() {
        assert_eq!(ExposureHistory::default(), ExposureHistory::None);
    }

    #[test]
    fn exposure_history_serde_shapes() {
        let json = serde_json::to_string(&ExposureHistory::None).unwrap();
        assert_eq!(json, r#"{"type":"none"}"#);

        let json = serde_json::to_string(&ExposureHistory::Encounter(RiskLevel::High)).unwrap();
        assert_eq!(json, r#"{"type":"encounter","risk_level":"high"}"#);

        let parsed: ExposureHistory =
            serde_json::from_str(r#"{"type":"encounter","risk_level":"low"}"#).unwrap();
        assert_eq!(parsed, ExposureHistory::Encounter(RiskLevel::Low));
    }

    #[test]
    fn risk_level_accessor() {
        assert_eq!(ExposureHistory::None.risk_level(), None);
        assert_eq!(
            ExposureHistory::Encounter(RiskLevel::High).risk_level(),
            Some(RiskLevel::High)
        );
    }

    #[test]
    fn icon_asset_names() {
        assert_eq!(RiskIcon::Low.asset_name(), "Icons_Attention_low");
        assert_eq!(RiskIcon::High.asset_name(), "Icons_Attention_high");
        assert_eq!(RiskIcon::from(RiskLevel::Low), RiskIcon::Low);
    }
}
