//! Configuration loading and management.

use std::path::{Path, PathBuf};

use ctd_l10n::Language;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the diary snapshot document.
    pub diary_path: PathBuf,

    /// Interface language for rendered output.
    pub language: Language,

    /// Threshold of distinct high-risk encounters that selects the cause
    /// text on high-risk days.
    pub min_distinct_high_risk_encounters: u32,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            diary_path: data_dir.join("diary.json"),
            language: Language::default(),
            min_distinct_high_risk_encounters: 1,
        }
    }
}

impl Config {
    /// Loads configuration from default locations.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(None)
    }

    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (CTD_*)
        figment = figment.merge(Env::prefixed("CTD_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for ctd.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("ctd"))
}

/// Returns the platform-specific data directory for ctd.
///
/// On Linux: `~/.local/share/ctd`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("ctd"))
}
