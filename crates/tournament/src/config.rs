//! TOML tournament configuration

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tournament_core::TournamentSettings;

/// A configuration file: a display name plus the engine settings
///
/// ```toml
/// name = "Summer Cup"
///
/// [settings]
/// num_teams = 8
/// format = "both"
/// num_groups = 2
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub settings: TournamentSettings,
}

fn default_name() -> String {
    "Tournament".to_string()
}

impl TournamentConfig {
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse tournament config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("Invalid config {}", path.display()))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
