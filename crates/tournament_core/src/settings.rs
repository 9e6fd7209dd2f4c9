//! Tournament configuration and its validation.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TournamentError};
use crate::knockout::KnockoutStage;

/// Smallest supported roster
pub const MIN_TEAMS: u32 = 2;
/// Largest supported roster
pub const MAX_TEAMS: u32 = 64;
/// Upper bound on the teams-advancing choices offered per group
pub const MAX_ADVANCING_PER_GROUP: u32 = 4;
/// Longest match, in minutes: one day
pub const MAX_GAME_DURATION: u32 = 24 * 60;
/// Most repeats of a group round-robin
pub const MAX_ROUNDS_PER_GROUP: u32 = 10;

/// Overall tournament structure
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    /// Group stage only
    Group,
    /// Single-elimination bracket over the whole roster
    Knockout,
    /// Group stage feeding a knockout bracket
    Both,
}

impl Format {
    pub fn has_groups(self) -> bool {
        matches!(self, Format::Group | Format::Both)
    }

    pub fn has_knockout(self) -> bool {
        matches!(self, Format::Knockout | Format::Both)
    }
}

/// Whether knockout ties are a single match or home-and-away legs
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MatchFormat {
    #[default]
    Single,
    TwoLeg,
}

/// Orientation of repeated round-robin rounds
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatMode {
    /// Every even-numbered round swaps home and away (double round-robin)
    #[default]
    Mirrored,
    /// Every round repeats the first round's fixtures unchanged
    Identical,
}

/// Points awarded per match outcome
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScoringRule {
    pub win: u32,
    pub draw: u32,
    pub loss: u32,
}

impl Default for ScoringRule {
    fn default() -> Self {
        Self {
            win: 3,
            draw: 1,
            loss: 0,
        }
    }
}

/// Everything the caller configures before a tournament is generated.
///
/// Deserializes from TOML/JSON with every field optional; [`validate`]
/// decides whether the combination is usable.
///
/// [`validate`]: TournamentSettings::validate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TournamentSettings {
    pub num_teams: u32,
    /// Passed through for display, the engine never reads it
    pub players_per_team: u32,
    pub format: Option<Format>,
    pub num_groups: u32,
    pub rounds_per_group: u32,
    pub repeat_mode: RepeatMode,
    pub teams_advancing: u32,
    /// Minutes per group match
    pub group_game_duration: u32,
    /// Minutes per knockout match
    pub knockout_game_duration: u32,
    pub scoring: ScoringRule,
    pub num_fields: u32,
    pub knockout_stages: Vec<KnockoutStage>,
    pub match_format: MatchFormat,
    /// Passed through for display, the engine never reads it
    pub extra_time: bool,
    /// First kickoff as `HH:MM`
    pub start_time: Option<String>,
    /// Custom names for the first teams of the roster
    pub team_names: Vec<String>,
}

impl Default for TournamentSettings {
    fn default() -> Self {
        Self {
            num_teams: 0,
            players_per_team: 0,
            format: None,
            num_groups: 0,
            rounds_per_group: 1,
            repeat_mode: RepeatMode::default(),
            teams_advancing: 0,
            group_game_duration: 0,
            knockout_game_duration: 0,
            scoring: ScoringRule::default(),
            num_fields: 0,
            knockout_stages: Vec::new(),
            match_format: MatchFormat::default(),
            extra_time: false,
            start_time: None,
            team_names: Vec::new(),
        }
    }
}

impl TournamentSettings {
    /// Check every field the selected format depends on.
    ///
    /// Returns the chosen format so callers do not have to unwrap it again.
    pub fn validate(&self) -> Result<Format> {
        check_range("num_teams", self.num_teams, MIN_TEAMS, MAX_TEAMS)?;
        check_range("players_per_team", self.players_per_team, 1, u32::MAX)?;
        let format = self
            .format
            .ok_or(TournamentError::MissingSelection("tournament format"))?;

        if self.team_names.len() > self.num_teams as usize {
            return Err(TournamentError::out_of_range(
                "team_names",
                0,
                self.num_teams as i64,
                self.team_names.len() as i64,
            ));
        }

        if format.has_groups() {
            check_range("num_groups", self.num_groups, 1, self.num_teams / 2)?;
            check_range(
                "rounds_per_group",
                self.rounds_per_group,
                1,
                MAX_ROUNDS_PER_GROUP,
            )?;
            check_range(
                "group_game_duration",
                self.group_game_duration,
                1,
                MAX_GAME_DURATION,
            )?;
        }

        if format == Format::Both {
            let options = advancing_options(self.num_teams, self.num_groups);
            check_range(
                "teams_advancing",
                self.teams_advancing,
                *options.start(),
                *options.end(),
            )?;
        }

        if format.has_knockout() {
            check_range(
                "knockout_game_duration",
                self.knockout_game_duration,
                1,
                MAX_GAME_DURATION,
            )?;
            if self.knockout_stages.is_empty() {
                return Err(TournamentError::MissingSelection("knockout stage"));
            }
        }

        check_range("num_fields", self.num_fields, 1, u32::MAX)?;
        self.kickoff_time()?;

        Ok(format)
    }

    /// Parsed start time, if one was configured
    pub fn kickoff_time(&self) -> Result<Option<NaiveTime>> {
        match self.start_time.as_deref() {
            None => Ok(None),
            Some(raw) => NaiveTime::parse_from_str(raw.trim(), "%H:%M")
                .map(Some)
                .map_err(|_| TournamentError::InvalidStartTime(raw.to_string())),
        }
    }
}

/// Teams-advancing values that make sense for `num_teams` split into
/// `num_groups` groups: one up to the smallest group size, capped at four.
pub fn advancing_options(num_teams: u32, num_groups: u32) -> std::ops::RangeInclusive<u32> {
    if num_groups == 0 {
        return 1..=0;
    }
    let smallest_group = num_teams / num_groups;
    1..=smallest_group.min(MAX_ADVANCING_PER_GROUP)
}

fn check_range(field: &'static str, value: u32, min: u32, max: u32) -> Result<()> {
    if value < min || value > max {
        return Err(TournamentError::out_of_range(
            field,
            min as i64,
            max as i64,
            value as i64,
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod settings_tests;
