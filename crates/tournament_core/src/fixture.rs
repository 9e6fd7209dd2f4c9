//! Match records shared by the schedulers, the allocator and the ledger.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TournamentError};
use crate::group::GroupId;
use crate::knockout::KnockoutStage;
use crate::team::TeamId;

pub type MatchId = u32;

/// Which part of the tournament a match belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StageTag {
    Group,
    Knockout,
}

impl fmt::Display for StageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageTag::Group => write!(f, "Group"),
            StageTag::Knockout => write!(f, "Knockout"),
        }
    }
}

/// Where a match sits inside its stage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MatchPhase {
    Group {
        group: GroupId,
        /// Repeat of the round-robin, starting at 1
        round: u32,
        /// Circle-method rotation within the round, starting at 1
        rotation: u32,
    },
    Knockout {
        stage: KnockoutStage,
        /// `Some(1)` / `Some(2)` for two-legged ties
        leg: Option<u8>,
    },
}

impl MatchPhase {
    pub fn stage(&self) -> StageTag {
        match self {
            MatchPhase::Group { .. } => StageTag::Group,
            MatchPhase::Knockout { .. } => StageTag::Knockout,
        }
    }
}

/// A side of a fixture: a known team or a slot waiting for an earlier result
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TeamSlot {
    Team(TeamId),
    Tbd,
}

impl TeamSlot {
    pub fn team(self) -> Option<TeamId> {
        match self {
            TeamSlot::Team(id) => Some(id),
            TeamSlot::Tbd => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum MatchStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
}

impl MatchStatus {
    /// Label used in the schedule table
    pub fn label(self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "Scheduled",
            MatchStatus::InProgress => "In Progress",
            MatchStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStatus::Scheduled => write!(f, "scheduled"),
            MatchStatus::InProgress => write!(f, "in progress"),
            MatchStatus::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

/// Parse a score typed by a user. Only whole numbers of zero or more are
/// accepted; `-1`, `2.5` and `abc` are all rejected.
pub fn parse_score(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TournamentError::InvalidScore(raw.to_string()));
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| TournamentError::InvalidScore(raw.to_string()))
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Match {
    pub id: MatchId,
    pub phase: MatchPhase,
    pub home: TeamSlot,
    pub away: TeamSlot,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub status: MatchStatus,
    /// Minutes
    pub duration: u32,
    /// Field number in `1..=num_fields`, set by the allocator
    pub field: Option<u32>,
    /// Match day number, set by the allocator
    pub match_day: Option<u32>,
    /// Knockout only: the side that scored more
    pub winner: Option<TeamSlot>,
}

impl Match {
    /// A fresh, unscored fixture
    pub fn scheduled(
        id: MatchId,
        phase: MatchPhase,
        home: TeamSlot,
        away: TeamSlot,
        duration: u32,
    ) -> Self {
        Self {
            id,
            phase,
            home,
            away,
            home_score: None,
            away_score: None,
            status: MatchStatus::Scheduled,
            duration,
            field: None,
            match_day: None,
            winner: None,
        }
    }

    pub fn stage(&self) -> StageTag {
        self.phase.stage()
    }

    /// The group this fixture belongs to, if it is a group match
    pub fn group(&self) -> Option<GroupId> {
        match self.phase {
            MatchPhase::Group { group, .. } => Some(group),
            MatchPhase::Knockout { .. } => None,
        }
    }

    /// Both scores, when both are set
    pub fn score(&self) -> Option<(u32, u32)> {
        self.home_score.zip(self.away_score)
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    /// Whether the unordered pairing is `a` against `b`
    pub fn involves_pair(&self, a: TeamId, b: TeamId) -> bool {
        let (home, away) = (self.home.team(), self.away.team());
        (home == Some(a) && away == Some(b)) || (home == Some(b) && away == Some(a))
    }
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod fixture_tests;
