//! Teams and the roster they are created from.

use serde::{Deserialize, Serialize};

use crate::group::GroupId;
use crate::settings::TournamentSettings;

pub type TeamId = u32;

/// Aggregated results for one team.
///
/// Only [`MatchScoreLedger`](crate::ledger::MatchScoreLedger) changes these
/// numbers; everyone else sees them through [`Team::stats`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamStats {
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl TeamStats {
    /// `played == wins + draws + losses` and the goal difference matches the goals
    pub fn is_consistent(&self) -> bool {
        self.played == self.wins + self.draws + self.losses
            && self.goal_difference == self.goals_for as i64 - self.goals_against as i64
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub(crate) group: Option<GroupId>,
    pub(crate) stats: TeamStats,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            group: None,
            stats: TeamStats::default(),
        }
    }

    pub fn group(&self) -> Option<GroupId> {
        self.group
    }

    pub fn stats(&self) -> &TeamStats {
        &self.stats
    }
}

/// Builds the initial roster
pub struct TeamRegistry;

impl TeamRegistry {
    /// Create `num_teams` teams with ids starting at 1.
    ///
    /// Names come from `team_names` in order; missing entries fall back to
    /// `Team N`.
    pub fn create_roster(settings: &TournamentSettings) -> Vec<Team> {
        (1..=settings.num_teams)
            .map(|id| {
                let name = settings
                    .team_names
                    .get(id as usize - 1)
                    .map(|name| name.trim())
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Team {}", id));
                Team::new(id, name)
            })
            .collect()
    }
}

/// Look up a team by id in a roster slice
pub fn find_team(teams: &[Team], id: TeamId) -> Option<&Team> {
    teams.iter().find(|t| t.id == id)
}
