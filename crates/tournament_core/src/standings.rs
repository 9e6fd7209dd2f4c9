//! Group tables.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::group::Group;
use crate::team::{find_team, Team, TeamId, TeamStats};

/// One line of a group table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandingRow {
    /// 1 for the group leader
    pub position: u32,
    pub team: TeamId,
    pub name: String,
    pub stats: TeamStats,
}

pub struct StandingsCalculator;

impl StandingsCalculator {
    /// Points, then goal difference, then goals scored; higher ranks first.
    ///
    /// There is no head-to-head rule. Teams equal on all three compare as
    /// `Equal` and keep their group order through the stable sort in
    /// [`rank`](Self::rank).
    pub fn compare(a: &TeamStats, b: &TeamStats) -> Ordering {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_for.cmp(&a.goals_for))
    }

    /// Rank the members of `group`. Ids missing from `teams` are skipped.
    pub fn rank(group: &Group, teams: &[Team]) -> Vec<StandingRow> {
        let mut members: Vec<&Team> = group
            .teams
            .iter()
            .filter_map(|&id| find_team(teams, id))
            .collect();
        members.sort_by(|a, b| Self::compare(&a.stats, &b.stats));

        members
            .into_iter()
            .enumerate()
            .map(|(i, team)| StandingRow {
                position: i as u32 + 1,
                team: team.id,
                name: team.name.clone(),
                stats: team.stats,
            })
            .collect()
    }

    /// The first `count` teams of the group table
    pub fn top(group: &Group, teams: &[Team], count: usize) -> Vec<TeamId> {
        Self::rank(group, teams)
            .into_iter()
            .take(count)
            .map(|row| row.team)
            .collect()
    }
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
