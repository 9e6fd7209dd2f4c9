//! Splitting the roster into groups.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TournamentError};
use crate::team::{Team, TeamId};

pub type GroupId = u32;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    /// Members in roster order
    pub teams: Vec<TeamId>,
}

pub struct GroupAssigner;

impl GroupAssigner {
    /// Deal the roster into `num_groups` groups, team `i` going to group
    /// `(i mod num_groups) + 1`.
    ///
    /// Fails without touching `teams` when `num_groups` is zero or more than
    /// half the roster.
    pub fn assign(teams: &mut [Team], num_groups: u32) -> Result<Vec<Group>> {
        let max_groups = (teams.len() / 2) as u32;
        if num_groups < 1 || num_groups > max_groups {
            return Err(TournamentError::out_of_range(
                "num_groups",
                1,
                max_groups as i64,
                num_groups as i64,
            ));
        }

        let mut groups: Vec<Group> = (1..=num_groups)
            .map(|id| Group {
                id,
                name: format!("Group {}", group_letters(id)),
                teams: Vec::new(),
            })
            .collect();

        for (index, team) in teams.iter_mut().enumerate() {
            let slot = index % num_groups as usize;
            team.group = Some(groups[slot].id);
            groups[slot].teams.push(team.id);
        }

        debug!(
            groups = groups.len(),
            teams = teams.len(),
            "assigned teams to groups"
        );
        Ok(groups)
    }
}

/// Spreadsheet-style letters: 1 -> A, 26 -> Z, 27 -> AA
pub fn group_letters(id: GroupId) -> String {
    let mut n = id;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Suggested group count for a roster: the square root rounded up, kept
/// within what [`GroupAssigner::assign`] accepts.
pub fn suggest_group_count(num_teams: u32) -> u32 {
    let root = (num_teams as f64).sqrt().ceil() as u32;
    root.min(num_teams / 2).max(1)
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod group_tests;
