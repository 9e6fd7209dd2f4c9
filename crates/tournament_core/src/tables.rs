//! Flat tables for spreadsheets.
//!
//! Column order is part of the interface; `to_record` always returns the
//! cells in the same order as the matching `*_COLUMNS` header.

use serde::{Deserialize, Serialize};

use crate::fixture::{Match, MatchPhase, TeamSlot};
use crate::group::Group;
use crate::match_day::MatchDay;
use crate::standings::StandingsCalculator;
use crate::team::{find_team, Team};

pub const SCHEDULE_COLUMNS: [&str; 10] = [
    "MatchDay",
    "Field",
    "Stage",
    "Group/Round",
    "HomeTeam",
    "AwayTeam",
    "HomeScore",
    "AwayScore",
    "Duration",
    "Status",
];

pub const STANDINGS_COLUMNS: [&str; 11] = [
    "Group",
    "Position",
    "Team",
    "Played",
    "Wins",
    "Draws",
    "Losses",
    "GoalsFor",
    "GoalsAgainst",
    "GoalDifference",
    "Points",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleRow {
    pub match_day: u32,
    pub field: u32,
    pub stage: String,
    pub group_round: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub duration: u32,
    pub status: String,
}

impl ScheduleRow {
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.match_day.to_string(),
            self.field.to_string(),
            self.stage.clone(),
            self.group_round.clone(),
            self.home_team.clone(),
            self.away_team.clone(),
            optional(self.home_score),
            optional(self.away_score),
            self.duration.to_string(),
            self.status.clone(),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StandingsTableRow {
    pub group: String,
    pub position: u32,
    pub team: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl StandingsTableRow {
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.group.clone(),
            self.position.to_string(),
            self.team.clone(),
            self.played.to_string(),
            self.wins.to_string(),
            self.draws.to_string(),
            self.losses.to_string(),
            self.goals_for.to_string(),
            self.goals_against.to_string(),
            self.goal_difference.to_string(),
            self.points.to_string(),
        ]
    }
}

fn optional(score: Option<u32>) -> String {
    score.map(|s| s.to_string()).unwrap_or_default()
}

/// Display name for a fixture side
pub fn slot_name(slot: TeamSlot, teams: &[Team]) -> String {
    match slot {
        TeamSlot::Team(id) => find_team(teams, id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| format!("Team {}", id)),
        TeamSlot::Tbd => "TBD".to_string(),
    }
}

/// `Group A - Round 1`, `Semi-finals`, `Semi-finals - Leg 2`
pub fn group_round_label(m: &Match, groups: &[Group]) -> String {
    match m.phase {
        MatchPhase::Group { group, round, .. } => {
            let name = groups
                .iter()
                .find(|g| g.id == group)
                .map(|g| g.name.clone())
                .unwrap_or_else(|| format!("Group {}", group));
            format!("{} - Round {}", name, round)
        }
        MatchPhase::Knockout { stage, leg: Some(leg) } => format!("{} - Leg {}", stage, leg),
        MatchPhase::Knockout { stage, leg: None } => stage.to_string(),
    }
}

/// One row per scheduled match, in match-day then field order
pub fn schedule_rows(
    match_days: &[MatchDay],
    matches: &[Match],
    teams: &[Team],
    groups: &[Group],
) -> Vec<ScheduleRow> {
    match_days
        .iter()
        .flat_map(|day| day.matches.iter().map(move |slot| (day.day, slot)))
        .filter_map(|(day, slot)| {
            let m = matches.iter().find(|m| m.id == slot.match_id)?;
            Some(ScheduleRow {
                match_day: day,
                field: slot.field,
                stage: m.stage().to_string(),
                group_round: group_round_label(m, groups),
                home_team: slot_name(m.home, teams),
                away_team: slot_name(m.away, teams),
                home_score: m.home_score,
                away_score: m.away_score,
                duration: m.duration,
                status: m.status.label().to_string(),
            })
        })
        .collect()
}

/// Every group table, group by group
pub fn standings_rows(groups: &[Group], teams: &[Team]) -> Vec<StandingsTableRow> {
    groups
        .iter()
        .flat_map(|group| {
            StandingsCalculator::rank(group, teams)
                .into_iter()
                .map(move |row| StandingsTableRow {
                    group: group.name.clone(),
                    position: row.position,
                    team: row.name,
                    played: row.stats.played,
                    wins: row.stats.wins,
                    draws: row.stats.draws,
                    losses: row.stats.losses,
                    goals_for: row.stats.goals_for,
                    goals_against: row.stats.goals_against,
                    goal_difference: row.stats.goal_difference,
                    points: row.stats.points,
                })
        })
        .collect()
}

#[cfg(test)]
#[path = "tables_tests.rs"]
mod tables_tests;
