//! Planning estimates and running statistics.
//!
//! Estimates only read the settings, so callers can show them before a
//! tournament is generated.

use serde::{Deserialize, Serialize};

use crate::fixture::Match;
use crate::knockout::KnockoutStage;
use crate::round_robin::fixtures_per_round;
use crate::settings::TournamentSettings;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupStageSummary {
    /// Size of the largest group
    pub teams_per_group: u32,
    /// Games each team of the largest group plays
    pub games_per_team: u32,
    pub total_games: u32,
    pub estimated_minutes: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct KnockoutSummary {
    pub total_matches: u32,
    pub estimated_minutes: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleOverview {
    pub total_matches: u32,
    pub matches_per_field: u32,
    /// Every stage played back to back, one slot per match day
    pub estimated_minutes: u32,
    /// Fewer fields than groups means groups wait on each other
    pub fields_below_groups: bool,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct TournamentStatistics {
    pub completed_matches: u32,
    pub total_goals: u32,
    pub average_goals: f64,
}

fn div_ceil(a: u32, b: u32) -> u32 {
    if b == 0 {
        0
    } else {
        a.div_ceil(b)
    }
}

/// Group sizes after dealing `num_teams` into `num_groups` groups
pub fn group_sizes(num_teams: u32, num_groups: u32) -> Vec<u32> {
    if num_groups == 0 {
        return Vec::new();
    }
    (0..num_groups)
        .map(|g| num_teams / num_groups + u32::from(g < num_teams % num_groups))
        .collect()
}

pub fn group_stage_summary(settings: &TournamentSettings) -> Option<GroupStageSummary> {
    if !settings.format?.has_groups() || settings.num_groups == 0 {
        return None;
    }
    let rounds = settings.rounds_per_group;
    let teams_per_group = div_ceil(settings.num_teams, settings.num_groups);
    let total_games: u32 = group_sizes(settings.num_teams, settings.num_groups)
        .into_iter()
        .map(|size| fixtures_per_round(size).saturating_mul(rounds))
        .fold(0, u32::saturating_add);

    Some(GroupStageSummary {
        teams_per_group,
        games_per_team: teams_per_group.saturating_sub(1).saturating_mul(rounds),
        total_games,
        estimated_minutes: div_ceil(
            total_games.saturating_mul(settings.group_game_duration),
            settings.num_fields.max(1),
        ),
    })
}

pub fn knockout_summary(settings: &TournamentSettings) -> Option<KnockoutSummary> {
    if !settings.format?.has_knockout() {
        return None;
    }
    let total_matches: u32 = KnockoutStage::ELIMINATION_ORDER
        .iter()
        .filter(|stage| settings.knockout_stages.contains(stage))
        .map(|stage| stage.fixture_count(settings.match_format))
        .fold(0, u32::saturating_add);

    Some(KnockoutSummary {
        total_matches,
        estimated_minutes: div_ceil(
            total_matches.saturating_mul(settings.knockout_game_duration),
            settings.num_fields.max(1),
        ),
    })
}

pub fn schedule_overview(settings: &TournamentSettings) -> ScheduleOverview {
    let fields = settings.num_fields.max(1);
    let group = group_stage_summary(settings).map_or(0, |s| s.total_games);
    let knockout = knockout_summary(settings).map_or(0, |s| s.total_matches);
    let total_matches = group.saturating_add(knockout);
    let has_groups = settings.format.is_some_and(|f| f.has_groups());

    ScheduleOverview {
        total_matches,
        matches_per_field: div_ceil(total_matches, fields),
        estimated_minutes: div_ceil(group, fields)
            .saturating_mul(settings.group_game_duration)
            .saturating_add(
                div_ceil(knockout, fields).saturating_mul(settings.knockout_game_duration),
            ),
        fields_below_groups: has_groups && settings.num_fields < settings.num_groups,
    }
}

pub fn statistics(matches: &[Match]) -> TournamentStatistics {
    let completed: Vec<(u32, u32)> = matches
        .iter()
        .filter(|m| m.is_completed())
        .filter_map(Match::score)
        .collect();
    let total_goals = completed
        .iter()
        .map(|(h, a)| h.saturating_add(*a))
        .fold(0, u32::saturating_add);
    let average_goals = if completed.is_empty() {
        0.0
    } else {
        total_goals as f64 / completed.len() as f64
    };

    TournamentStatistics {
        completed_matches: completed.len() as u32,
        total_goals,
        average_goals,
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod summary_tests;
