//! The tournament engine: one value owning all state.
//!
//! Every command validates its input before mutating anything, so a failed
//! call leaves the tournament exactly as it was.

use serde::Serialize;
use tracing::info;

use crate::error::{Result, TournamentError};
use crate::fixture::{parse_score, Match, MatchId, Side};
use crate::group::{Group, GroupAssigner, GroupId};
use crate::knockout::{KnockoutBracket, KnockoutBracketBuilder};
use crate::ledger::MatchScoreLedger;
use crate::match_day::{MatchDay, MatchDayAllocator};
use crate::round_robin::RoundRobinScheduler;
use crate::settings::{Format, TournamentSettings};
use crate::standings::{StandingRow, StandingsCalculator};
use crate::summary::{self, ScheduleOverview, TournamentStatistics};
use crate::tables::{self, ScheduleRow, StandingsTableRow};
use crate::team::{find_team, Team, TeamId, TeamRegistry, TeamStats};

#[derive(Debug, Clone, Serialize)]
pub struct Tournament {
    settings: TournamentSettings,
    format: Format,
    teams: Vec<Team>,
    groups: Vec<Group>,
    matches: Vec<Match>,
    match_days: Vec<MatchDay>,
    knockout_bracket: Option<KnockoutBracket>,
}

impl Tournament {
    /// Validate `settings`, create the roster and, for formats with a group
    /// stage, split it into groups.
    pub fn new(settings: TournamentSettings) -> Result<Self> {
        let format = settings.validate()?;
        let mut teams = TeamRegistry::create_roster(&settings);
        let groups = if format.has_groups() {
            GroupAssigner::assign(&mut teams, settings.num_groups)?
        } else {
            Vec::new()
        };

        info!(
            teams = teams.len(),
            groups = groups.len(),
            format = ?format,
            "tournament set up"
        );

        Ok(Self {
            settings,
            format,
            teams,
            groups,
            matches: Vec::new(),
            match_days: Vec::new(),
            knockout_bracket: None,
        })
    }

    pub fn settings(&self) -> &TournamentSettings {
        &self.settings
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn match_days(&self) -> &[MatchDay] {
        &self.match_days
    }

    pub fn knockout_bracket(&self) -> Option<&KnockoutBracket> {
        self.knockout_bracket.as_ref()
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        find_team(&self.teams, id)
    }

    pub fn find_match(&self, id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    /// Build the whole schedule from scratch.
    ///
    /// Any previous matches, match days, bracket and team statistics are
    /// discarded first.
    pub fn generate(&mut self) {
        self.clear_results();

        let mut next_id: MatchId = 1;
        let mut matches = Vec::new();

        if self.format.has_groups() {
            let scheduler = RoundRobinScheduler::new(
                self.settings.rounds_per_group,
                self.settings.repeat_mode,
                self.settings.group_game_duration,
            );
            for group in &self.groups {
                matches.extend(scheduler.schedule(group, &mut next_id));
            }
        }

        let bracket = if self.format.has_knockout() {
            matches.extend(KnockoutBracketBuilder::skeleton(
                &self.settings.knockout_stages,
                self.settings.match_format,
                self.settings.knockout_game_duration,
                &mut next_id,
            ));
            Some(KnockoutBracketBuilder::build_bracket(self.qualifiers()))
        } else {
            None
        };

        let kickoff = self.settings.kickoff_time().ok().flatten();
        let allocator = MatchDayAllocator::new(self.settings.num_fields, kickoff);
        let order = MatchDayAllocator::order_fixtures(&matches);
        let ordered: Vec<&Match> = order
            .iter()
            .filter_map(|id| matches.iter().find(|m| m.id == *id))
            .collect();
        let match_days = allocator.allocate(&ordered);

        for day in &match_days {
            for slot in &day.matches {
                if let Some(m) = matches.iter_mut().find(|m| m.id == slot.match_id) {
                    m.field = Some(slot.field);
                    m.match_day = Some(day.day);
                }
            }
        }

        info!(
            matches = matches.len(),
            match_days = match_days.len(),
            "tournament generated"
        );

        self.matches = matches;
        self.match_days = match_days;
        self.knockout_bracket = bracket;
    }

    /// Drop the schedule and zero every team's statistics. Roster and
    /// groups stay.
    pub fn reset(&mut self) {
        self.clear_results();
        info!("tournament reset");
    }

    fn clear_results(&mut self) {
        self.matches.clear();
        self.match_days.clear();
        self.knockout_bracket = None;
        for team in &mut self.teams {
            team.stats = TeamStats::default();
        }
    }

    fn ledger(&self) -> MatchScoreLedger {
        MatchScoreLedger::new(self.settings.scoring)
    }

    fn match_index(&self, id: MatchId) -> Result<usize> {
        self.matches
            .iter()
            .position(|m| m.id == id)
            .ok_or(TournamentError::UnknownMatch(id))
    }

    /// Record a final score, replacing any earlier one
    pub fn set_score(&mut self, id: MatchId, home: u32, away: u32) -> Result<()> {
        let index = self.match_index(id)?;
        let ledger = self.ledger();
        ledger.set_score(&mut self.matches[index], &mut self.teams, home, away)
    }

    /// [`set_score`](Self::set_score) for scores typed as text
    pub fn set_score_input(&mut self, id: MatchId, home: &str, away: &str) -> Result<()> {
        let home = parse_score(home)?;
        let away = parse_score(away)?;
        self.set_score(id, home, away)
    }

    pub fn start_match(&mut self, id: MatchId) -> Result<()> {
        let index = self.match_index(id)?;
        self.ledger().start_match(&mut self.matches[index])
    }

    pub fn update_live_score(&mut self, id: MatchId, side: Side, score: u32) -> Result<()> {
        let index = self.match_index(id)?;
        self.ledger()
            .update_live_score(&mut self.matches[index], side, score)
    }

    pub fn finish_match(&mut self, id: MatchId) -> Result<()> {
        let index = self.match_index(id)?;
        let ledger = self.ledger();
        ledger.finish_match(&mut self.matches[index], &mut self.teams)
    }

    /// The current table of one group
    pub fn standings(&self, group: GroupId) -> Option<Vec<StandingRow>> {
        let group = self.groups.iter().find(|g| g.id == group)?;
        Some(StandingsCalculator::rank(group, &self.teams))
    }

    /// Qualifiers under the current standings: the top teams of each group
    /// for a hybrid tournament, the whole roster for a pure knockout.
    pub fn qualifiers(&self) -> Vec<TeamId> {
        match self.format {
            Format::Both => KnockoutBracketBuilder::qualifiers_from_groups(
                &self.groups,
                &self.teams,
                self.settings.teams_advancing,
            ),
            Format::Knockout => KnockoutBracketBuilder::qualifiers_from_roster(&self.teams),
            Format::Group => Vec::new(),
        }
    }

    /// Re-seed the bracket from the current standings. Knockout fixtures
    /// are left alone. Does nothing before generation or without a knockout
    /// stage.
    pub fn refresh_bracket(&mut self) -> Option<&KnockoutBracket> {
        self.knockout_bracket.as_ref()?;
        let bracket = KnockoutBracketBuilder::build_bracket(self.qualifiers());
        self.knockout_bracket = Some(bracket);
        self.knockout_bracket.as_ref()
    }

    pub fn schedule_table(&self) -> Vec<ScheduleRow> {
        tables::schedule_rows(&self.match_days, &self.matches, &self.teams, &self.groups)
    }

    pub fn standings_table(&self) -> Vec<StandingsTableRow> {
        tables::standings_rows(&self.groups, &self.teams)
    }

    pub fn statistics(&self) -> TournamentStatistics {
        summary::statistics(&self.matches)
    }

    pub fn overview(&self) -> ScheduleOverview {
        summary::schedule_overview(&self.settings)
    }
}

#[cfg(test)]
#[path = "tournament_tests.rs"]
mod tournament_tests;
