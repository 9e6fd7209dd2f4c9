//! Score entry and the team statistics it drives.
//!
//! A group result is a pair of [`StatDelta`]s, one per team. Re-scoring a
//! completed match reverts the old pair before applying the new one, and
//! `revert` is the exact inverse of `apply`, so any sequence of edits leaves
//! the table as if only the final scores had ever been entered.

use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::error::{Result, TournamentError};
use crate::fixture::{Match, MatchStatus, Side, StageTag, TeamSlot};
use crate::settings::ScoringRule;
use crate::team::{find_team, Team, TeamStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    pub fn of(scored: u32, conceded: u32) -> Self {
        match scored.cmp(&conceded) {
            Ordering::Greater => Outcome::Win,
            Ordering::Equal => Outcome::Draw,
            Ordering::Less => Outcome::Loss,
        }
    }
}

/// What one result adds to one team's statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatDelta {
    pub goals_for: u32,
    pub goals_against: u32,
    pub outcome: Outcome,
    pub points: u32,
}

impl StatDelta {
    pub fn new(scored: u32, conceded: u32, scoring: &ScoringRule) -> Self {
        let outcome = Outcome::of(scored, conceded);
        let points = match outcome {
            Outcome::Win => scoring.win,
            Outcome::Draw => scoring.draw,
            Outcome::Loss => scoring.loss,
        };
        Self {
            goals_for: scored,
            goals_against: conceded,
            outcome,
            points,
        }
    }

    pub fn apply(&self, stats: &mut TeamStats) {
        stats.played += 1;
        stats.goals_for += self.goals_for;
        stats.goals_against += self.goals_against;
        stats.points += self.points;
        *self.outcome_counter(stats) += 1;
        stats.goal_difference = stats.goals_for as i64 - stats.goals_against as i64;
    }

    /// `stats` with this delta applied, or `None` if a counter would overflow
    pub fn checked_apply(&self, stats: &TeamStats) -> Option<TeamStats> {
        let mut next = *stats;
        next.played = next.played.checked_add(1)?;
        next.goals_for = next.goals_for.checked_add(self.goals_for)?;
        next.goals_against = next.goals_against.checked_add(self.goals_against)?;
        next.points = next.points.checked_add(self.points)?;
        let counter = self.outcome_counter(&mut next);
        *counter = counter.checked_add(1)?;
        next.goal_difference = next.goals_for as i64 - next.goals_against as i64;
        Some(next)
    }

    /// Undo a previous [`apply`](Self::apply) of the same delta
    pub fn revert(&self, stats: &mut TeamStats) {
        stats.played -= 1;
        stats.goals_for -= self.goals_for;
        stats.goals_against -= self.goals_against;
        stats.points -= self.points;
        *self.outcome_counter(stats) -= 1;
        stats.goal_difference = stats.goals_for as i64 - stats.goals_against as i64;
    }

    fn outcome_counter<'a>(&self, stats: &'a mut TeamStats) -> &'a mut u32 {
        match self.outcome {
            Outcome::Win => &mut stats.wins,
            Outcome::Draw => &mut stats.draws,
            Outcome::Loss => &mut stats.losses,
        }
    }
}

/// Records results and keeps team statistics in step with them
#[derive(Debug, Clone)]
pub struct MatchScoreLedger {
    scoring: ScoringRule,
}

impl MatchScoreLedger {
    pub fn new(scoring: ScoringRule) -> Self {
        Self { scoring }
    }

    pub fn scoring(&self) -> &ScoringRule {
        &self.scoring
    }

    /// Store a final score for `m` and mark it completed.
    ///
    /// Group matches update both teams' statistics, first reverting the
    /// previous result if the match was already completed. Knockout matches
    /// only record the winner. A score that would overflow either team's
    /// totals is rejected before anything changes.
    pub fn set_score(
        &self,
        m: &mut Match,
        teams: &mut [Team],
        home: u32,
        away: u32,
    ) -> Result<()> {
        match m.stage() {
            StageTag::Group => self.record_group_result(m, teams, home, away)?,
            StageTag::Knockout => {
                m.winner = match home.cmp(&away) {
                    Ordering::Greater => Some(m.home),
                    Ordering::Less => Some(m.away),
                    Ordering::Equal => None,
                };
            }
        }

        m.home_score = Some(home);
        m.away_score = Some(away);
        m.status = MatchStatus::Completed;
        debug!(match_id = m.id, home, away, "recorded score");
        Ok(())
    }

    fn record_group_result(
        &self,
        m: &Match,
        teams: &mut [Team],
        home: u32,
        away: u32,
    ) -> Result<()> {
        let previous = match (m.is_completed(), m.score()) {
            (true, Some((old_home, old_away))) => Some(self.deltas(old_home, old_away)),
            _ => None,
        };
        let (home_delta, away_delta) = self.deltas(home, away);

        let new_home = self.next_stats(
            teams,
            m.home,
            previous.as_ref().map(|(delta, _)| delta),
            &home_delta,
        );
        let new_away = self.next_stats(
            teams,
            m.away,
            previous.as_ref().map(|(_, delta)| delta),
            &away_delta,
        );
        let (Some(new_home), Some(new_away)) = (new_home, new_away) else {
            warn!(match_id = m.id, home, away, "score would overflow team totals");
            return Err(TournamentError::InvalidScore(format!("{}-{}", home, away)));
        };

        self.store(teams, m.home, new_home);
        self.store(teams, m.away, new_away);
        Ok(())
    }

    /// Deltas for the home and the away team
    pub fn deltas(&self, home: u32, away: u32) -> (StatDelta, StatDelta) {
        (
            StatDelta::new(home, away, &self.scoring),
            StatDelta::new(away, home, &self.scoring),
        )
    }

    /// The statistics `slot` would hold after swapping `old` for `new`.
    ///
    /// `Some(None)` means there is no team to update; `None` means overflow.
    fn next_stats(
        &self,
        teams: &[Team],
        slot: TeamSlot,
        old: Option<&StatDelta>,
        new: &StatDelta,
    ) -> Option<Option<TeamStats>> {
        let Some(team) = slot.team().and_then(|id| find_team(teams, id)) else {
            if let Some(id) = slot.team() {
                warn!(team = id, "score refers to a team outside the roster");
            }
            return Some(None);
        };
        let mut stats = team.stats;
        if let Some(old) = old {
            old.revert(&mut stats);
        }
        new.checked_apply(&stats).map(Some)
    }

    fn store(&self, teams: &mut [Team], slot: TeamSlot, stats: Option<TeamStats>) {
        let (Some(id), Some(stats)) = (slot.team(), stats) else {
            return;
        };
        if let Some(team) = teams.iter_mut().find(|t| t.id == id) {
            team.stats = stats;
        }
    }

    /// Kick off a scheduled match at 0-0. Statistics are untouched until it
    /// is finished.
    pub fn start_match(&self, m: &mut Match) -> Result<()> {
        if m.status == MatchStatus::Completed {
            return Err(TournamentError::InvalidTransition {
                id: m.id,
                status: m.status,
                action: "started",
            });
        }
        m.status = MatchStatus::InProgress;
        m.home_score = Some(0);
        m.away_score = Some(0);
        Ok(())
    }

    /// Change one side's running score of a match in progress
    pub fn update_live_score(&self, m: &mut Match, side: Side, score: u32) -> Result<()> {
        if m.status != MatchStatus::InProgress {
            return Err(TournamentError::InvalidTransition {
                id: m.id,
                status: m.status,
                action: "updated live",
            });
        }
        match side {
            Side::Home => m.home_score = Some(score),
            Side::Away => m.away_score = Some(score),
        }
        Ok(())
    }

    /// Complete a match in progress with its running score
    pub fn finish_match(&self, m: &mut Match, teams: &mut [Team]) -> Result<()> {
        if m.status != MatchStatus::InProgress {
            return Err(TournamentError::InvalidTransition {
                id: m.id,
                status: m.status,
                action: "finished",
            });
        }
        let home = m.home_score.unwrap_or(0);
        let away = m.away_score.unwrap_or(0);
        self.set_score(m, teams, home, away)
    }
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod ledger_tests;
