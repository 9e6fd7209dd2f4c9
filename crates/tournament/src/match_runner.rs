//! Dry-run simulation: plays the group stage with random scores

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use tournament_core::{MatchId, Side, StageTag, Tournament, TournamentError};

/// Configuration for a simulated run
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Highest number of goals a side can score
    pub max_goals: u32,
    /// Seed for reproducible runs (None = from entropy)
    pub seed: Option<u64>,
    /// Print every result while simulating
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_goals: 4,
            seed: None,
            verbose: true,
        }
    }
}

/// Tally of a simulated run, from the home sides' perspective
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub played: u32,
    pub home_wins: u32,
    pub away_wins: u32,
    pub draws: u32,
    pub goals: u32,
}

impl SimulationResult {
    fn record(&mut self, home: u32, away: u32) {
        self.played += 1;
        self.goals = self.goals.saturating_add(home).saturating_add(away);
        match home.cmp(&away) {
            std::cmp::Ordering::Greater => self.home_wins += 1,
            std::cmp::Ordering::Less => self.away_wins += 1,
            std::cmp::Ordering::Equal => self.draws += 1,
        }
    }
}

/// Plays out unfinished group matches of a generated tournament
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Simulate every group match that is not yet completed, then re-seed
    /// the knockout bracket from the final tables.
    ///
    /// Each match goes through the live lifecycle (start, live score,
    /// finish). Knockout fixtures are placeholders and stay untouched.
    pub fn run(&self, tournament: &mut Tournament) -> Result<SimulationResult, TournamentError> {
        let mut rng = self.rng();
        let mut result = SimulationResult::default();

        let pending: Vec<MatchId> = tournament
            .matches()
            .iter()
            .filter(|m| m.stage() == StageTag::Group && !m.is_completed())
            .map(|m| m.id)
            .collect();

        for (n, id) in pending.iter().enumerate() {
            let home = rng.gen_range(0..=self.config.max_goals);
            let away = rng.gen_range(0..=self.config.max_goals);
            self.play_match(tournament, *id, home, away)?;
            result.record(home, away);

            if self.config.verbose {
                println!(
                    "Match {}/{}: #{} ended {}-{}",
                    n + 1,
                    pending.len(),
                    id,
                    home,
                    away
                );
            }
        }

        if let Some(bracket) = tournament.refresh_bracket() {
            debug!(qualifiers = bracket.teams.len(), "bracket re-seeded");
        }

        info!(
            played = result.played,
            goals = result.goals,
            "simulation finished"
        );
        Ok(result)
    }

    fn play_match(
        &self,
        tournament: &mut Tournament,
        id: MatchId,
        home: u32,
        away: u32,
    ) -> Result<(), TournamentError> {
        tournament.start_match(id)?;
        tournament.update_live_score(id, Side::Home, home)?;
        tournament.update_live_score(id, Side::Away, away)?;
        tournament.finish_match(id)
    }
}

/// Quick utility to simulate with a fixed seed and no output
pub fn quick_simulation(
    tournament: &mut Tournament,
    seed: u64,
) -> Result<SimulationResult, TournamentError> {
    let config = MatchConfig {
        seed: Some(seed),
        verbose: false,
        ..Default::default()
    };
    MatchRunner::new(config).run(tournament)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
