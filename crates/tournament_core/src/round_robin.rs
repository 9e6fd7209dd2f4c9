//! Round-robin fixture generation using the circle method.
//!
//! One seat stays fixed while the others rotate around it. With `m` seats
//! every rotation produces `m / 2` pairings and `m - 1` rotations cover every
//! pair exactly once. Odd groups get an extra phantom seat; whoever faces the
//! phantom sits that rotation out.

use tracing::debug;

use crate::fixture::{Match, MatchId, MatchPhase, TeamSlot};
use crate::group::Group;
use crate::settings::RepeatMode;
use crate::team::TeamId;

/// One pairing of a single round-robin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pairing {
    /// Rotation index, starting at 1
    pub rotation: u32,
    pub home: TeamId,
    pub away: TeamId,
}

/// Generates the group-stage fixtures for one group at a time
#[derive(Debug, Clone)]
pub struct RoundRobinScheduler {
    rounds: u32,
    repeat_mode: RepeatMode,
    duration: u32,
}

impl RoundRobinScheduler {
    pub fn new(rounds: u32, repeat_mode: RepeatMode, duration: u32) -> Self {
        Self {
            rounds,
            repeat_mode,
            duration,
        }
    }

    /// Pairings of a single round-robin over `teams`, in rotation order.
    ///
    /// Fewer than two teams gives no pairings.
    pub fn pairings(teams: &[TeamId]) -> Vec<Pairing> {
        let n = teams.len();
        if n < 2 {
            return Vec::new();
        }

        // Seat `n` is the phantom when the group is odd
        let seats = if n % 2 == 0 { n } else { n + 1 };
        let fixed = seats - 1;
        let mut pairings = Vec::with_capacity(n * (n - 1) / 2);

        for i in 0..seats - 1 {
            for j in 0..seats / 2 {
                let home = if j == 0 { fixed } else { (i + j) % fixed };
                let away = (fixed - j + i) % fixed;
                if home >= n || away >= n {
                    continue;
                }
                pairings.push(Pairing {
                    rotation: i as u32 + 1,
                    home: teams[home],
                    away: teams[away],
                });
            }
        }

        pairings
    }

    /// All fixtures for `group` across every configured round.
    ///
    /// Ids are handed out from `next_id`, which is left pointing at the
    /// first unused id.
    pub fn schedule(&self, group: &Group, next_id: &mut MatchId) -> Vec<Match> {
        let pairings = Self::pairings(&group.teams);
        let mut fixtures = Vec::with_capacity(pairings.len() * self.rounds as usize);

        for round in 1..=self.rounds {
            let swap = self.repeat_mode == RepeatMode::Mirrored && round % 2 == 0;
            for pairing in &pairings {
                let (home, away) = if swap {
                    (pairing.away, pairing.home)
                } else {
                    (pairing.home, pairing.away)
                };
                fixtures.push(Match::scheduled(
                    *next_id,
                    MatchPhase::Group {
                        group: group.id,
                        round,
                        rotation: pairing.rotation,
                    },
                    TeamSlot::Team(home),
                    TeamSlot::Team(away),
                    self.duration,
                ));
                *next_id += 1;
            }
        }

        debug!(
            group = %group.name,
            teams = group.teams.len(),
            fixtures = fixtures.len(),
            "generated round-robin fixtures"
        );
        fixtures
    }
}

/// Matches a single round-robin over `n` teams produces
pub fn fixtures_per_round(n: u32) -> u32 {
    let n = u64::from(n);
    u32::try_from(n * n.saturating_sub(1) / 2).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[path = "round_robin_tests.rs"]
mod round_robin_tests;
