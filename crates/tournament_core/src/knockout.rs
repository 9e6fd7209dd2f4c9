//! Knockout bracket sizing and the stage skeleton.
//!
//! The skeleton is placeholders only: every knockout fixture starts as
//! TBD vs TBD and nothing feeds a stage's winners into the next stage.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fixture::{Match, MatchId, MatchPhase, TeamSlot};
use crate::group::Group;
use crate::settings::MatchFormat;
use crate::standings::StandingsCalculator;
use crate::team::{Team, TeamId};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum KnockoutStage {
    Last32,
    Last16,
    Quarters,
    Semis,
    ThirdPlace,
    Final,
}

impl KnockoutStage {
    /// Order in which stages are played
    pub const ELIMINATION_ORDER: [KnockoutStage; 6] = [
        KnockoutStage::Last32,
        KnockoutStage::Last16,
        KnockoutStage::Quarters,
        KnockoutStage::Semis,
        KnockoutStage::ThirdPlace,
        KnockoutStage::Final,
    ];

    pub fn teams_in_stage(self) -> u32 {
        match self {
            KnockoutStage::Last32 => 32,
            KnockoutStage::Last16 => 16,
            KnockoutStage::Quarters => 8,
            KnockoutStage::Semis => 4,
            KnockoutStage::ThirdPlace | KnockoutStage::Final => 2,
        }
    }

    /// Ties in the stage (a two-legged tie still counts once)
    pub fn ties(self) -> u32 {
        match self {
            KnockoutStage::ThirdPlace | KnockoutStage::Final => 1,
            _ => (self.teams_in_stage() / 2).max(1),
        }
    }

    /// Whether ties in this stage are split over two legs
    pub fn legs(self, format: MatchFormat) -> u32 {
        match (format, self) {
            (_, KnockoutStage::ThirdPlace | KnockoutStage::Final) => 1,
            (MatchFormat::TwoLeg, _) => 2,
            (MatchFormat::Single, _) => 1,
        }
    }

    /// Fixtures the stage contributes to the schedule
    pub fn fixture_count(self, format: MatchFormat) -> u32 {
        self.ties() * self.legs(format)
    }

    pub fn label(self) -> &'static str {
        match self {
            KnockoutStage::Last32 => "Round of 32",
            KnockoutStage::Last16 => "Round of 16",
            KnockoutStage::Quarters => "Quarter-finals",
            KnockoutStage::Semis => "Semi-finals",
            KnockoutStage::ThirdPlace => "Third-place play-off",
            KnockoutStage::Final => "Final",
        }
    }
}

impl fmt::Display for KnockoutStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// First-round pairing by seed; `low` is `None` when the top seed has a bye
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedPairing {
    pub high: TeamId,
    pub low: Option<TeamId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct KnockoutBracket {
    /// Smallest power of two holding every qualifier
    pub size: u32,
    pub byes: u32,
    /// Qualifiers in seeding order
    pub teams: Vec<TeamId>,
}

impl KnockoutBracket {
    pub fn new(qualifiers: Vec<TeamId>) -> Self {
        let size = bracket_size(qualifiers.len() as u32);
        Self {
            size,
            byes: size - qualifiers.len() as u32,
            teams: qualifiers,
        }
    }

    /// Highest seed against lowest, working inwards. Seeds beyond the
    /// qualifier count are byes, so the top `byes` seeds get a free pass.
    pub fn pairings(&self) -> Vec<SeedPairing> {
        let size = self.size as usize;
        (0..size / 2)
            .filter_map(|i| {
                let high = *self.teams.get(i)?;
                let low = self.teams.get(size - 1 - i).copied();
                Some(SeedPairing { high, low })
            })
            .collect()
    }
}

/// `2^ceil(log2(q))`, with at least one slot
pub fn bracket_size(qualifiers: u32) -> u32 {
    qualifiers.max(1).next_power_of_two()
}

pub struct KnockoutBracketBuilder;

impl KnockoutBracketBuilder {
    /// The top `advancing` teams of every group, group by group
    pub fn qualifiers_from_groups(groups: &[Group], teams: &[Team], advancing: u32) -> Vec<TeamId> {
        groups
            .iter()
            .flat_map(|group| StandingsCalculator::top(group, teams, advancing as usize))
            .collect()
    }

    /// Every team of the roster, in roster order
    pub fn qualifiers_from_roster(teams: &[Team]) -> Vec<TeamId> {
        teams.iter().map(|t| t.id).collect()
    }

    pub fn build_bracket(qualifiers: Vec<TeamId>) -> KnockoutBracket {
        let bracket = KnockoutBracket::new(qualifiers);
        debug!(
            qualifiers = bracket.teams.len(),
            size = bracket.size,
            byes = bracket.byes,
            "built knockout bracket"
        );
        bracket
    }

    /// Placeholder fixtures for the selected stages in elimination order.
    ///
    /// Two-legged stages emit every first leg before the second legs.
    pub fn skeleton(
        stages: &[KnockoutStage],
        format: MatchFormat,
        duration: u32,
        next_id: &mut MatchId,
    ) -> Vec<Match> {
        let mut fixtures = Vec::new();

        for stage in KnockoutStage::ELIMINATION_ORDER {
            if !stages.contains(&stage) {
                continue;
            }
            let legs = stage.legs(format);
            for leg in 1..=legs {
                for _ in 0..stage.ties() {
                    let leg = if legs > 1 { Some(leg as u8) } else { None };
                    fixtures.push(Match::scheduled(
                        *next_id,
                        MatchPhase::Knockout { stage, leg },
                        TeamSlot::Tbd,
                        TeamSlot::Tbd,
                        duration,
                    ));
                    *next_id += 1;
                }
            }
        }

        debug!(fixtures = fixtures.len(), "generated knockout skeleton");
        fixtures
    }
}

#[cfg(test)]
#[path = "knockout_tests.rs"]
mod knockout_tests;
