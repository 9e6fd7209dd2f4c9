//! Errors reported by the scheduling engine.
//!
//! Every failure is a synchronous validation error. Operations check their
//! inputs before touching state, so an `Err` always leaves the tournament
//! exactly as it was.

use thiserror::Error;

use crate::fixture::{MatchId, MatchStatus};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TournamentError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },

    #[error("missing required selection: {0}")]
    MissingSelection(&'static str),

    #[error("invalid score `{0}`: expected whole numbers of at least 0 that keep team totals in range")]
    InvalidScore(String),

    #[error("unknown match id {0}")]
    UnknownMatch(MatchId),

    #[error("match {id} is {status} and cannot be {action}")]
    InvalidTransition {
        id: MatchId,
        status: MatchStatus,
        action: &'static str,
    },

    #[error("invalid start time `{0}`: expected HH:MM")]
    InvalidStartTime(String),
}

impl TournamentError {
    pub(crate) fn out_of_range(field: &'static str, min: i64, max: i64, value: i64) -> Self {
        TournamentError::OutOfRange {
            field,
            min,
            max,
            value,
        }
    }
}

pub type Result<T> = std::result::Result<T, TournamentError>;
