//! Scheduling engine for group and knockout tournaments.
//!
//! This crate provides:
//! - Round-robin fixtures for every group (circle method)
//! - Group tables with points / goal difference / goals scored tie-breaks
//! - Knockout bracket sizing, byes and a placeholder stage skeleton
//! - Packing fixtures onto parallel fields and sequential match days
//! - Score entry that keeps team statistics consistent across edits
//!
//! # Usage
//!
//! ```
//! use tournament_core::{Format, Tournament, TournamentSettings};
//!
//! let settings = TournamentSettings {
//!     num_teams: 6,
//!     players_per_team: 5,
//!     format: Some(Format::Group),
//!     num_groups: 2,
//!     group_game_duration: 20,
//!     num_fields: 2,
//!     ..Default::default()
//! };
//!
//! let mut tournament = Tournament::new(settings).unwrap();
//! tournament.generate();
//! assert_eq!(tournament.matches().len(), 6);
//! assert_eq!(tournament.match_days().len(), 3);
//!
//! tournament.set_score(1, 2, 1).unwrap();
//! ```

pub mod error;
pub mod fixture;
pub mod group;
pub mod knockout;
pub mod ledger;
pub mod match_day;
pub mod round_robin;
pub mod settings;
pub mod standings;
pub mod summary;
pub mod tables;
pub mod team;
pub mod tournament;

pub use error::TournamentError;
pub use fixture::*;
pub use group::*;
pub use knockout::*;
pub use ledger::*;
pub use match_day::*;
pub use round_robin::*;
pub use settings::*;
pub use standings::*;
pub use summary::*;
pub use tables::*;
pub use team::*;
pub use tournament::*;
