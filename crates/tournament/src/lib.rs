//! Tournament Runner
//!
//! This crate provides infrastructure for:
//! - Loading tournament settings from TOML
//! - Simulating group-stage scores for dry runs
//! - Generating text, CSV and JSON reports
//!
//! # Usage
//!
//! ```bash
//! # Print the schedule and write it as CSV
//! cargo run -p tournament -- plan demos/summer_cup.toml --out schedule.csv
//!
//! # Play the group stage with random scores
//! cargo run -p tournament -- simulate demos/summer_cup.toml --seed 7 --save results.json
//! ```

mod config;
mod match_runner;
mod results;
mod telemetry;

pub use config::*;
pub use match_runner::*;
pub use results::*;
pub use telemetry::*;
