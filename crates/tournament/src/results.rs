//! Tournament results storage and reporting

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tournament_core::{
    group_stage_summary, knockout_summary, KnockoutBracket, ScheduleOverview, ScheduleRow,
    StandingsTableRow, Tournament, TournamentSettings, TournamentStatistics, SCHEDULE_COLUMNS,
    STANDINGS_COLUMNS,
};

use crate::match_runner::SimulationResult;

/// Snapshot of a tournament for reports and files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    /// Configuration used
    pub settings: TournamentSettings,
    pub schedule: Vec<ScheduleRow>,
    pub standings: Vec<StandingsTableRow>,
    pub bracket: Option<KnockoutBracket>,
    pub overview: ScheduleOverview,
    pub statistics: TournamentStatistics,
    /// Present when the scores were simulated
    pub simulation: Option<SimulationResult>,
}

impl TournamentResults {
    pub fn new(name: &str, tournament: &Tournament) -> Self {
        Self {
            name: name.to_string(),
            settings: tournament.settings().clone(),
            schedule: tournament.schedule_table(),
            standings: tournament.standings_table(),
            bracket: tournament.knockout_bracket().cloned(),
            overview: tournament.overview(),
            statistics: tournament.statistics(),
            simulation: None,
        }
    }

    pub fn with_simulation(mut self, simulation: SimulationResult) -> Self {
        self.simulation = Some(simulation);
        self
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize results")?;
        std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn write_schedule_csv(&self, path: &Path) -> Result<()> {
        write_csv(
            path,
            &SCHEDULE_COLUMNS,
            self.schedule.iter().map(ScheduleRow::to_record),
        )
    }

    pub fn write_standings_csv(&self, path: &Path) -> Result<()> {
        write_csv(
            path,
            &STANDINGS_COLUMNS,
            self.standings.iter().map(StandingsTableRow::to_record),
        )
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&self.planning_section());

        report.push_str("Schedule:\n");
        report.push_str(&format!(
            "{:>3} {:>5}  {:<26} {:<16} {:>5}  {:<16} {:<11}\n",
            "Day", "Field", "Group/Round", "Home", "Score", "Away", "Status"
        ));
        report.push_str(&"-".repeat(90));
        report.push('\n');
        for row in &self.schedule {
            let score = match (row.home_score, row.away_score) {
                (Some(h), Some(a)) => format!("{}-{}", h, a),
                _ => "-".to_string(),
            };
            report.push_str(&format!(
                "{:>3} {:>5}  {:<26} {:<16} {:>5}  {:<16} {:<11}\n",
                row.match_day,
                row.field,
                row.group_round,
                row.home_team,
                score,
                row.away_team,
                row.status
            ));
        }

        if !self.standings.is_empty() {
            report.push_str("\nStandings:\n");
            let mut current_group = "";
            for row in &self.standings {
                if row.group != current_group {
                    current_group = row.group.as_str();
                    report.push_str(&format!(
                        "\n{:<10} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}\n",
                        current_group, "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
                    ));
                }
                report.push_str(&format!(
                    "{:>2}. {:<6} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+4} {:>4}\n",
                    row.position,
                    row.team,
                    row.played,
                    row.wins,
                    row.draws,
                    row.losses,
                    row.goals_for,
                    row.goals_against,
                    row.goal_difference,
                    row.points
                ));
            }
        }

        if let Some(bracket) = &self.bracket {
            report.push_str(&format!(
                "\nKnockout bracket: {} qualifiers, size {}, {} byes\n",
                bracket.teams.len(),
                bracket.size,
                bracket.byes
            ));
        }

        if self.statistics.completed_matches > 0 {
            report.push_str(&format!(
                "\nCompleted: {} matches, {} goals ({:.2} per match)\n",
                self.statistics.completed_matches,
                self.statistics.total_goals,
                self.statistics.average_goals
            ));
        }
        if let Some(sim) = &self.simulation {
            report.push_str(&format!(
                "Simulated: {} home wins, {} away wins, {} draws\n",
                sim.home_wins, sim.away_wins, sim.draws
            ));
        }

        report
    }

    fn planning_section(&self) -> String {
        let mut section = String::new();
        if let Some(group) = group_stage_summary(&self.settings) {
            section.push_str(&format!(
                "Group stage: {} teams per group, {} games per team, {} games, ~{} min\n",
                group.teams_per_group,
                group.games_per_team,
                group.total_games,
                group.estimated_minutes
            ));
        }
        if let Some(knockout) = knockout_summary(&self.settings) {
            section.push_str(&format!(
                "Knockout stage: {} matches, ~{} min\n",
                knockout.total_matches, knockout.estimated_minutes
            ));
        }
        section.push_str(&format!(
            "Overview: {} matches, {} per field, ~{} min\n",
            self.overview.total_matches,
            self.overview.matches_per_field,
            self.overview.estimated_minutes
        ));
        if self.overview.fields_below_groups {
            section.push_str("Warning: fewer fields than groups, groups will wait on each other\n");
        }
        section.push('\n');
        section
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

fn write_csv<I>(path: &Path, header: &[&str], records: I) -> Result<()>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    writer.write_record(header)?;
    for record in records {
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
