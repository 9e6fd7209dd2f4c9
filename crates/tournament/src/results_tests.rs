use super::*;
use crate::match_runner::quick_simulation;
use tournament_core::{Format, KnockoutStage};

fn simulated() -> (Tournament, SimulationResult) {
    let settings = TournamentSettings {
        num_teams: 6,
        players_per_team: 5,
        format: Some(Format::Both),
        num_groups: 2,
        teams_advancing: 2,
        group_game_duration: 20,
        knockout_game_duration: 30,
        num_fields: 1,
        knockout_stages: vec![KnockoutStage::Semis, KnockoutStage::Final],
        team_names: vec!["Lions".to_string()],
        ..Default::default()
    };
    let mut tournament = Tournament::new(settings).unwrap();
    tournament.generate();
    let sim = quick_simulation(&mut tournament, 21).unwrap();
    (tournament, sim)
}

#[test]
fn test_snapshot_contents() {
    let (tournament, sim) = simulated();
    let results = TournamentResults::new("Cup", &tournament).with_simulation(sim);

    assert_eq!(results.schedule.len(), 9);
    assert_eq!(results.standings.len(), 6);
    assert_eq!(results.bracket.as_ref().map(|b| b.size), Some(4));
    assert_eq!(results.statistics.completed_matches, 6);
    assert_eq!(results.simulation, Some(sim));
}

#[test]
fn test_report_sections() {
    let (tournament, sim) = simulated();
    let report = TournamentResults::new("Cup", &tournament)
        .with_simulation(sim)
        .generate_report();

    assert!(report.starts_with("=== Tournament: Cup ==="));
    assert!(report.contains("Group stage: 3 teams per group"));
    assert!(report.contains("Knockout stage: 3 matches"));
    assert!(report.contains("Warning: fewer fields than groups"));
    assert!(report.contains("Semi-finals"));
    assert!(report.contains("Lions"));
    assert!(report.contains("Knockout bracket: 4 qualifiers, size 4, 0 byes"));
}

#[test]
fn test_save_and_load() {
    let (tournament, _) = simulated();
    let results = TournamentResults::new("Cup", &tournament);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.json");
    results.save(&path).unwrap();

    let loaded = TournamentResults::load(&path).unwrap();
    assert_eq!(loaded.name, "Cup");
    assert_eq!(loaded.schedule, results.schedule);
    assert_eq!(loaded.standings, results.standings);
}

#[test]
fn test_csv_output() {
    let (tournament, _) = simulated();
    let results = TournamentResults::new("Cup", &tournament);
    let dir = tempfile::tempdir().unwrap();

    let schedule = dir.path().join("schedule.csv");
    results.write_schedule_csv(&schedule).unwrap();
    let contents = std::fs::read_to_string(&schedule).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next(),
        Some("MatchDay,Field,Stage,Group/Round,HomeTeam,AwayTeam,HomeScore,AwayScore,Duration,Status")
    );
    assert_eq!(lines.count(), 9);
    assert!(contents.contains("Knockout,Final,TBD,TBD,,,30,Scheduled"));

    let standings = dir.path().join("standings.csv");
    results.write_standings_csv(&standings).unwrap();
    let contents = std::fs::read_to_string(&standings).unwrap();
    assert!(contents.starts_with(
        "Group,Position,Team,Played,Wins,Draws,Losses,GoalsFor,GoalsAgainst,GoalDifference,Points"
    ));
    assert_eq!(contents.lines().count(), 7);
}

#[test]
fn test_load_missing_file() {
    assert!(TournamentResults::load(Path::new("no/such/results.json")).is_err());
}
