use super::*;
use tournament_core::{Format, KnockoutStage, MatchStatus, TournamentSettings};

fn tournament() -> Tournament {
    let settings = TournamentSettings {
        num_teams: 8,
        players_per_team: 5,
        format: Some(Format::Both),
        num_groups: 2,
        teams_advancing: 2,
        group_game_duration: 20,
        knockout_game_duration: 30,
        num_fields: 2,
        knockout_stages: vec![KnockoutStage::Semis, KnockoutStage::Final],
        ..Default::default()
    };
    let mut tournament = Tournament::new(settings).unwrap();
    tournament.generate();
    tournament
}

#[test]
fn test_simulation_completes_group_stage() {
    let mut tournament = tournament();
    let result = quick_simulation(&mut tournament, 11).unwrap();

    assert_eq!(result.played, 12);
    assert_eq!(result.home_wins + result.away_wins + result.draws, 12);
    for m in tournament.matches() {
        match m.stage() {
            StageTag::Group => assert_eq!(m.status, MatchStatus::Completed),
            StageTag::Knockout => assert_eq!(m.status, MatchStatus::Scheduled),
        }
    }
    assert_eq!(tournament.statistics().total_goals, result.goals);
    assert_eq!(tournament.knockout_bracket().unwrap().teams.len(), 4);
}

#[test]
fn test_same_seed_same_results() {
    let mut first = tournament();
    let mut second = tournament();
    quick_simulation(&mut first, 5).unwrap();
    quick_simulation(&mut second, 5).unwrap();

    assert_eq!(first.matches(), second.matches());
}

#[test]
fn test_scores_respect_max_goals() {
    let mut tournament = tournament();
    let config = MatchConfig {
        max_goals: 1,
        seed: Some(9),
        verbose: false,
    };
    MatchRunner::new(config).run(&mut tournament).unwrap();

    for m in tournament.matches().iter().filter_map(|m| m.score()) {
        assert!(m.0 <= 1 && m.1 <= 1);
    }
}

#[test]
fn test_completed_matches_are_kept() {
    let mut tournament = tournament();
    tournament.set_score(1, 7, 0).unwrap();

    let result = quick_simulation(&mut tournament, 1).unwrap();
    assert_eq!(result.played, 11);
    assert_eq!(tournament.find_match(1).unwrap().score(), Some((7, 0)));
}
