use super::*;
use tournament_core::{Format, KnockoutStage, MatchFormat};

const SAMPLE: &str = r#"
name = "Summer Cup"

[settings]
num_teams = 8
players_per_team = 6
format = "both"
num_groups = 2
teams_advancing = 2
group_game_duration = 20
knockout_game_duration = 30
num_fields = 2
knockout_stages = ["semis", "third-place", "final"]
match_format = "two-leg"
start_time = "09:00"
team_names = ["Lions", "Tigers"]

[settings.scoring]
win = 2
"#;

#[test]
fn test_parse_sample() {
    let config = TournamentConfig::parse(SAMPLE).unwrap();
    assert_eq!(config.name, "Summer Cup");

    let settings = &config.settings;
    assert_eq!(settings.num_teams, 8);
    assert_eq!(settings.format, Some(Format::Both));
    assert_eq!(settings.match_format, MatchFormat::TwoLeg);
    assert_eq!(settings.knockout_stages[1], KnockoutStage::ThirdPlace);
    assert_eq!(settings.scoring.win, 2);
    assert_eq!(settings.scoring.draw, 1);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_defaults() {
    let config = TournamentConfig::parse("").unwrap();
    assert_eq!(config.name, "Tournament");
    assert_eq!(config.settings.format, None);
    assert!(config.settings.validate().is_err());
}

#[test]
fn test_bad_config() {
    assert!(TournamentConfig::parse("[settings]\nformat = \"league\"").is_err());
    assert!(TournamentConfig::load(Path::new("does/not/exist.toml")).is_err());
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cup.toml");
    std::fs::write(&path, SAMPLE).unwrap();

    let config = TournamentConfig::load(&path).unwrap();
    assert_eq!(config.settings.team_names, vec!["Lions", "Tigers"]);
}
