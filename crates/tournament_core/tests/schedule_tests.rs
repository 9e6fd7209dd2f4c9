//! End-to-end scheduling checks
//!
//! Exercises the public API the way a front end would:
//! - Round-robin coverage for many group sizes
//! - Match-day packing across groups and stages
//! - Score edits and the standings they produce

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tournament_core::{
    Format, KnockoutStage, MatchStatus, StageTag, TeamSlot, Tournament, TournamentSettings,
};

fn settings(num_teams: u32, num_groups: u32, num_fields: u32) -> TournamentSettings {
    TournamentSettings {
        num_teams,
        players_per_team: 5,
        format: Some(Format::Group),
        num_groups,
        group_game_duration: 15,
        num_fields,
        ..Default::default()
    }
}

fn generated(settings: TournamentSettings) -> Tournament {
    let mut tournament = Tournament::new(settings).unwrap();
    tournament.generate();
    tournament
}

// =============================================================================
// Round-robin coverage
// =============================================================================

#[test]
fn test_single_group_plays_every_pair_once() {
    for n in 2..=20 {
        let tournament = generated(settings(n, 1, 4));
        let pairs: HashSet<(u32, u32)> = tournament
            .matches()
            .iter()
            .map(|m| {
                let (h, a) = (m.home.team().unwrap(), m.away.team().unwrap());
                (h.min(a), h.max(a))
            })
            .collect();

        assert_eq!(tournament.matches().len() as u32, n * (n - 1) / 2, "n = {}", n);
        assert_eq!(pairs.len(), tournament.matches().len(), "n = {}", n);
    }
}

#[test]
fn test_matches_stay_inside_their_group() {
    let tournament = generated(settings(23, 5, 3));
    for m in tournament.matches() {
        let group = m.group().unwrap();
        for slot in [m.home, m.away] {
            let team = tournament.team(slot.team().unwrap()).unwrap();
            assert_eq!(team.group(), Some(group));
        }
    }
}

// =============================================================================
// Match-day packing
// =============================================================================

#[test]
fn test_six_teams_two_groups_two_fields() {
    let tournament = generated(settings(6, 2, 2));
    assert_eq!(tournament.matches().len(), 6);
    assert_eq!(tournament.match_days().len(), 3);
    assert!(tournament.match_days().iter().all(|d| d.matches.len() == 2));
}

#[test]
fn test_every_match_scheduled_once() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..25 {
        let n = rng.gen_range(2..=40);
        let g = rng.gen_range(1..=n / 2);
        let fields = rng.gen_range(1..=6);
        let tournament = generated(settings(n, g, fields));

        let scheduled: Vec<u32> = tournament
            .match_days()
            .iter()
            .flat_map(|d| d.matches.iter().map(|s| s.match_id))
            .collect();
        let unique: HashSet<u32> = scheduled.iter().copied().collect();
        assert_eq!(scheduled.len(), tournament.matches().len());
        assert_eq!(unique.len(), scheduled.len());

        for day in tournament.match_days() {
            assert!(day.matches.len() as u32 <= fields);
            for slot in &day.matches {
                assert!((1..=fields).contains(&slot.field));
            }
        }
        let days: Vec<u32> = tournament.match_days().iter().map(|d| d.day).collect();
        assert_eq!(days, (1..=days.len() as u32).collect::<Vec<_>>());
    }
}

#[test]
fn test_knockout_days_follow_group_days() {
    let settings = TournamentSettings {
        format: Some(Format::Both),
        teams_advancing: 2,
        knockout_game_duration: 25,
        knockout_stages: vec![
            KnockoutStage::Quarters,
            KnockoutStage::Semis,
            KnockoutStage::ThirdPlace,
            KnockoutStage::Final,
        ],
        start_time: Some("10:00".to_string()),
        ..settings(15, 4, 4)
    };
    let tournament = generated(settings);

    let stages: Vec<StageTag> = tournament.match_days().iter().map(|d| d.stage).collect();
    let first_knockout = stages.iter().position(|s| *s == StageTag::Knockout).unwrap();
    assert!(stages[..first_knockout].iter().all(|s| *s == StageTag::Group));
    assert!(stages[first_knockout..].iter().all(|s| *s == StageTag::Knockout));

    let kickoffs: Vec<_> = tournament
        .match_days()
        .iter()
        .map(|d| d.kickoff.unwrap())
        .collect();
    assert!(kickoffs.windows(2).all(|w| w[0] < w[1]));
}

// =============================================================================
// Scores and standings
// =============================================================================

#[test]
fn test_random_results_keep_statistics_consistent() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut tournament = generated(settings(12, 3, 3));
    let ids: Vec<u32> = tournament.matches().iter().map(|m| m.id).collect();

    // Score everything, then correct a few results
    for &id in &ids {
        tournament
            .set_score(id, rng.gen_range(0..5), rng.gen_range(0..5))
            .unwrap();
    }
    for _ in 0..10 {
        let id = ids[rng.gen_range(0..ids.len())];
        tournament
            .set_score(id, rng.gen_range(0..5), rng.gen_range(0..5))
            .unwrap();
    }

    let mut expected = vec![(0u32, 0u32, 0u32); 13];
    for m in tournament.matches() {
        let (h, a) = m.score().unwrap();
        let (home, away) = (m.home.team().unwrap(), m.away.team().unwrap());
        expected[home as usize].0 += 1;
        expected[home as usize].1 += h;
        expected[home as usize].2 += a;
        expected[away as usize].0 += 1;
        expected[away as usize].1 += a;
        expected[away as usize].2 += h;
    }

    for team in tournament.teams() {
        let stats = team.stats();
        assert!(stats.is_consistent());
        assert_eq!(
            (stats.played, stats.goals_for, stats.goals_against),
            expected[team.id as usize]
        );
    }
    assert_eq!(tournament.statistics().completed_matches, ids.len() as u32);
}

#[test]
fn test_standings_are_sorted() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut tournament = generated(settings(10, 2, 2));
    let ids: Vec<u32> = tournament.matches().iter().map(|m| m.id).collect();
    for id in ids {
        tournament
            .set_score(id, rng.gen_range(0..4), rng.gen_range(0..4))
            .unwrap();
    }

    for group in tournament.groups() {
        let table = tournament.standings(group.id).unwrap();
        assert_eq!(table.len(), group.teams.len());
        for pair in table.windows(2) {
            let (a, b) = (&pair[0].stats, &pair[1].stats);
            assert!(
                (a.points, a.goal_difference, a.goals_for)
                    >= (b.points, b.goal_difference, b.goals_for)
            );
        }
    }
}

#[test]
fn test_knockout_placeholders_survive_scoring() {
    let settings = TournamentSettings {
        format: Some(Format::Knockout),
        knockout_game_duration: 30,
        knockout_stages: vec![KnockoutStage::Final],
        ..settings(2, 0, 1)
    };
    let mut tournament = generated(settings);
    assert_eq!(tournament.matches().len(), 1);

    tournament.set_score(1, 2, 1).unwrap();
    let m = &tournament.matches()[0];
    assert_eq!(m.status, MatchStatus::Completed);
    assert_eq!(m.winner, Some(TeamSlot::Tbd));
    assert!(tournament.teams().iter().all(|t| t.stats().played == 0));
}
