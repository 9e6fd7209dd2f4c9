use super::*;

fn stats(points: u32, goals_for: u32, goals_against: u32) -> TeamStats {
    TeamStats {
        points,
        goals_for,
        goals_against,
        goal_difference: goals_for as i64 - goals_against as i64,
        ..Default::default()
    }
}

fn team_with(id: TeamId, stats: TeamStats) -> Team {
    let mut team = Team::new(id, format!("Team {}", id));
    team.stats = stats;
    team
}

fn group_of(teams: &[Team]) -> Group {
    Group {
        id: 1,
        name: "Group A".to_string(),
        teams: teams.iter().map(|t| t.id).collect(),
    }
}

#[test]
fn test_points_rank_first() {
    let teams = vec![
        team_with(1, stats(3, 1, 5)),
        team_with(2, stats(6, 2, 2)),
        team_with(3, stats(0, 9, 0)),
    ];
    let table = StandingsCalculator::rank(&group_of(&teams), &teams);

    let order: Vec<TeamId> = table.iter().map(|row| row.team).collect();
    assert_eq!(order, vec![2, 1, 3]);
    assert_eq!(
        table.iter().map(|row| row.position).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(table[0].name, "Team 2");
}

#[test]
fn test_goal_difference_then_goals_scored() {
    let teams = vec![
        team_with(1, stats(4, 3, 2)),
        team_with(2, stats(4, 5, 2)),
        team_with(3, stats(4, 4, 1)),
    ];
    // 3 and 2 share a +3 difference; 2 scored more
    let order: Vec<TeamId> = StandingsCalculator::rank(&group_of(&teams), &teams)
        .iter()
        .map(|row| row.team)
        .collect();
    assert_eq!(order, vec![2, 3, 1]);
}

#[test]
fn test_full_tie_keeps_group_order() {
    let teams = vec![
        team_with(4, stats(1, 2, 2)),
        team_with(7, stats(1, 2, 2)),
        team_with(5, stats(1, 2, 2)),
    ];
    let order: Vec<TeamId> = StandingsCalculator::rank(&group_of(&teams), &teams)
        .iter()
        .map(|row| row.team)
        .collect();
    assert_eq!(order, vec![4, 7, 5]);
}

#[test]
fn test_compare_is_total_order_over_keys() {
    let a = stats(3, 2, 1);
    let b = stats(3, 2, 1);
    assert_eq!(StandingsCalculator::compare(&a, &b), Ordering::Equal);
    assert_eq!(
        StandingsCalculator::compare(&stats(3, 0, 0), &stats(1, 0, 0)),
        Ordering::Less
    );
    assert_eq!(
        StandingsCalculator::compare(&stats(1, 0, 3), &stats(1, 0, 0)),
        Ordering::Greater
    );
}

#[test]
fn test_unknown_members_are_skipped() {
    let teams = vec![team_with(1, stats(0, 0, 0)), team_with(2, stats(3, 1, 0))];
    let group = Group {
        id: 1,
        name: "Group A".to_string(),
        teams: vec![1, 2, 99],
    };
    let table = StandingsCalculator::rank(&group, &teams);
    assert_eq!(table.len(), 2);
}

#[test]
fn test_top() {
    let teams = vec![
        team_with(1, stats(0, 0, 3)),
        team_with(2, stats(6, 4, 0)),
        team_with(3, stats(3, 2, 2)),
        team_with(4, stats(3, 1, 3)),
    ];
    let group = group_of(&teams);
    assert_eq!(StandingsCalculator::top(&group, &teams, 2), vec![2, 3]);
    assert_eq!(StandingsCalculator::top(&group, &teams, 10).len(), 4);
    assert!(StandingsCalculator::top(&group, &teams, 0).is_empty());
}
