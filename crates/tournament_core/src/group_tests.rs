use super::*;

fn roster(n: u32) -> Vec<Team> {
    (1..=n).map(|id| Team::new(id, format!("Team {}", id))).collect()
}

#[test]
fn test_assign_deals_round_robin() {
    let mut teams = roster(7);
    let groups = GroupAssigner::assign(&mut teams, 3).unwrap();

    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].teams, vec![1, 4, 7]);
    assert_eq!(groups[1].teams, vec![2, 5]);
    assert_eq!(groups[2].teams, vec![3, 6]);
    assert_eq!(teams[3].group(), Some(1));
    assert_eq!(teams[4].group(), Some(2));
}

#[test]
fn test_groups_partition_roster() {
    let mut teams = roster(20);
    let groups = GroupAssigner::assign(&mut teams, 6).unwrap();

    let mut seen: Vec<TeamId> = groups.iter().flat_map(|g| g.teams.clone()).collect();
    seen.sort();
    assert_eq!(seen, (1..=20).collect::<Vec<_>>());

    for team in &teams {
        let group = team.group().unwrap();
        assert!(groups[group as usize - 1].teams.contains(&team.id));
    }
}

#[test]
fn test_group_names() {
    let mut teams = roster(4);
    let groups = GroupAssigner::assign(&mut teams, 2).unwrap();
    assert_eq!(groups[0].name, "Group A");
    assert_eq!(groups[1].name, "Group B");

    assert_eq!(group_letters(26), "Z");
    assert_eq!(group_letters(27), "AA");
    assert_eq!(group_letters(32), "AF");
}

#[test]
fn test_assign_rejects_bad_counts() {
    let mut teams = roster(6);
    assert!(GroupAssigner::assign(&mut teams, 0).is_err());
    assert!(GroupAssigner::assign(&mut teams, 4).is_err());
    // Nothing was assigned by the failed calls
    assert!(teams.iter().all(|t| t.group().is_none()));

    assert!(GroupAssigner::assign(&mut teams, 3).is_ok());
}

#[test]
fn test_suggest_group_count() {
    assert_eq!(suggest_group_count(2), 1);
    assert_eq!(suggest_group_count(4), 2);
    assert_eq!(suggest_group_count(10), 4);
    assert_eq!(suggest_group_count(16), 4);
    assert_eq!(suggest_group_count(64), 8);
}
