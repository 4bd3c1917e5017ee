//! Integration tests for the group stage: schedule shape, standings and table order.

use football_tournament_sim::{
    group_qualifiers, matchday, simulate_next_round, start_tournament, Group, MatchPhase,
    RoundOutcome, SkillOverrides, Tournament, TournamentPhase, GROUP_ROUNDS, ROSTER_SIZE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

fn started_tournament(seed: u64) -> (Tournament, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut t = Tournament::new();
    for i in 0..16 {
        let name = format!("T{i}");
        t.add_team(name.as_str()).unwrap();
        for p in 0..ROSTER_SIZE {
            t.add_player(&name, "P", format!("{p}"), SkillOverrides::default(), &mut rng)
                .unwrap();
        }
    }
    start_tournament(&mut t, &mut rng).unwrap();
    (t, rng)
}

fn play_group_stage(t: &mut Tournament, rng: &mut StdRng) {
    for _ in 0..GROUP_ROUNDS {
        simulate_next_round(t, rng).unwrap();
    }
}

#[test]
fn every_pair_meets_home_and_away_and_nobody_plays_twice_a_matchday() {
    for seed in 0..200 {
        let (t, _) = started_tournament(seed);
        assert_eq!(t.matches.len(), 48);
        for (group, ids) in &t.groups {
            let group_matches: Vec<_> = t
                .matches
                .iter()
                .filter(|m| ids.contains(&m.team_1))
                .collect();
            assert_eq!(group_matches.len(), 12, "{group} seed {seed}");

            let mut ordered_pairs: HashMap<_, usize> = HashMap::new();
            for m in &group_matches {
                assert!(ids.contains(&m.team_2));
                assert_ne!(m.team_1, m.team_2);
                assert_eq!(m.phase, MatchPhase::Group);
                assert!(!m.is_played());
                *ordered_pairs.entry((m.team_1, m.team_2)).or_default() += 1;
            }
            assert_eq!(ordered_pairs.len(), 12);
            assert!(ordered_pairs.values().all(|&n| n == 1));

            for round in 1..=GROUP_ROUNDS {
                for id in ids {
                    let fixtures = group_matches
                        .iter()
                        .filter(|m| m.round == round && m.involves(*id))
                        .count();
                    assert_eq!(fixtures, 1, "{group} round {round} seed {seed}");
                }
            }
        }
        for round in 1..=GROUP_ROUNDS {
            assert_eq!(matchday(&t, round).count(), 8);
        }
    }
}

#[test]
fn group_rounds_advance_one_matchday_at_a_time() {
    let (mut t, mut rng) = started_tournament(21);
    for round in 1..GROUP_ROUNDS {
        let outcome = simulate_next_round(&mut t, &mut rng).unwrap();
        assert_eq!(outcome, RoundOutcome::GroupRoundPlayed { round });
        assert_eq!(t.current_round, round + 1);
        assert!(matchday(&t, round).all(|m| m.is_played()));
        assert!(matchday(&t, round + 1).all(|m| !m.is_played()));
        for m in matchday(&t, round) {
            assert_eq!(m.winner, None);
        }
    }
    assert_eq!(
        simulate_next_round(&mut t, &mut rng).unwrap(),
        RoundOutcome::GroupStageFinished
    );
    assert_eq!(t.phase, TournamentPhase::KnockoutStage);
    assert_eq!(t.current_round, 0);
}

#[test]
fn completed_group_stage_standings_are_consistent() {
    for seed in 0..20 {
        let (mut t, mut rng) = started_tournament(100 + seed);
        play_group_stage(&mut t, &mut rng);
        assert!(t.matches.iter().all(|m| m.is_played()));

        for team in &t.teams {
            let s = team.standings();
            assert_eq!(s.matches_played, 6);
            assert_eq!(s.wins + s.draws + s.losses, s.matches_played);
            assert_eq!(s.points, 3 * s.wins + s.draws);
        }
        for ids in t.groups.values() {
            let (goals_for, goals_against) = ids
                .iter()
                .map(|id| t.team(*id).unwrap().standings())
                .fold((0, 0), |(f, a), s| (f + s.goals_for, a + s.goals_against));
            assert_eq!(goals_for, goals_against);

            let scored: u32 = t
                .matches
                .iter()
                .filter(|m| ids.contains(&m.team_1))
                .map(|m| m.total_goals())
                .sum();
            assert_eq!(scored, goals_for);
        }
    }
}

#[test]
fn table_orders_by_points_then_goal_difference_then_goals_for() {
    let (mut t, _) = started_tournament(31);
    let ids = t.groups[&Group::A].clone();
    let results: [&[(u32, u32)]; 4] = [
        &[(1, 0)],                 // 3 pts, +1, 1 scored
        &[(3, 0), (0, 3)],         // 3 pts, 0
        &[(4, 3)],                 // 3 pts, +1, 4 scored
        &[(5, 0), (0, 0), (0, 9)], // 4 pts
    ];
    for (id, games) in ids.iter().zip(results) {
        let team = t.team_mut(*id).unwrap();
        for &(gf, ga) in games {
            team.add_match_result(gf, ga);
        }
    }

    let order: Vec<_> = t.group_standings(Group::A).iter().map(|team| team.id).collect();
    assert_eq!(order, vec![ids[3], ids[2], ids[0], ids[1]]);
    assert_eq!(group_qualifiers(&t, Group::A), vec![ids[3], ids[2]]);
}

#[test]
fn tied_teams_keep_draw_order() {
    let (mut t, _) = started_tournament(32);
    let ids = t.groups[&Group::B].clone();
    for id in &ids {
        t.team_mut(*id).unwrap().add_match_result(2, 2);
    }
    let order: Vec<_> = t.group_standings(Group::B).iter().map(|team| team.id).collect();
    assert_eq!(order, ids);
}

#[test]
fn add_match_result_applies_three_one_zero() {
    let mut team = football_tournament_sim::Team::new("Lions");
    team.add_match_result(2, 1);
    team.add_match_result(1, 1);
    team.add_match_result(0, 3);
    let s = team.standings();
    assert_eq!((s.wins, s.draws, s.losses), (1, 1, 1));
    assert_eq!(s.points, 4);
    assert_eq!((s.goals_for, s.goals_against), (3, 5));
    assert_eq!(team.goal_difference(), -2);
    assert_eq!(team.points(), 4);
}
