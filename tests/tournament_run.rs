//! End-to-end: a full tournament driven round by round, plus export and scorer queries.

use football_tournament_sim::{
    export_teams, export_teams_json, generate_random_tournament, simulate_next_round,
    start_tournament, NamePool, RoundOutcome, SkillOverrides, Tournament, TournamentPhase,
    ROSTER_SIZE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn generic_tournament(rng: &mut StdRng) -> Tournament {
    let mut t = Tournament::new();
    for i in 0..16 {
        let name = format!("T{i}");
        t.add_team(name.as_str()).unwrap();
        for p in 0..ROSTER_SIZE {
            t.add_player(&name, "Player", format!("{p}"), SkillOverrides::fixed(5, 5, 1), rng)
                .unwrap();
        }
    }
    t
}

#[test]
fn nine_rounds_produce_one_champion() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut t = generic_tournament(&mut rng);
    let original: Vec<_> = t.teams.iter().map(|team| team.id).collect();
    start_tournament(&mut t, &mut rng).unwrap();

    let mut champions = Vec::new();
    for call in 1..=9 {
        let outcome = simulate_next_round(&mut t, &mut rng).unwrap();
        match (call, &outcome) {
            (1..=5, RoundOutcome::GroupRoundPlayed { round }) => assert_eq!(*round, call),
            (6, RoundOutcome::GroupStageFinished) => {}
            (7 | 8, RoundOutcome::KnockoutRoundPlayed { .. }) => {}
            (9, RoundOutcome::Champion { team, .. }) => champions.push(*team),
            _ => panic!("call {call}: unexpected {outcome:?}"),
        }
        if call < 9 {
            assert!(!t.is_finished());
        }
    }

    assert_eq!(t.phase, TournamentPhase::KnockoutStage);
    assert_eq!(champions.len(), 1);
    let winner = t.winner.expect("champion");
    assert_eq!(champions[0], winner);
    assert!(original.contains(&winner));

    // Every goal on the scoreboard is either credited or explicitly unattributed.
    let scored: u32 = t.all_matches().map(|m| m.total_goals()).sum();
    let unattributed: u32 = t.all_matches().map(|m| m.unattributed_goals).sum();
    let credited: u32 = t
        .all_players
        .iter()
        .map(|id| t.player(*id).unwrap().goals())
        .sum();
    assert_eq!(credited + unattributed, scored);
    assert_eq!(t.all_matches().count(), 48 + 4 + 2 + 1);
    assert!(t.all_matches().all(|m| m.is_played()));
}

#[test]
fn top_scorers_share_the_highest_tally() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut t = Tournament::new();
    assert!(t.top_scorers().is_empty());

    generate_random_tournament(&mut t, &NamePool::builtin(), &mut rng).unwrap();
    assert!(t.top_scorers().is_empty());
    while !t.is_finished() {
        simulate_next_round(&mut t, &mut rng).unwrap();
    }

    let top = t.top_scorers();
    assert!(!top.is_empty());
    let best = top[0].goals();
    assert!(best > 0);
    assert!(top.iter().all(|p| p.goals() == best));
    for id in &t.all_players {
        assert!(t.player(*id).unwrap().goals() <= best);
    }
}

#[test]
fn match_description_shows_score_once_played() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut t = generic_tournament(&mut rng);
    start_tournament(&mut t, &mut rng).unwrap();
    let first = t.matches[0].clone();
    let home = t.team(first.team_1).unwrap().name.clone();
    let away = t.team(first.team_2).unwrap().name.clone();
    assert_eq!(t.describe_match(&first), format!("{home} vs {away}"));

    for _ in 0..6 {
        simulate_next_round(&mut t, &mut rng).unwrap();
    }
    let played = t.find_match(first.id).unwrap();
    assert_eq!(
        t.describe_match(played),
        format!(
            "{home} {} - {} {away}",
            played.score_1.unwrap(),
            played.score_2.unwrap()
        )
    );
}

#[test]
fn export_has_nested_team_and_player_records() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut t = generic_tournament(&mut rng);
    let before = export_teams(&t);
    assert_eq!(before.len(), 16);
    assert_eq!(before[0].group, None);

    start_tournament(&mut t, &mut rng).unwrap();
    simulate_next_round(&mut t, &mut rng).unwrap();

    let json: serde_json::Value = serde_json::from_str(&export_teams_json(&t).unwrap()).unwrap();
    let teams = json.as_array().unwrap();
    assert_eq!(teams.len(), 16);
    let team = &teams[0];
    assert_eq!(team["name"], t.teams[0].name.as_str());
    assert!(team["group"].as_str().unwrap().starts_with("Group "));
    assert_eq!(team["group_stage_stats"]["matches_played"], 1);
    for key in ["points", "wins", "draws", "losses", "goals_for", "goals_against"] {
        assert!(team["group_stage_stats"][key].is_u64(), "{key}");
    }
    let players = team["players"].as_array().unwrap();
    assert_eq!(players.len(), ROSTER_SIZE);
    assert_eq!(players[0]["name"], "Player 0");
    assert_eq!(players[0]["skills"]["attack"], 5);
    assert_eq!(players[0]["skills"]["defense"], 5);
    assert_eq!(players[0]["skills"]["aggression"], 1);
    for key in ["goals", "yellow_cards", "red_cards"] {
        assert!(players[0]["tournament_stats"][key].is_u64(), "{key}");
    }
}

#[test]
fn tournament_state_round_trips_through_json() {
    let mut rng = StdRng::seed_from_u64(10);
    let mut t = generic_tournament(&mut rng);
    start_tournament(&mut t, &mut rng).unwrap();
    for _ in 0..7 {
        simulate_next_round(&mut t, &mut rng).unwrap();
    }
    let json = serde_json::to_string(&t).unwrap();
    let mut restored: Tournament = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.knockout_round, t.knockout_round);
    assert_eq!(restored.groups, t.groups);

    simulate_next_round(&mut restored, &mut rng).unwrap();
    simulate_next_round(&mut restored, &mut rng).unwrap();
    assert!(restored.is_finished());
}
