//! Runs one random tournament to completion and prints the progress.
//! Run with: cargo run --bin simulate
//! Env: TOURNAMENT_SEED (u64, fixed draw), TOURNAMENT_EXPORT (1/true prints the team export as JSON),
//! RUST_LOG (log filter, default info).

use football_tournament_sim::{
    export_teams_json, generate_random_tournament, simulate_next_round, Group, NamePool,
    RoundOutcome, Tournament,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seed_from_env() -> Option<u64> {
    std::env::var("TOURNAMENT_SEED")
        .ok()
        .and_then(|s| s.trim().parse().ok())
}

fn export_enabled() -> bool {
    std::env::var("TOURNAMENT_EXPORT")
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

fn print_tables(tournament: &Tournament) {
    for group in Group::ALL {
        println!("{}", group);
        for (pos, team) in tournament.group_standings(group).iter().enumerate() {
            let s = team.standings();
            println!(
                "  {}. {:<22} P{} W{} D{} L{} {}:{} ({:+}) {} pts",
                pos + 1,
                team.name,
                s.matches_played,
                s.wins,
                s.draws,
                s.losses,
                s.goals_for,
                s.goals_against,
                s.goal_difference(),
                s.points
            );
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let mut rng = match seed_from_env() {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut tournament = Tournament::new();
    generate_random_tournament(&mut tournament, &NamePool::builtin(), &mut rng)?;

    loop {
        let outcome = simulate_next_round(&mut tournament, &mut rng)?;
        println!("{}", outcome);
        match outcome {
            RoundOutcome::GroupStageFinished => print_tables(&tournament),
            RoundOutcome::Champion { .. } | RoundOutcome::AlreadyFinished => break,
            _ => {}
        }
    }

    for scorer in tournament.top_scorers() {
        println!(
            "Top scorer: {} ({}) - {} goals",
            scorer.name(),
            scorer.team_name,
            scorer.goals()
        );
    }

    if export_enabled() {
        println!("{}", export_teams_json(&tournament)?);
    }
    Ok(())
}
