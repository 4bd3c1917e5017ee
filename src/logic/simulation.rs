//! Match simulation: scoreline from team attack strength, goal scorers and cards.

use crate::models::{EventKind, GameMatch, MatchPhase, Player, Side, Team, TeamId, TournamentError};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::StandardNormal;

/// Expected goals = eligible attack total / this.
pub const STRENGTH_DIVISOR: f64 = 55.0;
pub const GOALS_STDDEV: f64 = 1.5;
/// A player is carded when a 1..=100 roll is below `aggression * CARD_FACTOR`.
pub const CARD_FACTOR: u32 = 2;
pub const FULL_TIME: u8 = 90;
/// Minute stamped on the shoot-out notice.
pub const PENALTIES_MINUTE: u8 = 91;

/// Mutable access to two distinct teams of the arena.
fn pair_mut(
    teams: &mut [Team],
    id_1: TeamId,
    id_2: TeamId,
) -> Result<(&mut Team, &mut Team), TournamentError> {
    fn position(teams: &[Team], id: TeamId) -> Result<usize, TournamentError> {
        teams
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TournamentError::TeamNotFound(id.to_string()))
    }
    let i = position(teams, id_1)?;
    let j = position(teams, id_2)?;
    if i == j {
        return Err(TournamentError::InvalidTournamentState(format!(
            "match pairs team {} with itself",
            id_1
        )));
    }
    if i < j {
        let (left, right) = teams.split_at_mut(j);
        Ok((&mut left[i], &mut right[0]))
    } else {
        let (left, right) = teams.split_at_mut(i);
        Ok((&mut right[0], &mut left[j]))
    }
}

/// Goals for one side: `max(0, floor(N(strength / 55, 1.5)))`.
pub fn draw_goals<R: Rng + ?Sized>(strength: u32, rng: &mut R) -> u32 {
    let z: f64 = rng.sample(StandardNormal);
    let goals = (f64::from(strength) / STRENGTH_DIVISOR + GOALS_STDDEV * z).floor();
    if goals > 0.0 {
        goals as u32
    } else {
        0
    }
}

fn random_minute<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(1..=FULL_TIME)
}

/// Simulate one unplayed match: scores, events, then standings (group) or winner (knockout).
pub fn simulate_match<R: Rng + ?Sized>(
    teams: &mut [Team],
    game: &mut GameMatch,
    rng: &mut R,
) -> Result<(), TournamentError> {
    if game.is_played() {
        return Err(TournamentError::InvalidTournamentState(format!(
            "match {} has already been played",
            game.id
        )));
    }
    let (team_1, team_2) = pair_mut(teams, game.team_1, game.team_2)?;

    let score_1 = draw_goals(team_1.total_attack(), rng);
    let score_2 = draw_goals(team_2.total_attack(), rng);
    game.score_1 = Some(score_1);
    game.score_2 = Some(score_2);

    simulate_events(game, team_1, team_2, rng);

    match game.phase {
        MatchPhase::Group => {
            team_1.add_match_result(score_1, score_2);
            team_2.add_match_result(score_2, score_1);
        }
        MatchPhase::Knockout => {
            let winner = if score_1 > score_2 {
                Side::One
            } else if score_2 > score_1 {
                Side::Two
            } else {
                let side = if rng.gen_bool(0.5) { Side::One } else { Side::Two };
                let name = match side {
                    Side::One => &team_1.name,
                    Side::Two => &team_2.name,
                };
                game.add_event(
                    PENALTIES_MINUTE,
                    EventKind::Info,
                    None,
                    format!("Decided on penalties. Winner: {}", name),
                );
                side
            };
            game.winner = Some(game.team(winner));
        }
    }

    log::debug!(
        "{} {} - {} {} ({:?}, round {})",
        team_1.name,
        score_1,
        score_2,
        team_2.name,
        game.phase,
        game.round
    );
    Ok(())
}

/// Attribute goals to scorers, then run the card pass over both full rosters.
fn simulate_events<R: Rng + ?Sized>(
    game: &mut GameMatch,
    team_1: &mut Team,
    team_2: &mut Team,
    rng: &mut R,
) {
    let score_1 = game.score_1.unwrap_or(0);
    let score_2 = game.score_2.unwrap_or(0);
    attribute_goals(game, team_1, score_1, rng);
    attribute_goals(game, team_2, score_2, rng);

    for player in team_1
        .players_mut()
        .iter_mut()
        .chain(team_2.players_mut().iter_mut())
    {
        book_player(game, player, rng);
    }
}

fn attribute_goals<R: Rng + ?Sized>(
    game: &mut GameMatch,
    team: &mut Team,
    goals: u32,
    rng: &mut R,
) {
    for _ in 0..goals {
        let eligible: Vec<usize> = team
            .players()
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_sent_off())
            .map(|(i, _)| i)
            .collect();
        let players = team.players_mut();
        let scorer = eligible
            .choose_weighted(rng, |&i| u32::from(players[i].attack()))
            .ok()
            .copied();
        match scorer {
            Some(idx) => {
                let player = &mut players[idx];
                player.record_goal();
                let minute = random_minute(rng);
                game.add_event(minute, EventKind::Goal, Some(player.id), "");
            }
            None => {
                game.unattributed_goals += 1;
                log::warn!(
                    "No eligible scorer left in {}; goal counted without a scorer",
                    team.name
                );
            }
        }
    }
}

/// Card roll for one player. A second card after an odd number of yellows is a red.
fn book_player<R: Rng + ?Sized>(game: &mut GameMatch, player: &mut Player, rng: &mut R) {
    let roll: u32 = rng.gen_range(1..=100);
    if roll >= u32::from(player.aggression()) * CARD_FACTOR {
        return;
    }
    if player.yellow_cards() % 2 == 1 {
        player.record_red_card();
        let minute = random_minute(rng);
        game.add_event(minute, EventKind::RedCard, Some(player.id), "second yellow");
    } else {
        player.record_yellow_card();
        let minute = random_minute(rng);
        game.add_event(minute, EventKind::YellowCard, Some(player.id), "");
    }
}
