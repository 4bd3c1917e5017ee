//! Knockout stage: bracket from the group tables, then single elimination to the final.

use crate::logic::simulation::simulate_match;
use crate::models::{
    GameMatch, Group, KnockoutRound, MatchPhase, TeamId, Tournament, TournamentError,
    TournamentPhase,
};
use rand::Rng;

/// Group winners and runners-up meet teams from another group:
/// A1-B2, C1-D2, B1-A2, D1-C2.
const QUARTER_FINAL_DRAW: [((Group, usize), (Group, usize)); 4] = [
    ((Group::A, 0), (Group::B, 1)),
    ((Group::C, 0), (Group::D, 1)),
    ((Group::B, 0), (Group::A, 1)),
    ((Group::D, 0), (Group::C, 1)),
];

/// Top two of a group by points, goal difference, goals for.
pub fn group_qualifiers(tournament: &Tournament, group: Group) -> Vec<TeamId> {
    tournament
        .group_standings(group)
        .into_iter()
        .take(2)
        .map(|t| t.id)
        .collect()
}

/// Build the quarter-finals from the final group tables and enter the knockout stage.
pub fn create_knockout_bracket(tournament: &mut Tournament) -> Result<(), TournamentError> {
    let mut quarter_finals = Vec::with_capacity(QUARTER_FINAL_DRAW.len());
    for ((home_group, home_pos), (away_group, away_pos)) in QUARTER_FINAL_DRAW {
        let home = qualifier(tournament, home_group, home_pos)?;
        let away = qualifier(tournament, away_group, away_pos)?;
        quarter_finals.push(GameMatch::new(
            home,
            away,
            KnockoutRound::QuarterFinals.match_round(),
            MatchPhase::Knockout,
        ));
    }

    tournament.phase = TournamentPhase::KnockoutStage;
    tournament.knockout_round = Some(KnockoutRound::QuarterFinals);
    tournament.current_round = KnockoutRound::QuarterFinals.index();
    tournament
        .knockout_matches
        .insert(KnockoutRound::QuarterFinals, quarter_finals);
    Ok(())
}

fn qualifier(
    tournament: &Tournament,
    group: Group,
    position: usize,
) -> Result<TeamId, TournamentError> {
    group_qualifiers(tournament, group)
        .get(position)
        .copied()
        .ok_or_else(|| {
            TournamentError::InvalidTournamentState(format!(
                "{} has no qualifier in position {}",
                group,
                position + 1
            ))
        })
}

/// Result of playing one knockout round.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KnockoutProgress {
    /// Winners were drawn into the next round.
    Advanced { next: KnockoutRound },
    Champion(TeamId),
}

/// Play every match of `round`, then pair consecutive winners (0-1, 2-3, ...) into the
/// next round, or crown the champion after the final.
pub fn play_knockout_round<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    round: KnockoutRound,
    rng: &mut R,
) -> Result<KnockoutProgress, TournamentError> {
    let matches = tournament
        .knockout_matches
        .get_mut(&round)
        .ok_or_else(|| {
            TournamentError::InvalidTournamentState(format!("no {} scheduled", round))
        })?;
    for game in matches.iter_mut().filter(|m| !m.is_played()) {
        simulate_match(&mut tournament.teams, game, rng)?;
    }
    let winners: Vec<TeamId> = matches.iter().filter_map(|m| m.winner).collect();

    match round.next() {
        None => {
            let champion = winners.first().copied().ok_or_else(|| {
                TournamentError::InvalidTournamentState("final has no winner".to_string())
            })?;
            tournament.winner = Some(champion);
            Ok(KnockoutProgress::Champion(champion))
        }
        Some(next) => {
            let next_matches: Vec<GameMatch> = winners
                .chunks_exact(2)
                .map(|pair| {
                    GameMatch::new(pair[0], pair[1], next.match_round(), MatchPhase::Knockout)
                })
                .collect();
            tournament.knockout_matches.insert(next, next_matches);
            tournament.knockout_round = Some(next);
            tournament.current_round = next.index();
            Ok(KnockoutProgress::Advanced { next })
        }
    }
}
