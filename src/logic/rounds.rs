//! Round driver: one call plays one group matchday or one knockout round.

use crate::logic::group_stage::GROUP_ROUNDS;
use crate::logic::knockout::{create_knockout_bracket, play_knockout_round, KnockoutProgress};
use crate::logic::simulation::simulate_match;
use crate::models::{KnockoutRound, TeamId, Tournament, TournamentError, TournamentPhase};
use rand::Rng;
use std::fmt;

/// What a call to [`simulate_next_round`] did.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RoundOutcome {
    /// A champion was already crowned; nothing was played.
    AlreadyFinished,
    /// Group matchday `round` was played; the next one is pending.
    GroupRoundPlayed { round: u32 },
    /// The last matchday was played and the quarter-finals are drawn.
    GroupStageFinished,
    KnockoutRoundPlayed {
        played: KnockoutRound,
        next: KnockoutRound,
    },
    Champion { team: TeamId, name: String },
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundOutcome::AlreadyFinished => write!(f, "Tournament finished."),
            RoundOutcome::GroupRoundPlayed { round } => write!(f, "Matchday {} played.", round),
            RoundOutcome::GroupStageFinished => {
                write!(f, "Group stage finished. Time for the quarter-finals!")
            }
            RoundOutcome::KnockoutRoundPlayed { played, next } => {
                write!(f, "{} played. Time for the {}!", played, next)
            }
            RoundOutcome::Champion { name, .. } => write!(f, "Tournament won by {}!", name),
        }
    }
}

/// Play the next group matchday or knockout round.
pub fn simulate_next_round<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    rng: &mut R,
) -> Result<RoundOutcome, TournamentError> {
    if tournament.is_finished() {
        return Ok(RoundOutcome::AlreadyFinished);
    }
    match tournament.phase {
        TournamentPhase::Setup => Err(TournamentError::InvalidPhase {
            expected: TournamentPhase::GroupStage,
            actual: TournamentPhase::Setup,
        }),
        TournamentPhase::GroupStage => play_group_round(tournament, rng),
        TournamentPhase::KnockoutStage => {
            let round = tournament.knockout_round.ok_or_else(|| {
                TournamentError::InvalidTournamentState("no knockout round pending".to_string())
            })?;
            match play_knockout_round(tournament, round, rng)? {
                KnockoutProgress::Advanced { next } => {
                    log::info!("{} played, {} drawn", round, next);
                    Ok(RoundOutcome::KnockoutRoundPlayed {
                        played: round,
                        next,
                    })
                }
                KnockoutProgress::Champion(id) => {
                    let name = tournament
                        .team(id)
                        .map(|t| t.name.clone())
                        .unwrap_or_default();
                    log::info!("Tournament {} won by {}", tournament.id, name);
                    Ok(RoundOutcome::Champion { team: id, name })
                }
            }
        }
    }
}

fn play_group_round<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    rng: &mut R,
) -> Result<RoundOutcome, TournamentError> {
    let round = tournament.current_round;
    for game in tournament
        .matches
        .iter_mut()
        .filter(|m| m.round == round && !m.is_played())
    {
        simulate_match(&mut tournament.teams, game, rng)?;
    }

    if round >= GROUP_ROUNDS {
        create_knockout_bracket(tournament)?;
        log::info!("Group stage finished, quarter-finals drawn");
        Ok(RoundOutcome::GroupStageFinished)
    } else {
        tournament.current_round += 1;
        log::info!("Matchday {} played", round);
        Ok(RoundOutcome::GroupRoundPlayed { round })
    }
}
