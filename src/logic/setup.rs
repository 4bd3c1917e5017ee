//! Setup phase: start the tournament (Setup -> GroupStage) and random tournament generation.

use crate::logic::group_stage::schedule_group_stage;
use crate::models::{
    Group, SkillOverrides, Tournament, TournamentError, TournamentPhase, ROSTER_SIZE,
};
use crate::names::NameSource;
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of teams required to start.
pub const TEAM_COUNT: usize = 16;
pub const TEAMS_PER_GROUP: usize = 4;

/// Start the tournament: require exactly 16 teams of 11 players, draw the groups and
/// schedule the group stage.
pub fn start_tournament<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    rng: &mut R,
) -> Result<(), TournamentError> {
    tournament.require_phase(TournamentPhase::Setup)?;
    if tournament.teams.len() != TEAM_COUNT {
        return Err(TournamentError::InvalidTournamentState(format!(
            "the tournament needs exactly {} teams to start (has {})",
            TEAM_COUNT,
            tournament.teams.len()
        )));
    }
    if let Some(team) = tournament
        .teams
        .iter()
        .find(|t| t.players().len() != ROSTER_SIZE)
    {
        return Err(TournamentError::InvalidTournamentState(format!(
            "team '{}' needs exactly {} players (has {})",
            team.name,
            ROSTER_SIZE,
            team.players().len()
        )));
    }

    tournament.all_players = tournament
        .teams
        .iter()
        .flat_map(|t| t.players().iter().map(|p| p.id))
        .collect();

    tournament.teams.shuffle(rng);
    tournament.groups.clear();
    for (group, chunk) in Group::ALL
        .into_iter()
        .zip(tournament.teams.chunks_mut(TEAMS_PER_GROUP))
    {
        for team in chunk.iter_mut() {
            team.group = Some(group);
        }
        tournament
            .groups
            .insert(group, chunk.iter().map(|t| t.id).collect());
    }

    tournament.phase = TournamentPhase::GroupStage;
    tournament.current_round = 1;
    schedule_group_stage(tournament, rng);
    log::info!(
        "Tournament {} started: {} teams, {} group fixtures",
        tournament.id,
        tournament.teams.len(),
        tournament.matches.len()
    );
    Ok(())
}

/// Replace the tournament with 16 random teams of 11 random players from `names`, then
/// start it. The new state is built aside, so on error `tournament` is left as it was.
pub fn generate_random_tournament<N: NameSource, R: Rng + ?Sized>(
    tournament: &mut Tournament,
    names: &N,
    rng: &mut R,
) -> Result<(), TournamentError> {
    let team_names = names.team_names(TEAM_COUNT, rng);
    if team_names.len() < TEAM_COUNT {
        return Err(TournamentError::InvalidTournamentState(format!(
            "name source has only {} distinct team names, {} needed",
            team_names.len(),
            TEAM_COUNT
        )));
    }

    let mut generated = Tournament {
        id: tournament.id,
        ..Tournament::new()
    };
    for name in &team_names {
        generated.add_team(name.as_str())?;
        for _ in 0..ROSTER_SIZE {
            let first = names.first_name(rng);
            let last = names.last_name(rng);
            if first.trim().is_empty() || last.trim().is_empty() {
                return Err(TournamentError::InvalidTournamentState(
                    "name source returned an empty player name".to_string(),
                ));
            }
            generated.add_player(name, first, last, SkillOverrides::default(), rng)?;
        }
    }
    start_tournament(&mut generated, rng)?;
    *tournament = generated;
    Ok(())
}
