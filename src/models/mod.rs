//! Data structures for the football tournament: players, teams, matches, tournament state.

mod game;
mod player;
mod team;
mod tournament;

pub use game::{EventKind, GameMatch, KnockoutRound, MatchEvent, MatchId, MatchPhase, Side};
pub use player::{
    Player, PlayerId, PlayerStats, SkillOverrides, Skills, AGGRESSION_RANGE, ATTACK_RANGE,
    DEFENSE_RANGE,
};
pub(crate) use team::same_team_name;
pub use team::{Group, GroupStandings, Team, TeamId, ROSTER_SIZE};
pub use tournament::{Tournament, TournamentError, TournamentId, TournamentPhase};
