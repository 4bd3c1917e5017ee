//! Football tournament simulator: 16 teams, four groups of four, then a knockout bracket.

pub mod export;
pub mod logic;
pub mod models;
pub mod names;

pub use export::{export_teams, export_teams_json, PlayerRecord, TeamRecord};
pub use logic::{
    create_knockout_bracket, draw_goals, generate_random_tournament, group_qualifiers, matchday,
    schedule_group_stage, simulate_match, simulate_next_round, start_tournament, RoundOutcome,
    GROUP_ROUNDS, TEAM_COUNT,
};
pub use models::{
    EventKind, GameMatch, Group, GroupStandings, KnockoutRound, MatchEvent, MatchId, MatchPhase,
    Player, PlayerId, PlayerStats, Side, SkillOverrides, Skills, Team, TeamId, Tournament,
    TournamentError, TournamentId, TournamentPhase, ROSTER_SIZE,
};
pub use names::{NamePool, NameSource};
