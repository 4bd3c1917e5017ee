//! Export shapes for teams and players (nested name / skills / stats records).

use crate::models::{GroupStandings, Player, PlayerStats, Skills, Team, Tournament};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub skills: Skills,
    pub tournament_stats: PlayerStats,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub name: String,
    /// Group label ("Group A"), or null before the draw.
    pub group: Option<String>,
    pub group_stage_stats: GroupStandings,
    pub players: Vec<PlayerRecord>,
}

impl Player {
    pub fn to_record(&self) -> PlayerRecord {
        PlayerRecord {
            name: self.name(),
            skills: self.skills(),
            tournament_stats: self.stats(),
        }
    }
}

impl Team {
    pub fn to_record(&self) -> TeamRecord {
        TeamRecord {
            name: self.name.clone(),
            group: self.group.map(|g| g.label().to_string()),
            group_stage_stats: *self.standings(),
            players: self.players().iter().map(Player::to_record).collect(),
        }
    }
}

/// Records for every team, in the tournament's current team order.
pub fn export_teams(tournament: &Tournament) -> Vec<TeamRecord> {
    tournament.teams.iter().map(Team::to_record).collect()
}

/// Pretty-printed JSON of [`export_teams`]. Writing it anywhere is up to the caller.
pub fn export_teams_json(tournament: &Tournament) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&export_teams(tournament))
}
