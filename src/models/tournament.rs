//! Tournament, TournamentPhase and TournamentError.

use crate::models::game::{GameMatch, KnockoutRound, MatchId};
use crate::models::player::{Player, PlayerId, SkillOverrides};
use crate::models::team::{Group, Team, TeamId};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TournamentError {
    /// Operation is only allowed in another phase.
    #[error("Operation requires phase {expected:?} but tournament is in {actual:?}")]
    InvalidPhase {
        expected: TournamentPhase,
        actual: TournamentPhase,
    },
    /// A team with this name already exists (names are unique, case-insensitive).
    #[error("A team named '{0}' already exists")]
    DuplicateTeam(String),
    #[error("Team '{0}' not found")]
    TeamNotFound(String),
    #[error("Player '{0}' not found")]
    PlayerNotFound(String),
    #[error("Team '{team}' already has the maximum of 11 players")]
    RosterFull { team: String },
    /// Preconditions for starting the tournament are not met.
    #[error("Invalid tournament state: {0}")]
    InvalidTournamentState(String),
    #[error("Team name must not be empty")]
    EmptyName,
    #[error("Skill {skill} = {value} is out of range")]
    SkillOutOfRange { skill: &'static str, value: u8 },
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Current phase of the tournament. "Finished" is `winner.is_some()`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentPhase {
    /// Adding teams and players; not started.
    #[default]
    Setup,
    /// Six matchdays of double round robin within four groups.
    GroupStage,
    /// Quarter-finals, semi-finals and final.
    KnockoutStage,
}

/// Full tournament state: teams (and through them players), fixtures and bracket.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub teams: Vec<Team>,
    /// Snapshot of every player at start, in team order then roster order.
    pub all_players: Vec<PlayerId>,
    pub groups: BTreeMap<Group, Vec<TeamId>>,
    pub phase: TournamentPhase,
    /// Group matchday (1..=6) during the group stage, knockout round index (0..=2) after.
    pub current_round: u32,
    /// Pending knockout round; `None` outside the knockout stage.
    pub knockout_round: Option<KnockoutRound>,
    /// Group-stage fixtures.
    pub matches: Vec<GameMatch>,
    pub knockout_matches: BTreeMap<KnockoutRound, Vec<GameMatch>>,
    pub winner: Option<TeamId>,
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new()
    }
}

impl Tournament {
    /// Create a new tournament in Setup with no teams.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            teams: Vec::new(),
            all_players: Vec::new(),
            groups: BTreeMap::new(),
            phase: TournamentPhase::Setup,
            current_round: 0,
            knockout_round: None,
            matches: Vec::new(),
            knockout_matches: BTreeMap::new(),
            winner: None,
        }
    }

    /// Drop everything and go back to an empty Setup (keeps the id).
    pub fn reset_to_setup(&mut self) {
        *self = Self {
            id: self.id,
            ..Self::new()
        };
    }

    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    pub(crate) fn require_phase(&self, expected: TournamentPhase) -> Result<(), TournamentError> {
        if self.phase != expected {
            return Err(TournamentError::InvalidPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn team_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    /// Look up a team by name, ignoring case and surrounding whitespace.
    pub fn team_by_name(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.has_name(name))
    }

    fn team_by_name_mut(&mut self, name: &str) -> Result<&mut Team, TournamentError> {
        self.teams
            .iter_mut()
            .find(|t| t.has_name(name))
            .ok_or_else(|| TournamentError::TeamNotFound(name.to_string()))
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.teams
            .iter()
            .flat_map(|t| t.players())
            .find(|p| p.id == id)
    }

    /// Add a team (only valid in Setup). Names must be unique (case-insensitive).
    pub fn add_team(&mut self, name: impl Into<String>) -> Result<TeamId, TournamentError> {
        self.require_phase(TournamentPhase::Setup)?;
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        if self.team_by_name(name_trimmed).is_some() {
            return Err(TournamentError::DuplicateTeam(name_trimmed.to_string()));
        }
        let team = Team::new(name_trimmed);
        let id = team.id;
        self.teams.push(team);
        Ok(id)
    }

    /// Remove a team by name (only valid in Setup).
    pub fn remove_team(&mut self, name: &str) -> Result<Team, TournamentError> {
        self.require_phase(TournamentPhase::Setup)?;
        let idx = self
            .teams
            .iter()
            .position(|t| t.has_name(name))
            .ok_or_else(|| TournamentError::TeamNotFound(name.to_string()))?;
        Ok(self.teams.remove(idx))
    }

    /// Add a player to a team (only valid in Setup, so rosters are locked once play starts).
    pub fn add_player<R: Rng + ?Sized>(
        &mut self,
        team_name: &str,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        skills: SkillOverrides,
        rng: &mut R,
    ) -> Result<PlayerId, TournamentError> {
        self.require_phase(TournamentPhase::Setup)?;
        let team = self.team_by_name_mut(team_name)?;
        Ok(team.add_player(first_name, last_name, skills, rng)?.id)
    }

    /// Remove a player from a team by full name (only valid in Setup).
    pub fn remove_player(
        &mut self,
        team_name: &str,
        player_name: &str,
    ) -> Result<Player, TournamentError> {
        self.require_phase(TournamentPhase::Setup)?;
        self.team_by_name_mut(team_name)?.remove_player(player_name)
    }

    /// Teams of a group in ranking order: points, goal difference, goals for (all descending).
    /// Ties keep the group's draw order.
    pub fn group_standings(&self, group: Group) -> Vec<&Team> {
        let mut teams: Vec<&Team> = self
            .groups
            .get(&group)
            .into_iter()
            .flatten()
            .filter_map(|id| self.team(*id))
            .collect();
        teams.sort_by(|a, b| b.ranking_key().cmp(&a.ranking_key()));
        teams
    }

    /// Players tied for the most goals; empty if nobody has scored.
    pub fn top_scorers(&self) -> Vec<&Player> {
        let players: Vec<&Player> = self
            .all_players
            .iter()
            .filter_map(|id| self.player(*id))
            .collect();
        let max_goals = players.iter().map(|p| p.goals()).max().unwrap_or(0);
        if max_goals == 0 {
            return Vec::new();
        }
        players.into_iter().filter(|p| p.goals() == max_goals).collect()
    }

    /// Group and knockout matches, in play order.
    pub fn all_matches(&self) -> impl Iterator<Item = &GameMatch> {
        self.matches
            .iter()
            .chain(self.knockout_matches.values().flatten())
    }

    pub fn find_match(&self, id: MatchId) -> Option<&GameMatch> {
        self.all_matches().find(|m| m.id == id)
    }

    /// "Home 2 - 1 Away" once played, "Home vs Away" before.
    pub fn describe_match(&self, game: &GameMatch) -> String {
        let name = |id: TeamId| self.team(id).map_or("?", |t| t.name.as_str());
        match (game.score_1, game.score_2) {
            (Some(s1), Some(s2)) => {
                format!("{} {} - {} {}", name(game.team_1), s1, s2, name(game.team_2))
            }
            _ => format!("{} vs {}", name(game.team_1), name(game.team_2)),
        }
    }
}
