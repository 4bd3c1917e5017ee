//! Team, Group and GroupStandings.

use crate::models::player::{Player, SkillOverrides, Skills};
use crate::models::tournament::TournamentError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a team.
pub type TeamId = Uuid;

/// Maximum (and, to start a tournament, required) roster size.
pub const ROSTER_SIZE: usize = 11;

/// Group-stage group. Teams are dealt into these in fixed order.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum Group {
    #[serde(rename = "Group A")]
    A,
    #[serde(rename = "Group B")]
    B,
    #[serde(rename = "Group C")]
    C,
    #[serde(rename = "Group D")]
    D,
}

impl Group {
    pub const ALL: [Group; 4] = [Group::A, Group::B, Group::C, Group::D];

    pub fn label(self) -> &'static str {
        match self {
            Group::A => "Group A",
            Group::B => "Group B",
            Group::C => "Group C",
            Group::D => "Group D",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Group-stage aggregate. Only changed through [`Team::add_match_result`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupStandings {
    pub points: u32,
    pub matches_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl GroupStandings {
    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }
}

/// Team names match ignoring surrounding whitespace and letter case (Unicode-aware).
pub(crate) fn same_team_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// A team: roster of up to 11 players plus its group-stage record.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub group: Option<Group>,
    players: Vec<Player>,
    standings: GroupStandings,
}

impl Team {
    /// Create an empty team with no group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            group: None,
            players: Vec::new(),
            standings: GroupStandings::default(),
        }
    }

    pub fn has_name(&self, name: &str) -> bool {
        same_team_name(&self.name, name)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Roster size cannot change through this; stats only grow through `record_*`.
    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    pub fn standings(&self) -> &GroupStandings {
        &self.standings
    }

    /// Add a player; skills not given in `skills` are drawn at random.
    pub fn add_player<R: Rng + ?Sized>(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        skills: SkillOverrides,
        rng: &mut R,
    ) -> Result<&Player, TournamentError> {
        if self.players.len() >= ROSTER_SIZE {
            return Err(TournamentError::RosterFull {
                team: self.name.clone(),
            });
        }
        let skills = Skills::resolve(skills, rng)?;
        self.players
            .push(Player::new(first_name, last_name, self.name.clone(), skills));
        Ok(&self.players[self.players.len() - 1])
    }

    /// Remove a player by full name ("First Last").
    pub fn remove_player(&mut self, name: &str) -> Result<Player, TournamentError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.name() == name)
            .ok_or_else(|| TournamentError::PlayerNotFound(name.to_string()))?;
        Ok(self.players.remove(idx))
    }

    /// Sum of attack over players without a red card.
    pub fn total_attack(&self) -> u32 {
        self.players
            .iter()
            .filter(|p| !p.is_sent_off())
            .map(|p| u32::from(p.attack()))
            .sum()
    }

    /// Sum of defense over players without a red card.
    pub fn total_defense(&self) -> u32 {
        self.players
            .iter()
            .filter(|p| !p.is_sent_off())
            .map(|p| u32::from(p.defense()))
            .sum()
    }

    pub fn points(&self) -> u32 {
        self.standings.points
    }

    pub fn goal_difference(&self) -> i64 {
        self.standings.goal_difference()
    }

    /// Record one group-stage match from this team's point of view (win 3, draw 1, loss 0).
    pub fn add_match_result(&mut self, goals_for: u32, goals_against: u32) {
        let s = &mut self.standings;
        s.matches_played += 1;
        s.goals_for += goals_for;
        s.goals_against += goals_against;
        if goals_for > goals_against {
            s.wins += 1;
            s.points += 3;
        } else if goals_for == goals_against {
            s.draws += 1;
            s.points += 1;
        } else {
            s.losses += 1;
        }
    }

    /// Ranking key within a group: points, goal difference, goals for.
    pub(crate) fn ranking_key(&self) -> (u32, i64, u32) {
        (
            self.standings.points,
            self.standings.goal_difference(),
            self.standings.goals_for,
        )
    }
}
