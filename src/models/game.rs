//! Match (fixture), its events, phase tag and knockout rounds.

use crate::models::player::PlayerId;
use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// One side of a fixture.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    One,
    Two,
}

/// Phase of the tournament this match belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    Group,
    Knockout,
}

/// Knockout rounds, in order.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnockoutRound {
    QuarterFinals,
    SemiFinals,
    Final,
}

impl KnockoutRound {
    /// Round that follows this one; `None` after the final.
    pub fn next(self) -> Option<KnockoutRound> {
        match self {
            KnockoutRound::QuarterFinals => Some(KnockoutRound::SemiFinals),
            KnockoutRound::SemiFinals => Some(KnockoutRound::Final),
            KnockoutRound::Final => None,
        }
    }

    /// Value of `current_round` while this round is pending.
    pub fn index(self) -> u32 {
        match self {
            KnockoutRound::QuarterFinals => 0,
            KnockoutRound::SemiFinals => 1,
            KnockoutRound::Final => 2,
        }
    }

    /// Round number stamped on this round's matches.
    pub fn match_round(self) -> u32 {
        self.index() + 1
    }

    pub fn label(self) -> &'static str {
        match self {
            KnockoutRound::QuarterFinals => "Quarter-finals",
            KnockoutRound::SemiFinals => "Semi-finals",
            KnockoutRound::Final => "Final",
        }
    }
}

impl fmt::Display for KnockoutRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    Goal,
    YellowCard,
    RedCard,
    Info,
}

/// Something that happened during a match. Minutes are not sorted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub minute: u8,
    pub kind: EventKind,
    pub player: Option<PlayerId>,
    pub details: String,
}

/// A single fixture between two teams.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub team_1: TeamId,
    pub team_2: TeamId,
    pub round: u32,
    pub phase: MatchPhase,
    /// None if not yet played.
    pub score_1: Option<u32>,
    pub score_2: Option<u32>,
    /// Knockout only.
    pub winner: Option<TeamId>,
    pub events: Vec<MatchEvent>,
    /// Goals in the scoreline that no eligible player could be credited with.
    pub unattributed_goals: u32,
}

impl GameMatch {
    pub fn new(team_1: TeamId, team_2: TeamId, round: u32, phase: MatchPhase) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_1,
            team_2,
            round,
            phase,
            score_1: None,
            score_2: None,
            winner: None,
            events: Vec::new(),
            unattributed_goals: 0,
        }
    }

    pub fn is_played(&self) -> bool {
        self.score_1.is_some()
    }

    pub fn team(&self, side: Side) -> TeamId {
        match side {
            Side::One => self.team_1,
            Side::Two => self.team_2,
        }
    }

    pub fn involves(&self, team: TeamId) -> bool {
        self.team_1 == team || self.team_2 == team
    }

    /// Total goals, or 0 before the match is played.
    pub fn total_goals(&self) -> u32 {
        self.score_1.unwrap_or(0) + self.score_2.unwrap_or(0)
    }

    pub fn add_event(
        &mut self,
        minute: u8,
        kind: EventKind,
        player: Option<PlayerId>,
        details: impl Into<String>,
    ) {
        self.events.push(MatchEvent {
            minute,
            kind,
            player,
            details: details.into(),
        });
    }

    pub fn events_of(&self, kind: EventKind) -> impl Iterator<Item = &MatchEvent> {
        self.events.iter().filter(move |e| e.kind == kind)
    }
}
