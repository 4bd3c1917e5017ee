//! Player, Skills and PlayerStats data structures.

use crate::models::tournament::TournamentError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in match events and lookups).
pub type PlayerId = Uuid;

pub const ATTACK_RANGE: (u8, u8) = (3, 10);
pub const DEFENSE_RANGE: (u8, u8) = (3, 10);
pub const AGGRESSION_RANGE: (u8, u8) = (1, 10);

/// Fixed skill attributes. Never change after the player is created.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub attack: u8,
    pub defense: u8,
    pub aggression: u8,
}

/// Optional explicit skills for a new player; missing values are drawn at random.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SkillOverrides {
    pub attack: Option<u8>,
    pub defense: Option<u8>,
    pub aggression: Option<u8>,
}

impl SkillOverrides {
    /// All three skills fixed.
    pub fn fixed(attack: u8, defense: u8, aggression: u8) -> Self {
        Self {
            attack: Some(attack),
            defense: Some(defense),
            aggression: Some(aggression),
        }
    }
}

fn draw<R: Rng + ?Sized>(value: Option<u8>, (low, high): (u8, u8), rng: &mut R) -> u8 {
    value.unwrap_or_else(|| rng.gen_range(low..=high))
}

impl Skills {
    /// Validate supplied values and draw the missing ones uniformly from their ranges.
    pub fn resolve<R: Rng + ?Sized>(
        overrides: SkillOverrides,
        rng: &mut R,
    ) -> Result<Self, TournamentError> {
        for (skill, value, (low, high)) in [
            ("attack", overrides.attack, ATTACK_RANGE),
            ("defense", overrides.defense, DEFENSE_RANGE),
            ("aggression", overrides.aggression, AGGRESSION_RANGE),
        ] {
            if let Some(v) = value {
                if !(low..=high).contains(&v) {
                    return Err(TournamentError::SkillOutOfRange { skill, value: v });
                }
            }
        }
        Ok(Self {
            attack: draw(overrides.attack, ATTACK_RANGE, rng),
            defense: draw(overrides.defense, DEFENSE_RANGE, rng),
            aggression: draw(overrides.aggression, AGGRESSION_RANGE, rng),
        })
    }
}

/// Statistics accumulated during the tournament. Only ever incremented.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub goals: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
}

/// A player on a team roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub team_name: String,
    skills: Skills,
    stats: PlayerStats,
}

impl Player {
    /// Create a new player with the given skills and zeroed stats.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        team_name: impl Into<String>,
        skills: Skills,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            team_name: team_name.into(),
            skills,
            stats: PlayerStats::default(),
        }
    }

    /// "First Last".
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn skills(&self) -> Skills {
        self.skills
    }

    pub fn stats(&self) -> PlayerStats {
        self.stats
    }

    pub fn attack(&self) -> u8 {
        self.skills.attack
    }

    pub fn defense(&self) -> u8 {
        self.skills.defense
    }

    pub fn aggression(&self) -> u8 {
        self.skills.aggression
    }

    pub fn goals(&self) -> u32 {
        self.stats.goals
    }

    pub fn yellow_cards(&self) -> u32 {
        self.stats.yellow_cards
    }

    pub fn red_cards(&self) -> u32 {
        self.stats.red_cards
    }

    /// A player with a red card no longer counts for strength or scoring.
    pub fn is_sent_off(&self) -> bool {
        self.stats.red_cards > 0
    }

    pub fn record_goal(&mut self) {
        self.stats.goals += 1;
    }

    pub fn record_yellow_card(&mut self) {
        self.stats.yellow_cards += 1;
    }

    pub fn record_red_card(&mut self) {
        self.stats.red_cards += 1;
    }
}
