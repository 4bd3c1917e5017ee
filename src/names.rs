//! Source of team and player names for randomly generated tournaments.

use crate::models::same_team_name;
use rand::seq::SliceRandom;
use rand::Rng;

/// Supplies names for [`generate_random_tournament`](crate::generate_random_tournament).
pub trait NameSource {
    /// Up to `count` distinct team names. Fewer means the source ran out.
    fn team_names<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<String>;
    fn first_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String;
    fn last_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String;
}

/// In-memory name lists, sampled uniformly. Team names are trimmed and deduplicated
/// ignoring case; blank entries are skipped. An empty first or last name list yields
/// empty names, which [`generate_random_tournament`](crate::generate_random_tournament)
/// rejects.
#[derive(Clone, Debug, Default)]
pub struct NamePool {
    pub team_names: Vec<String>,
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
}

const DEFAULT_TEAM_NAMES: &[&str] = &[
    "Northbridge Rovers", "Eastvale United", "Port Amber FC", "Kingsmoor Athletic",
    "Redhill Wanderers", "Silverlake City", "Oakport Albion", "Westmarsh Town",
    "Highcliff Rangers", "Stonebrook Villa", "Greywater Harriers", "Ironford Celtic",
    "Brightsea Olympic", "Millhaven Dynamo", "Ashgrove Sporting", "Coldstream Borough",
    "Fairmeadow County", "Lowfield Athletic", "Ravenhurst United", "Thornbury Rovers",
];

const DEFAULT_FIRST_NAMES: &[&str] = &[
    "Adam", "Bruno", "Carlos", "Daniel", "Emil", "Filip", "Gabriel", "Hugo", "Igor", "Jakub",
    "Kamil", "Luca", "Marek", "Nico", "Oscar", "Pavel", "Rafael", "Samuel", "Tomas", "Victor",
];

const DEFAULT_LAST_NAMES: &[&str] = &[
    "Andersen", "Baranski", "Costa", "Dubois", "Eriksen", "Fischer", "Garcia", "Horvat",
    "Ivanov", "Jensen", "Kowalski", "Lindqvist", "Moreau", "Novak", "Oliveira", "Petrov",
    "Rossi", "Schmidt", "Tanaka", "Weber",
];

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl NamePool {
    /// A small built-in pool, enough for one 16-team tournament.
    pub fn builtin() -> Self {
        Self {
            team_names: owned(DEFAULT_TEAM_NAMES),
            first_names: owned(DEFAULT_FIRST_NAMES),
            last_names: owned(DEFAULT_LAST_NAMES),
        }
    }
}

impl NameSource for NamePool {
    fn team_names<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<String> {
        let mut distinct: Vec<&str> = Vec::new();
        for name in &self.team_names {
            let name = name.trim();
            if !name.is_empty() && !distinct.iter().any(|d| same_team_name(d, name)) {
                distinct.push(name);
            }
        }
        distinct
            .choose_multiple(rng, count)
            .map(|s| s.to_string())
            .collect()
    }

    fn first_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.first_names.choose(rng).cloned().unwrap_or_default()
    }

    fn last_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.last_names.choose(rng).cloned().unwrap_or_default()
    }
}
