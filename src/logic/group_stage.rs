//! Group stage: double round-robin scheduling within each group.

use crate::models::{GameMatch, MatchPhase, TeamId, Tournament};
use rand::seq::SliceRandom;
use rand::Rng;

/// Matchdays in the group stage (double round robin of 4 teams).
pub const GROUP_ROUNDS: u32 = 6;

/// Build all 48 group fixtures into `tournament.matches`.
///
/// Each ordered pair of group members plays once (home and away). Fixtures are shuffled,
/// then dealt two per matchday so that no team plays twice on the same matchday.
pub fn schedule_group_stage<R: Rng + ?Sized>(tournament: &mut Tournament, rng: &mut R) {
    tournament.matches.clear();
    for teams in tournament.groups.values() {
        let mut fixtures: Vec<(TeamId, TeamId)> = Vec::new();
        for i in 0..teams.len() {
            for j in (i + 1)..teams.len() {
                fixtures.push((teams[i], teams[j]));
                fixtures.push((teams[j], teams[i]));
            }
        }
        fixtures.shuffle(rng);

        for (i, (home, away)) in pair_disjoint(fixtures).into_iter().enumerate() {
            let round = (i / 2) as u32 + 1;
            tournament
                .matches
                .push(GameMatch::new(home, away, round, MatchPhase::Group));
        }
    }
}

/// Reorder fixtures so that positions {0,1}, {2,3}, ... never share a team.
///
/// Takes the first remaining fixture and the next one in shuffled order that involves
/// neither of its teams. For four teams the complementary pairing always has a fixture
/// left, since both pairings start with two fixtures each and are consumed together.
fn pair_disjoint(mut remaining: Vec<(TeamId, TeamId)>) -> Vec<(TeamId, TeamId)> {
    let mut ordered = Vec::with_capacity(remaining.len());
    while !remaining.is_empty() {
        let first = remaining.remove(0);
        ordered.push(first);
        let partner = remaining.iter().position(|&(h, a)| {
            h != first.0 && h != first.1 && a != first.0 && a != first.1
        });
        if let Some(idx) = partner {
            ordered.push(remaining.remove(idx));
        }
    }
    ordered
}

/// Group fixtures scheduled for a matchday.
pub fn matchday(tournament: &Tournament, round: u32) -> impl Iterator<Item = &GameMatch> {
    tournament.matches.iter().filter(move |m| m.round == round)
}
