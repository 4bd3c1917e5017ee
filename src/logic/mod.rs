//! Tournament business logic: setup, group stage, match simulation, knockout stage.

mod group_stage;
mod knockout;
mod rounds;
mod setup;
mod simulation;

pub use group_stage::{matchday, schedule_group_stage, GROUP_ROUNDS};
pub use knockout::{create_knockout_bracket, group_qualifiers, play_knockout_round, KnockoutProgress};
pub use rounds::{simulate_next_round, RoundOutcome};
pub use setup::{generate_random_tournament, start_tournament, TEAMS_PER_GROUP, TEAM_COUNT};
pub use simulation::{
    draw_goals, simulate_match, CARD_FACTOR, FULL_TIME, GOALS_STDDEV, PENALTIES_MINUTE,
    STRENGTH_DIVISOR,
};
