pub mod actions;
pub mod ball;
pub mod engine;
pub mod events;
pub mod field;
pub mod player;
pub mod restarts;
pub mod state;
pub mod tactics;
pub mod team;

#[cfg(test)]
pub(crate) mod fixtures;

pub use engine::*;
pub use events::{Card, MatchEvent, RestartKind};
pub use field::{Pitch, PitchEnd, Touchline};
pub use state::{MatchHalf, MatchPeriod, MatchState};
pub use team::{PlayerRef, TeamSide};
