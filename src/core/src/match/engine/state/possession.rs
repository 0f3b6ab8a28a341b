use serde::Serialize;

/// Whether the ball is live this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BallState {
    InPlay,
    /// A restart has been set up and nobody acts until the next tick.
    Dead,
}

/// Ball ownership as seen from one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Possession {
    HasBall,
    TeamHasBall,
    OpponentHasBall,
    Loose,
}
