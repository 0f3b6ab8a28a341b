use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Action {
    Shoot,
    ThroughBall,
    Pass,
    Cross,
    Tackle,
    Intercept,
    Slide,
    Run,
    Sprint,
    Cleared,
    Boot,
    #[default]
    Wait,
    /// Forced for the nominated penalty taker, never drawn from a weight table.
    Penalty,
}

/// Weight per slot of [`ACTION_SLOTS`].
pub type ActionWeights = [u32; 11];

/// Slot order shared by every weight table.
pub const ACTION_SLOTS: [Action; 11] = [
    Action::Shoot,
    Action::ThroughBall,
    Action::Pass,
    Action::Cross,
    Action::Tackle,
    Action::Intercept,
    Action::Slide,
    Action::Run,
    Action::Sprint,
    Action::Cleared,
    Action::Boot,
];

impl Action {
    /// Actions that need the player to be the ball carrier.
    pub fn is_ball_action(&self) -> bool {
        matches!(
            self,
            Action::Shoot
                | Action::ThroughBall
                | Action::Pass
                | Action::Cross
                | Action::Cleared
                | Action::Boot
                | Action::Penalty
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::Shoot => "shoot",
            Action::ThroughBall => "throughBall",
            Action::Pass => "pass",
            Action::Cross => "cross",
            Action::Tackle => "tackle",
            Action::Intercept => "intercept",
            Action::Slide => "slide",
            Action::Run => "run",
            Action::Sprint => "sprint",
            Action::Cleared => "cleared",
            Action::Boot => "boot",
            Action::Wait => "wait",
            Action::Penalty => "penalty",
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}
