use serde::Serialize;

/// Persistent team identity. Labels survive the half-time side switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TeamSide {
    KickOff,
    Second,
}

impl TeamSide {
    pub const BOTH: [TeamSide; 2] = [TeamSide::KickOff, TeamSide::Second];

    pub fn opposite(self) -> Self {
        match self {
            TeamSide::KickOff => TeamSide::Second,
            TeamSide::Second => TeamSide::KickOff,
        }
    }
}

/// Addresses one roster slot of one team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PlayerRef {
    pub side: TeamSide,
    pub index: usize,
}

impl PlayerRef {
    pub fn new(side: TeamSide, index: usize) -> Self {
        PlayerRef { side, index }
    }
}
