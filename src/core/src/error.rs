use thiserror::Error;

/// Raised while building a match from descriptors, before any tick runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("pitch must be at least {min_width}x{min_height}, got {width}x{height}")]
    InvalidPitch {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },

    #[error("team '{team}' must field exactly {expected} players, found {found}")]
    InvalidRosterSize {
        team: String,
        expected: usize,
        found: usize,
    },

    #[error("team '{team}': roster slot 0 must be a goalkeeper, found '{player}' ({position})")]
    MissingGoalkeeper {
        team: String,
        player: String,
        position: String,
    },

    #[error("team '{team}': '{player}' is a second goalkeeper in roster slot {slot}")]
    ExtraGoalkeeper {
        team: String,
        player: String,
        slot: usize,
    },

    #[error("team '{team}': '{player}' has {skill} = {value}, expected 0..=100")]
    InvalidSkill {
        team: String,
        player: String,
        skill: &'static str,
        value: u32,
    },

    #[error("team '{team}': '{player}' has fitness {value}, expected 0..=100")]
    InvalidFitness {
        team: String,
        player: String,
        value: f32,
    },

    #[error("team '{team}': unknown formation '{formation}'")]
    UnknownFormation { team: String, formation: String },

    #[error("player id {id} appears more than once ('{player}' in team '{team}')")]
    DuplicatePlayerId {
        team: String,
        player: String,
        id: u32,
    },
}

/// Raised when the caller drives the engine out of sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("half indicator 0 is not a match period")]
    InvalidHalf,
}
