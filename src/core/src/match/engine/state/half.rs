use crate::error::EngineError;
use serde::{Serialize, Serializer};
use std::num::NonZeroU8;

/// Match period counter. Starts at 1 and can never be 0, so goal
/// attribution by parity has no sentinel to misread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchHalf(NonZeroU8);

impl MatchHalf {
    pub const FIRST: MatchHalf = MatchHalf(NonZeroU8::MIN);

    pub fn number(self) -> u8 {
        self.0.get()
    }

    /// Odd halves keep the kick-off team on the top end of the pitch.
    pub fn is_odd(self) -> bool {
        self.0.get() % 2 == 1
    }

    pub fn next(self) -> MatchHalf {
        MatchHalf(self.0.saturating_add(1))
    }
}

impl Default for MatchHalf {
    fn default() -> Self {
        MatchHalf::FIRST
    }
}

impl TryFrom<u8> for MatchHalf {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        NonZeroU8::new(value)
            .map(MatchHalf)
            .ok_or(EngineError::InvalidHalf)
    }
}

impl Serialize for MatchHalf {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}
