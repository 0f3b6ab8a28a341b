use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchPeriod {
    Initial,
    FirstHalf,
    HalfTime,
    SecondHalf,
    End,
}

/// Walks a match through its periods in order.
pub struct StateManager {
    current_period: MatchPeriod,
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

impl StateManager {
    pub fn new() -> Self {
        StateManager {
            current_period: MatchPeriod::Initial,
        }
    }

    pub fn current(&self) -> MatchPeriod {
        self.current_period
    }

    pub fn next(&mut self) -> Option<MatchPeriod> {
        let next_period = Self::get_next_period(self.current_period);

        match next_period {
            MatchPeriod::End => {
                self.current_period = MatchPeriod::End;
                None
            }
            _ => {
                self.current_period = next_period;
                Some(self.current_period)
            }
        }
    }

    fn get_next_period(current_period: MatchPeriod) -> MatchPeriod {
        match current_period {
            MatchPeriod::Initial => MatchPeriod::FirstHalf,
            MatchPeriod::FirstHalf => MatchPeriod::HalfTime,
            MatchPeriod::HalfTime => MatchPeriod::SecondHalf,
            MatchPeriod::SecondHalf => MatchPeriod::End,
            MatchPeriod::End => MatchPeriod::End,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_manager_new() {
        let state_manager = StateManager::new();
        assert_eq!(state_manager.current(), MatchPeriod::Initial);
    }

    #[test]
    fn test_state_manager_next() {
        let mut state_manager = StateManager::new();
        assert_eq!(state_manager.next(), Some(MatchPeriod::FirstHalf));
        assert_eq!(state_manager.next(), Some(MatchPeriod::HalfTime));
        assert_eq!(state_manager.next(), Some(MatchPeriod::SecondHalf));
        assert_eq!(state_manager.next(), None);
        assert_eq!(state_manager.next(), None);
        assert_eq!(state_manager.current(), MatchPeriod::End);
    }
}
