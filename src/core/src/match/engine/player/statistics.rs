use crate::r#match::engine::events::Card;
use crate::r#match::engine::team::ShotStatistics;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TackleStatistics {
    pub total: u32,
    pub won: u32,
    pub lost: u32,
    pub fouls: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlayerStatistics {
    pub goals: u32,
    pub own_goals: u32,
    pub shots: ShotStatistics,
    pub passes: u32,
    pub saves: u32,
    pub tackles: TackleStatistics,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Cards {
    pub yellow: u8,
    pub red: bool,
}

impl Cards {
    /// Books the player and returns the card actually shown:
    /// a second yellow becomes a red.
    pub fn book(&mut self, card: Card) -> Card {
        match card {
            Card::Red => {
                self.red = true;
                Card::Red
            }
            Card::Yellow => {
                self.yellow += 1;
                if self.yellow >= 2 {
                    self.red = true;
                    Card::Red
                } else {
                    Card::Yellow
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_yellow_is_red() {
        let mut cards = Cards::default();

        assert_eq!(cards.book(Card::Yellow), Card::Yellow);
        assert!(!cards.red);
        assert_eq!(cards.book(Card::Yellow), Card::Red);
        assert!(cards.red);
        assert_eq!(cards.yellow, 2);
    }

    #[test]
    fn test_straight_red() {
        let mut cards = Cards::default();

        assert_eq!(cards.book(Card::Red), Card::Red);
        assert_eq!(cards.yellow, 0);
        assert!(cards.red);
    }
}
