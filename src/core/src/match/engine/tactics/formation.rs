use crate::r#match::engine::field::{Pitch, PitchEnd};
use itertools::Itertools;
use nalgebra::Vector2;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Formation {
    F442,
    F433,
    F352,
}

/// A formation slot as fractions of the pitch, `x` across the width and
/// `depth` measured from the team's own goal line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormationSlot {
    pub x: f32,
    pub depth: f32,
}

const fn slot(x: f32, depth: f32) -> FormationSlot {
    FormationSlot { x, depth }
}

const FORMATION_442: [FormationSlot; 11] = [
    slot(0.5, 0.0), // GK
    slot(0.15, 0.15), // LB
    slot(0.38, 0.12), // CB
    slot(0.62, 0.12), // CB
    slot(0.85, 0.15), // RB
    slot(0.15, 0.3), // LM
    slot(0.38, 0.28), // CM
    slot(0.62, 0.28), // CM
    slot(0.85, 0.3), // RM
    slot(0.4, 0.45), // ST
    slot(0.6, 0.45), // ST
];

const FORMATION_433: [FormationSlot; 11] = [
    slot(0.5, 0.0), // GK
    slot(0.15, 0.15), // LB
    slot(0.38, 0.12), // CB
    slot(0.62, 0.12), // CB
    slot(0.85, 0.15), // RB
    slot(0.3, 0.28), // CM
    slot(0.5, 0.25), // CM
    slot(0.7, 0.28), // CM
    slot(0.15, 0.42), // LW
    slot(0.5, 0.47), // ST
    slot(0.85, 0.42), // RW
];

const FORMATION_352: [FormationSlot; 11] = [
    slot(0.5, 0.0), // GK
    slot(0.3, 0.12), // CB
    slot(0.5, 0.1), // CB
    slot(0.7, 0.12), // CB
    slot(0.1, 0.25), // LWB
    slot(0.35, 0.28), // CM
    slot(0.5, 0.22), // DM
    slot(0.65, 0.28), // CM
    slot(0.9, 0.25), // RWB
    slot(0.4, 0.45), // ST
    slot(0.6, 0.45), // ST
];

impl Formation {
    pub fn from_name(name: &str) -> Option<Formation> {
        match name.trim() {
            "4-4-2" | "442" => Some(Formation::F442),
            "4-3-3" | "433" => Some(Formation::F433),
            "3-5-2" | "352" => Some(Formation::F352),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Formation::F442 => "4-4-2",
            Formation::F433 => "4-3-3",
            Formation::F352 => "3-5-2",
        }
    }

    pub fn slots(&self) -> &'static [FormationSlot; 11] {
        match self {
            Formation::F442 => &FORMATION_442,
            Formation::F433 => &FORMATION_433,
            Formation::F352 => &FORMATION_352,
        }
    }

    /// Absolute origin of slot `index` for a team defending `end`.
    /// The bottom end is the top layout rotated by 180 degrees.
    pub fn origin(&self, index: usize, pitch: &Pitch, end: PitchEnd) -> Vector2<f32> {
        let slot = &self.slots()[index];

        match end {
            PitchEnd::Top => Vector2::new(slot.x * pitch.width, slot.depth * pitch.height),
            PitchEnd::Bottom => Vector2::new(
                (1.0 - slot.x) * pitch.width,
                pitch.height - slot.depth * pitch.height,
            ),
        }
    }

    pub fn roles(&self) -> RoleMap {
        RoleMap::from_slots(self.slots())
    }
}

/// Typed role lookup built once per team, so restart placement addresses
/// players by job instead of by raw roster index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleMap {
    pub keeper: usize,
    pub left_back: usize,
    pub right_back: usize,
    pub centre_backs: [usize; 2],
    pub centre_mids: [usize; 2],
    pub wide_left: usize,
    pub wide_right: usize,
    pub strikers: [usize; 2],
}

const DEFENSIVE_LINE: f32 = 0.2;
const MIDFIELD_LINE: f32 = 0.4;

impl RoleMap {
    fn from_slots(slots: &[FormationSlot; 11]) -> RoleMap {
        let outfield = || (1..slots.len()).map(|i| (i, slots[i]));

        let by_centrality =
            |a: &(usize, FormationSlot), b: &(usize, FormationSlot)| {
                (a.1.x - 0.5).abs().total_cmp(&(b.1.x - 0.5).abs()).then(a.0.cmp(&b.0))
            };

        let strikers: Vec<usize> = outfield()
            .sorted_by(|a, b| b.1.depth.total_cmp(&a.1.depth).then(a.0.cmp(&b.0)))
            .map(|(i, _)| i)
            .take(2)
            .sorted()
            .collect();

        let defenders: Vec<(usize, FormationSlot)> = outfield()
            .filter(|(_, s)| s.depth < DEFENSIVE_LINE)
            .collect();

        let centre_backs: Vec<usize> = defenders
            .iter()
            .copied()
            .sorted_by(by_centrality)
            .take(2)
            .sorted_by(|a, b| a.1.x.total_cmp(&b.1.x))
            .map(|(i, _)| i)
            .collect();

        let centre_mids: Vec<usize> = outfield()
            .filter(|(i, s)| {
                s.depth >= DEFENSIVE_LINE && s.depth < MIDFIELD_LINE && !strikers.contains(i)
            })
            .sorted_by(by_centrality)
            .take(2)
            .sorted_by(|a, b| a.1.x.total_cmp(&b.1.x))
            .map(|(i, _)| i)
            .collect();

        let (left_back, right_back) = match defenders
            .iter()
            .minmax_by(|a, b| a.1.x.total_cmp(&b.1.x))
            .into_option()
        {
            Some((left, right)) => (left.0, right.0),
            None => (1, 1),
        };

        let (wide_left, wide_right) = match outfield()
            .filter(|(_, s)| s.depth >= DEFENSIVE_LINE)
            .minmax_by(|a, b| a.1.x.total_cmp(&b.1.x))
            .into_option()
        {
            Some((left, right)) => (left.0, right.0),
            None => (left_back, right_back),
        };

        let pair = |list: &[usize], fallback: usize| -> [usize; 2] {
            match list {
                [a, b, ..] => [*a, *b],
                [a] => [*a, *a],
                [] => [fallback, fallback],
            }
        };

        RoleMap {
            keeper: 0,
            left_back,
            right_back,
            centre_backs: pair(&centre_backs, left_back),
            centre_mids: pair(&centre_mids, wide_left),
            wide_left,
            wide_right,
            strikers: pair(&strikers, 10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_442_roles_match_roster_indices() {
        let roles = Formation::F442.roles();

        assert_eq!(roles.keeper, 0);
        assert_eq!(roles.left_back, 1);
        assert_eq!(roles.right_back, 4);
        assert_eq!(roles.centre_backs, [2, 3]);
        assert_eq!(roles.centre_mids, [6, 7]);
        assert_eq!(roles.wide_left, 5);
        assert_eq!(roles.wide_right, 8);
        assert_eq!(roles.strikers, [9, 10]);
    }

    #[test]
    fn test_433_uses_wingers_as_wide_players() {
        let roles = Formation::F433.roles();

        assert_eq!(roles.strikers, [8, 9]);
        assert_eq!(roles.wide_left, 8);
        assert_eq!(roles.wide_right, 10);
        assert_eq!(roles.centre_mids, [5, 6]);
    }

    #[test]
    fn test_352_back_three() {
        let roles = Formation::F352.roles();

        assert_eq!(roles.centre_backs, [1, 2]);
        assert_eq!(roles.left_back, 1);
        assert_eq!(roles.right_back, 3);
        assert_eq!(roles.wide_left, 4);
        assert_eq!(roles.wide_right, 8);
    }

    #[test]
    fn test_origins_are_mirrored_for_bottom_end() {
        let pitch = Pitch::new(100, 132).unwrap();
        let formation = Formation::F442;

        assert_eq!(formation.origin(0, &pitch, PitchEnd::Top), Vector2::new(50.0, 0.0));
        assert_eq!(formation.origin(0, &pitch, PitchEnd::Bottom), Vector2::new(50.0, 132.0));

        let top = formation.origin(5, &pitch, PitchEnd::Top);
        let bottom = formation.origin(5, &pitch, PitchEnd::Bottom);

        assert!((top.x + bottom.x - 100.0).abs() < 1e-4);
        assert!((top.y + bottom.y - 132.0).abs() < 1e-4);
    }

    #[test]
    fn test_formation_names() {
        assert_eq!(Formation::from_name("4-3-3"), Some(Formation::F433));
        assert_eq!(Formation::from_name("352"), Some(Formation::F352));
        assert_eq!(Formation::from_name("2-3-5"), None);
    }
}
