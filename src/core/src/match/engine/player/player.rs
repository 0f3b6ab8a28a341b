use crate::r#match::engine::actions::Action;
use crate::r#match::engine::player::statistics::{Cards, PlayerStatistics};
use crate::r#match::squad::{PlayerDescriptor, PlayerSkills};
use nalgebra::Vector2;
use serde::Serialize;

pub const MAX_FITNESS: f32 = 100.0;

#[derive(Debug, Clone, Serialize)]
pub struct MatchPlayer {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub skills: PlayerSkills,
    pub fitness: f32,
    pub injured: bool,
    pub cards: Cards,

    /// Formation baseline for the current half.
    pub origin: Vector2<f32>,
    pub current: Vector2<f32>,
    /// Origin shifted with the team shape.
    pub relative: Vector2<f32>,

    pub offside: bool,
    pub action: Action,
    pub statistics: PlayerStatistics,
}

impl MatchPlayer {
    pub fn from_descriptor(descriptor: &PlayerDescriptor, origin: Vector2<f32>) -> Self {
        MatchPlayer {
            id: descriptor.id,
            name: descriptor.name.clone(),
            position: descriptor.position.clone(),
            skills: descriptor.skills,
            fitness: descriptor.fitness,
            injured: descriptor.injured,
            cards: Cards::default(),
            origin,
            current: origin,
            relative: origin,
            offside: false,
            action: Action::Wait,
            statistics: PlayerStatistics::default(),
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.position.eq_ignore_ascii_case("GK")
    }

    /// Injured and sent-off players stay on the roster but take no part in play.
    pub fn is_active(&self) -> bool {
        !self.injured && !self.cards.red
    }

    pub fn reset_to_origin(&mut self) {
        self.current = self.origin;
        self.relative = self.origin;
        self.offside = false;
        self.action = Action::Wait;
    }

    pub fn tire(&mut self, amount: f32) {
        self.fitness = (self.fitness - amount).max(0.0);
    }

    /// Half-time recovery: tired players regain 50, the rest are fully restored.
    pub fn recover(&mut self) {
        self.fitness = if self.fitness < 51.0 {
            self.fitness + 50.0
        } else {
            MAX_FITNESS
        };
    }
}
