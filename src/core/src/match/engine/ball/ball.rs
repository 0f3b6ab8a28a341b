use crate::r#match::engine::team::PlayerRef;
use nalgebra::{Vector2, Vector3};
use serde::Serialize;
use std::collections::VecDeque;

/// Compass heading of the ball. North points toward `y = 0`, east toward `x = width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BallDirection {
    #[default]
    Wait,
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl BallDirection {
    pub fn from_delta(delta: &Vector2<f32>) -> Self {
        let sign = |value: f32| match value {
            v if v > 0.0 => 1,
            v if v < 0.0 => -1,
            _ => 0,
        };

        match (sign(delta.x), sign(delta.y)) {
            (0, -1) => BallDirection::North,
            (0, 1) => BallDirection::South,
            (1, 0) => BallDirection::East,
            (-1, 0) => BallDirection::West,
            (1, -1) => BallDirection::NorthEast,
            (-1, -1) => BallDirection::NorthWest,
            (1, 1) => BallDirection::SouthEast,
            (-1, 1) => BallDirection::SouthWest,
            _ => BallDirection::Wait,
        }
    }

    /// Per-axis sign of the heading, `(0, 0)` for `Wait`.
    pub fn unit(&self) -> Vector2<f32> {
        match self {
            BallDirection::Wait => Vector2::new(0.0, 0.0),
            BallDirection::North => Vector2::new(0.0, -1.0),
            BallDirection::South => Vector2::new(0.0, 1.0),
            BallDirection::East => Vector2::new(1.0, 0.0),
            BallDirection::West => Vector2::new(-1.0, 0.0),
            BallDirection::NorthEast => Vector2::new(1.0, -1.0),
            BallDirection::NorthWest => Vector2::new(-1.0, -1.0),
            BallDirection::SouthEast => Vector2::new(1.0, 1.0),
            BallDirection::SouthWest => Vector2::new(-1.0, 1.0),
        }
    }
}

/// One pending step of an in-flight ball.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Waypoint {
    pub position: Vector2<f32>,
    pub power: f32,
}

impl Waypoint {
    pub fn new(position: Vector2<f32>, power: f32) -> Self {
        Waypoint { position, power }
    }
}

/// The ball is either carried or in flight, never both: every method that
/// sets one clears the other.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Ball {
    pub position: Vector3<f32>,
    pub direction: BallDirection,
    pub last_touch: Option<PlayerRef>,
    pub shot: bool,
    carrier: Option<PlayerRef>,
    in_flight: VecDeque<Waypoint>,
}

impl Ball {
    pub fn at(position: Vector2<f32>) -> Self {
        Ball {
            position: Vector3::new(position.x, position.y, 0.0),
            ..Default::default()
        }
    }

    pub fn carrier(&self) -> Option<PlayerRef> {
        self.carrier
    }

    pub fn xy(&self) -> Vector2<f32> {
        self.position.xy()
    }

    pub fn place(&mut self, position: Vector2<f32>) {
        self.position = Vector3::new(position.x, position.y, 0.0);
    }

    /// Hands the ball to `player` standing at `position`.
    pub fn give_to(&mut self, player: PlayerRef, position: Vector2<f32>) {
        self.in_flight.clear();
        self.carrier = Some(player);
        self.last_touch = Some(player);
        self.direction = BallDirection::Wait;
        self.shot = false;
        self.place(position);
    }

    pub fn release(&mut self) -> Option<PlayerRef> {
        self.carrier.take()
    }

    pub fn launch(&mut self, waypoints: impl IntoIterator<Item = Waypoint>) {
        self.carrier = None;
        self.in_flight = waypoints.into_iter().collect();
    }

    pub fn next_waypoint(&mut self) -> Option<Waypoint> {
        self.in_flight.pop_front()
    }

    pub fn peek_waypoint(&self) -> Option<&Waypoint> {
        self.in_flight.front()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_in_flight(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn stop(&mut self) {
        self.in_flight.clear();
        self.direction = BallDirection::Wait;
    }

    /// Neither carried nor travelling.
    pub fn is_at_rest(&self) -> bool {
        self.carrier.is_none() && self.in_flight.is_empty()
    }
}
