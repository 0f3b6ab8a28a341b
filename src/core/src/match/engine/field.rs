use crate::error::ConfigError;
use crate::utils::is_between;
use nalgebra::Vector2;
use serde::Serialize;

/// One of the two goal lines. `Top` is the `y = 0` line, `Bottom` the `y = height` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PitchEnd {
    Top,
    Bottom,
}

impl PitchEnd {
    pub fn opposite(self) -> Self {
        match self {
            PitchEnd::Top => PitchEnd::Bottom,
            PitchEnd::Bottom => PitchEnd::Top,
        }
    }
}

/// One of the two touchlines. `Left` is `x = 0`, `Right` is `x = width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Touchline {
    Left,
    Right,
}

/// Field dimensions. Every derived measurement is a fixed fraction of
/// width/height and is computed once in [`Pitch::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pitch {
    pub width: f32,
    pub height: f32,

    pub half_width: f32,
    pub half_height: f32,

    pub goal_half_width: f32,
    pub penalty_box_left: f32,
    pub penalty_box_right: f32,
    pub penalty_box_depth: f32,
    pub penalty_spot_depth: f32,

    pub third: f32,
    pub sixth: f32,
}

impl Pitch {
    pub const MIN_WIDTH: u32 = 40;
    pub const MIN_HEIGHT: u32 = 60;

    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        if width < Self::MIN_WIDTH || height < Self::MIN_HEIGHT {
            return Err(ConfigError::InvalidPitch {
                width,
                height,
                min_width: Self::MIN_WIDTH,
                min_height: Self::MIN_HEIGHT,
            });
        }

        let width = width as f32;
        let height = height as f32;

        Ok(Pitch {
            width,
            height,
            half_width: width / 2.0,
            half_height: height / 2.0,
            goal_half_width: width / 6.0,
            penalty_box_left: width / 4.0 + 5.0,
            penalty_box_right: width - width / 4.0 - 5.0,
            penalty_box_depth: height / 6.0 + 7.0,
            penalty_spot_depth: height / 8.0,
            third: height / 3.0,
            sixth: height / 6.0,
        })
    }

    pub fn centre(&self) -> Vector2<f32> {
        Vector2::new(self.half_width, self.half_height)
    }

    pub fn goal_line_y(&self, end: PitchEnd) -> f32 {
        match end {
            PitchEnd::Top => 0.0,
            PitchEnd::Bottom => self.height,
        }
    }

    pub fn goal_centre(&self, end: PitchEnd) -> Vector2<f32> {
        Vector2::new(self.half_width, self.goal_line_y(end))
    }

    pub fn touchline_x(&self, side: Touchline) -> f32 {
        match side {
            Touchline::Left => 0.0,
            Touchline::Right => self.width,
        }
    }

    pub fn nearer_touchline(&self, x: f32) -> Touchline {
        if x < self.half_width {
            Touchline::Left
        } else {
            Touchline::Right
        }
    }

    pub fn corner(&self, end: PitchEnd, side: Touchline) -> Vector2<f32> {
        Vector2::new(self.touchline_x(side), self.goal_line_y(end))
    }

    pub fn is_in_goal_mouth(&self, x: f32) -> bool {
        is_between(
            x,
            self.half_width - self.goal_half_width,
            self.half_width + self.goal_half_width,
        )
    }

    /// Distance from the goal line of `end`, measured along the pitch length.
    pub fn depth_from(&self, end: PitchEnd, position: &Vector2<f32>) -> f32 {
        match end {
            PitchEnd::Top => position.y,
            PitchEnd::Bottom => self.height - position.y,
        }
    }

    /// Inverse of [`Pitch::depth_from`].
    pub fn at_depth(&self, end: PitchEnd, x: f32, depth: f32) -> Vector2<f32> {
        match end {
            PitchEnd::Top => Vector2::new(x, depth),
            PitchEnd::Bottom => Vector2::new(x, self.height - depth),
        }
    }

    pub fn in_penalty_box(&self, end: PitchEnd, position: &Vector2<f32>) -> bool {
        is_between(position.x, self.penalty_box_left, self.penalty_box_right)
            && is_between(self.depth_from(end, position), -1.0, self.penalty_box_depth)
    }

    pub fn penalty_spot(&self, end: PitchEnd) -> Vector2<f32> {
        self.at_depth(end, self.half_width, self.penalty_spot_depth)
    }

    pub fn is_inside(&self, position: &Vector2<f32>) -> bool {
        position.x >= 0.0
            && position.x <= self.width
            && position.y >= 0.0
            && position.y <= self.height
    }

    pub fn clamp(&self, position: Vector2<f32>) -> Vector2<f32> {
        Vector2::new(
            position.x.clamp(0.0, self.width),
            position.y.clamp(0.0, self.height),
        )
    }
}
