use nalgebra::Vector2;

/// Rounds half-up to `decimals` places.
pub fn round(value: f32, decimals: i32) -> f32 {
    let factor = 10f32.powi(decimals);

    (value * factor + 0.5).floor() / factor
}

/// Exclusive range test.
#[inline]
pub fn is_between(value: f32, low: f32, high: f32) -> bool {
    value > low && value < high
}

pub fn sum_from_1_to_x(x: usize) -> f32 {
    (x * (x + 1)) as f32 / 2.0
}

/// `a * (b / sum(1..=c))`, the share of `b` carried by weight `a` out of `c` decreasing weights.
pub fn a_times_b_divided_by_c(a: usize, b: f32, c: usize) -> f32 {
    a as f32 * (b / sum_from_1_to_x(c))
}

/// Axis deltas from `from` to `to`, plus their Manhattan sum.
pub fn manhattan(from: &Vector2<f32>, to: &Vector2<f32>) -> (Vector2<f32>, f32) {
    let delta = to - from;

    (delta, delta.x.abs() + delta.y.abs())
}

/// Both axis deltas fall inside the inclusive `±x`, `±y` envelope.
pub fn within_envelope(delta: &Vector2<f32>, x: f32, y: f32) -> bool {
    delta.x.abs() <= x && delta.y.abs() <= y
}
