use rand::Rng;

/// Value `is_injured` has to hit exactly for an injury to happen.
const INJURY_ROLL: i32 = 23;

/// Uniform integer in `min..=max`. Swapped bounds are normalised instead of panicking.
pub fn random_number<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };

    rng.random_range(low..=high)
}

/// Kick power: strength scaled by a random multiplier in `1..=5`.
pub fn calculate_power<R: Rng + ?Sized>(rng: &mut R, strength: u32) -> f32 {
    let hit = random_number(rng, 1, 5);

    strength as f32 * hit as f32
}

/// One-in-`threshold` style injury roll. Bigger thresholds make injuries rarer.
pub fn is_injured<R: Rng + ?Sized>(rng: &mut R, threshold: i32) -> bool {
    random_number(rng, 0, threshold) == INJURY_ROLL
}

/// Foul roll used by tackles: `random(0, x) < y / 2`.
pub fn was_foul<R: Rng + ?Sized>(rng: &mut R, x: i32, y: i32) -> bool {
    (random_number(rng, 0, x) as f32) < y as f32 / 2.0
}
