use crate::r#match::engine::ball::deflection::resolve_deflection;
use crate::r#match::engine::ball::{BallDirection, Waypoint};
use crate::r#match::engine::events::MatchEvent;
use crate::r#match::engine::restarts::{Boundary, keep_in_boundaries};
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::PlayerRef;
use crate::utils::{
    a_times_b_divided_by_c, calculate_power, manhattan, random_number, round, within_envelope,
};
use itertools::Itertools;
use nalgebra::{Vector2, Vector3};

const KEEPER_REACH: (f32, f32) = (11.0, 2.0);
const OUTFIELD_REACH: (f32, f32) = (3.0, 3.0);

/// How a single resolved flight segment ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightOutcome {
    Saved(PlayerRef),
    Deflected(PlayerRef),
    Landed(Boundary),
}

/// Splits a kick's power into `n` parts weighted `n, n-1, .., 1`, rounded to
/// whole units. A part that rounds to zero becomes one unit with the sign of
/// `number`; a zero `number` splits into zeros.
pub fn split_number_into_n(number: f32, n: usize) -> Vec<f32> {
    if number == 0.0 {
        return vec![0.0; n];
    }

    (0..n)
        .map(|i| {
            let part = round(a_times_b_divided_by_c(n - i, number, n), 0);

            if part == 0.0 { number.signum() } else { part }
        })
        .collect()
}

/// Splits an axis delta into `n` whole-unit steps weighted `n, n-1, .., 1`.
/// The steps sum to the whole units of `number`: floored shares first, then
/// the leftover units go to the largest remainders.
pub fn split_distance_into_n(number: f32, n: usize) -> Vec<f32> {
    let total = number.abs().floor();
    if total == 0.0 || n == 0 {
        return vec![0.0; n];
    }

    let shares: Vec<f32> = (0..n)
        .map(|i| a_times_b_divided_by_c(n - i, total, n))
        .collect();

    let mut parts: Vec<f32> = shares.iter().map(|share| share.floor()).collect();
    let leftover = (total - parts.iter().sum::<f32>()).max(0.0) as usize;

    let by_remainder = (0..n).sorted_by(|a, b| {
        let ra = shares[*a] - parts[*a];
        let rb = shares[*b] - parts[*b];
        rb.total_cmp(&ra)
    });

    for idx in by_remainder.take(leftover) {
        parts[idx] += 1.0;
    }

    parts.iter().map(|part| part * number.signum()).collect()
}

/// Accumulates per-step deltas from `start` into waypoints. The final
/// waypoint always lands exactly on `target`.
pub fn merge_arrays(
    start: Vector2<f32>,
    powers: &[f32],
    xs: &[f32],
    ys: &[f32],
    target: Vector2<f32>,
) -> Vec<Waypoint> {
    let mut position = start;

    let mut waypoints: Vec<Waypoint> = powers
        .iter()
        .zip(xs.iter().zip(ys.iter()))
        .map(|(power, (x, y))| {
            position += Vector2::new(*x, *y);
            Waypoint::new(position, *power)
        })
        .collect();

    if let Some(last) = waypoints.last_mut() {
        last.position = target;
    }

    waypoints
}

/// Stepwise path from `from` to `to` with a height arc. Height climbs
/// linearly to `sqrt(|(d/2)^2 - (p/2)^2|)` over the first half of the steps
/// and falls back over the second half.
pub fn ball_trajectory(from: Vector2<f32>, to: Vector2<f32>, power: f32) -> Vec<Vector3<f32>> {
    let delta = to - from;
    let distance = round(delta.norm(), 0);

    let mut power = power;
    if distance >= power {
        power += distance;
    }

    let apex = ((distance / 2.0).powi(2) - (power / 2.0).powi(2)).abs().sqrt();
    let steps = round(delta.x.abs().max(delta.y.abs()), 0).max(1.0) as usize;
    let half = steps as f32 / 2.0;
    let climb = apex / half;

    let mut height = 0.0f32;
    let mut points = Vec::with_capacity(steps + 1);

    points.push(Vector3::new(from.x, from.y, 0.0));

    for step in 1..=steps {
        let point = from + delta * (step as f32 / steps as f32);

        if step as f32 <= half {
            height += climb;
        } else {
            height -= climb;
        }

        height = height.max(0.0);

        points.push(Vector3::new(point.x, point.y, height));
    }

    points
}

/// Kicks the ball toward `target`: plans the flight queue and resolves its
/// first step straight away. Later steps are resolved by [`move_ball`].
pub fn calc_ball_movement_over_time(
    state: &mut MatchState,
    kicker: PlayerRef,
    strength: u32,
    target: Vector2<f32>,
) {
    let power = calculate_power(&mut state.rng, strength);
    let from = state.ball.xy();
    let delta = target - from;

    let divisor = random_number(&mut state.rng, 2, 3) as f32;
    let iterations = round(delta.x.abs().max(delta.y.abs()) / divisor, 0).max(1.0) as usize;

    let powers = split_number_into_n(power, iterations);
    let xs = split_distance_into_n(delta.x, iterations);
    let ys = split_distance_into_n(delta.y, iterations);

    let waypoints = merge_arrays(from, &powers, &xs, &ys, target);

    state.ball.direction = BallDirection::from_delta(&delta);
    state.ball.last_touch = Some(kicker);
    state.ball.launch(waypoints);

    state.note(format!(
        "{} kicks toward ({:.0}, {:.0}) with power {:.0} over {} steps",
        state.describe(kicker),
        target.x,
        target.y,
        power,
        iterations
    ));

    move_ball(state);
}

/// Resolves the next queued waypoint of an in-flight ball.
pub fn move_ball(state: &mut MatchState) -> Option<FlightOutcome> {
    let waypoint = match state.ball.peek_waypoint() {
        Some(waypoint) => *waypoint,
        None => {
            if state.ball.carrier().is_none() {
                state.ball.direction = BallDirection::Wait;
            }
            return None;
        }
    };

    let kicker = match state.ball.last_touch {
        Some(kicker) => kicker,
        None => {
            state.ball.stop();
            return None;
        }
    };

    let outcome = resolve_ball_movement(state, kicker, waypoint.position, waypoint.power);

    // saves, deflections and restarts have already replaced the queue
    if outcome == FlightOutcome::Landed(Boundary::InPlay) {
        state.ball.next_waypoint();
    }

    if state.ball.carrier().is_none() && !state.ball.is_in_flight() {
        state.ball.shot = false;
        state.ball.direction = BallDirection::Wait;
    }

    Some(outcome)
}

/// Walks the ball from its position to `target`, checking every step for a
/// keeper save or an outfield deflection. Without interaction the ball lands
/// on `target` through the boundary dispatcher.
pub fn resolve_ball_movement(
    state: &mut MatchState,
    kicker: PlayerRef,
    target: Vector2<f32>,
    power: f32,
) -> FlightOutcome {
    state.ball.release();

    let from = state.ball.xy();
    let trajectory = ball_trajectory(from, target, power);

    for point in trajectory.iter().skip(1) {
        let spot = point.xy();

        let closest = [kicker.side, kicker.side.opposite()]
            .into_iter()
            .filter_map(|side| state.closest_player(side, &spot, Some(kicker)))
            .min_by(|a, b| a.1.total_cmp(&b.1));

        let Some((candidate, _)) = closest else {
            continue;
        };

        let player = state.player(candidate);
        let (delta, _) = manhattan(&player.current, &spot);
        let reach = player.skills.jumping as f32 + 1.0;

        if point.z > reach {
            continue;
        }

        if player.is_goalkeeper() {
            if !within_envelope(&delta, KEEPER_REACH.0, KEEPER_REACH.1) {
                continue;
            }

            let saving = player.skills.saving as i32;
            let roll = random_number(&mut state.rng, 0, power.round() as i32);

            if saving > roll {
                record_save(state, kicker, candidate);
                return FlightOutcome::Saved(candidate);
            }

            state.note(format!(
                "{} is beaten by the ball",
                state.describe(candidate)
            ));
        } else if within_envelope(&delta, OUTFIELD_REACH.0, OUTFIELD_REACH.1) {
            let travelled = (spot - from).norm();

            resolve_deflection(state, kicker, candidate, spot, power, travelled);
            return FlightOutcome::Deflected(candidate);
        }
    }

    FlightOutcome::Landed(keep_in_boundaries(state, kicker, target))
}

fn record_save(state: &mut MatchState, kicker: PlayerRef, keeper: PlayerRef) {
    let shot = state.ball.shot;
    let position = state.player(keeper).current;

    state.ball.give_to(keeper, position);

    if !shot || keeper.side == kicker.side {
        state.note(format!("{} collects the ball", state.describe(keeper)));
        return;
    }

    state.player_mut(kicker).statistics.shots.on_target += 1;
    state.teams.get_mut(kicker.side).statistics.shots.on_target += 1;
    state.player_mut(keeper).statistics.saves += 1;

    let event = MatchEvent::Save {
        side: keeper.side,
        keeper: state.player(keeper).id,
    };

    let line = format!("Save by {}", state.describe(keeper));
    state.record(event, line);
}
