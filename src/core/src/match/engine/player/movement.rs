use crate::r#match::engine::actions::Action;
use crate::r#match::engine::events::MatchEvent;
use crate::r#match::engine::restarts::set_free_kick;
use crate::r#match::engine::state::{MatchState, Possession};
use crate::r#match::engine::team::PlayerRef;
use crate::utils::{random_number, within_envelope};
use nalgebra::Vector2;

const RUN_FATIGUE: f32 = 0.005;
const SPRINT_FATIGUE: f32 = 0.02;
/// A ball at rest this close can be picked up.
const PICK_UP_REACH: f32 = 3.0;
/// Without a ball task, players inside this box around the ball close it down.
const CHASE_REACH: f32 = 20.0;

/// Largest per-axis step for an action, zero for actions that do not move.
pub fn step_size(action: Action) -> f32 {
    match action {
        Action::Run | Action::Tackle => 1.0,
        Action::Sprint | Action::Slide | Action::Intercept => 2.0,
        _ => 0.0,
    }
}

/// Per-axis move from `from` toward `to`, each axis limited to `max_step`.
pub fn step_toward(from: &Vector2<f32>, to: &Vector2<f32>, max_step: f32) -> Vector2<f32> {
    let delta = to - from;

    Vector2::new(
        delta.x.clamp(-max_step, max_step),
        delta.y.clamp(-max_step, max_step),
    )
}

/// Moves `me` for this tick. The carrier's ball moves with them.
pub fn move_player(state: &mut MatchState, me: PlayerRef, action: Action) {
    let max_step = step_size(action);
    if max_step == 0.0 {
        return;
    }

    let player = state.player(me);
    let position = player.current;
    let is_keeper = player.is_goalkeeper();
    let relative = player.relative;
    let origin = player.origin;

    let ball = state
        .ball
        .peek_waypoint()
        .map(|w| w.position)
        .unwrap_or_else(|| state.ball.xy());

    let mut step = match state.possession(me) {
        Possession::HasBall => {
            let goal = state.pitch.goal_centre(state.attacked_end(me.side));
            let mut step = step_toward(&position, &goal, max_step);
            step.x += random_number(&mut state.rng, -1, 1) as f32;
            step
        }
        _ if is_keeper => {
            // keepers track the ball across the goal mouth without leaving their line
            let pitch = &state.pitch;
            let x = ball.x.clamp(
                pitch.half_width - pitch.goal_half_width,
                pitch.half_width + pitch.goal_half_width,
            );
            step_toward(&position, &Vector2::new(x, origin.y), max_step)
        }
        possession => {
            let chasing = matches!(action, Action::Tackle | Action::Slide | Action::Intercept)
                || (possession != Possession::TeamHasBall
                    && within_envelope(&(ball - position), CHASE_REACH, CHASE_REACH));

            let target = if chasing { ball } else { relative };
            step_toward(&position, &target, max_step)
        }
    };

    if step.x.abs() > max_step {
        step.x = step.x.signum() * max_step;
    }

    let next = state.pitch.clamp(position + step);
    let fatigue = if max_step > 1.0 { SPRINT_FATIGUE } else { RUN_FATIGUE };

    let player = state.player_mut(me);
    player.current = next;
    player.tire(fatigue);

    if state.has_ball(me) {
        state.ball.place(next);
    }
}

/// Picks up a ball at rest within reach. An offside player concedes a free
/// kick instead.
pub fn try_take_ball(state: &mut MatchState, me: PlayerRef) -> bool {
    if !state.ball.is_at_rest() || !state.player(me).is_active() {
        return false;
    }

    let player = state.player(me);
    let position = player.current;

    if !within_envelope(&(state.ball.xy() - position), PICK_UP_REACH, PICK_UP_REACH) {
        return false;
    }

    if player.offside {
        let event = MatchEvent::Offside {
            side: me.side,
            player: player.id,
        };
        let line = format!("{} is offside", state.describe(me));
        state.record(event, line);

        set_free_kick(state, me.side.opposite(), position);
        return false;
    }

    state.ball.give_to(me, position);
    state.note(format!("{} takes the loose ball", state.describe(me)));

    true
}
