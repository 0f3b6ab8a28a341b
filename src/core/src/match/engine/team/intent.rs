use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::{TeamIntent, TeamSide};
use nalgebra::Vector2;

/// Share of the ball's distance beyond halfway the whole shape follows.
const BALL_FOLLOW: f32 = 0.5;

/// Attack for the side on the ball, defend for the other. A ball at rest
/// resets both; a ball in flight keeps whatever was decided at the kick.
pub fn update_intents(state: &mut MatchState) {
    let intents = match state.ball.carrier() {
        Some(carrier) => Some((carrier.side, TeamIntent::Attack, TeamIntent::Defend)),
        None if state.ball.is_at_rest() => {
            Some((TeamSide::KickOff, TeamIntent::None, TeamIntent::None))
        }
        None => None,
    };

    if let Some((side, own, other)) = intents {
        state.teams.get_mut(side).intent = own;
        state.teams.get_mut(side.opposite()).intent = other;
    }
}

/// Shifts every outfield origin along the attacking axis by where the ball
/// is and what the team is trying to do. Keepers hold their origin.
pub fn update_relative_positions(state: &mut MatchState) {
    let ball = state.ball.xy();
    let halfway = state.pitch.half_height;
    let bias = state.pitch.height / 12.0;

    for side in TeamSide::BOTH {
        let sign = state.attack_sign(side);
        let progress = state.progress(side, &ball);

        let intent_shift = match state.teams.get(side).intent {
            TeamIntent::Attack => bias,
            TeamIntent::Defend => -bias,
            TeamIntent::None => 0.0,
        };
        let shift = (progress - halfway) * BALL_FOLLOW + intent_shift;

        let pitch = &state.pitch;
        for player in state.teams.get_mut(side).players.iter_mut() {
            player.relative = if player.is_goalkeeper() {
                player.origin
            } else {
                pitch.clamp(player.origin + Vector2::new(0.0, sign * shift))
            };
        }
    }
}
