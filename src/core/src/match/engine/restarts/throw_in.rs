use crate::r#match::engine::events::RestartKind;
use crate::r#match::engine::field::Touchline;
use crate::r#match::engine::restarts::{award_ball, begin_restart, pick_player, place};
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::TeamSide;
use nalgebra::Vector2;

/// Throw-in for `side` where the ball left over `touchline` at height `y`.
pub fn set_throw_in(state: &mut MatchState, side: TeamSide, touchline: Touchline, y: f32) {
    begin_restart(state, RestartKind::ThrowIn, side);

    let pitch = &state.pitch;
    let y = y.clamp(0.0, pitch.height);
    let line_x = pitch.touchline_x(touchline);
    let inward = match touchline {
        Touchline::Left => 1.0,
        Touchline::Right => -1.0,
    };
    let shift = (y - pitch.half_height).clamp(-pitch.height / 4.0, pitch.height / 4.0);

    // both shapes slide toward the throw
    for team_side in TeamSide::BOTH {
        let team = state.teams.get_mut(team_side);
        let keeper = team.roles.keeper;

        for (index, player) in team.players.iter_mut().enumerate() {
            if index != keeper {
                player.current = pitch.clamp(player.origin + Vector2::new(0.0, shift));
                player.relative = player.current;
            }
        }
    }

    let spot = Vector2::new(line_x, y);
    let roles = state.teams.get(side).roles;
    let opponent_roles = state.teams.get(side.opposite()).roles;
    let sign = state.attack_sign(side);

    let Some(taker) = pick_player(state, side, &[roles.wide_left, roles.wide_right], &spot) else {
        return;
    };

    // short option down the line and a central option
    if let Some(back) = pick_player(state, side, &[roles.left_back, roles.right_back], &spot) {
        if back != taker {
            place(state, back, Vector2::new(line_x + inward * 10.0, y + sign * 10.0));
        }
    }

    if let Some(mid) = pick_player(state, side, &roles.centre_mids, &spot) {
        if mid != taker {
            place(state, mid, Vector2::new(line_x + inward * 15.0, y));
        }
    }

    if let Some(marker) = pick_player(
        state,
        side.opposite(),
        &[opponent_roles.wide_left, opponent_roles.wide_right],
        &spot,
    ) {
        place(state, marker, Vector2::new(line_x + inward * 8.0, y - sign * 2.0));
    }

    award_ball(state, taker, spot);
}
