use crate::r#match::engine::events::RestartKind;
use crate::r#match::engine::restarts::{award_ball, begin_restart, pick_player, place};
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::{PlayerRef, TeamSide};
use nalgebra::Vector2;

/// Wall distance from the ball, toward the goal.
const WALL_DISTANCE: f32 = 10.0;
/// Lateral gap between wall players.
const WALL_SPACING: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreeKickZone {
    OwnThird,
    Middle,
    Attacking,
}

impl FreeKickZone {
    pub fn of(state: &MatchState, side: TeamSide, spot: &Vector2<f32>) -> FreeKickZone {
        let progress = state.progress(side, spot);
        let distance_to_goal = state.pitch.height - progress;

        if progress < state.pitch.third {
            FreeKickZone::OwnThird
        } else if distance_to_goal < state.pitch.sixth {
            FreeKickZone::Attacking
        } else {
            FreeKickZone::Middle
        }
    }
}

/// Free kick for `side` at `spot`, laid out by pitch zone.
pub fn set_free_kick(state: &mut MatchState, side: TeamSide, spot: Vector2<f32>) {
    begin_restart(state, RestartKind::FreeKick, side);
    state.teams.get_mut(side).statistics.freekicks += 1;

    let spot = state.pitch.clamp(spot);

    let taker = match FreeKickZone::of(state, side, &spot) {
        FreeKickZone::OwnThird => build_up(state, side, spot),
        FreeKickZone::Middle => short_option(state, side, spot),
        FreeKickZone::Attacking => direct(state, side, spot),
    };

    if let Some(taker) = taker {
        award_ball(state, taker, spot);
    }
}

/// Sign pointing from `x` toward the middle of the pitch.
fn toward_centre(state: &MatchState, x: f32) -> f32 {
    if x < state.pitch.half_width { 1.0 } else { -1.0 }
}

/// Centre back plays it short, the other centre back and a midfielder offer.
fn build_up(state: &mut MatchState, side: TeamSide, spot: Vector2<f32>) -> Option<PlayerRef> {
    let roles = state.teams.get(side).roles;
    let sign = state.attack_sign(side);
    let inward = toward_centre(state, spot.x);

    let taker = pick_player(state, side, &roles.centre_backs, &spot)?;

    let partner = roles
        .centre_backs
        .iter()
        .copied()
        .find(|i| *i != taker.index)
        .unwrap_or(roles.left_back);
    place(
        state,
        PlayerRef::new(side, partner),
        spot + Vector2::new(inward * 12.0, 0.0),
    );

    if let Some(mid) = pick_player(state, side, &roles.centre_mids, &spot) {
        place(state, mid, spot + Vector2::new(inward * 4.0, sign * 15.0));
    }

    Some(taker)
}

/// Centre midfielder takes it with a short option on the centre side.
fn short_option(state: &mut MatchState, side: TeamSide, spot: Vector2<f32>) -> Option<PlayerRef> {
    let roles = state.teams.get(side).roles;
    let sign = state.attack_sign(side);
    let inward = toward_centre(state, spot.x);

    let taker = pick_player(state, side, &roles.centre_mids, &spot)?;

    let option = roles
        .centre_mids
        .iter()
        .copied()
        .find(|i| *i != taker.index)
        .unwrap_or(roles.wide_left);
    place(
        state,
        PlayerRef::new(side, option),
        spot + Vector2::new(inward * 10.0, sign * 5.0),
    );

    for (offset, striker) in roles.strikers.iter().enumerate() {
        let lateral = if offset == 0 { -8.0 } else { 8.0 };
        place(
            state,
            PlayerRef::new(side, *striker),
            spot + Vector2::new(lateral, sign * 25.0),
        );
    }

    Some(taker)
}

/// Striker shoots directly over a wall offset toward the near post; the
/// defending keeper stays on the line.
fn direct(state: &mut MatchState, side: TeamSide, spot: Vector2<f32>) -> Option<PlayerRef> {
    let roles = state.teams.get(side).roles;
    let defending = side.opposite();
    let defence = state.teams.get(defending).roles;
    let end = state.attacked_end(side);
    let goal = state.pitch.goal_centre(end);

    let taker = pick_player(state, side, &roles.strikers, &spot)?;

    let other = roles
        .strikers
        .iter()
        .copied()
        .find(|i| *i != taker.index)
        .unwrap_or(roles.centre_mids[0]);
    let lurk =
        state.pitch.penalty_spot(end) + Vector2::new(toward_centre(state, spot.x) * 4.0, 0.0);
    place(state, PlayerRef::new(side, other), lurk);

    let to_goal = goal - spot;
    let heading = if to_goal.norm() > f32::EPSILON {
        to_goal.normalize()
    } else {
        Vector2::new(0.0, state.attack_sign(side))
    };
    let across = Vector2::new(-heading.y, heading.x);

    let near_post_x = if spot.x < state.pitch.half_width {
        goal.x - state.pitch.goal_half_width
    } else {
        goal.x + state.pitch.goal_half_width
    };
    let near_post_shift = if (near_post_x - spot.x) * across.x >= 0.0 {
        WALL_SPACING
    } else {
        -WALL_SPACING
    };

    let wall_centre = spot + heading * WALL_DISTANCE + across * near_post_shift;
    let wall = [
        defence.centre_backs[0],
        defence.centre_backs[1],
        defence.centre_mids[0],
        defence.centre_mids[1],
    ];

    for (slot, index) in wall.iter().enumerate() {
        let lateral = (slot as f32 - 1.5) * WALL_SPACING;
        place(
            state,
            PlayerRef::new(defending, *index),
            wall_centre + across * lateral,
        );
    }

    let keeper_x = spot.x.clamp(
        goal.x - state.pitch.goal_half_width,
        goal.x + state.pitch.goal_half_width,
    );
    let keeper_spot = state.pitch.at_depth(end, keeper_x, 0.0);
    place(state, PlayerRef::new(defending, defence.keeper), keeper_spot);

    Some(taker)
}
