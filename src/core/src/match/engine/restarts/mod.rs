mod boundaries;
mod corner;
mod free_kick;
mod goal_kick;
mod kickoff;
mod penalty;
mod throw_in;

pub use boundaries::*;
pub use corner::*;
pub use free_kick::*;
pub use goal_kick::*;
pub use kickoff::*;
pub use penalty::*;
pub use throw_in::*;

use crate::r#match::engine::events::{MatchEvent, RestartKind};
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::{PlayerRef, TeamSide};
use log::debug;
use nalgebra::Vector2;

/// Stops play: nobody holds the ball, nothing is in flight, and the rest of
/// the tick is skipped.
pub(crate) fn begin_restart(state: &mut MatchState, kind: RestartKind, side: TeamSide) {
    debug!("Restart: {:?} for {:?}", kind, side);

    state.ball.release();
    state.ball.stop();
    state.ball.shot = false;
    state.stoppage = true;
    state.penalty_taker = None;

    for side in TeamSide::BOTH {
        state
            .teams
            .get_mut(side)
            .players
            .iter_mut()
            .for_each(|p| p.offside = false);
    }

    let line = format!("{:?} to {}", kind, state.teams.get(side).name);
    state.record(MatchEvent::Restart { kind, side }, line);
}

pub(crate) fn place(state: &mut MatchState, player: PlayerRef, position: Vector2<f32>) {
    let position = state.pitch.clamp(position);
    let player = state.player_mut(player);

    player.current = position;
    player.relative = position;
}

/// Puts `taker` on `spot` with the ball.
pub(crate) fn award_ball(state: &mut MatchState, taker: PlayerRef, spot: Vector2<f32>) {
    let spot = state.pitch.clamp(spot);

    place(state, taker, spot);
    state.ball.give_to(taker, spot);
}

/// Active player of `side` among `candidates` closest to `point`, falling
/// back to the closest active player of the side.
pub(crate) fn pick_player(
    state: &MatchState,
    side: TeamSide,
    candidates: &[usize],
    point: &Vector2<f32>,
) -> Option<PlayerRef> {
    let team = state.teams.get(side);

    candidates
        .iter()
        .filter(|i| team.players[**i].is_active())
        .min_by(|a, b| {
            let da = (team.players[**a].origin - point).norm();
            let db = (team.players[**b].origin - point).norm();
            da.total_cmp(&db)
        })
        .map(|i| PlayerRef::new(side, *i))
        .or_else(|| state.closest_player(side, point, None).map(|(p, _)| p))
}

/// A foul gives the fouled side a penalty inside their attacking box and a
/// free kick everywhere else.
pub fn award_set_piece(state: &mut MatchState, fouled: TeamSide, spot: Vector2<f32>) {
    if is_penalty(state, fouled, &spot) {
        set_penalty(state, fouled);
    } else {
        set_free_kick(state, fouled, spot);
    }
}
