use crate::r#match::engine::events::RestartKind;
use crate::r#match::engine::restarts::{award_ball, begin_restart, place};
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::{PlayerRef, TeamSide};
use nalgebra::Vector2;

/// Whether a foul on `fouled` at `spot` happened inside the box they attack.
pub fn is_penalty(state: &MatchState, fouled: TeamSide, spot: &Vector2<f32>) -> bool {
    state
        .pitch
        .in_penalty_box(state.attacked_end(fouled), spot)
}

/// Best active penalty taker, keepers excluded.
pub fn penalty_taker(state: &MatchState, side: TeamSide) -> Option<PlayerRef> {
    let team = state.teams.get(side);

    team.players
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_active() && !p.is_goalkeeper())
        .max_by(|a, b| {
            a.1.skills
                .penalty_taking
                .cmp(&b.1.skills.penalty_taking)
                .then(b.0.cmp(&a.0))
        })
        .map(|(index, _)| PlayerRef::new(side, index))
}

/// Penalty for `side`. The nominated taker is forced to shoot on the next
/// decision; everyone else waits outside the box.
pub fn set_penalty(state: &mut MatchState, side: TeamSide) {
    begin_restart(state, RestartKind::Penalty, side);
    state.teams.get_mut(side).statistics.penalties += 1;

    let end = state.attacked_end(side);
    let spot = state.pitch.penalty_spot(end);
    let box_edge = state.pitch.penalty_box_depth + 2.0;

    let Some(taker) = penalty_taker(state, side) else {
        return;
    };

    let keeper = PlayerRef::new(side.opposite(), state.teams.get(side.opposite()).roles.keeper);

    let everyone: Vec<PlayerRef> = TeamSide::BOTH
        .into_iter()
        .flat_map(|s| state.teams.refs(s).collect::<Vec<_>>())
        .collect();

    for player in everyone {
        if player == taker || player == keeper {
            continue;
        }

        let current = state.player(player).current;
        if state.pitch.in_penalty_box(end, &current) {
            let outside = state.pitch.at_depth(end, current.x, box_edge);
            place(state, player, outside);
        }
    }

    let goal = state.pitch.goal_centre(end);
    place(state, keeper, goal);

    award_ball(state, taker, spot);
    state.penalty_taker = Some(taker);
}
