use crate::r#match::engine::events::RestartKind;
use crate::r#match::engine::restarts::{award_ball, begin_restart, pick_player, place};
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::{PlayerRef, TeamIntent, TeamSide};
use crate::utils::random_number;
use log::info;
use nalgebra::Vector2;

/// Lateral distance between the kick-off taker and the waiting partner.
const PARTNER_OFFSET: f32 = 20.0;

/// Both teams back to formation, ball on the centre spot with one of `side`'s
/// strikers and the other striker waiting beside. Without two fit strikers the
/// nearest active player takes it alone.
pub fn set_kick_off(state: &mut MatchState, side: TeamSide) {
    begin_restart(state, RestartKind::KickOff, side);

    for team_side in TeamSide::BOTH {
        let team = state.teams.get_mut(team_side);
        team.reset_to_origin();
        team.intent = TeamIntent::None;
    }

    let centre = state.pitch.centre();
    let team = state.teams.get(side);
    let strikers: Vec<usize> = team
        .roles
        .strikers
        .into_iter()
        .filter(|i| team.players[*i].is_active())
        .collect();

    if strikers.len() == 2 {
        let pick = random_number(&mut state.rng, 0, 1) as usize;
        let (taker, partner) = (strikers[pick], strikers[1 - pick]);

        place(
            state,
            PlayerRef::new(side, partner),
            centre + Vector2::new(PARTNER_OFFSET, 0.0),
        );
        award_ball(state, PlayerRef::new(side, taker), centre);
    } else if let Some(taker) = pick_player(state, side, &strikers, &centre) {
        award_ball(state, taker, centre);
    }
}

/// Restart after a goal: the conceding team kicks off.
pub fn set_goal_scored(state: &mut MatchState, conceding: TeamSide) {
    set_kick_off(state, conceding);
}

/// Swaps ends, lets players recover and hands the second team the kick-off.
pub fn set_second_half(state: &mut MatchState) {
    state.half = state.half.next();

    info!("Half {} begins", state.half.number());

    for side in TeamSide::BOTH {
        let end = state.defended_end(side);
        let team = state.teams.get_mut(side);

        team.place_origins(&state.pitch, end);
        team.players.iter_mut().for_each(|p| p.recover());
    }

    let kicks_off = if state.half.is_odd() {
        TeamSide::KickOff
    } else {
        TeamSide::Second
    };

    set_kick_off(state, kicks_off);
}
