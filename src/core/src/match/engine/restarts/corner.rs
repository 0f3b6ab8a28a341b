use crate::r#match::engine::events::RestartKind;
use crate::r#match::engine::field::{PitchEnd, Touchline};
use crate::r#match::engine::restarts::{award_ball, begin_restart, pick_player, place};
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::{PlayerRef, TeamSide};

/// Corner for the attacking `side` at the `corner` flag of `end`.
pub fn set_corner(state: &mut MatchState, side: TeamSide, end: PitchEnd, corner: Touchline) {
    begin_restart(state, RestartKind::Corner, side);
    state.teams.get_mut(side).statistics.corners += 1;

    let pitch = state.pitch.clone();
    let spot = pitch.corner(end, corner);
    let centre = pitch.half_width;

    let attack = state.teams.get(side).roles;
    let defence = state.teams.get(side.opposite()).roles;

    let Some(taker) = pick_player(state, side, &[attack.wide_left, attack.wide_right], &spot)
    else {
        return;
    };

    // attackers crowd the box
    let targets = [
        (attack.strikers[0], centre - 6.0, pitch.penalty_spot_depth),
        (attack.strikers[1], centre + 6.0, pitch.penalty_spot_depth + 4.0),
        (attack.centre_backs[0], centre - 12.0, pitch.sixth * 0.6),
        (attack.centre_backs[1], centre + 12.0, pitch.sixth * 0.7),
        (attack.centre_mids[0], centre - 8.0, pitch.penalty_box_depth + 2.0),
        (attack.centre_mids[1], centre + 8.0, pitch.penalty_box_depth + 2.0),
    ];

    for (index, x, depth) in targets {
        if index != taker.index {
            place(state, PlayerRef::new(side, index), pitch.at_depth(end, x, depth));
        }
    }

    // defenders pick up the runners and cover the posts
    let marks = [
        (defence.keeper, centre, 1.0),
        (defence.centre_backs[0], centre - 6.0, pitch.penalty_spot_depth - 1.0),
        (defence.centre_backs[1], centre + 6.0, pitch.penalty_spot_depth + 3.0),
        (defence.left_back, centre - pitch.goal_half_width + 2.0, 2.0),
        (defence.right_back, centre + pitch.goal_half_width - 2.0, 2.0),
        (defence.centre_mids[0], centre - 12.0, pitch.sixth * 0.6 - 1.0),
        (defence.centre_mids[1], centre + 12.0, pitch.sixth * 0.7 - 1.0),
    ];

    for (index, x, depth) in marks {
        place(state, PlayerRef::new(side.opposite(), index), pitch.at_depth(end, x, depth));
    }

    award_ball(state, taker, spot);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::engine::fixtures;
    use nalgebra::Vector2;

    #[test]
    fn test_corner_flag_and_counter() {
        let mut state = fixtures::match_state(91);

        set_corner(&mut state, TeamSide::KickOff, PitchEnd::Bottom, Touchline::Right);

        assert_eq!(state.ball.xy(), Vector2::new(100.0, 132.0));
        assert_eq!(state.teams.kick_off.statistics.corners, 1);
        assert_eq!(state.ball.carrier().map(|p| p.side), Some(TeamSide::KickOff));
        fixtures::assert_single_carrier(&state);
    }

    #[test]
    fn test_defending_keeper_on_line() {
        let mut state = fixtures::match_state(92);

        set_corner(&mut state, TeamSide::Second, PitchEnd::Top, Touchline::Left);

        let keeper = state.teams.kick_off.keeper();
        assert_eq!(keeper.current, Vector2::new(50.0, 1.0));
        assert_eq!(state.ball.xy(), Vector2::new(0.0, 0.0));
        assert!(state.stoppage);
    }
}
