use crate::r#match::engine::events::RestartKind;
use crate::r#match::engine::restarts::{award_ball, begin_restart, pick_player, place};
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::{PlayerRef, TeamSide};

/// Distance of the goal-kick spot from the goal line.
const GOAL_KICK_DEPTH: f32 = 20.0;

/// Goal kick for the team defending the end the ball went out of.
pub fn set_goal_kick(state: &mut MatchState, side: TeamSide) {
    begin_restart(state, RestartKind::GoalKick, side);

    let end = state.defended_end(side);
    let spot = state.pitch.at_depth(end, state.pitch.half_width, GOAL_KICK_DEPTH);

    for team_side in TeamSide::BOTH {
        state.teams.get_mut(team_side).reset_to_origin();
    }

    // opponents wait outside the box
    let box_edge = state.pitch.penalty_box_depth + 1.0;
    let opponents: Vec<PlayerRef> = state.teams.refs(side.opposite()).collect();

    for opponent in opponents {
        let current = state.player(opponent).current;

        if state.pitch.in_penalty_box(end, &current) {
            let outside = state.pitch.at_depth(end, current.x, box_edge);
            place(state, opponent, outside);
        }
    }

    // an injured keeper leaves it to the nearest outfield player
    let keeper = state.teams.get(side).roles.keeper;
    if let Some(taker) = pick_player(state, side, &[keeper], &spot) {
        award_ball(state, taker, spot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::engine::field::PitchEnd;
    use crate::r#match::engine::fixtures;
    use nalgebra::Vector2;

    #[test]
    fn test_goal_kick_for_bottom_keeper() {
        let mut state = fixtures::match_state(101);
        let keeper = PlayerRef::new(TeamSide::Second, 0);

        assert!(state.player(keeper).origin.y > state.pitch.height / 2.0);

        set_goal_kick(&mut state, TeamSide::Second);

        assert_eq!(state.ball.xy(), Vector2::new(50.0, 112.0));
        assert_eq!(state.ball.carrier(), Some(keeper));
        assert_eq!(state.player(keeper).current, Vector2::new(50.0, 112.0));
        fixtures::assert_single_carrier(&state);
    }

    #[test]
    fn test_goal_kick_for_top_keeper() {
        let mut state = fixtures::match_state(102);

        set_goal_kick(&mut state, TeamSide::KickOff);

        assert_eq!(state.ball.xy(), Vector2::new(50.0, 20.0));
        assert_eq!(state.ball.carrier(), Some(PlayerRef::new(TeamSide::KickOff, 0)));

        for player in &state.teams.second.players {
            assert!(!state.pitch.in_penalty_box(PitchEnd::Top, &player.current));
        }
    }
}
