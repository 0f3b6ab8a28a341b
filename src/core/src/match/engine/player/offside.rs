use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::TeamSide;
use itertools::Itertools;

/// Re-flags offside players on both sides. Left untouched while the ball is
/// travelling so a flag raised at the kick still counts on arrival.
pub fn check_offside(state: &mut MatchState) {
    if state.ball.is_in_flight() {
        return;
    }

    for side in TeamSide::BOTH {
        let flags = offside_flags(state, side);

        for (player, flag) in state.teams.get_mut(side).players.iter_mut().zip(flags) {
            player.offside = flag;
        }
    }
}

/// Offside flag for every player of `side`, by index.
pub fn offside_flags(state: &MatchState, side: TeamSide) -> Vec<bool> {
    let halfway = state.pitch.half_height;
    let ball = state.progress(side, &state.ball.xy());
    let carrier = state.ball.carrier();

    let second_last = state
        .teams
        .get(side.opposite())
        .players
        .iter()
        .filter(|p| p.is_active())
        .map(|p| state.progress(side, &p.current))
        .sorted_by(|a, b| b.total_cmp(a))
        .nth(1)
        .unwrap_or(state.pitch.height);

    state
        .teams
        .refs(side)
        .map(|me| {
            let player = state.player(me);
            let progress = state.progress(side, &player.current);

            player.is_active()
                && carrier != Some(me)
                && progress > halfway
                && progress > second_last
                && progress > ball
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::engine::ball::Waypoint;
    use crate::r#match::engine::fixtures;
    use crate::r#match::engine::team::PlayerRef;
    use nalgebra::Vector2;

    #[test]
    fn test_origins_are_onside() {
        let mut state = fixtures::kick_off_state(171);

        check_offside(&mut state);

        for side in TeamSide::BOTH {
            assert!(state.teams.get(side).players.iter().all(|p| !p.offside));
        }
    }

    #[test]
    fn test_striker_behind_defence_is_flagged() {
        let mut state = fixtures::kick_off_state(172);
        let striker = PlayerRef::new(TeamSide::KickOff, 9);
        let carrier = state.ball.carrier().unwrap();

        // kick-off team attacks the bottom end, second team centre backs stand at y = 116
        state.player_mut(striker).current = Vector2::new(40.0, 125.0);

        check_offside(&mut state);

        if carrier != striker {
            assert!(state.player(striker).offside);
        }
        assert!(!state.player(carrier).offside);
    }

    #[test]
    fn test_player_behind_ball_is_onside() {
        let mut state = fixtures::match_state(173);
        let striker = PlayerRef::new(TeamSide::KickOff, 9);

        state.player_mut(striker).current = Vector2::new(40.0, 125.0);
        state.ball.place(Vector2::new(40.0, 128.0));

        check_offside(&mut state);

        assert!(!state.player(striker).offside);
    }

    #[test]
    fn test_flags_kept_while_ball_in_flight() {
        let mut state = fixtures::match_state(174);
        let striker = PlayerRef::new(TeamSide::KickOff, 9);
        state.player_mut(striker).offside = true;

        state.ball.launch([Waypoint::new(Vector2::new(50.0, 80.0), 40.0)]);

        check_offside(&mut state);

        assert!(state.player(striker).offside);
    }
}
