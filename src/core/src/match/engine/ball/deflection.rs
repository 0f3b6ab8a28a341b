use crate::r#match::engine::ball::BallDirection;
use crate::r#match::engine::events::MatchEvent;
use crate::r#match::engine::restarts::{keep_in_boundaries, set_free_kick};
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::PlayerRef;
use crate::utils::random_number;
use nalgebra::Vector2;
use rand::rngs::StdRng;

/// Below this remaining power the deflecting player simply keeps the ball.
const CONTROL_POWER: f32 = 75.0;
const CROSS_AXIS_JITTER: i32 = 3;

/// The ball hit `deflector` at `at` after travelling `travelled` units.
pub fn resolve_deflection(
    state: &mut MatchState,
    kicker: PlayerRef,
    deflector: PlayerRef,
    at: Vector2<f32>,
    power: f32,
    travelled: f32,
) {
    let remaining = power - travelled;
    let deflector_position = state.player(deflector).current;
    let heading = state.ball.direction;

    state.ball.stop();

    let event = MatchEvent::Deflection {
        side: deflector.side,
        player: state.player(deflector).id,
        remaining_power: remaining,
    };
    let line = format!(
        "Ball kicked by {} deflects off {}",
        state.describe(kicker),
        state.describe(deflector)
    );
    state.record(event, line);

    if remaining < CONTROL_POWER {
        if state.player(deflector).offside {
            let event = MatchEvent::Offside {
                side: deflector.side,
                player: state.player(deflector).id,
            };
            let line = format!("{} is offside", state.describe(deflector));
            state.record(event, line);

            set_free_kick(state, deflector.side.opposite(), deflector_position);
            return;
        }

        state.ball.give_to(deflector, deflector_position);
        return;
    }

    let target = at + rebound_offset(state, heading, remaining);

    state.ball.place(at);
    state.ball.last_touch = Some(deflector);
    state.ball.direction = BallDirection::from_delta(&(target - at));

    keep_in_boundaries(state, deflector, target);
}

/// Half the remaining power along the current heading, with jitter on any
/// axis the heading does not cover.
fn rebound_offset(state: &mut MatchState, heading: BallDirection, remaining: f32) -> Vector2<f32> {
    let unit = heading.unit();
    let push = remaining / 2.0;

    if heading == BallDirection::Wait {
        let spread = push.round() as i32;

        return Vector2::new(
            random_number(&mut state.rng, -spread, spread) as f32,
            random_number(&mut state.rng, -spread, spread) as f32,
        );
    }

    let jitter = |rng: &mut StdRng, axis: f32| {
        if axis == 0.0 {
            random_number(rng, -CROSS_AXIS_JITTER, CROSS_AXIS_JITTER) as f32
        } else {
            axis * push
        }
    };

    Vector2::new(jitter(&mut state.rng, unit.x), jitter(&mut state.rng, unit.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::engine::fixtures;
    use crate::r#match::engine::team::TeamSide;
    use crate::utils::is_between;

    #[test]
    fn test_weak_ball_is_controlled() {
        let mut state = fixtures::match_state(41);
        let kicker = PlayerRef::new(TeamSide::KickOff, 6);
        let deflector = PlayerRef::new(TeamSide::Second, 6);
        let at = state.player(deflector).current;

        resolve_deflection(&mut state, kicker, deflector, at, 80.0, 10.0);

        assert_eq!(state.ball.carrier(), Some(deflector));
        assert_eq!(state.ball.xy(), at);
        assert!(!state.stoppage);
    }

    #[test]
    fn test_offside_deflector_concedes_free_kick() {
        let mut state = fixtures::match_state(42);
        let kicker = PlayerRef::new(TeamSide::KickOff, 6);
        let deflector = PlayerRef::new(TeamSide::KickOff, 9);
        state.player_mut(deflector).offside = true;
        let at = state.player(deflector).current;

        resolve_deflection(&mut state, kicker, deflector, at, 20.0, 5.0);

        assert!(state.stoppage);
        assert_eq!(state.ball.carrier().map(|p| p.side), Some(TeamSide::Second));
        assert_eq!(state.teams.second.statistics.freekicks, 1);
    }

    #[test]
    fn test_strong_ball_rebounds_along_heading() {
        let mut state = fixtures::match_state(43);
        let kicker = PlayerRef::new(TeamSide::KickOff, 6);
        let deflector = PlayerRef::new(TeamSide::Second, 6);
        let at = Vector2::new(50.0, 60.0);

        state.ball.direction = BallDirection::South;

        // remaining 100, so the ball rebounds 50 units south
        resolve_deflection(&mut state, kicker, deflector, at, 110.0, 10.0);

        assert!(state.ball.carrier().is_none());
        assert!(!state.ball.is_in_flight());
        assert_eq!(state.ball.position.y, 110.0);
        assert!(is_between(state.ball.position.x, 46.5, 53.5));
        assert_eq!(state.ball.last_touch, Some(deflector));
    }
}
