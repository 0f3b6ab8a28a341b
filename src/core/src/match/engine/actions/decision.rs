use crate::r#match::engine::actions::{Action, ActionWeights, select_action};
use crate::r#match::engine::field::Pitch;
use crate::r#match::engine::state::{MatchState, Possession};
use crate::r#match::engine::team::PlayerRef;
use crate::utils::{is_between, within_envelope};
use nalgebra::Vector2;

/// An opponent this close (Manhattan) is pressing.
const CLOSE_OPPONENT: f32 = 10.0;
/// A teammate this close is an easy pass.
const CLOSE_TEAMMATE: f32 = 10.0;
/// Keepers hurry their distribution when an opponent is within this range.
const KEEPER_PRESSURE: f32 = 25.0;
/// Fitness needed to sprint.
const SPRINT_FITNESS: f32 = 20.0;

/// Everything the weight tables look at, measured from the player's own goal
/// line so both orientations share one tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Situation {
    pub possession: Possession,
    pub is_goalkeeper: bool,
    pub position: Vector2<f32>,
    /// Depth from the player's own goal line.
    pub progress: f32,
    /// Ball minus player position.
    pub ball_delta: Vector2<f32>,
    pub nearest_opponent: f32,
    pub nearest_teammate: f32,
    pub shooting: u32,
    pub in_own_box: bool,
    pub in_attacking_box: bool,
}

impl Situation {
    pub fn observe(state: &MatchState, me: PlayerRef) -> Situation {
        let player = state.player(me);
        let position = player.current;

        Situation {
            possession: state.possession(me),
            is_goalkeeper: player.is_goalkeeper(),
            position,
            progress: state.progress(me.side, &position),
            ball_delta: state.ball.xy() - position,
            nearest_opponent: state.nearest_proximity(me, me.side.opposite()),
            nearest_teammate: state.nearest_proximity(me, me.side),
            shooting: player.skills.shooting,
            in_own_box: state
                .pitch
                .in_penalty_box(state.defended_end(me.side), &position),
            in_attacking_box: state
                .pitch
                .in_penalty_box(state.attacked_end(me.side), &position),
        }
    }

    fn distance_to_goal(&self, pitch: &Pitch) -> f32 {
        pitch.height - self.progress
    }

    fn opponent_near(&self) -> bool {
        self.nearest_opponent < CLOSE_OPPONENT
    }

    fn teammate_near(&self) -> bool {
        self.nearest_teammate < CLOSE_TEAMMATE
    }

    fn is_wide(&self, pitch: &Pitch) -> bool {
        !is_between(self.position.x, pitch.penalty_box_left, pitch.penalty_box_right)
    }

    /// Depth inside which a player of this shooting skill will try a shot.
    fn shooting_range(&self, pitch: &Pitch) -> f32 {
        pitch.sixth + self.shooting as f32 * pitch.sixth / 100.0
    }
}

/// Weight tables in slot order
/// shoot, throughBall, pass, cross, tackle, intercept, slide, run, sprint, cleared, boot.
pub fn action_weights(pitch: &Pitch, situation: &Situation) -> ActionWeights {
    match situation.possession {
        Possession::HasBall => with_ball(pitch, situation),
        _ => without_ball(situation),
    }
}

fn with_ball(pitch: &Pitch, s: &Situation) -> ActionWeights {
    if s.is_goalkeeper {
        return if s.nearest_opponent < KEEPER_PRESSURE {
            [0, 0, 10, 0, 0, 0, 0, 10, 0, 40, 40]
        } else {
            [0, 0, 50, 0, 0, 0, 0, 10, 0, 20, 20]
        };
    }

    let distance_to_goal = s.distance_to_goal(pitch);

    // near the attacking corner flag
    if distance_to_goal < pitch.sixth && s.is_wide(pitch) {
        return [0, 0, 20, 80, 0, 0, 0, 0, 0, 0, 0];
    }

    if s.in_attacking_box {
        return if distance_to_goal < pitch.sixth && !s.opponent_near() {
            [90, 0, 10, 0, 0, 0, 0, 0, 0, 0, 0]
        } else if s.opponent_near() {
            [70, 10, 10, 0, 0, 0, 0, 10, 0, 0, 0]
        } else {
            [60, 10, 10, 0, 0, 0, 0, 20, 0, 0, 0]
        };
    }

    if distance_to_goal < s.shooting_range(pitch) {
        return if s.is_wide(pitch) {
            [10, 10, 30, 40, 0, 0, 0, 10, 0, 0, 0]
        } else if s.opponent_near() {
            [30, 20, 30, 0, 0, 0, 0, 10, 10, 0, 0]
        } else {
            [50, 10, 20, 0, 0, 0, 0, 10, 10, 0, 0]
        };
    }

    if s.progress > pitch.half_height {
        return if s.opponent_near() {
            [0, 20, 50, 0, 0, 0, 0, 20, 10, 0, 0]
        } else if s.teammate_near() {
            [0, 10, 70, 0, 0, 0, 0, 20, 0, 0, 0]
        } else {
            [0, 10, 20, 0, 0, 0, 0, 50, 20, 0, 0]
        };
    }

    if s.progress < pitch.third {
        return if s.opponent_near() {
            [0, 0, 30, 0, 0, 0, 0, 10, 0, 40, 20]
        } else {
            [0, 10, 50, 0, 0, 0, 0, 30, 10, 0, 0]
        };
    }

    if s.opponent_near() {
        [0, 10, 60, 0, 0, 0, 0, 20, 10, 0, 0]
    } else if s.teammate_near() {
        [0, 0, 70, 10, 0, 0, 0, 20, 0, 0, 0]
    } else {
        [0, 10, 30, 0, 0, 0, 0, 40, 20, 0, 0]
    }
}

fn without_ball(s: &Situation) -> ActionWeights {
    if s.is_goalkeeper {
        return [0, 0, 0, 0, 0, 0, 0, 60, 40, 0, 0];
    }

    if within_envelope(&s.ball_delta, 20.0, 20.0) {
        return match s.possession {
            Possession::OpponentHasBall if s.in_own_box => [0, 0, 0, 0, 40, 40, 20, 0, 0, 0, 0],
            Possession::OpponentHasBall => [0, 0, 0, 0, 70, 10, 20, 0, 0, 0, 0],
            Possession::Loose => [0, 0, 0, 0, 0, 20, 0, 40, 40, 0, 0],
            _ => [0, 0, 0, 0, 0, 0, 0, 70, 30, 0, 0],
        };
    }

    if within_envelope(&s.ball_delta, 40.0, 40.0) {
        return match s.possession {
            Possession::OpponentHasBall => [0, 0, 0, 0, 40, 20, 10, 10, 20, 0, 0],
            Possession::Loose => [0, 0, 0, 0, 0, 10, 0, 40, 50, 0, 0],
            _ => [0, 0, 0, 0, 0, 0, 0, 60, 40, 0, 0],
        };
    }

    if within_envelope(&s.ball_delta, 80.0, 80.0) {
        return match s.possession {
            Possession::Loose => [0, 0, 0, 0, 0, 0, 0, 60, 40, 0, 0],
            _ => [0, 0, 0, 0, 0, 40, 0, 30, 30, 0, 0],
        };
    }

    [0, 0, 0, 0, 0, 10, 0, 50, 30, 0, 0]
}

/// Picks this tick's action for `me`, applying the possession corrections
/// on top of the weighted draw.
pub fn decide_action(state: &mut MatchState, me: PlayerRef) -> Action {
    if state.penalty_taker == Some(me) {
        return Action::Penalty;
    }

    let situation = Situation::observe(state, me);
    let weights = action_weights(&state.pitch, &situation);
    let mut action = select_action(&mut state.rng, &weights);

    if action.is_ball_action() && situation.possession != Possession::HasBall {
        action = Action::Run;
    }

    if situation.possession == Possession::Loose && !situation.is_goalkeeper {
        let chaser = state
            .closest_player(me.side, &state.ball.xy(), None)
            .map(|(player, _)| player);

        if chaser == Some(me) {
            action = Action::Sprint;
        }
    }

    if action == Action::Sprint && state.player(me).fitness <= SPRINT_FITNESS {
        action = Action::Run;
    }

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::engine::field::PitchEnd;
    use crate::r#match::engine::fixtures;
    use crate::r#match::engine::team::TeamSide;

    fn situation(possession: Possession) -> Situation {
        Situation {
            possession,
            is_goalkeeper: false,
            position: Vector2::new(50.0, 66.0),
            progress: 66.0,
            ball_delta: Vector2::new(0.0, 0.0),
            nearest_opponent: 30.0,
            nearest_teammate: 30.0,
            shooting: 50,
            in_own_box: false,
            in_attacking_box: false,
        }
    }

    #[test]
    fn test_close_range_alone_in_box_shoots() {
        let pitch = fixtures::field();
        let mut s = situation(Possession::HasBall);
        s.position = Vector2::new(50.0, 120.0);
        s.progress = 120.0;
        s.in_attacking_box = true;

        assert_eq!(action_weights(&pitch, &s), [90, 0, 10, 0, 0, 0, 0, 0, 0, 0, 0]);

        s.nearest_opponent = 4.0;
        assert_eq!(action_weights(&pitch, &s), [70, 10, 10, 0, 0, 0, 0, 10, 0, 0, 0]);
    }

    #[test]
    fn test_attacking_corner_crosses() {
        let pitch = fixtures::field();
        let mut s = situation(Possession::HasBall);
        s.position = Vector2::new(95.0, 125.0);
        s.progress = 125.0;

        assert_eq!(action_weights(&pitch, &s), [0, 0, 20, 80, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_pressed_in_own_third_clears() {
        let pitch = fixtures::field();
        let mut s = situation(Possession::HasBall);
        s.progress = 20.0;
        s.nearest_opponent = 5.0;

        assert_eq!(action_weights(&pitch, &s), [0, 0, 30, 0, 0, 0, 0, 10, 0, 40, 20]);
    }

    #[test]
    fn test_keeper_tables() {
        let pitch = fixtures::field();
        let mut s = situation(Possession::HasBall);
        s.is_goalkeeper = true;
        s.nearest_opponent = 12.0;

        assert_eq!(action_weights(&pitch, &s), [0, 0, 10, 0, 0, 0, 0, 10, 0, 40, 40]);

        s.nearest_opponent = 60.0;
        assert_eq!(action_weights(&pitch, &s), [0, 0, 50, 0, 0, 0, 0, 10, 0, 20, 20]);

        s.possession = Possession::Loose;
        assert_eq!(action_weights(&pitch, &s), [0, 0, 0, 0, 0, 0, 0, 60, 40, 0, 0]);
    }

    #[test]
    fn test_defending_near_ball_in_own_box() {
        let pitch = fixtures::field();
        let mut s = situation(Possession::OpponentHasBall);
        s.ball_delta = Vector2::new(5.0, -5.0);
        s.in_own_box = true;

        assert_eq!(action_weights(&pitch, &s), [0, 0, 0, 0, 40, 40, 20, 0, 0, 0, 0]);

        s.in_own_box = false;
        assert_eq!(action_weights(&pitch, &s), [0, 0, 0, 0, 70, 10, 20, 0, 0, 0, 0]);
    }

    #[test]
    fn test_far_from_ball_bands() {
        let pitch = fixtures::field();
        let mut s = situation(Possession::TeamHasBall);

        s.ball_delta = Vector2::new(0.0, 30.0);
        assert_eq!(action_weights(&pitch, &s), [0, 0, 0, 0, 0, 0, 0, 60, 40, 0, 0]);

        s.ball_delta = Vector2::new(0.0, 60.0);
        assert_eq!(action_weights(&pitch, &s), [0, 0, 0, 0, 0, 40, 0, 30, 30, 0, 0]);

        s.ball_delta = Vector2::new(0.0, 100.0);
        assert_eq!(action_weights(&pitch, &s), [0, 0, 0, 0, 0, 10, 0, 50, 30, 0, 0]);
    }

    #[test]
    fn test_nominated_penalty_taker_is_forced() {
        let mut state = fixtures::match_state(21);
        let taker = PlayerRef::new(TeamSide::KickOff, 9);
        state.penalty_taker = Some(taker);

        assert_eq!(decide_action(&mut state, taker), Action::Penalty);
    }

    #[test]
    fn test_player_without_ball_never_kicks() {
        let mut state = fixtures::match_state(22);
        let carrier = PlayerRef::new(TeamSide::Second, 9);
        let position = state.player(carrier).current;
        state.ball.give_to(carrier, position);

        for index in 1..11 {
            let me = PlayerRef::new(TeamSide::KickOff, index);

            for _ in 0..20 {
                assert!(!decide_action(&mut state, me).is_ball_action());
            }
        }
    }

    #[test]
    fn test_closest_player_chases_loose_ball() {
        let mut state = fixtures::match_state(23);
        let chaser = PlayerRef::new(TeamSide::Second, 9);
        let spot = state.player(chaser).current + Vector2::new(1.0, 0.0);
        state.ball.place(spot);

        assert_eq!(state.defended_end(TeamSide::KickOff), PitchEnd::Top);
        assert_eq!(decide_action(&mut state, chaser), Action::Sprint);
    }
}
