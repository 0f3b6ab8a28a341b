use crate::r#match::engine::actions::Action;
use crate::r#match::engine::ball::calc_ball_movement_over_time;
use crate::r#match::engine::events::MatchEvent;
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::PlayerRef;
use crate::utils::{manhattan, random_number};
use log::warn;
use nalgebra::Vector2;

/// How far past the goal line shots are aimed, so the boundary dispatcher
/// decides between goal, goal kick and corner.
const BEYOND_LINE: f32 = 1.0;

/// Executes a ball action for the carrier. Returns `false` when nothing
/// could be done and the player should be treated as waiting.
pub fn kick(state: &mut MatchState, me: PlayerRef, action: Action) -> bool {
    if !state.has_ball(me) {
        return false;
    }

    match action {
        Action::Shoot => shoot(state, me),
        Action::Penalty => take_penalty(state, me),
        Action::Pass => pass(state, me, false),
        Action::ThroughBall => pass(state, me, true),
        Action::Cross => cross(state, me),
        Action::Cleared => clear(state, me),
        Action::Boot => boot(state, me),
        _ => false,
    }
}

fn shoot(state: &mut MatchState, me: PlayerRef) -> bool {
    let player = state.player(me);
    let goal = state.pitch.goal_centre(state.attacked_end(me.side));

    // weaker shooters spread wider than the goal mouth
    let spread = (state.pitch.goal_half_width * (2.0 - player.skills.shooting as f32 / 100.0))
        .round() as i32;
    let strength = player.skills.strength;

    let x = goal.x + random_number(&mut state.rng, -spread, spread) as f32;
    let target = Vector2::new(x, beyond_line(state, me));

    register_shot(state, me);
    calc_ball_movement_over_time(state, me, strength, target);

    true
}

fn take_penalty(state: &mut MatchState, me: PlayerRef) -> bool {
    state.penalty_taker = None;

    let player = state.player(me);
    let goal = state.pitch.goal_centre(state.attacked_end(me.side));

    let corner = (state.pitch.goal_half_width - 1.0).round() as i32;
    let miss = (100 - player.skills.penalty_taking.min(100)) as i32 / 10;
    let strength = player.skills.strength;

    let offset = random_number(&mut state.rng, -corner - miss, corner + miss) as f32;
    let target = Vector2::new(goal.x + offset, beyond_line(state, me));

    register_shot(state, me);
    calc_ball_movement_over_time(state, me, strength, target);

    true
}

fn pass(state: &mut MatchState, me: PlayerRef, through: bool) -> bool {
    let Some(receiver) = pass_target(state, me) else {
        warn!("no pass target for {}", state.describe(me));
        return false;
    };

    let player = state.player(me);
    let inaccuracy = (100 - player.skills.passing.min(100)) as i32 / 10;
    let strength = player.skills.strength;

    let mut target = state.player(receiver).current;

    if through {
        let lead = random_number(&mut state.rng, 5, 15) as f32;
        target.y += state.attack_sign(me.side) * lead;
    }

    target.x += random_number(&mut state.rng, -inaccuracy, inaccuracy) as f32;
    target.y += random_number(&mut state.rng, -inaccuracy, inaccuracy) as f32;
    let target = state.pitch.clamp(target);

    state.player_mut(me).statistics.passes += 1;
    state.note(format!(
        "{} passes to {}",
        state.describe(me),
        state.describe(receiver)
    ));

    calc_ball_movement_over_time(state, me, strength, target);

    true
}

/// Nearest teammate ahead of the ball, or the nearest one at all.
fn pass_target(state: &MatchState, me: PlayerRef) -> Option<PlayerRef> {
    let position = state.player(me).current;
    let my_progress = state.progress(me.side, &position);

    let candidates: Vec<(PlayerRef, f32, bool)> = state
        .teams
        .active_refs(me.side)
        .filter(|p| *p != me)
        .map(|p| {
            let current = state.player(p).current;
            let ahead = state.progress(me.side, &current) > my_progress;

            (p, manhattan(&position, &current).1, ahead)
        })
        .collect();

    let nearest = |ahead_only: bool| {
        candidates
            .iter()
            .filter(|(_, _, ahead)| !ahead_only || *ahead)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(p, _, _)| *p)
    };

    nearest(true).or_else(|| nearest(false))
}

fn cross(state: &mut MatchState, me: PlayerRef) -> bool {
    let end = state.attacked_end(me.side);
    let pitch = &state.pitch;

    let (left, right) = (pitch.penalty_box_left as i32, pitch.penalty_box_right as i32);
    let (near, far) = ((pitch.sixth / 3.0) as i32, pitch.sixth as i32);
    let strength = state.player(me).skills.strength;

    let x = random_number(&mut state.rng, left, right) as f32;
    let depth = random_number(&mut state.rng, near, far) as f32;
    let target = state.pitch.at_depth(end, x, depth);

    state.note(format!("{} crosses into the box", state.describe(me)));
    calc_ball_movement_over_time(state, me, strength, target);

    true
}

fn clear(state: &mut MatchState, me: PlayerRef) -> bool {
    let position = state.player(me).current;
    let end = state.defended_end(me.side);
    let progress = state.pitch.depth_from(end, &position);

    let third = state.pitch.third as i32;
    let distance = random_number(&mut state.rng, third / 2, third) as f32;
    let width = state.pitch.width as i32;
    let x = random_number(&mut state.rng, 0, width) as f32;

    let target = state.pitch.at_depth(end, x, progress + distance);
    let strength = state.player(me).skills.strength;

    state.note(format!("{} clears the ball", state.describe(me)));
    calc_ball_movement_over_time(state, me, strength, target);

    true
}

fn boot(state: &mut MatchState, me: PlayerRef) -> bool {
    let end = state.attacked_end(me.side);
    let (sixth, third) = (state.pitch.sixth as i32, state.pitch.third as i32);
    let width = state.pitch.width as i32;

    let depth = random_number(&mut state.rng, sixth, third) as f32;
    let x = random_number(&mut state.rng, 0, width) as f32;
    let target = state.pitch.at_depth(end, x, depth);
    let strength = state.player(me).skills.strength;

    state.note(format!("{} boots it upfield", state.describe(me)));
    calc_ball_movement_over_time(state, me, strength, target);

    true
}

fn beyond_line(state: &MatchState, me: PlayerRef) -> f32 {
    let end = state.attacked_end(me.side);

    state.pitch.at_depth(end, 0.0, -BEYOND_LINE).y
}

fn register_shot(state: &mut MatchState, me: PlayerRef) {
    state.ball.shot = true;
    state.player_mut(me).statistics.shots.total += 1;
    state.teams.get_mut(me.side).statistics.shots.total += 1;

    let event = MatchEvent::Shot {
        side: me.side,
        player: state.player(me).id,
    };
    let line = format!("{} shoots", state.describe(me));
    state.record(event, line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::engine::field::PitchEnd;
    use crate::r#match::engine::fixtures;
    use crate::r#match::engine::team::TeamSide;

    #[test]
    fn test_kick_without_ball_does_nothing() {
        let mut state = fixtures::kick_off_state(51);
        let idle = PlayerRef::new(TeamSide::Second, 5);

        assert!(!kick(&mut state, idle, Action::Pass));
        assert_eq!(state.player(idle).statistics.passes, 0);
    }

    #[test]
    fn test_shot_is_counted_and_aimed_beyond_line() {
        let mut state = fixtures::kick_off_state(52);
        let shooter = state.ball.carrier().unwrap();

        assert_eq!(beyond_line(&state, shooter), 133.0);
        assert!(kick(&mut state, shooter, Action::Shoot));
        assert_eq!(state.player(shooter).statistics.shots.total, 1);
        assert_eq!(state.teams.kick_off.statistics.shots.total, 1);
        assert!(state.ball.carrier() != Some(shooter));
    }

    #[test]
    fn test_pass_prefers_teammate_ahead() {
        let mut state = fixtures::match_state(53);
        let passer = PlayerRef::new(TeamSide::KickOff, 2);

        let receiver = pass_target(&state, passer).unwrap();
        let passer_progress = state.progress(TeamSide::KickOff, &state.player(passer).current);
        let receiver_progress = state.progress(TeamSide::KickOff, &state.player(receiver).current);

        assert!(receiver_progress > passer_progress);

        // nobody ahead of the most advanced player, so the nearest teammate is used
        let striker = PlayerRef::new(TeamSide::KickOff, 9);
        for index in 1..11 {
            if index != 9 {
                let back = state.pitch.at_depth(PitchEnd::Top, 50.0, 10.0);
                state.player_mut(PlayerRef::new(TeamSide::KickOff, index)).current = back;
            }
        }

        assert!(pass_target(&state, striker).is_some());
    }

    #[test]
    fn test_penalty_clears_nomination() {
        let mut state = fixtures::kick_off_state(54);
        let taker = state.ball.carrier().unwrap();
        state.penalty_taker = Some(taker);

        assert!(kick(&mut state, taker, Action::Penalty));
        assert_eq!(state.penalty_taker, None);
        assert_eq!(state.player(taker).statistics.shots.total, 1);
    }
}
