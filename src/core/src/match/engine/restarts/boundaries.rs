use crate::r#match::engine::events::MatchEvent;
use crate::r#match::engine::field::{PitchEnd, Touchline};
use crate::r#match::engine::restarts::{set_corner, set_goal_kick, set_goal_scored, set_throw_in};
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::{PlayerRef, TeamSide};
use crate::utils::within_envelope;
use log::info;
use nalgebra::Vector2;

/// A keeper this close to where the ball crosses the goal line claims it.
const KEEPER_CLAIM_REACH: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    InPlay,
    ThrowIn {
        side: TeamSide,
        touchline: Touchline,
    },
    Goal {
        scoring: TeamSide,
        end: PitchEnd,
    },
    KeeperClaim {
        keeper: PlayerRef,
    },
    GoalKick {
        side: TeamSide,
        end: PitchEnd,
    },
    Corner {
        side: TeamSide,
        end: PitchEnd,
        corner: Touchline,
    },
}

/// Decides what an intended ball position means, in priority order: left
/// touchline, right touchline, top line, bottom line.
pub fn classify_boundary(state: &MatchState, kicker: PlayerRef, target: &Vector2<f32>) -> Boundary {
    let pitch = &state.pitch;

    if target.x < 0.0 {
        return Boundary::ThrowIn {
            side: kicker.side.opposite(),
            touchline: Touchline::Left,
        };
    }

    if target.x > pitch.width {
        return Boundary::ThrowIn {
            side: kicker.side.opposite(),
            touchline: Touchline::Right,
        };
    }

    let end = if target.y < 0.0 {
        PitchEnd::Top
    } else if target.y > pitch.height {
        PitchEnd::Bottom
    } else {
        return Boundary::InPlay;
    };

    let defending = state.defender_of(end);

    if pitch.is_in_goal_mouth(target.x) {
        let keeper = PlayerRef::new(defending, state.teams.get(defending).roles.keeper);
        let crossing = Vector2::new(target.x, pitch.goal_line_y(end));
        let keeper_player = state.player(keeper);

        if keeper_player.is_active()
            && within_envelope(
                &(crossing - keeper_player.current),
                KEEPER_CLAIM_REACH,
                KEEPER_CLAIM_REACH,
            )
        {
            return Boundary::KeeperClaim { keeper };
        }

        return Boundary::Goal {
            scoring: defending.opposite(),
            end,
        };
    }

    if kicker.side != defending {
        Boundary::GoalKick {
            side: defending,
            end,
        }
    } else {
        Boundary::Corner {
            side: defending.opposite(),
            end,
            corner: pitch.nearer_touchline(target.x),
        }
    }
}

/// Single authoritative path for everything that happens when the ball
/// reaches `target`: in play, throw-in, goal, goal kick or corner.
pub fn keep_in_boundaries(
    state: &mut MatchState,
    kicker: PlayerRef,
    target: Vector2<f32>,
) -> Boundary {
    let boundary = classify_boundary(state, kicker, &target);

    match boundary {
        Boundary::InPlay => {
            state.ball.place(target);
        }
        Boundary::ThrowIn { side, touchline } => {
            set_throw_in(state, side, touchline, target.y);
        }
        Boundary::Goal { scoring, .. } => {
            record_goal(state, scoring, kicker);
            set_goal_scored(state, scoring.opposite());
        }
        Boundary::KeeperClaim { keeper } => {
            if state.ball.shot && keeper.side != kicker.side {
                state.player_mut(kicker).statistics.shots.on_target += 1;
                state.teams.get_mut(kicker.side).statistics.shots.on_target += 1;
                state.player_mut(keeper).statistics.saves += 1;
            }

            let event = MatchEvent::KeeperClaim {
                side: keeper.side,
                keeper: state.player(keeper).id,
            };
            let line = format!("{} claims the ball on the line", state.describe(keeper));
            state.record(event, line);

            let position = state.player(keeper).current;
            state.ball.give_to(keeper, position);
        }
        Boundary::GoalKick { side, .. } => {
            record_miss(state, kicker);
            set_goal_kick(state, side);
        }
        Boundary::Corner { side, end, corner } => {
            record_miss(state, kicker);
            set_corner(state, side, end, corner);
        }
    }

    boundary
}

fn record_goal(state: &mut MatchState, scoring: TeamSide, kicker: PlayerRef) {
    let own_goal = kicker.side != scoring;
    let shot = state.ball.shot;

    state.teams.get_mut(scoring).statistics.goals += 1;

    let scorer = state.player_mut(kicker);
    if own_goal {
        scorer.statistics.own_goals += 1;
    } else {
        scorer.statistics.goals += 1;
        if shot {
            scorer.statistics.shots.on_target += 1;
        }
    }

    if shot && !own_goal {
        state.teams.get_mut(scoring).statistics.shots.on_target += 1;
    }

    let scorer_id = state.player(kicker).id;
    let line = format!(
        "Goal for {} by {}{}",
        state.teams.get(scoring).name,
        state.describe(kicker),
        if own_goal { " (own goal)" } else { "" }
    );

    info!(
        "{} {} - {} {}",
        state.teams.kick_off.name,
        state.teams.kick_off.statistics.goals,
        state.teams.second.statistics.goals,
        state.teams.second.name
    );

    state.record(
        MatchEvent::Goal {
            side: scoring,
            scorer: scorer_id,
            own_goal,
        },
        line,
    );
}

fn record_miss(state: &mut MatchState, kicker: PlayerRef) {
    if !state.ball.shot {
        return;
    }

    state.player_mut(kicker).statistics.shots.off_target += 1;
    state.teams.get_mut(kicker.side).statistics.shots.off_target += 1;
}
