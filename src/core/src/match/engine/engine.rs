use crate::error::ConfigError;
use crate::r#match::engine::actions::{Action, decide_action};
use crate::r#match::engine::ball::{kick, move_ball};
use crate::r#match::engine::field::{Pitch, PitchEnd};
use crate::r#match::engine::player::{
    TackleKind, can_reach_holder, check_injuries, check_offside, move_player, resolve_tackle,
    try_take_ball,
};
use crate::r#match::engine::restarts::{set_kick_off, set_second_half};
use crate::r#match::engine::state::{BallState, MatchPeriod, MatchState, StateManager};
use crate::r#match::engine::team::intent::{update_intents, update_relative_positions};
use crate::r#match::engine::team::{MatchTeam, PlayerRef, TeamSide};
use crate::r#match::result::{MatchResult, MatchSnapshot, ResultMatchPositionData};
use crate::r#match::squad::{PitchDescriptor, TeamDescriptor, ensure_unique_ids};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Ticks per half when nothing else is configured.
pub const DEFAULT_TICKS_PER_HALF: u64 = 2700;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Fixed seed for a reproducible match. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub ticks_per_half: u64,
    /// Keep per-tick ball and player positions for replay.
    pub record_positions: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            seed: None,
            ticks_per_half: DEFAULT_TICKS_PER_HALF,
            record_positions: false,
        }
    }
}

pub struct FootballEngine;

impl FootballEngine {
    /// Validates the descriptors and returns a match ready for its first tick,
    /// with the kick-off team on the ball.
    pub fn start_match(
        pitch: &PitchDescriptor,
        kick_off: &TeamDescriptor,
        second: &TeamDescriptor,
        config: &EngineConfig,
    ) -> Result<MatchState, ConfigError> {
        let pitch = Pitch::new(pitch.width, pitch.height)?;

        ensure_unique_ids([kick_off, second])?;

        let kick_off_team = MatchTeam::from_descriptor(kick_off, &pitch, PitchEnd::Top)?;
        let second_team = MatchTeam::from_descriptor(second, &pitch, PitchEnd::Bottom)?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut state = MatchState::new(pitch, kick_off_team, second_team, rng);
        set_kick_off(&mut state, TeamSide::KickOff);

        info!(
            "Match started: {} vs {} on {}x{}",
            kick_off.name, second.name, state.pitch.width, state.pitch.height
        );

        Ok(state)
    }

    /// Advances the match by one tick and reports what happened.
    pub fn play_iteration(state: &mut MatchState) -> MatchSnapshot {
        Self::game_tick(state);

        MatchSnapshot::from_state(state)
    }

    pub fn start_second_half(state: &mut MatchState) {
        set_second_half(state);
    }

    /// Plays a full match through its periods.
    pub fn play(
        pitch: &PitchDescriptor,
        kick_off: &TeamDescriptor,
        second: &TeamDescriptor,
        config: &EngineConfig,
    ) -> Result<MatchResult, ConfigError> {
        let mut state = Self::start_match(pitch, kick_off, second, config)?;

        let mut position_data = config
            .record_positions
            .then(ResultMatchPositionData::new);

        let mut state_manager = StateManager::new();

        while let Some(period) = state_manager.next() {
            debug!("Period: {:?}", period);

            match period {
                MatchPeriod::FirstHalf | MatchPeriod::SecondHalf => {
                    Self::play_inner(&mut state, config.ticks_per_half, position_data.as_mut());
                }
                MatchPeriod::HalfTime => Self::start_second_half(&mut state),
                MatchPeriod::Initial | MatchPeriod::End => {}
            }
        }

        let result = MatchResult::from_state(&state, position_data);

        info!(
            "Full time: {} {} - {} {}",
            result.kick_off.name, result.kick_off.statistics.goals,
            result.second.statistics.goals, result.second.name
        );

        Ok(result)
    }

    fn play_inner(
        state: &mut MatchState,
        ticks: u64,
        mut position_data: Option<&mut ResultMatchPositionData>,
    ) {
        for _ in 0..ticks {
            Self::game_tick(state);

            if let Some(data) = position_data.as_deref_mut() {
                Self::write_match_positions(state, data);
            }
        }
    }

    /// One tick: injuries, the ball in flight, shape, then both teams in
    /// order. A restart anywhere ends the tick.
    pub fn game_tick(state: &mut MatchState) {
        state.begin_iteration();

        check_injuries(state);

        move_ball(state);
        let BallState::InPlay = state.ball_state() else {
            return;
        };

        update_intents(state);
        update_relative_positions(state);

        for side in TeamSide::BOTH {
            Self::play_players(state, side);

            let BallState::InPlay = state.ball_state() else {
                return;
            };
        }

        if !state.ball.is_in_flight() {
            check_offside(state);
        }
    }

    fn play_players(state: &mut MatchState, side: TeamSide) {
        let players: Vec<PlayerRef> = state.teams.active_refs(side).collect();

        for me in players {
            // a tackle earlier this tick may have injured them
            if !state.player(me).is_active() {
                continue;
            }

            let action = Self::play_player(state, me);
            state.player_mut(me).action = action;

            let BallState::InPlay = state.ball_state() else {
                return;
            };
        }
    }

    fn play_player(state: &mut MatchState, me: PlayerRef) -> Action {
        let action = decide_action(state, me);

        if action.is_ball_action() {
            return if kick(state, me, action) {
                action
            } else {
                Action::Wait
            };
        }

        let tackle = match action {
            Action::Tackle => Some(TackleKind::Standing),
            Action::Slide => Some(TackleKind::Slide),
            _ => None,
        };

        if let Some(kind) = tackle {
            if can_reach_holder(state, me, kind) {
                resolve_tackle(state, me, kind);
                return action;
            }
        }

        move_player(state, me, action);
        try_take_ball(state, me);

        action
    }

    pub fn write_match_positions(state: &MatchState, data: &mut ResultMatchPositionData) {
        for side in TeamSide::BOTH {
            for player in &state.teams.get(side).players {
                data.add_player_positions(player.id, state.tick, player.current);
            }
        }

        data.add_ball_positions(state.tick, state.ball.position);
    }
}
