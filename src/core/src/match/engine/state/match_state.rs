use crate::r#match::engine::ball::Ball;
use crate::r#match::engine::events::{IterationLog, MatchEvent};
use crate::r#match::engine::field::{Pitch, PitchEnd};
use crate::r#match::engine::player::MatchPlayer;
use crate::r#match::engine::state::{BallState, MatchHalf, Possession};
use crate::r#match::engine::team::{MatchTeam, PlayerRef, TeamSide};
use crate::utils::manhattan;
use nalgebra::Vector2;
use rand::rngs::StdRng;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Teams {
    pub kick_off: MatchTeam,
    pub second: MatchTeam,
}

impl Teams {
    pub fn get(&self, side: TeamSide) -> &MatchTeam {
        match side {
            TeamSide::KickOff => &self.kick_off,
            TeamSide::Second => &self.second,
        }
    }

    pub fn get_mut(&mut self, side: TeamSide) -> &mut MatchTeam {
        match side {
            TeamSide::KickOff => &mut self.kick_off,
            TeamSide::Second => &mut self.second,
        }
    }

    pub fn player(&self, player: PlayerRef) -> &MatchPlayer {
        &self.get(player.side).players[player.index]
    }

    pub fn player_mut(&mut self, player: PlayerRef) -> &mut MatchPlayer {
        &mut self.get_mut(player.side).players[player.index]
    }

    /// Every roster slot of one side, active or not.
    pub fn refs(&self, side: TeamSide) -> impl Iterator<Item = PlayerRef> + '_ {
        (0..self.get(side).players.len()).map(move |index| PlayerRef::new(side, index))
    }

    pub fn active_refs(&self, side: TeamSide) -> impl Iterator<Item = PlayerRef> + '_ {
        self.get(side)
            .active_indices()
            .map(move |index| PlayerRef::new(side, index))
    }
}

/// Everything a match mutates between ticks. Owned by the caller and passed
/// by `&mut` into each resolver.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub pitch: Pitch,
    pub teams: Teams,
    pub ball: Ball,
    pub half: MatchHalf,
    pub tick: u64,
    pub log: IterationLog,
    /// Set when play stopped for a restart during the current tick.
    pub stoppage: bool,
    pub penalty_taker: Option<PlayerRef>,
    pub(crate) rng: StdRng,
}

impl MatchState {
    pub fn new(pitch: Pitch, kick_off: MatchTeam, second: MatchTeam, rng: StdRng) -> Self {
        let ball = Ball::at(pitch.centre());

        MatchState {
            pitch,
            teams: Teams { kick_off, second },
            ball,
            half: MatchHalf::FIRST,
            tick: 0,
            log: IterationLog::new(),
            stoppage: false,
            penalty_taker: None,
            rng,
        }
    }

    pub fn begin_iteration(&mut self) {
        self.log.clear();
        self.stoppage = false;
        self.tick += 1;
    }

    /// In odd halves the kick-off team defends the top line.
    pub fn defended_end(&self, side: TeamSide) -> PitchEnd {
        let kick_off_end = if self.half.is_odd() {
            PitchEnd::Top
        } else {
            PitchEnd::Bottom
        };

        match side {
            TeamSide::KickOff => kick_off_end,
            TeamSide::Second => kick_off_end.opposite(),
        }
    }

    pub fn attacked_end(&self, side: TeamSide) -> PitchEnd {
        self.defended_end(side).opposite()
    }

    pub fn defender_of(&self, end: PitchEnd) -> TeamSide {
        if self.defended_end(TeamSide::KickOff) == end {
            TeamSide::KickOff
        } else {
            TeamSide::Second
        }
    }

    /// `+1` when `side` attacks toward growing `y`, `-1` otherwise.
    pub fn attack_sign(&self, side: TeamSide) -> f32 {
        match self.attacked_end(side) {
            PitchEnd::Bottom => 1.0,
            PitchEnd::Top => -1.0,
        }
    }

    /// Distance of `position` from the goal line `side` defends.
    pub fn progress(&self, side: TeamSide, position: &Vector2<f32>) -> f32 {
        self.pitch.depth_from(self.defended_end(side), position)
    }

    pub fn player(&self, player: PlayerRef) -> &MatchPlayer {
        self.teams.player(player)
    }

    pub fn player_mut(&mut self, player: PlayerRef) -> &mut MatchPlayer {
        self.teams.player_mut(player)
    }

    pub fn has_ball(&self, player: PlayerRef) -> bool {
        self.ball.carrier() == Some(player)
    }

    pub fn possession(&self, player: PlayerRef) -> Possession {
        match self.ball.carrier() {
            Some(carrier) if carrier == player => Possession::HasBall,
            Some(carrier) if carrier.side == player.side => Possession::TeamHasBall,
            Some(_) => Possession::OpponentHasBall,
            None => Possession::Loose,
        }
    }

    pub fn ball_state(&self) -> BallState {
        if self.stoppage {
            BallState::Dead
        } else {
            BallState::InPlay
        }
    }

    /// Closest active player of `side` to `point` by Manhattan proximity.
    pub fn closest_player(
        &self,
        side: TeamSide,
        point: &Vector2<f32>,
        exclude: Option<PlayerRef>,
    ) -> Option<(PlayerRef, f32)> {
        self.teams
            .active_refs(side)
            .filter(|p| Some(*p) != exclude)
            .map(|p| (p, manhattan(&self.player(p).current, point).1))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Proximity of the nearest other active player of `side` to `player`.
    pub fn nearest_proximity(&self, player: PlayerRef, side: TeamSide) -> f32 {
        let position = self.player(player).current;

        self.closest_player(side, &position, Some(player))
            .map(|(_, proximity)| proximity)
            .unwrap_or(f32::MAX)
    }

    pub fn describe(&self, player: PlayerRef) -> String {
        format!(
            "{} ({})",
            self.player(player).name,
            self.teams.get(player.side).name
        )
    }

    pub fn record(&mut self, event: MatchEvent, line: String) {
        self.log.record(event, line);
    }

    pub fn note(&mut self, line: String) {
        self.log.note(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::engine::fixtures;

    #[test]
    fn test_ball_is_dead_until_next_tick_after_restart() {
        let mut state = fixtures::kick_off_state(2);
        assert_eq!(state.ball_state(), BallState::Dead);

        state.begin_iteration();
        assert_eq!(state.ball_state(), BallState::InPlay);
        assert_eq!(state.tick, 1);
    }

    #[test]
    fn test_orientation_flips_with_half() {
        let mut state = fixtures::match_state(1);

        assert_eq!(state.defended_end(TeamSide::KickOff), PitchEnd::Top);
        assert_eq!(state.attacked_end(TeamSide::KickOff), PitchEnd::Bottom);
        assert_eq!(state.defender_of(PitchEnd::Bottom), TeamSide::Second);
        assert_eq!(state.attack_sign(TeamSide::KickOff), 1.0);

        state.half = state.half.next();

        assert_eq!(state.defended_end(TeamSide::KickOff), PitchEnd::Bottom);
        assert_eq!(state.defender_of(PitchEnd::Top), TeamSide::Second);
        assert_eq!(state.attack_sign(TeamSide::Second), 1.0);
    }

    #[test]
    fn test_possession_views() {
        let mut state = fixtures::match_state(2);
        let carrier = PlayerRef::new(TeamSide::KickOff, 9);
        let position = state.player(carrier).current;

        state.ball.give_to(carrier, position);

        assert!(state.has_ball(carrier));
        assert_eq!(state.possession(carrier), Possession::HasBall);
        assert_eq!(
            state.possession(PlayerRef::new(TeamSide::KickOff, 3)),
            Possession::TeamHasBall
        );
        assert_eq!(
            state.possession(PlayerRef::new(TeamSide::Second, 3)),
            Possession::OpponentHasBall
        );

        state.ball.release();
        assert_eq!(state.possession(carrier), Possession::Loose);
    }

    #[test]
    fn test_closest_player_skips_inactive_and_excluded() {
        let mut state = fixtures::match_state(3);
        let keeper = PlayerRef::new(TeamSide::KickOff, 0);
        let goal = state.pitch.goal_centre(PitchEnd::Top);

        assert_eq!(
            state.closest_player(TeamSide::KickOff, &goal, None).map(|c| c.0),
            Some(keeper)
        );

        state.player_mut(keeper).injured = true;

        let closest = state.closest_player(TeamSide::KickOff, &goal, None).map(|c| c.0);
        assert!(closest.is_some());
        assert_ne!(closest, Some(keeper));

        let excluded = state
            .closest_player(TeamSide::KickOff, &goal, closest)
            .map(|c| c.0);
        assert_ne!(excluded, closest);
    }
}
