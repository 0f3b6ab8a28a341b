use crate::r#match::engine::actions::Action;
use crate::r#match::engine::ball::BallDirection;
use crate::r#match::engine::events::MatchEvent;
use crate::r#match::engine::player::{Cards, MatchPlayer, PlayerStatistics};
use crate::r#match::engine::state::{MatchHalf, MatchState};
use crate::r#match::engine::team::{MatchTeam, TeamIntent, TeamStatistics};
use nalgebra::{Vector2, Vector3};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize)]
pub struct BallSnapshot {
    pub position: Vector3<f32>,
    pub direction: BallDirection,
    /// Player id of the carrier.
    pub carrier: Option<u32>,
    pub in_flight: usize,
    pub shot: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerSnapshot {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub current: Vector2<f32>,
    pub fitness: f32,
    pub injured: bool,
    pub offside: bool,
    pub cards: Cards,
    pub action: Action,
    pub statistics: PlayerStatistics,
}

impl From<&MatchPlayer> for PlayerSnapshot {
    fn from(player: &MatchPlayer) -> Self {
        PlayerSnapshot {
            id: player.id,
            name: player.name.clone(),
            position: player.position.clone(),
            current: player.current,
            fitness: player.fitness,
            injured: player.injured,
            offside: player.offside,
            cards: player.cards,
            action: player.action,
            statistics: player.statistics,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamSnapshot {
    pub id: u32,
    pub name: String,
    pub formation: &'static str,
    pub intent: TeamIntent,
    pub statistics: TeamStatistics,
    pub players: Vec<PlayerSnapshot>,
}

impl From<&MatchTeam> for TeamSnapshot {
    fn from(team: &MatchTeam) -> Self {
        TeamSnapshot {
            id: team.id,
            name: team.name.clone(),
            formation: team.formation.name(),
            intent: team.intent,
            statistics: team.statistics,
            players: team.players.iter().map(PlayerSnapshot::from).collect(),
        }
    }
}

/// What one tick produced, detached from the live state.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSnapshot {
    pub tick: u64,
    pub half: MatchHalf,
    pub ball: BallSnapshot,
    pub kick_off: TeamSnapshot,
    pub second: TeamSnapshot,
    pub events: Vec<MatchEvent>,
    pub log: Vec<String>,
}

impl MatchSnapshot {
    pub fn from_state(state: &MatchState) -> Self {
        let ball = &state.ball;

        MatchSnapshot {
            tick: state.tick,
            half: state.half,
            ball: BallSnapshot {
                position: ball.position,
                direction: ball.direction,
                carrier: ball.carrier().map(|p| state.player(p).id),
                in_flight: ball.in_flight(),
                shot: ball.shot,
            },
            kick_off: TeamSnapshot::from(&state.teams.kick_off),
            second: TeamSnapshot::from(&state.teams.second),
            events: state.log.events().to_vec(),
            log: state.log.lines().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub ticks: u64,
    /// Half the match ended in.
    pub half: u8,
    pub kick_off: TeamSnapshot,
    pub second: TeamSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_data: Option<ResultMatchPositionData>,
}

impl MatchResult {
    pub fn from_state(state: &MatchState, position_data: Option<ResultMatchPositionData>) -> Self {
        MatchResult {
            ticks: state.tick,
            half: state.half.number(),
            kick_off: TeamSnapshot::from(&state.teams.kick_off),
            second: TeamSnapshot::from(&state.teams.second),
            position_data,
        }
    }

    pub fn score(&self) -> (u32, u32) {
        (self.kick_off.statistics.goals, self.second.statistics.goals)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultPositionDataItem {
    pub timestamp: u64,
    pub position: Vector3<f32>,
}

impl ResultPositionDataItem {
    pub fn new(timestamp: u64, position: Vector3<f32>) -> Self {
        ResultPositionDataItem {
            timestamp,
            position,
        }
    }
}

/// Ball and player tracks keyed by tick. A sample is only stored when the
/// position changed since the previous one.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResultMatchPositionData {
    ball: Vec<ResultPositionDataItem>,
    players: HashMap<u32, Vec<ResultPositionDataItem>>,
}

impl ResultMatchPositionData {
    pub fn new() -> Self {
        ResultMatchPositionData {
            ball: Vec::new(),
            players: HashMap::with_capacity(22),
        }
    }

    pub fn add_player_positions(&mut self, player_id: u32, timestamp: u64, position: Vector2<f32>) {
        let position = Vector3::new(position.x, position.y, 0.0);
        let track = self.players.entry(player_id).or_default();

        if track.last().map(|last| last.position) != Some(position) {
            track.push(ResultPositionDataItem::new(timestamp, position));
        }
    }

    pub fn add_ball_positions(&mut self, timestamp: u64, position: Vector3<f32>) {
        if self.ball.last().map(|last| last.position) != Some(position) {
            self.ball.push(ResultPositionDataItem::new(timestamp, position));
        }
    }

    pub fn max_timestamp(&self) -> u64 {
        self.ball.last().map(|item| item.timestamp).unwrap_or(0)
    }

    /// Ball position at `timestamp`: the last sample at or before it.
    pub fn get_ball_position_at(&self, timestamp: u64) -> Option<Vector3<f32>> {
        Self::position_at(&self.ball, timestamp)
    }

    pub fn get_player_position_at(&self, player_id: u32, timestamp: u64) -> Option<Vector3<f32>> {
        Self::position_at(self.players.get(&player_id)?, timestamp)
    }

    fn position_at(track: &[ResultPositionDataItem], timestamp: u64) -> Option<Vector3<f32>> {
        let idx = track.partition_point(|item| item.timestamp <= timestamp);

        idx.checked_sub(1).map(|i| track[i].position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::engine::fixtures;

    #[test]
    fn test_unchanged_positions_are_not_stored_twice() {
        let mut data = ResultMatchPositionData::new();

        data.add_ball_positions(1, Vector3::new(1.0, 2.0, 0.0));
        data.add_ball_positions(2, Vector3::new(1.0, 2.0, 0.0));
        data.add_ball_positions(3, Vector3::new(1.0, 3.0, 0.0));

        data.add_player_positions(7, 1, Vector2::new(5.0, 5.0));
        data.add_player_positions(7, 2, Vector2::new(5.0, 5.0));

        assert_eq!(data.ball.len(), 2);
        assert_eq!(data.players[&7].len(), 1);
        assert_eq!(data.max_timestamp(), 3);
    }

    #[test]
    fn test_position_lookup_uses_last_sample() {
        let mut data = ResultMatchPositionData::new();

        data.add_ball_positions(5, Vector3::new(1.0, 1.0, 0.0));
        data.add_ball_positions(10, Vector3::new(2.0, 2.0, 0.0));

        assert_eq!(data.get_ball_position_at(4), None);
        assert_eq!(data.get_ball_position_at(7), Some(Vector3::new(1.0, 1.0, 0.0)));
        assert_eq!(data.get_ball_position_at(50), Some(Vector3::new(2.0, 2.0, 0.0)));
        assert_eq!(data.get_player_position_at(1, 5), None);
    }

    #[test]
    fn test_snapshot_reports_carrier_id() {
        let state = fixtures::kick_off_state(191);
        let snapshot = MatchSnapshot::from_state(&state);

        let carrier = state.ball.carrier().unwrap();
        assert_eq!(snapshot.ball.carrier, Some(state.player(carrier).id));
        assert_eq!(snapshot.kick_off.players.len(), 11);
        assert_eq!(snapshot.kick_off.formation, "4-4-2");

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["half"], 1);
        assert_eq!(json["tick"], 0);
    }
}
