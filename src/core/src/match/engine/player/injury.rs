use crate::r#match::engine::events::MatchEvent;
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::{PlayerRef, TeamSide};
use crate::utils::is_injured;
use log::info;

/// Per-tick injury threshold for every active player.
pub const TICK_INJURY_THRESHOLD: i32 = 40000;

/// Rolls an injury for `player`. Returns true when they got injured.
pub fn roll_injury(state: &mut MatchState, player: PlayerRef, threshold: i32) -> bool {
    if !state.player(player).is_active() {
        return false;
    }

    if !is_injured(&mut state.rng, threshold) {
        return false;
    }

    injure(state, player);
    true
}

/// Takes `player` out of play. A carrier drops the ball where they stand.
pub fn injure(state: &mut MatchState, player: PlayerRef) {
    state.player_mut(player).injured = true;

    if state.has_ball(player) {
        state.ball.release();
    }

    if state.penalty_taker == Some(player) {
        state.penalty_taker = None;
    }

    let line = format!("{} is injured", state.describe(player));
    info!("{}", line);

    let event = MatchEvent::Injury {
        side: player.side,
        player: state.player(player).id,
    };
    state.record(event, line);
}

pub fn check_injuries(state: &mut MatchState) {
    for side in TeamSide::BOTH {
        let players: Vec<PlayerRef> = state.teams.active_refs(side).collect();

        for player in players {
            roll_injury(state, player, TICK_INJURY_THRESHOLD);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::engine::fixtures;

    #[test]
    fn test_injured_carrier_drops_ball() {
        let mut state = fixtures::kick_off_state(161);
        let carrier = state.ball.carrier().unwrap();
        let position = state.player(carrier).current;

        injure(&mut state, carrier);

        assert!(state.player(carrier).injured);
        assert!(!state.player(carrier).is_active());
        assert_eq!(state.ball.carrier(), None);
        assert_eq!(state.ball.xy(), position);
        assert!(matches!(state.log.events().last(), Some(MatchEvent::Injury { .. })));
    }

    #[test]
    fn test_injured_penalty_taker_is_cleared() {
        let mut state = fixtures::match_state(162);
        let taker = PlayerRef::new(TeamSide::KickOff, 9);
        state.penalty_taker = Some(taker);

        injure(&mut state, taker);

        assert_eq!(state.penalty_taker, None);
    }

    #[test]
    fn test_inactive_players_are_not_rolled() {
        let mut state = fixtures::match_state(163);
        let player = PlayerRef::new(TeamSide::Second, 3);
        state.player_mut(player).injured = true;

        let before = state.rng.clone();
        assert!(!roll_injury(&mut state, player, 0));
        assert_eq!(state.rng, before);
    }

    #[test]
    fn test_tick_checks_are_rare() {
        let mut state = fixtures::match_state(164);

        for _ in 0..50 {
            check_injuries(&mut state);
        }

        let injured = TeamSide::BOTH
            .into_iter()
            .flat_map(|side| state.teams.get(side).players.iter())
            .filter(|p| p.injured)
            .count();
        assert!(injured <= 2);
    }
}
