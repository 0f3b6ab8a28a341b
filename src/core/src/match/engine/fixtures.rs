use crate::r#match::engine::field::{Pitch, PitchEnd};
use crate::r#match::engine::restarts::set_kick_off;
use crate::r#match::engine::state::MatchState;
use crate::r#match::engine::team::{MatchTeam, TeamSide};
use crate::r#match::squad::{PitchDescriptor, PlayerDescriptor, PlayerSkills, TeamDescriptor};
use rand::SeedableRng;
use rand::rngs::StdRng;

const POSITIONS_442: [&str; 11] = [
    "GK", "LB", "CB", "CB", "RB", "LM", "CM", "CM", "RM", "ST", "ST",
];

pub fn pitch() -> PitchDescriptor {
    PitchDescriptor::new(100, 132)
}

/// The derived geometry of [`pitch`].
pub fn field() -> Pitch {
    Pitch::new(100, 132).unwrap()
}

/// A valid 4-4-2 side with ids `first_id..first_id + 11`.
pub fn team_descriptor(id: u32, name: &str, first_id: u32) -> TeamDescriptor {
    let players = POSITIONS_442
        .iter()
        .enumerate()
        .map(|(slot, position)| {
            let keeper = *position == "GK";

            PlayerDescriptor {
                id: first_id + slot as u32,
                name: format!("{} {}", name, slot + 1),
                position: position.to_string(),
                skills: PlayerSkills {
                    passing: 60,
                    shooting: if keeper { 20 } else { 55 },
                    tackling: 55,
                    saving: if keeper { 70 } else { 10 },
                    agility: 60,
                    strength: 60,
                    penalty_taking: 50 + slot as u32,
                    jumping: 30,
                },
                fitness: 100.0,
                injured: false,
            }
        })
        .collect();

    TeamDescriptor {
        id,
        name: name.to_string(),
        formation: "4-4-2".to_string(),
        players,
    }
}

/// Both teams on their origins, ball loose on the centre spot, nobody kicked off.
pub fn match_state(seed: u64) -> MatchState {
    let pitch = field();

    let kick_off =
        MatchTeam::from_descriptor(&team_descriptor(1, "Reds", 100), &pitch, PitchEnd::Top)
            .unwrap();
    let second =
        MatchTeam::from_descriptor(&team_descriptor(2, "Blues", 200), &pitch, PitchEnd::Bottom)
            .unwrap();

    MatchState::new(pitch, kick_off, second, StdRng::seed_from_u64(seed))
}

pub fn kick_off_state(seed: u64) -> MatchState {
    let mut state = match_state(seed);
    set_kick_off(&mut state, TeamSide::KickOff);
    state
}

/// A carrier is active, stands on the ball and nothing is in flight.
pub fn assert_single_carrier(state: &MatchState) {
    if let Some(carrier) = state.ball.carrier() {
        let player = state.player(carrier);

        assert!(!state.ball.is_in_flight(), "carrier with a ball in flight");
        assert!(player.is_active(), "{} holds the ball while inactive", player.name);
        assert_eq!(state.ball.xy(), player.current);
    }
}
