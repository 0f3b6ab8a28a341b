use crate::error::ConfigError;
use crate::r#match::engine::field::{Pitch, PitchEnd};
use crate::r#match::engine::player::MatchPlayer;
use crate::r#match::engine::tactics::{Formation, RoleMap};
use crate::r#match::engine::team::TeamStatistics;
use crate::r#match::squad::TeamDescriptor;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TeamIntent {
    Attack,
    Defend,
    #[default]
    None,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchTeam {
    pub id: u32,
    pub name: String,
    pub formation: Formation,
    pub roles: RoleMap,
    pub intent: TeamIntent,
    pub players: Vec<MatchPlayer>,
    pub statistics: TeamStatistics,
}

impl MatchTeam {
    pub fn from_descriptor(
        descriptor: &TeamDescriptor,
        pitch: &Pitch,
        defends: PitchEnd,
    ) -> Result<Self, ConfigError> {
        let formation = descriptor.validate()?;

        let players = descriptor
            .players
            .iter()
            .enumerate()
            .map(|(index, player)| {
                MatchPlayer::from_descriptor(player, formation.origin(index, pitch, defends))
            })
            .collect();

        Ok(MatchTeam {
            id: descriptor.id,
            name: descriptor.name.clone(),
            formation,
            roles: formation.roles(),
            intent: TeamIntent::None,
            players,
            statistics: TeamStatistics::default(),
        })
    }

    pub fn keeper(&self) -> &MatchPlayer {
        &self.players[self.roles.keeper]
    }

    /// Re-derives every origin for a team now defending `end`.
    pub fn place_origins(&mut self, pitch: &Pitch, end: PitchEnd) {
        for (index, player) in self.players.iter_mut().enumerate() {
            player.origin = self.formation.origin(index, pitch, end);
        }
    }

    pub fn reset_to_origin(&mut self) {
        self.players.iter_mut().for_each(|p| p.reset_to_origin());
    }

    pub fn active_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_active())
            .map(|(i, _)| i)
    }
}
