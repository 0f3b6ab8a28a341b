use crate::error::ConfigError;
use crate::r#match::engine::tactics::Formation;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const SQUAD_SIZE: usize = 11;

const MAX_SKILL: u32 = 100;
const MAX_FITNESS: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchDescriptor {
    pub width: u32,
    pub height: u32,
}

impl PitchDescriptor {
    pub fn new(width: u32, height: u32) -> Self {
        PitchDescriptor { width, height }
    }
}

impl Default for PitchDescriptor {
    fn default() -> Self {
        PitchDescriptor::new(100, 132)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerSkills {
    pub passing: u32,
    pub shooting: u32,
    pub tackling: u32,
    pub saving: u32,
    pub agility: u32,
    pub strength: u32,
    pub penalty_taking: u32,
    pub jumping: u32,
}

impl PlayerSkills {
    pub fn named(&self) -> [(&'static str, u32); 8] {
        [
            ("passing", self.passing),
            ("shooting", self.shooting),
            ("tackling", self.tackling),
            ("saving", self.saving),
            ("agility", self.agility),
            ("strength", self.strength),
            ("penalty_taking", self.penalty_taking),
            ("jumping", self.jumping),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDescriptor {
    pub id: u32,
    pub name: String,
    /// Position code such as `GK`, `CB`, `LM` or `ST`.
    pub position: String,
    pub skills: PlayerSkills,
    pub fitness: f32,
    #[serde(default)]
    pub injured: bool,
}

impl PlayerDescriptor {
    pub fn is_goalkeeper(&self) -> bool {
        self.position.eq_ignore_ascii_case("GK")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamDescriptor {
    pub id: u32,
    pub name: String,
    pub formation: String,
    pub players: Vec<PlayerDescriptor>,
}

impl TeamDescriptor {
    /// Checks the roster and resolves the formation name.
    pub fn validate(&self) -> Result<Formation, ConfigError> {
        if self.players.len() != SQUAD_SIZE {
            return Err(ConfigError::InvalidRosterSize {
                team: self.name.clone(),
                expected: SQUAD_SIZE,
                found: self.players.len(),
            });
        }

        let formation =
            Formation::from_name(&self.formation).ok_or_else(|| ConfigError::UnknownFormation {
                team: self.name.clone(),
                formation: self.formation.clone(),
            })?;

        let keeper = &self.players[0];
        if !keeper.is_goalkeeper() {
            return Err(ConfigError::MissingGoalkeeper {
                team: self.name.clone(),
                player: keeper.name.clone(),
                position: keeper.position.clone(),
            });
        }

        for (slot, player) in self.players.iter().enumerate() {
            if slot > 0 && player.is_goalkeeper() {
                return Err(ConfigError::ExtraGoalkeeper {
                    team: self.name.clone(),
                    player: player.name.clone(),
                    slot,
                });
            }

            if let Some((skill, value)) = player
                .skills
                .named()
                .into_iter()
                .find(|(_, value)| *value > MAX_SKILL)
            {
                return Err(ConfigError::InvalidSkill {
                    team: self.name.clone(),
                    player: player.name.clone(),
                    skill,
                    value,
                });
            }

            if !(0.0..=MAX_FITNESS).contains(&player.fitness) {
                return Err(ConfigError::InvalidFitness {
                    team: self.name.clone(),
                    player: player.name.clone(),
                    value: player.fitness,
                });
            }
        }

        Ok(formation)
    }
}

/// Player ids must be unique across both teams so events and replay data
/// can be keyed by id alone.
pub fn ensure_unique_ids(teams: [&TeamDescriptor; 2]) -> Result<(), ConfigError> {
    let mut seen = HashSet::with_capacity(SQUAD_SIZE * 2);

    for team in teams {
        for player in &team.players {
            if !seen.insert(player.id) {
                return Err(ConfigError::DuplicatePlayerId {
                    team: team.name.clone(),
                    player: player.name.clone(),
                    id: player.id,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::engine::fixtures;

    #[test]
    fn test_valid_team_resolves_formation() {
        let team = fixtures::team_descriptor(1, "Reds", 100);

        assert_eq!(team.validate(), Ok(Formation::F442));
    }

    #[test]
    fn test_roster_size_is_checked() {
        let mut team = fixtures::team_descriptor(1, "Reds", 100);
        team.players.pop();

        assert_eq!(
            team.validate(),
            Err(ConfigError::InvalidRosterSize {
                team: "Reds".to_string(),
                expected: 11,
                found: 10,
            })
        );
    }

    #[test]
    fn test_first_slot_must_be_goalkeeper() {
        let mut team = fixtures::team_descriptor(1, "Reds", 100);
        team.players.swap(0, 5);

        assert!(matches!(
            team.validate(),
            Err(ConfigError::MissingGoalkeeper { .. })
        ));
    }

    #[test]
    fn test_second_goalkeeper_is_rejected() {
        let mut team = fixtures::team_descriptor(1, "Reds", 100);
        team.players[3].position = "GK".to_string();

        assert!(matches!(
            team.validate(),
            Err(ConfigError::ExtraGoalkeeper { slot: 3, .. })
        ));
    }

    #[test]
    fn test_skill_out_of_range_names_the_skill() {
        let mut team = fixtures::team_descriptor(1, "Reds", 100);
        team.players[7].skills.jumping = 140;

        match team.validate() {
            Err(ConfigError::InvalidSkill { skill, value, player, .. }) => {
                assert_eq!(skill, "jumping");
                assert_eq!(value, 140);
                assert_eq!(player, team.players[7].name);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_fitness_out_of_range() {
        let mut team = fixtures::team_descriptor(1, "Reds", 100);
        team.players[2].fitness = 120.0;

        assert!(matches!(team.validate(), Err(ConfigError::InvalidFitness { .. })));
    }

    #[test]
    fn test_unknown_formation() {
        let mut team = fixtures::team_descriptor(1, "Reds", 100);
        team.formation = "1-1-8".to_string();

        assert!(matches!(team.validate(), Err(ConfigError::UnknownFormation { .. })));
    }

    #[test]
    fn test_duplicate_ids_across_teams() {
        let home = fixtures::team_descriptor(1, "Reds", 100);
        let away = fixtures::team_descriptor(2, "Blues", 100);

        assert!(matches!(
            ensure_unique_ids([&home, &away]),
            Err(ConfigError::DuplicatePlayerId { id: 100, .. })
        ));

        let away = fixtures::team_descriptor(2, "Blues", 200);
        assert_eq!(ensure_unique_ids([&home, &away]), Ok(()));
    }

    #[test]
    fn test_descriptor_deserializes_without_injured_flag() {
        let json = r#"{
            "id": 1,
            "name": "Keeper",
            "position": "GK",
            "skills": {
                "passing": 50, "shooting": 20, "tackling": 30, "saving": 80,
                "agility": 60, "strength": 55, "penalty_taking": 10, "jumping": 70
            },
            "fitness": 100.0
        }"#;

        let player: PlayerDescriptor = serde_json::from_str(json).unwrap();

        assert!(player.is_goalkeeper());
        assert!(!player.injured);
        assert_eq!(player.skills.saving, 80);
    }
}
