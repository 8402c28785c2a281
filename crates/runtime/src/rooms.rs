//! Room kinds and random room generation.

use game_content::{ContentBundle, MimicText, SceneText};
use game_core::{Combatant, RollProvider};
use serde::{Deserialize, Serialize};

use crate::config::RunConfig;
use crate::error::{Result, RuntimeError};

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RoomKind {
    Fountain,
    Adventurer,
    Mimic,
    Battle,
}

impl RoomKind {
    /// Draw order for weighted selection.
    pub const ALL: [RoomKind; 4] = [
        RoomKind::Fountain,
        RoomKind::Adventurer,
        RoomKind::Mimic,
        RoomKind::Battle,
    ];
}

/// A generated room, ready to be entered.
#[derive(Clone, Debug)]
pub enum Room {
    Fountain { scene: SceneText },
    Adventurer { scene: SceneText },
    Mimic { text: MimicText },
    Battle {
        scene: SceneText,
        enemies: Vec<Combatant>,
    },
}

impl Room {
    /// Draws a room kind by weight, then its variant and occupants.
    pub fn generate(
        content: &ContentBundle,
        config: &RunConfig,
        rolls: &mut dyn RollProvider,
    ) -> Result<Self> {
        config.validate()?;
        let weights = config.room_weights;
        let kind = RoomKind::ALL[rolls.roll_weighted(&[
            weights.fountain,
            weights.adventurer,
            weights.mimic,
            weights.battle,
        ])];
        tracing::debug!(%kind, "room drawn");

        let text = &content.rooms;
        let room = match kind {
            RoomKind::Fountain => Room::Fountain {
                scene: text.fountains[rolls.choose_index(text.fountains.len())].clone(),
            },
            RoomKind::Adventurer => Room::Adventurer {
                scene: text.adventurer.clone(),
            },
            RoomKind::Mimic => Room::Mimic {
                text: text.mimics[rolls.choose_index(text.mimics.len())].clone(),
            },
            RoomKind::Battle => Room::Battle {
                scene: text.battle.clone(),
                enemies: spawn_enemies(content, config, rolls)?,
            },
        };
        Ok(room)
    }

    pub fn kind(&self) -> RoomKind {
        match self {
            Room::Fountain { .. } => RoomKind::Fountain,
            Room::Adventurer { .. } => RoomKind::Adventurer,
            Room::Mimic { .. } => RoomKind::Mimic,
            Room::Battle { .. } => RoomKind::Battle,
        }
    }

    /// What the party sees on entering: (center, description).
    pub fn scene(&self) -> (&str, &str) {
        match self {
            Room::Fountain { scene } | Room::Adventurer { scene } | Room::Battle { scene, .. } => {
                (&scene.center, &scene.description)
            }
            Room::Mimic { text } => (&text.center, &text.description),
        }
    }
}

/// Rolls the group size, then an archetype per slot.
fn spawn_enemies(
    content: &ContentBundle,
    config: &RunConfig,
    rolls: &mut dyn RollProvider,
) -> Result<Vec<Combatant>> {
    let characters = &content.characters;
    let pool = characters.enemies();
    if pool.is_empty() {
        return Err(RuntimeError::EmptyPool {
            role: game_content::ArchetypeRole::Enemy,
        });
    }

    let spread = config.max_enemies - config.min_enemies + 1;
    let count = config.min_enemies + rolls.roll_die(spread) - 1;
    (0..count)
        .map(|_| -> Result<Combatant> {
            let key = pool[rolls.choose_index(pool.len())];
            Ok(characters.spawn(key)?)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoomWeights;
    use game_core::ScriptedRolls;

    fn content() -> ContentBundle {
        ContentBundle::embedded().unwrap()
    }

    #[test]
    fn weights_pick_the_room_kind() {
        let content = content();
        let config = RunConfig::default();
        // total weight 5: 1 fountain, 2 adventurer, 3 mimic, 4..=5 battle
        for (face, kind) in [
            (1, RoomKind::Fountain),
            (2, RoomKind::Adventurer),
            (3, RoomKind::Mimic),
            (5, RoomKind::Battle),
        ] {
            let mut rolls = ScriptedRolls::new([face]);
            let room = Room::generate(&content, &config, &mut rolls).unwrap();
            assert_eq!(room.kind(), kind);
        }
    }

    #[test]
    fn battle_rooms_spawn_a_bounded_group() {
        let content = content();
        let config = RunConfig {
            room_weights: RoomWeights {
                fountain: 0,
                adventurer: 0,
                mimic: 0,
                battle: 1,
            },
            ..RunConfig::default()
        };
        // kind, group size 3, then orc, slime, goblin
        let mut rolls = ScriptedRolls::new([1, 3, 3, 1, 2]);
        let Room::Battle { enemies, scene } = Room::generate(&content, &config, &mut rolls).unwrap()
        else {
            panic!("expected a battle room");
        };
        let names: Vec<_> = enemies.iter().map(Combatant::name).collect();
        assert_eq!(names, ["Orc", "Slime", "Goblin"]);
        assert_eq!(scene.center, "shadowy figures");
    }

    #[test]
    fn mimic_rooms_carry_their_disguise() {
        let content = content();
        let mut rolls = ScriptedRolls::new([3, 1]);
        let room = Room::generate(&content, &RunConfig::default(), &mut rolls).unwrap();
        let Room::Mimic { text } = &room else {
            panic!("expected a mimic room");
        };
        assert_eq!(text.mimic, "chalice");
        assert_eq!(room.scene().0, "a pedestal");
    }

    #[test]
    fn inverted_group_size_is_rejected_before_rolling() {
        let content = content();
        let config = RunConfig {
            min_enemies: 4,
            max_enemies: 2,
            ..RunConfig::default()
        };
        let mut rolls = ScriptedRolls::new([5, 1, 1]);
        let result = Room::generate(&content, &config, &mut rolls);
        assert!(matches!(result, Err(RuntimeError::InvalidConfig(_))));
    }
}
