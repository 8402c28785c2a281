//! Run configuration.

use game_core::{BattleConfig, PcgRoller};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RuntimeError};

/// Relative odds of each room kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomWeights {
    pub fountain: u32,
    pub adventurer: u32,
    pub mimic: u32,
    pub battle: u32,
}

impl RoomWeights {
    pub fn total(&self) -> u32 {
        self.fountain + self.adventurer + self.mimic + self.battle
    }
}

impl Default for RoomWeights {
    fn default() -> Self {
        Self {
            fountain: 1,
            adventurer: 1,
            mimic: 1,
            battle: 2,
        }
    }
}

/// Configuration for a dungeon run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Seed for every roll of the run; drawn at random when absent.
    pub seed: Option<u64>,
    pub room_weights: RoomWeights,
    /// Smallest enemy group a battle room spawns.
    pub min_enemies: u32,
    /// Largest enemy group a battle room spawns.
    pub max_enemies: u32,
    pub battle: BattleConfig,
}

impl RunConfig {
    pub const DEFAULT_MIN_ENEMIES: u32 = 1;
    pub const DEFAULT_MAX_ENEMIES: u32 = 3;

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_battle(mut self, battle: BattleConfig) -> Self {
        self.battle = battle;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.room_weights.total() == 0 {
            return Err(RuntimeError::InvalidConfig(
                "at least one room weight must be positive".into(),
            ));
        }
        if self.min_enemies == 0 || self.min_enemies > self.max_enemies {
            return Err(RuntimeError::InvalidConfig(format!(
                "enemy group size {}..={} must be non-empty and start at 1 or more",
                self.min_enemies, self.max_enemies
            )));
        }
        Ok(())
    }

    /// Returns the configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Builds the run's roller together with the seed it was built from.
    pub fn roller(&self) -> (u64, PcgRoller) {
        let seed = self.resolve_seed();
        (seed, PcgRoller::seed_from_u64(seed))
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            room_weights: RoomWeights::default(),
            min_enemies: Self::DEFAULT_MIN_ENEMIES,
            max_enemies: Self::DEFAULT_MAX_ENEMIES,
            battle: BattleConfig::default(),
        }
    }
}
