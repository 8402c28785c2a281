//! Archetype catalog loader.
//!
//! An archetype is a character template: base resources, combat stats, the
//! ordered skill list and the pool it belongs to.

use std::path::Path;

use game_core::{CombatStats, DecisionPolicy};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Which pool an archetype is drawn from.
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
pub enum ArchetypeRole {
    /// The character a run starts with.
    Player,
    /// Adventurers that can be recruited.
    Traveler,
    /// Regular battle room encounters.
    Enemy,
    /// Trap monsters disguised as something else.
    Mimic,
}

/// Character template as written in `archetypes.ron`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeSpec {
    pub key: String,
    /// Name used when the caller does not supply one.
    pub display_name: String,
    pub role: ArchetypeRole,
    pub policy: DecisionPolicy,
    pub hp: u32,
    pub mp: u32,
    pub stats: CombatStats,
    /// Skill names in selection order.
    pub skills: Vec<String>,
    /// Appended to the given name, e.g. "chalice" becomes "chalice mimic".
    #[serde(default)]
    pub name_suffix: Option<String>,
}

impl ArchetypeSpec {
    /// Builds the combatant name for `given`, applying the suffix.
    pub fn full_name(&self, given: &str) -> String {
        match &self.name_suffix {
            Some(suffix) => format!("{given}{suffix}"),
            None => given.to_owned(),
        }
    }
}

/// Loader for archetype catalogs from RON files.
pub struct ArchetypeLoader;

impl ArchetypeLoader {
    /// RON format: `Vec<ArchetypeSpec>`.
    pub fn load(path: &Path) -> LoadResult<Vec<ArchetypeSpec>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ArchetypeSpec>> {
        let archetypes: Vec<ArchetypeSpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse archetype catalog RON: {}", e))?;
        Ok(archetypes)
    }
}
