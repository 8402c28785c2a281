//! Content factory for building the run's content from data files.

use std::path::{Path, PathBuf};

use game_core::{BattleConfig, SkillCatalog};

use crate::characters::CharacterFactory;
use crate::embedded;
use crate::loaders::{
    ArchetypeLoader, ArchetypeSpec, ConfigLoader, LoadResult, RoomText, RoomTextLoader,
    SkillLoader,
};

/// Everything a run needs: rules, characters and narrative.
#[derive(Clone, Debug)]
pub struct ContentBundle {
    pub config: BattleConfig,
    pub characters: CharacterFactory,
    pub rooms: RoomText,
}

impl ContentBundle {
    /// Parses the content compiled into the crate.
    pub fn embedded() -> LoadResult<Self> {
        let catalog = SkillLoader::parse(embedded::SKILLS_RON)?;
        let archetypes = ArchetypeLoader::parse(embedded::ARCHETYPES_RON)?;
        Ok(Self {
            config: ConfigLoader::parse(embedded::CONFIG_TOML)?,
            characters: CharacterFactory::new(catalog, archetypes)?,
            rooms: RoomTextLoader::parse(embedded::ROOMS_RON)?,
        })
    }
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml      (optional, defaults apply when absent)
/// ├── skills.ron
/// ├── archetypes.ron
/// └── rooms.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle rules from `config.toml`, or defaults if the file is absent.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(BattleConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the skill catalog from `skills.ron`.
    pub fn load_skills(&self) -> LoadResult<SkillCatalog> {
        SkillLoader::load(&self.data_dir.join("skills.ron"))
    }

    /// Load archetype specs from `archetypes.ron`.
    pub fn load_archetypes(&self) -> LoadResult<Vec<ArchetypeSpec>> {
        ArchetypeLoader::load(&self.data_dir.join("archetypes.ron"))
    }

    /// Load skills and archetypes and validate them together.
    pub fn load_characters(&self) -> LoadResult<CharacterFactory> {
        CharacterFactory::new(self.load_skills()?, self.load_archetypes()?)
    }

    /// Load room narrative from `rooms.ron`.
    pub fn load_room_text(&self) -> LoadResult<RoomText> {
        RoomTextLoader::load(&self.data_dir.join("rooms.ron"))
    }

    pub fn load_bundle(&self) -> LoadResult<ContentBundle> {
        let bundle = ContentBundle {
            config: self.load_config()?,
            characters: self.load_characters()?,
            rooms: self.load_room_text()?,
        };
        tracing::info!(data_dir = %self.data_dir.display(), "content loaded");
        Ok(bundle)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
