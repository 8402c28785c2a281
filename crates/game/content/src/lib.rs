//! Data-driven content definitions and loaders.
//!
//! This crate houses the static content of a run and loads it from RON/TOML:
//! - Skill catalog (`skills.ron`)
//! - Character archetypes and their pools (`archetypes.ron`)
//! - Room narrative (`rooms.ron`)
//! - Battle rules (`config.toml`)
//!
//! The default data is embedded at compile time; [`ContentFactory`] loads
//! the same files from a directory instead.

pub mod characters;
pub mod embedded;
pub mod loaders;

pub use characters::CharacterFactory;
pub use loaders::factory::ContentBundle;
pub use loaders::{
    ArchetypeLoader, ArchetypeRole, ArchetypeSpec, ConfigLoader, ContentFactory, LoadResult,
    MimicText, RoomText, RoomTextLoader, SceneText, SkillLoader,
};
