//! Content loaders for reading game data from files.
//!
//! Each loader parses one RON/TOML document into game-core types (or the
//! content specs defined here). Loaders accept either a path or the raw
//! text, so the same code serves the embedded defaults and a data directory.

pub mod archetypes;
pub mod config;
pub mod factory;
pub mod rooms;
pub mod skills;

pub use archetypes::{ArchetypeLoader, ArchetypeRole, ArchetypeSpec};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use rooms::{MimicText, RoomText, RoomTextLoader, SceneText};
pub use skills::SkillLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
