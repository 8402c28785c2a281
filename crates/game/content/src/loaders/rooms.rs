//! Room narrative loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// What the party sees when entering a room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneText {
    /// Completes "You enter a room with ...".
    pub center: String,
    pub description: String,
}

/// A trap room: looks like something inviting, hides a mimic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MimicText {
    pub center: String,
    pub description: String,
    /// Verb phrase offered to the player, e.g. "drink from it".
    pub disguise: String,
    /// What the mimic pretends to be; becomes its name.
    pub mimic: String,
}

/// All narrative text of a run, as written in `rooms.ron`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomText {
    pub intro: String,
    pub epilogues: Vec<String>,
    pub fountains: Vec<SceneText>,
    pub battle: SceneText,
    pub adventurer: SceneText,
    pub mimics: Vec<MimicText>,
    /// Names given to recruited adventurers.
    pub names: Vec<String>,
}

/// Loader for room narrative from RON files.
pub struct RoomTextLoader;

impl RoomTextLoader {
    pub fn load(path: &Path) -> LoadResult<RoomText> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses and checks that every variant list has at least one entry.
    pub fn parse(content: &str) -> LoadResult<RoomText> {
        let text: RoomText = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse room text RON: {}", e))?;

        for (list, len) in [
            ("epilogues", text.epilogues.len()),
            ("fountains", text.fountains.len()),
            ("mimics", text.mimics.len()),
            ("names", text.names.len()),
        ] {
            if len == 0 {
                anyhow::bail!("Invalid room text: '{}' must not be empty", list);
            }
        }
        Ok(text)
    }
}
