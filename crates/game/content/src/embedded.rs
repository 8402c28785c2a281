//! Default content compiled into the binary.

pub const SKILLS_RON: &str = include_str!("../data/skills.ron");
pub const ARCHETYPES_RON: &str = include_str!("../data/archetypes.ron");
pub const ROOMS_RON: &str = include_str!("../data/rooms.ron");
pub const CONFIG_TOML: &str = include_str!("../data/config.toml");
