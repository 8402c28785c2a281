//! Battle configuration loader.

use std::path::Path;

use game_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle rules from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load battle rules from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.to_hit_die == 0 {
            anyhow::bail!("Invalid config: to_hit_die must be at least 1");
        }
        if config.critical_face > config.to_hit_die || config.fumble_face > config.to_hit_die {
            anyhow::bail!(
                "Invalid config: critical_face {} and fumble_face {} must fit a d{}",
                config.critical_face,
                config.fumble_face,
                config.to_hit_die
            );
        }
        Ok(config)
    }
}
