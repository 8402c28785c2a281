//! Client configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Fixed seed for a reproducible run.
    pub seed: Option<u64>,
    pub session_id: Option<String>,
    /// Root directory for session logs; the platform cache dir when unset.
    pub log_dir: Option<PathBuf>,
    /// Skip "press enter" pauses.
    pub auto_continue: bool,
    /// Load content from this directory instead of the built-in data.
    pub data_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_SEED` - RNG seed (default: random)
    /// - `DUNGEON_SESSION_ID` - Session identifier for log files (default: timestamp)
    /// - `DUNGEON_LOG_DIR` - Log root directory (default: platform cache dir)
    /// - `DUNGEON_AUTO_CONTINUE` - Do not wait for Enter between steps (default: false)
    /// - `DUNGEON_DATA_DIR` - Content directory (default: built-in content)
    pub fn from_env() -> Self {
        let mut config = Self {
            seed: read_env("DUNGEON_SEED"),
            session_id: env::var("DUNGEON_SESSION_ID").ok(),
            log_dir: env::var_os("DUNGEON_LOG_DIR").map(PathBuf::from),
            data_dir: env::var_os("DUNGEON_DATA_DIR").map(PathBuf::from),
            ..Self::default()
        };

        if let Some(enable) = read_env::<bool>("DUNGEON_AUTO_CONTINUE") {
            config.auto_continue = enable;
        } else if env::var("DUNGEON_AUTO_CONTINUE").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.auto_continue = true;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
