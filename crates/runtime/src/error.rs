//! Unified error type surfaced by the run API.
//!
//! Wraps battle failures and content problems so the binary can bubble them
//! up with consistent context.

use game_content::ArchetypeRole;
use game_core::{BattleError, ErrorSeverity, GameError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("a run needs at least one party member")]
    EmptyParty,

    #[error("no {role} archetype available")]
    EmptyPool { role: ArchetypeRole },

    #[error("invalid run config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error(transparent)]
    Content(#[from] anyhow::Error),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyParty | Self::EmptyPool { .. } => ErrorSeverity::Fatal,
            Self::InvalidConfig(_) => ErrorSeverity::Validation,
            Self::Battle(err) => err.severity(),
            // Content was validated at load time.
            Self::Content(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyParty => "RUN_EMPTY_PARTY",
            Self::EmptyPool { .. } => "RUN_EMPTY_POOL",
            Self::InvalidConfig(_) => "RUN_INVALID_CONFIG",
            Self::Battle(err) => err.error_code(),
            Self::Content(_) => "RUN_CONTENT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Side;

    #[test]
    fn battle_errors_keep_their_classification() {
        let err = RuntimeError::from(BattleError::EmptyRoster {
            side: Side::Enemies,
        });
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert_eq!(err.error_code(), "BATTLE_EMPTY_ROSTER");
    }

    #[test]
    fn run_errors_are_classified() {
        assert_eq!(RuntimeError::EmptyParty.severity(), ErrorSeverity::Fatal);
        let err = RuntimeError::InvalidConfig("no rooms".into());
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.error_code(), "RUN_INVALID_CONFIG");
        let err = RuntimeError::from(anyhow::anyhow!("Unknown archetype 'dragon'"));
        assert!(err.severity().is_internal());
    }
}
