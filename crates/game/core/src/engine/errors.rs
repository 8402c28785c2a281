//! Errors surfaced by the battle engine.

use crate::combatant::Side;
use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleError {
    /// A battle needs at least one combatant on each side.
    #[error("cannot start a battle with an empty {side} roster")]
    EmptyRoster { side: Side },

    /// Every combatant must enter a battle with HP above 0.
    #[error("{name} cannot join the {side} roster with 0 HP")]
    DefeatedCombatant { side: Side, name: String },

    /// The input collaborator answered outside the prompt's options.
    #[error("selection {index} is out of range for {options} options")]
    InvalidSelection { index: usize, options: usize },
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyRoster { .. } | Self::DefeatedCombatant { .. } => ErrorSeverity::Fatal,
            Self::InvalidSelection { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyRoster { .. } => "BATTLE_EMPTY_ROSTER",
            Self::DefeatedCombatant { .. } => "BATTLE_DEFEATED_COMBATANT",
            Self::InvalidSelection { .. } => "BATTLE_INVALID_SELECTION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_rosters_are_fatal() {
        let err = BattleError::EmptyRoster { side: Side::Heroes };
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert_eq!(err.error_code(), "BATTLE_EMPTY_ROSTER");

        let err = BattleError::DefeatedCombatant {
            side: Side::Enemies,
            name: "Ghost".into(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert_eq!(err.error_code(), "BATTLE_DEFEATED_COMBATANT");
    }

    #[test]
    fn bad_selections_are_validation_errors() {
        let err = BattleError::InvalidSelection {
            index: 7,
            options: 3,
        };
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert!(!err.severity().is_internal());
    }
}
