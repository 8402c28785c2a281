//! To-hit roll classification.

use crate::config::BattleConfig;
use crate::dice::RollProvider;

/// Outcome of one skill application against one target.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum HitOutcome {
    /// Regular application.
    Hit,
    /// Natural critical face: magnitude multiplied.
    Crit,
    /// Natural fumble face: no effect.
    Miss,
}

/// Classifies a to-hit face.
///
/// The critical face wins if a config makes both faces equal.
pub fn classify_hit(face: u32, config: &BattleConfig) -> HitOutcome {
    if face == config.critical_face {
        HitOutcome::Crit
    } else if face == config.fumble_face {
        HitOutcome::Miss
    } else {
        HitOutcome::Hit
    }
}

/// Rolls the to-hit die and classifies it.
pub fn roll_to_hit(rolls: &mut dyn RollProvider, config: &BattleConfig) -> (u32, HitOutcome) {
    let face = rolls.roll_die(config.to_hit_die);
    (face, classify_hit(face, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedRolls;

    #[test]
    fn natural_faces_classify() {
        let config = BattleConfig::default();
        assert_eq!(classify_hit(20, &config), HitOutcome::Crit);
        assert_eq!(classify_hit(1, &config), HitOutcome::Miss);
        for face in 2..20 {
            assert_eq!(classify_hit(face, &config), HitOutcome::Hit);
        }
    }

    #[test]
    fn roll_to_hit_uses_configured_die() {
        let config = BattleConfig::default();
        let mut rolls = ScriptedRolls::new([20, 25, 1]);
        assert_eq!(roll_to_hit(&mut rolls, &config), (20, HitOutcome::Crit));
        // face above the die is clamped onto the die
        assert_eq!(roll_to_hit(&mut rolls, &config), (20, HitOutcome::Crit));
        assert_eq!(roll_to_hit(&mut rolls, &config), (1, HitOutcome::Miss));
    }
}
