//! Skill resolution against a single target.

use crate::combatant::CombatStats;
use crate::config::BattleConfig;
use crate::dice::RollProvider;
use crate::skill::Skill;

use super::formula::evaluate;
use super::hit::{HitOutcome, roll_to_hit};

/// Result of applying a skill to one target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillResolution {
    /// Damage or healing to apply (0 on a miss).
    pub magnitude: u32,
    pub outcome: HitOutcome,
}

impl SkillResolution {
    pub const fn miss() -> Self {
        Self {
            magnitude: 0,
            outcome: HitOutcome::Miss,
        }
    }

    pub const fn landed(&self) -> bool {
        !matches!(self.outcome, HitOutcome::Miss)
    }
}

/// Resolves one skill application.
///
/// Offensive skills roll the to-hit die first, then the formula dice. The
/// formula is rolled even on a miss so a miss consumes the same dice as a
/// hit. Healing skips the to-hit die and always lands as a plain hit.
pub fn resolve_skill(
    skill: &Skill,
    user: &CombatStats,
    target: &CombatStats,
    rolls: &mut dyn RollProvider,
    config: &BattleConfig,
) -> SkillResolution {
    if skill.category.is_heal() {
        let magnitude = evaluate(skill.category, &skill.formula, user, target, rolls);
        return SkillResolution {
            magnitude,
            outcome: HitOutcome::Hit,
        };
    }

    let (face, outcome) = roll_to_hit(rolls, config);
    let base = evaluate(skill.category, &skill.formula, user, target, rolls);
    tracing::debug!(skill = %skill.name, face, %outcome, base, "to-hit rolled");

    match outcome {
        HitOutcome::Miss => SkillResolution::miss(),
        HitOutcome::Crit => SkillResolution {
            magnitude: base.saturating_mul(config.critical_multiplier),
            outcome,
        },
        HitOutcome::Hit => SkillResolution {
            magnitude: base,
            outcome,
        },
    }
}
