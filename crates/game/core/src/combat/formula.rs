//! Magnitude formulas.

use crate::combatant::CombatStats;
use crate::dice::RollProvider;

/// Which stat pair a skill uses and how its result lands on the target.
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
pub enum AttackCategory {
    /// Attack power against physical defense.
    Physical,
    /// Magic power against magic resistance.
    Magical,
    /// Magic power restores HP; no defender stat applies.
    Heal,
}

impl AttackCategory {
    /// Healing raises HP instead of lowering it and never rolls to hit.
    pub const fn is_heal(&self) -> bool {
        matches!(self, Self::Heal)
    }
}

/// Formula parameters of a skill: `power + dice d die`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormulaParams {
    pub power: i32,
    pub die: u32,
    pub dice: u32,
}

impl FormulaParams {
    pub const fn new(power: i32, die: u32, dice: u32) -> Self {
        Self { power, die, dice }
    }
}

/// `max(1, power + roll + attack - defense)`
pub fn physical(power: i32, roll: u32, attacker: &CombatStats, defender: &CombatStats) -> u32 {
    offensive(power, roll, attacker.attack, defender.defense)
}

/// `max(1, power + roll + magic - resistance)`
pub fn magical(power: i32, roll: u32, attacker: &CombatStats, defender: &CombatStats) -> u32 {
    offensive(power, roll, attacker.magic, defender.resistance)
}

/// `power + roll + magic`, never negative.
pub fn heal(power: i32, roll: u32, caster: &CombatStats) -> u32 {
    let total = i64::from(power) + i64::from(roll) + i64::from(caster.magic);
    total.clamp(0, i64::from(u32::MAX)) as u32
}

fn offensive(power: i32, roll: u32, offense: u32, defense: u32) -> u32 {
    let total = i64::from(power) + i64::from(roll) + i64::from(offense) - i64::from(defense);
    total.clamp(1, i64::from(u32::MAX)) as u32
}

/// Computes the magnitude for a category from an already-rolled total.
pub fn calculate(
    category: AttackCategory,
    params: &FormulaParams,
    roll: u32,
    user: &CombatStats,
    target: &CombatStats,
) -> u32 {
    match category {
        AttackCategory::Physical => physical(params.power, roll, user, target),
        AttackCategory::Magical => magical(params.power, roll, user, target),
        AttackCategory::Heal => heal(params.power, roll, user),
    }
}

/// Rolls the formula dice and computes the magnitude.
pub fn evaluate(
    category: AttackCategory,
    params: &FormulaParams,
    user: &CombatStats,
    target: &CombatStats,
    rolls: &mut dyn RollProvider,
) -> u32 {
    let roll = rolls.roll(params.die, params.dice);
    let magnitude = calculate(category, params, roll, user, target);
    tracing::debug!(
        %category,
        power = params.power,
        die = params.die,
        dice = params.dice,
        roll,
        magnitude,
        "formula evaluated"
    );
    magnitude
}
