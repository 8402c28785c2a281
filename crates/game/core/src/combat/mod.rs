//! Combat resolution system.
//!
//! Pure functions mapping attacker stats, defender stats and dice into a
//! magnitude and an outcome. Nothing here mutates a combatant; the battle
//! engine applies the results.
//!
//! - `formula`: the three magnitude formulas (physical, magical, heal)
//! - `hit`: d20 to-hit classification (hit, critical, miss)
//! - `result`: complete skill resolution against one target

pub mod formula;
pub mod hit;
pub mod result;

pub use formula::{AttackCategory, FormulaParams, calculate, evaluate, heal, magical, physical};
pub use hit::{HitOutcome, classify_hit, roll_to_hit};
pub use result::{SkillResolution, resolve_skill};
