//! Deterministic battle rules and data types shared across crates.
//!
//! `game-core` owns the combat model (combatants, skills, formulas), the
//! battle state machine and the collaborator contracts it talks through:
//! randomness ([`RollProvider`]), input ([`Chooser`]) and presentation
//! ([`EventSink`]). It performs no I/O; content loading and console rendering
//! live in the crates built on top of it.
pub mod combat;
pub mod combatant;
pub mod config;
pub mod dice;
pub mod engine;
pub mod error;
pub mod event;
pub mod input;
pub mod policy;
pub mod skill;
pub mod targeting;

pub use combat::{
    AttackCategory, FormulaParams, HitOutcome, SkillResolution, classify_hit, resolve_skill,
};
pub use combatant::{CombatStats, Combatant, CombatantId, ResourceMeter, Side};
pub use config::BattleConfig;
pub use dice::{PcgRoller, RollProvider, ScriptedRolls};
pub use engine::{BattleEngine, BattleError, BattleOutcome, BattleReport, BattleStatus};
pub use error::{ErrorSeverity, GameError};
pub use event::{BattleEvent, CombatantView, EventSink, NullSink};
pub use input::{Chooser, Prompt, ScriptedChooser, select_checked};
pub use policy::{Action, Decision, DecisionPolicy, TurnContext};
pub use skill::{Skill, SkillCatalog, SkillRef};
pub use targeting::{TargetRequest, TargetScope, TargetSelection, TargetingRule, select_targets};
