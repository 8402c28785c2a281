//! Structured battle notifications.
//!
//! The engine never formats text. Every observable step is emitted as a
//! [`BattleEvent`] into an [`EventSink`]; presentation layers decide how to
//! render them.

use crate::combat::{AttackCategory, HitOutcome};
use crate::combatant::{Combatant, CombatantId, ResourceMeter, Side};
use crate::engine::BattleOutcome;

/// Snapshot of a combatant at the moment an event is emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantView {
    pub id: CombatantId,
    pub name: String,
    pub side: Side,
    pub hp: ResourceMeter,
    pub mp: ResourceMeter,
}

impl CombatantView {
    pub fn new(combatant: &Combatant, side: Side) -> Self {
        Self {
            id: combatant.id(),
            name: combatant.name().to_owned(),
            side,
            hp: combatant.hp(),
            mp: combatant.mp(),
        }
    }

    pub fn roster(combatants: &[Combatant], side: Side) -> Vec<Self> {
        combatants.iter().map(|c| Self::new(c, side)).collect()
    }
}

/// Events emitted while a battle is resolved, in emission order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    BattleStarted {
        heroes: Vec<CombatantView>,
        enemies: Vec<CombatantView>,
    },
    RoundStarted {
        round: u32,
    },
    TurnStarted {
        actor: CombatantView,
    },
    /// An interactive actor picked a skill it cannot pay for; it chooses again.
    InsufficientMp {
        actor: CombatantView,
        skill: String,
        cost: u32,
        available: u32,
    },
    Passed {
        actor: CombatantView,
    },
    /// An action was committed and its MP spent.
    SkillUsed {
        actor: CombatantView,
        skill: String,
        category: AttackCategory,
        targets: Vec<CombatantId>,
    },
    /// One target resolved. `target` reflects HP after the effect.
    EffectApplied {
        actor: CombatantView,
        target: CombatantView,
        skill: String,
        category: AttackCategory,
        magnitude: u32,
        outcome: HitOutcome,
    },
    /// HP reached zero; the combatant left its roster.
    CombatantDefeated {
        combatant: CombatantView,
    },
    TurnEnded {
        actor: CombatantView,
    },
    BattleConcluded {
        outcome: BattleOutcome,
        survivors: Vec<CombatantView>,
    },
}

/// Receiver of battle events.
pub trait EventSink {
    fn emit(&mut self, event: BattleEvent);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: BattleEvent) {
        (**self).emit(event);
    }
}

/// Recording sink.
impl EventSink for Vec<BattleEvent> {
    fn emit(&mut self, event: BattleEvent) {
        self.push(event);
    }
}

/// Sink that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: BattleEvent) {}
}
