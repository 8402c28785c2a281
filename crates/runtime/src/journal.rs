//! Run journal: short human-readable entries shown at game over.

use game_core::{BattleEvent, BattleOutcome, EventSink, Side};

use crate::events::{RunEvent, RunSink};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<String>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}

/// Forwards battle events to the run sink and notes the milestones.
///
/// Only party members' deaths are journaled.
pub(crate) struct BattleRelay<'a> {
    pub sink: &'a mut dyn RunSink,
    pub journal: &'a mut Journal,
}

impl EventSink for BattleRelay<'_> {
    fn emit(&mut self, event: BattleEvent) {
        match &event {
            BattleEvent::BattleStarted { .. } => self.journal.record("- Battle started"),
            BattleEvent::CombatantDefeated { combatant } if combatant.side == Side::Heroes => {
                self.journal.record(format!("- {} died", combatant.name));
            }
            BattleEvent::BattleConcluded {
                outcome: BattleOutcome::Victory,
                ..
            } => self.journal.record("- Enemies defeated!"),
            _ => {}
        }
        self.sink.emit(RunEvent::Battle(event));
    }
}
