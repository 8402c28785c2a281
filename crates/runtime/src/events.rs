//! Events emitted while a run progresses.
//!
//! Room outcomes are reported as structured [`RunEvent`]s; battle steps are
//! forwarded unchanged inside [`RunEvent::Battle`]. Nothing here is
//! pre-formatted for a terminal.

use game_core::{BattleEvent, CombatantView};
use serde::{Deserialize, Serialize};

use crate::rooms::RoomKind;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunEvent {
    /// Opening narration, emitted once before the first room.
    Intro { text: String },
    RoomEntered {
        /// 1-based room counter.
        number: u32,
        kind: RoomKind,
        center: String,
        description: String,
    },
    /// Everyone in the party was restored; `party` reflects the new meters.
    FountainRestored { party: Vec<CombatantView> },
    FountainIgnored,
    AdventurerJoined { name: String, archetype: String },
    AdventurerDeclined,
    /// The party approached a mimic; a battle against it follows.
    MimicRevealed { name: String },
    MimicAvoided,
    Battle(BattleEvent),
    GameOver {
        rooms_cleared: u32,
        epilogue: String,
        journal: Vec<String>,
    },
}

/// Receiver of run events.
pub trait RunSink {
    fn emit(&mut self, event: RunEvent);
}

impl<S: RunSink + ?Sized> RunSink for &mut S {
    fn emit(&mut self, event: RunEvent) {
        (**self).emit(event);
    }
}

/// Recording sink.
impl RunSink for Vec<RunEvent> {
    fn emit(&mut self, event: RunEvent) {
        self.push(event);
    }
}
