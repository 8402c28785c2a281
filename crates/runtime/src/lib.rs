//! Run orchestration on top of the battle core.
//!
//! A [`Dungeon`] walks the party through randomly generated rooms until
//! nobody is left standing. It talks to the outside world through the same
//! collaborators as the battle core ([`game_core::RollProvider`],
//! [`game_core::Chooser`]) and reports progress as [`RunEvent`]s.
//!
//! Modules are organized by responsibility:
//! - [`dungeon`] hosts the run loop and room actions
//! - [`rooms`] draws rooms and their occupants
//! - [`events`] defines what a run reports
//! - [`journal`] keeps the short run log shown at game over
//! - [`config`] and [`error`] carry run settings and failures
pub mod config;
pub mod dungeon;
pub mod error;
pub mod events;
pub mod journal;
pub mod rooms;

pub use config::{RoomWeights, RunConfig};
pub use dungeon::{Dungeon, GameOver};
pub use error::{Result, RuntimeError};
pub use events::{RunEvent, RunSink};
pub use journal::Journal;
pub use rooms::{Room, RoomKind};
