//! Terminal front end for the tower run.
//!
//! The binary wires three pieces around [`runtime::Dungeon`]:
//! - [`config`] reads settings from the environment
//! - [`logging`] sends tracing output to a per-session log file
//! - [`console`] asks questions on stdin and prints events to stdout
pub mod config;
pub mod console;
pub mod logging;

pub use config::ClientConfig;
pub use console::{ConsoleChooser, ConsolePresenter};
