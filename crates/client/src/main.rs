//! Dungeon game client binary.
//!
//! Composition root: reads the environment, loads content, builds the
//! player's hero and plays a run on the terminal.
//!
//! ```bash
//! # reproducible run without pauses
//! DUNGEON_SEED=7 DUNGEON_AUTO_CONTINUE=1 cargo run -p dungeon-client
//! ```

use std::io;

use anyhow::{Result, anyhow};
use dungeon_client::{ClientConfig, ConsoleChooser, ConsolePresenter, logging};
use game_content::{ContentBundle, ContentFactory};
use game_core::{DecisionPolicy, GameError};
use runtime::{Dungeon, RunConfig, RuntimeError};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(&config)?;

    tracing::info!("Starting Dungeon client");

    let content = match &config.data_dir {
        Some(dir) => ContentFactory::new(dir).load_bundle()?,
        None => ContentBundle::embedded()?,
    };

    let run_config = RunConfig {
        seed: config.seed,
        ..RunConfig::default()
    }
    .with_battle(content.config.clone());
    let (seed, mut rolls) = run_config.roller();
    tracing::info!(seed, "run seeded");

    let mut chooser = ConsoleChooser::new(io::stdin().lock(), io::stdout(), config.auto_continue);
    let mut presenter = ConsolePresenter::new(io::stdout());

    let player = content
        .characters
        .player()
        .ok_or_else(|| anyhow!("content defines no player archetype"))?;
    let name = chooser
        .read_text("\nPlease enter your name: ")?
        .unwrap_or_else(|| "Hero".to_owned());
    let hero = content
        .characters
        .create(player, &name, DecisionPolicy::Interactive)?;

    let over = Dungeon::new(&content, run_config, vec![hero])
        .and_then(|dungeon| dungeon.run(&mut rolls, &mut chooser, &mut presenter))
        .map_err(report)?;

    tracing::info!(rooms = over.rooms_cleared, "Dungeon client exiting");
    Ok(())
}

/// Logs a run failure with its classification before handing it to anyhow.
fn report(err: RuntimeError) -> anyhow::Error {
    tracing::error!(
        code = err.error_code(),
        severity = err.severity().as_str(),
        "run aborted: {err}"
    );
    err.into()
}
