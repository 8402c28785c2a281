//! Stdout rendering of run events.

use std::io::{self, Write};

use game_core::{BattleEvent, BattleOutcome, CombatantView, HitOutcome};
use runtime::{RunEvent, RunSink};

use super::{divider, hp_bar, mp_bar};

/// Prints every run event as game text.
pub struct ConsolePresenter<W> {
    output: W,
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }

    fn render(&mut self, event: &RunEvent) -> io::Result<()> {
        let out = &mut self.output;
        match event {
            RunEvent::Intro { text } => writeln!(out, "\n{}\n", text)?,
            RunEvent::RoomEntered {
                center,
                description,
                ..
            } => {
                writeln!(out, "{}", divider())?;
                writeln!(out, "\n\nYou enter a room with {}.", center)?;
                writeln!(out, "{}", description)?;
            }
            RunEvent::FountainRestored { .. } => writeln!(
                out,
                "\nDrinking from it soothes both body and spirit.\nEveryone has their HP and MP restored!"
            )?,
            RunEvent::FountainIgnored => {
                writeln!(out, "\nYou ignore the water and continue your way.")?
            }
            RunEvent::AdventurerJoined { name, .. } => writeln!(
                out,
                "\nYou ask them to join forces with you, it should make surviving easier for everyone.\n{} has joined your party!",
                name
            )?,
            RunEvent::AdventurerDeclined => writeln!(
                out,
                "\nYou leave them behind, maybe you should not trust random people on this place."
            )?,
            RunEvent::MimicRevealed { .. } => writeln!(
                out,
                "\nAs you get closer, it suddenly shivers and wobbles.\nThe mimic reveals itself after you fell for its trap!"
            )?,
            RunEvent::MimicAvoided => {
                writeln!(out, "\nYou quickly avoid it and go to the next room.")?
            }
            RunEvent::Battle(event) => battle(out, event)?,
            RunEvent::GameOver {
                rooms_cleared,
                epilogue,
                journal,
            } => {
                writeln!(out, "{}", divider())?;
                writeln!(out, "\n{}", epilogue)?;
                writeln!(out, "{}", divider())?;
                writeln!(out, "\n\nGAME OVER\nYou got through {} rooms\n", rooms_cleared)?;
                for entry in journal {
                    writeln!(out, "{}", entry)?;
                }
            }
        }
        out.flush()
    }
}

impl<W: Write> RunSink for ConsolePresenter<W> {
    fn emit(&mut self, event: RunEvent) {
        if let Err(e) = self.render(&event) {
            tracing::warn!(error = %e, "failed to print event");
        }
    }
}

fn battle(out: &mut impl Write, event: &BattleEvent) -> io::Result<()> {
    match event {
        BattleEvent::BattleStarted { heroes, enemies } => {
            writeln!(out, "Battle starts!")?;
            writeln!(out, "\nYour party:")?;
            roster(out, heroes)?;
            writeln!(out, "\nEnemy group:")?;
            roster(out, enemies)?;
        }
        BattleEvent::RoundStarted { .. } | BattleEvent::SkillUsed { .. } => {}
        BattleEvent::TurnStarted { actor } => {
            writeln!(out, "\nIt's {}'s turn", actor.name)?;
            meters(out, actor)?;
        }
        BattleEvent::InsufficientMp { actor, .. } => {
            writeln!(out, "\n{} has not enough MP!", actor.name)?
        }
        BattleEvent::Passed { actor } => writeln!(out, "\n{} waits...", actor.name)?,
        BattleEvent::EffectApplied {
            actor,
            target,
            skill,
            magnitude,
            outcome,
            ..
        } => {
            if *outcome == HitOutcome::Miss {
                writeln!(out, "\n{}'s attack has failed!", actor.name)?;
            } else {
                writeln!(
                    out,
                    "\n{} uses {} on {} for {} hit points!",
                    actor.name, skill, target.name, magnitude
                )?;
                if *outcome == HitOutcome::Crit {
                    writeln!(out, "A critical hit!")?;
                }
                writeln!(out, "{}", hp_bar(target))?;
            }
        }
        BattleEvent::CombatantDefeated { combatant } => {
            writeln!(out, "\n{} has fallen!", combatant.name)?
        }
        BattleEvent::TurnEnded { actor } => {
            writeln!(out, "\n{}:", actor.name)?;
            meters(out, actor)?;
        }
        BattleEvent::BattleConcluded { outcome, .. } => match outcome {
            BattleOutcome::Victory => writeln!(out, "\nThe enemies have been slain!")?,
            BattleOutcome::Defeat => writeln!(out, "\nThe heroes have been defeated!")?,
        },
    }
    Ok(())
}

fn roster(out: &mut impl Write, members: &[CombatantView]) -> io::Result<()> {
    for (i, member) in members.iter().enumerate() {
        writeln!(out, "[{}] {} {}", i + 1, member.name, hp_bar(member))?;
    }
    Ok(())
}

fn meters(out: &mut impl Write, view: &CombatantView) -> io::Result<()> {
    writeln!(out, "{}", hp_bar(view))?;
    writeln!(out, "{}", mp_bar(view))
}
