//! The run loop: rooms one after another until the party falls.

use game_content::{ArchetypeRole, ContentBundle};
use game_core::{
    BattleEngine, Chooser, Combatant, CombatantView, DecisionPolicy, Prompt, RollProvider, Side,
    select_checked,
};

use crate::config::RunConfig;
use crate::error::{Result, RuntimeError};
use crate::events::{RunEvent, RunSink};
use crate::journal::{BattleRelay, Journal};
use crate::rooms::Room;

/// Summary handed back once the party has fallen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOver {
    pub rooms_cleared: u32,
    pub epilogue: String,
    pub journal: Vec<String>,
}

/// A run through the tower.
///
/// Owns the party between rooms; battles borrow it by value and hand the
/// survivors back.
pub struct Dungeon<'c> {
    content: &'c ContentBundle,
    config: RunConfig,
    party: Vec<Combatant>,
    rooms_entered: u32,
    journal: Journal,
}

impl<'c> Dungeon<'c> {
    pub fn new(content: &'c ContentBundle, config: RunConfig, party: Vec<Combatant>) -> Result<Self> {
        if party.is_empty() {
            return Err(RuntimeError::EmptyParty);
        }
        config.validate()?;
        Ok(Self {
            content,
            config,
            party,
            rooms_entered: 0,
            journal: Journal::new(),
        })
    }

    pub fn party(&self) -> &[Combatant] {
        &self.party
    }

    pub fn rooms_entered(&self) -> u32 {
        self.rooms_entered
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn is_over(&self) -> bool {
        self.party.is_empty()
    }

    /// Plays rooms until the party is empty, then reports the run.
    pub fn run(
        mut self,
        rolls: &mut dyn RollProvider,
        chooser: &mut dyn Chooser,
        sink: &mut dyn RunSink,
    ) -> Result<GameOver> {
        sink.emit(RunEvent::Intro {
            text: self.content.rooms.intro.clone(),
        });
        chooser.acknowledge();

        while !self.is_over() {
            self.enter_next_room(rolls, chooser, sink)?;
            chooser.acknowledge();
        }

        Ok(self.finish(rolls, sink))
    }

    /// Generates the next room and plays it out.
    pub fn enter_next_room(
        &mut self,
        rolls: &mut dyn RollProvider,
        chooser: &mut dyn Chooser,
        sink: &mut dyn RunSink,
    ) -> Result<()> {
        self.rooms_entered += 1;
        self.journal
            .record(format!("Entered room {}", self.rooms_entered));

        let room = Room::generate(self.content, &self.config, rolls)?;
        let (center, description) = room.scene();
        tracing::info!(number = self.rooms_entered, kind = %room.kind(), "room entered");
        sink.emit(RunEvent::RoomEntered {
            number: self.rooms_entered,
            kind: room.kind(),
            center: center.to_owned(),
            description: description.to_owned(),
        });

        match room {
            Room::Fountain { .. } => self.fountain(chooser, sink),
            Room::Adventurer { .. } => self.adventurer(rolls, chooser, sink),
            Room::Mimic { text } => {
                let question = format!("Will you {}?", text.disguise);
                if !ask(chooser, question)? {
                    self.journal.record("- Avoided the trap of the mimic");
                    sink.emit(RunEvent::MimicAvoided);
                    return Ok(());
                }

                let key = self
                    .content
                    .characters
                    .mimics()
                    .first()
                    .copied()
                    .ok_or(RuntimeError::EmptyPool {
                        role: ArchetypeRole::Mimic,
                    })?;
                let mimic =
                    self.content
                        .characters
                        .create(key, &text.mimic, DecisionPolicy::Autonomous)?;
                sink.emit(RunEvent::MimicRevealed {
                    name: mimic.name().to_owned(),
                });
                self.journal.record("- Fell for the trap of the mimic");
                self.battle(vec![mimic], rolls, chooser, sink)
            }
            Room::Battle { enemies, .. } => self.battle(enemies, rolls, chooser, sink),
        }
    }

    fn fountain(&mut self, chooser: &mut dyn Chooser, sink: &mut dyn RunSink) -> Result<()> {
        if ask(chooser, "Will you drink from it?")? {
            self.party.iter_mut().for_each(Combatant::restore_all);
            self.journal.record("- Restored health at the fountain");
            sink.emit(RunEvent::FountainRestored {
                party: CombatantView::roster(&self.party, Side::Heroes),
            });
        } else {
            self.journal.record("- Passed by a fountain");
            sink.emit(RunEvent::FountainIgnored);
        }
        Ok(())
    }

    fn adventurer(
        &mut self,
        rolls: &mut dyn RollProvider,
        chooser: &mut dyn Chooser,
        sink: &mut dyn RunSink,
    ) -> Result<()> {
        let accepted = ask(chooser, "Will you ask the adventurer to join you?")?;
        self.journal.record("- Found another adventurer");
        if !accepted {
            sink.emit(RunEvent::AdventurerDeclined);
            return Ok(());
        }

        let characters = &self.content.characters;
        let travelers = characters.travelers();
        if travelers.is_empty() {
            return Err(RuntimeError::EmptyPool {
                role: ArchetypeRole::Traveler,
            });
        }
        let key = travelers[rolls.choose_index(travelers.len())];
        let names = &self.content.rooms.names;
        let name = &names[rolls.choose_index(names.len())];
        let recruit = characters.create(key, name, DecisionPolicy::Interactive)?;

        tracing::info!(name = %recruit.name(), archetype = key, "adventurer joined");
        self.journal
            .record(format!("- {} joined the party", recruit.name()));
        sink.emit(RunEvent::AdventurerJoined {
            name: recruit.name().to_owned(),
            archetype: key.to_owned(),
        });
        self.party.push(recruit);
        Ok(())
    }

    fn battle(
        &mut self,
        enemies: Vec<Combatant>,
        rolls: &mut dyn RollProvider,
        chooser: &mut dyn Chooser,
        sink: &mut dyn RunSink,
    ) -> Result<()> {
        // The party is only replaced once the battle finishes.
        let heroes = self.party.clone();
        let engine = BattleEngine::with_config(heroes, enemies, self.config.battle.clone())?;
        let mut relay = BattleRelay {
            sink,
            journal: &mut self.journal,
        };
        let report = engine.run(rolls, chooser, &mut relay)?;
        self.party = report.survivors;
        Ok(())
    }

    fn finish(mut self, rolls: &mut dyn RollProvider, sink: &mut dyn RunSink) -> GameOver {
        let epilogues = &self.content.rooms.epilogues;
        let epilogue = epilogues[rolls.choose_index(epilogues.len())].clone();
        self.journal.record("End of the run");
        tracing::info!(rooms = self.rooms_entered, "run over");

        let game_over = GameOver {
            rooms_cleared: self.rooms_entered,
            epilogue,
            journal: self.journal.into_entries(),
        };
        sink.emit(RunEvent::GameOver {
            rooms_cleared: game_over.rooms_cleared,
            epilogue: game_over.epilogue.clone(),
            journal: game_over.journal.clone(),
        });
        game_over
    }
}

/// Asks a yes/no question; index 0 is "yes".
fn ask(chooser: &mut dyn Chooser, question: impl Into<String>) -> Result<bool> {
    let prompt = Prompt::YesNo {
        question: question.into(),
    };
    Ok(select_checked(chooser, &prompt)? == 0)
}
