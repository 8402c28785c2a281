//! Battle state machine.
//!
//! A [`BattleEngine`] owns both rosters for the duration of one battle and
//! drives it round by round: every living hero acts in roster order, then
//! every living enemy. Defeated combatants leave their roster immediately, so
//! no later action in the same round can target them, and the battle ends the
//! moment either roster empties.

mod errors;
mod turns;

pub use errors::BattleError;

use crate::combatant::{Combatant, CombatantId, Side};
use crate::config::BattleConfig;
use crate::dice::RollProvider;
use crate::event::{BattleEvent, CombatantView, EventSink};
use crate::input::Chooser;

/// Lifecycle of a battle.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BattleStatus {
    #[default]
    NotStarted,
    InProgress,
    Victory,
    Defeat,
}

impl BattleStatus {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Victory | Self::Defeat)
    }

    pub const fn outcome(&self) -> Option<BattleOutcome> {
        match self {
            Self::Victory => Some(BattleOutcome::Victory),
            Self::Defeat => Some(BattleOutcome::Defeat),
            Self::NotStarted | Self::InProgress => None,
        }
    }
}

/// How a finished battle ended, from the heroes' point of view.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BattleOutcome {
    Victory,
    Defeat,
}

/// Final result handed back to the caller.
#[derive(Clone, Debug)]
pub struct BattleReport {
    pub outcome: BattleOutcome,
    /// Rounds started, the last one included even if cut short.
    pub rounds: u32,
    /// The remaining hero roster with HP/MP as they stand; empty on defeat.
    pub survivors: Vec<Combatant>,
}

impl BattleReport {
    pub fn is_victory(&self) -> bool {
        self.outcome == BattleOutcome::Victory
    }
}

/// Owns the rosters and advances the battle.
#[derive(Debug)]
pub struct BattleEngine {
    heroes: Vec<Combatant>,
    enemies: Vec<Combatant>,
    status: BattleStatus,
    round: u32,
    config: BattleConfig,
}

impl BattleEngine {
    /// Takes ownership of both rosters and assigns battle-scoped ids, heroes
    /// first.
    ///
    /// Both rosters must be non-empty and every combatant must have HP left.
    pub fn new(heroes: Vec<Combatant>, enemies: Vec<Combatant>) -> Result<Self, BattleError> {
        Self::with_config(heroes, enemies, BattleConfig::default())
    }

    pub fn with_config(
        mut heroes: Vec<Combatant>,
        mut enemies: Vec<Combatant>,
        config: BattleConfig,
    ) -> Result<Self, BattleError> {
        if heroes.is_empty() {
            return Err(BattleError::EmptyRoster { side: Side::Heroes });
        }
        if enemies.is_empty() {
            return Err(BattleError::EmptyRoster {
                side: Side::Enemies,
            });
        }
        for (side, roster) in [(Side::Heroes, &heroes), (Side::Enemies, &enemies)] {
            if let Some(fallen) = roster.iter().find(|c| c.is_defeated()) {
                return Err(BattleError::DefeatedCombatant {
                    side,
                    name: fallen.name().to_owned(),
                });
            }
        }

        for (index, combatant) in heroes.iter_mut().chain(enemies.iter_mut()).enumerate() {
            combatant.assign_id(CombatantId(index as u32));
        }

        Ok(Self {
            heroes,
            enemies,
            status: BattleStatus::NotStarted,
            round: 0,
            config,
        })
    }

    pub fn status(&self) -> BattleStatus {
        self.status
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn heroes(&self) -> &[Combatant] {
        &self.heroes
    }

    pub fn enemies(&self) -> &[Combatant] {
        &self.enemies
    }

    pub fn roster(&self, side: Side) -> &[Combatant] {
        match side {
            Side::Heroes => &self.heroes,
            Side::Enemies => &self.enemies,
        }
    }

    /// Finds a living combatant by id on either side.
    pub fn combatant(&self, id: CombatantId) -> Option<(Side, &Combatant)> {
        [Side::Heroes, Side::Enemies].into_iter().find_map(|side| {
            self.roster(side)
                .iter()
                .find(|c| c.id() == id)
                .map(|c| (side, c))
        })
    }

    /// Consumes the engine, returning the remaining heroes.
    pub fn into_heroes(self) -> Vec<Combatant> {
        self.heroes
    }

    /// Emits the opening event and moves to `InProgress`.
    ///
    /// Calling it again after the battle started does nothing.
    pub fn start(&mut self, chooser: &mut dyn Chooser, sink: &mut dyn EventSink) {
        if self.status != BattleStatus::NotStarted {
            return;
        }
        self.status = BattleStatus::InProgress;
        tracing::info!(
            heroes = self.heroes.len(),
            enemies = self.enemies.len(),
            "battle started"
        );
        sink.emit(BattleEvent::BattleStarted {
            heroes: CombatantView::roster(&self.heroes, Side::Heroes),
            enemies: CombatantView::roster(&self.enemies, Side::Enemies),
        });
        chooser.acknowledge();
    }

    /// Runs the battle to completion.
    pub fn run(
        mut self,
        rolls: &mut dyn RollProvider,
        chooser: &mut dyn Chooser,
        sink: &mut dyn EventSink,
    ) -> Result<BattleReport, BattleError> {
        self.start(chooser, sink);
        while !self.status.is_terminal() {
            self.play_round(rolls, chooser, sink)?;
        }
        Ok(self.into_report())
    }

    /// Builds the report for a finished battle, handing back the remaining
    /// heroes (empty after a defeat).
    ///
    /// An unfinished battle reports as a defeat; use it after [`Self::run`]
    /// or once [`Self::status`] is terminal.
    pub fn into_report(self) -> BattleReport {
        BattleReport {
            outcome: self.status.outcome().unwrap_or(BattleOutcome::Defeat),
            rounds: self.round,
            survivors: self.heroes,
        }
    }

    /// Re-evaluates the end condition, defeat first. Returns true when the
    /// battle just became terminal.
    fn refresh_status(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        if self.heroes.is_empty() {
            self.status = BattleStatus::Defeat;
        } else if self.enemies.is_empty() {
            self.status = BattleStatus::Victory;
        }
        self.status.is_terminal()
    }

    fn conclude(&self, sink: &mut dyn EventSink) {
        let Some(outcome) = self.status.outcome() else {
            return;
        };
        tracing::info!(%outcome, round = self.round, "battle concluded");
        sink.emit(BattleEvent::BattleConcluded {
            outcome,
            survivors: CombatantView::roster(&self.heroes, Side::Heroes),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::CombatStats;
    use crate::policy::DecisionPolicy;

    fn body(name: &str) -> Combatant {
        Combatant::new(
            name,
            10,
            0,
            CombatStats::default(),
            DecisionPolicy::Autonomous,
        )
    }

    #[test]
    fn empty_rosters_are_rejected() {
        let err = BattleEngine::new(vec![], vec![body("Slime")]).unwrap_err();
        assert_eq!(err, BattleError::EmptyRoster { side: Side::Heroes });
        let err = BattleEngine::new(vec![body("Ayla")], vec![]).unwrap_err();
        assert_eq!(
            err,
            BattleError::EmptyRoster {
                side: Side::Enemies
            }
        );
    }

    #[test]
    fn combatants_without_hp_are_rejected() {
        let err = BattleEngine::new(vec![body("Ghost").with_hp(0)], vec![body("Slime")])
            .unwrap_err();
        assert_eq!(
            err,
            BattleError::DefeatedCombatant {
                side: Side::Heroes,
                name: "Ghost".into()
            }
        );

        let err = BattleEngine::new(
            vec![body("Ayla")],
            vec![body("Slime"), body("Husk").with_hp(0)],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            BattleError::DefeatedCombatant { side: Side::Enemies, ref name } if name == "Husk"
        ));
    }

    #[test]
    fn ids_are_assigned_heroes_first() {
        let engine = BattleEngine::new(
            vec![body("Ayla"), body("Sam")],
            vec![body("Slime"), body("Orc")],
        )
        .unwrap();
        let ids: Vec<_> = engine.heroes().iter().map(Combatant::id).collect();
        assert_eq!(ids, [CombatantId(0), CombatantId(1)]);
        let (side, orc) = engine.combatant(CombatantId(3)).unwrap();
        assert_eq!(side, Side::Enemies);
        assert_eq!(orc.name(), "Orc");
        assert_eq!(engine.status(), BattleStatus::NotStarted);
    }

    #[test]
    fn terminal_statuses_map_to_outcomes() {
        assert_eq!(BattleStatus::Victory.outcome(), Some(BattleOutcome::Victory));
        assert_eq!(BattleStatus::InProgress.outcome(), None);
        assert!(BattleStatus::Defeat.is_terminal());
        assert!(!BattleStatus::NotStarted.is_terminal());
    }
}
