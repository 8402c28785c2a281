use crate::combat::resolve_skill;
use crate::combatant::{Combatant, CombatantId, Side};
use crate::dice::RollProvider;
use crate::event::{BattleEvent, CombatantView, EventSink};
use crate::input::Chooser;
use crate::policy::{Action, Decision, TurnContext};

use super::{BattleEngine, BattleError, BattleStatus};

/// Round and turn sequencing for BattleEngine.
impl BattleEngine {
    /// Plays one full round: every living hero in roster order, then every
    /// living enemy.
    ///
    /// The acting order is snapshotted per side when that side's phase
    /// begins; combatants removed before their slot are skipped. The round
    /// stops as soon as the battle becomes terminal.
    pub fn play_round(
        &mut self,
        rolls: &mut dyn RollProvider,
        chooser: &mut dyn Chooser,
        sink: &mut dyn EventSink,
    ) -> Result<(), BattleError> {
        if self.status == BattleStatus::NotStarted {
            self.start(chooser, sink);
        }
        if self.status.is_terminal() {
            return Ok(());
        }

        self.round += 1;
        tracing::debug!(round = self.round, "round started");
        sink.emit(BattleEvent::RoundStarted { round: self.round });

        for side in [Side::Heroes, Side::Enemies] {
            let order: Vec<CombatantId> = self.roster(side).iter().map(Combatant::id).collect();
            for id in order {
                if self.position(side, id).is_none() {
                    continue;
                }
                self.take_turn(side, id, rolls, chooser, sink)?;
                if self.status.is_terminal() {
                    self.conclude(sink);
                    return Ok(());
                }
            }
        }

        Ok(())
    }

    fn take_turn(
        &mut self,
        side: Side,
        id: CombatantId,
        rolls: &mut dyn RollProvider,
        chooser: &mut dyn Chooser,
        sink: &mut dyn EventSink,
    ) -> Result<(), BattleError> {
        let Some(index) = self.position(side, id) else {
            return Ok(());
        };

        let decision = {
            let (allies, enemies) = self.sides(side);
            let actor = &allies[index];
            sink.emit(BattleEvent::TurnStarted {
                actor: CombatantView::new(actor, side),
            });
            let ctx = TurnContext {
                actor,
                side,
                allies,
                enemies,
            };
            actor.policy().decide(&ctx, rolls, chooser, sink)?
        };

        match decision {
            Decision::Pass => {
                if let Some(actor) = self.view(id) {
                    tracing::debug!(actor = %actor.name, "passed");
                    sink.emit(BattleEvent::Passed { actor });
                }
            }
            Decision::Act(action) => self.commit(side, id, action, rolls, sink),
        }

        if let Some(actor) = self.view(id) {
            sink.emit(BattleEvent::TurnEnded { actor });
        }
        chooser.acknowledge();
        Ok(())
    }

    /// Spends the skill's cost, then resolves each target in order.
    ///
    /// Targets that already left their roster are skipped. The end condition
    /// is re-checked after every target; once terminal, remaining targets are
    /// not resolved.
    fn commit(
        &mut self,
        side: Side,
        actor_id: CombatantId,
        action: Action,
        rolls: &mut dyn RollProvider,
        sink: &mut dyn EventSink,
    ) {
        let Action { skill, targets } = action;
        let Some(index) = self.position(side, actor_id) else {
            return;
        };

        let actor = &mut self.roster_mut(side)[index];
        actor.change_mp(-i64::from(skill.cost));
        let user_stats = *actor.stats();
        let actor_view = CombatantView::new(actor, side);

        tracing::debug!(
            actor = %actor_view.name,
            skill = %skill.name,
            targets = targets.len(),
            "skill used"
        );
        sink.emit(BattleEvent::SkillUsed {
            actor: actor_view.clone(),
            skill: skill.name.clone(),
            category: skill.category,
            targets: targets.clone(),
        });

        let config = self.config.clone();
        for target_id in targets {
            let Some((target_side, target_index)) = self.locate(target_id) else {
                tracing::debug!(target = %target_id, "target already removed, skipped");
                continue;
            };

            let target = &mut self.roster_mut(target_side)[target_index];
            let resolution = resolve_skill(&skill, &user_stats, target.stats(), rolls, &config);
            if resolution.landed() {
                target.receive(resolution.magnitude, skill.category);
            }

            let target_view = CombatantView::new(target, target_side);
            let defeated = target.is_defeated();
            sink.emit(BattleEvent::EffectApplied {
                actor: actor_view.clone(),
                target: target_view.clone(),
                skill: skill.name.clone(),
                category: skill.category,
                magnitude: resolution.magnitude,
                outcome: resolution.outcome,
            });

            if defeated {
                self.roster_mut(target_side).remove(target_index);
                tracing::debug!(combatant = %target_view.name, side = %target_side, "defeated");
                sink.emit(BattleEvent::CombatantDefeated {
                    combatant: target_view,
                });
                if self.refresh_status() {
                    break;
                }
            }
        }
    }

    /// Splits the rosters into (own side, opposing side) for `side`.
    fn sides(&self, side: Side) -> (&[Combatant], &[Combatant]) {
        match side {
            Side::Heroes => (&self.heroes, &self.enemies),
            Side::Enemies => (&self.enemies, &self.heroes),
        }
    }

    fn roster_mut(&mut self, side: Side) -> &mut Vec<Combatant> {
        match side {
            Side::Heroes => &mut self.heroes,
            Side::Enemies => &mut self.enemies,
        }
    }

    fn position(&self, side: Side, id: CombatantId) -> Option<usize> {
        self.roster(side).iter().position(|c| c.id() == id)
    }

    fn locate(&self, id: CombatantId) -> Option<(Side, usize)> {
        [Side::Heroes, Side::Enemies]
            .into_iter()
            .find_map(|side| self.position(side, id).map(|index| (side, index)))
    }

    fn view(&self, id: CombatantId) -> Option<CombatantView> {
        let (side, index) = self.locate(id)?;
        Some(CombatantView::new(&self.roster(side)[index], side))
    }
}
