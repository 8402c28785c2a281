//! Targeting rules and target resolution.
//!
//! Resolution happens in two steps:
//! - [`scope`] works out which combatants a rule can reach (a pick from a
//!   pool, the whole pool, or the actor itself)
//! - [`select_targets`] turns that scope into concrete targets, asking the
//!   [`Chooser`] for interactive actors and rolling for autonomous ones
//!
//! "Enemy" and "ally" are relative to the actor: callers pass the actor's
//! own roster as `allies` and the opposing roster as `enemies`.

use crate::combatant::{Combatant, CombatantId, Side};
use crate::dice::RollProvider;
use crate::engine::BattleError;
use crate::event::CombatantView;
use crate::input::{Chooser, Prompt, select_checked};
use crate::policy::DecisionPolicy;
use crate::skill::SkillRef;

/// How a skill selects its targets.
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
pub enum TargetingRule {
    /// One combatant from the opposing roster.
    SingleEnemy,
    /// One combatant from the actor's roster, the actor included.
    SingleAlly,
    /// Every combatant in the opposing roster.
    AllEnemies,
    /// Every combatant in the actor's roster, the actor included.
    AllAllies,
    /// The actor only.
    SelfOnly,
}

impl TargetingRule {
    pub const fn targets_opponents(&self) -> bool {
        matches!(self, Self::SingleEnemy | Self::AllEnemies)
    }

    pub const fn is_group(&self) -> bool {
        matches!(self, Self::AllEnemies | Self::AllAllies)
    }

    /// Side the targets belong to, for an actor fighting on `actor_side`.
    pub const fn target_side(&self, actor_side: Side) -> Side {
        if self.targets_opponents() {
            actor_side.opposing()
        } else {
            actor_side
        }
    }
}

/// Reach of a rule over the current rosters.
#[derive(Clone, Copy, Debug)]
pub enum TargetScope<'a> {
    /// Exactly one combatant from the pool.
    Single(&'a [Combatant]),
    /// The whole pool, all or nothing.
    Group(&'a [Combatant]),
    /// The acting combatant.
    Actor,
}

/// Computes the eligible pool for `rule`.
///
/// Rosters only ever hold living combatants, so the pool is the roster as is.
pub fn scope<'a>(
    rule: TargetingRule,
    allies: &'a [Combatant],
    enemies: &'a [Combatant],
) -> TargetScope<'a> {
    match rule {
        TargetingRule::SingleEnemy => TargetScope::Single(enemies),
        TargetingRule::SingleAlly => TargetScope::Single(allies),
        TargetingRule::AllEnemies => TargetScope::Group(enemies),
        TargetingRule::AllAllies => TargetScope::Group(allies),
        TargetingRule::SelfOnly => TargetScope::Actor,
    }
}

/// Result of target selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TargetSelection {
    /// Targets in resolution order.
    Targets(Vec<CombatantId>),
    /// No target: abort the action without spending anything.
    Cancelled,
}

/// Everything needed to pick targets for one skill.
#[derive(Clone, Copy, Debug)]
pub struct TargetRequest<'a> {
    pub actor: &'a Combatant,
    pub side: Side,
    pub skill: &'a SkillRef,
    pub allies: &'a [Combatant],
    pub enemies: &'a [Combatant],
}

/// Resolves the skill's targeting rule into concrete targets.
///
/// Interactive actors may back out of any single or group choice; autonomous
/// actors never cancel, except when a pool is empty.
pub fn select_targets(
    request: &TargetRequest<'_>,
    rolls: &mut dyn RollProvider,
    chooser: &mut dyn Chooser,
) -> Result<TargetSelection, BattleError> {
    let rule = request.skill.targeting;
    let pool_side = rule.target_side(request.side);
    let policy = request.actor.policy();

    let selection = match scope(rule, request.allies, request.enemies) {
        TargetScope::Actor => TargetSelection::Targets(vec![request.actor.id()]),
        TargetScope::Single(pool) => match policy {
            DecisionPolicy::Interactive => {
                let prompt = Prompt::ChooseTarget {
                    actor: CombatantView::new(request.actor, request.side),
                    skill: request.skill.clone(),
                    candidates: CombatantView::roster(pool, pool_side),
                };
                let index = select_checked(chooser, &prompt)?;
                match pool.get(index) {
                    Some(target) => TargetSelection::Targets(vec![target.id()]),
                    None => TargetSelection::Cancelled,
                }
            }
            DecisionPolicy::Autonomous => {
                if pool.is_empty() {
                    TargetSelection::Cancelled
                } else {
                    let index = rolls.choose_index(pool.len());
                    TargetSelection::Targets(vec![pool[index].id()])
                }
            }
        },
        TargetScope::Group(pool) => {
            let confirmed = match policy {
                DecisionPolicy::Interactive => {
                    let prompt = Prompt::ConfirmGroup {
                        actor: CombatantView::new(request.actor, request.side),
                        skill: request.skill.clone(),
                        members: CombatantView::roster(pool, pool_side),
                    };
                    select_checked(chooser, &prompt)? == 0
                }
                DecisionPolicy::Autonomous => true,
            };
            if confirmed && !pool.is_empty() {
                TargetSelection::Targets(pool.iter().map(Combatant::id).collect())
            } else {
                TargetSelection::Cancelled
            }
        }
    };

    Ok(selection)
}
