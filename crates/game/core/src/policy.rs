//! Decision policies: how a combatant picks its action each turn.
//!
//! Interactive combatants ask the [`Chooser`]; autonomous combatants roll.
//! Both produce a [`Decision`] the engine then commits.

use crate::combatant::{Combatant, CombatantId, Side};
use crate::dice::RollProvider;
use crate::engine::BattleError;
use crate::event::{BattleEvent, CombatantView, EventSink};
use crate::input::{Chooser, Prompt, select_checked};
use crate::skill::SkillRef;
use crate::targeting::{TargetRequest, TargetSelection, select_targets};

/// Who picks a combatant's actions.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DecisionPolicy {
    /// Asks the input collaborator for every choice.
    Interactive,
    /// Picks uniformly at random among affordable skills and legal targets.
    #[default]
    Autonomous,
}

/// View of the battlefield from the acting combatant's seat.
#[derive(Clone, Copy, Debug)]
pub struct TurnContext<'a> {
    pub actor: &'a Combatant,
    pub side: Side,
    /// The actor's own roster, actor included.
    pub allies: &'a [Combatant],
    pub enemies: &'a [Combatant],
}

/// A committed skill use with its resolved targets.
#[derive(Clone, Debug)]
pub struct Action {
    pub skill: SkillRef,
    pub targets: Vec<CombatantId>,
}

#[derive(Clone, Debug)]
pub enum Decision {
    Act(Action),
    Pass,
}

impl DecisionPolicy {
    /// Produces the actor's decision for this turn.
    ///
    /// Interactive flow: pick a skill (last option passes), reject skills the
    /// actor cannot afford, then pick targets; backing out of targeting
    /// returns to the skill list.
    pub fn decide(
        self,
        ctx: &TurnContext<'_>,
        rolls: &mut dyn RollProvider,
        chooser: &mut dyn Chooser,
        sink: &mut dyn EventSink,
    ) -> Result<Decision, BattleError> {
        match self {
            Self::Interactive => decide_interactive(ctx, rolls, chooser, sink),
            Self::Autonomous => decide_autonomous(ctx, rolls, chooser),
        }
    }
}

fn decide_interactive(
    ctx: &TurnContext<'_>,
    rolls: &mut dyn RollProvider,
    chooser: &mut dyn Chooser,
    sink: &mut dyn EventSink,
) -> Result<Decision, BattleError> {
    let skills = ctx.actor.skills().to_vec();

    loop {
        let prompt = Prompt::ChooseSkill {
            actor: CombatantView::new(ctx.actor, ctx.side),
            skills: skills.clone(),
        };
        let index = select_checked(chooser, &prompt)?;
        let Some(skill) = skills.get(index) else {
            return Ok(Decision::Pass);
        };

        if !ctx.actor.can_afford(skill.cost) {
            sink.emit(BattleEvent::InsufficientMp {
                actor: CombatantView::new(ctx.actor, ctx.side),
                skill: skill.name.clone(),
                cost: skill.cost,
                available: ctx.actor.mp().current(),
            });
            continue;
        }

        let request = TargetRequest {
            actor: ctx.actor,
            side: ctx.side,
            skill,
            allies: ctx.allies,
            enemies: ctx.enemies,
        };
        match select_targets(&request, rolls, chooser)? {
            TargetSelection::Targets(targets) => {
                return Ok(Decision::Act(Action {
                    skill: skill.clone(),
                    targets,
                }));
            }
            TargetSelection::Cancelled => continue,
        }
    }
}

fn decide_autonomous(
    ctx: &TurnContext<'_>,
    rolls: &mut dyn RollProvider,
    chooser: &mut dyn Chooser,
) -> Result<Decision, BattleError> {
    let affordable: Vec<&SkillRef> = ctx.actor.affordable_skills().collect();
    if affordable.is_empty() {
        tracing::warn!(actor = %ctx.actor.name(), "no affordable skill, passing");
        return Ok(Decision::Pass);
    }

    let skill = affordable[rolls.choose_index(affordable.len())];
    let request = TargetRequest {
        actor: ctx.actor,
        side: ctx.side,
        skill,
        allies: ctx.allies,
        enemies: ctx.enemies,
    };

    match select_targets(&request, rolls, chooser)? {
        TargetSelection::Targets(targets) => Ok(Decision::Act(Action {
            skill: skill.clone(),
            targets,
        })),
        TargetSelection::Cancelled => {
            tracing::warn!(
                actor = %ctx.actor.name(),
                skill = %skill.name,
                "no legal target, passing"
            );
            Ok(Decision::Pass)
        }
    }
}
