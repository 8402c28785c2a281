//! Input collaborator contract.
//!
//! The core decides *what* has to be chosen and describes it as a
//! [`Prompt`]; a [`Chooser`] decides *how* to ask. Every prompt enumerates
//! its options and the last option is always the way out (pass, back, no).

use std::collections::VecDeque;

use crate::engine::BattleError;
use crate::event::CombatantView;
use crate::skill::SkillRef;

/// A choice the core needs from outside.
#[derive(Clone, Debug)]
pub enum Prompt {
    /// Options: each skill in learned order, then "pass".
    ChooseSkill {
        actor: CombatantView,
        skills: Vec<SkillRef>,
    },
    /// Options: each candidate, then "back".
    ChooseTarget {
        actor: CombatantView,
        skill: SkillRef,
        candidates: Vec<CombatantView>,
    },
    /// Options: "all", then "back".
    ConfirmGroup {
        actor: CombatantView,
        skill: SkillRef,
        members: Vec<CombatantView>,
    },
    /// Options: "yes", then "no".
    YesNo { question: String },
}

impl Prompt {
    /// Number of options including the trailing way-out option.
    pub fn option_count(&self) -> usize {
        match self {
            Prompt::ChooseSkill { skills, .. } => skills.len() + 1,
            Prompt::ChooseTarget { candidates, .. } => candidates.len() + 1,
            Prompt::ConfirmGroup { .. } | Prompt::YesNo { .. } => 2,
        }
    }

    /// Index of the pass/back/no option.
    pub fn cancel_index(&self) -> usize {
        self.option_count() - 1
    }
}

/// Supplies validated selections and continue acknowledgements.
pub trait Chooser {
    /// Returns a 0-based index into the prompt's options.
    fn select(&mut self, prompt: &Prompt) -> usize;

    /// Blocks until the user is ready to continue.
    fn acknowledge(&mut self) {}
}

impl<C: Chooser + ?Sized> Chooser for &mut C {
    fn select(&mut self, prompt: &Prompt) -> usize {
        (**self).select(prompt)
    }

    fn acknowledge(&mut self) {
        (**self).acknowledge();
    }
}

/// Asks `chooser` and rejects indices outside the prompt's options.
pub fn select_checked(chooser: &mut dyn Chooser, prompt: &Prompt) -> Result<usize, BattleError> {
    let options = prompt.option_count();
    let index = chooser.select(prompt);
    if index >= options {
        return Err(BattleError::InvalidSelection { index, options });
    }
    Ok(index)
}

/// Replays a fixed list of selections.
///
/// When the script runs out it answers every prompt with its way-out
/// option, so an exhausted script passes turns and declines questions.
#[derive(Clone, Debug, Default)]
pub struct ScriptedChooser {
    picks: VecDeque<usize>,
    prompts: usize,
    acknowledgements: usize,
}

impl ScriptedChooser {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Number of prompts answered so far.
    pub fn prompts(&self) -> usize {
        self.prompts
    }

    pub fn acknowledgements(&self) -> usize {
        self.acknowledgements
    }

    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl Chooser for ScriptedChooser {
    fn select(&mut self, prompt: &Prompt) -> usize {
        self.prompts += 1;
        self.picks
            .pop_front()
            .unwrap_or_else(|| prompt.cancel_index())
    }

    fn acknowledge(&mut self) {
        self.acknowledgements += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Prompt {
        Prompt::YesNo {
            question: "Will you drink from it?".into(),
        }
    }

    #[test]
    fn yes_no_has_two_options() {
        let prompt = question();
        assert_eq!(prompt.option_count(), 2);
        assert_eq!(prompt.cancel_index(), 1);
    }

    #[test]
    fn exhausted_script_answers_with_way_out() {
        let mut chooser = ScriptedChooser::new([0]);
        assert_eq!(chooser.select(&question()), 0);
        assert_eq!(chooser.select(&question()), 1);
        assert_eq!(chooser.prompts(), 2);
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        let mut chooser = ScriptedChooser::new([5]);
        let result = select_checked(&mut chooser, &question());
        assert!(matches!(
            result,
            Err(BattleError::InvalidSelection {
                index: 5,
                options: 2
            })
        ));
    }
}
