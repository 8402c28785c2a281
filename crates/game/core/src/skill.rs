//! Skill definitions and the shared skill catalog.
//!
//! A [`Skill`] is immutable once built and shared between every combatant
//! that learns it through a [`SkillRef`]. [`SkillCatalog`] interns skills by
//! name: the first definition registered under a name is the one every later
//! lookup receives.

use std::collections::HashMap;
use std::sync::Arc;

use crate::combat::{AttackCategory, FormulaParams};
use crate::targeting::TargetingRule;

/// Shared, immutable handle to a catalog skill.
pub type SkillRef = Arc<Skill>;

/// One usable action: cost, category, targeting rule and formula.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub name: String,
    pub description: String,
    /// MP spent when the action is committed.
    pub cost: u32,
    pub category: AttackCategory,
    pub targeting: TargetingRule,
    pub formula: FormulaParams,
}

impl Skill {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        cost: u32,
        category: AttackCategory,
        targeting: TargetingRule,
        formula: FormulaParams,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            cost,
            category,
            targeting,
            formula,
        }
    }

    /// Wraps the skill into a shared handle.
    pub fn into_ref(self) -> SkillRef {
        Arc::new(self)
    }

    pub fn is_free(&self) -> bool {
        self.cost == 0
    }
}

/// Name-keyed registry of shared skills.
#[derive(Clone, Debug, Default)]
pub struct SkillCatalog {
    skills: HashMap<String, SkillRef>,
    order: Vec<String>,
}

impl SkillCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a skill and returns the shared handle for its name.
    ///
    /// If the name is already registered the existing instance is returned
    /// and `skill` is dropped.
    pub fn intern(&mut self, skill: Skill) -> SkillRef {
        if let Some(existing) = self.skills.get(&skill.name) {
            if **existing != skill {
                tracing::warn!(
                    skill = %skill.name,
                    "conflicting definition ignored, keeping first registration"
                );
            }
            return Arc::clone(existing);
        }

        let name = skill.name.clone();
        let shared = skill.into_ref();
        self.skills.insert(name.clone(), Arc::clone(&shared));
        self.order.push(name);
        shared
    }

    pub fn get(&self, name: &str) -> Option<&SkillRef> {
        self.skills.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.skills.contains_key(name)
    }

    /// Skills in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &SkillRef> + '_ {
        self.order.iter().filter_map(|name| self.skills.get(name))
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
