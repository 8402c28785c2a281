//! Skill catalog loader.

use std::path::Path;

use game_core::{Skill, SkillCatalog};

use crate::loaders::{LoadResult, read_file};

/// Loader for the skill catalog from RON files.
///
/// RON format: `Vec<Skill>`. Entries are interned in file order, so a
/// duplicated name keeps its first definition.
pub struct SkillLoader;

impl SkillLoader {
    pub fn load(path: &Path) -> LoadResult<SkillCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<SkillCatalog> {
        let skills: Vec<Skill> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skill catalog RON: {}", e))?;

        let mut catalog = SkillCatalog::new();
        for skill in skills {
            if skill.formula.die == 0 || skill.formula.dice == 0 {
                anyhow::bail!(
                    "Invalid skill '{}': formula needs at least one die with one side",
                    skill.name
                );
            }
            catalog.intern(skill);
        }
        tracing::debug!(skills = catalog.len(), "skill catalog loaded");
        Ok(catalog)
    }
}
