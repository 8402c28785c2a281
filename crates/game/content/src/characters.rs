//! Character build provider.
//!
//! [`CharacterFactory`] turns archetype specs into fully populated
//! [`Combatant`]s whose skills are shared handles from one [`SkillCatalog`].

use std::collections::HashSet;

use game_core::{Combatant, DecisionPolicy, SkillCatalog};

use crate::loaders::{ArchetypeRole, ArchetypeSpec, LoadResult};

/// Builds combatants from validated archetypes.
#[derive(Clone, Debug)]
pub struct CharacterFactory {
    catalog: SkillCatalog,
    archetypes: Vec<ArchetypeSpec>,
}

impl CharacterFactory {
    /// Validates the archetypes against the catalog.
    ///
    /// Rejects duplicate keys, archetypes with 0 HP, unknown skill names, and
    /// autonomous archetypes without a cost-0 skill (they would have nothing
    /// to do once out of MP).
    pub fn new(catalog: SkillCatalog, archetypes: Vec<ArchetypeSpec>) -> LoadResult<Self> {
        let mut keys = HashSet::new();
        for spec in &archetypes {
            if !keys.insert(spec.key.as_str()) {
                anyhow::bail!("Duplicate archetype '{}'", spec.key);
            }
            if spec.hp == 0 {
                anyhow::bail!("Archetype '{}' must have more than 0 HP", spec.key);
            }
            if spec.skills.is_empty() {
                anyhow::bail!("Archetype '{}' has no skills", spec.key);
            }

            let mut has_free_skill = false;
            for name in &spec.skills {
                let skill = catalog.get(name).ok_or_else(|| {
                    anyhow::anyhow!(
                        "Archetype '{}' references unknown skill '{}'",
                        spec.key,
                        name
                    )
                })?;
                has_free_skill |= skill.is_free();
            }

            if spec.policy == DecisionPolicy::Autonomous && !has_free_skill {
                anyhow::bail!(
                    "Autonomous archetype '{}' needs at least one skill that costs 0 MP",
                    spec.key
                );
            }
        }

        tracing::debug!(archetypes = archetypes.len(), "character archetypes validated");
        Ok(Self {
            catalog,
            archetypes,
        })
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    pub fn archetypes(&self) -> &[ArchetypeSpec] {
        &self.archetypes
    }

    pub fn archetype(&self, key: &str) -> Option<&ArchetypeSpec> {
        self.archetypes.iter().find(|spec| spec.key == key)
    }

    /// Builds a combatant at full HP/MP with the archetype's skills in order.
    ///
    /// `name` is the given name; archetypes with a suffix append it.
    pub fn create(&self, key: &str, name: &str, policy: DecisionPolicy) -> LoadResult<Combatant> {
        let spec = self
            .archetype(key)
            .ok_or_else(|| anyhow::anyhow!("Unknown archetype '{}'", key))?;

        let mut combatant = Combatant::new(spec.full_name(name), spec.hp, spec.mp, spec.stats, policy);
        for skill_name in &spec.skills {
            let skill = self.catalog.get(skill_name).ok_or_else(|| {
                anyhow::anyhow!("Archetype '{}' references unknown skill '{}'", key, skill_name)
            })?;
            combatant.learn_skill(skill.clone());
        }
        Ok(combatant)
    }

    /// Builds a combatant with the archetype's own name and policy.
    pub fn spawn(&self, key: &str) -> LoadResult<Combatant> {
        let spec = self
            .archetype(key)
            .ok_or_else(|| anyhow::anyhow!("Unknown archetype '{}'", key))?;
        self.create(key, &spec.display_name, spec.policy)
    }

    /// Archetype keys in file order for `role`.
    pub fn keys_with_role(&self, role: ArchetypeRole) -> Vec<&str> {
        self.archetypes
            .iter()
            .filter(|spec| spec.role == role)
            .map(|spec| spec.key.as_str())
            .collect()
    }

    /// Recruitable adventurer archetypes.
    pub fn travelers(&self) -> Vec<&str> {
        self.keys_with_role(ArchetypeRole::Traveler)
    }

    /// Regular encounter archetypes.
    pub fn enemies(&self) -> Vec<&str> {
        self.keys_with_role(ArchetypeRole::Enemy)
    }

    pub fn mimics(&self) -> Vec<&str> {
        self.keys_with_role(ArchetypeRole::Mimic)
    }

    /// First player archetype, if any.
    pub fn player(&self) -> Option<&str> {
        self.keys_with_role(ArchetypeRole::Player).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::{ArchetypeLoader, SkillLoader};

    const SKILLS: &str = r#"[
        (name: "Tackle", description: "Physical attack, 1 foe", cost: 0,
         category: Physical, targeting: SingleEnemy,
         formula: (power: 2, die: 6, dice: 1)),
        (name: "Thunder I", description: "Magical attack, 1 foe", cost: 5,
         category: Magical, targeting: SingleEnemy,
         formula: (power: 6, die: 6, dice: 1)),
    ]"#;

    fn archetype(key: &str, skills: &str) -> String {
        archetype_with_hp(key, 10, skills)
    }

    fn archetype_with_hp(key: &str, hp: u32, skills: &str) -> String {
        format!(
            r#"(key: "{key}", display_name: "{key}", role: Enemy, policy: Autonomous,
               hp: {hp}, mp: 5, stats: (attack: 1, magic: 1, defense: 1, resistance: 1),
               skills: [{skills}])"#
        )
    }

    fn factory(archetypes: &[String]) -> LoadResult<CharacterFactory> {
        let catalog = SkillLoader::parse(SKILLS)?;
        let specs = ArchetypeLoader::parse(&format!("[{}]", archetypes.join(",")))?;
        CharacterFactory::new(catalog, specs)
    }

    #[test]
    fn unknown_skill_is_rejected() {
        let err = factory(&[archetype("bat", r#""Tackle", "Screech""#)]).unwrap_err();
        assert!(err.to_string().contains("Screech"));
    }

    #[test]
    fn autonomous_archetype_needs_a_free_skill() {
        let err = factory(&[archetype("imp", r#""Thunder I""#)]).unwrap_err();
        assert!(err.to_string().contains("imp"));
    }

    #[test]
    fn archetypes_without_hp_are_rejected() {
        let err = factory(&[archetype_with_hp("husk", 0, r#""Tackle""#)]).unwrap_err();
        assert!(err.to_string().contains("husk"));
        assert!(factory(&[archetype_with_hp("husk", 1, r#""Tackle""#)]).is_ok());
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let slime = archetype("slime", r#""Tackle""#);
        assert!(factory(&[slime.clone(), slime]).is_err());
    }

    #[test]
    fn created_combatants_share_catalog_skills() {
        let factory = factory(&[
            archetype("slime", r#""Tackle""#),
            archetype("wisp", r#""Tackle", "Thunder I""#),
        ])
        .unwrap();

        let slime = factory.spawn("slime").unwrap();
        let wisp = factory
            .create("wisp", "Will", DecisionPolicy::Interactive)
            .unwrap();
        assert!(std::sync::Arc::ptr_eq(&slime.skills()[0], &wisp.skills()[0]));
        assert_eq!(wisp.name(), "Will");
        assert_eq!(wisp.policy(), DecisionPolicy::Interactive);
        assert_eq!(factory.enemies(), ["slime", "wisp"]);
        assert!(factory.create("dragon", "Smaug", DecisionPolicy::Autonomous).is_err());
    }
}
