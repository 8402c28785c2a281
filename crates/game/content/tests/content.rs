use std::fs;

use game_content::{ContentBundle, ContentFactory, embedded};
use game_core::{AttackCategory, BattleConfig, DecisionPolicy, TargetingRule};

#[test]
fn embedded_content_is_valid() {
    let bundle = ContentBundle::embedded().expect("embedded content parses and validates");

    assert_eq!(bundle.config, BattleConfig::default());
    assert_eq!(bundle.characters.player(), Some("hero"));
    assert_eq!(
        bundle.characters.travelers(),
        ["warrior", "mage", "assassin", "healer", "ranger"]
    );
    assert_eq!(
        bundle.characters.enemies(),
        ["slime", "goblin", "orc", "wizard"]
    );
    assert_eq!(bundle.characters.mimics(), ["mimic"]);
    assert_eq!(bundle.rooms.names.len(), 11);
    assert_eq!(bundle.rooms.fountains.len(), 4);
    assert_eq!(bundle.rooms.mimics.len(), 2);
}

#[test]
fn hero_matches_its_archetype() {
    let bundle = ContentBundle::embedded().unwrap();
    let hero = bundle
        .characters
        .create("hero", "Ayla", DecisionPolicy::Interactive)
        .unwrap();

    assert_eq!(hero.name(), "Ayla");
    assert_eq!(hero.hp().maximum(), 30);
    assert_eq!(hero.mp().maximum(), 20);
    assert_eq!(hero.stats().attack, 6);
    assert_eq!(hero.stats().magic, 5);
    assert_eq!(hero.stats().defense, 5);
    assert_eq!(hero.stats().resistance, 4);

    let skills: Vec<_> = hero.skills().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(skills, ["Swing", "Fire I", "Heal I"]);
    let heal = &hero.skills()[2];
    assert_eq!(heal.category, AttackCategory::Heal);
    assert_eq!(heal.targeting, TargetingRule::SingleAlly);
    assert_eq!(heal.cost, 5);
}

#[test]
fn shared_skills_are_one_instance() {
    let bundle = ContentBundle::embedded().unwrap();
    let warrior = bundle.characters.spawn("warrior").unwrap();
    let orc = bundle.characters.spawn("orc").unwrap();

    let slash = |c: &game_core::Combatant| {
        c.skills()
            .iter()
            .find(|s| s.name == "Cross slash")
            .cloned()
            .unwrap()
    };
    assert!(std::sync::Arc::ptr_eq(&slash(&warrior), &slash(&orc)));
}

#[test]
fn mimic_takes_the_disguise_name() {
    let bundle = ContentBundle::embedded().unwrap();
    let mimic = bundle
        .characters
        .create("mimic", "chalice", DecisionPolicy::Autonomous)
        .unwrap();
    assert_eq!(mimic.name(), "chalice mimic");
    assert_eq!(mimic.hp().maximum(), 30);
}

#[test]
fn every_autonomous_archetype_can_always_act() {
    let bundle = ContentBundle::embedded().unwrap();
    for spec in bundle.characters.archetypes() {
        if spec.policy != DecisionPolicy::Autonomous {
            continue;
        }
        let combatant = bundle.characters.spawn(&spec.key).unwrap().with_mp(0);
        assert!(
            combatant.affordable_skills().next().is_some(),
            "{} has nothing to do at 0 MP",
            spec.key
        );
    }
}

#[test]
fn factory_loads_a_data_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("skills.ron"), embedded::SKILLS_RON).unwrap();
    fs::write(dir.path().join("archetypes.ron"), embedded::ARCHETYPES_RON).unwrap();
    fs::write(dir.path().join("rooms.ron"), embedded::ROOMS_RON).unwrap();
    fs::write(dir.path().join("config.toml"), "critical_multiplier = 3\n").unwrap();

    let bundle = ContentFactory::new(dir.path()).load_bundle().unwrap();
    assert_eq!(bundle.config.critical_multiplier, 3);
    assert!(bundle.characters.archetype("ranger").is_some());
}

#[test]
fn missing_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ContentFactory::new(dir.path()).load_config().unwrap();
    assert_eq!(config, BattleConfig::default());
}

#[test]
fn missing_catalog_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ContentFactory::new(dir.path())
        .load_characters()
        .unwrap_err();
    assert!(err.to_string().contains("skills.ron"));
}
