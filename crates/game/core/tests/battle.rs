use game_core::{
    AttackCategory, BattleEngine, BattleError, BattleEvent, BattleOutcome, BattleStatus,
    CombatStats, Combatant, DecisionPolicy, FormulaParams, HitOutcome, PcgRoller, ScriptedChooser,
    ScriptedRolls, Side, Skill, SkillRef, TargetingRule,
};

// ================================================================
// Fixtures
// ================================================================

fn skill(
    name: &str,
    cost: u32,
    category: AttackCategory,
    targeting: TargetingRule,
    power: i32,
) -> SkillRef {
    Skill::new(
        name,
        "",
        cost,
        category,
        targeting,
        FormulaParams::new(power, 6, 1),
    )
    .into_ref()
}

fn swing() -> SkillRef {
    skill(
        "Swing",
        0,
        AttackCategory::Physical,
        TargetingRule::SingleEnemy,
        2,
    )
}

fn heal_one() -> SkillRef {
    skill("Heal I", 5, AttackCategory::Heal, TargetingRule::SingleAlly, 4)
}

fn fire_all() -> SkillRef {
    skill(
        "Al-Fire I",
        8,
        AttackCategory::Magical,
        TargetingRule::AllEnemies,
        2,
    )
}

fn tackle() -> SkillRef {
    skill(
        "Tackle",
        0,
        AttackCategory::Physical,
        TargetingRule::SingleEnemy,
        2,
    )
}

fn hero(name: &str) -> Combatant {
    Combatant::new(
        name,
        30,
        20,
        CombatStats::new(6, 5, 5, 4),
        DecisionPolicy::Interactive,
    )
    .with_skill(swing())
    .with_skill(fire_all())
    .with_skill(heal_one())
}

fn enemy(name: &str, hp: u32) -> Combatant {
    Combatant::new(
        name,
        hp,
        0,
        CombatStats::new(3, 1, 5, 4),
        DecisionPolicy::Autonomous,
    )
    .with_skill(tackle())
}

fn effects(events: &[BattleEvent]) -> Vec<(String, String, u32, HitOutcome)> {
    events
        .iter()
        .filter_map(|event| match event {
            BattleEvent::EffectApplied {
                actor,
                target,
                magnitude,
                outcome,
                ..
            } => Some((actor.name.clone(), target.name.clone(), *magnitude, *outcome)),
            _ => None,
        })
        .collect()
}

fn turn_order(events: &[BattleEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match event {
            BattleEvent::TurnStarted { actor } => Some(actor.name.clone()),
            _ => None,
        })
        .collect()
}

/// Plays one round where Ayla swings at a sturdy dummy.
///
/// Once the script runs out every face reads 1, so the dummy's reply is
/// always a miss and never disturbs the numbers under test.
fn swing_round(rolls: &[u32]) -> (BattleEngine, Vec<BattleEvent>) {
    let mut engine = BattleEngine::new(vec![hero("Ayla")], vec![enemy("Dummy", 40)])
        .expect("both rosters are populated");
    let mut rolls = ScriptedRolls::new(rolls.iter().copied());
    let mut chooser = ScriptedChooser::new([0, 0]);
    let mut events: Vec<BattleEvent> = Vec::new();
    engine
        .play_round(&mut rolls, &mut chooser, &mut events)
        .expect("scripted picks are in range");
    (engine, events)
}

// ================================================================
// Skill resolution through the engine
// ================================================================

#[test]
fn physical_hit_deals_formula_damage() {
    let (engine, events) = swing_round(&[10, 4]);

    let first = &effects(&events)[0];
    assert_eq!(first.0, "Ayla");
    assert_eq!(first.2, 7);
    assert_eq!(first.3, HitOutcome::Hit);
    assert_eq!(engine.enemies()[0].hp().current(), 33);
}

#[test]
fn natural_one_misses_and_leaves_target_untouched() {
    let (engine, events) = swing_round(&[1, 6]);

    let first = &effects(&events)[0];
    assert_eq!((first.2, first.3), (0, HitOutcome::Miss));
    assert_eq!(engine.enemies()[0].hp().current(), 40);
}

#[test]
fn natural_twenty_doubles_damage() {
    let (engine, events) = swing_round(&[20, 4]);

    let first = &effects(&events)[0];
    assert_eq!((first.2, first.3), (14, HitOutcome::Crit));
    assert_eq!(engine.enemies()[0].hp().current(), 26);
}

#[test]
fn heal_restores_without_to_hit_roll() {
    let healer = hero("Ayla");
    let wounded = hero("Sam").with_hp(10);
    let mut engine = BattleEngine::new(vec![healer, wounded], vec![enemy("Dummy", 40)]).unwrap();

    // Heal I on Sam; Sam then passes once the script runs out.
    let mut chooser = ScriptedChooser::new([2, 1]);
    let mut rolls = ScriptedRolls::new([3]);
    let mut events: Vec<BattleEvent> = Vec::new();
    engine
        .play_round(&mut rolls, &mut chooser, &mut events)
        .unwrap();

    let heal = &effects(&events)[0];
    assert_eq!(heal.1, "Sam");
    assert_eq!((heal.2, heal.3), (12, HitOutcome::Hit));
    assert_eq!(engine.heroes()[1].hp().current(), 22);
    assert_eq!(engine.heroes()[0].mp().current(), 15);
    assert!(
        events
            .iter()
            .any(|e| matches!(e, BattleEvent::Passed { actor } if actor.name == "Sam"))
    );
}

// ================================================================
// Battle lifecycle
// ================================================================

#[test]
fn group_skill_wipe_ends_in_victory_with_full_hero_roster() {
    let heroes = vec![hero("Ayla"), hero("Sam")];
    let enemies = vec![enemy("Slime", 1), enemy("Slime", 1)];
    let engine = BattleEngine::new(heroes, enemies).unwrap();

    // Al-Fire I, confirm all. Each target gets its own to-hit and formula dice.
    let mut chooser = ScriptedChooser::new([1, 0]);
    let mut rolls = ScriptedRolls::new([10, 3, 10, 3]);
    let mut events: Vec<BattleEvent> = Vec::new();
    let report = engine.run(&mut rolls, &mut chooser, &mut events).unwrap();

    assert_eq!(report.outcome, BattleOutcome::Victory);
    assert!(report.is_victory());
    assert_eq!(report.rounds, 1);
    let names: Vec<_> = report.survivors.iter().map(|c| c.name()).collect();
    assert_eq!(names, ["Ayla", "Sam"]);
    assert_eq!(report.survivors[0].mp().current(), 12);

    assert_eq!(effects(&events).len(), 2);
    assert_eq!(turn_order(&events), ["Ayla"]);
    assert!(matches!(
        events.last(),
        Some(BattleEvent::BattleConcluded {
            outcome: BattleOutcome::Victory,
            ..
        })
    ));
    // Battle start plus Ayla's turn.
    assert_eq!(chooser.acknowledgements(), 2);
}

#[test]
fn defeated_combatant_never_acts_again() {
    let heroes = vec![hero("Ayla")];
    let enemies = vec![enemy("Goblin", 1), enemy("Orc", 40)];
    let mut engine = BattleEngine::new(heroes, enemies).unwrap();

    let mut chooser = ScriptedChooser::new([0, 0]);
    let mut rolls = ScriptedRolls::new([10, 3]);
    let mut events: Vec<BattleEvent> = Vec::new();
    engine
        .play_round(&mut rolls, &mut chooser, &mut events)
        .unwrap();

    assert_eq!(turn_order(&events), ["Ayla", "Orc"]);
    assert_eq!(engine.enemies().len(), 1);
    assert_eq!(engine.status(), BattleStatus::InProgress);
    assert!(events.iter().any(|e| matches!(
        e,
        BattleEvent::CombatantDefeated { combatant } if combatant.name == "Goblin"
            && combatant.side == Side::Enemies
    )));
}

#[test]
fn losing_the_last_hero_is_a_defeat() {
    let heroes = vec![hero("Ayla").with_hp(1)];
    let mut rolls = ScriptedRolls::new([1, 1, 10, 3]);
    // Ayla passes; the slime picks Tackle and Ayla.
    let mut chooser = ScriptedChooser::default();
    let mut events: Vec<BattleEvent> = Vec::new();
    let report = BattleEngine::new(heroes, vec![enemy("Slime", 15)])
        .unwrap()
        .run(&mut rolls, &mut chooser, &mut events)
        .unwrap();

    assert_eq!(report.outcome, BattleOutcome::Defeat);
    assert!(report.survivors.is_empty());
}

#[test]
fn empty_roster_is_rejected_before_start() {
    let err = BattleEngine::new(vec![hero("Ayla")], Vec::new()).unwrap_err();
    assert_eq!(
        err,
        BattleError::EmptyRoster {
            side: Side::Enemies
        }
    );
}

#[test]
fn out_of_range_selection_surfaces_as_error() {
    let mut engine = BattleEngine::new(vec![hero("Ayla")], vec![enemy("Slime", 15)]).unwrap();
    let mut chooser = ScriptedChooser::new([9]);
    let mut events: Vec<BattleEvent> = Vec::new();
    let result = engine.play_round(&mut ScriptedRolls::default(), &mut chooser, &mut events);
    assert_eq!(
        result,
        Err(BattleError::InvalidSelection {
            index: 9,
            options: 4
        })
    );
}

// ================================================================
// Seeded battles
// ================================================================

fn autonomous_party() -> Vec<Combatant> {
    vec![
        Combatant::new(
            "Ayla",
            30,
            20,
            CombatStats::new(6, 5, 5, 4),
            DecisionPolicy::Autonomous,
        )
        .with_skill(swing())
        .with_skill(fire_all())
        .with_skill(heal_one()),
    ]
}

fn horde() -> Vec<Combatant> {
    vec![enemy("Slime", 15), enemy("Goblin", 25), enemy("Orc", 40)]
}

#[test]
fn seeded_battles_terminate_within_bounds() {
    for seed in 0..32 {
        let mut rolls = PcgRoller::seed_from_u64(seed);
        let mut chooser = ScriptedChooser::default();
        let mut events: Vec<BattleEvent> = Vec::new();
        let report = BattleEngine::new(autonomous_party(), horde())
            .unwrap()
            .run(&mut rolls, &mut chooser, &mut events)
            .unwrap();

        assert!(report.rounds < 500, "seed {seed} ran {} rounds", report.rounds);
        for event in &events {
            if let BattleEvent::EffectApplied { target, .. } = event {
                assert!(target.hp.current() <= target.hp.maximum());
                assert!(target.mp.current() <= target.mp.maximum());
            }
        }
        for survivor in &report.survivors {
            assert!(survivor.hp().current() > 0);
        }
    }
}

#[test]
fn same_seed_replays_identically() {
    let replay = |seed| {
        let mut events: Vec<BattleEvent> = Vec::new();
        BattleEngine::new(autonomous_party(), horde())
            .unwrap()
            .run(
                &mut PcgRoller::seed_from_u64(seed),
                &mut ScriptedChooser::default(),
                &mut events,
            )
            .unwrap();
        events
    };
    assert_eq!(replay(7), replay(7));
}
