//! Combatant runtime state.
//!
//! A [`Combatant`] owns its current/max HP and MP, immutable combat stats,
//! its learned skills and its decision policy. Which side it fights on is
//! decided by the roster that holds it, not by the combatant.

use crate::combat::AttackCategory;
use crate::policy::DecisionPolicy;
use crate::skill::SkillRef;

/// Battle-scoped identifier assigned by the engine at battle start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantId(pub u32);

impl core::fmt::Display for CombatantId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One side of a battle.
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
pub enum Side {
    Heroes,
    Enemies,
}

impl Side {
    pub const fn opposing(self) -> Self {
        match self {
            Self::Heroes => Self::Enemies,
            Self::Enemies => Self::Heroes,
        }
    }
}

/// Bounded resource pool. `current` always stays within `0..=maximum`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    current: u32,
    maximum: u32,
}

impl ResourceMeter {
    /// Creates a meter, clamping `current` to `maximum`.
    pub const fn new(current: u32, maximum: u32) -> Self {
        let current = if current > maximum { maximum } else { current };
        Self { current, maximum }
    }

    /// Creates a full meter.
    pub const fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    pub const fn current(&self) -> u32 {
        self.current
    }

    pub const fn maximum(&self) -> u32 {
        self.maximum
    }

    pub const fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Adds `delta` (negative to drain) and clamps. Returns the applied change.
    pub fn change(&mut self, delta: i64) -> i64 {
        let before = i64::from(self.current);
        let after = (before + delta).clamp(0, i64::from(self.maximum));
        self.current = after as u32;
        after - before
    }

    pub fn refill(&mut self) {
        self.current = self.maximum;
    }

    /// Fill fraction in `0.0..=1.0`; an empty-capacity meter reads 0.
    pub fn ratio(&self) -> f32 {
        if self.maximum == 0 {
            0.0
        } else {
            self.current as f32 / self.maximum as f32
        }
    }
}

/// Offensive and defensive stats; fixed for the lifetime of a battle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    pub attack: u32,
    pub magic: u32,
    pub defense: u32,
    pub resistance: u32,
}

impl CombatStats {
    pub const fn new(attack: u32, magic: u32, defense: u32, resistance: u32) -> Self {
        Self {
            attack,
            magic,
            defense,
            resistance,
        }
    }
}

/// A participant in battle.
#[derive(Clone, Debug)]
pub struct Combatant {
    id: CombatantId,
    name: String,
    hp: ResourceMeter,
    mp: ResourceMeter,
    stats: CombatStats,
    skills: Vec<SkillRef>,
    policy: DecisionPolicy,
}

impl Combatant {
    /// Creates a combatant at full HP and MP with no skills.
    pub fn new(
        name: impl Into<String>,
        max_hp: u32,
        max_mp: u32,
        stats: CombatStats,
        policy: DecisionPolicy,
    ) -> Self {
        Self {
            id: CombatantId::default(),
            name: name.into(),
            hp: ResourceMeter::full(max_hp),
            mp: ResourceMeter::full(max_mp),
            stats,
            skills: Vec::new(),
            policy,
        }
    }

    /// Appends a skill; insertion order is the selection order.
    pub fn learn_skill(&mut self, skill: SkillRef) {
        self.skills.push(skill);
    }

    pub fn with_skill(mut self, skill: SkillRef) -> Self {
        self.learn_skill(skill);
        self
    }

    /// Overrides current HP (clamped), e.g. to enter a battle wounded.
    pub fn with_hp(mut self, current: u32) -> Self {
        self.hp = ResourceMeter::new(current, self.hp.maximum());
        self
    }

    /// Overrides current MP (clamped).
    pub fn with_mp(mut self, current: u32) -> Self {
        self.mp = ResourceMeter::new(current, self.mp.maximum());
        self
    }

    pub fn id(&self) -> CombatantId {
        self.id
    }

    pub(crate) fn assign_id(&mut self, id: CombatantId) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hp(&self) -> ResourceMeter {
        self.hp
    }

    pub fn mp(&self) -> ResourceMeter {
        self.mp
    }

    pub fn stats(&self) -> &CombatStats {
        &self.stats
    }

    pub fn skills(&self) -> &[SkillRef] {
        &self.skills
    }

    pub fn policy(&self) -> DecisionPolicy {
        self.policy
    }

    pub fn health_ratio(&self) -> f32 {
        self.hp.ratio()
    }

    pub fn mana_ratio(&self) -> f32 {
        self.mp.ratio()
    }

    pub fn is_defeated(&self) -> bool {
        self.hp.is_empty()
    }

    pub fn can_afford(&self, cost: u32) -> bool {
        self.mp.current() >= cost
    }

    /// Skills whose cost fits current MP, in learned order.
    pub fn affordable_skills(&self) -> impl Iterator<Item = &SkillRef> + '_ {
        self.skills.iter().filter(|skill| self.can_afford(skill.cost))
    }

    /// Adds `delta` HP, clamped to `0..=max`. Returns the applied change.
    pub fn change_hp(&mut self, delta: i64) -> i64 {
        self.hp.change(delta)
    }

    /// Adds `delta` MP, clamped to `0..=max`. Returns the applied change.
    pub fn change_mp(&mut self, delta: i64) -> i64 {
        self.mp.change(delta)
    }

    /// Lands a resolved magnitude: heals raise HP, everything else lowers it.
    pub fn receive(&mut self, magnitude: u32, category: AttackCategory) -> i64 {
        let amount = i64::from(magnitude);
        if category.is_heal() {
            self.change_hp(amount)
        } else {
            self.change_hp(-amount)
        }
    }

    /// Restores HP and MP to their maximums.
    pub fn restore_all(&mut self) {
        self.hp.refill();
        self.mp.refill();
    }
}
