/// Battle rule constants and tunable parameters.
///
/// The defaults are the d20 rules: a natural 20 doubles the magnitude and a
/// natural 1 misses. Healing never rolls to hit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Faces on the to-hit die.
    pub to_hit_die: u32,
    /// To-hit face that scores a critical.
    pub critical_face: u32,
    /// To-hit face that misses.
    pub fumble_face: u32,
    /// Multiplier applied to a critical magnitude.
    pub critical_multiplier: u32,
}

impl BattleConfig {
    pub const DEFAULT_TO_HIT_DIE: u32 = 20;
    pub const DEFAULT_CRITICAL_FACE: u32 = 20;
    pub const DEFAULT_FUMBLE_FACE: u32 = 1;
    pub const DEFAULT_CRITICAL_MULTIPLIER: u32 = 2;

    pub const fn new() -> Self {
        Self {
            to_hit_die: Self::DEFAULT_TO_HIT_DIE,
            critical_face: Self::DEFAULT_CRITICAL_FACE,
            fumble_face: Self::DEFAULT_FUMBLE_FACE,
            critical_multiplier: Self::DEFAULT_CRITICAL_MULTIPLIER,
        }
    }

    pub const fn with_critical_multiplier(mut self, critical_multiplier: u32) -> Self {
        self.critical_multiplier = critical_multiplier;
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
