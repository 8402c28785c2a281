//! Dice rolling for battle resolution.
//!
//! Every random decision in a battle (to-hit rolls, formula dice, autonomous
//! skill and target picks, room selection) is drawn through [`RollProvider`].
//! Implementations must be deterministic for a given seed so that a whole run
//! can be replayed from its seed alone.

use std::collections::VecDeque;

/// Source of uniform dice rolls.
///
/// Only [`roll_die`](RollProvider::roll_die) is required; the remaining
/// methods are expressed in terms of it so that a scripted source controls
/// every draw the engine makes.
pub trait RollProvider {
    /// Roll a single die with `sides` faces (1..=sides inclusive).
    ///
    /// Returns 0 when `sides` is 0.
    fn roll_die(&mut self, sides: u32) -> u32;

    /// Roll `count` dice with `sides` faces and return the sum.
    fn roll(&mut self, sides: u32, count: u32) -> u32 {
        (0..count).map(|_| self.roll_die(sides)).sum()
    }

    /// Pick a uniform index in `0..len`.
    ///
    /// Returns 0 for an empty range; callers check emptiness first.
    fn choose_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let face = self.roll_die(len as u32) as usize;
        face.saturating_sub(1).min(len - 1)
    }

    /// Pick an index proportionally to `weights`.
    ///
    /// Zero-weight entries are never picked. Returns 0 when every weight is 0.
    fn roll_weighted(&mut self, weights: &[u32]) -> usize {
        let total: u32 = weights.iter().sum();
        if total == 0 {
            return 0;
        }
        let mut face = self.roll_die(total);
        for (index, &weight) in weights.iter().enumerate() {
            if face <= weight {
                return index;
            }
            face -= weight;
        }
        weights.len() - 1
    }
}

impl<R: RollProvider + ?Sized> RollProvider for &mut R {
    fn roll_die(&mut self, sides: u32) -> u32 {
        (**self).roll_die(sides)
    }
}

/// Seeded PCG roller (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// Same seed, same sequence.
#[derive(Clone, Debug)]
pub struct PcgRoller {
    state: u64,
}

impl PcgRoller {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a roller from a seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        let mut roller = Self { state: 0 };
        roller.step();
        roller.state = roller.state.wrapping_add(seed);
        roller.step();
        roller
    }

    #[inline]
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
    }

    /// Next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.step();
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RollProvider for PcgRoller {
    fn roll_die(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        // Rejection sampling keeps faces uniform for sides that don't divide 2^32.
        let zone = u32::MAX - (u32::MAX % sides);
        loop {
            let value = self.next_u32();
            if value < zone {
                return (value % sides) + 1;
            }
        }
    }
}

/// Scripted roll source that replays a fixed sequence of faces.
///
/// Faces are clamped into `1..=sides` of the die being rolled. Once the
/// script runs out every further roll is a 1.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRolls {
    faces: VecDeque<u32>,
    consumed: usize,
}

impl ScriptedRolls {
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Appends more faces to the end of the script.
    pub fn extend(&mut self, faces: impl IntoIterator<Item = u32>) {
        self.faces.extend(faces);
    }

    /// Number of faces not yet drawn.
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }

    /// Number of dice rolled so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RollProvider for ScriptedRolls {
    fn roll_die(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        self.consumed += 1;
        self.faces.pop_front().unwrap_or(1).clamp(1, sides)
    }
}
