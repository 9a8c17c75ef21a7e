use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub mod api;
pub mod battle;
pub mod content;
pub mod creature;
pub mod dex;
pub mod error;
pub mod moves;
pub mod roster;
pub mod roster_file;
pub mod turn;
pub mod types;

pub use battle::{Battle, BattleState, Side, TURN_CAP};
pub use creature::{BaseStats, Creature, Stats, Strike, LEVEL, MAX_BASE_STAT, MOVESET_SIZE};
pub use dex::{Dex, DexData, IdentityId, Species};
pub use error::EngineError;
pub use moves::{Move, MoveCatalog, MoveClass, MoveId};
pub use roster::{Roster, RosterEntry, ROSTER_SIZE};
pub use types::{Type, TYPE_COUNT};

enum Source {
    Seeded(ChaCha8Rng),
    Scripted { values: Vec<u32>, cursor: usize },
}

/// The single randomness handle threaded through sampling, turn order,
/// accuracy, damage variance and faint replacement.
pub struct Dice {
    source: Source,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self { source: Source::Seeded(ChaCha8Rng::seed_from_u64(seed)) }
    }

    /// Replays `values` in order, wrapping around when exhausted.
    pub fn from_scripted(values: Vec<u32>) -> Self {
        Self { source: Source::Scripted { values, cursor: 0 } }
    }

    fn next_scripted(values: &[u32], cursor: &mut usize) -> u32 {
        if values.is_empty() {
            return 0;
        }
        let v = values[*cursor % values.len()];
        *cursor += 1;
        v
    }

    /// Uniform index in `0..n`. `n` must be non-zero.
    pub fn below(&mut self, n: usize) -> usize {
        match &mut self.source {
            Source::Seeded(rng) => rng.gen_range(0..n),
            Source::Scripted { values, cursor } => Self::next_scripted(values, cursor) as usize % n,
        }
    }

    /// Uniform value in `[0, 100)`.
    pub fn percent(&mut self) -> f64 {
        match &mut self.source {
            Source::Seeded(rng) => rng.r#gen::<f64>() * 100.0,
            Source::Scripted { values, cursor } => f64::from(Self::next_scripted(values, cursor)),
        }
    }

    /// Uniform integer in `lo..=hi`.
    pub fn roll_between(&mut self, lo: u32, hi: u32) -> u32 {
        match &mut self.source {
            Source::Seeded(rng) => rng.gen_range(lo..=hi),
            Source::Scripted { values, cursor } => Self::next_scripted(values, cursor).clamp(lo, hi),
        }
    }

    pub fn coin(&mut self) -> bool {
        self.below(2) == 0
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.below(items.len())])
        }
    }

    /// `k` distinct indices from `0..n` via partial Fisher-Yates, one draw each.
    pub fn sample_distinct(&mut self, n: usize, k: usize) -> Vec<usize> {
        let k = k.min(n);
        let mut pool: Vec<usize> = (0..n).collect();
        for i in 0..k {
            let j = i + self.below(n - i);
            pool.swap(i, j);
        }
        pool.truncate(k);
        pool
    }
}
