use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::dex::{IdentityId, Species};
use crate::error::EngineError;
use crate::moves::{Move, MoveCatalog, MoveClass, MoveId};
use crate::types::{Type, TYPE_COUNT};
use crate::Dice;

/// Every creature is fought at this level.
pub const LEVEL: u32 = 50;
pub const MOVESET_SIZE: usize = 4;

const STAB: f64 = 1.5;
const VARIANCE_MIN: u32 = 85;
const VARIANCE_MAX: u32 = 100;

/// Upper bound accepted for any base stat in loaded data.
pub const MAX_BASE_STAT: u32 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub sp_attack: u32,
    pub defense: u32,
    pub sp_defense: u32,
    pub speed: u32,
}

impl BaseStats {
    fn as_array(&self) -> [(&'static str, u32); 6] {
        [
            ("hp", self.hp),
            ("attack", self.attack),
            ("sp_attack", self.sp_attack),
            ("defense", self.defense),
            ("sp_defense", self.sp_defense),
            ("speed", self.speed),
        ]
    }

    /// Name and value of the first stat outside `1..=MAX_BASE_STAT`.
    pub fn out_of_range(&self) -> Option<(&'static str, u32)> {
        self.as_array()
            .into_iter()
            .find(|&(_, v)| v == 0 || v > MAX_BASE_STAT)
    }
}

/// Stats at [`LEVEL`], derived once from [`BaseStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub max_hp: u32,
    pub attack: u32,
    pub sp_attack: u32,
    pub defense: u32,
    pub sp_defense: u32,
    pub speed: u32,
}

impl Stats {
    pub fn derive(base: &BaseStats) -> Self {
        let level = u64::from(LEVEL);
        let clamp = |v: u64| u32::try_from(v).unwrap_or(u32::MAX);
        let other = |b: u32| clamp(2 * u64::from(b) * level / 100 + 5);
        let hp = u64::from(base.hp);
        Self {
            max_hp: clamp(2 * hp * level / 100 + hp + level),
            attack: other(base.attack),
            sp_attack: other(base.sp_attack),
            defense: other(base.defense),
            sp_defense: other(base.sp_defense),
            speed: other(base.speed),
        }
    }
}

/// Result of a single attack action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strike {
    Miss,
    Hit { roll: u32, damage: u32 },
}

impl Strike {
    pub fn damage(self) -> u32 {
        match self {
            Strike::Miss => 0,
            Strike::Hit { damage, .. } => damage,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    identity: IdentityId,
    name: String,
    types: (Type, Option<Type>),
    stats: Stats,
    effectiveness: [f64; TYPE_COUNT],
    moveset: [Move; MOVESET_SIZE],
    current_hp: u32,
}

impl Creature {
    pub fn with_moves(species: &Species, moveset: [Move; MOVESET_SIZE]) -> Self {
        let stats = Stats::derive(&species.base);
        Self {
            identity: species.id,
            name: species.name.clone(),
            types: species.types,
            stats,
            effectiveness: species.effectiveness,
            moveset,
            current_hp: stats.max_hp,
        }
    }

    /// Build with four caller-chosen moves. Each must exist in `catalog`, be
    /// learnable by `species`, and appear once. `slot` is only used to label
    /// errors with the roster position being built.
    pub fn with_move_ids(
        species: &Species,
        catalog: &MoveCatalog,
        ids: &[MoveId],
        slot: usize,
    ) -> Result<Self, EngineError> {
        if ids.len() != MOVESET_SIZE {
            return Err(EngineError::malformed(
                slot,
                format!("expected {} moves, got {}", MOVESET_SIZE, ids.len()),
            ));
        }
        let mut moves = Vec::with_capacity(MOVESET_SIZE);
        for (i, &id) in ids.iter().enumerate() {
            if ids[..i].contains(&id) {
                return Err(EngineError::malformed(slot, format!("move {} listed twice", id)));
            }
            let mv = catalog
                .get(id)
                .map_err(|_| EngineError::malformed(slot, format!("unknown move {}", id)))?;
            if !species.can_learn(id) {
                return Err(EngineError::malformed(
                    slot,
                    format!("{} cannot learn move {}", species.name, id),
                ));
            }
            moves.push(mv.clone());
        }
        let moveset = <[Move; MOVESET_SIZE]>::try_from(moves)
            .map_err(|_| EngineError::malformed(slot, "moveset incomplete"))?;
        Ok(Self::with_moves(species, moveset))
    }

    /// Build with four distinct moves sampled uniformly from the learnset.
    pub fn with_random_moves(
        species: &Species,
        catalog: &MoveCatalog,
        dice: &mut Dice,
    ) -> Result<Self, EngineError> {
        let available = species.learnset.len();
        if available < MOVESET_SIZE {
            return Err(EngineError::InsufficientMoves { identity: species.id.0, available });
        }
        let moves = dice
            .sample_distinct(available, MOVESET_SIZE)
            .into_iter()
            .map(|i| catalog.get(species.learnset[i]).cloned())
            .collect::<Result<Vec<_>, _>>()?;
        let moveset = <[Move; MOVESET_SIZE]>::try_from(moves)
            .map_err(|_| EngineError::InsufficientMoves { identity: species.id.0, available })?;
        Ok(Self::with_moves(species, moveset))
    }

    pub fn reset(&mut self) {
        self.current_hp = self.stats.max_hp;
    }

    pub fn identity(&self) -> IdentityId {
        self.identity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn types(&self) -> (Type, Option<Type>) {
        self.types
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn speed(&self) -> u32 {
        self.stats.speed
    }

    pub fn moveset(&self) -> &[Move; MOVESET_SIZE] {
        &self.moveset
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn max_hp(&self) -> u32 {
        self.stats.max_hp
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Multiplier this creature takes from moves of `attacking` type.
    pub fn effectiveness(&self, attacking: Type) -> f64 {
        self.effectiveness[attacking.index()]
    }

    pub fn has_type(&self, ty: Type) -> bool {
        self.types.0 == ty || self.types.1 == Some(ty)
    }

    /// Expected damage of `mv` against `defender`, before accuracy and variance.
    /// Ignores current HP on both sides. `Other` moves deal 0.
    pub fn calculate_damage(&self, mv: &Move, defender: &Creature) -> u32 {
        let ratio = match mv.class {
            MoveClass::Physical => f64::from(self.stats.attack) / f64::from(defender.stats.defense),
            MoveClass::Special => {
                f64::from(self.stats.sp_attack) / f64::from(defender.stats.sp_defense)
            }
            MoveClass::Other => return 0,
        };
        let stab = if self.has_type(mv.move_type) { STAB } else { 1.0 };
        let raw = (22.0 * f64::from(mv.power) * ratio / 50.0 + 2.0)
            * stab
            * defender.effectiveness(mv.move_type);
        raw as u32
    }

    /// Index of the move with the greatest damage against `opponent`; ties go
    /// to the highest index.
    pub fn choose_move_index(&self, opponent: &Creature) -> usize {
        self.moveset
            .iter()
            .enumerate()
            .map(|(i, mv)| (self.calculate_damage(mv, opponent), i))
            .max()
            .map(|(_, i)| i)
            .unwrap_or(0)
    }

    pub fn choose_move(&self, opponent: &Creature) -> &Move {
        &self.moveset[self.choose_move_index(opponent)]
    }

    /// Roll accuracy, then variance on a hit, and subtract the damage from
    /// `defender`. Mutates only `defender`'s current HP.
    pub fn attack_action(&self, defender: &mut Creature, mv: &Move, dice: &mut Dice) -> Strike {
        let chance = dice.percent();
        if chance >= f64::from(mv.accuracy) {
            trace!("[MISS] {} used {} on {}", self.name, mv.name, defender.name);
            return Strike::Miss;
        }
        let roll = dice.roll_between(VARIANCE_MIN, VARIANCE_MAX);
        let base = self.calculate_damage(mv, defender);
        let damage = (f64::from(base) * (f64::from(roll) / 100.0)) as u32;
        let before = defender.current_hp;
        defender.current_hp = defender.current_hp.saturating_sub(damage);
        trace!(
            "[HIT] {} used {} on {}: roll={} damage={} hp {} -> {}",
            self.name,
            mv.name,
            defender.name,
            roll,
            damage,
            before,
            defender.current_hp
        );
        Strike::Hit { roll, damage }
    }
}
