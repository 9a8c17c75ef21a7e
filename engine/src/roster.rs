use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::creature::Creature;
use crate::dex::{Dex, IdentityId};
use crate::error::EngineError;
use crate::moves::MoveId;
use crate::Dice;

pub const ROSTER_SIZE: usize = 6;

/// Caller-specified roster slot: an identity and the move ids it should carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub identity: IdentityId,
    pub moves: Vec<MoveId>,
}

impl RosterEntry {
    pub fn new(identity: u32, moves: [u32; 4]) -> Self {
        Self { identity: IdentityId(identity), moves: moves.into_iter().map(MoveId).collect() }
    }
}

/// Exactly six creatures. Positions only matter for bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    members: Vec<Creature>,
}

impl Roster {
    pub fn from_creatures(members: Vec<Creature>) -> Result<Self, EngineError> {
        if members.len() != ROSTER_SIZE {
            return Err(EngineError::RosterSize { expected: ROSTER_SIZE, actual: members.len() });
        }
        Ok(Self { members })
    }

    /// Six distinct identities drawn uniformly from the pool, each with a
    /// random moveset.
    pub fn random(dex: &Dex, dice: &mut Dice) -> Result<Self, EngineError> {
        if dex.len() < ROSTER_SIZE {
            return Err(EngineError::InsufficientIdentities {
                available: dex.len(),
                needed: ROSTER_SIZE,
            });
        }
        let picks = dice.sample_distinct(dex.len(), ROSTER_SIZE);
        let mut members = Vec::with_capacity(ROSTER_SIZE);
        for index in picks {
            let species = dex
                .species_at(index)
                .ok_or(EngineError::InsufficientIdentities { available: dex.len(), needed: index + 1 })?;
            members.push(Creature::with_random_moves(species, dex.moves(), dice)?);
        }
        debug!(
            "[ROSTER] random: {}",
            members.iter().map(Creature::name).collect::<Vec<_>>().join(", ")
        );
        Ok(Self { members })
    }

    /// Build from explicit entries, preserving order. No partial roster is
    /// returned on failure.
    pub fn explicit(dex: &Dex, entries: &[RosterEntry]) -> Result<Self, EngineError> {
        if entries.len() != ROSTER_SIZE {
            return Err(EngineError::RosterSize { expected: ROSTER_SIZE, actual: entries.len() });
        }
        let members = entries
            .iter()
            .enumerate()
            .map(|(slot, entry)| {
                let species = dex.species(entry.identity)?;
                Creature::with_move_ids(species, dex.moves(), &entry.moves, slot)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { members })
    }

    pub fn entries(&self) -> Vec<RosterEntry> {
        self.members
            .iter()
            .map(|c| RosterEntry {
                identity: c.identity(),
                moves: c.moveset().iter().map(|m| m.id).collect(),
            })
            .collect()
    }

    pub fn reset(&mut self) {
        self.members.iter_mut().for_each(Creature::reset);
    }

    pub fn members(&self) -> &[Creature] {
        &self.members
    }

    pub fn get(&self, index: usize) -> Option<&Creature> {
        self.members.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Creature> {
        self.members.get_mut(index)
    }

    /// Positions of creatures with HP left.
    pub fn alive_indices(&self) -> Vec<usize> {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_fainted())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl std::ops::Index<usize> for Roster {
    type Output = Creature;

    fn index(&self, index: usize) -> &Creature {
        &self.members[index]
    }
}

impl std::ops::IndexMut<usize> for Roster {
    fn index_mut(&mut self, index: usize) -> &mut Creature {
        &mut self.members[index]
    }
}
