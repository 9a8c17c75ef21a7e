use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::types::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveId(pub u32);

impl fmt::Display for MoveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Damage category. `Other` covers status-style moves, which never deal damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveClass {
    Physical,
    Special,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Move {
    pub id: MoveId,
    pub name: String,
    pub move_type: Type,
    pub class: MoveClass,
    pub power: u32,
    /// Hit chance in percent, 0..=100.
    pub accuracy: u32,
}

/// Immutable lookup from move identifier to move record.
#[derive(Debug, Clone, Default)]
pub struct MoveCatalog {
    moves: IndexMap<MoveId, Move>,
}

impl MoveCatalog {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Result<Self, EngineError> {
        let mut map = IndexMap::new();
        for mv in moves {
            let id = mv.id;
            if map.insert(id, mv).is_some() {
                return Err(EngineError::DuplicateRecord { kind: "move", id: id.0 });
            }
        }
        Ok(Self { moves: map })
    }

    pub fn get(&self, id: MoveId) -> Result<&Move, EngineError> {
        self.moves.get(&id).ok_or(EngineError::UnknownMove(id.0))
    }

    pub fn contains(&self, id: MoveId) -> bool {
        self.moves.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.values()
    }
}
