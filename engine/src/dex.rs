//! Identity pool: species records, their learnsets, and the move catalog they
//! reference. Everything is validated when the [`Dex`] is built so that a bad
//! type name or dangling move reference never surfaces mid-battle.

use std::{collections::BTreeMap, fmt};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::creature::{BaseStats, MAX_BASE_STAT};
use crate::error::EngineError;
use crate::moves::{Move, MoveCatalog, MoveClass, MoveId};
use crate::types::{Type, TYPE_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityId(pub u32);

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MoveRecord {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: String,
    pub class: MoveClass,
    #[serde(default)]
    pub power: u32,
    pub accuracy: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SpeciesRecord {
    pub id: u32,
    pub name: String,
    pub type1: String,
    #[serde(default)]
    pub type2: Option<String>,
    pub base: BaseStats,
    /// Optional defensive row keyed by attacking type name.
    #[serde(default)]
    pub effectiveness: BTreeMap<String, f64>,
    pub learnset: Vec<u32>,
}

/// Raw data bundle as read from YAML or JSON, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct DexData {
    pub species: Vec<SpeciesRecord>,
    pub moves: Vec<MoveRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    pub id: IdentityId,
    pub name: String,
    pub types: (Type, Option<Type>),
    pub base: BaseStats,
    /// Damage multiplier taken from each attacking type, indexed by `Type::index`.
    pub effectiveness: [f64; TYPE_COUNT],
    /// Sorted, deduplicated.
    pub learnset: Vec<MoveId>,
}

impl Species {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        types: (Type, Option<Type>),
        base: BaseStats,
        learnset: impl IntoIterator<Item = MoveId>,
    ) -> Self {
        let mut learnset: Vec<MoveId> = learnset.into_iter().collect();
        learnset.sort_unstable();
        learnset.dedup();
        Self {
            id: IdentityId(id),
            name: name.into(),
            types,
            base,
            effectiveness: Type::defensive_row(types.0, types.1),
            learnset,
        }
    }

    /// Replace chart-derived multipliers for the listed attacking types.
    pub fn with_effectiveness_override(mut self, overrides: &[(Type, f64)]) -> Self {
        for &(ty, m) in overrides {
            self.effectiveness[ty.index()] = m;
        }
        self
    }

    pub fn can_learn(&self, id: MoveId) -> bool {
        self.learnset.binary_search(&id).is_ok()
    }

    fn from_record(rec: SpeciesRecord) -> Result<Self, EngineError> {
        let id = rec.id;
        let invalid = |reason: String| EngineError::InvalidRecord { kind: "species", id, reason };
        if let Some((stat, value)) = rec.base.out_of_range() {
            return Err(invalid(format!("base {} {} outside 1..={}", stat, value, MAX_BASE_STAT)));
        }
        if let Some((name, m)) = rec.effectiveness.iter().find(|(_, m)| !m.is_finite() || **m < 0.0) {
            return Err(invalid(format!("effectiveness {} against {} must be finite and >= 0", m, name)));
        }
        let primary: Type = rec.type1.parse()?;
        let secondary = match rec.type2.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(name) => Some(name.parse::<Type>()?),
        };
        let overrides = rec
            .effectiveness
            .iter()
            .map(|(name, &m)| name.parse::<Type>().map(|t| (t, m)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Species::new(
            rec.id,
            rec.name,
            (primary, secondary),
            rec.base,
            rec.learnset.into_iter().map(MoveId),
        )
        .with_effectiveness_override(&overrides))
    }
}

impl Move {
    fn from_record(rec: MoveRecord) -> Result<Self, EngineError> {
        if rec.accuracy > 100 {
            return Err(EngineError::InvalidRecord {
                kind: "move",
                id: rec.id,
                reason: format!("accuracy {} outside 0..=100", rec.accuracy),
            });
        }
        Ok(Move {
            id: MoveId(rec.id),
            name: rec.name,
            move_type: rec.move_type.parse()?,
            class: rec.class,
            power: rec.power,
            accuracy: rec.accuracy,
        })
    }
}

/// Validated identity pool plus the move catalog its learnsets point into.
#[derive(Debug, Clone)]
pub struct Dex {
    species: IndexMap<IdentityId, Species>,
    moves: MoveCatalog,
}

impl Dex {
    pub fn new(species: impl IntoIterator<Item = Species>, moves: MoveCatalog) -> Result<Self, EngineError> {
        let mut map = IndexMap::new();
        for s in species {
            if let Some(missing) = s.learnset.iter().find(|id| !moves.contains(**id)) {
                return Err(EngineError::UnknownMove(missing.0));
            }
            let id = s.id;
            if map.insert(id, s).is_some() {
                return Err(EngineError::DuplicateRecord { kind: "identity", id: id.0 });
            }
        }
        Ok(Self { species: map, moves })
    }

    pub fn from_data(data: DexData) -> Result<Self, EngineError> {
        let moves = data
            .moves
            .into_iter()
            .map(Move::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        let species = data
            .species
            .into_iter()
            .map(Species::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        Dex::new(species, MoveCatalog::new(moves)?)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let data: DexData = serde_yaml::from_str(text).context("failed to parse dex YAML")?;
        Dex::from_data(data).context("invalid dex data")
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let data: DexData = serde_json::from_str(text).context("failed to parse dex JSON")?;
        Dex::from_data(data).context("invalid dex data")
    }

    pub fn species(&self, id: IdentityId) -> Result<&Species, EngineError> {
        self.species.get(&id).ok_or(EngineError::UnknownIdentity(id.0))
    }

    /// Species by pool position, in load order.
    pub fn species_at(&self, index: usize) -> Option<&Species> {
        self.species.get_index(index).map(|(_, s)| s)
    }

    pub fn identities(&self) -> impl Iterator<Item = IdentityId> + '_ {
        self.species.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn moves(&self) -> &MoveCatalog {
        &self.moves
    }
}
