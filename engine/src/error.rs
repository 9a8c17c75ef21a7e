use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("identity {identity} can learn only {available} moves; a moveset needs 4")]
    InsufficientMoves { identity: u32, available: usize },

    #[error("malformed roster entry {slot}: {reason}")]
    MalformedRoster { slot: usize, reason: String },

    #[error("unknown type '{0}'")]
    UnknownType(String),

    #[error("unknown move id {0}")]
    UnknownMove(u32),

    #[error("unknown identity id {0}")]
    UnknownIdentity(u32),

    #[error("identity pool holds {available} entries; a roster needs {needed}")]
    InsufficientIdentities { available: usize, needed: usize },

    #[error("duplicate {kind} id {id}")]
    DuplicateRecord { kind: &'static str, id: u32 },

    #[error("a roster holds {expected} creatures, got {actual}")]
    RosterSize { expected: usize, actual: usize },

    #[error("invalid {kind} record {id}: {reason}")]
    InvalidRecord { kind: &'static str, id: u32, reason: String },

    #[error("roster file line {line}: {reason}")]
    MalformedRosterFile { line: usize, reason: String },
}

impl EngineError {
    pub(crate) fn malformed(slot: usize, reason: impl Into<String>) -> Self {
        EngineError::MalformedRoster { slot, reason: reason.into() }
    }
}
