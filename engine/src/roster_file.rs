//! Persisted roster rows: `identity,move,move,move,move` per line.
//!
//! All five columns are numeric identifiers on both the write and read side;
//! move names are never written.

use crate::dex::IdentityId;
use crate::error::EngineError;
use crate::moves::MoveId;
use crate::roster::{Roster, RosterEntry};

pub fn format_roster(roster: &Roster) -> String {
    format_entries(&roster.entries())
}

pub fn format_entries(entries: &[RosterEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry.identity.to_string());
        for mv in &entry.moves {
            out.push(',');
            out.push_str(&mv.to_string());
        }
        out.push('\n');
    }
    out
}

/// Parse rows into entries. Move count and learnability are checked later by
/// [`Roster::explicit`].
pub fn parse_roster(text: &str) -> Result<Vec<RosterEntry>, EngineError> {
    let mut entries = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let mut cols = line.split(',').map(str::trim);
        let identity = cols
            .next()
            .ok_or_else(|| bad_line(idx, "missing identity column"))
            .and_then(|c| parse_id(c, idx, "identity"))?;
        let moves = cols
            .map(|c| parse_id(c, idx, "move").map(MoveId))
            .collect::<Result<Vec<_>, _>>()?;
        entries.push(RosterEntry { identity: IdentityId(identity), moves });
    }
    Ok(entries)
}

fn parse_id(col: &str, idx: usize, what: &str) -> Result<u32, EngineError> {
    col.parse::<u32>()
        .map_err(|_| bad_line(idx, format!("{} column '{}' is not an identifier", what, col)))
}

fn bad_line(idx: usize, reason: impl Into<String>) -> EngineError {
    EngineError::MalformedRosterFile { line: idx + 1, reason: reason.into() }
}
