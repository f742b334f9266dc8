// Canonical in-memory record store.

use crate::player::PlayerRecord;
use std::collections::BTreeSet;

/// Owns the full, unfiltered list of parsed records. Everything downstream
/// (pipeline, aggregator, exporter) works on read-only views of this list.
/// Records are never individually added, removed, or edited; the whole list
/// is replaced wholesale on every `load`.
#[derive(Debug, Clone, Default)]
pub struct PlayerStore {
    players: Vec<PlayerRecord>,
}

impl PlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire record list. The old list is fully discarded even
    /// when the new load is empty.
    pub fn load(&mut self, records: Vec<PlayerRecord>) {
        self.players = records;
    }

    /// Read-only view of the canonical list, in load order.
    pub fn all(&self) -> &[PlayerRecord] {
        &self.players
    }

    /// Distinct team codes present in the store, lexicographically ascending.
    /// Recomputed on every call; never cached across a `load`.
    pub fn teams(&self) -> Vec<String> {
        self.players
            .iter()
            .map(|p| p.team.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
