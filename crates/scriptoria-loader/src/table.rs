//! The loaded directive table for one category

use indexmap::IndexMap;
use scriptoria_core::{ScriptDirective, ScriptSequenceId};

/// Delay-ordered directive sequences keyed by sequence id
///
/// Sequences keep non-decreasing `delay` order; directives with equal delay
/// stay in insertion order. A table is built in full by one load and read
/// as an immutable snapshot afterwards.
#[derive(Debug, Clone, Default)]
pub struct ScriptTable {
    sequences: IndexMap<ScriptSequenceId, Vec<ScriptDirective>>,
}

impl ScriptTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a directive, keeping its sequence delay-ordered
    ///
    /// Stable on delay ties: the new directive lands after every existing
    /// directive with the same delay.
    pub fn insert(&mut self, id: ScriptSequenceId, directive: ScriptDirective) {
        let sequence = self.sequences.entry(id).or_default();
        let pos = sequence.partition_point(|d| d.delay <= directive.delay);
        sequence.insert(pos, directive);
    }

    /// The directives of one sequence, in delay order
    pub fn sequence(&self, id: ScriptSequenceId) -> Option<&[ScriptDirective]> {
        self.sequences.get(&id).map(Vec::as_slice)
    }

    /// Whether the table holds the sequence id
    pub fn contains(&self, id: ScriptSequenceId) -> bool {
        self.sequences.contains_key(&id)
    }

    /// Number of sequences
    pub fn sequence_count(&self) -> usize {
        self.sequences.len()
    }

    /// Total number of stored directives
    pub fn directive_count(&self) -> usize {
        self.sequences.values().map(Vec::len).sum()
    }

    /// Whether the table holds no sequences
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Iterate sequences in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (ScriptSequenceId, &[ScriptDirective])> {
        self.sequences.iter().map(|(id, seq)| (*id, seq.as_slice()))
    }

    /// Iterate stored sequence ids
    pub fn sequence_ids(&self) -> impl Iterator<Item = ScriptSequenceId> + '_ {
        self.sequences.keys().copied()
    }
}
