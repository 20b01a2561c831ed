//! Spell data consumed by validation and the spell/event cross-passes

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Spell difficulty variants
///
/// Script rows carry no difficulty column; lookups from the loader resolve
/// with [`Difficulty::None`] and fall back to it when a specific difficulty
/// has no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    None,
    Normal,
    Heroic,
    Mythic,
}

/// Effect kinds script validation distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpellEffectKind {
    /// Runs a spell script; one of the two scriptable kinds
    ScriptEffect,
    /// Placeholder effect handled by script; the other scriptable kind
    Dummy,
    /// Fires a game event; its `misc_value` is the event id
    SendEvent,
    Other,
}

/// One effect slot of a spell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpellEffect {
    pub kind: SpellEffectKind,
    /// Effect-specific scalar; the event id for `SendEvent`
    pub misc_value: u32,
}

/// One spell's effect list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpellInfo {
    pub effects: Vec<SpellEffect>,
}

impl SpellInfo {
    pub fn with_effects(effects: Vec<SpellEffect>) -> Self {
        Self { effects }
    }
}

/// Store of spells keyed by (id, difficulty)
#[derive(Debug, Clone, Default)]
pub struct SpellStore {
    spells: IndexMap<(u32, Difficulty), SpellInfo>,
}

impl SpellStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a spell under a difficulty
    pub fn insert(&mut self, id: u32, difficulty: Difficulty, info: SpellInfo) {
        self.spells.insert((id, difficulty), info);
    }

    /// Look up a spell, falling back to the difficulty-less entry
    pub fn get(&self, id: u32, difficulty: Difficulty) -> Option<&SpellInfo> {
        self.spells
            .get(&(id, difficulty))
            .or_else(|| self.spells.get(&(id, Difficulty::None)))
    }

    /// Whether the spell exists at the difficulty (or difficulty-less)
    pub fn contains(&self, id: u32, difficulty: Difficulty) -> bool {
        self.get(id, difficulty).is_some()
    }

    /// The effect in the given slot, if any
    pub fn effect(&self, id: u32, difficulty: Difficulty, index: u8) -> Option<&SpellEffect> {
        self.get(id, difficulty)
            .and_then(|info| info.effects.get(usize::from(index)))
    }

    /// Iterate every registered effect, in insertion order
    pub fn iter_effects(&self) -> impl Iterator<Item = (u32, Difficulty, &SpellEffect)> {
        self.spells
            .iter()
            .flat_map(|(&(id, diff), info)| info.effects.iter().map(move |e| (id, diff, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_fallback() {
        let mut store = SpellStore::new();
        store.insert(
            42,
            Difficulty::None,
            SpellInfo::with_effects(vec![SpellEffect {
                kind: SpellEffectKind::ScriptEffect,
                misc_value: 0,
            }]),
        );
        assert!(store.contains(42, Difficulty::Heroic));
        assert!(!store.contains(43, Difficulty::None));
    }

    #[test]
    fn test_effect_slot_lookup() {
        let mut store = SpellStore::new();
        store.insert(
            42,
            Difficulty::None,
            SpellInfo::with_effects(vec![
                SpellEffect {
                    kind: SpellEffectKind::Other,
                    misc_value: 0,
                },
                SpellEffect {
                    kind: SpellEffectKind::SendEvent,
                    misc_value: 900,
                },
            ]),
        );
        let effect = store.effect(42, Difficulty::None, 1).unwrap();
        assert_eq!(effect.kind, SpellEffectKind::SendEvent);
        assert!(store.effect(42, Difficulty::None, 2).is_none());
    }
}
