//! Plain existence-only id stores

use std::collections::HashSet;

/// Store for content domains where validation only asks "does this id
/// exist" (creatures, items, emotes, animation kits, locks, broadcast
/// texts)
#[derive(Debug, Clone, Default)]
pub struct IdStore {
    ids: HashSet<u32>,
}

impl IdStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a list of known ids
    pub fn from_ids(ids: impl IntoIterator<Item = u32>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Register an id
    pub fn insert(&mut self, id: u32) {
        self.ids.insert(id);
    }

    /// Whether the id is known
    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Number of known ids
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the store holds no ids
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let store = IdStore::from_ids([1, 2, 3]);
        assert!(store.contains(2));
        assert!(!store.contains(4));
        assert_eq!(store.len(), 3);
    }
}
