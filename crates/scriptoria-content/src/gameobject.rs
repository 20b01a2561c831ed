//! Spawned gameobject templates

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The gameobject types script validation cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameObjectKind {
    Door,
    Button,
    Chest,
    Goober,
    Generic,
}

/// Template data for one spawned gameobject, keyed by its spawn guid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameObjectTemplate {
    /// Template entry id
    pub entry: u32,
    pub kind: GameObjectKind,
    /// Lock id guarding the object; 0 = unlocked
    pub lock_id: u32,
    /// Event id fired on use; 0 = none. Feeds the event reachability set.
    pub event_id: u32,
}

impl GameObjectTemplate {
    pub fn is_door(&self) -> bool {
        self.kind == GameObjectKind::Door
    }
}

/// Store of spawned gameobjects, keyed by spawn guid
#[derive(Debug, Clone, Default)]
pub struct GameObjectStore {
    templates: IndexMap<u32, GameObjectTemplate>,
}

impl GameObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a spawn under its guid
    pub fn insert(&mut self, guid: u32, template: GameObjectTemplate) {
        self.templates.insert(guid, template);
    }

    /// Look up a spawn by guid
    pub fn get(&self, guid: u32) -> Option<&GameObjectTemplate> {
        self.templates.get(&guid)
    }

    /// Whether the guid is known
    pub fn contains(&self, guid: u32) -> bool {
        self.templates.contains_key(&guid)
    }

    /// Iterate all registered templates in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &GameObjectTemplate)> {
        self.templates.iter().map(|(guid, t)| (*guid, t))
    }
}
