//! The content-store bundle handed to the loader

use crate::{
    GameObjectStore, IdStore, MapStore, QuestStore, SpellStore, TaxiPathStore,
    WaypointActionStore,
};

/// Every content domain script validation and the cross-passes consult
///
/// Built once at startup by the bulk content loaders and passed by shared
/// reference into the script loader; nothing here is global.
#[derive(Debug, Default)]
pub struct ContentStores {
    pub creatures: IdStore,
    pub gameobjects: GameObjectStore,
    pub items: IdStore,
    pub quests: QuestStore,
    pub spells: SpellStore,
    pub emotes: IdStore,
    pub anim_kits: IdStore,
    pub locks: IdStore,
    pub broadcast_texts: IdStore,
    pub maps: MapStore,
    pub taxi_paths: TaxiPathStore,
    pub waypoint_actions: WaypointActionStore,
}

impl ContentStores {
    /// Create an empty bundle
    pub fn new() -> Self {
        Self::default()
    }
}
