//! Scriptoria Content - Store objects for the content domains that script
//! validation consults
//!
//! These replace what used to be process-wide static registries: each store
//! is an explicit object built at startup by the bulk loaders (out of scope
//! here) and passed by reference into the script loader and its cross-pass
//! validators. Everything is read-only during normal operation; the one
//! sanctioned mutation is the quest exploration-flag repair, which goes
//! through an atomic so it works behind a shared reference.

mod gameobject;
mod ids;
mod map;
mod quest;
mod spell;
mod stores;
mod taxi;
mod waypoint;

pub use gameobject::{GameObjectKind, GameObjectStore, GameObjectTemplate};
pub use ids::IdStore;
pub use map::MapStore;
pub use quest::{QuestSpecialFlags, QuestStore, QuestTemplate};
pub use spell::{Difficulty, SpellEffect, SpellEffectKind, SpellInfo, SpellStore};
pub use stores::ContentStores;
pub use taxi::{TaxiPathNode, TaxiPathStore};
pub use waypoint::WaypointActionStore;
