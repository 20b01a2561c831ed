//! Waypoint action ids, the reference set for the waypoint cross-pass

use std::collections::BTreeSet;

/// The set of waypoint action ids referenced by movement paths
///
/// Sourced independently of the waypoint script table; the cross-pass
/// reports the symmetric difference between the two.
#[derive(Debug, Clone, Default)]
pub struct WaypointActionStore {
    ids: BTreeSet<u32>,
}

impl WaypointActionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids(ids: impl IntoIterator<Item = u32>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, id: u32) {
        self.ids.insert(id);
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Iterate action ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.ids.iter().copied()
    }
}
