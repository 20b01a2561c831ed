//! Maps and coordinate validity

use std::collections::HashSet;
use std::f32::consts::TAU;

/// Half-extent of the square playable area of a map
const MAP_HALF_SIZE: f32 = 17_066.666;

/// Height band accepted for a destination
const MAX_HEIGHT: f32 = 100_000.0;

/// Store of known map ids plus the coordinate validity predicate
#[derive(Debug, Clone, Default)]
pub struct MapStore {
    maps: HashSet<u32>,
}

impl MapStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids(ids: impl IntoIterator<Item = u32>) -> Self {
        Self {
            maps: ids.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, map_id: u32) {
        self.maps.insert(map_id);
    }

    pub fn contains(&self, map_id: u32) -> bool {
        self.maps.contains(&map_id)
    }

    /// Whether (x, y, z, o) is a usable position on the map
    ///
    /// Requires a known map, finite coordinates inside the playable extent
    /// and an orientation in [0, 2π].
    pub fn is_valid_position(&self, map_id: u32, x: f32, y: f32, z: f32, o: f32) -> bool {
        self.contains(map_id)
            && x.is_finite()
            && y.is_finite()
            && z.is_finite()
            && o.is_finite()
            && x.abs() <= MAP_HALF_SIZE
            && y.abs() <= MAP_HALF_SIZE
            && z.abs() <= MAX_HEIGHT
            && (0.0..=TAU).contains(&o)
    }
}
