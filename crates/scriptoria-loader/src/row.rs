//! Source rows from the backing tables

use scriptoria_core::RawSlots;
use serde::{Deserialize, Serialize};

/// One row of a category's backing table
///
/// Column-for-column mirror of `spell_scripts` / `event_scripts` /
/// `waypoint_scripts`; `eff_index` is populated only for the Spell table.
/// How rows are fetched is the backing source's business; the loader only
/// consumes slices of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptRow {
    pub id: u32,
    pub delay: u32,
    pub command: u32,
    pub datalong: u32,
    pub datalong2: u32,
    pub dataint: u32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub o: f32,
    #[serde(default)]
    pub eff_index: Option<u8>,
}

impl ScriptRow {
    /// The raw slot view of this row
    pub fn slots(&self) -> RawSlots {
        RawSlots {
            datalong: self.datalong,
            datalong2: self.datalong2,
            dataint: self.dataint,
            x: self.x,
            y: self.y,
            z: self.z,
            o: self.o,
        }
    }
}
