//! The raw slot layout shared by every command kind

use serde::{Deserialize, Serialize};

/// The physical storage every directive row provides: three unsigned 32-bit
/// slots and four single-precision floats
///
/// Column names follow the backing tables (`datalong`, `datalong2`,
/// `dataint`, `x`, `y`, `z`, `o`). Each [`CommandKind`](crate::CommandKind)
/// defines a fixed mapping from its payload fields onto these slots; the
/// mapping is documented per variant on
/// [`DirectivePayload`](crate::DirectivePayload).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSlots {
    pub datalong: u32,
    pub datalong2: u32,
    pub dataint: u32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub o: f32,
}

impl RawSlots {
    /// Slots with only the first data value set
    pub fn with_datalong(datalong: u32) -> Self {
        Self {
            datalong,
            ..Default::default()
        }
    }
}
