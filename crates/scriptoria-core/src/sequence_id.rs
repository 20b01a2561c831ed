//! Composite sequence identifiers
//!
//! Event and Waypoint sequences are keyed by the raw row id. Spell sequences
//! key on (spell id, effect index) packed into one 32-bit value: the low 24
//! bits hold the spell id, the high 8 bits the effect index. Packing and
//! unpacking are a lossless bijection within those ranges; values outside
//! them are a loader error for the row, never a silent wraparound.

use crate::{Error, Result, ScriptCategory};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of low bits holding the spell id in a packed Spell sequence id
pub const SPELL_ID_BITS: u32 = 24;

/// Mask over the spell-id bits
pub const SPELL_ID_MASK: u32 = (1 << SPELL_ID_BITS) - 1;

/// Key of one directive sequence within one category's table
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ScriptSequenceId(pub u32);

impl ScriptSequenceId {
    /// Raw packed value
    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ScriptSequenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pack/unpack rules per category
pub struct SequenceIdCodec;

impl SequenceIdCodec {
    /// Compute the sequence id for a source row
    ///
    /// Non-Spell categories use the row id unchanged and must not carry an
    /// effect index. Spell rows require `raw_id < 2^24` and an effect index
    /// in `0..=255`.
    pub fn pack(
        category: ScriptCategory,
        raw_id: u32,
        eff_index: Option<u8>,
    ) -> Result<ScriptSequenceId> {
        match category {
            ScriptCategory::Spell => {
                let idx = eff_index.ok_or(Error::MissingEffectIndex)?;
                if raw_id > SPELL_ID_MASK {
                    return Err(Error::SpellIdOutOfRange { id: raw_id });
                }
                Ok(ScriptSequenceId(raw_id | (u32::from(idx) << SPELL_ID_BITS)))
            }
            ScriptCategory::Event | ScriptCategory::Waypoint => match eff_index {
                Some(_) => Err(Error::UnexpectedEffectIndex { category }),
                None => Ok(ScriptSequenceId(raw_id)),
            },
        }
    }

    /// Recover (row id, effect index) from a sequence id
    ///
    /// Exact inverse of [`pack`](Self::pack): the effect index is `Some`
    /// only for the Spell category.
    pub fn unpack(category: ScriptCategory, id: ScriptSequenceId) -> (u32, Option<u8>) {
        match category {
            ScriptCategory::Spell => (
                id.0 & SPELL_ID_MASK,
                Some((id.0 >> SPELL_ID_BITS) as u8),
            ),
            ScriptCategory::Event | ScriptCategory::Waypoint => (id.0, None),
        }
    }
}
