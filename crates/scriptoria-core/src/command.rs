//! Command kind enumeration
//!
//! The numeric discriminants are a compatibility surface with the backing
//! tables: the `command` column stores exactly these values. Gaps in the
//! numbering (19, 23..=29) are values that were never assigned.

use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every command a script directive can carry
///
/// Three kinds (`FieldSet`, `FlagSet`, `FlagRemove`) mutated raw object
/// fields in place and are permanently retired: rows carrying them are
/// rejected regardless of payload content and they have no payload mapping.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TryFromPrimitive,
)]
#[repr(u32)]
pub enum CommandKind {
    Talk = 0,
    Emote = 1,
    /// Deprecated raw field write
    FieldSet = 2,
    MoveTo = 3,
    /// Deprecated raw flag set
    FlagSet = 4,
    /// Deprecated raw flag remove
    FlagRemove = 5,
    TeleportTo = 6,
    QuestExplored = 7,
    KillCredit = 8,
    RespawnGameObject = 9,
    TempSummonCreature = 10,
    OpenDoor = 11,
    CloseDoor = 12,
    ActivateObject = 13,
    RemoveAura = 14,
    CastSpell = 15,
    PlaySound = 16,
    CreateItem = 17,
    DespawnSelf = 18,
    LoadPath = 20,
    CallScript = 21,
    Kill = 22,
    Orientation = 30,
    Equip = 31,
    Model = 32,
    CloseGossip = 33,
    PlayMovie = 34,
    PlayAnimKit = 35,
}

impl CommandKind {
    /// True for the three retired kinds that are always rejected
    pub fn is_deprecated(&self) -> bool {
        matches!(
            self,
            CommandKind::FieldSet | CommandKind::FlagSet | CommandKind::FlagRemove
        )
    }

    /// Raw command value as stored in the `command` column
    pub fn raw(&self) -> u32 {
        *self as u32
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.raw())
    }
}
