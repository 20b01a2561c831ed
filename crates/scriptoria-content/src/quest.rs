//! Quest templates and the special-flag repair surface

use bitflags::bitflags;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

bitflags! {
    /// Server-side quest special flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct QuestSpecialFlags: u32 {
        const REPEATABLE = 0x001;
        /// Quest completes through an exploration trigger or scripted event
        const EXPLORATION_OR_EVENT = 0x002;
        const AUTO_ACCEPT = 0x004;
    }
}

/// One quest template
///
/// `special_flags` is atomic because the QuestExplored validation rule is
/// allowed to set `EXPLORATION_OR_EVENT` on a quest that lacks it while
/// holding only a shared reference to the stores.
#[derive(Debug)]
pub struct QuestTemplate {
    pub id: u32,
    special_flags: AtomicU32,
}

impl QuestTemplate {
    pub fn new(id: u32, flags: QuestSpecialFlags) -> Self {
        Self {
            id,
            special_flags: AtomicU32::new(flags.bits()),
        }
    }

    /// Current special flags
    pub fn special_flags(&self) -> QuestSpecialFlags {
        QuestSpecialFlags::from_bits_truncate(self.special_flags.load(Ordering::Relaxed))
    }

    /// Whether the given flags are all set
    pub fn has_special_flag(&self, flag: QuestSpecialFlags) -> bool {
        self.special_flags().contains(flag)
    }

    /// Set the given flags through a shared reference
    pub fn set_special_flag(&self, flag: QuestSpecialFlags) {
        self.special_flags.fetch_or(flag.bits(), Ordering::Relaxed);
    }
}

/// Store of quest templates, keyed by quest id
#[derive(Debug, Default)]
pub struct QuestStore {
    quests: HashMap<u32, QuestTemplate>,
}

impl QuestStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, quest: QuestTemplate) {
        self.quests.insert(quest.id, quest);
    }

    pub fn get(&self, id: u32) -> Option<&QuestTemplate> {
        self.quests.get(&id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.quests.contains_key(&id)
    }
}
