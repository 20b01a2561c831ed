//! Script categories and their backing tables

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three independent script categories
///
/// A category determines which backing table a row comes from, how its
/// sequence id is packed, and which cross-pass validator runs after load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScriptCategory {
    /// Scripts attached to a spell effect; sequence ids pack (spell id, effect index)
    Spell,
    /// Scripts fired by game events; sequence ids are the raw event id
    Event,
    /// Scripts attached to waypoint actions; sequence ids are the raw action id
    Waypoint,
}

impl ScriptCategory {
    /// Name of the backing table, used in diagnostics
    pub fn table_name(&self) -> &'static str {
        match self {
            ScriptCategory::Spell => "spell_scripts",
            ScriptCategory::Event => "event_scripts",
            ScriptCategory::Waypoint => "waypoint_scripts",
        }
    }
}

impl fmt::Display for ScriptCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_names() {
        assert_eq!(ScriptCategory::Spell.table_name(), "spell_scripts");
        assert_eq!(ScriptCategory::Event.table_name(), "event_scripts");
        assert_eq!(ScriptCategory::Waypoint.table_name(), "waypoint_scripts");
    }
}
