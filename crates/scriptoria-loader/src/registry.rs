//! Interned script-implementation names
//!
//! Many content tables name the script implementation that should handle an
//! entity. The registry interns the union of those names into dense handles
//! so the rest of the system moves integers around. Handle 0 is reserved
//! for the empty name, meaning "no script".

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use tracing::info;

/// Dense id of an interned script name; 0 = no script
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Handle(pub u32);

impl Handle {
    /// The reserved "no script" handle
    pub const NONE: Handle = Handle(0);

    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sorted handle table over distinct script names
///
/// Built once per load cycle and immutable until the next full reload.
/// Lookup behaves as binary search over the sorted table; handles are the
/// positions in that table.
#[derive(Debug, Clone)]
pub struct ScriptNameRegistry {
    /// names[0] is always ""; names[1..] sorted lexicographically
    names: Vec<String>,
    /// Secondary keying for consumers that key scripts by area trigger
    trigger_scripts: HashMap<u32, Handle>,
}

impl ScriptNameRegistry {
    /// Registry holding only the reserved empty name
    pub fn new() -> Self {
        Self {
            names: vec![String::new()],
            trigger_scripts: HashMap::new(),
        }
    }

    /// Build the registry from the union of independent name sources
    ///
    /// Each source contributes zero or more names; empty names are dropped,
    /// duplicates collapse, the rest sort lexicographically starting at
    /// handle 1.
    pub fn load<S, N>(sources: S) -> Self
    where
        S: IntoIterator<Item = N>,
        N: IntoIterator<Item = String>,
    {
        let mut distinct = BTreeSet::new();
        for source in sources {
            for name in source {
                if !name.is_empty() {
                    distinct.insert(name);
                }
            }
        }
        let mut names = Vec::with_capacity(distinct.len() + 1);
        names.push(String::new());
        names.extend(distinct);
        info!(target: "scripts", "interned {} script names", names.len() - 1);
        Self {
            names,
            trigger_scripts: HashMap::new(),
        }
    }

    /// Handle of a name; empty or unregistered names map to [`Handle::NONE`]
    pub fn id_of(&self, name: &str) -> Handle {
        if name.is_empty() {
            return Handle::NONE;
        }
        match self.names[1..].binary_search_by(|n| n.as_str().cmp(name)) {
            Ok(pos) => Handle(pos as u32 + 1),
            Err(_) => Handle::NONE,
        }
    }

    /// Name behind a handle; out-of-range handles yield ""
    pub fn name_of(&self, handle: Handle) -> &str {
        self.names
            .get(handle.0 as usize)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Number of interned names, excluding the reserved empty name
    pub fn len(&self) -> usize {
        self.names.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Attach a script handle to an area trigger
    pub fn set_trigger_script(&mut self, trigger_id: u32, handle: Handle) {
        self.trigger_scripts.insert(trigger_id, handle);
    }

    /// Script handle for an area trigger; [`Handle::NONE`] when unset
    pub fn trigger_script(&self, trigger_id: u32) -> Handle {
        self.trigger_scripts
            .get(&trigger_id)
            .copied()
            .unwrap_or(Handle::NONE)
    }
}

impl Default for ScriptNameRegistry {
    fn default() -> Self {
        Self::new()
    }
}
