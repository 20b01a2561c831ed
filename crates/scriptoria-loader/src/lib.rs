//! Scriptoria Loader - Builds the script directive tables
//!
//! Load pipeline per category: raw rows are decoded into kind-tagged
//! payloads, validated against the content stores, keyed by their packed
//! sequence id and inserted delay-ordered into that category's table.
//! After a category finishes, its cross-pass validator emits informational
//! findings over the complete table.
//!
//! Per-row data problems are logged and skipped, never raised; the only
//! error the orchestration returns is a refused reload while a consumer is
//! still reading the current snapshot.

mod cross;
mod error;
mod gate;
mod loader;
mod registry;
mod row;
mod table;
mod validate;

pub use cross::{
    check_event_scripts, check_spell_scripts, check_waypoint_scripts, CrossPassFinding,
};
pub use error::{Error, Result};
pub use gate::{GateState, ReadGuard, ReloadGate};
pub use loader::{LoadSummary, ScriptStore};
pub use registry::{Handle, ScriptNameRegistry};
pub use row::ScriptRow;
pub use table::ScriptTable;
pub use validate::{RejectReason, ValidationCtx, Validator};
