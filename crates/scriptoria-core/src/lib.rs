//! Scriptoria Core - Leaf types for the script directive system
//!
//! This crate provides the data model shared by the loader and its consumers:
//! - Script categories and command kinds
//! - The raw slot layout shared by every command (`RawSlots`)
//! - The tagged payload sum type with its slot codec (`DirectivePayload`)
//! - Composite sequence identifiers and their pack/unpack codec
//! - The immutable `ScriptDirective` stored in loaded tables

mod category;
mod command;
mod directive;
mod error;
mod payload;
mod raw;
mod sequence_id;

pub use category::ScriptCategory;
pub use command::CommandKind;
pub use directive::ScriptDirective;
pub use error::{Error, Result};
pub use payload::{ChatType, DirectivePayload, SpellCastTarget};
pub use raw::RawSlots;
pub use sequence_id::{ScriptSequenceId, SequenceIdCodec, SPELL_ID_BITS, SPELL_ID_MASK};
