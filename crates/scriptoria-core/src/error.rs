//! Error types for scriptoria-core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Spell id {id} does not fit in 24 bits")]
    SpellIdOutOfRange { id: u32 },

    #[error("Effect index given for {category} row, which carries none")]
    UnexpectedEffectIndex { category: crate::ScriptCategory },

    #[error("Spell row is missing its effect index")]
    MissingEffectIndex,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
