//! Error types for scriptoria-loader

use scriptoria_core::ScriptCategory;
use thiserror::Error;

/// Loader error type
///
/// Data-quality problems in individual rows are not errors: they are
/// [`RejectReason`](crate::RejectReason) values, logged and counted while
/// the load continues. Only a refused reload surfaces here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Reload of {category} refused: consumer is active or a load is running")]
    ReloadConflict { category: ScriptCategory },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
