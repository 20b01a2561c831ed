//! The stored directive

use crate::{CommandKind, DirectivePayload};
use serde::{Deserialize, Serialize};

/// One scripted instruction within a sequence
///
/// Owned exclusively by its table entry and never mutated after
/// construction; `delay` is the offset from sequence start that orders
/// directives within a sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptDirective {
    pub delay: u32,
    pub kind: CommandKind,
    pub payload: DirectivePayload,
}

impl ScriptDirective {
    /// Build a directive from a validated payload
    pub fn new(delay: u32, payload: DirectivePayload) -> Self {
        Self {
            delay,
            kind: payload.kind(),
            payload,
        }
    }
}
