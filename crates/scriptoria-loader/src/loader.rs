//! Load orchestration
//!
//! [`ScriptStore`] owns one table snapshot and one reload gate per
//! category. A category load decodes, validates and keys every source row,
//! builds a fresh table off to the side and publishes it as the new
//! snapshot in one `Arc` swap, so readers either see the old table or the
//! complete new one and a refused reload provably changes nothing.

use crate::gate::{ReadGuard, ReloadGate};
use crate::validate::{RejectReason, ValidationCtx, Validator};
use crate::{Error, Result, ScriptRow, ScriptTable};
use scriptoria_content::ContentStores;
use scriptoria_core::{
    CommandKind, DirectivePayload, ScriptCategory, ScriptDirective, ScriptSequenceId,
    SequenceIdCodec,
};
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

/// Outcome of one category load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub category: ScriptCategory,
    /// Directives accepted into the table
    pub loaded: usize,
    /// Rows skipped with a logged reason
    pub rejected: usize,
}

#[derive(Debug, Default)]
struct CategorySlot {
    /// Published snapshot; replaced wholesale, never mutated in place
    table: RwLock<Arc<ScriptTable>>,
    gate: ReloadGate,
}

/// The three category tables and their reload gates
#[derive(Debug, Default)]
pub struct ScriptStore {
    slots: [CategorySlot; 3],
    validator: Validator,
}

impl ScriptStore {
    /// Create a store with three empty tables
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, category: ScriptCategory) -> &CategorySlot {
        &self.slots[category as usize]
    }

    /// The current table snapshot for a category
    ///
    /// The returned `Arc` stays valid across reloads; a reload publishes a
    /// new snapshot instead of mutating this one, so holders need no
    /// synchronization against future loads.
    pub fn table(&self, category: ScriptCategory) -> Arc<ScriptTable> {
        self.slot(category)
            .table
            .read()
            .expect("table lock poisoned")
            .clone()
    }

    /// Register as an active consumer of a category's table
    ///
    /// While the guard lives, reloads of the category are refused. `None`
    /// while a load is running.
    pub fn read_guard(&self, category: ScriptCategory) -> Option<ReadGuard<'_>> {
        self.slot(category).gate.read_guard()
    }

    /// Rebuild one category's table from its source rows
    ///
    /// Per-row problems are logged and skipped. The only failure is
    /// [`Error::ReloadConflict`] when the category's consumer is active, in
    /// which case the existing snapshot is left untouched.
    pub fn load_category(
        &self,
        category: ScriptCategory,
        rows: &[ScriptRow],
        stores: &ContentStores,
    ) -> Result<LoadSummary> {
        let slot = self.slot(category);
        slot.gate
            .try_begin()
            .map_err(|_| Error::ReloadConflict { category })?;

        if rows.is_empty() {
            info!(target: "scripts", "{}: source table is empty", category.table_name());
        }

        let mut table = ScriptTable::new();
        let mut loaded = 0usize;
        let mut rejected = 0usize;
        for row in rows {
            match process_row(&self.validator, category, row, stores) {
                Ok((id, directive)) => {
                    debug!(
                        target: "scripts",
                        "{}: row {} accepted as sequence {} at delay {}",
                        category.table_name(),
                        row.id,
                        id,
                        directive.delay
                    );
                    table.insert(id, directive);
                    loaded += 1;
                }
                Err(reason) => {
                    warn!(
                        target: "scripts",
                        "{}: row {} command {} rejected: {}",
                        category.table_name(),
                        row.id,
                        row.command,
                        reason
                    );
                    rejected += 1;
                }
            }
        }

        let sequences = table.sequence_count();
        *slot.table.write().expect("table lock poisoned") = Arc::new(table);
        slot.gate.complete();

        info!(
            target: "scripts",
            "{}: loaded {} directives in {} sequences, {} rows rejected",
            category.table_name(),
            loaded,
            sequences,
            rejected
        );
        Ok(LoadSummary {
            category,
            loaded,
            rejected,
        })
    }
}

fn process_row(
    validator: &Validator,
    category: ScriptCategory,
    row: &ScriptRow,
    stores: &ContentStores,
) -> std::result::Result<(ScriptSequenceId, ScriptDirective), RejectReason> {
    let kind = CommandKind::try_from(row.command).map_err(|_| RejectReason::UnknownCommand {
        command: row.command,
    })?;
    if kind.is_deprecated() {
        return Err(RejectReason::DeprecatedCommand { kind });
    }
    // Total for every non-deprecated kind
    let payload = DirectivePayload::decode(kind, &row.slots())
        .ok_or(RejectReason::DeprecatedCommand { kind })?;

    let ctx = ValidationCtx {
        category,
        row_id: row.id,
        stores,
    };
    validator.validate(&payload, &ctx)?;

    let id = SequenceIdCodec::pack(category, row.id, row.eff_index)?;
    Ok((id, ScriptDirective::new(row.delay, payload)))
}
