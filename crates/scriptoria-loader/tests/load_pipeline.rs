//! End-to-end loads through ScriptStore: decoding, validation, id packing,
//! table ordering, reload gating and the cross-passes.

use scriptoria_content::{ContentStores, Difficulty, SpellEffect, SpellEffectKind, SpellInfo};
use scriptoria_core::{DirectivePayload, ScriptCategory, ScriptSequenceId};
use scriptoria_loader::{check_spell_scripts, Error, ScriptRow, ScriptStore};
use std::sync::Arc;

fn content() -> ContentStores {
    let mut stores = ContentStores::new();
    stores.broadcast_texts.insert(12345);
    stores.spells.insert(
        42,
        Difficulty::None,
        SpellInfo::with_effects(vec![
            SpellEffect {
                kind: SpellEffectKind::ScriptEffect,
                misc_value: 0,
            },
            SpellEffect {
                kind: SpellEffectKind::Dummy,
                misc_value: 0,
            },
        ]),
    );
    stores
}

fn talk_row(id: u32, delay: u32, text_id: u32) -> ScriptRow {
    ScriptRow {
        id,
        delay,
        command: 0, // Talk
        datalong: 0, // Say
        dataint: text_id,
        ..Default::default()
    }
}

#[test]
fn waypoint_talk_row_lands_in_table() {
    let store = ScriptStore::new();
    let stores = content();

    let summary = store
        .load_category(
            ScriptCategory::Waypoint,
            &[talk_row(5, 1000, 12345)],
            &stores,
        )
        .unwrap();
    assert_eq!(summary.loaded, 1);
    assert_eq!(summary.rejected, 0);

    let table = store.table(ScriptCategory::Waypoint);
    let sequence = table.sequence(ScriptSequenceId(5)).unwrap();
    assert_eq!(sequence.len(), 1);
    assert_eq!(sequence[0].delay, 1000);
    assert_eq!(
        sequence[0].payload,
        DirectivePayload::Talk {
            chat_type: 0,
            creature_entry: 0,
            text_id: 12345,
        }
    );
}

#[test]
fn rejected_row_is_skipped_not_fatal() {
    let store = ScriptStore::new();
    let stores = content();

    // Identical rows except for the dangling broadcast text
    let rows = [talk_row(1, 0, 12345), talk_row(2, 0, 999_999)];
    let summary = store
        .load_category(ScriptCategory::Event, &rows, &stores)
        .unwrap();
    assert_eq!(summary.loaded, 1);
    assert_eq!(summary.rejected, 1);

    let table = store.table(ScriptCategory::Event);
    assert!(table.contains(ScriptSequenceId(1)));
    assert!(!table.contains(ScriptSequenceId(2)));
}

#[test]
fn deprecated_command_rejected_with_valid_fields() {
    let store = ScriptStore::new();
    let stores = content();

    let row = ScriptRow {
        id: 1,
        command: 4, // FlagSet
        datalong: 7,
        datalong2: 1,
        ..Default::default()
    };
    let summary = store
        .load_category(ScriptCategory::Event, &[row], &stores)
        .unwrap();
    assert_eq!(summary.loaded, 0);
    assert_eq!(summary.rejected, 1);
}

#[test]
fn unknown_command_rejected() {
    let store = ScriptStore::new();
    let stores = content();

    let row = ScriptRow {
        id: 1,
        command: 19, // never assigned
        ..Default::default()
    };
    let summary = store
        .load_category(ScriptCategory::Event, &[row], &stores)
        .unwrap();
    assert_eq!(summary.loaded, 0);
    assert_eq!(summary.rejected, 1);
}

#[test]
fn spell_rows_split_by_effect_index() {
    let store = ScriptStore::new();
    let stores = content();

    let mut row0 = talk_row(42, 0, 12345);
    row0.eff_index = Some(0);
    let mut row1 = talk_row(42, 0, 12345);
    row1.eff_index = Some(1);

    let summary = store
        .load_category(ScriptCategory::Spell, &[row0, row1], &stores)
        .unwrap();
    assert_eq!(summary.loaded, 2);

    let table = store.table(ScriptCategory::Spell);
    assert_eq!(table.sequence_count(), 2);
    assert!(table.contains(ScriptSequenceId(42)));
    assert!(table.contains(ScriptSequenceId(42 | (1 << 24))));
    assert!(table.contains(ScriptSequenceId(16_777_258)));

    // Both sequences address scriptable effects, so the cross-pass is clean
    assert!(check_spell_scripts(&table, &stores).is_empty());
}

#[test]
fn spell_row_without_effect_index_rejected() {
    let store = ScriptStore::new();
    let stores = content();

    let summary = store
        .load_category(ScriptCategory::Spell, &[talk_row(42, 0, 12345)], &stores)
        .unwrap();
    assert_eq!(summary.loaded, 0);
    assert_eq!(summary.rejected, 1);
}

#[test]
fn reload_conflict_leaves_snapshot_untouched() {
    let store = ScriptStore::new();
    let stores = content();

    store
        .load_category(ScriptCategory::Waypoint, &[talk_row(5, 0, 12345)], &stores)
        .unwrap();
    let before = store.table(ScriptCategory::Waypoint);

    let guard = store.read_guard(ScriptCategory::Waypoint).unwrap();
    let result = store.load_category(ScriptCategory::Waypoint, &[], &stores);
    assert_eq!(
        result,
        Err(Error::ReloadConflict {
            category: ScriptCategory::Waypoint
        })
    );

    let after = store.table(ScriptCategory::Waypoint);
    assert!(Arc::ptr_eq(&before, &after));

    drop(guard);
    store
        .load_category(ScriptCategory::Waypoint, &[], &stores)
        .unwrap();
    assert!(store.table(ScriptCategory::Waypoint).is_empty());
}

#[test]
fn delays_are_non_decreasing_after_load() {
    let store = ScriptStore::new();
    let stores = content();

    let rows: Vec<ScriptRow> = [500, 0, 1000, 250, 0]
        .into_iter()
        .map(|delay| talk_row(9, delay, 12345))
        .collect();
    store
        .load_category(ScriptCategory::Event, &rows, &stores)
        .unwrap();

    let table = store.table(ScriptCategory::Event);
    let delays: Vec<u32> = table
        .sequence(ScriptSequenceId(9))
        .unwrap()
        .iter()
        .map(|d| d.delay)
        .collect();
    assert!(delays.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(delays, vec![0, 0, 250, 500, 1000]);
}
