//! Post-load consistency passes
//!
//! Each category gets one pass over its finished table. Passes are
//! read-only and informational: every finding is logged and returned, the
//! table stays as loaded.

use crate::ScriptTable;
use scriptoria_content::{ContentStores, Difficulty, SpellEffectKind};
use scriptoria_core::{ScriptCategory, ScriptSequenceId, SequenceIdCodec};
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::warn;

/// One informational inconsistency reported by a cross-pass
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrossPassFinding {
    #[error("spell_scripts: spell {spell_id} does not exist")]
    SpellMissing { spell_id: u32, eff_index: u8 },

    #[error("spell_scripts: spell {spell_id} has no effect {eff_index}")]
    SpellEffectMissing { spell_id: u32, eff_index: u8 },

    #[error("spell_scripts: spell {spell_id} effect {eff_index} is not a scriptable effect")]
    SpellEffectNotScriptable { spell_id: u32, eff_index: u8 },

    #[error("event_scripts: event {event_id} is not referenced by any gameobject, spell or taxi node")]
    EventUnreachable { event_id: u32 },

    #[error("waypoint_scripts: script {action_id} has no matching waypoint action")]
    WaypointScriptWithoutAction { action_id: u32 },

    #[error("waypoint_scripts: waypoint action {action_id} has no script")]
    WaypointActionWithoutScript { action_id: u32 },
}

fn report(findings: &mut Vec<CrossPassFinding>, finding: CrossPassFinding) {
    warn!(target: "scripts", "{finding}");
    findings.push(finding);
}

/// Spell pass: every stored id must unpack to an existing spell whose
/// addressed effect slot is one of the two scriptable effect kinds.
pub fn check_spell_scripts(
    table: &ScriptTable,
    stores: &ContentStores,
) -> Vec<CrossPassFinding> {
    let mut findings = Vec::new();
    for id in table.sequence_ids() {
        let (spell_id, eff_index) = SequenceIdCodec::unpack(ScriptCategory::Spell, id);
        let eff_index = eff_index.unwrap_or(0);
        let Some(info) = stores.spells.get(spell_id, Difficulty::None) else {
            report(&mut findings, CrossPassFinding::SpellMissing { spell_id, eff_index });
            continue;
        };
        match info.effects.get(usize::from(eff_index)) {
            None => report(
                &mut findings,
                CrossPassFinding::SpellEffectMissing { spell_id, eff_index },
            ),
            Some(effect)
                if !matches!(
                    effect.kind,
                    SpellEffectKind::ScriptEffect | SpellEffectKind::Dummy
                ) =>
            {
                report(
                    &mut findings,
                    CrossPassFinding::SpellEffectNotScriptable { spell_id, eff_index },
                );
            }
            Some(_) => {}
        }
    }
    findings
}

/// Event pass: stored event ids must be reachable from at least one of the
/// three referencing domains (gameobject use events, SendEvent spell
/// effects, taxi node arrival/departure events).
pub fn check_event_scripts(
    table: &ScriptTable,
    stores: &ContentStores,
) -> Vec<CrossPassFinding> {
    let mut reachable: BTreeSet<u32> = BTreeSet::new();
    for (_, template) in stores.gameobjects.iter() {
        if template.event_id != 0 {
            reachable.insert(template.event_id);
        }
    }
    for (_, _, effect) in stores.spells.iter_effects() {
        if effect.kind == SpellEffectKind::SendEvent && effect.misc_value != 0 {
            reachable.insert(effect.misc_value);
        }
    }
    for node in stores.taxi_paths.iter() {
        if node.arrival_event_id != 0 {
            reachable.insert(node.arrival_event_id);
        }
        if node.departure_event_id != 0 {
            reachable.insert(node.departure_event_id);
        }
    }

    let mut findings = Vec::new();
    for id in table.sequence_ids() {
        let (event_id, _) = SequenceIdCodec::unpack(ScriptCategory::Event, id);
        if !reachable.contains(&event_id) {
            report(&mut findings, CrossPassFinding::EventUnreachable { event_id });
        }
    }
    findings
}

/// Waypoint pass: stored ids and the waypoint action set must match in both
/// directions.
pub fn check_waypoint_scripts(
    table: &ScriptTable,
    stores: &ContentStores,
) -> Vec<CrossPassFinding> {
    let mut findings = Vec::new();
    for id in table.sequence_ids() {
        let (action_id, _) = SequenceIdCodec::unpack(ScriptCategory::Waypoint, id);
        if !stores.waypoint_actions.contains(action_id) {
            report(
                &mut findings,
                CrossPassFinding::WaypointScriptWithoutAction { action_id },
            );
        }
    }
    for action_id in stores.waypoint_actions.ids() {
        if !table.contains(ScriptSequenceId(action_id)) {
            report(
                &mut findings,
                CrossPassFinding::WaypointActionWithoutScript { action_id },
            );
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptoria_content::{
        Difficulty, GameObjectKind, GameObjectTemplate, SpellEffect, SpellInfo, TaxiPathNode,
        WaypointActionStore,
    };
    use scriptoria_core::{DirectivePayload, ScriptDirective};

    fn directive() -> ScriptDirective {
        ScriptDirective::new(0, DirectivePayload::CloseGossip)
    }

    #[test]
    fn test_spell_pass_flags_non_scriptable_effects() {
        let mut stores = ContentStores::new();
        stores.spells.insert(
            42,
            Difficulty::None,
            SpellInfo::with_effects(vec![
                SpellEffect {
                    kind: SpellEffectKind::ScriptEffect,
                    misc_value: 0,
                },
                SpellEffect {
                    kind: SpellEffectKind::Other,
                    misc_value: 0,
                },
            ]),
        );

        let mut table = ScriptTable::new();
        let ok = SequenceIdCodec::pack(ScriptCategory::Spell, 42, Some(0)).unwrap();
        let bad_kind = SequenceIdCodec::pack(ScriptCategory::Spell, 42, Some(1)).unwrap();
        let no_slot = SequenceIdCodec::pack(ScriptCategory::Spell, 42, Some(5)).unwrap();
        let no_spell = SequenceIdCodec::pack(ScriptCategory::Spell, 43, Some(0)).unwrap();
        for id in [ok, bad_kind, no_slot, no_spell] {
            table.insert(id, directive());
        }

        let findings = check_spell_scripts(&table, &stores);
        assert_eq!(
            findings,
            vec![
                CrossPassFinding::SpellEffectNotScriptable {
                    spell_id: 42,
                    eff_index: 1
                },
                CrossPassFinding::SpellEffectMissing {
                    spell_id: 42,
                    eff_index: 5
                },
                CrossPassFinding::SpellMissing {
                    spell_id: 43,
                    eff_index: 0
                },
            ]
        );
    }

    #[test]
    fn test_event_pass_reachability_sources() {
        let mut stores = ContentStores::new();
        stores.gameobjects.insert(
            1,
            GameObjectTemplate {
                entry: 10,
                kind: GameObjectKind::Goober,
                lock_id: 0,
                event_id: 100,
            },
        );
        stores.spells.insert(
            7,
            Difficulty::None,
            SpellInfo::with_effects(vec![SpellEffect {
                kind: SpellEffectKind::SendEvent,
                misc_value: 200,
            }]),
        );
        stores.taxi_paths.push(TaxiPathNode {
            path_id: 1,
            node_index: 0,
            arrival_event_id: 300,
            departure_event_id: 0,
        });

        let mut table = ScriptTable::new();
        for event_id in [100, 200, 300, 400] {
            table.insert(ScriptSequenceId(event_id), directive());
        }

        let findings = check_event_scripts(&table, &stores);
        assert_eq!(
            findings,
            vec![CrossPassFinding::EventUnreachable { event_id: 400 }]
        );
    }

    #[test]
    fn test_waypoint_pass_reports_both_directions() {
        let mut stores = ContentStores::new();
        stores.waypoint_actions = WaypointActionStore::from_ids([5, 6]);

        let mut table = ScriptTable::new();
        table.insert(ScriptSequenceId(5), directive());
        table.insert(ScriptSequenceId(9), directive());

        let findings = check_waypoint_scripts(&table, &stores);
        assert_eq!(
            findings,
            vec![
                CrossPassFinding::WaypointScriptWithoutAction { action_id: 9 },
                CrossPassFinding::WaypointActionWithoutScript { action_id: 6 },
            ]
        );
    }
}
