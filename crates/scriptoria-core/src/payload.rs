//! Kind-tagged directive payloads and their slot codec
//!
//! Historically these payloads lived in a C union over the raw slots and a
//! read under the wrong active kind was silently garbage. Here each kind is
//! an explicit variant with named fields; [`DirectivePayload::decode`] and
//! [`DirectivePayload::encode`] are the only places that know the slot
//! layout, and that layout is kept solely as the serialization contract with
//! the backing tables.
//!
//! Decoding is total per kind: any slot content produces *some* payload, and
//! out-of-range values are the validator's problem, not the decoder's. The
//! three deprecated kinds have no mapping at all and decode to `None`.

use crate::{CommandKind, RawSlots};
use serde::{Deserialize, Serialize};

/// Chat message types accepted by `Talk` directives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u32)]
pub enum ChatType {
    Say = 0,
    Yell = 1,
    TextEmote = 2,
    BossEmote = 3,
    Whisper = 4,
}

impl ChatType {
    /// Interpret a raw `datalong` value; `None` outside the closed set
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(ChatType::Say),
            1 => Some(ChatType::Yell),
            2 => Some(ChatType::TextEmote),
            3 => Some(ChatType::BossEmote),
            4 => Some(ChatType::Whisper),
            _ => None,
        }
    }
}

/// Targeting flags accepted by `CastSpell` directives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u32)]
pub enum SpellCastTarget {
    /// Caster targets itself
    SelfCast = 0,
    /// Source casts on the scripted target
    SourceToTarget = 1,
    /// Target casts on the source
    TargetToSource = 2,
    /// Target casts on itself
    TargetToTarget = 3,
    /// Source casts on the nearest creature of the entry in `dataint`
    SourceToNearestEntry = 4,
    /// Source casts on the target, skipping self
    SourceToTargetNotSelf = 5,
}

impl SpellCastTarget {
    /// Interpret a raw `datalong2` value; `None` outside the closed set
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(SpellCastTarget::SelfCast),
            1 => Some(SpellCastTarget::SourceToTarget),
            2 => Some(SpellCastTarget::TargetToSource),
            3 => Some(SpellCastTarget::TargetToTarget),
            4 => Some(SpellCastTarget::SourceToNearestEntry),
            5 => Some(SpellCastTarget::SourceToTargetNotSelf),
            _ => None,
        }
    }
}

/// The payload of one directive, one variant per live command kind
///
/// Each variant documents its slot mapping as `field <- column`. Boolean
/// fields occupy a slot whose documented valid range is {0, 1}.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DirectivePayload {
    /// chat_type <- datalong, creature_entry <- datalong2 (0 = the source
    /// itself speaks), text_id <- dataint
    Talk {
        chat_type: u32,
        creature_entry: u32,
        text_id: u32,
    },
    /// emote_id <- datalong, use_target <- datalong2
    Emote { emote_id: u32, use_target: bool },
    /// travel_time_ms <- datalong, point_id <- datalong2, destination <- x,y,z
    MoveTo {
        travel_time_ms: u32,
        point_id: u32,
        x: f32,
        y: f32,
        z: f32,
    },
    /// map_id <- datalong, player_source <- datalong2, destination <- x,y,z,o
    TeleportTo {
        map_id: u32,
        player_source: bool,
        x: f32,
        y: f32,
        z: f32,
        o: f32,
    },
    /// quest_id <- datalong, max_distance <- datalong2
    QuestExplored { quest_id: u32, max_distance: u32 },
    /// creature_entry <- datalong, group_wide <- datalong2
    KillCredit { creature_entry: u32, group_wide: bool },
    /// go_guid <- datalong, despawn_delay_s <- datalong2
    RespawnGameObject { go_guid: u32, despawn_delay_s: u32 },
    /// creature_entry <- datalong, despawn_delay_ms <- datalong2,
    /// spawn point <- x,y,z,o
    TempSummonCreature {
        creature_entry: u32,
        despawn_delay_ms: u32,
        x: f32,
        y: f32,
        z: f32,
        o: f32,
    },
    /// go_guid <- datalong, reset_delay_s <- datalong2
    OpenDoor { go_guid: u32, reset_delay_s: u32 },
    /// go_guid <- datalong, reset_delay_s <- datalong2
    CloseDoor { go_guid: u32, reset_delay_s: u32 },
    /// go_guid <- datalong
    ActivateObject { go_guid: u32 },
    /// spell_id <- datalong, target_not_source <- datalong2
    RemoveAura {
        spell_id: u32,
        target_not_source: bool,
    },
    /// spell_id <- datalong, target_flag <- datalong2,
    /// creature_entry <- dataint (flag 4 only), search_radius <- x
    CastSpell {
        spell_id: u32,
        target_flag: u32,
        creature_entry: u32,
        search_radius: f32,
    },
    /// sound_id <- datalong, at_target <- datalong2,
    /// flags <- dataint (bit 0 distance-dependent, bit 1 to self only)
    PlaySound {
        sound_id: u32,
        at_target: bool,
        flags: u32,
    },
    /// item_entry <- datalong, amount <- datalong2
    CreateItem { item_entry: u32, amount: u32 },
    /// delay_ms <- datalong
    DespawnSelf { delay_ms: u32 },
    /// path_id <- datalong, repeatable <- datalong2
    LoadPath { path_id: u32, repeatable: bool },
    /// creature_entry <- datalong, script_id <- datalong2,
    /// table_selector <- dataint (1 = spell, 2 = event, 3 = waypoint)
    CallScript {
        creature_entry: u32,
        script_id: u32,
        table_selector: u32,
    },
    /// remove_corpse <- datalong2
    Kill { remove_corpse: bool },
    /// face_target <- datalong, orientation <- o
    Orientation { face_target: bool, o: f32 },
    /// equipment_id <- datalong
    Equip { equipment_id: u32 },
    /// model_id <- datalong
    Model { model_id: u32 },
    /// no slots used
    CloseGossip,
    /// movie_id <- datalong, whole_group <- datalong2
    PlayMovie { movie_id: u32, whole_group: bool },
    /// kit_id <- datalong
    PlayAnimKit { kit_id: u32 },
}

fn flag(slot: u32) -> bool {
    slot != 0
}

impl DirectivePayload {
    /// Interpret the raw slots under the given kind
    ///
    /// Total for every live kind; `None` only for the deprecated kinds,
    /// which have no payload mapping.
    pub fn decode(kind: CommandKind, slots: &RawSlots) -> Option<DirectivePayload> {
        let p = match kind {
            CommandKind::FieldSet | CommandKind::FlagSet | CommandKind::FlagRemove => return None,
            CommandKind::Talk => DirectivePayload::Talk {
                chat_type: slots.datalong,
                creature_entry: slots.datalong2,
                text_id: slots.dataint,
            },
            CommandKind::Emote => DirectivePayload::Emote {
                emote_id: slots.datalong,
                use_target: flag(slots.datalong2),
            },
            CommandKind::MoveTo => DirectivePayload::MoveTo {
                travel_time_ms: slots.datalong,
                point_id: slots.datalong2,
                x: slots.x,
                y: slots.y,
                z: slots.z,
            },
            CommandKind::TeleportTo => DirectivePayload::TeleportTo {
                map_id: slots.datalong,
                player_source: flag(slots.datalong2),
                x: slots.x,
                y: slots.y,
                z: slots.z,
                o: slots.o,
            },
            CommandKind::QuestExplored => DirectivePayload::QuestExplored {
                quest_id: slots.datalong,
                max_distance: slots.datalong2,
            },
            CommandKind::KillCredit => DirectivePayload::KillCredit {
                creature_entry: slots.datalong,
                group_wide: flag(slots.datalong2),
            },
            CommandKind::RespawnGameObject => DirectivePayload::RespawnGameObject {
                go_guid: slots.datalong,
                despawn_delay_s: slots.datalong2,
            },
            CommandKind::TempSummonCreature => DirectivePayload::TempSummonCreature {
                creature_entry: slots.datalong,
                despawn_delay_ms: slots.datalong2,
                x: slots.x,
                y: slots.y,
                z: slots.z,
                o: slots.o,
            },
            CommandKind::OpenDoor => DirectivePayload::OpenDoor {
                go_guid: slots.datalong,
                reset_delay_s: slots.datalong2,
            },
            CommandKind::CloseDoor => DirectivePayload::CloseDoor {
                go_guid: slots.datalong,
                reset_delay_s: slots.datalong2,
            },
            CommandKind::ActivateObject => DirectivePayload::ActivateObject {
                go_guid: slots.datalong,
            },
            CommandKind::RemoveAura => DirectivePayload::RemoveAura {
                spell_id: slots.datalong,
                target_not_source: flag(slots.datalong2),
            },
            CommandKind::CastSpell => DirectivePayload::CastSpell {
                spell_id: slots.datalong,
                target_flag: slots.datalong2,
                creature_entry: slots.dataint,
                search_radius: slots.x,
            },
            CommandKind::PlaySound => DirectivePayload::PlaySound {
                sound_id: slots.datalong,
                at_target: flag(slots.datalong2),
                flags: slots.dataint,
            },
            CommandKind::CreateItem => DirectivePayload::CreateItem {
                item_entry: slots.datalong,
                amount: slots.datalong2,
            },
            CommandKind::DespawnSelf => DirectivePayload::DespawnSelf {
                delay_ms: slots.datalong,
            },
            CommandKind::LoadPath => DirectivePayload::LoadPath {
                path_id: slots.datalong,
                repeatable: flag(slots.datalong2),
            },
            CommandKind::CallScript => DirectivePayload::CallScript {
                creature_entry: slots.datalong,
                script_id: slots.datalong2,
                table_selector: slots.dataint,
            },
            CommandKind::Kill => DirectivePayload::Kill {
                remove_corpse: flag(slots.datalong2),
            },
            CommandKind::Orientation => DirectivePayload::Orientation {
                face_target: flag(slots.datalong),
                o: slots.o,
            },
            CommandKind::Equip => DirectivePayload::Equip {
                equipment_id: slots.datalong,
            },
            CommandKind::Model => DirectivePayload::Model {
                model_id: slots.datalong,
            },
            CommandKind::CloseGossip => DirectivePayload::CloseGossip,
            CommandKind::PlayMovie => DirectivePayload::PlayMovie {
                movie_id: slots.datalong,
                whole_group: flag(slots.datalong2),
            },
            CommandKind::PlayAnimKit => DirectivePayload::PlayAnimKit {
                kit_id: slots.datalong,
            },
        };
        Some(p)
    }

    /// Map the payload back onto the raw slot layout
    ///
    /// Exact inverse of [`decode`](Self::decode) for values within each
    /// field's documented range.
    pub fn encode(&self) -> (CommandKind, RawSlots) {
        let mut s = RawSlots::default();
        let kind = match *self {
            DirectivePayload::Talk {
                chat_type,
                creature_entry,
                text_id,
            } => {
                s.datalong = chat_type;
                s.datalong2 = creature_entry;
                s.dataint = text_id;
                CommandKind::Talk
            }
            DirectivePayload::Emote {
                emote_id,
                use_target,
            } => {
                s.datalong = emote_id;
                s.datalong2 = use_target as u32;
                CommandKind::Emote
            }
            DirectivePayload::MoveTo {
                travel_time_ms,
                point_id,
                x,
                y,
                z,
            } => {
                s.datalong = travel_time_ms;
                s.datalong2 = point_id;
                s.x = x;
                s.y = y;
                s.z = z;
                CommandKind::MoveTo
            }
            DirectivePayload::TeleportTo {
                map_id,
                player_source,
                x,
                y,
                z,
                o,
            } => {
                s.datalong = map_id;
                s.datalong2 = player_source as u32;
                s.x = x;
                s.y = y;
                s.z = z;
                s.o = o;
                CommandKind::TeleportTo
            }
            DirectivePayload::QuestExplored {
                quest_id,
                max_distance,
            } => {
                s.datalong = quest_id;
                s.datalong2 = max_distance;
                CommandKind::QuestExplored
            }
            DirectivePayload::KillCredit {
                creature_entry,
                group_wide,
            } => {
                s.datalong = creature_entry;
                s.datalong2 = group_wide as u32;
                CommandKind::KillCredit
            }
            DirectivePayload::RespawnGameObject {
                go_guid,
                despawn_delay_s,
            } => {
                s.datalong = go_guid;
                s.datalong2 = despawn_delay_s;
                CommandKind::RespawnGameObject
            }
            DirectivePayload::TempSummonCreature {
                creature_entry,
                despawn_delay_ms,
                x,
                y,
                z,
                o,
            } => {
                s.datalong = creature_entry;
                s.datalong2 = despawn_delay_ms;
                s.x = x;
                s.y = y;
                s.z = z;
                s.o = o;
                CommandKind::TempSummonCreature
            }
            DirectivePayload::OpenDoor {
                go_guid,
                reset_delay_s,
            } => {
                s.datalong = go_guid;
                s.datalong2 = reset_delay_s;
                CommandKind::OpenDoor
            }
            DirectivePayload::CloseDoor {
                go_guid,
                reset_delay_s,
            } => {
                s.datalong = go_guid;
                s.datalong2 = reset_delay_s;
                CommandKind::CloseDoor
            }
            DirectivePayload::ActivateObject { go_guid } => {
                s.datalong = go_guid;
                CommandKind::ActivateObject
            }
            DirectivePayload::RemoveAura {
                spell_id,
                target_not_source,
            } => {
                s.datalong = spell_id;
                s.datalong2 = target_not_source as u32;
                CommandKind::RemoveAura
            }
            DirectivePayload::CastSpell {
                spell_id,
                target_flag,
                creature_entry,
                search_radius,
            } => {
                s.datalong = spell_id;
                s.datalong2 = target_flag;
                s.dataint = creature_entry;
                s.x = search_radius;
                CommandKind::CastSpell
            }
            DirectivePayload::PlaySound {
                sound_id,
                at_target,
                flags,
            } => {
                s.datalong = sound_id;
                s.datalong2 = at_target as u32;
                s.dataint = flags;
                CommandKind::PlaySound
            }
            DirectivePayload::CreateItem { item_entry, amount } => {
                s.datalong = item_entry;
                s.datalong2 = amount;
                CommandKind::CreateItem
            }
            DirectivePayload::DespawnSelf { delay_ms } => {
                s.datalong = delay_ms;
                CommandKind::DespawnSelf
            }
            DirectivePayload::LoadPath {
                path_id,
                repeatable,
            } => {
                s.datalong = path_id;
                s.datalong2 = repeatable as u32;
                CommandKind::LoadPath
            }
            DirectivePayload::CallScript {
                creature_entry,
                script_id,
                table_selector,
            } => {
                s.datalong = creature_entry;
                s.datalong2 = script_id;
                s.dataint = table_selector;
                CommandKind::CallScript
            }
            DirectivePayload::Kill { remove_corpse } => {
                s.datalong2 = remove_corpse as u32;
                CommandKind::Kill
            }
            DirectivePayload::Orientation { face_target, o } => {
                s.datalong = face_target as u32;
                s.o = o;
                CommandKind::Orientation
            }
            DirectivePayload::Equip { equipment_id } => {
                s.datalong = equipment_id;
                CommandKind::Equip
            }
            DirectivePayload::Model { model_id } => {
                s.datalong = model_id;
                CommandKind::Model
            }
            DirectivePayload::CloseGossip => CommandKind::CloseGossip,
            DirectivePayload::PlayMovie {
                movie_id,
                whole_group,
            } => {
                s.datalong = movie_id;
                s.datalong2 = whole_group as u32;
                CommandKind::PlayMovie
            }
            DirectivePayload::PlayAnimKit { kit_id } => {
                s.datalong = kit_id;
                CommandKind::PlayAnimKit
            }
        };
        (kind, s)
    }

    /// The command kind this payload belongs to
    pub fn kind(&self) -> CommandKind {
        self.encode().0
    }
}
