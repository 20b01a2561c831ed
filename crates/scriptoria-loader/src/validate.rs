//! Per-kind referential validation
//!
//! One rule function per command kind, held in a kind-indexed table so each
//! rule is unit-testable on its own and new kinds slot in without touching a
//! switch. A rule sees the decoded payload plus a [`ValidationCtx`] naming
//! the category, the source row and the content stores.
//!
//! Rejection is a value, not a panic or an `Err` crossing the loader: the
//! orchestrator logs the [`RejectReason`] with the row position and moves
//! on. The single sanctioned side effect lives in the QuestExplored rule,
//! which repairs a missing quest flag instead of rejecting.

use scriptoria_content::{ContentStores, Difficulty, QuestSpecialFlags};
use scriptoria_core::{ChatType, CommandKind, DirectivePayload, ScriptCategory, SpellCastTarget};
use std::collections::HashMap;
use thiserror::Error;
use tracing::warn;

/// Why a row was excluded from its table
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RejectReason {
    #[error("unknown command value {command}")]
    UnknownCommand { command: u32 },

    #[error("command {kind} is deprecated and always rejected")]
    DeprecatedCommand { kind: CommandKind },

    #[error("invalid chat type {chat_type}")]
    InvalidChatType { chat_type: u32 },

    #[error("broadcast text {text_id} does not exist")]
    MissingBroadcastText { text_id: u32 },

    #[error("emote {emote_id} does not exist")]
    MissingEmote { emote_id: u32 },

    #[error("map {map_id} does not exist")]
    MissingMap { map_id: u32 },

    #[error("({x}, {y}, {z}, {o}) is not a valid position on map {map_id}")]
    InvalidPosition {
        map_id: u32,
        x: f32,
        y: f32,
        z: f32,
        o: f32,
    },

    #[error("destination ({x}, {y}, {z}) is not finite")]
    NonFiniteDestination { x: f32, y: f32, z: f32 },

    #[error("quest {quest_id} does not exist")]
    MissingQuest { quest_id: u32 },

    #[error("creature template {entry} does not exist")]
    MissingCreature { entry: u32 },

    #[error("gameobject guid {guid} does not exist")]
    MissingGameObject { guid: u32 },

    #[error("gameobject guid {guid} (entry {entry}) is not a door")]
    NotADoor { guid: u32, entry: u32 },

    #[error("lock {lock_id} on gameobject guid {guid} does not exist")]
    MissingLock { guid: u32, lock_id: u32 },

    #[error("spell {spell_id} does not exist")]
    MissingSpell { spell_id: u32 },

    #[error("invalid spell cast target flag {target_flag}")]
    InvalidTargetFlag { target_flag: u32 },

    #[error("item template {entry} does not exist")]
    MissingItem { entry: u32 },

    #[error("item amount must be nonzero")]
    ZeroItemAmount,

    #[error("animation kit {kit_id} does not exist")]
    MissingAnimKit { kit_id: u32 },

    #[error("sound id must be nonzero")]
    ZeroSoundId,

    #[error("movie id must be nonzero")]
    ZeroMovieId,

    #[error("path id must be nonzero")]
    ZeroPathId,

    #[error("call-script table selector {selector} is not 1, 2 or 3")]
    BadCallScriptSelector { selector: u32 },

    #[error("bad sequence id: {0}")]
    SequenceId(#[from] scriptoria_core::Error),
}

/// What a rule may consult besides the payload
#[derive(Clone, Copy)]
pub struct ValidationCtx<'a> {
    pub category: ScriptCategory,
    /// Source row id, for diagnostics
    pub row_id: u32,
    pub stores: &'a ContentStores,
}

type RuleFn = fn(&DirectivePayload, &ValidationCtx<'_>) -> Result<(), RejectReason>;

/// Kind-indexed table of validation rules
#[derive(Debug)]
pub struct Validator {
    rules: HashMap<CommandKind, RuleFn>,
}

impl Validator {
    /// Build the full rule table
    pub fn new() -> Self {
        let mut rules: HashMap<CommandKind, RuleFn> = HashMap::new();
        rules.insert(CommandKind::Talk, talk);
        rules.insert(CommandKind::Emote, emote);
        rules.insert(CommandKind::MoveTo, move_to);
        rules.insert(CommandKind::TeleportTo, teleport_to);
        rules.insert(CommandKind::QuestExplored, quest_explored);
        rules.insert(CommandKind::KillCredit, kill_credit);
        rules.insert(CommandKind::RespawnGameObject, respawn_gameobject);
        rules.insert(CommandKind::TempSummonCreature, temp_summon_creature);
        rules.insert(CommandKind::OpenDoor, toggle_door);
        rules.insert(CommandKind::CloseDoor, toggle_door);
        rules.insert(CommandKind::ActivateObject, activate_object);
        rules.insert(CommandKind::RemoveAura, remove_aura);
        rules.insert(CommandKind::CastSpell, cast_spell);
        rules.insert(CommandKind::PlaySound, play_sound);
        rules.insert(CommandKind::CreateItem, create_item);
        rules.insert(CommandKind::DespawnSelf, always_ok);
        rules.insert(CommandKind::LoadPath, load_path);
        rules.insert(CommandKind::CallScript, call_script);
        rules.insert(CommandKind::Kill, always_ok);
        rules.insert(CommandKind::Orientation, always_ok);
        rules.insert(CommandKind::Equip, always_ok);
        rules.insert(CommandKind::Model, always_ok);
        rules.insert(CommandKind::CloseGossip, always_ok);
        rules.insert(CommandKind::PlayMovie, play_movie);
        rules.insert(CommandKind::PlayAnimKit, play_animkit);
        Self { rules }
    }

    /// Run the rule for the payload's kind
    ///
    /// Deprecated kinds never reach this point (they have no payload); a
    /// kind without a registered rule validates unconditionally.
    pub fn validate(
        &self,
        payload: &DirectivePayload,
        ctx: &ValidationCtx<'_>,
    ) -> Result<(), RejectReason> {
        match self.rules.get(&payload.kind()) {
            Some(rule) => rule(payload, ctx),
            None => Ok(()),
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

fn always_ok(_payload: &DirectivePayload, _ctx: &ValidationCtx<'_>) -> Result<(), RejectReason> {
    Ok(())
}

fn talk(payload: &DirectivePayload, ctx: &ValidationCtx<'_>) -> Result<(), RejectReason> {
    let DirectivePayload::Talk {
        chat_type, text_id, ..
    } = *payload
    else {
        return Ok(());
    };
    if ChatType::from_raw(chat_type).is_none() {
        return Err(RejectReason::InvalidChatType { chat_type });
    }
    if !ctx.stores.broadcast_texts.contains(text_id) {
        return Err(RejectReason::MissingBroadcastText { text_id });
    }
    Ok(())
}

fn emote(payload: &DirectivePayload, ctx: &ValidationCtx<'_>) -> Result<(), RejectReason> {
    let DirectivePayload::Emote { emote_id, .. } = *payload else {
        return Ok(());
    };
    if !ctx.stores.emotes.contains(emote_id) {
        return Err(RejectReason::MissingEmote { emote_id });
    }
    Ok(())
}

fn move_to(payload: &DirectivePayload, _ctx: &ValidationCtx<'_>) -> Result<(), RejectReason> {
    let DirectivePayload::MoveTo { x, y, z, .. } = *payload else {
        return Ok(());
    };
    if !(x.is_finite() && y.is_finite() && z.is_finite()) {
        return Err(RejectReason::NonFiniteDestination { x, y, z });
    }
    Ok(())
}

fn teleport_to(payload: &DirectivePayload, ctx: &ValidationCtx<'_>) -> Result<(), RejectReason> {
    let DirectivePayload::TeleportTo {
        map_id, x, y, z, o, ..
    } = *payload
    else {
        return Ok(());
    };
    if !ctx.stores.maps.contains(map_id) {
        return Err(RejectReason::MissingMap { map_id });
    }
    if !ctx.stores.maps.is_valid_position(map_id, x, y, z, o) {
        return Err(RejectReason::InvalidPosition { map_id, x, y, z, o });
    }
    Ok(())
}

/// Quest must exist; a quest missing EXPLORATION_OR_EVENT is repaired, not
/// rejected.
fn quest_explored(payload: &DirectivePayload, ctx: &ValidationCtx<'_>) -> Result<(), RejectReason> {
    let DirectivePayload::QuestExplored { quest_id, .. } = *payload else {
        return Ok(());
    };
    let Some(quest) = ctx.stores.quests.get(quest_id) else {
        return Err(RejectReason::MissingQuest { quest_id });
    };
    if !quest.has_special_flag(QuestSpecialFlags::EXPLORATION_OR_EVENT) {
        warn!(
            target: "scripts",
            "{}: row {} references quest {} without the exploration/event flag; setting it",
            ctx.category.table_name(),
            ctx.row_id,
            quest_id
        );
        quest.set_special_flag(QuestSpecialFlags::EXPLORATION_OR_EVENT);
    }
    Ok(())
}

fn kill_credit(payload: &DirectivePayload, ctx: &ValidationCtx<'_>) -> Result<(), RejectReason> {
    let DirectivePayload::KillCredit { creature_entry, .. } = *payload else {
        return Ok(());
    };
    require_creature(ctx, creature_entry)
}

fn respawn_gameobject(
    payload: &DirectivePayload,
    ctx: &ValidationCtx<'_>,
) -> Result<(), RejectReason> {
    let DirectivePayload::RespawnGameObject { go_guid, .. } = *payload else {
        return Ok(());
    };
    if !ctx.stores.gameobjects.contains(go_guid) {
        return Err(RejectReason::MissingGameObject { guid: go_guid });
    }
    Ok(())
}

fn temp_summon_creature(
    payload: &DirectivePayload,
    ctx: &ValidationCtx<'_>,
) -> Result<(), RejectReason> {
    let DirectivePayload::TempSummonCreature { creature_entry, .. } = *payload else {
        return Ok(());
    };
    require_creature(ctx, creature_entry)
}

/// Shared by OpenDoor and CloseDoor: the guid must name a door, and a
/// nonzero lock id on it must exist.
fn toggle_door(payload: &DirectivePayload, ctx: &ValidationCtx<'_>) -> Result<(), RejectReason> {
    let go_guid = match *payload {
        DirectivePayload::OpenDoor { go_guid, .. } => go_guid,
        DirectivePayload::CloseDoor { go_guid, .. } => go_guid,
        _ => return Ok(()),
    };
    let Some(template) = ctx.stores.gameobjects.get(go_guid) else {
        return Err(RejectReason::MissingGameObject { guid: go_guid });
    };
    if !template.is_door() {
        return Err(RejectReason::NotADoor {
            guid: go_guid,
            entry: template.entry,
        });
    }
    if template.lock_id != 0 && !ctx.stores.locks.contains(template.lock_id) {
        return Err(RejectReason::MissingLock {
            guid: go_guid,
            lock_id: template.lock_id,
        });
    }
    Ok(())
}

fn activate_object(
    payload: &DirectivePayload,
    ctx: &ValidationCtx<'_>,
) -> Result<(), RejectReason> {
    let DirectivePayload::ActivateObject { go_guid } = *payload else {
        return Ok(());
    };
    if !ctx.stores.gameobjects.contains(go_guid) {
        return Err(RejectReason::MissingGameObject { guid: go_guid });
    }
    Ok(())
}

fn remove_aura(payload: &DirectivePayload, ctx: &ValidationCtx<'_>) -> Result<(), RejectReason> {
    let DirectivePayload::RemoveAura { spell_id, .. } = *payload else {
        return Ok(());
    };
    require_spell(ctx, spell_id)
}

fn cast_spell(payload: &DirectivePayload, ctx: &ValidationCtx<'_>) -> Result<(), RejectReason> {
    let DirectivePayload::CastSpell {
        spell_id,
        target_flag,
        creature_entry,
        ..
    } = *payload
    else {
        return Ok(());
    };
    require_spell(ctx, spell_id)?;
    let Some(target) = SpellCastTarget::from_raw(target_flag) else {
        return Err(RejectReason::InvalidTargetFlag { target_flag });
    };
    if target == SpellCastTarget::SourceToNearestEntry {
        require_creature(ctx, creature_entry)?;
    }
    Ok(())
}

fn play_sound(payload: &DirectivePayload, _ctx: &ValidationCtx<'_>) -> Result<(), RejectReason> {
    let DirectivePayload::PlaySound { sound_id, .. } = *payload else {
        return Ok(());
    };
    if sound_id == 0 {
        return Err(RejectReason::ZeroSoundId);
    }
    Ok(())
}

fn create_item(payload: &DirectivePayload, ctx: &ValidationCtx<'_>) -> Result<(), RejectReason> {
    let DirectivePayload::CreateItem { item_entry, amount } = *payload else {
        return Ok(());
    };
    if !ctx.stores.items.contains(item_entry) {
        return Err(RejectReason::MissingItem { entry: item_entry });
    }
    if amount == 0 {
        return Err(RejectReason::ZeroItemAmount);
    }
    Ok(())
}

fn load_path(payload: &DirectivePayload, _ctx: &ValidationCtx<'_>) -> Result<(), RejectReason> {
    let DirectivePayload::LoadPath { path_id, .. } = *payload else {
        return Ok(());
    };
    if path_id == 0 {
        return Err(RejectReason::ZeroPathId);
    }
    Ok(())
}

fn call_script(payload: &DirectivePayload, ctx: &ValidationCtx<'_>) -> Result<(), RejectReason> {
    let DirectivePayload::CallScript {
        creature_entry,
        table_selector,
        ..
    } = *payload
    else {
        return Ok(());
    };
    require_creature(ctx, creature_entry)?;
    if !(1..=3).contains(&table_selector) {
        return Err(RejectReason::BadCallScriptSelector {
            selector: table_selector,
        });
    }
    Ok(())
}

fn play_movie(payload: &DirectivePayload, _ctx: &ValidationCtx<'_>) -> Result<(), RejectReason> {
    let DirectivePayload::PlayMovie { movie_id, .. } = *payload else {
        return Ok(());
    };
    if movie_id == 0 {
        return Err(RejectReason::ZeroMovieId);
    }
    Ok(())
}

fn play_animkit(payload: &DirectivePayload, ctx: &ValidationCtx<'_>) -> Result<(), RejectReason> {
    let DirectivePayload::PlayAnimKit { kit_id } = *payload else {
        return Ok(());
    };
    if !ctx.stores.anim_kits.contains(kit_id) {
        return Err(RejectReason::MissingAnimKit { kit_id });
    }
    Ok(())
}

fn require_creature(ctx: &ValidationCtx<'_>, entry: u32) -> Result<(), RejectReason> {
    if !ctx.stores.creatures.contains(entry) {
        return Err(RejectReason::MissingCreature { entry });
    }
    Ok(())
}

fn require_spell(ctx: &ValidationCtx<'_>, spell_id: u32) -> Result<(), RejectReason> {
    if !ctx.stores.spells.contains(spell_id, Difficulty::None) {
        return Err(RejectReason::MissingSpell { spell_id });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptoria_content::{
        GameObjectKind, GameObjectTemplate, QuestStore, QuestTemplate, SpellEffect,
        SpellEffectKind, SpellInfo,
    };

    fn stores() -> ContentStores {
        let mut stores = ContentStores::new();
        stores.broadcast_texts.insert(12345);
        stores.emotes.insert(10);
        stores.creatures.insert(16973);
        stores.items.insert(24538);
        stores.anim_kits.insert(1696);
        stores.locks.insert(600);
        stores.maps.insert(530);
        stores.quests.insert(QuestTemplate::new(
            9400,
            QuestSpecialFlags::EXPLORATION_OR_EVENT,
        ));
        stores.spells.insert(
            20620,
            Difficulty::None,
            SpellInfo::with_effects(vec![SpellEffect {
                kind: SpellEffectKind::ScriptEffect,
                misc_value: 0,
            }]),
        );
        stores.gameobjects.insert(
            41,
            GameObjectTemplate {
                entry: 1852,
                kind: GameObjectKind::Door,
                lock_id: 600,
                event_id: 0,
            },
        );
        stores.gameobjects.insert(
            42,
            GameObjectTemplate {
                entry: 1853,
                kind: GameObjectKind::Chest,
                lock_id: 0,
                event_id: 0,
            },
        );
        stores
    }

    fn ctx<'a>(stores: &'a ContentStores) -> ValidationCtx<'a> {
        ValidationCtx {
            category: ScriptCategory::Event,
            row_id: 1,
            stores,
        }
    }

    #[test]
    fn test_talk_accepts_known_text() {
        let stores = stores();
        let payload = DirectivePayload::Talk {
            chat_type: 0,
            creature_entry: 0,
            text_id: 12345,
        };
        assert_eq!(Validator::new().validate(&payload, &ctx(&stores)), Ok(()));
    }

    #[test]
    fn test_talk_rejects_missing_text_and_bad_chat_type() {
        let stores = stores();
        let v = Validator::new();
        let missing = DirectivePayload::Talk {
            chat_type: 0,
            creature_entry: 0,
            text_id: 999_999,
        };
        assert_eq!(
            v.validate(&missing, &ctx(&stores)),
            Err(RejectReason::MissingBroadcastText { text_id: 999_999 })
        );
        let bad_type = DirectivePayload::Talk {
            chat_type: 9,
            creature_entry: 0,
            text_id: 12345,
        };
        assert_eq!(
            v.validate(&bad_type, &ctx(&stores)),
            Err(RejectReason::InvalidChatType { chat_type: 9 })
        );
    }

    #[test]
    fn test_teleport_checks_map_and_position() {
        let stores = stores();
        let v = Validator::new();
        let ok = DirectivePayload::TeleportTo {
            map_id: 530,
            player_source: false,
            x: 100.0,
            y: -50.0,
            z: 20.0,
            o: 1.0,
        };
        assert_eq!(v.validate(&ok, &ctx(&stores)), Ok(()));
        let bad_map = DirectivePayload::TeleportTo {
            map_id: 777,
            player_source: false,
            x: 0.0,
            y: 0.0,
            z: 0.0,
            o: 0.0,
        };
        assert_eq!(
            v.validate(&bad_map, &ctx(&stores)),
            Err(RejectReason::MissingMap { map_id: 777 })
        );
        let bad_pos = DirectivePayload::TeleportTo {
            map_id: 530,
            player_source: false,
            x: f32::NAN,
            y: 0.0,
            z: 0.0,
            o: 0.0,
        };
        assert!(matches!(
            v.validate(&bad_pos, &ctx(&stores)),
            Err(RejectReason::InvalidPosition { .. })
        ));
    }

    #[test]
    fn test_quest_explored_repairs_missing_flag() {
        let mut stores = stores();
        let mut quests = QuestStore::new();
        quests.insert(QuestTemplate::new(500, QuestSpecialFlags::empty()));
        stores.quests = quests;

        let payload = DirectivePayload::QuestExplored {
            quest_id: 500,
            max_distance: 30,
        };
        assert_eq!(Validator::new().validate(&payload, &ctx(&stores)), Ok(()));
        assert!(stores
            .quests
            .get(500)
            .unwrap()
            .has_special_flag(QuestSpecialFlags::EXPLORATION_OR_EVENT));
    }

    #[test]
    fn test_quest_explored_rejects_unknown_quest() {
        let stores = stores();
        let payload = DirectivePayload::QuestExplored {
            quest_id: 501,
            max_distance: 0,
        };
        assert_eq!(
            Validator::new().validate(&payload, &ctx(&stores)),
            Err(RejectReason::MissingQuest { quest_id: 501 })
        );
    }

    #[test]
    fn test_door_toggle_requires_door_type() {
        let stores = stores();
        let v = Validator::new();
        let door = DirectivePayload::OpenDoor {
            go_guid: 41,
            reset_delay_s: 15,
        };
        assert_eq!(v.validate(&door, &ctx(&stores)), Ok(()));
        let chest = DirectivePayload::CloseDoor {
            go_guid: 42,
            reset_delay_s: 15,
        };
        assert_eq!(
            v.validate(&chest, &ctx(&stores)),
            Err(RejectReason::NotADoor {
                guid: 42,
                entry: 1853
            })
        );
        let gone = DirectivePayload::OpenDoor {
            go_guid: 77,
            reset_delay_s: 0,
        };
        assert_eq!(
            v.validate(&gone, &ctx(&stores)),
            Err(RejectReason::MissingGameObject { guid: 77 })
        );
    }

    #[test]
    fn test_cast_spell_target_flags() {
        let stores = stores();
        let v = Validator::new();
        let nearest_known = DirectivePayload::CastSpell {
            spell_id: 20620,
            target_flag: 4,
            creature_entry: 16973,
            search_radius: 40.0,
        };
        assert_eq!(v.validate(&nearest_known, &ctx(&stores)), Ok(()));
        let nearest_unknown = DirectivePayload::CastSpell {
            spell_id: 20620,
            target_flag: 4,
            creature_entry: 1,
            search_radius: 40.0,
        };
        assert_eq!(
            v.validate(&nearest_unknown, &ctx(&stores)),
            Err(RejectReason::MissingCreature { entry: 1 })
        );
        let bad_flag = DirectivePayload::CastSpell {
            spell_id: 20620,
            target_flag: 6,
            creature_entry: 0,
            search_radius: 0.0,
        };
        assert_eq!(
            v.validate(&bad_flag, &ctx(&stores)),
            Err(RejectReason::InvalidTargetFlag { target_flag: 6 })
        );
    }

    #[test]
    fn test_create_item_amount() {
        let stores = stores();
        let v = Validator::new();
        let zero = DirectivePayload::CreateItem {
            item_entry: 24538,
            amount: 0,
        };
        assert_eq!(
            v.validate(&zero, &ctx(&stores)),
            Err(RejectReason::ZeroItemAmount)
        );
        let unknown = DirectivePayload::CreateItem {
            item_entry: 1,
            amount: 1,
        };
        assert_eq!(
            v.validate(&unknown, &ctx(&stores)),
            Err(RejectReason::MissingItem { entry: 1 })
        );
    }

    #[test]
    fn test_unchecked_kinds_accept() {
        let stores = stores();
        let v = Validator::new();
        for payload in [
            DirectivePayload::DespawnSelf { delay_ms: 0 },
            DirectivePayload::Kill {
                remove_corpse: true,
            },
            DirectivePayload::CloseGossip,
            DirectivePayload::Orientation {
                face_target: false,
                o: 1.0,
            },
        ] {
            assert_eq!(v.validate(&payload, &ctx(&stores)), Ok(()));
        }
    }
}
