//! Typed models for the Enka Network player payload.
//!
//! Only the fields the bot reads are typed; everything else is preserved in
//! `extra` flatten buckets so a re-serialized [`AvatarInfo`] loses nothing.
//! Cached snapshots store the avatar exactly as serialized here, which also
//! lets stored payloads be re-read through the same types later.

use crate::enka::stats::{FightProp, PropId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Top-level response of `GET /api/uid/{uid}/`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerData {
    pub player_info: Option<PlayerInfo>,
    #[serde(default)]
    pub avatar_info_list: Vec<AvatarInfo>,
}

/// Public profile information.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    pub nickname: String,
    pub level: u32,
    #[serde(default)]
    pub world_level: u32,
    #[serde(default)]
    pub tower_floor_index: u32,
    #[serde(default)]
    pub tower_level_index: u32,
    pub signature: Option<String>,
    pub profile_picture: Option<ProfilePicture>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePicture {
    pub avatar_id: Option<u64>,
}

/// One character's detail block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarInfo {
    pub avatar_id: u64,
    #[serde(default)]
    pub prop_map: HashMap<String, PropEntry>,
    #[serde(default)]
    pub fight_prop_map: HashMap<String, f64>,
    #[serde(default)]
    pub skill_level_map: HashMap<String, u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub equip_list: Vec<Equip>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `propMap` entry: Enka reports values as strings under `val`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub val: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One equipped item (artifact or weapon).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equip {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flat: Option<EquipFlat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reliquary: Option<Reliquary>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipFlat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_name_text_map_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equip_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reliquary_mainstat: Option<ReliquaryMainstat>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReliquaryMainstat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_prop_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat_value: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reliquary {
    #[serde(default)]
    pub level: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AvatarInfo {
    fn prop(&self, id: PropId) -> Option<&str> {
        self.prop_map.get(&id.id().to_string())?.val.as_deref()
    }

    /// Character level from the prop map, if present and numeric.
    #[must_use]
    pub fn level(&self) -> Option<u8> {
        self.prop(PropId::Level)?.parse().ok()
    }

    /// Constellation count, defaulting to zero when unreported.
    #[must_use]
    pub fn constellation(&self) -> u8 {
        self.prop(PropId::Constellation)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// A combat stat by typed ID.
    #[must_use]
    pub fn fight_prop(&self, prop: FightProp) -> Option<f64> {
        self.fight_prop_map.get(&prop.id().to_string()).copied()
    }

    /// Talent levels in ascending numeric skill-ID order. The map keys are
    /// decimal strings of differing lengths, so they must be compared as
    /// numbers; unparsable keys sort last.
    #[must_use]
    pub fn skill_levels(&self) -> Vec<u32> {
        let mut entries: Vec<(u64, u32)> = self
            .skill_level_map
            .iter()
            .map(|(k, &v)| (k.parse().unwrap_or(u64::MAX), v))
            .collect();
        entries.sort_unstable();
        entries.into_iter().map(|(_, v)| v).collect()
    }

    /// Equipped artifacts: entries that carry a main-stat descriptor.
    #[must_use]
    pub fn artifacts(&self) -> Vec<&Equip> {
        self.equip_list
            .iter()
            .filter(|e| {
                e.flat
                    .as_ref()
                    .is_some_and(|f| f.reliquary_mainstat.is_some())
            })
            .collect()
    }
}
