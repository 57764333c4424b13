//! Channel identifier mapping.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stayforge_core::{MappingId, RoomId, RoomTypeId};

/// What an internal identifier in a mapping row refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingKind {
    Room,
    RoomType,
}

/// One translation row: internal room/room-type id → a distribution
/// channel's own identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMapping {
    pub id: MappingId,
    pub kind: MappingKind,
    pub internal_id: Uuid,
    pub external_id: String,
}

/// Lookup table built from mapping rows.
///
/// Absence of a mapping is valid: callers fall back to
/// [`MappingTable::synthetic_type_id`] rather than leaking internal UUIDs to
/// a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    by_room: HashMap<RoomId, String>,
    by_room_type: HashMap<RoomTypeId, String>,
}

impl MappingTable {
    pub fn from_rows(rows: &[ChannelMapping]) -> Self {
        let mut table = MappingTable::default();
        for row in rows {
            match row.kind {
                MappingKind::Room => {
                    table
                        .by_room
                        .insert(RoomId::from_uuid(row.internal_id), row.external_id.clone());
                }
                MappingKind::RoomType => {
                    table
                        .by_room_type
                        .insert(RoomTypeId::from_uuid(row.internal_id), row.external_id.clone());
                }
            }
        }
        table
    }

    pub fn external_for_room(&self, room: RoomId) -> Option<&str> {
        self.by_room.get(&room).map(String::as_str)
    }

    pub fn external_for_room_type(&self, room_type: RoomTypeId) -> Option<&str> {
        self.by_room_type.get(&room_type).map(String::as_str)
    }

    /// Synthetic identifier for an unmapped room type, derived from its name.
    pub fn synthetic_type_id(type_name: &str) -> String {
        format!("type:{type_name}")
    }
}
