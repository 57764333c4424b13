//! Whole-range availability summary.
//!
//! Answers the channel-manager style question "which rooms are free for the
//! *entire* window", grouped by room type name.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stayforge_core::{RoomId, calendar};
use stayforge_property::{Reservation, Room, RoomBlock};

use crate::resolver;

/// Rooms free for every night of a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeAvailability {
    pub total_available: u32,
    /// Free-room count per room type name, deterministically ordered.
    pub by_type: BTreeMap<String, u32>,
    pub rooms: Vec<RoomId>,
}

/// Compute the rooms sellable across the whole inclusive window `[from, to]`.
///
/// A room qualifies when it passes [`Room::is_sellable`] and is neither
/// occupied nor blocked on any night of the window. An inverted range yields
/// an empty summary.
pub fn range_availability(
    rooms: &[Room],
    reservations: &[Reservation],
    blocks: &[RoomBlock],
    from: NaiveDate,
    to: NaiveDate,
) -> RangeAvailability {
    let sellable: Vec<Room> = rooms.iter().filter(|r| r.is_sellable()).cloned().collect();
    let grid = resolver::resolve(&sellable, reservations, blocks, from, to);

    let mut by_type: BTreeMap<String, u32> = BTreeMap::new();
    let mut free_rooms: Vec<RoomId> = Vec::new();
    for room in &sellable {
        let free_all_nights = calendar::days_inclusive(from, to).all(|day| grid.is_free(room.id, day));
        if from <= to && free_all_nights {
            free_rooms.push(room.id);
            *by_type.entry(room.type_name.clone()).or_insert(0) += 1;
        }
    }

    RangeAvailability {
        total_available: free_rooms.len() as u32,
        by_type,
        rooms: free_rooms,
    }
}
