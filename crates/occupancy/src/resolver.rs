//! Per-(room, day) occupancy resolution.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stayforge_core::{RoomId, calendar};
use stayforge_property::{Reservation, Room, RoomBlock};

/// State of one room on one day.
///
/// When a stay and a block cover the same day the room is simply
/// unavailable; the grid reports `Occupied` (the states are exclusive in the
/// stored grid, and sellability only asks "is it free").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyState {
    Free,
    Occupied,
    Blocked,
}

/// Occupancy of a room set over an inclusive date window.
///
/// Built once per query from a snapshot; a pure value with no behavior
/// beyond lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    rooms: HashSet<RoomId>,
    from: NaiveDate,
    to: NaiveDate,
    occupied: HashMap<NaiveDate, HashSet<RoomId>>,
    blocked: HashMap<NaiveDate, HashSet<RoomId>>,
}

impl OccupancyGrid {
    /// State of `room` on `day`; `None` when the room is not part of the
    /// resolved set or the day is outside the window.
    pub fn state(&self, room: RoomId, day: NaiveDate) -> Option<OccupancyState> {
        if !self.rooms.contains(&room) || day < self.from || day > self.to {
            return None;
        }
        if self.occupied.get(&day).is_some_and(|s| s.contains(&room)) {
            return Some(OccupancyState::Occupied);
        }
        if self.blocked.get(&day).is_some_and(|s| s.contains(&room)) {
            return Some(OccupancyState::Blocked);
        }
        Some(OccupancyState::Free)
    }

    /// Sellability test: known room, in-window day, and neither occupied nor
    /// blocked.
    pub fn is_free(&self, room: RoomId, day: NaiveDate) -> bool {
        self.state(room, day) == Some(OccupancyState::Free)
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        calendar::days_inclusive(self.from, self.to)
    }
}

/// Resolve occupancy for every (room, day) pair in the inclusive window
/// `[from, to]`.
///
/// A room is occupied on a day when any inventory-affecting reservation
/// covers it, blocked when any block covers it. Zero-length intervals never
/// occupy; intervals fully outside the window are dropped up front so the
/// per-day scan only walks overlapping intervals; intervals for rooms absent
/// from `rooms` are never reported.
pub fn resolve(
    rooms: &[Room],
    reservations: &[Reservation],
    blocks: &[RoomBlock],
    from: NaiveDate,
    to: NaiveDate,
) -> OccupancyGrid {
    let room_ids: HashSet<RoomId> = rooms.iter().map(|r| r.id).collect();

    // Window pre-filter: O(days × overlapping-intervals), not a full scan per day.
    let stays: Vec<&Reservation> = reservations
        .iter()
        .filter(|r| r.status.occupies_inventory())
        .filter(|r| room_ids.contains(&r.room_id))
        .filter(|r| r.overlaps_window(from, to))
        .collect();
    let maintenance: Vec<&RoomBlock> = blocks
        .iter()
        .filter(|b| room_ids.contains(&b.room_id))
        .filter(|b| b.overlaps_window(from, to))
        .collect();

    let mut occupied: HashMap<NaiveDate, HashSet<RoomId>> = HashMap::new();
    let mut blocked: HashMap<NaiveDate, HashSet<RoomId>> = HashMap::new();

    for day in calendar::days_inclusive(from, to) {
        let occupied_today: HashSet<RoomId> = stays
            .iter()
            .filter(|r| r.covers(day))
            .map(|r| r.room_id)
            .collect();
        let blocked_today: HashSet<RoomId> = maintenance
            .iter()
            .filter(|b| b.covers(day))
            .map(|b| b.room_id)
            .collect();
        if !occupied_today.is_empty() {
            occupied.insert(day, occupied_today);
        }
        if !blocked_today.is_empty() {
            blocked.insert(day, blocked_today);
        }
    }

    OccupancyGrid {
        rooms: room_ids,
        from,
        to,
        occupied,
        blocked,
    }
}
