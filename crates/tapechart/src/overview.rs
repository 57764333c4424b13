//! Daily occupancy overview: heat strip and front-desk movement lists.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stayforge_core::{ReservationId, RoomId};
use stayforge_property::{Reservation, ReservationStatus, Room};

/// Fraction of rooms occupied on `day`, in `0.0..=1.0`.
///
/// A room counts as occupied when a cell-painting reservation covers the day.
/// An empty room set yields `0.0`.
pub fn daily_occupancy_ratio(day: NaiveDate, rooms: &[Room], reservations: &[Reservation]) -> f64 {
    if rooms.is_empty() {
        return 0.0;
    }
    let room_ids: HashSet<RoomId> = rooms.iter().map(|r| r.id).collect();
    let occupied: HashSet<RoomId> = reservations
        .iter()
        .filter(|r| r.status.paints_cells() && r.covers(day) && room_ids.contains(&r.room_id))
        .map(|r| r.room_id)
        .collect();
    occupied.len() as f64 / rooms.len() as f64
}

/// Heat-strip bucket for a daily occupancy ratio.
///
/// The thresholds are display policy, not a correctness rule:
/// 100% and above is `Full`, above 90% is `High`, below 50% is `Low`,
/// otherwise `Mid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatLevel {
    Full,
    High,
    Mid,
    Low,
}

pub fn heat_level(occupancy: f64) -> HeatLevel {
    if occupancy >= 1.0 {
        HeatLevel::Full
    } else if occupancy > 0.9 {
        HeatLevel::High
    } else if occupancy < 0.5 {
        HeatLevel::Low
    } else {
        HeatLevel::Mid
    }
}

/// Today's front-desk lists: who arrives and who leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMovements {
    /// Check-ins today, excluding cancelled and no-show.
    pub arrivals: Vec<ReservationId>,
    /// Check-outs today, limited to stays that actually happened
    /// (in-house or departed).
    pub departures: Vec<ReservationId>,
}

pub fn daily_movements(day: NaiveDate, reservations: &[Reservation]) -> DailyMovements {
    let arrivals = reservations
        .iter()
        .filter(|r| r.check_in == day && r.status.paints_cells())
        .map(|r| r.id)
        .collect();
    let departures = reservations
        .iter()
        .filter(|r| {
            r.check_out == day
                && matches!(r.status, ReservationStatus::CheckedIn | ReservationStatus::CheckedOut)
        })
        .map(|r| r.id)
        .collect();
    DailyMovements { arrivals, departures }
}
