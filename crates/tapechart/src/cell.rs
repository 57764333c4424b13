//! Tape-chart cell classification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stayforge_core::{ReservationId, RoomId};
use stayforge_property::Reservation;

/// State of one (room, day) cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellState {
    /// A stay begins this day.
    Arrival { reservation: ReservationId },
    /// Mid-stay night.
    Stay { reservation: ReservationId },
    /// A stay ends this day (checkout day).
    Departure { reservation: ReservationId },
    /// Same-day turnover: one stay checks out, another checks in. Carries
    /// both references; never merged into a single state.
    Changeover {
        departing: ReservationId,
        arriving: ReservationId,
    },
    /// Empty cell, with the exact run of free nights until the next future
    /// check-in (`None` when the room has no future booking).
    Gap { free_nights: Option<u32> },
}

/// Classify one (room, day) cell from the room's reservations.
///
/// Cancelled and no-show reservations never paint cells. First match wins:
/// 1. exactly one departing AND exactly one arriving → changeover;
/// 2. exactly one overlapping stay → arrival / stay / departure;
/// 3. exactly one departing (none overlapping) → departure;
/// 4. otherwise a gap with its free-night run.
pub fn classify_cell(room: RoomId, day: NaiveDate, reservations: &[Reservation]) -> CellState {
    let room_res: Vec<&Reservation> = reservations
        .iter()
        .filter(|r| r.room_id == room && r.status.paints_cells())
        .collect();

    let overlapping: Vec<&&Reservation> = room_res.iter().filter(|r| r.covers(day)).collect();
    let departing: Vec<&&Reservation> = room_res.iter().filter(|r| r.check_out == day).collect();
    let arriving: Vec<&&Reservation> = room_res.iter().filter(|r| r.check_in == day).collect();

    if departing.len() == 1 && arriving.len() == 1 {
        return CellState::Changeover {
            departing: departing[0].id,
            arriving: arriving[0].id,
        };
    }

    if overlapping.len() == 1 {
        let res = overlapping[0];
        if res.check_in == day {
            return CellState::Arrival { reservation: res.id };
        }
        if res.check_out > day {
            return CellState::Stay { reservation: res.id };
        }
        return CellState::Departure { reservation: res.id };
    }

    if departing.len() == 1 {
        return CellState::Departure { reservation: departing[0].id };
    }

    CellState::Gap {
        free_nights: free_nights_from(room, day, reservations),
    }
}

/// Free nights from `day` until the room's next future check-in.
///
/// `None` when no future booking exists — the run is unbounded. The value is
/// exact; display capping (e.g. "3+") is the UI's business.
pub fn free_nights_from(room: RoomId, day: NaiveDate, reservations: &[Reservation]) -> Option<u32> {
    reservations
        .iter()
        .filter(|r| r.room_id == room && r.status.paints_cells() && r.check_in > day)
        .map(|r| r.check_in)
        .min()
        .map(|next| (next - day).num_days() as u32)
}
