use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stayforge_core::{BlockId, ReservationId, RoomId, calendar};

/// Reservation lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Tentative/confirmed future stay.
    Confirmed,
    /// Guest is in-house.
    CheckedIn,
    /// Guest has departed.
    CheckedOut,
    Cancelled,
    NoShow,
}

impl ReservationStatus {
    /// Whether this status removes rooms from forward sellable inventory.
    ///
    /// Only confirmed and in-house stays occupy; departed, cancelled and
    /// no-show never do.
    pub fn occupies_inventory(&self) -> bool {
        matches!(self, ReservationStatus::Confirmed | ReservationStatus::CheckedIn)
    }

    /// Whether this status paints tape-chart cells at all.
    pub fn paints_cells(&self) -> bool {
        !matches!(self, ReservationStatus::Cancelled | ReservationStatus::NoShow)
    }
}

/// A guest stay interval: inclusive check-in, exclusive check-out.
///
/// The checkout day does not occupy the room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub room_id: RoomId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: ReservationStatus,
}

impl Reservation {
    /// `check_in <= day < check_out`; a zero-length stay covers no day.
    pub fn covers(&self, day: NaiveDate) -> bool {
        calendar::interval_covers(self.check_in, self.check_out, day)
    }

    /// Overlap with the inclusive window `[from, to]`.
    pub fn overlaps_window(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.check_in <= to && self.check_out > from
    }
}

/// A maintenance/out-of-service interval for a room. No guest; always
/// occupies inventory regardless of any reservation status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomBlock {
    pub id: BlockId,
    pub room_id: RoomId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl RoomBlock {
    pub fn covers(&self, day: NaiveDate) -> bool {
        calendar::interval_covers(self.start_date, self.end_date, day)
    }

    pub fn overlaps_window(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.start_date <= to && self.end_date > from
    }
}
