use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stayforge_core::{Price, RatePlanId, RoomTypeId};

/// A priced, validity-windowed offer for a room type.
///
/// The validity window `[valid_from, valid_to]` is inclusive on **both**
/// ends, unlike stay intervals. Multiple plans may validly overlap the same
/// day for the same room type; the resolver picks exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePlan {
    pub id: RatePlanId,
    pub room_type_id: RoomTypeId,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    pub price: Price,
    /// Tie-break dimension, not a calendar truth: the caller decides which
    /// days count as weekend/holiday.
    pub weekend_holiday: bool,
}

impl RatePlan {
    /// Validity test for one room type and day.
    pub fn applies_on(&self, room_type_id: RoomTypeId, day: NaiveDate) -> bool {
        self.room_type_id == room_type_id && self.valid_from <= day && day <= self.valid_to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn validity_window_is_inclusive_both_ends() {
        let type_id = RoomTypeId::new();
        let plan = RatePlan {
            id: RatePlanId::new(),
            room_type_id: type_id,
            valid_from: d("2026-06-01"),
            valid_to: d("2026-08-31"),
            price: Price::from_major(400),
            weekend_holiday: false,
        };
        assert!(plan.applies_on(type_id, d("2026-06-01")));
        assert!(plan.applies_on(type_id, d("2026-08-31")));
        assert!(!plan.applies_on(type_id, d("2026-05-31")));
        assert!(!plan.applies_on(type_id, d("2026-09-01")));
        assert!(!plan.applies_on(RoomTypeId::new(), d("2026-07-15")));
    }
}
