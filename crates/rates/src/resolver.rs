//! Deterministic nightly price resolution.

use chrono::NaiveDate;

use stayforge_core::{Price, RoomTypeId};

use crate::plan::RatePlan;

/// Last-resort nightly price when a room carries no usable static price and
/// no plan or base price applies. Keeps a sync from ever sending a zero rate.
pub const DEFAULT_NIGHTLY_PRICE: Price = Price::from_minor(100_00);

/// Resolve the nightly price for one room type on one day.
///
/// Three-level fallback, preserved exactly:
/// 1. among validity-matching plans, the first whose `weekend_holiday` flag
///    equals the caller-supplied `is_weekend_or_holiday`;
/// 2. otherwise the first validity-matching plan in stable input order;
/// 3. otherwise the room type's `base_price`, and failing that the
///    caller-supplied static `fallback`.
///
/// Total and deterministic: identical inputs always yield the identical
/// price, and a usable number always comes back.
pub fn resolve_price(
    room_type_id: RoomTypeId,
    day: NaiveDate,
    is_weekend_or_holiday: bool,
    plans: &[RatePlan],
    base_price: Option<Price>,
    fallback: Price,
) -> Price {
    let mut first_valid: Option<&RatePlan> = None;
    for plan in plans {
        if !plan.applies_on(room_type_id, day) {
            continue;
        }
        if plan.weekend_holiday == is_weekend_or_holiday {
            return plan.price;
        }
        if first_valid.is_none() {
            first_valid = Some(plan);
        }
    }

    match first_valid {
        Some(plan) => plan.price,
        None => base_price.unwrap_or(fallback),
    }
}
