//! Per-day sellable inventory aggregation.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stayforge_core::{DomainError, DomainResult, Price, PropertyId, calendar};
use stayforge_occupancy as occupancy;
use stayforge_property::{Reservation, Room, RoomBlock, RoomType};
use stayforge_rates::{DEFAULT_NIGHTLY_PRICE, RatePlan, resolve_price};

use crate::line::InventoryLine;
use crate::mapping::{ChannelMapping, MappingTable};

/// Hard cap on the per-day sellable count.
///
/// 254 comes from a legacy single-byte channel field; it is a protocol cap,
/// not a soft truncation. Channels that accept more can raise it per call
/// via [`AggregationPolicy::sellable_ceiling`].
pub const SELLABLE_CEILING: u32 = 254;

/// Everything the persistence collaborator hands the aggregator for one
/// property. The engine only reads it; snapshot consistency across the
/// collections is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySnapshot {
    pub property_id: PropertyId,
    pub rooms: Vec<Room>,
    pub room_types: Vec<RoomType>,
    pub reservations: Vec<Reservation>,
    pub blocks: Vec<RoomBlock>,
    pub rate_plans: Vec<RatePlan>,
    pub mappings: Vec<ChannelMapping>,
}

/// Tunables for one aggregation run.
pub struct AggregationPolicy {
    /// Per-day sellable cap; defaults to [`SELLABLE_CEILING`].
    pub sellable_ceiling: u32,
    /// Last-resort price when a room has no usable static price and no plan
    /// or base price applies.
    pub fallback_price: Price,
    /// Which days count as weekend/holiday for the rate tie-break. Injected
    /// so holiday calendars can replace the Saturday/Sunday default.
    pub weekend: Box<dyn Fn(NaiveDate) -> bool + Send + Sync>,
}

impl Default for AggregationPolicy {
    fn default() -> Self {
        Self {
            sellable_ceiling: SELLABLE_CEILING,
            fallback_price: DEFAULT_NIGHTLY_PRICE,
            weekend: Box::new(calendar::is_weekend),
        }
    }
}

impl core::fmt::Debug for AggregationPolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AggregationPolicy")
            .field("sellable_ceiling", &self.sellable_ceiling)
            .field("fallback_price", &self.fallback_price)
            .finish_non_exhaustive()
    }
}

/// Build the canonical inventory lines for `[date_from, date_to]` inclusive.
///
/// Per day: sellable rooms that are neither occupied nor blocked are priced
/// (rate plan → base price → static/fallback) and grouped by room type name;
/// the representative price is the first resolved price for the type that
/// day (rooms of one type are fungible in price per day). Each group maps to
/// its external identifier — room-type mapping first, synthetic
/// `type:<name>` otherwise — and is capped at the policy ceiling.
///
/// Errors: an inverted range is a [`DomainError::Validation`]; a run that
/// produces zero lines is [`DomainError::NoAvailability`], a deliberate
/// signal so the distribution adapter never sends an empty sync payload.
#[tracing::instrument(skip_all, fields(property = %snapshot.property_id, %date_from, %date_to))]
pub fn build_inventory(
    snapshot: &PropertySnapshot,
    date_from: NaiveDate,
    date_to: NaiveDate,
    policy: &AggregationPolicy,
) -> DomainResult<Vec<InventoryLine>> {
    if date_from > date_to {
        return Err(DomainError::validation(format!(
            "date_from {date_from} is after date_to {date_to}"
        )));
    }

    let sellable: Vec<Room> = snapshot.rooms.iter().filter(|r| r.is_sellable()).cloned().collect();
    let grid = occupancy::resolve(&sellable, &snapshot.reservations, &snapshot.blocks, date_from, date_to);
    let types_by_name = RoomType::index_by_name(&snapshot.room_types);
    let mappings = MappingTable::from_rows(&snapshot.mappings);

    let mut lines: Vec<InventoryLine> = Vec::new();

    for day in calendar::days_inclusive(date_from, date_to) {
        let is_weekend = (policy.weekend)(day);

        // Free rooms grouped by type name; BTreeMap keeps output order
        // deterministic for identical input.
        let mut free_by_type: BTreeMap<&str, (u32, Price)> = BTreeMap::new();
        for room in &sellable {
            if !grid.is_free(room.id, day) {
                continue;
            }
            let room_type = types_by_name.get(room.type_name.as_str());
            let fallback = room.usable_static_price().unwrap_or(policy.fallback_price);
            let price = match room_type {
                Some(rt) => resolve_price(rt.id, day, is_weekend, &snapshot.rate_plans, rt.base_price, fallback),
                None => fallback,
            };
            free_by_type
                .entry(room.type_name.as_str())
                .and_modify(|(count, _)| *count += 1)
                .or_insert((1, price));
        }

        for (type_name, (count, price)) in free_by_type {
            let external_id = types_by_name
                .get(type_name)
                .and_then(|rt| mappings.external_for_room_type(rt.id))
                .map(str::to_string)
                .unwrap_or_else(|| MappingTable::synthetic_type_id(type_name));
            lines.push(InventoryLine {
                external_id,
                date: day,
                rooms_to_sell: count.min(policy.sellable_ceiling),
                price,
            });
        }
    }

    if lines.is_empty() {
        return Err(DomainError::no_availability());
    }

    tracing::debug!(lines = lines.len(), "inventory aggregated");
    Ok(lines)
}
