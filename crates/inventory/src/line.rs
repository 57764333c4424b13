//! The canonical inventory line.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stayforge_core::{Price, ValueObject};

/// One (sellable identifier, date, count, price) record — the engine's
/// canonical output unit, consumed by distribution export and internal
/// reporting alike.
///
/// Ephemeral: computed on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLine {
    /// External channel identifier for the room type (or the synthetic
    /// `type:<name>` fallback) — never an internal UUID.
    pub external_id: String,
    /// The night being sold, canonical `YYYY-MM-DD` when serialized.
    pub date: NaiveDate,
    /// Sellable room count, capped at the aggregation policy's ceiling.
    pub rooms_to_sell: u32,
    /// Representative nightly price for the room type that day.
    pub price: Price,
}

impl ValueObject for InventoryLine {}
