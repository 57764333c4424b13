//! `stayforge-inventory`
//!
//! **Responsibility:** the per-day sellable inventory aggregation — the
//! canonical line-item output consumed by both distribution export and
//! internal reporting — plus channel identifier mapping.

pub mod aggregator;
pub mod line;
pub mod mapping;

pub use aggregator::{AggregationPolicy, PropertySnapshot, SELLABLE_CEILING, build_inventory};
pub use line::InventoryLine;
pub use mapping::{ChannelMapping, MappingKind, MappingTable};
