//! `stayforge-occupancy`
//!
//! **Responsibility:** per-(room, day) occupancy state over a date window —
//! free, occupied by a guest stay, or blocked for maintenance — plus the
//! whole-range availability summary used by external availability queries.

pub mod resolver;
pub mod summary;

pub use resolver::{OccupancyGrid, OccupancyState, resolve};
pub use summary::{RangeAvailability, range_availability};
