//! `stayforge-tapechart`
//!
//! **Responsibility:** the day-by-room occupancy visualization model — cell
//! state classification (arrival/stay/departure/changeover/gap), free-night
//! runs, and the aggregate daily occupancy heat strip.
//!
//! Everything is derived purely from reservation intervals and recomputed on
//! every render/query; nothing is stored.

pub mod cell;
pub mod overview;

pub use cell::{CellState, classify_cell, free_nights_from};
pub use overview::{DailyMovements, HeatLevel, daily_movements, daily_occupancy_ratio, heat_level};
