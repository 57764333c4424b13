//! `stayforge-property`
//!
//! **Responsibility:** the read-only property snapshot records the engine
//! computes over — rooms, room types, reservations and maintenance blocks.
//!
//! Everything here is data handed in by the persistence collaborator; this
//! crate never mutates it and owns no storage.

pub mod reservation;
pub mod room;

pub use reservation::{Reservation, ReservationStatus, RoomBlock};
pub use room::{Room, RoomStatus, RoomType};
