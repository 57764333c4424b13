//! `stayforge-distribution`
//!
//! **Responsibility:** mapping canonical inventory lines into
//! channel-specific request payloads (shape only) and interpreting the
//! transport collaborator's reply into a sync report.
//!
//! Transport itself — HTTP to the channel/GDS switch, auth, retries,
//! timeouts — belongs to the collaborator behind [`ChannelTransport`].

pub mod channel;
pub mod payload;
pub mod sync;

pub use channel::{Channel, GdsProvider};
pub use payload::{
    AirbnbCalendar, BookingAvailability, ChannelPayload, ExpediaAvailRate, ExportConfig,
    GdsInventory, export_for,
};
pub use sync::{ChannelTransport, SyncOutcome, SyncReport, TransportReply, dispatch};
