//! Sync dispatch and result interpretation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stayforge_inventory::InventoryLine;

use crate::channel::Channel;
use crate::payload::{ChannelPayload, ExportConfig, export_for};

/// What the transport collaborator reports back after delivering a payload.
///
/// HTTP status handling, retries and timeouts happen behind this boundary;
/// the engine only sees the collaborator's verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportReply {
    pub accepted: bool,
    pub message: String,
}

/// The transport collaborator: delivers one payload to one channel.
pub trait ChannelTransport {
    fn deliver(&self, channel: Channel, payload: &ChannelPayload) -> TransportReply;
}

/// Outcome of one sync batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SyncOutcome {
    Delivered { message: String },
    Rejected { error: String },
}

/// Per-batch sync report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    pub channel: Channel,
    pub lines_sent: usize,
    pub outcome: SyncOutcome,
}

impl SyncReport {
    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, SyncOutcome::Delivered { .. })
    }
}

/// Build the channel payload for `lines` and hand it to the transport,
/// interpreting its reply.
///
/// Callers obtain `lines` from the aggregator, which guarantees a non-empty
/// batch (an empty computation surfaces as `NoAvailability` there, precisely
/// so no empty sync payload is ever sent).
pub fn dispatch(
    channel: Channel,
    config: &ExportConfig,
    date_from: NaiveDate,
    date_to: NaiveDate,
    lines: &[InventoryLine],
    transport: &dyn ChannelTransport,
) -> SyncReport {
    let payload = export_for(channel, config, date_from, date_to, lines);
    let reply = transport.deliver(channel, &payload);

    let outcome = if reply.accepted {
        tracing::info!(%channel, lines = lines.len(), "inventory sync delivered");
        SyncOutcome::Delivered { message: reply.message }
    } else {
        tracing::warn!(%channel, error = %reply.message, "inventory sync rejected");
        SyncOutcome::Rejected { error: reply.message }
    };

    SyncReport {
        channel,
        lines_sent: lines.len(),
        outcome,
    }
}
