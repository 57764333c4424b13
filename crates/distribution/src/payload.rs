//! Channel payload construction.
//!
//! Pure mapping from canonical [`InventoryLine`]s to each channel's request
//! body. Every line maps to exactly one output record; field names and units
//! follow each channel's wire contract.

use chrono::NaiveDate;
use serde::Serialize;

use stayforge_core::calendar::date_str;
use stayforge_inventory::{InventoryLine, SELLABLE_CEILING};

use crate::channel::{Channel, GdsProvider};

/// Per-channel configuration supplied by the caller: how the property and
/// its rate identify themselves on the channel side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// The property's identifier on the channel (hotel id, listing id...).
    pub external_property_id: String,
    /// ISO currency code attached to priced rows.
    pub currency_code: String,
    /// Channel-side rate identifier attached to every row where the channel
    /// requires one (Booking.com rate id, Expedia rate plan id).
    pub rate_id: String,
}

/// One Booking.com B.XML availability row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRow {
    pub room_id: String,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub rate_id: String,
    pub rooms_to_sell: u32,
    /// Two-decimal rendering of the nightly price.
    pub price: String,
    pub currency_code: String,
}

/// Booking.com B.XML availability request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingAvailability {
    pub rows: Vec<BookingRow>,
}

impl BookingAvailability {
    /// Render the `<request>` body: room / date / currencycode, rate, price,
    /// roomstosell, closed.
    pub fn to_xml(&self) -> String {
        let mut lines: Vec<String> = vec!["<request>".to_string()];
        for row in &self.rows {
            // The channel field is a single byte: clamp regardless of what
            // the aggregation policy allowed.
            let rooms_to_sell = row.rooms_to_sell.min(SELLABLE_CEILING);
            lines.push(format!("  <room id=\"{}\">", escape_xml(&row.room_id)));
            lines.push(format!(
                "    <date from=\"{}\" to=\"{}\">",
                date_str(row.date_from),
                date_str(row.date_to)
            ));
            lines.push(format!(
                "      <currencycode>{}</currencycode>",
                escape_xml(&row.currency_code)
            ));
            lines.push(format!("      <rate id=\"{}\"/>", escape_xml(&row.rate_id)));
            lines.push(format!("      <price>{}</price>", row.price));
            lines.push(format!("      <roomstosell>{rooms_to_sell}</roomstosell>"));
            lines.push("      <closed>0</closed>".to_string());
            lines.push("    </date>".to_string());
            lines.push("  </room>".to_string());
        }
        lines.push("</request>".to_string());
        lines.join("\n")
    }
}

/// One Airbnb calendar-availability entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirbnbDay {
    pub date: NaiveDate,
    pub available: bool,
    pub price: AirbnbPrice,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirbnbPrice {
    pub amount: f64,
    pub currency: String,
}

/// Airbnb calendar-availability request (JSON).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirbnbCalendar {
    pub listing_id: String,
    pub availability: Vec<AirbnbDay>,
}

/// One Expedia EQC AvailRateUpdate row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpediaRow {
    pub room_type_id: String,
    pub rate_plan_id: String,
    pub date: NaiveDate,
    pub inventory: u32,
    /// Two-decimal rendering of the rate.
    pub rate: String,
}

const EXPEDIA_AR_NS: &str = "http://www.expediaconnect.com/EQC/AR/2007/02";

/// Expedia EQC `AvailRateUpdateRQ` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpediaAvailRate {
    pub property_id: String,
    pub rows: Vec<ExpediaRow>,
}

impl ExpediaAvailRate {
    pub fn to_xml(&self) -> String {
        let mut lines: Vec<String> = vec![
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>".to_string(),
            format!("<AvailRateUpdateRQ xmlns=\"{EXPEDIA_AR_NS}\">"),
            format!("  <AvailRateUpdate propertyId=\"{}\">", escape_xml(&self.property_id)),
        ];
        for row in &self.rows {
            lines.push(format!("    <RoomType id=\"{}\">", escape_xml(&row.room_type_id)));
            lines.push(format!("      <RatePlan id=\"{}\">", escape_xml(&row.rate_plan_id)));
            lines.push(format!("        <DateRange date=\"{}\" />", date_str(row.date)));
            lines.push(format!("        <Inventory>{}</Inventory>", row.inventory));
            lines.push(format!("        <Rate>{}</Rate>", row.rate));
            lines.push("      </RatePlan>".to_string());
            lines.push("    </RoomType>".to_string());
        }
        lines.push("  </AvailRateUpdate>".to_string());
        lines.push("</AvailRateUpdateRQ>".to_string());
        lines.join("\n")
    }
}

/// GDS switch request: the canonical line-item form, channel-agnostic.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GdsInventory {
    pub provider: GdsProvider,
    pub property_id: String,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub inventory: Vec<GdsItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GdsItem {
    pub room_id: String,
    pub date: NaiveDate,
    pub rooms_to_sell: u32,
    pub price: f64,
}

/// A constructed channel request body.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelPayload {
    Booking(BookingAvailability),
    Airbnb(AirbnbCalendar),
    Expedia(ExpediaAvailRate),
    Gds(GdsInventory),
}

impl ChannelPayload {
    /// Serialized request body for the transport collaborator.
    pub fn body(&self) -> String {
        match self {
            ChannelPayload::Booking(p) => p.to_xml(),
            ChannelPayload::Expedia(p) => p.to_xml(),
            ChannelPayload::Airbnb(p) => {
                serde_json::to_string(p).expect("airbnb payload serializes")
            }
            ChannelPayload::Gds(p) => serde_json::to_string(p).expect("gds payload serializes"),
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ChannelPayload::Booking(_) | ChannelPayload::Expedia(_) => "application/xml",
            ChannelPayload::Airbnb(_) | ChannelPayload::Gds(_) => "application/json",
        }
    }

    /// Number of per-line records in the payload.
    pub fn record_count(&self) -> usize {
        match self {
            ChannelPayload::Booking(p) => p.rows.len(),
            ChannelPayload::Airbnb(p) => p.availability.len(),
            ChannelPayload::Expedia(p) => p.rows.len(),
            ChannelPayload::Gds(p) => p.inventory.len(),
        }
    }
}

/// Map inventory lines to a channel-specific payload, one record per line.
pub fn export_for(
    channel: Channel,
    config: &ExportConfig,
    date_from: NaiveDate,
    date_to: NaiveDate,
    lines: &[InventoryLine],
) -> ChannelPayload {
    match channel {
        Channel::BookingCom => ChannelPayload::Booking(BookingAvailability {
            rows: lines
                .iter()
                .map(|line| BookingRow {
                    room_id: line.external_id.clone(),
                    date_from: line.date,
                    date_to: line.date,
                    rate_id: config.rate_id.clone(),
                    rooms_to_sell: line.rooms_to_sell,
                    price: line.price.to_string(),
                    currency_code: config.currency_code.clone(),
                })
                .collect(),
        }),
        Channel::Airbnb => ChannelPayload::Airbnb(AirbnbCalendar {
            listing_id: config.external_property_id.clone(),
            availability: lines
                .iter()
                .map(|line| AirbnbDay {
                    date: line.date,
                    // Zero-count lines never leave the aggregator.
                    available: line.rooms_to_sell > 0,
                    price: AirbnbPrice {
                        amount: line.price.as_major_f64(),
                        currency: config.currency_code.clone(),
                    },
                })
                .collect(),
        }),
        Channel::Expedia => ChannelPayload::Expedia(ExpediaAvailRate {
            property_id: config.external_property_id.clone(),
            rows: lines
                .iter()
                .map(|line| ExpediaRow {
                    room_type_id: line.external_id.clone(),
                    rate_plan_id: config.rate_id.clone(),
                    date: line.date,
                    inventory: line.rooms_to_sell,
                    rate: line.price.to_string(),
                })
                .collect(),
        }),
        Channel::Gds(provider) => ChannelPayload::Gds(GdsInventory {
            provider,
            property_id: config.external_property_id.clone(),
            date_from,
            date_to,
            inventory: lines
                .iter()
                .map(|line| GdsItem {
                    room_id: line.external_id.clone(),
                    date: line.date,
                    rooms_to_sell: line.rooms_to_sell,
                    price: line.price.as_major_f64(),
                })
                .collect(),
        }),
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use stayforge_core::Price;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn config() -> ExportConfig {
        ExportConfig {
            external_property_id: "HOTEL-77".to_string(),
            currency_code: "EUR".to_string(),
            rate_id: "42".to_string(),
        }
    }

    fn line(external_id: &str, date: &str, count: u32, price_major: u64) -> InventoryLine {
        InventoryLine {
            external_id: external_id.to_string(),
            date: d(date),
            rooms_to_sell: count,
            price: Price::from_major(price_major),
        }
    }

    #[test]
    fn booking_xml_matches_the_wire_shape() {
        let payload = export_for(
            Channel::BookingCom,
            &config(),
            d("2026-02-10"),
            d("2026-02-10"),
            &[line("1001", "2026-02-10", 3, 550)],
        );
        let xml = payload.body();
        let expected = "<request>\n  <room id=\"1001\">\n    <date from=\"2026-02-10\" to=\"2026-02-10\">\n      <currencycode>EUR</currencycode>\n      <rate id=\"42\"/>\n      <price>550.00</price>\n      <roomstosell>3</roomstosell>\n      <closed>0</closed>\n    </date>\n  </room>\n</request>";
        assert_eq!(xml, expected);
        assert_eq!(payload.content_type(), "application/xml");
    }

    #[test]
    fn booking_xml_clamps_counts_to_the_protocol_byte() {
        let payload = ChannelPayload::Booking(BookingAvailability {
            rows: vec![BookingRow {
                room_id: "1001".to_string(),
                date_from: d("2026-02-10"),
                date_to: d("2026-02-10"),
                rate_id: "42".to_string(),
                rooms_to_sell: 400,
                price: "100.00".to_string(),
                currency_code: "EUR".to_string(),
            }],
        });
        assert!(payload.body().contains("<roomstosell>254</roomstosell>"));
    }

    #[test]
    fn xml_special_characters_are_escaped() {
        let payload = export_for(
            Channel::BookingCom,
            &config(),
            d("2026-02-10"),
            d("2026-02-10"),
            &[line("type:B&B \"Deluxe\"", "2026-02-10", 1, 90)],
        );
        let xml = payload.body();
        assert!(xml.contains("type:B&amp;B &quot;Deluxe&quot;"));
        assert!(!xml.contains("B&B"));
    }

    #[test]
    fn expedia_xml_carries_namespace_and_rows() {
        let payload = export_for(
            Channel::Expedia,
            &config(),
            d("2026-02-10"),
            d("2026-02-10"),
            &[line("SUITE", "2026-02-10", 2, 550)],
        );
        let xml = payload.body();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<AvailRateUpdateRQ xmlns=\"http://www.expediaconnect.com/EQC/AR/2007/02\">"));
        assert!(xml.contains("<AvailRateUpdate propertyId=\"HOTEL-77\">"));
        assert!(xml.contains("<RoomType id=\"SUITE\">"));
        assert!(xml.contains("<RatePlan id=\"42\">"));
        assert!(xml.contains("<DateRange date=\"2026-02-10\" />"));
        assert!(xml.contains("<Inventory>2</Inventory>"));
        assert!(xml.contains("<Rate>550.00</Rate>"));
    }

    #[test]
    fn gds_json_uses_camel_case_line_items() {
        let payload = export_for(
            Channel::Gds(GdsProvider::Amadeus),
            &config(),
            d("2026-02-10"),
            d("2026-02-12"),
            &[line("type:Queen", "2026-02-10", 3, 300)],
        );
        let json: serde_json::Value = serde_json::from_str(&payload.body()).unwrap();
        assert_eq!(json["provider"], "amadeus");
        assert_eq!(json["propertyId"], "HOTEL-77");
        assert_eq!(json["dateFrom"], "2026-02-10");
        assert_eq!(json["dateTo"], "2026-02-12");
        assert_eq!(json["inventory"][0]["roomId"], "type:Queen");
        assert_eq!(json["inventory"][0]["roomsToSell"], 3);
        assert_eq!(json["inventory"][0]["price"], 300.0);
        assert_eq!(payload.content_type(), "application/json");
    }

    #[test]
    fn airbnb_calendar_marks_each_day_available_with_price() {
        let payload = export_for(
            Channel::Airbnb,
            &config(),
            d("2026-02-10"),
            d("2026-02-11"),
            &[line("L1", "2026-02-10", 1, 120), line("L1", "2026-02-11", 2, 130)],
        );
        let json: serde_json::Value = serde_json::from_str(&payload.body()).unwrap();
        assert_eq!(json["listing_id"], "HOTEL-77");
        assert_eq!(json["availability"][0]["available"], true);
        assert_eq!(json["availability"][1]["price"]["amount"], 130.0);
        assert_eq!(json["availability"][1]["price"]["currency"], "EUR");
    }

    proptest! {
        /// Property: every channel maps each inventory line to exactly one
        /// output record.
        #[test]
        fn every_line_maps_to_exactly_one_record(
            counts in prop::collection::vec((1u32..300, 50u64..900), 0..20)
        ) {
            let lines: Vec<InventoryLine> = counts
                .iter()
                .enumerate()
                .map(|(i, (count, price))| line(
                    &format!("room-{i}"),
                    "2026-02-10",
                    *count,
                    *price,
                ))
                .collect();
            let cfg = config();
            for channel in [
                Channel::BookingCom,
                Channel::Airbnb,
                Channel::Expedia,
                Channel::Gds(GdsProvider::Travelport),
            ] {
                let payload = export_for(channel, &cfg, d("2026-02-10"), d("2026-02-10"), &lines);
                prop_assert_eq!(payload.record_count(), lines.len());
            }
        }
    }
}
