use serde::{Deserialize, Serialize};

/// GDS reached through a switch (DerbySoft/SiteMinder style).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GdsProvider {
    Amadeus,
    Sabre,
    Travelport,
}

impl GdsProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            GdsProvider::Amadeus => "amadeus",
            GdsProvider::Sabre => "sabre",
            GdsProvider::Travelport => "travelport",
        }
    }
}

/// A distribution channel the engine can build payloads for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    BookingCom,
    Airbnb,
    Expedia,
    Gds(GdsProvider),
}

impl core::fmt::Display for Channel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Channel::BookingCom => write!(f, "booking_com"),
            Channel::Airbnb => write!(f, "airbnb"),
            Channel::Expedia => write!(f, "expedia"),
            Channel::Gds(provider) => write!(f, "gds:{}", provider.as_str()),
        }
    }
}
