use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use stayforge_core::{Price, RoomId, RoomTypeId};

/// Operational/housekeeping status of a room.
///
/// Mutated by housekeeping and maintenance collaborators; read-only here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Clean,
    Dirty,
    OutOfOrder,
    Inspection,
    Inspected,
    CheckoutPending,
    Maintenance,
}

impl RoomStatus {
    /// Whether housekeeping state allows the room to be offered for sale.
    ///
    /// Only rooms that are clean or have passed inspection go out to
    /// distribution channels.
    pub fn saleable(&self) -> bool {
        matches!(self, RoomStatus::Clean | RoomStatus::Inspected)
    }
}

/// A physical room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    /// Door number, e.g. "101".
    pub number: String,
    /// Free-text room type association; a matching [`RoomType`] record may or
    /// may not exist (absent ⇒ fall back to this room's static price).
    pub type_name: String,
    /// Commercial flag: the room participates in sales at all.
    pub active_for_sale: bool,
    pub status: RoomStatus,
    /// Optional static nightly price, used when no rate plan or base price
    /// applies.
    pub price: Option<Price>,
}

impl Room {
    /// Sellable = commercially active AND housekeeping-saleable.
    pub fn is_sellable(&self) -> bool {
        self.active_for_sale && self.status.saleable()
    }

    /// Static price, treating an explicit zero as "not set".
    pub fn usable_static_price(&self) -> Option<Price> {
        self.price.filter(|p| !p.is_zero())
    }
}

/// A room type record.
///
/// Rooms reference a type by name, not by id — the association is a
/// real-world data-quality constraint, preserved as an explicit
/// lookup-by-name with a documented no-match fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomType {
    pub id: RoomTypeId,
    pub name: String,
    pub base_price: Option<Price>,
}

impl RoomType {
    /// Exact-name lookup index. No trim/case-fold: normalization would
    /// silently merge types the source system distinguishes.
    pub fn index_by_name(types: &[RoomType]) -> HashMap<&str, &RoomType> {
        types.iter().map(|t| (t.name.as_str(), t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(status: RoomStatus, active: bool) -> Room {
        Room {
            id: RoomId::new(),
            number: "101".to_string(),
            type_name: "Queen".to_string(),
            active_for_sale: active,
            status,
            price: None,
        }
    }

    #[test]
    fn only_clean_or_inspected_active_rooms_are_sellable() {
        assert!(room(RoomStatus::Clean, true).is_sellable());
        assert!(room(RoomStatus::Inspected, true).is_sellable());
        assert!(!room(RoomStatus::Dirty, true).is_sellable());
        assert!(!room(RoomStatus::OutOfOrder, true).is_sellable());
        assert!(!room(RoomStatus::Maintenance, true).is_sellable());
        assert!(!room(RoomStatus::Clean, false).is_sellable());
    }

    #[test]
    fn zero_static_price_counts_as_unset() {
        let mut r = room(RoomStatus::Clean, true);
        r.price = Some(Price::ZERO);
        assert_eq!(r.usable_static_price(), None);
        r.price = Some(Price::from_major(80));
        assert_eq!(r.usable_static_price(), Some(Price::from_major(80)));
    }

    #[test]
    fn type_lookup_is_exact_match() {
        let types = vec![RoomType {
            id: RoomTypeId::new(),
            name: "Queen".to_string(),
            base_price: Some(Price::from_major(300)),
        }];
        let index = RoomType::index_by_name(&types);
        assert!(index.contains_key("Queen"));
        assert!(!index.contains_key("queen"));
        assert!(!index.contains_key("Queen "));
    }
}
