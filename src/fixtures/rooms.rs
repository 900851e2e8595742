//! Room Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, parse_price},
    hotels::HotelKey,
    rooms::{Room, RoomType},
};

/// Wrapper for rooms in YAML
#[derive(Debug, Deserialize)]
pub struct RoomsFixture {
    /// Map of room number -> room fixture
    pub rooms: FxHashMap<String, RoomFixture>,
}

/// Room Fixture
#[derive(Debug, Deserialize)]
pub struct RoomFixture {
    /// Fixture key of the owning hotel
    pub hotel: String,

    /// Room type name (e.g., "Economy")
    pub room_type: String,

    /// Number of beds
    pub beds: usize,

    /// Cost per night (e.g., "23.80 AUD")
    pub cost_per_night: String,
}

impl RoomFixture {
    /// Convert into a [`Room`], resolving the hotel reference against the
    /// already-loaded hotel keys.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the hotel reference, room type or price
    /// is invalid.
    pub fn try_into_room(
        self,
        number: &str,
        hotel_keys: &FxHashMap<String, HotelKey>,
    ) -> Result<Room, FixtureError> {
        let hotel = hotel_keys
            .get(&self.hotel)
            .copied()
            .ok_or(FixtureError::UnknownHotel(self.hotel))?;

        let room_type = parse_room_type(&self.room_type)?;
        let cost_per_night = parse_price(&self.cost_per_night)?;

        Ok(Room {
            room_number: number.to_string(),
            room_type,
            beds: self.beds,
            cost_per_night,
            hotel,
        })
    }
}

/// Parse a room type name.
///
/// Every name is matched explicitly; there is no fallback type.
///
/// # Errors
///
/// Returns [`FixtureError::UnknownRoomType`] for an unrecognized name.
pub fn parse_room_type(name: &str) -> Result<RoomType, FixtureError> {
    match name {
        "Economy" => Ok(RoomType::Economy),
        "Balcony" => Ok(RoomType::Balcony),
        "Business" => Ok(RoomType::Business),
        "Luxury" => Ok(RoomType::Luxury),
        other => Err(FixtureError::UnknownRoomType(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use slotmap::SlotMap;

    use super::*;

    #[test]
    fn parse_room_type_knows_every_variant() {
        for (name, expected) in [
            ("Economy", RoomType::Economy),
            ("Balcony", RoomType::Balcony),
            ("Business", RoomType::Business),
            ("Luxury", RoomType::Luxury),
        ] {
            assert!(
                matches!(parse_room_type(name), Ok(parsed) if parsed == expected),
                "failed to parse {name}"
            );
        }
    }

    #[test]
    fn parse_room_type_rejects_unknown_names() {
        let result = parse_room_type("Penthouse");

        assert!(matches!(result, Err(FixtureError::UnknownRoomType(name)) if name == "Penthouse"));
    }

    #[test]
    fn unknown_hotel_reference_errors() {
        let mut keys: SlotMap<HotelKey, ()> = SlotMap::with_key();
        let mut hotel_keys = FxHashMap::default();
        hotel_keys.insert("royal".to_string(), keys.insert(()));

        let fixture = RoomFixture {
            hotel: "phantom".to_string(),
            room_type: "Economy".to_string(),
            beds: 2,
            cost_per_night: "23.80 AUD".to_string(),
        };

        let result = fixture.try_into_room("101", &hotel_keys);

        assert!(matches!(result, Err(FixtureError::UnknownHotel(name)) if name == "phantom"));
    }
}
