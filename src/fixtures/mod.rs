//! Fixtures
//!
//! YAML-defined hotel and room sets for demos and tests, loaded from
//! `fixtures/<set>/` by default.

use std::{fs, path::PathBuf};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{AUD, Currency, EUR, GBP, USD},
};
use thiserror::Error;

use crate::{
    hotels::{HotelDirectory, HotelKey},
    rooms::{Room, RoomInventory, RoomKey},
};

pub mod hotels;
pub mod rooms;

use hotels::HotelsFixture;
use rooms::RoomsFixture;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Unknown room type name
    #[error("Unknown room type: {0}")]
    UnknownRoomType(String),

    /// A room references a hotel key missing from the hotels file
    #[error("Room references unknown hotel: {0}")]
    UnknownHotel(String),

    /// Hotel not found by fixture key
    #[error("Hotel not found: {0}")]
    HotelNotFound(String),

    /// Room not found by fixture key
    #[error("Room not found: {0}")]
    RoomNotFound(String),

    /// Currency mismatch between fixture entries
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),
}

/// A loaded fixture set: a hotel directory and a room inventory, addressable
/// by the string keys used in the YAML files.
#[derive(Debug, Default)]
pub struct Fixture {
    hotels: HotelDirectory,
    hotel_keys: FxHashMap<String, HotelKey>,
    rooms: RoomInventory,
    room_keys: FxHashMap<String, RoomKey>,
    currency: Option<&'static Currency>,
}

impl Fixture {
    /// Load the named fixture set from `./fixtures/<name>/`.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if a file cannot be read or parsed.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_dir(PathBuf::from("./fixtures").join(name))
    }

    /// Load a fixture set from a directory containing `hotels.yaml` and
    /// `rooms.yaml`.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if a file cannot be read or parsed.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Result<Self, FixtureError> {
        let dir = dir.into();
        let hotels_yaml = fs::read_to_string(dir.join("hotels.yaml"))?;
        let rooms_yaml = fs::read_to_string(dir.join("rooms.yaml"))?;

        Self::from_yaml(&hotels_yaml, &rooms_yaml)
    }

    /// Build a fixture set from YAML strings.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if parsing fails, a room references an
    /// unknown hotel, or entries mix currencies.
    pub fn from_yaml(hotels_yaml: &str, rooms_yaml: &str) -> Result<Self, FixtureError> {
        let hotels_fixture: HotelsFixture = serde_norway::from_str(hotels_yaml)?;
        let rooms_fixture: RoomsFixture = serde_norway::from_str(rooms_yaml)?;

        let mut fixture = Fixture::default();

        for (key, hotel_fixture) in hotels_fixture.hotels {
            let hotel = hotel_fixture.try_into_hotel()?;
            fixture.note_currency(hotel.late_checkout_fee.currency())?;

            let hotel_key = fixture.hotels.insert(hotel);
            fixture.hotel_keys.insert(key, hotel_key);
        }

        for (number, room_fixture) in rooms_fixture.rooms {
            let room = room_fixture.try_into_room(&number, &fixture.hotel_keys)?;
            fixture.note_currency(room.cost_per_night.currency())?;

            let room_key = fixture.rooms.insert(room);
            fixture.room_keys.insert(number, room_key);
        }

        Ok(fixture)
    }

    /// The loaded hotel directory.
    pub fn hotels(&self) -> &HotelDirectory {
        &self.hotels
    }

    /// The loaded room inventory.
    pub fn rooms(&self) -> &RoomInventory {
        &self.rooms
    }

    /// The single currency every entry in the set uses, if any entries were
    /// loaded.
    pub fn currency(&self) -> Option<&'static Currency> {
        self.currency
    }

    /// Resolve a hotel by its fixture key.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::HotelNotFound`] for an unknown key.
    pub fn hotel_key(&self, key: &str) -> Result<HotelKey, FixtureError> {
        self.hotel_keys
            .get(key)
            .copied()
            .ok_or_else(|| FixtureError::HotelNotFound(key.to_string()))
    }

    /// Resolve a room by its fixture key (the room number).
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::RoomNotFound`] for an unknown key.
    pub fn room(&self, number: &str) -> Result<&Room, FixtureError> {
        self.room_keys
            .get(number)
            .and_then(|key| self.rooms.get(*key))
            .ok_or_else(|| FixtureError::RoomNotFound(number.to_string()))
    }

    fn note_currency(&mut self, currency: &'static Currency) -> Result<(), FixtureError> {
        match self.currency {
            None => {
                self.currency = Some(currency);
                Ok(())
            }
            Some(expected) if expected == currency => Ok(()),
            Some(expected) => Err(FixtureError::CurrencyMismatch(
                expected.iso_alpha_code.to_string(),
                currency.iso_alpha_code.to_string(),
            )),
        }
    }
}

/// Parse a price string (e.g., "23.80 AUD") into [`Money`].
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code is
/// not recognized.
pub fn parse_price(s: &str) -> Result<Money<'static, Currency>, FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "AUD" => AUD,
        "EUR" => EUR,
        "GBP" => GBP,
        "USD" => USD,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok(Money::from_minor(minor_units, currency))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const HOTELS_YAML: &str = r"
hotels:
  royal:
    name: Royal Hotel
    street: 166 Albert Road
    suburb: Melbourne
    state: VIC
    postcode: '3000'
    stars: 4
    contact_email: royal@hotel.com
    late_checkout_fee: 20.50 AUD
";

    const ROOMS_YAML: &str = r"
rooms:
  '101':
    hotel: royal
    room_type: Economy
    beds: 2
    cost_per_night: 23.80 AUD
  '201':
    hotel: royal
    room_type: Luxury
    beds: 4
    cost_per_night: 150.00 AUD
";

    #[test]
    fn parse_price_reads_amount_and_currency() -> TestResult {
        let price = parse_price("23.80 AUD")?;

        assert_eq!(price, Money::from_minor(2380, AUD));

        Ok(())
    }

    #[test]
    fn parse_price_rejects_invalid_format() {
        let result = parse_price("23.80AUD");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("23.80 ABC");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn from_yaml_links_rooms_to_hotels() -> TestResult {
        let fixture = Fixture::from_yaml(HOTELS_YAML, ROOMS_YAML)?;

        let hotel_key = fixture.hotel_key("royal")?;
        let room = fixture.room("101")?;

        assert_eq!(room.hotel, hotel_key);
        assert_eq!(fixture.hotels().len(), 1);
        assert_eq!(fixture.rooms().len(), 2);
        assert_eq!(fixture.currency(), Some(AUD));

        Ok(())
    }

    #[test]
    fn from_yaml_rejects_unknown_hotel_reference() {
        let rooms = r"
rooms:
  '101':
    hotel: phantom
    room_type: Economy
    beds: 2
    cost_per_night: 23.80 AUD
";

        let result = Fixture::from_yaml(HOTELS_YAML, rooms);

        assert!(
            matches!(result, Err(FixtureError::UnknownHotel(name)) if name == "phantom"),
            "expected UnknownHotel"
        );
    }

    #[test]
    fn from_yaml_rejects_mixed_currencies() {
        let rooms = r"
rooms:
  '101':
    hotel: royal
    room_type: Economy
    beds: 2
    cost_per_night: 23.80 USD
";

        let result = Fixture::from_yaml(HOTELS_YAML, rooms);

        assert!(
            matches!(
                result,
                Err(FixtureError::CurrencyMismatch(expected, found))
                    if expected == "AUD" && found == "USD"
            ),
            "expected CurrencyMismatch"
        );
    }

    #[test]
    fn unknown_room_key_is_not_found() -> TestResult {
        let fixture = Fixture::from_yaml(HOTELS_YAML, ROOMS_YAML)?;

        assert!(
            matches!(fixture.room("999"), Err(FixtureError::RoomNotFound(n)) if n == "999"),
            "expected RoomNotFound"
        );

        Ok(())
    }

    #[test]
    fn from_dir_reads_fixture_files() -> TestResult {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("hotels.yaml"), HOTELS_YAML)?;
        std::fs::write(dir.path().join("rooms.yaml"), ROOMS_YAML)?;

        let fixture = Fixture::from_dir(dir.path())?;

        assert_eq!(fixture.rooms().len(), 2);

        Ok(())
    }

    #[test]
    fn from_dir_missing_file_is_an_io_error() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };

        let result = Fixture::from_dir(dir.path());

        assert!(matches!(result, Err(FixtureError::Io(_))), "expected Io");
    }
}
