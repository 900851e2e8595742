//! Hotel Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, parse_price},
    hotels::{Address, Hotel},
};

/// Wrapper for hotels in YAML
#[derive(Debug, Deserialize)]
pub struct HotelsFixture {
    /// Map of fixture key -> hotel fixture
    pub hotels: FxHashMap<String, HotelFixture>,
}

/// Hotel Fixture
#[derive(Debug, Deserialize)]
pub struct HotelFixture {
    /// Hotel name
    pub name: String,

    /// Street and number
    pub street: String,

    /// Suburb or city
    pub suburb: String,

    /// State or territory
    pub state: String,

    /// Postal code
    pub postcode: String,

    /// Star rating
    pub stars: u8,

    /// Contact email address
    pub contact_email: String,

    /// Late checkout fee (e.g., "20.50 AUD")
    pub late_checkout_fee: String,
}

impl HotelFixture {
    /// Convert into a [`Hotel`], parsing the fee price string.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the fee cannot be parsed.
    pub fn try_into_hotel(self) -> Result<Hotel, FixtureError> {
        let late_checkout_fee = parse_price(&self.late_checkout_fee)?;

        Ok(Hotel {
            name: self.name,
            address: Address::new(self.street, self.suburb, self.state, self.postcode),
            stars: self.stars,
            contact_email: self.contact_email,
            late_checkout_fee,
        })
    }
}
