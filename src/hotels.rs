//! Hotels

use rusty_money::{Money, iso::Currency};
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Hotel Key
    pub struct HotelKey;
}

/// Street address of a hotel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    /// Street and number
    pub street: String,

    /// Suburb or city
    pub suburb: String,

    /// State or territory
    pub state: String,

    /// Postal code
    pub postcode: String,
}

impl Address {
    /// Create a new address.
    pub fn new(
        street: impl Into<String>,
        suburb: impl Into<String>,
        state: impl Into<String>,
        postcode: impl Into<String>,
    ) -> Self {
        Address {
            street: street.into(),
            suburb: suburb.into(),
            state: state.into(),
            postcode: postcode.into(),
        }
    }
}

/// A hotel owning zero or more rooms.
#[derive(Debug, Clone)]
pub struct Hotel {
    /// Hotel name
    pub name: String,

    /// Street address
    pub address: Address,

    /// Star rating
    pub stars: u8,

    /// Contact email address
    pub contact_email: String,

    /// Fee charged for the late checkout option, unless waived by room type
    pub late_checkout_fee: Money<'static, Currency>,
}

/// Read-only association lookup for hotels.
///
/// Rooms reference their owning hotel by [`HotelKey`]; pricing resolves the
/// key through this directory rather than holding a back-pointer into the
/// hotel entity.
#[derive(Debug, Default)]
pub struct HotelDirectory {
    hotels: SlotMap<HotelKey, Hotel>,
}

impl HotelDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hotel and return its key.
    pub fn insert(&mut self, hotel: Hotel) -> HotelKey {
        self.hotels.insert(hotel)
    }

    /// Look up a hotel by key.
    pub fn get(&self, key: HotelKey) -> Option<&Hotel> {
        self.hotels.get(key)
    }

    /// Iterate over all registered hotels.
    pub fn iter(&self) -> impl Iterator<Item = (HotelKey, &Hotel)> {
        self.hotels.iter()
    }

    /// Number of registered hotels.
    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    /// Check whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }

    /// Find hotels by location, matching case-insensitively.
    ///
    /// Each criterion is optional; a `None` matches every hotel.
    pub fn find_by_location<'s>(
        &'s self,
        state: Option<&'s str>,
        suburb: Option<&'s str>,
        postcode: Option<&'s str>,
    ) -> impl Iterator<Item = (HotelKey, &'s Hotel)> {
        self.hotels.iter().filter(move |(_, hotel)| {
            matches_criterion(&hotel.address.state, state)
                && matches_criterion(&hotel.address.suburb, suburb)
                && matches_criterion(&hotel.address.postcode, postcode)
        })
    }
}

fn matches_criterion(value: &str, criterion: Option<&str>) -> bool {
    criterion.is_none_or(|wanted| value.eq_ignore_ascii_case(wanted))
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;

    use super::*;

    fn royal_hotel() -> Hotel {
        Hotel {
            name: "Royal Hotel".to_string(),
            address: Address::new("166 Albert Road", "Melbourne", "VIC", "3000"),
            stars: 4,
            contact_email: "royal@hotel.com".to_string(),
            late_checkout_fee: Money::from_minor(2050, iso::USD),
        }
    }

    fn xavier_hotel() -> Hotel {
        Hotel {
            name: "Xavier Hotel".to_string(),
            address: Address::new("100 Smith Road", "Brisbane", "QLD", "4000"),
            stars: 3,
            contact_email: "xavier@hotel.com".to_string(),
            late_checkout_fee: Money::from_minor(1500, iso::USD),
        }
    }

    #[test]
    fn get_returns_registered_hotel() {
        let mut directory = HotelDirectory::new();
        let key = directory.insert(royal_hotel());

        assert_eq!(
            directory.get(key).map(|hotel| hotel.name.as_str()),
            Some("Royal Hotel")
        );
    }

    #[test]
    fn find_by_location_matches_case_insensitively() {
        let mut directory = HotelDirectory::new();
        let royal = directory.insert(royal_hotel());
        directory.insert(xavier_hotel());

        let found: Vec<HotelKey> = directory
            .find_by_location(Some("vic"), Some("MELBOURNE"), None)
            .map(|(key, _)| key)
            .collect();

        assert_eq!(found, vec![royal]);
    }

    #[test]
    fn find_by_location_without_criteria_matches_all() {
        let mut directory = HotelDirectory::new();
        directory.insert(royal_hotel());
        directory.insert(xavier_hotel());

        assert_eq!(directory.find_by_location(None, None, None).count(), 2);
    }

    #[test]
    fn find_by_location_rejects_wrong_postcode() {
        let mut directory = HotelDirectory::new();
        directory.insert(royal_hotel());

        assert_eq!(
            directory.find_by_location(None, None, Some("4000")).count(),
            0
        );
    }
}
