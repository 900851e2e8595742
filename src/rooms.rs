//! Rooms

use std::fmt;

use rustc_hash::FxHashSet;
use rusty_money::{Money, iso::Currency};
use slotmap::{SlotMap, new_key_type};

use crate::hotels::HotelKey;

new_key_type! {
    /// Room Key
    pub struct RoomKey;
}

/// The closed set of room types on offer.
///
/// Pricing dispatches exhaustively over this enum; adding a variant forces an
/// explicit classification decision at every match site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomType {
    /// Cheapest tier, no frills
    Economy,

    /// Economy room with a balcony
    Balcony,

    /// Mid tier, aimed at corporate stays
    Business,

    /// Top tier
    Luxury,
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoomType::Economy => "Economy",
            RoomType::Balcony => "Balcony",
            RoomType::Business => "Business",
            RoomType::Luxury => "Luxury",
        };

        f.write_str(name)
    }
}

/// A bookable hotel room.
#[derive(Debug, Clone)]
pub struct Room {
    /// Room number within the hotel
    pub room_number: String,

    /// Room type
    pub room_type: RoomType,

    /// Number of beds, which bounds the guest count of a booking
    pub beds: usize,

    /// Cost per night
    pub cost_per_night: Money<'static, Currency>,

    /// Owning hotel
    pub hotel: HotelKey,
}

/// Registry of rooms across all hotels.
#[derive(Debug, Default)]
pub struct RoomInventory {
    rooms: SlotMap<RoomKey, Room>,
}

impl RoomInventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a room and return its key.
    pub fn insert(&mut self, room: Room) -> RoomKey {
        self.rooms.insert(room)
    }

    /// Look up a room by key.
    pub fn get(&self, key: RoomKey) -> Option<&Room> {
        self.rooms.get(key)
    }

    /// Iterate over all registered rooms.
    pub fn iter(&self) -> impl Iterator<Item = (RoomKey, &Room)> {
        self.rooms.iter()
    }

    /// Number of registered rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Check whether the inventory is empty.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Rooms of the given hotel that are not in the booked set.
    ///
    /// The persistence layer owns the set of currently booked room keys;
    /// this only evaluates the availability predicate over it.
    pub fn available_rooms<'s>(
        &'s self,
        hotel: HotelKey,
        booked: &'s FxHashSet<RoomKey>,
    ) -> impl Iterator<Item = (RoomKey, &'s Room)> {
        self.rooms
            .iter()
            .filter(move |(key, room)| room.hotel == hotel && !booked.contains(key))
    }
}
