//! Bookings

use std::fmt;

use chrono::{DateTime, Utc};
use smallvec::SmallVec;
use tracing::debug;
use uuid::Uuid;

use crate::{
    dates::StayDates,
    guests::{Guest, GuestTempId},
    rooms::Room,
};

/// Externally stable correlation id for a reservation.
///
/// Generated once at booking construction and kept distinct from whatever
/// identifier the persistence layer assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReservationId(Uuid);

impl ReservationId {
    /// Generate a fresh reservation id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ReservationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A reservation of one room for a set of guests over a date range.
///
/// The guest set is bounded by the room's bed count and unique by guest
/// identity; all mutation goes through [`Booking::add_guest`],
/// [`Booking::remove_guest_by_id`] and [`Booking::clear_guests`].
#[derive(Debug)]
pub struct Booking<'a> {
    reservation_id: ReservationId,
    room: &'a Room,
    guests: SmallVec<[Guest; 4]>,
    dates: StayDates,
    created_time: Option<DateTime<Utc>>,
}

impl<'a> Booking<'a> {
    /// Create a booking for the given room, with no guests and an empty
    /// default stay.
    pub fn new(room: &'a Room) -> Self {
        Booking {
            reservation_id: ReservationId::new(),
            room,
            guests: SmallVec::new(),
            dates: StayDates::default(),
            created_time: None,
        }
    }

    /// The reservation correlation id.
    pub fn reservation_id(&self) -> ReservationId {
        self.reservation_id
    }

    /// The booked room.
    pub fn room(&self) -> &'a Room {
        self.room
    }

    /// The stay dates.
    pub fn dates(&self) -> StayDates {
        self.dates
    }

    /// Replace the stay dates.
    pub fn set_dates(&mut self, dates: StayDates) {
        self.dates = dates;
    }

    /// The time this booking was successfully paid for and persisted, if it
    /// has been.
    pub fn created_time(&self) -> Option<DateTime<Utc>> {
        self.created_time
    }

    /// Stamp the creation time. The caller supplies the clock.
    pub fn set_created_time(&mut self, created_time: DateTime<Utc>) {
        self.created_time = Some(created_time);
    }

    /// The guests on this booking.
    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    /// Add a guest only if the room has free beds.
    ///
    /// A full room swallows the add without signalling the caller; adding a
    /// guest already present by identity has no effect either way.
    pub fn add_guest(&mut self, guest: Guest) {
        if self.is_room_full() {
            debug!(
                reservation = %self.reservation_id,
                room = %self.room.room_number,
                "room is full, guest not added"
            );
            return;
        }

        if !self.guests.contains(&guest) {
            self.guests.push(guest);
        }
    }

    /// Remove the guest whose temporary correlation id matches, if any.
    ///
    /// Returns whether a guest was removed.
    pub fn remove_guest_by_id(&mut self, temp_id: GuestTempId) -> bool {
        let before = self.guests.len();
        self.guests.retain(|guest| guest.temp_id() != temp_id);

        self.guests.len() < before
    }

    /// Remove all guests.
    pub fn clear_guests(&mut self) {
        self.guests.clear();
    }

    /// Whether every bed in the room is taken.
    pub fn is_room_full(&self) -> bool {
        self.guests.len() >= self.room.beds
    }

    /// Whether any guest has been added.
    pub fn has_guests(&self) -> bool {
        !self.guests.is_empty()
    }

    /// Whether at least one guest is an adult.
    pub fn has_at_least_one_adult_guest(&self) -> bool {
        self.guests.iter().any(|guest| !guest.is_child())
    }
}

/// Bookings compare by reservation id, matching how the surrounding service
/// correlates them.
impl PartialEq for Booking<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.reservation_id == other.reservation_id
    }
}

impl Eq for Booking<'_> {}
