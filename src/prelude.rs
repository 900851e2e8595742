//! Veranda prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    bookings::{Booking, ReservationId},
    dates::StayDates,
    fixtures::{Fixture, FixtureError},
    guests::{Guest, GuestTempId},
    hotels::{Address, Hotel, HotelDirectory, HotelKey},
    invoice::{Invoice, InvoiceLine},
    pricing::{
        ExtraTier, PricingError, TAX_RATE, chargeable_late_checkout_fee, extra_pricing_type,
        late_checkout_fee, taxable_amount, total_cost_excluding_tax, total_cost_including_tax,
        total_room_cost, total_room_cost_with_late_checkout_fee,
    },
    rooms::{Room, RoomInventory, RoomKey, RoomType},
};
