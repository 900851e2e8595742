//! Pricing
//!
//! The pricing operations over a [`Booking`]. Each sub-total is a distinct
//! named operation so invoices can itemize the breakdown.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{
    bookings::Booking,
    hotels::{HotelDirectory, HotelKey},
    rooms::{Room, RoomType},
};

/// Tax rate applied on top of the total cost excluding tax.
pub const TAX_RATE: Decimal = dec!(0.10);

/// Pricing classification for food and general extras.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraTier {
    /// Standard extras pricing
    Basic,

    /// Premium extras pricing
    Premium,
}

/// Errors that can occur while pricing a booking.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// The room references a hotel that is not in the supplied directory.
    #[error("hotel not registered in directory: {0:?}")]
    UnknownHotel(HotelKey),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// The [`ExtraTier`] to charge food and general extras at.
///
/// Every room type is classified explicitly; a new variant must pick a tier
/// here before the crate compiles again.
pub fn extra_pricing_type(room_type: RoomType) -> ExtraTier {
    match room_type {
        RoomType::Luxury | RoomType::Business => ExtraTier::Premium,
        RoomType::Balcony | RoomType::Economy => ExtraTier::Basic,
    }
}

/// The late checkout fee for a room, before considering whether late
/// checkout was requested.
///
/// Luxury and Business rooms waive the fee entirely; Balcony and Economy
/// rooms charge the owning hotel's configured fee. For the actual chargeable
/// amount, use [`chargeable_late_checkout_fee`].
///
/// # Errors
///
/// Returns [`PricingError::UnknownHotel`] if the room's hotel is not in the
/// directory.
pub fn late_checkout_fee(
    room: &Room,
    hotels: &HotelDirectory,
) -> Result<Money<'static, Currency>, PricingError> {
    match room.room_type {
        RoomType::Luxury | RoomType::Business => {
            Ok(Money::from_minor(0, room.cost_per_night.currency()))
        }
        RoomType::Balcony | RoomType::Economy => hotels
            .get(room.hotel)
            .map(|hotel| hotel.late_checkout_fee)
            .ok_or(PricingError::UnknownHotel(room.hotel)),
    }
}

/// The late checkout fee actually charged: the room's fee if the booking
/// selected the late checkout option, otherwise zero.
///
/// # Errors
///
/// Returns [`PricingError::UnknownHotel`] if the room's hotel is not in the
/// directory.
pub fn chargeable_late_checkout_fee(
    booking: &Booking<'_>,
    hotels: &HotelDirectory,
) -> Result<Money<'static, Currency>, PricingError> {
    if booking.dates().is_late_checkout() {
        late_checkout_fee(booking.room(), hotels)
    } else {
        Ok(Money::from_minor(
            0,
            booking.room().cost_per_night.currency(),
        ))
    }
}

/// Total nights multiplied by the per-night cost, with no late fee
/// considered.
///
/// A zero-night stay costs exactly zero.
pub fn total_room_cost(booking: &Booking<'_>) -> Money<'static, Currency> {
    let nights = booking.dates().total_nights();
    if nights == 0 {
        return Money::from_minor(0, booking.room().cost_per_night.currency());
    }

    let cost_per_night = booking.room().cost_per_night;
    Money::from_decimal(
        cost_per_night.amount() * Decimal::from(nights),
        cost_per_night.currency(),
    )
}

/// [`total_room_cost`] plus [`chargeable_late_checkout_fee`].
///
/// # Errors
///
/// Returns a [`PricingError`] if the hotel lookup or money arithmetic fails.
pub fn total_room_cost_with_late_checkout_fee(
    booking: &Booking<'_>,
    hotels: &HotelDirectory,
) -> Result<Money<'static, Currency>, PricingError> {
    let fee = chargeable_late_checkout_fee(booking, hotels)?;

    Ok(total_room_cost(booking).add(fee)?)
}

/// The total cost before tax.
///
/// Currently identical to [`total_room_cost_with_late_checkout_fee`], kept
/// as its own operation so invoices can name the pre-tax sub-total.
///
/// # Errors
///
/// Returns a [`PricingError`] if the hotel lookup or money arithmetic fails.
pub fn total_cost_excluding_tax(
    booking: &Booking<'_>,
    hotels: &HotelDirectory,
) -> Result<Money<'static, Currency>, PricingError> {
    total_room_cost_with_late_checkout_fee(booking, hotels)
}

/// The taxable amount on the pre-tax total, at [`TAX_RATE`].
///
/// # Errors
///
/// Returns a [`PricingError`] if the hotel lookup or money arithmetic fails.
pub fn taxable_amount(
    booking: &Booking<'_>,
    hotels: &HotelDirectory,
) -> Result<Money<'static, Currency>, PricingError> {
    Ok(total_cost_excluding_tax(booking, hotels)?.mul(TAX_RATE)?)
}

/// The total cost including tax.
///
/// # Errors
///
/// Returns a [`PricingError`] if the hotel lookup or money arithmetic fails.
pub fn total_cost_including_tax(
    booking: &Booking<'_>,
    hotels: &HotelDirectory,
) -> Result<Money<'static, Currency>, PricingError> {
    let excluding_tax = total_cost_excluding_tax(booking, hotels)?;
    let tax = taxable_amount(booking, hotels)?;

    Ok(excluding_tax.add(tax)?)
}
