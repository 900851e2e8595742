//! Invoice Demo
//!
//! Books a fixture room for a few guests and prints the itemized invoice.
//!
//! Use `-f` to load a fixture set by name
//! Use `-r` to pick the room number to book
//! Use `-n` to choose the number of nights
//! Use `-l` to request the late checkout option

use std::io;

use anyhow::Result;
use chrono::{Days, Utc};
use clap::Parser;

use veranda::{
    bookings::Booking,
    dates::StayDates,
    fixtures::Fixture,
    guests::Guest,
    invoice::Invoice,
    pricing::extra_pricing_type,
    utils::DemoInvoiceArgs,
};

/// Invoice Demo
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = DemoInvoiceArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)?;
    let room = fixture.room(&args.room)?;

    let check_in = Utc::now().date_naive();
    let check_out = check_in
        .checked_add_days(Days::new(args.nights))
        .unwrap_or(check_in);

    let mut booking = Booking::new(room);
    booking.set_dates(StayDates::new(check_in, check_out, args.late_checkout));
    booking.add_guest(Guest::new("john", "smith", false));
    booking.add_guest(Guest::new("sara", "smith", true));
    booking.set_created_time(Utc::now());

    let invoice = Invoice::for_booking(&booking, fixture.hotels())?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    invoice.write_to(&mut handle)?;

    tracing::info!(
        room = %room.room_number,
        guests = booking.guests().len(),
        extras = ?extra_pricing_type(room.room_type),
        "booking priced"
    );

    Ok(())
}
