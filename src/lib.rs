//! Veranda
//!
//! Veranda is a hotel reservation pricing and capacity engine written in Rust.

pub mod bookings;
pub mod dates;
pub mod fixtures;
pub mod guests;
pub mod hotels;
pub mod invoice;
pub mod prelude;
pub mod pricing;
pub mod rooms;
pub mod utils;
