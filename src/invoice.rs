//! Invoice
//!
//! Itemized breakdown of a booking's charges, one line per named pricing
//! operation, with a plain-text table renderer for demos and receipts.

use std::io;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use tabled::{Table, Tabled, settings::Style};

use crate::{
    bookings::{Booking, ReservationId},
    hotels::HotelDirectory,
    pricing::{
        ExtraTier, PricingError, TAX_RATE, chargeable_late_checkout_fee, extra_pricing_type,
        taxable_amount, total_cost_excluding_tax, total_cost_including_tax, total_room_cost,
    },
};

/// A single labelled amount on an invoice.
#[derive(Debug, Clone, Tabled)]
pub struct InvoiceLine {
    /// Charge description
    #[tabled(rename = "Charge")]
    pub description: String,

    /// Amount in the booking currency
    #[tabled(rename = "Amount")]
    pub amount: Money<'static, Currency>,
}

/// Snapshot of a booking's priced charges.
#[derive(Debug, Clone)]
pub struct Invoice {
    reservation_id: ReservationId,
    nights: u32,
    extras_tier: ExtraTier,
    room_cost: Money<'static, Currency>,
    late_checkout_fee: Money<'static, Currency>,
    subtotal: Money<'static, Currency>,
    tax: Money<'static, Currency>,
    total: Money<'static, Currency>,
}

impl Invoice {
    /// Price the booking and capture the itemized breakdown.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the hotel lookup or money arithmetic
    /// fails.
    pub fn for_booking(
        booking: &Booking<'_>,
        hotels: &HotelDirectory,
    ) -> Result<Self, PricingError> {
        Ok(Invoice {
            reservation_id: booking.reservation_id(),
            nights: booking.dates().total_nights(),
            extras_tier: extra_pricing_type(booking.room().room_type),
            room_cost: total_room_cost(booking),
            late_checkout_fee: chargeable_late_checkout_fee(booking, hotels)?,
            subtotal: total_cost_excluding_tax(booking, hotels)?,
            tax: taxable_amount(booking, hotels)?,
            total: total_cost_including_tax(booking, hotels)?,
        })
    }

    /// The reservation this invoice was priced for.
    pub fn reservation_id(&self) -> ReservationId {
        self.reservation_id
    }

    /// Number of nights charged.
    pub fn nights(&self) -> u32 {
        self.nights
    }

    /// The tier food and general extras would be charged at.
    pub fn extras_tier(&self) -> ExtraTier {
        self.extras_tier
    }

    /// Room cost with no late fee considered.
    pub fn room_cost(&self) -> Money<'static, Currency> {
        self.room_cost
    }

    /// The chargeable late checkout fee.
    pub fn late_checkout_fee(&self) -> Money<'static, Currency> {
        self.late_checkout_fee
    }

    /// Sub-total excluding tax.
    pub fn subtotal(&self) -> Money<'static, Currency> {
        self.subtotal
    }

    /// The taxable amount.
    pub fn tax(&self) -> Money<'static, Currency> {
        self.tax
    }

    /// Total including tax.
    pub fn total(&self) -> Money<'static, Currency> {
        self.total
    }

    /// The invoice as labelled lines, in presentation order.
    pub fn lines(&self) -> Vec<InvoiceLine> {
        let tax_percent = (TAX_RATE * Decimal::ONE_HUNDRED).normalize();

        vec![
            InvoiceLine {
                description: format!("Room cost ({} nights)", self.nights),
                amount: self.room_cost,
            },
            InvoiceLine {
                description: "Late checkout fee".to_string(),
                amount: self.late_checkout_fee,
            },
            InvoiceLine {
                description: "Subtotal excl. tax".to_string(),
                amount: self.subtotal,
            },
            InvoiceLine {
                description: format!("Tax ({tax_percent}%)"),
                amount: self.tax,
            },
            InvoiceLine {
                description: "Total incl. tax".to_string(),
                amount: self.total,
            },
        ]
    }

    /// Render the invoice as a plain-text table.
    pub fn to_table(&self) -> String {
        let mut table = Table::new(self.lines());
        table.with(Style::sharp());

        table.to_string()
    }

    /// Write the rendered invoice, preceded by the reservation id.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] if the writer fails.
    pub fn write_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "Reservation {}", self.reservation_id)?;
        writeln!(writer, "{}", self.to_table())
    }
}
