//! Utils

use clap::Parser;

/// Arguments for the invoice demo
#[derive(Debug, Parser)]
pub struct DemoInvoiceArgs {
    /// Fixture set to load hotels & rooms from
    #[clap(short, long, default_value = "seaside")]
    pub fixture: String,

    /// Room number to book
    #[clap(short, long, default_value = "101")]
    pub room: String,

    /// Number of nights to stay
    #[clap(short, long, default_value_t = 3)]
    pub nights: u64,

    /// Request the late checkout option
    #[clap(short, long)]
    pub late_checkout: bool,
}
