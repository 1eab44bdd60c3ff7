#![doc(test(attr(deny(warnings))))]

//! Vroong formats prices in the currency conventions of a locale and wires
//! named price units from configuration.

pub mod config;
pub mod currency;
pub mod errors;
pub mod locale;
pub mod price_unit;
pub mod price_units;
pub mod utils;

pub use errors::{AppError, ConfigError, PriceUnitError};
pub use locale::Locale;
pub use price_unit::PriceUnit;
pub use price_units::PriceUnits;
pub use rust_decimal::Decimal;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Vroong tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
