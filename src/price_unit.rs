use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    currency::{CurrencyConventions, CurrencyFormat},
    errors::PriceUnitError,
    locale::Locale,
};

/// Formats prices in the currency of a single locale.
///
/// A `PriceUnit` always carries a locale when built through [`PriceUnit::new`]
/// or `From<Locale>`. Deserialized values skip that check, which is what
/// [`PriceUnit::validate`] is for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceUnit {
    #[serde(default)]
    locale: Option<Locale>,
}

impl PriceUnit {
    pub fn new(locale: Option<Locale>) -> Result<Self, PriceUnitError> {
        match locale {
            Some(locale) => Ok(Self::from(locale)),
            None => Err(PriceUnitError::InvalidArgument(
                "locale arg is null".into(),
            )),
        }
    }

    pub fn locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    /// Renders `price` with the locale's currency conventions.
    ///
    /// A missing price is treated as zero. Every call builds its own
    /// [`CurrencyFormat`].
    pub fn format(&self, price: Option<Decimal>) -> String {
        let mut currency_format = match &self.locale {
            Some(locale) => CurrencyFormat::for_locale(locale),
            None => CurrencyFormat::with_conventions(CurrencyConventions::GENERIC),
        };
        currency_format.format(&price.unwrap_or(Decimal::ZERO))
    }

    pub fn validate(&self) -> Result<(), PriceUnitError> {
        let Some(locale) = &self.locale else {
            return Err(PriceUnitError::InvalidState("locale is null".into()));
        };
        tracing::info!("locale is [{}]", locale);
        Ok(())
    }
}

impl From<Locale> for PriceUnit {
    fn from(locale: Locale) -> Self {
        Self {
            locale: Some(locale),
        }
    }
}
