use rust_decimal::{Decimal, RoundingStrategy};

use crate::locale::Locale;

/// Where the currency symbol sits relative to the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    Prefix,
    Suffix { separator: &'static str },
}

/// Regional currency presentation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyConventions {
    pub symbol: &'static str,
    pub fraction_digits: u32,
    pub grouping: &'static str,
    pub decimal: &'static str,
    pub placement: SymbolPlacement,
}

const NBSP: &str = "\u{a0}";
const NARROW_NBSP: &str = "\u{202f}";

impl CurrencyConventions {
    /// Fallback used when the locale has no known currency.
    pub const GENERIC: Self = Self {
        symbol: "¤",
        fraction_digits: 2,
        grouping: ",",
        decimal: ".",
        placement: SymbolPlacement::Prefix,
    };

    const fn prefix(symbol: &'static str, fraction_digits: u32) -> Self {
        Self {
            symbol,
            fraction_digits,
            grouping: ",",
            decimal: ".",
            placement: SymbolPlacement::Prefix,
        }
    }

    const fn euro(grouping: &'static str) -> Self {
        Self {
            symbol: "€",
            fraction_digits: 2,
            grouping,
            decimal: ",",
            placement: SymbolPlacement::Suffix { separator: NBSP },
        }
    }

    pub fn for_locale(locale: &Locale) -> Self {
        let Some(country) = locale.country() else {
            return Self::GENERIC;
        };
        match (locale.language(), country) {
            ("en", "US" | "CA" | "AU") => Self::prefix("$", 2),
            ("en", "GB") => Self::prefix("£", 2),
            ("ko", "KR") => Self::prefix("₩", 0),
            ("ja", "JP") => Self::prefix("￥", 0),
            ("zh", "CN") => Self::prefix("¥", 2),
            ("de", "DE") | ("es", "ES") | ("it", "IT") => Self::euro("."),
            ("fr", "FR") => Self::euro(NARROW_NBSP),
            ("de", "CH") => Self {
                symbol: "CHF",
                fraction_digits: 2,
                grouping: "’",
                decimal: ".",
                placement: SymbolPlacement::Prefix,
            },
            _ => Self::GENERIC,
        }
    }
}

/// Single-use currency formatter bound to one set of conventions.
///
/// Holds a mutable scratch buffer, so it is created per formatting call and
/// never shared.
#[derive(Debug)]
pub struct CurrencyFormat {
    conventions: CurrencyConventions,
    buffer: String,
}

impl CurrencyFormat {
    pub fn for_locale(locale: &Locale) -> Self {
        Self::with_conventions(CurrencyConventions::for_locale(locale))
    }

    pub fn with_conventions(conventions: CurrencyConventions) -> Self {
        Self {
            conventions,
            buffer: String::with_capacity(32),
        }
    }

    /// Rounds half-even to the minor unit and renders the amount.
    pub fn format(&mut self, amount: &Decimal) -> String {
        let precision = self.conventions.fraction_digits;
        let mut rounded =
            amount.round_dp_with_strategy(precision, RoundingStrategy::MidpointNearestEven);
        rounded.rescale(precision);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();

        self.buffer.clear();
        if negative {
            self.buffer.push('-');
        }
        if self.conventions.placement == SymbolPlacement::Prefix {
            self.buffer.push_str(self.conventions.symbol);
        }
        let digits = rounded.abs().to_string();
        let (int_part, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
        self.buffer
            .push_str(&group_digits(int_part, self.conventions.grouping));
        if precision > 0 {
            self.buffer.push_str(self.conventions.decimal);
            self.buffer.push_str(fraction);
            // rescale stops short of `precision` once the mantissa is full
            for _ in fraction.len()..precision as usize {
                self.buffer.push('0');
            }
        }
        if let SymbolPlacement::Suffix { separator } = self.conventions.placement {
            self.buffer.push_str(separator);
            self.buffer.push_str(self.conventions.symbol);
        }
        self.buffer.clone()
    }
}

fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (index, ch) in digits.chars().enumerate() {
        if index != 0 && (len - index) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}
