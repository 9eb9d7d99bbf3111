//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Amounts are stored in the currency's standard unit (dollars, not cents)
/// as a [`Decimal`], so cart math never goes through floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a USD price from a cent amount.
    ///
    /// Mock catalog data is declared in cents so literals stay exact:
    /// `Price::usd_cents(12999)` is $129.99.
    #[must_use]
    pub fn usd_cents(cents: i64) -> Self {
        Self {
            amount: Decimal::new(cents, 2),
            currency_code: CurrencyCode::USD,
        }
    }

}

impl fmt::Display for Price {
    /// Format for display (e.g., "$129.99").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:.2}",
            self.currency_code.symbol(),
            self.amount.round_dp(2)
        )
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// The currency symbol used for display.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "\u{20ac}",
            Self::GBP => "\u{a3}",
        }
    }

    /// The ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_cents() {
        let price = Price::usd_cents(12999);
        assert_eq!(price.amount, Decimal::new(12999, 2));
        assert_eq!(price.currency_code, CurrencyCode::USD);
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::usd_cents(12999).to_string(), "$129.99");
        assert_eq!(Price::usd_cents(8999).to_string(), "$89.99");
        assert_eq!(Price::usd_cents(0).to_string(), "$0.00");
    }

    #[test]
    fn test_display_pads_cents() {
        // 199.90 must not render as "$199.9"
        assert_eq!(Price::usd_cents(19990).to_string(), "$199.90");
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(CurrencyCode::USD.symbol(), "$");
        assert_eq!(CurrencyCode::EUR.symbol(), "€");
        assert_eq!(CurrencyCode::GBP.symbol(), "£");
        assert_eq!(CurrencyCode::USD.code(), "USD");
    }
}
