//! Type-safe price representation using decimal arithmetic.
//!
//! Prices never touch floating point: catalog prices, cart totals, tax and
//! shipping are all exact [`Decimal`] values, so `40 + 9.99 + 3.20` is
//! exactly `53.19`.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul, Sub};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// `num * 10^-scale` as a [`Decimal`], usable in `const` items.
///
/// `Decimal::new` is not `const`; this goes through `from_parts` instead.
/// `scale` must not exceed 28.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn const_decimal(num: i64, scale: u32) -> Decimal {
    let magnitude = num.unsigned_abs();
    Decimal::from_parts(magnitude as u32, (magnitude >> 32) as u32, 0, num < 0, scale)
}

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// A zero price in the default currency.
    pub const ZERO: Self = Self::usd(Decimal::ZERO);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a USD price.
    #[must_use]
    pub const fn usd(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::USD)
    }

    /// Create a USD price from a whole number of dollars.
    #[must_use]
    pub const fn dollars(whole: i64) -> Self {
        Self::usd(const_decimal(whole, 0))
    }

    /// Create a USD price from an amount in cents.
    #[must_use]
    pub const fn cents(cents: i64) -> Self {
        Self::usd(const_decimal(cents, 2))
    }

    /// The amount as a decimal.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Round to whole cents, half away from zero.
    #[must_use]
    pub fn round_to_cents(self) -> Self {
        Self::new(
            self.amount
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            self.currency_code,
        )
    }

    /// Multiply by a decimal factor (e.g. a tax rate).
    #[must_use]
    pub fn scale(self, factor: Decimal) -> Self {
        Self::new(self.amount * factor, self.currency_code)
    }

    /// Format without cents when the amount is whole (e.g. `$1,499`).
    ///
    /// Catalog prices are shown this way; cart and order totals use the
    /// two-decimal [`Display`](fmt::Display) form.
    #[must_use]
    pub fn display_compact(&self) -> String {
        if self.amount.fract().is_zero() {
            format!(
                "{}{}",
                self.currency_code.symbol(),
                group_thousands(&self.amount.trunc().abs().to_string(), self.amount.is_sign_negative())
            )
        } else {
            self.to_string()
        }
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let text = format!("{:.2}", rounded.abs());
        let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));
        write!(
            f,
            "{}{}.{frac}",
            self.currency_code.symbol(),
            group_thousands(whole, rounded.is_sign_negative() && !rounded.is_zero())
        )
    }
}

/// Insert `,` thousands separators into a string of ASCII digits.
fn group_thousands(digits: &str, negative: bool) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        debug_assert_eq!(self.currency_code, rhs.currency_code);
        Self::new(self.amount + rhs.amount, self.currency_code)
    }
}

impl Sub for Price {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        debug_assert_eq!(self.currency_code, rhs.currency_code);
        Self::new(self.amount - rhs.amount, self.currency_code)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// ISO 4217 currency codes.
///
/// The storefront sells in a single currency; the code travels with every
/// amount so formatting never has to guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
}

impl CurrencyCode {
    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD => "$",
        }
    }

    /// ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::USD => "USD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Price::dollars(299).amount, Decimal::new(299, 0));
        assert_eq!(Price::cents(999).amount, Decimal::new(999, 2));
        assert_eq!(Price::dollars(-5).amount, Decimal::new(-5, 0));
        assert!(Price::ZERO.is_zero());
    }

    #[test]
    fn test_const_decimal_matches_runtime_constructor() {
        const TAX: Decimal = const_decimal(8, 2);
        const FLAT: Price = Price::cents(999);

        assert_eq!(TAX, Decimal::new(8, 2));
        assert_eq!(FLAT.amount, Decimal::new(999, 2));
        assert_eq!(const_decimal(-47, 1), Decimal::new(-47, 1));
        assert_eq!(const_decimal(9_999_999_999, 0), Decimal::new(9_999_999_999, 0));
        assert_eq!(const_decimal(i64::MIN, 0), Decimal::from(i64::MIN));
        assert_eq!(const_decimal(0, 2), Decimal::ZERO);
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Price::dollars(40).to_string(), "$40.00");
        assert_eq!(Price::cents(5319).to_string(), "$53.19");
        assert_eq!(Price::dollars(2199).to_string(), "$2,199.00");
        assert_eq!(Price::dollars(1_234_567).to_string(), "$1,234,567.00");
        assert_eq!(Price::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_display_compact() {
        assert_eq!(Price::dollars(1499).display_compact(), "$1,499");
        assert_eq!(Price::dollars(59).display_compact(), "$59");
        assert_eq!(Price::cents(999).display_compact(), "$9.99");
    }

    #[test]
    fn test_arithmetic() {
        let line = Price::dollars(100) * 3;
        assert_eq!(line, Price::dollars(300));
        assert_eq!(line - Price::dollars(50), Price::dollars(250));

        let total: Price = [Price::dollars(50), Price::dollars(30)].into_iter().sum();
        assert_eq!(total, Price::dollars(80));
    }

    #[test]
    fn test_round_to_cents() {
        let tax = Price::usd(Decimal::new(23_992, 4)); // 2.3992
        assert_eq!(tax.round_to_cents(), Price::cents(240));

        let midpoint = Price::usd(Decimal::new(1_005, 3)); // 1.005
        assert_eq!(midpoint.round_to_cents(), Price::cents(101));
    }
}
