//! Order summary pricing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Price, const_decimal};

/// Orders at or above this subtotal ship free.
pub const FREE_SHIPPING_THRESHOLD: Price = Price::dollars(50);

/// Shipping charged below [`FREE_SHIPPING_THRESHOLD`].
pub const FLAT_SHIPPING: Price = Price::cents(999);

/// Flat sales tax rate (8%).
pub const TAX_RATE: Decimal = const_decimal(8, 2);

/// Subtotal, shipping, tax and grand total for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub subtotal: Price,
    pub shipping: Price,
    pub tax: Price,
    pub total: Price,
}

impl OrderSummary {
    /// Price an order from its cart subtotal.
    ///
    /// Tax is rounded to whole cents, half away from zero.
    #[must_use]
    pub fn for_subtotal(subtotal: Price) -> Self {
        let shipping = if subtotal >= FREE_SHIPPING_THRESHOLD {
            Price::ZERO
        } else {
            FLAT_SHIPPING
        };
        let tax = subtotal.scale(TAX_RATE).round_to_cents();

        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    /// Whether shipping is free.
    #[must_use]
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }

    /// How much more the shopper must spend to ship free, if anything.
    #[must_use]
    pub fn amount_to_free_shipping(&self) -> Option<Price> {
        (self.subtotal < FREE_SHIPPING_THRESHOLD).then(|| FREE_SHIPPING_THRESHOLD - self.subtotal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_order_pays_shipping() {
        let summary = OrderSummary::for_subtotal(Price::dollars(40));
        assert_eq!(summary.shipping, Price::cents(999));
        assert_eq!(summary.tax, Price::cents(320));
        assert_eq!(summary.total, Price::cents(5319));
        assert!(!summary.has_free_shipping());
        assert_eq!(summary.amount_to_free_shipping(), Some(Price::dollars(10)));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let summary = OrderSummary::for_subtotal(Price::dollars(50));
        assert!(summary.has_free_shipping());
        assert_eq!(summary.tax, Price::dollars(4));
        assert_eq!(summary.total, Price::dollars(54));
        assert_eq!(summary.amount_to_free_shipping(), None);

        let just_below = OrderSummary::for_subtotal(Price::cents(4999));
        assert_eq!(just_below.shipping, FLAT_SHIPPING);
    }

    #[test]
    fn test_tax_rounds_to_cents() {
        // 29.99 × 0.08 = 2.3992
        let summary = OrderSummary::for_subtotal(Price::cents(2999));
        assert_eq!(summary.tax, Price::cents(240));
        // 1.0625 × 0.08 = 0.085 sits on the midpoint and rounds up
        let summary = OrderSummary::for_subtotal(Price::usd(Decimal::new(10_625, 4)));
        assert_eq!(summary.tax, Price::cents(9));
    }

    #[test]
    fn test_large_order() {
        let summary = OrderSummary::for_subtotal(Price::dollars(1798));
        assert_eq!(summary.shipping, Price::ZERO);
        assert_eq!(summary.tax, Price::cents(14_384));
        assert_eq!(summary.total, Price::cents(194_184));
    }

    #[test]
    fn test_empty_cart_summary() {
        let summary = OrderSummary::for_subtotal(Price::ZERO);
        assert_eq!(summary.tax, Price::ZERO);
        assert_eq!(summary.total, FLAT_SHIPPING);
    }
}
