//! Order placement.
//!
//! There is no payment gateway and no order backend: placing an order
//! validates the form, prices the cart, fabricates an order number and
//! empties the cart.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{CheckoutForm, FieldErrors, OrderSummary};
use crate::cart::{CartLine, CartStore};
use crate::types::{Email, OrderNumber};

const ORDER_PREFIX: &str = "VOLT-";
const ORDER_CODE_LEN: usize = 6;

impl OrderNumber {
    /// `VOLT-` followed by six random uppercase base-36 characters.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let code: String = (0..ORDER_CODE_LEN)
            .filter_map(|_| char::from_digit(rng.random_range(0..36), 36))
            .map(|c| c.to_ascii_uppercase())
            .collect();
        Self::new(format!("{ORDER_PREFIX}{code}"))
    }
}

/// Why an order could not be placed. The cart is untouched in every case.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("checkout form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),
}

/// A completed order, as shown on the confirmation page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub order_number: OrderNumber,
    pub lines: Vec<CartLine>,
    pub summary: OrderSummary,
    pub email: Email,
    pub customer_name: String,
    pub placed_at: DateTime<Utc>,
}

impl PlacedOrder {
    /// Units across every line.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }
}

/// Validate `form`, then turn the cart into a [`PlacedOrder`] and clear it.
///
/// The card number and expiry are normalised before validation, so raw
/// digits are accepted.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] for an empty cart and
/// [`CheckoutError::Invalid`] when any field fails validation.
pub fn place_order<R: Rng + ?Sized>(
    store: &mut CartStore,
    form: &CheckoutForm,
    rng: &mut R,
) -> Result<PlacedOrder, CheckoutError> {
    if store.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let form = form.normalized();
    let email = form.check().map_err(CheckoutError::Invalid)?;

    let order = PlacedOrder {
        order_number: OrderNumber::generate(rng),
        lines: store.lines().to_vec(),
        summary: OrderSummary::for_subtotal(store.total()),
        email,
        customer_name: form.full_name(),
        placed_at: Utc::now(),
    };

    store.clear_cart();
    Ok(order)
}
