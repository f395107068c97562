//! Checkout: order pricing, form validation and order placement.

mod form;
mod order;
mod summary;

pub use form::{CheckoutField, CheckoutForm, FieldErrors, format_card_number, format_expiry};
pub use order::{CheckoutError, PlacedOrder, place_order};
pub use summary::{FLAT_SHIPPING, FREE_SHIPPING_THRESHOLD, OrderSummary, TAX_RATE};
