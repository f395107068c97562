//! Session-related types.
//!
//! The session holds references, never the cart itself: carts live in the
//! [`CartRegistry`](crate::carts::CartRegistry) under the stored key.

/// Session keys for storefront data.
pub mod keys {
    /// Key for the session's [`CartKey`](crate::carts::CartKey).
    pub const CART_KEY: &str = "cart_key";

    /// Key for the most recently placed order, read by the confirmation page.
    pub const LAST_ORDER: &str = "last_order";
}
