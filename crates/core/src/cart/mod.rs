//! Shopping cart.
//!
//! [`CartStore`] is the single source of truth for what a shopper has in
//! their cart. It is an ordinary owned value: the storefront keeps one per
//! session, tests build as many as they like. Views that need to react to
//! changes register a [`CartListener`].

mod line;
mod store;

pub use line::{CartCandidate, CartLine};
pub use store::{CartEvent, CartListener, CartState, CartStore, MAX_LINE_QUANTITY, SubscriptionId};
