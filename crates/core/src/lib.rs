//! VOLT Core - catalog, cart, and checkout logic.
//!
//! This crate holds everything the storefront needs that is not HTTP:
//! - `storefront` - Server-rendered shop (axum + askama + HTMX)
//! - `integration-tests` - End-to-end tests against the storefront router
//!
//! # Architecture
//!
//! The core crate performs no I/O. Every operation is a synchronous function
//! over in-memory data, which keeps it trivially testable and lets the
//! storefront decide how carts are owned and shared.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, emails, and catalog enums
//! - [`catalog`] - The read-only product dataset and listing queries
//! - [`cart`] - The cart store with its observer interface
//! - [`checkout`] - Order summary pricing, form validation, and order placement

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod types;

pub use cart::{CartCandidate, CartEvent, CartLine, CartListener, CartState, CartStore};
pub use catalog::{Catalog, Product, ProductQuery, SortKey};
pub use checkout::{CheckoutError, CheckoutForm, OrderSummary, PlacedOrder, place_order};
pub use types::*;
