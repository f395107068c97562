//! Cart line types.

use serde::{Deserialize, Serialize};

use crate::types::{Category, Price, ProductId};

/// What a caller hands to [`CartStore::add_item`](super::CartStore::add_item):
/// a product snapshot without a quantity. Every add is one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartCandidate {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Price,
    pub image: String,
    pub category: Category,
}

/// One distinct product in the cart with its aggregated quantity.
///
/// Everything except `quantity` is copied from the [`CartCandidate`] on the
/// first add and never refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Price,
    pub image: String,
    pub category: Category,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    pub(super) fn from_candidate(candidate: CartCandidate) -> Self {
        Self {
            product_id: candidate.product_id,
            name: candidate.name,
            unit_price: candidate.unit_price,
            image: candidate.image,
            category: candidate.category,
            quantity: 1,
        }
    }

    /// `unit_price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price * self.quantity
    }
}
