//! Read-only product catalog.
//!
//! The catalog is a fixed dataset loaded once at start-up. Nothing in the
//! storefront mutates it; the cart copies the fields it needs at add-time
//! through [`Product::cart_candidate`].

mod data;
mod query;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::cart::CartCandidate;
use crate::types::{Badge, Category, Price, ProductId};

pub use query::{MAX_PRICE_CEILING, MIN_RATING_CHOICES, ProductQuery, SortKey};

/// A purchasable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Price before any promotion. Equal to `price` when nothing is discounted.
    pub original_price: Price,
    pub category: Category,
    /// Average review score out of 5, one decimal place.
    pub rating: Decimal,
    pub reviews: u32,
    pub description: String,
    pub specs: Vec<String>,
    /// Gallery images; the first is the card and cart thumbnail.
    pub images: [String; 3],
    pub badge: Option<Badge>,
}

impl Product {
    /// Whole-percent saving versus `original_price`, or 0 when not discounted.
    #[must_use]
    pub fn discount_percent(&self) -> u32 {
        let original = self.original_price.amount;
        if original <= self.price.amount || original.is_zero() {
            return 0;
        }
        ((original - self.price.amount) / original * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .unwrap_or(0)
    }

    /// Whether the product sells below its original price.
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.original_price.amount > self.price.amount
    }

    /// The card/cart thumbnail.
    #[must_use]
    pub fn primary_image(&self) -> &str {
        let [first, ..] = &self.images;
        first
    }

    /// Five flags, one per star, filled when the rating reaches within half a
    /// star of it.
    #[must_use]
    pub fn rating_stars(&self) -> [bool; 5] {
        let half = Decimal::new(5, 1);
        let mut stars = [false; 5];
        for (star, filled) in (1_i64..).zip(stars.iter_mut()) {
            *filled = Decimal::from(star) - half <= self.rating;
        }
        stars
    }

    /// The fields the cart snapshots when this product is added.
    #[must_use]
    pub fn cart_candidate(&self) -> CartCandidate {
        CartCandidate {
            product_id: self.id.clone(),
            name: self.name.clone(),
            unit_price: self.price,
            image: self.primary_image().to_owned(),
            category: self.category,
        }
    }
}

/// The product dataset with lookup and listing helpers.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an explicit product list (dataset order is kept).
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The storefront's built-in dataset.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(data::products())
    }

    /// All products in dataset ("featured") order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get_product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// Products in one category, in dataset order.
    #[must_use]
    pub fn list_by_category(&self, category: Category) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Hero products on the home page.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.select(data::FEATURED_IDS)
    }

    /// Bestseller strip on the home page.
    #[must_use]
    pub fn bestsellers(&self) -> Vec<&Product> {
        self.select(data::BESTSELLER_IDS)
    }

    /// Other products from the same category, at most `limit` of them.
    #[must_use]
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }

    /// Filter and sort for the listing page.
    #[must_use]
    pub fn query(&self, query: &ProductQuery) -> Vec<&Product> {
        query.apply(&self.products)
    }

    /// Products whose id is in `ids`, in dataset order.
    fn select(&self, ids: &[&str]) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| ids.contains(&p.id.as_str()))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
