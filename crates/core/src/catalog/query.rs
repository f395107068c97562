//! Listing page filters and sort orders.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;

use super::Product;
use crate::types::{Category, Price, const_decimal};

/// Upper bound of the price slider; also its default position.
pub const MAX_PRICE_CEILING: Price = Price::dollars(2200);

/// Minimum-rating filter options offered on the listing page.
pub const MIN_RATING_CHOICES: [Decimal; 4] = [
    Decimal::ZERO,
    const_decimal(4, 0),
    const_decimal(45, 1),
    const_decimal(47, 1),
];

/// Listing sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Dataset order.
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    /// Highest rating first.
    Rating,
    /// Most reviews first.
    Reviews,
}

impl SortKey {
    /// All sort orders in dropdown order.
    pub const ALL: [Self; 5] = [
        Self::Featured,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::Rating,
        Self::Reviews,
    ];

    /// Query-string value.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Rating => "rating",
            Self::Reviews => "reviews",
        }
    }

    /// Dropdown label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceAsc => "Price: Low → High",
            Self::PriceDesc => "Price: High → Low",
            Self::Rating => "Highest Rated",
            Self::Reviews => "Most Reviewed",
        }
    }

    fn sort(self, products: &mut [&Product]) {
        match self {
            Self::Featured => {}
            Self::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
            Self::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
            Self::Rating => products.sort_by(|a, b| b.rating.cmp(&a.rating)),
            Self::Reviews => products.sort_by(|a, b| b.reviews.cmp(&a.reviews)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for SortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|k| k.slug() == s).ok_or(())
    }
}

/// The listing page's filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    /// `None` means every category.
    pub category: Option<Category>,
    /// Inclusive upper price bound. The lower bound is always zero.
    pub max_price: Price,
    /// Inclusive lower rating bound.
    pub min_rating: Decimal,
    pub sort: SortKey,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            category: None,
            max_price: MAX_PRICE_CEILING,
            min_rating: Decimal::ZERO,
            sort: SortKey::Featured,
        }
    }
}

impl ProductQuery {
    /// Whether a product passes every filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.category.is_none_or(|c| product.category == c)
            && product.price.amount >= Decimal::ZERO
            && product.price <= self.max_price
            && product.rating >= self.min_rating
    }

    /// Filter then stable-sort `products`.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut matched: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();
        self.sort.sort(&mut matched);
        matched
    }

    /// Whether every filter is at its default (hides "Clear filters").
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
