//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;
use volt_core::catalog::{MAX_PRICE_CEILING, MIN_RATING_CHOICES};
use volt_core::{Badge, Category, Price, Product, ProductQuery, SortKey, const_decimal};

use crate::filters;
use crate::state::AppState;

/// How many same-category products the detail page suggests.
const RELATED_LIMIT: usize = 4;

/// Highest possible rating.
const MAX_RATING: Decimal = const_decimal(5, 0);

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub category: &'static str,
    pub icon: &'static str,
    pub price: String,
    pub original_price: Option<String>,
    pub discount_percent: u32,
    pub rating: String,
    /// CSS class per star, filled or empty.
    pub stars: Vec<&'static str>,
    pub reviews: String,
    pub badge: Option<Badge>,
    pub image: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            category: product.category.name(),
            icon: product.category.icon(),
            price: product.price.display_compact(),
            original_price: product
                .is_discounted()
                .then(|| product.original_price.display_compact()),
            discount_percent: product.discount_percent(),
            rating: product.rating.to_string(),
            stars: product
                .rating_stars()
                .into_iter()
                .map(|filled| if filled { "star filled" } else { "star" })
                .collect(),
            reviews: group_digits(product.reviews),
            badge: product.badge,
            image: product.primary_image().to_owned(),
        }
    }
}

/// Full product display data for the detail page.
#[derive(Clone)]
pub struct ProductDetailView {
    pub card: ProductView,
    pub description: String,
    pub specs: Vec<String>,
    pub images: Vec<String>,
    pub category_slug: &'static str,
    /// Unit price as a plain number, for the quantity stepper.
    pub unit_price: String,
}

impl From<&Product> for ProductDetailView {
    fn from(product: &Product) -> Self {
        Self {
            card: ProductView::from(product),
            description: product.description.clone(),
            specs: product.specs.clone(),
            images: product.images.to_vec(),
            category_slug: product.category.slug(),
            unit_price: product.price.amount.to_string(),
        }
    }
}

/// `6234` → `"6,234"`.
fn group_digits(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// =============================================================================
// Listing
// =============================================================================

/// Listing query parameters.
///
/// Every value is optional and parsed leniently: anything unrecognised falls
/// back to the default for that filter.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub cat: Option<String>,
    pub max_price: Option<String>,
    pub min_rating: Option<String>,
    pub sort: Option<String>,
}

impl ListingQuery {
    /// Resolve the raw parameters into a catalog query.
    #[must_use]
    pub fn to_product_query(&self) -> ProductQuery {
        let defaults = ProductQuery::default();

        let category = self
            .cat
            .as_deref()
            .and_then(|c| c.parse::<Category>().ok());

        let max_price = self
            .max_price
            .as_deref()
            .and_then(|p| p.trim().parse::<Decimal>().ok())
            .filter(|p| !p.is_sign_negative())
            .map_or(defaults.max_price, |p| {
                Price::usd(p.min(MAX_PRICE_CEILING.amount))
            });

        let min_rating = self
            .min_rating
            .as_deref()
            .and_then(|r| r.trim().parse::<Decimal>().ok())
            .filter(|r| !r.is_sign_negative() && *r <= MAX_RATING)
            .unwrap_or(defaults.min_rating);

        let sort = self
            .sort
            .as_deref()
            .and_then(|s| s.parse::<SortKey>().ok())
            .unwrap_or(defaults.sort);

        ProductQuery {
            category,
            max_price,
            min_rating,
            sort,
        }
    }
}

/// A category filter choice.
pub struct CategoryOption {
    pub slug: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub selected: bool,
}

/// A minimum-rating filter choice.
pub struct RatingOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// A sort dropdown choice.
pub struct SortOption {
    pub slug: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductView>,
    pub heading: String,
    pub categories: Vec<CategoryOption>,
    pub all_selected: bool,
    pub ratings: Vec<RatingOption>,
    pub sorts: Vec<SortOption>,
    pub max_price: String,
    pub max_price_label: String,
    pub price_ceiling: String,
    pub has_filters: bool,
}

impl ProductsIndexTemplate {
    fn new(query: &ProductQuery, products: Vec<ProductView>) -> Self {
        let categories = Category::ALL
            .into_iter()
            .map(|c| CategoryOption {
                slug: c.slug(),
                name: c.name(),
                icon: c.icon(),
                selected: query.category == Some(c),
            })
            .collect();

        let ratings = MIN_RATING_CHOICES
            .into_iter()
            .map(|r| RatingOption {
                value: r.to_string(),
                label: if r.is_zero() {
                    "All".to_string()
                } else {
                    format!("{r}+ ★")
                },
                selected: query.min_rating == r,
            })
            .collect();

        let sorts = SortKey::ALL
            .into_iter()
            .map(|s| SortOption {
                slug: s.slug(),
                label: s.label(),
                selected: query.sort == s,
            })
            .collect();

        Self {
            heading: query
                .category
                .map_or_else(|| "All Products".to_string(), |c| c.name().to_string()),
            products,
            categories,
            all_selected: query.category.is_none(),
            ratings,
            sorts,
            max_price: query.max_price.amount.normalize().to_string(),
            max_price_label: query.max_price.display_compact(),
            price_ceiling: MAX_PRICE_CEILING.amount.to_string(),
            has_filters: !query.is_default(),
        }
    }
}

/// Display product listing page.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListingQuery>,
) -> impl IntoResponse {
    let query = params.to_product_query();
    let products: Vec<ProductView> = state
        .catalog()
        .query(&query)
        .into_iter()
        .map(ProductView::from)
        .collect();

    tracing::debug!(results = products.len(), ?query, "Product listing");

    ProductsIndexTemplate::new(&query, products)
}

// =============================================================================
// Detail
// =============================================================================

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductDetailView,
    pub related_products: Vec<ProductView>,
}

/// Unknown product page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/not_found.html")]
pub struct ProductNotFoundTemplate {
    pub id: String,
}

/// Display product detail page, or a 404 page for an unknown id.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let catalog = state.catalog();
    let Some(product) = catalog.get_product_by_id(&id) else {
        tracing::debug!(product_id = %id, "Product not found");
        return (StatusCode::NOT_FOUND, ProductNotFoundTemplate { id }).into_response();
    };

    let related_products = catalog
        .related(product, RELATED_LIMIT)
        .into_iter()
        .map(ProductView::from)
        .collect();

    ProductShowTemplate {
        product: ProductDetailView::from(product),
        related_products,
    }
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(cat: &str, max_price: &str, min_rating: &str, sort: &str) -> ListingQuery {
        ListingQuery {
            cat: Some(cat.to_string()),
            max_price: Some(max_price.to_string()),
            min_rating: Some(min_rating.to_string()),
            sort: Some(sort.to_string()),
        }
    }

    #[test]
    fn test_empty_listing_query_is_default() {
        assert!(ListingQuery::default().to_product_query().is_default());
    }

    #[test]
    fn test_listing_query_parses_values() {
        let query = listing("Laptops", "1500", "4.5", "price-desc").to_product_query();
        assert_eq!(query.category, Some(Category::Laptops));
        assert_eq!(query.max_price, Price::dollars(1500));
        assert_eq!(query.min_rating, Decimal::new(45, 1));
        assert_eq!(query.sort, SortKey::PriceDesc);
    }

    #[test]
    fn test_listing_query_falls_back_on_garbage() {
        let query = listing("toasters", "cheap", "11", "random").to_product_query();
        assert!(query.is_default());

        let negative = listing("", "-5", "-1", "").to_product_query();
        assert!(negative.is_default());
    }

    #[test]
    fn test_listing_query_clamps_price_to_ceiling() {
        let query = listing("", "99999", "0", "").to_product_query();
        assert_eq!(query.max_price, MAX_PRICE_CEILING);
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(986), "986");
        assert_eq!(group_digits(6234), "6,234");
        assert_eq!(group_digits(1_234_567), "1,234,567");
    }
}
