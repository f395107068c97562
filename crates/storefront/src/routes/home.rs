//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;
use volt_core::Category;

use super::products::ProductView;
use crate::filters;
use crate::state::AppState;

/// A "Shop Categories" tile.
#[derive(Clone)]
pub struct CategoryTile {
    pub slug: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub product_count: usize,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Category tiles linking into the filtered listing.
    pub categories: Vec<CategoryTile>,
    /// Hero row products.
    pub featured: Vec<ProductView>,
    /// Bestseller grid products.
    pub bestsellers: Vec<ProductView>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.catalog();

    let categories = Category::ALL
        .into_iter()
        .map(|category| CategoryTile {
            slug: category.slug(),
            name: category.name(),
            icon: category.icon(),
            product_count: catalog.list_by_category(category).len(),
        })
        .collect();

    HomeTemplate {
        categories,
        featured: catalog.featured().into_iter().map(ProductView::from).collect(),
        bestsellers: catalog
            .bestsellers()
            .into_iter()
            .map(ProductView::from)
            .collect(),
    }
}
