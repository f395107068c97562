//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The session holds a cart key; the cart itself lives in the registry.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;
use volt_core::cart::MAX_LINE_QUANTITY;
use volt_core::{CartLine, CartState, OrderSummary};

use crate::carts::{CartKey, SharedCart};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::models::session_keys;
use crate::state::AppState;

/// Largest quantity a single add request may carry.
pub const MAX_ADD_QUANTITY: u32 = 99;

/// HTMX event fired after every cart mutation.
const CART_UPDATED: (&str, &str) = ("HX-Trigger", "cart-updated");

// =============================================================================
// Views
// =============================================================================

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub product_id: String,
    pub name: String,
    pub category: &'static str,
    pub image: String,
    pub quantity: u32,
    /// Quantity after one decrement; zero removes the line.
    pub quantity_down: u32,
    pub quantity_up: u32,
    pub unit_price: String,
    pub line_total: String,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id.to_string(),
            name: line.name.clone(),
            category: line.category.name(),
            image: line.image.clone(),
            quantity: line.quantity,
            quantity_down: line.quantity.saturating_sub(1),
            quantity_up: line.quantity.saturating_add(1).min(MAX_LINE_QUANTITY),
            unit_price: line.unit_price.to_string(),
            line_total: line.line_total().to_string(),
        }
    }
}

/// Order summary display data for templates.
#[derive(Clone)]
pub struct SummaryView {
    pub subtotal: String,
    /// `"FREE"` or the flat rate.
    pub shipping: String,
    pub tax: String,
    pub total: String,
    /// Spend still needed for free shipping.
    pub free_shipping_remaining: Option<String>,
}

impl From<&OrderSummary> for SummaryView {
    fn from(summary: &OrderSummary) -> Self {
        Self {
            subtotal: summary.subtotal.to_string(),
            shipping: if summary.has_free_shipping() {
                "FREE".to_string()
            } else {
                summary.shipping.to_string()
            },
            tax: summary.tax.to_string(),
            total: summary.total.to_string(),
            free_shipping_remaining: summary
                .amount_to_free_shipping()
                .map(|remaining| remaining.to_string()),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: u64,
    pub summary: SummaryView,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self::from(&CartState::empty())
    }

    /// Whether there is nothing to show.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&CartState> for CartView {
    fn from(state: &CartState) -> Self {
        Self {
            items: state.lines().iter().map(CartItemView::from).collect(),
            item_count: state.item_count(),
            summary: SummaryView::from(&OrderSummary::for_subtotal(state.total())),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// The session's cart, if it has one that is still live.
///
/// Never creates a cart: read-only pages use this so browsing does not
/// allocate carts.
pub(crate) async fn existing_cart(state: &AppState, session: &Session) -> Result<Option<SharedCart>> {
    let key = session.get::<CartKey>(session_keys::CART_KEY).await?;
    Ok(key.and_then(|key| state.carts().get(&key)))
}

/// The session's cart, creating the key and the cart when missing.
pub(crate) async fn session_cart(state: &AppState, session: &Session) -> Result<SharedCart> {
    let key = if let Some(key) = session.get::<CartKey>(session_keys::CART_KEY).await? {
        key
    } else {
        let key = CartKey::generate();
        session.insert(session_keys::CART_KEY, key).await?;
        tracing::debug!(cart = %key, "Assigned cart key to session");
        key
    };

    Ok(state.carts().get_or_create(&key))
}

/// Snapshot of the session's cart for rendering.
async fn current_view(state: &AppState, session: &Session) -> Result<CartView> {
    Ok(match existing_cart(state, session).await? {
        Some(cart) => CartView::from(cart.lock().await.state()),
        None => CartView::empty(),
    })
}

// =============================================================================
// Forms
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub quantity: Option<u32>,
}

/// Update cart form data.
///
/// Signed so that zero and negative quantities reach the store, which treats
/// them as a removal.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
    /// Announced in the badge's live region after an add.
    pub message: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart page.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<impl IntoResponse> {
    Ok(CartShowTemplate {
        cart: current_view(&state, &session).await?,
    })
}

/// Get cart count badge (HTMX).
#[instrument(skip(state, session))]
pub async fn count(State(state): State<AppState>, session: Session) -> Result<impl IntoResponse> {
    let count = match existing_cart(&state, &session).await? {
        Some(cart) => cart.lock().await.item_count(),
        None => 0,
    };

    Ok(CartCountTemplate {
        count,
        message: None,
    })
}

/// Add `form.quantity` units of a catalog product to the session's cart.
///
/// Returns the product name and the new item count.
async fn add_to_session_cart(
    state: &AppState,
    session: &Session,
    form: &AddToCartForm,
) -> Result<(String, u64)> {
    let quantity = form.quantity.unwrap_or(1);
    if !(1..=MAX_ADD_QUANTITY).contains(&quantity) {
        return Err(AppError::BadRequest(format!(
            "quantity must be between 1 and {MAX_ADD_QUANTITY}"
        )));
    }

    let candidate = state
        .catalog()
        .get_product_by_id(&form.product_id)
        .map(volt_core::Product::cart_candidate)
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    let cart = session_cart(state, session).await?;
    let count = {
        let mut store = cart.lock().await;
        store.add_item_n(&candidate, quantity);
        store.item_count()
    };

    let quantity_str = quantity.to_string();
    add_breadcrumb(
        "cart",
        "Added to cart",
        Some(&[
            ("product_id", form.product_id.as_str()),
            ("quantity", quantity_str.as_str()),
        ]),
    );

    Ok((candidate.name, count))
}

/// Add item to cart (HTMX).
///
/// Returns the badge fragment with a confirmation message and an HTMX
/// trigger so every other cart view refreshes.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let (name, count) = add_to_session_cart(&state, &session, &form).await?;

    Ok((
        AppendHeaders([CART_UPDATED]),
        CartCountTemplate {
            count,
            message: Some(format!("{name} added to cart")),
        },
    )
        .into_response())
}

/// Add item to cart, then go straight to the cart page.
#[instrument(skip(state, session))]
pub async fn buy_now(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    add_to_session_cart(&state, &session, &form).await?;
    Ok(Redirect::to("/cart"))
}

/// Apply `mutate` to the session's cart, if any, and render the items fragment.
async fn mutate_cart(
    state: &AppState,
    session: &Session,
    mutate: impl FnOnce(&mut volt_core::CartStore),
) -> Result<Response> {
    let Some(cart) = existing_cart(state, session).await? else {
        return Ok(CartItemsTemplate {
            cart: CartView::empty(),
        }
        .into_response());
    };

    let view = {
        let mut store = cart.lock().await;
        mutate(&mut *store);
        CartView::from(store.state())
    };

    Ok((AppendHeaders([CART_UPDATED]), CartItemsTemplate { cart: view }).into_response())
}

/// Update cart item quantity (HTMX).
///
/// Zero or negative quantities remove the line. Quantities above
/// [`MAX_LINE_QUANTITY`] are rejected rather than clamped.
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response> {
    if form.quantity > i64::from(MAX_LINE_QUANTITY) {
        return Err(AppError::BadRequest(format!(
            "quantity must be at most {MAX_LINE_QUANTITY}"
        )));
    }

    mutate_cart(&state, &session, |store| {
        store.update_quantity(&form.product_id, form.quantity);
    })
    .await
}

/// Remove item from cart (HTMX).
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response> {
    add_breadcrumb(
        "cart",
        "Removed from cart",
        Some(&[("product_id", form.product_id.as_str())]),
    );
    mutate_cart(&state, &session, |store| store.remove_item(&form.product_id)).await
}

/// Empty the cart (HTMX).
#[instrument(skip(state, session))]
pub async fn clear(State(state): State<AppState>, session: Session) -> Result<Response> {
    add_breadcrumb("cart", "Cleared cart", None);
    mutate_cart(&state, &session, volt_core::CartStore::clear_cart).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use volt_core::{CartStore, Catalog};

    use super::*;

    fn store_with(ids: &[(&str, u32)]) -> CartStore {
        let catalog = Catalog::builtin();
        let mut store = CartStore::new();
        for (id, units) in ids {
            let product = catalog.get_product_by_id(id).unwrap();
            store.add_item_n(&product.cart_candidate(), *units);
        }
        store
    }

    #[test]
    fn test_empty_view() {
        let view = CartView::empty();
        assert!(view.is_empty());
        assert_eq!(view.item_count, 0);
        assert_eq!(view.summary.subtotal, "$0.00");
        assert_eq!(view.summary.free_shipping_remaining.as_deref(), Some("$50.00"));
    }

    #[test]
    fn test_view_reflects_lines_in_order() {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = catalog.products().iter().take(2).map(|p| p.id.as_str()).collect();
        let store = store_with(&[(ids[0], 2), (ids[1], 1)]);

        let view = CartView::from(store.state());
        assert_eq!(view.item_count, 3);
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].product_id, ids[0]);
        assert_eq!(view.items[0].quantity, 2);
        assert_eq!(view.items[1].product_id, ids[1]);
    }

    #[test]
    fn test_summary_view_free_shipping() {
        let summary = OrderSummary::for_subtotal(volt_core::Price::dollars(1798));
        let view = SummaryView::from(&summary);
        assert_eq!(view.shipping, "FREE");
        assert_eq!(view.tax, "$143.84");
        assert_eq!(view.total, "$1,941.84");
        assert!(view.free_shipping_remaining.is_none());
    }

    #[test]
    fn test_summary_view_flat_shipping() {
        let summary = OrderSummary::for_subtotal(volt_core::Price::dollars(40));
        let view = SummaryView::from(&summary);
        assert_eq!(view.shipping, "$9.99");
        assert_eq!(view.total, "$53.19");
        assert_eq!(view.free_shipping_remaining.as_deref(), Some("$10.00"));
    }
}
