//! Checkout route handlers.
//!
//! There is no payment step: a valid form places the order locally, empties
//! the cart and lands on the confirmation page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::instrument;
use volt_core::checkout::{CheckoutField, FieldErrors};
use volt_core::{CheckoutError, CheckoutForm, PlacedOrder, place_order};

use super::cart::{CartItemView, CartView, SummaryView, existing_cart};
use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::models::session_keys;
use crate::state::AppState;

/// One input on the checkout form.
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input_type: &'static str,
    pub autocomplete: &'static str,
    pub value: String,
    pub error: Option<&'static str>,
}

impl FieldView {
    fn new(field: CheckoutField, form: &CheckoutForm, errors: &FieldErrors) -> Self {
        let (input_type, autocomplete) = match field {
            CheckoutField::FirstName => ("text", "given-name"),
            CheckoutField::LastName => ("text", "family-name"),
            CheckoutField::Email => ("email", "email"),
            CheckoutField::Address => ("text", "street-address"),
            CheckoutField::City => ("text", "address-level2"),
            CheckoutField::Country => ("text", "country-name"),
            CheckoutField::Zip => ("text", "postal-code"),
            CheckoutField::CardNumber => ("text", "cc-number"),
            CheckoutField::Expiry => ("text", "cc-exp"),
            CheckoutField::Cvv => ("password", "cc-csc"),
        };

        // Card secrets are never echoed back into the page.
        let value = match field {
            CheckoutField::CardNumber | CheckoutField::Cvv => String::new(),
            _ => form.value(field).to_string(),
        };

        Self {
            name: field.name(),
            label: field.label(),
            placeholder: field.placeholder(),
            input_type,
            autocomplete,
            value,
            error: errors.get(field),
        }
    }
}

/// Build the view of every form field, in display order.
fn field_views(form: &CheckoutForm, errors: &FieldErrors) -> Vec<FieldView> {
    CheckoutField::ALL
        .into_iter()
        .map(|field| FieldView::new(field, form, errors))
        .collect()
}

/// Checkout form page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub fields: Vec<FieldView>,
    pub error_count: usize,
    pub cart: CartView,
}

/// Shown instead of the form when there is nothing to buy.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/empty.html")]
pub struct CheckoutEmptyTemplate;

/// Order confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/confirmed.html")]
pub struct ConfirmedTemplate {
    pub order_number: String,
    pub customer_name: String,
    pub email: String,
    pub items: Vec<CartItemView>,
    pub item_count: u64,
    pub summary: SummaryView,
    pub placed_at: String,
}

impl From<&PlacedOrder> for ConfirmedTemplate {
    fn from(order: &PlacedOrder) -> Self {
        Self {
            order_number: order.order_number.to_string(),
            customer_name: order.customer_name.clone(),
            email: order.email.to_string(),
            items: order.lines.iter().map(CartItemView::from).collect(),
            item_count: order.item_count(),
            summary: SummaryView::from(&order.summary),
            placed_at: order.placed_at.format("%B %-d, %Y at %H:%M UTC").to_string(),
        }
    }
}

/// The session's cart as a view, or `None` when there is nothing in it.
async fn checkout_cart(state: &AppState, session: &Session) -> Result<Option<CartView>> {
    let Some(cart) = existing_cart(state, session).await? else {
        return Ok(None);
    };
    let view = CartView::from(cart.lock().await.state());
    Ok((!view.is_empty()).then_some(view))
}

/// Display the checkout form.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Response> {
    let Some(cart) = checkout_cart(&state, &session).await? else {
        return Ok(CheckoutEmptyTemplate.into_response());
    };

    Ok(CheckoutTemplate {
        fields: field_views(&CheckoutForm::default(), &FieldErrors::default()),
        error_count: 0,
        cart,
    }
    .into_response())
}

/// Validate the form and place the order.
///
/// Invalid submissions re-render the form with inline errors and a 422.
#[instrument(skip(state, session, form))]
pub async fn place(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CheckoutForm>,
) -> Result<Response> {
    let Some(cart) = existing_cart(&state, &session).await? else {
        return Ok(Redirect::to("/checkout").into_response());
    };

    let (result, view) = {
        let mut store = cart.lock().await;
        let result = place_order(&mut store, &form, &mut rand::rng());
        (result, CartView::from(store.state()))
    };

    match result {
        Ok(order) => {
            add_breadcrumb(
                "checkout",
                "Order placed",
                Some(&[("order_number", order.order_number.as_str())]),
            );
            tracing::info!(
                order_number = %order.order_number,
                items = order.item_count(),
                total = %order.summary.total,
                "Order placed"
            );
            session.insert(session_keys::LAST_ORDER, &order).await?;
            Ok(Redirect::to("/checkout/confirmed").into_response())
        }
        Err(CheckoutError::EmptyCart) => Ok(Redirect::to("/checkout").into_response()),
        Err(CheckoutError::Invalid(errors)) => {
            tracing::debug!(invalid_fields = errors.len(), "Checkout form rejected");
            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                CheckoutTemplate {
                    fields: field_views(&form.normalized(), &errors),
                    error_count: errors.len(),
                    cart: view,
                },
            )
                .into_response())
        }
    }
}

/// Display the confirmation for the order this session just placed.
#[instrument(skip(session))]
pub async fn confirmed(session: Session) -> Result<Response> {
    let Some(order) = session
        .get::<PlacedOrder>(session_keys::LAST_ORDER)
        .await?
    else {
        return Ok(Redirect::to("/").into_response());
    };

    Ok(ConfirmedTemplate::from(&order).into_response())
}
