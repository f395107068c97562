//! Integration tests for checkout and order confirmation.

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;
use volt_integration_tests::{Browser, TestStorefront};

const VALID_FORM: &[(&str, &str)] = &[
    ("first_name", "Ada"),
    ("last_name", "Lovelace"),
    ("email", "ada@volt.io"),
    ("address", "1 Analytical Way"),
    ("city", "London"),
    ("country", "United Kingdom"),
    ("zip", "N1 9GU"),
    ("card_number", "4242424242424242"),
    ("expiry", "1230"),
    ("cvv", "123"),
];

/// `VALID_FORM` with `field` replaced by `value`.
fn form_with(field: &str, value: &'static str) -> Vec<(&'static str, &'static str)> {
    VALID_FORM
        .iter()
        .map(|&(name, v)| if name == field { (name, value) } else { (name, v) })
        .collect()
}

async fn place(browser: &Browser, form: &[(&str, &str)]) -> reqwest::Response {
    browser.post_form("/checkout", form).await
}

#[tokio::test]
async fn test_checkout_with_empty_cart_shows_empty_page() {
    let app = TestStorefront::spawn().await;
    let resp = app.browser().get("/checkout").await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.text().await.unwrap().contains("Nothing to check out"));
}

#[tokio::test]
async fn test_checkout_form_shows_summary() {
    let app = TestStorefront::spawn().await;
    let browser = app.browser();
    browser.add_to_cart("volt-charger-120w", 1).await;

    let body = browser.get_text("/checkout").await;
    assert!(body.contains("Shipping Information"));
    assert!(body.contains("name=\"card_number\""));
    assert!(body.contains("$63.72"));
}

#[tokio::test]
async fn test_placing_empty_cart_redirects_back() {
    let app = TestStorefront::spawn().await;
    let resp = place(&app.browser(), VALID_FORM).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get("location").unwrap(), "/checkout");
}

#[tokio::test]
async fn test_invalid_form_shows_inline_errors_and_keeps_cart() {
    let app = TestStorefront::spawn().await;
    let browser = app.browser();
    browser.add_to_cart("volt-x1", 2).await;

    let resp = place(&browser, &form_with("email", "not-an-email")).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = resp.text().await.unwrap();
    assert!(body.contains("Valid email required"));
    assert!(body.contains("value=\"not-an-email\""));
    assert!(body.contains("Please fix the 1 highlighted field."));

    assert!(browser.cart_count().await.contains(">2<"));
}

#[tokio::test]
async fn test_every_blank_field_is_reported() {
    let app = TestStorefront::spawn().await;
    let browser = app.browser();
    browser.add_to_cart("volt-x1", 1).await;

    let resp = place(&browser, &[]).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = resp.text().await.unwrap();
    assert!(body.contains("Please fix the 10 highlighted fields."));
    assert!(body.contains("16-digit card number required"));
    assert!(body.contains("MM/YY format required"));
    assert!(body.contains("3-4 digits required"));
}

#[tokio::test]
async fn test_card_details_are_not_echoed() {
    let app = TestStorefront::spawn().await;
    let browser = app.browser();
    browser.add_to_cart("volt-x1", 1).await;

    let resp = place(&browser, &form_with("first_name", "")).await;
    let body = resp.text().await.unwrap();

    assert!(body.contains("Required"));
    assert!(!body.contains("4242"));
    assert!(body.contains("value=\"12/30\""));
}

#[tokio::test]
async fn test_successful_checkout_clears_cart_and_confirms() {
    let app = TestStorefront::spawn().await;
    let browser = app.browser();
    browser.add_to_cart("volt-anc-pro", 1).await;
    browser.add_to_cart("volt-hub-pro", 2).await;

    let resp = place(&browser, VALID_FORM).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get("location").unwrap(),
        "/checkout/confirmed"
    );

    assert_eq!(browser.cart_count().await, "");

    let body = browser.get_text("/checkout/confirmed").await;
    assert!(body.contains("Order Confirmed!"));
    assert!(body.contains("VOLT-"));
    assert!(body.contains("Ada Lovelace"));
    assert!(body.contains("ada@volt.io"));
    assert!(body.contains("3 items"));
    // 299 + 2 × 89 = 477, tax 38.16, free shipping
    assert!(body.contains("$515.16"));

    let checkout = browser.get_text("/checkout").await;
    assert!(checkout.contains("Nothing to check out"));
}

#[tokio::test]
async fn test_confirmation_without_order_redirects_home() {
    let app = TestStorefront::spawn().await;
    let resp = app.browser().get("/checkout/confirmed").await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get("location").unwrap(), "/");
}

#[tokio::test]
async fn test_orders_are_private_to_their_session() {
    let app = TestStorefront::spawn().await;
    let buyer = app.browser();
    let other = app.browser();

    buyer.add_to_cart("volt-watch", 1).await;
    place(&buyer, VALID_FORM).await;

    let resp = other.get("/checkout/confirmed").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}
