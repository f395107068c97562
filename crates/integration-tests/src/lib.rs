//! Integration tests for the VOLT storefront.
//!
//! Each test spawns the full storefront router on an ephemeral local port and
//! drives it over HTTP with a cookie-keeping client, so sessions, carts and
//! templates are exercised exactly as a browser would.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p volt-integration-tests
//! ```

use reqwest::{Client, Response, redirect};
use secrecy::SecretString;
use tokio::net::TcpListener;
use volt_storefront::config::StorefrontConfig;
use volt_storefront::state::AppState;

/// Session secret used by every spawned storefront.
const TEST_SESSION_SECRET: &str =
    "k7Qz2mV9xR4pL8nB3wT6yH1cJ5fD0sGaZ2qX7vN4bM9kP3rW8tY6uE1iO5lC0hFj";

/// A storefront running on a local port for the duration of a test.
pub struct TestStorefront {
    pub base_url: String,
    pub state: AppState,
}

impl TestStorefront {
    /// Start a storefront with the built-in catalog.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot be configured or bound.
    pub async fn spawn() -> Self {
        let config = StorefrontConfig::local(SecretString::from(TEST_SESSION_SECRET))
            .expect("Test config should be valid");
        let state = AppState::new(config);
        let app = volt_storefront::app(state.clone()).expect("Failed to build app");

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server error");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// A fresh browser: its own cookie jar, redirects not followed.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[must_use]
    pub fn browser(&self) -> Browser {
        let client = Client::builder()
            .cookie_store(true)
            .redirect(redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Browser {
            client,
            base_url: self.base_url.clone(),
        }
    }
}

/// One shopper's session against a [`TestStorefront`].
pub struct Browser {
    client: Client,
    base_url: String,
}

impl Browser {
    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET path`.
    ///
    /// # Panics
    ///
    /// Panics if the request fails to send.
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    /// `GET path`, returning the body text.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the body cannot be read.
    pub async fn get_text(&self, path: &str) -> String {
        self.get(path)
            .await
            .text()
            .await
            .expect("Failed to read response body")
    }

    /// `POST path` with a URL-encoded form body.
    ///
    /// # Panics
    ///
    /// Panics if the request fails to send.
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST request failed")
    }

    /// Add `quantity` units of `product_id` via the HTMX endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or is rejected.
    pub async fn add_to_cart(&self, product_id: &str, quantity: u32) -> Response {
        let quantity = quantity.to_string();
        let resp = self
            .post_form(
                "/cart/add",
                &[("product_id", product_id), ("quantity", quantity.as_str())],
            )
            .await;
        assert!(
            resp.status().is_success(),
            "add_to_cart({product_id}) returned {}",
            resp.status()
        );
        resp
    }

    /// The nav badge fragment.
    pub async fn cart_count(&self) -> String {
        self.get_text("/cart/count").await.trim().to_string()
    }
}
