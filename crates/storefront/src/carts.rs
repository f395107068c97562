//! In-memory cart registry.
//!
//! Each browser session owns one [`CartStore`]. The session cookie only holds
//! an opaque [`CartKey`]; the store itself lives here, behind a per-cart
//! mutex so concurrent requests from one session apply in order.
//!
//! Carts idle for longer than the session lifetime are evicted, and the
//! registry never holds more than the configured number of carts.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;
use volt_core::{CartEvent, CartState, CartStore};

/// A cart shared between the requests of one session.
pub type SharedCart = Arc<Mutex<CartStore>>;

/// Opaque identifier stored in the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartKey(Uuid);

impl CartKey {
    /// A fresh random key.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for CartKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Owns every live cart.
#[derive(Clone)]
pub struct CartRegistry {
    carts: Cache<CartKey, SharedCart>,
}

impl CartRegistry {
    /// Create a registry bounded to `max_carts` entries, evicting carts
    /// untouched for `idle`.
    #[must_use]
    pub fn new(max_carts: u64, idle: Duration) -> Self {
        let carts = Cache::builder()
            .max_capacity(max_carts)
            .time_to_idle(idle)
            .build();
        Self { carts }
    }

    /// The cart for `key`, if it is still live.
    #[must_use]
    pub fn get(&self, key: &CartKey) -> Option<SharedCart> {
        self.carts.get(key)
    }

    /// The cart for `key`, creating an empty one if needed.
    #[must_use]
    pub fn get_or_create(&self, key: &CartKey) -> SharedCart {
        self.carts.get_with(*key, || {
            tracing::debug!(cart = %key, "Creating cart");
            Arc::new(Mutex::new(new_store(*key)))
        })
    }

    /// Drop the cart for `key`.
    pub fn remove(&self, key: &CartKey) {
        self.carts.invalidate(key);
    }

    /// Approximate number of live carts.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.carts.run_pending_tasks();
        self.carts.entry_count()
    }

    /// Whether no cart is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for CartRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartRegistry")
            .field("carts", &self.carts.entry_count())
            .finish()
    }
}

/// A new empty store that logs every change.
fn new_store(key: CartKey) -> CartStore {
    let mut store = CartStore::new();
    store.subscribe(move |event: &CartEvent, state: &CartState| {
        let product_id = match event {
            CartEvent::ItemAdded { product_id, .. }
            | CartEvent::ItemRemoved { product_id }
            | CartEvent::QuantityUpdated { product_id, .. } => Some(product_id.as_str()),
            CartEvent::Cleared => None,
        };
        tracing::debug!(
            cart = %key,
            ?event,
            product_id,
            item_count = state.item_count(),
            total = %state.total(),
            "Cart changed"
        );
    });
    store
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use volt_core::Catalog;

    use super::*;

    fn registry() -> CartRegistry {
        CartRegistry::new(100, Duration::from_secs(60))
    }

    #[tokio::test]
    async fn test_get_or_create_returns_same_cart() {
        let registry = registry();
        let key = CartKey::generate();
        assert!(registry.get(&key).is_none());

        let catalog = Catalog::builtin();
        let product = catalog.get_product_by_id("volt-x1").unwrap();
        registry
            .get_or_create(&key)
            .lock()
            .await
            .add_item(product.cart_candidate());

        let again = registry.get(&key).unwrap();
        assert_eq!(again.lock().await.item_count(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let registry = registry();
        let catalog = Catalog::builtin();
        let product = catalog.get_product_by_id("volt-edge").unwrap();

        let first = CartKey::generate();
        let second = CartKey::generate();
        registry
            .get_or_create(&first)
            .lock()
            .await
            .add_item(product.cart_candidate());

        assert!(registry.get_or_create(&second).lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_adds_are_linearised() {
        let registry = registry();
        let key = CartKey::generate();
        let catalog = Catalog::builtin();
        let candidate = catalog.get_product_by_id("volt-lite").unwrap().cart_candidate();

        let mut tasks = Vec::new();
        for _ in 0..50 {
            let cart = registry.get_or_create(&key);
            let candidate = candidate.clone();
            tasks.push(tokio::spawn(async move {
                cart.lock().await.add_item(candidate);
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        let cart = registry.get(&key).unwrap();
        let store = cart.lock().await;
        assert_eq!(store.lines().len(), 1);
        assert_eq!(store.item_count(), 50);
    }

    #[tokio::test]
    async fn test_remove() {
        let registry = registry();
        let key = CartKey::generate();
        let _ = registry.get_or_create(&key);
        registry.remove(&key);
        assert!(registry.get(&key).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_cart_key_serializes_as_uuid_string() {
        let key = CartKey::generate();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, format!("\"{key}\""));
    }
}
