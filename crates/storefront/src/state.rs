//! Application state shared across handlers.

use std::sync::Arc;

use volt_core::Catalog;

use crate::carts::CartRegistry;
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the product catalog and every live cart.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    carts: CartRegistry,
}

impl AppState {
    /// Create application state around the built-in catalog.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self::with_catalog(config, Catalog::builtin())
    }

    /// Create application state around an explicit catalog.
    #[must_use]
    pub fn with_catalog(config: StorefrontConfig, catalog: Catalog) -> Self {
        let carts = CartRegistry::new(config.max_carts, config.session_idle);
        tracing::info!(
            products = catalog.len(),
            max_carts = config.max_carts,
            "Storefront state initialized"
        );

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                carts,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the cart registry.
    #[must_use]
    pub fn carts(&self) -> &CartRegistry {
        &self.inner.carts
    }
}
