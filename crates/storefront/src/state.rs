//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the database pool, configuration, and the catalog
/// query layer.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    pool: PgPool,
    catalog: Catalog,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig, pool: PgPool) -> Self {
        let catalog = Catalog::new(pool.clone());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                catalog,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the catalog query layer.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Base URL used for deterministic product links.
    #[must_use]
    pub fn link_base(&self) -> &str {
        &self.inner.config.base_url
    }
}
