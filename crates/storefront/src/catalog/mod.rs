//! Catalog query layer over the `products` table.
//!
//! This module owns the boundary to the product data service. Retrieval
//! failures do not propagate to handlers as errors: they are logged and
//! converted into empty results, with the failed-vs-empty distinction kept
//! on [`ProductFetch`] for callers that want to show a "failed to load"
//! affordance instead of "no results".
//!
//! The full collection and everything derived from it (categories, filter
//! options, free-text search) is cached with a 5-minute TTL.

mod options;
mod query;
mod search;

pub use options::FilterOptions;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use sqlx::PgPool;
use thiserror::Error;
use tracing::instrument;

use solara_core::{Category, FilterCriteria, Product, ProductId};

/// Error talking to the catalog backend.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A product list fetch that never raises.
///
/// `failed` is true when the backend could not be reached; the product list
/// is empty in that case. Callers that do not care can treat both states as
/// "nothing to show".
#[derive(Debug, Clone, Default)]
pub struct ProductFetch {
    pub products: Vec<Product>,
    pub failed: bool,
}

impl ProductFetch {
    fn from_result(result: Result<Vec<Product>, CatalogError>, context: &str) -> Self {
        match result {
            Ok(products) => Self {
                products,
                failed: false,
            },
            Err(e) => {
                tracing::error!(error = %e, context, "Catalog fetch failed");
                Self {
                    products: Vec::new(),
                    failed: true,
                }
            }
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Cache keys for derived collection data.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
enum CacheKey {
    AllProducts,
}

const CACHE_TTL: Duration = Duration::from_secs(300);

/// Client for the product catalog.
///
/// Cheaply cloneable; the pool and cache are shared.
#[derive(Clone)]
pub struct Catalog {
    pool: PgPool,
    cache: Cache<CacheKey, Arc<Vec<Product>>>,
}

impl Catalog {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        let cache = Cache::builder()
            .max_capacity(8)
            .time_to_live(CACHE_TTL)
            .build();
        Self { pool, cache }
    }

    /// Fetch products matching the criteria.
    #[instrument(skip(self))]
    pub async fn query_products(&self, criteria: &FilterCriteria) -> ProductFetch {
        let result = async {
            let mut qb = query::build_products_query(criteria);
            Ok(qb.build_query_as::<Product>().fetch_all(&self.pool).await?)
        }
        .await;
        ProductFetch::from_result(result, "query_products")
    }

    /// Fetch featured products, optionally limited.
    #[instrument(skip(self))]
    pub async fn featured_products(&self, limit: Option<i64>) -> ProductFetch {
        let result = async {
            let mut qb = query::build_featured_query(limit);
            Ok(qb.build_query_as::<Product>().fetch_all(&self.pool).await?)
        }
        .await;
        ProductFetch::from_result(result, "featured_products")
    }

    /// Fetch products in a category (slug or raw value, case-insensitive).
    #[instrument(skip(self))]
    pub async fn products_by_category(&self, category: &str) -> ProductFetch {
        let result = async {
            let mut qb = query::build_category_query(category);
            Ok(qb.build_query_as::<Product>().fetch_all(&self.pool).await?)
        }
        .await;
        ProductFetch::from_result(result, "products_by_category")
    }

    /// Look up a single product.
    ///
    /// `None` means missing (or unreachable backend, which is logged); the
    /// caller renders a not-found view either way.
    #[instrument(skip(self))]
    pub async fn product_by_id(&self, id: &ProductId) -> Option<Product> {
        let result = sqlx::query_as::<_, Product>(&format!(
            "{} WHERE id = $1",
            query::SELECT_PRODUCTS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        match result {
            Ok(product) => product,
            Err(e) => {
                tracing::error!(error = %e, id = %id, "Product lookup failed");
                None
            }
        }
    }

    /// Free-text search over the full collection.
    ///
    /// An empty query yields an empty (successful) result.
    #[instrument(skip(self))]
    pub async fn search(&self, query_text: &str) -> ProductFetch {
        if query_text.trim().is_empty() {
            return ProductFetch::default();
        }
        match self.all_products().await {
            Ok(products) => ProductFetch {
                products: search::filter_products(&products, query_text),
                failed: false,
            },
            Err(e) => {
                tracing::error!(error = %e, "Search fetch failed");
                ProductFetch {
                    products: Vec::new(),
                    failed: true,
                }
            }
        }
    }

    /// Derive the category list from the full collection.
    ///
    /// Retrieval failure is logged and yields an empty list.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Vec<Category> {
        match self.all_products().await {
            Ok(products) => Category::derive(products.iter().map(|p| p.category.clone())),
            Err(e) => {
                tracing::error!(error = %e, "Category fetch failed");
                Vec::new()
            }
        }
    }

    /// Derive filter options (distinct attribute values, price range).
    ///
    /// Retrieval failure is logged and yields empty option sets.
    #[instrument(skip(self))]
    pub async fn filter_options(&self) -> FilterOptions {
        match self.all_products().await {
            Ok(products) => options::derive_options(&products),
            Err(e) => {
                tracing::error!(error = %e, "Filter option fetch failed");
                FilterOptions::default()
            }
        }
    }

    /// The full product collection, cached for 5 minutes.
    async fn all_products(&self) -> Result<Arc<Vec<Product>>, CatalogError> {
        if let Some(products) = self.cache.get(&CacheKey::AllProducts).await {
            return Ok(products);
        }
        let products = Arc::new(
            sqlx::query_as::<_, Product>(query::SELECT_PRODUCTS)
                .fetch_all(&self.pool)
                .await?,
        );
        self.cache
            .insert(CacheKey::AllProducts, Arc::clone(&products))
            .await;
        Ok(products)
    }
}
