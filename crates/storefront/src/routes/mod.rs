//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Product listing (filters in query params)
//! GET  /products/{id}          - Product detail
//! GET  /products/{id}/inquire  - WhatsApp inquiry redirect
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add one unit (returns cart_items fragment)
//! POST /cart/remove            - Decrement or delete a line
//! POST /cart/clear             - Empty the cart
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout               - WhatsApp order handoff redirect
//!
//! # Search
//! GET  /search                 - Search page
//! GET  /search/suggest         - Search suggestions fragment (HTMX)
//! ```

pub mod cart;
pub mod home;
pub mod products;
pub mod search;

use axum::{
    Router,
    response::Response,
    routing::{get, post},
};

use crate::state::AppState;

/// Catch-all 404 handler.
async fn not_found() -> Response {
    products::not_found()
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
        .route("/{id}/inquire", get(products::inquire))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout redirect
        .route("/checkout", get(cart::checkout))
        // Search routes
        .nest("/search", search::router())
        // Catch-all 404 with the storefront chrome
        .fallback(not_found)
}
