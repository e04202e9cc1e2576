//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use solara_core::Category;

use crate::filters;
use crate::routes::products::ProductCard;
use crate::state::AppState;

/// Featured products shown on the home page.
const FEATURED_LIMIT: i64 = 8;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub featured: Vec<ProductCard>,
    pub categories: Vec<Category>,
    pub failed: bool,
}

/// Display the home page: featured products plus category navigation.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let fetch = state.catalog().featured_products(Some(FEATURED_LIMIT)).await;
    let categories = state.catalog().categories().await;

    HomeTemplate {
        featured: fetch.products.iter().map(Into::into).collect(),
        categories,
        failed: fetch.failed,
    }
}
