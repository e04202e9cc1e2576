//! Search route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::routes::products::ProductCard;
use crate::state::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Full search page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/search.html")]
pub struct SearchPageTemplate {
    pub query: String,
    pub products: Vec<ProductCard>,
    /// A non-empty query was submitted (an empty box shows a prompt).
    pub searched: bool,
    pub failed: bool,
}

/// Search suggestions template (HTMX fragment).
#[derive(Template, WebTemplate)]
#[template(path = "partials/search_results.html")]
pub struct SearchResultsTemplate {
    pub products: Vec<ProductCard>,
    pub searched: bool,
}

/// Full search page.
#[instrument(skip(state))]
pub async fn search_page(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    let trimmed = query.q.trim();
    let searched = !trimmed.is_empty();
    let fetch = state.catalog().search(trimmed).await;

    SearchPageTemplate {
        query: query.q.clone(),
        products: fetch.products.iter().map(Into::into).collect(),
        searched,
        failed: fetch.failed,
    }
}

/// Search suggestions endpoint (HTMX).
#[instrument(skip(state))]
pub async fn suggest(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    let trimmed = query.q.trim();
    let searched = !trimmed.is_empty();
    let fetch = state.catalog().search(trimmed).await;

    SearchResultsTemplate {
        products: fetch.products.iter().map(Into::into).collect(),
        searched,
    }
}

/// Create the search routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(search_page))
        .route("/suggest", get(suggest))
}
