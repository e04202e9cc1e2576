//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use solara_core::{Category, FilterCriteria, Product, ProductId, fallback_link, slugify};

use crate::catalog::FilterOptions;
use crate::filters;
use crate::services::whatsapp;
use crate::state::AppState;

/// Image shown when a product has none.
const PLACEHOLDER_IMAGE: &str = "/static/placeholder.svg";

/// Related products shown on the detail page.
const RELATED_LIMIT: usize = 4;

/// Product card display data for grid templates.
#[derive(Clone)]
pub struct ProductCard {
    pub id: String,
    pub title: String,
    pub price: String,
    pub image: String,
    pub category: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            price: product.price.to_string(),
            image: product
                .primary_image()
                .unwrap_or(PLACEHOLDER_IMAGE)
                .to_owned(),
            category: product.category.clone(),
        }
    }
}

/// Product detail display data.
#[derive(Clone)]
pub struct ProductDetail {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub images: Vec<String>,
    pub category: String,
    pub color: String,
    pub material: String,
    pub shape: String,
    pub gender: String,
    pub flexibility: String,
}

impl From<&Product> for ProductDetail {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            image: product
                .primary_image()
                .unwrap_or(PLACEHOLDER_IMAGE)
                .to_owned(),
            images: product.images.clone(),
            category: product.category.clone(),
            color: product.color.clone(),
            material: product.material.clone(),
            shape: product.shape.clone(),
            gender: product.gender.clone(),
            flexibility: product.flexibility.clone(),
        }
    }
}

/// Raw filter query parameters, mirrored in the URL so filtered views are
/// shareable and restorable.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub category: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
    pub shape: Option<String>,
    pub gender: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

impl FilterParams {
    /// Normalize into recognized criteria; junk values fall away here.
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_params([
            ("category", self.category.as_deref().unwrap_or("")),
            ("color", self.color.as_deref().unwrap_or("")),
            ("material", self.material.as_deref().unwrap_or("")),
            ("shape", self.shape.as_deref().unwrap_or("")),
            ("gender", self.gender.as_deref().unwrap_or("")),
            ("min_price", self.min_price.as_deref().unwrap_or("")),
            ("max_price", self.max_price.as_deref().unwrap_or("")),
        ])
    }
}

/// Normalized filter state echoed back into the filter form.
#[derive(Clone, Default)]
pub struct SelectedFilters {
    pub category: String,
    pub color: String,
    pub material: String,
    pub shape: String,
    pub gender: String,
    pub min_price: String,
    pub max_price: String,
}

impl From<&FilterCriteria> for SelectedFilters {
    fn from(criteria: &FilterCriteria) -> Self {
        Self {
            category: criteria.category().unwrap_or_default().to_owned(),
            color: criteria.color().unwrap_or_default().to_owned(),
            material: criteria.material().unwrap_or_default().to_owned(),
            shape: criteria.shape().unwrap_or_default().to_owned(),
            gender: criteria.gender().unwrap_or_default().to_owned(),
            min_price: criteria.min_price().map(|p| p.to_string()).unwrap_or_default(),
            max_price: criteria.max_price().map(|p| p.to_string()).unwrap_or_default(),
        }
    }
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductCard>,
    pub categories: Vec<Category>,
    pub options: FilterOptions,
    pub selected: SelectedFilters,
    pub failed: bool,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductDetail,
    pub related: Vec<ProductCard>,
}

/// Not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate;

/// Display the product listing page with active filters.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> impl IntoResponse {
    let criteria = params.criteria();
    let fetch = state.catalog().query_products(&criteria).await;
    let categories = state.catalog().categories().await;
    let options = state.catalog().filter_options().await;

    ProductsIndexTemplate {
        products: fetch.products.iter().map(Into::into).collect(),
        categories,
        options,
        selected: SelectedFilters::from(&criteria),
        failed: fetch.failed,
    }
}

/// Display the product detail page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = ProductId::new(id);
    let Some(product) = state.catalog().product_by_id(&id).await else {
        return not_found();
    };

    let related_fetch = state
        .catalog()
        .products_by_category(&slugify(&product.category))
        .await;
    let related = related_fetch
        .products
        .iter()
        .filter(|p| p.id != product.id)
        .take(RELATED_LIMIT)
        .map(Into::into)
        .collect();

    ProductShowTemplate {
        product: ProductDetail::from(&product),
        related,
    }
    .into_response()
}

/// Per-product WhatsApp inquiry: redirect to the pre-filled conversation.
#[instrument(skip(state))]
pub async fn inquire(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = ProductId::new(id);
    let Some(product) = state.catalog().product_by_id(&id).await else {
        return not_found();
    };

    let link = product
        .link
        .clone()
        .unwrap_or_else(|| fallback_link(state.link_base(), &product.id));
    let url = whatsapp::inquiry_link(&state.config().whatsapp_phone, &product.title, &link);
    Redirect::to(&url).into_response()
}

/// A 404 page response.
pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, NotFoundTemplate).into_response()
}
