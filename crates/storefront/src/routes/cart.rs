//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself is persisted as a snapshot in the session (see
//! [`crate::services::cart`]); every mutation handler loads the latest
//! state, applies the operation, persists the result, and returns the cart
//! items fragment with an `HX-Trigger` so the count badge refreshes itself.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use solara_core::{Cart, CartItem, ProductId};

use crate::filters;
use crate::services::{cart as cart_store, whatsapp};
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub product_id: String,
    pub title: String,
    pub unit_price: String,
    pub line_total: String,
    pub quantity: u32,
    pub image: String,
    pub link: String,
}

impl From<&CartItem> for CartLineView {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product.id.to_string(),
            title: item.product.title.clone(),
            unit_price: item.product.price.to_string(),
            line_total: item.line_total().to_string(),
            quantity: item.quantity,
            image: item
                .product
                .primary_image()
                .unwrap_or("/static/placeholder.svg")
                .to_owned(),
            link: item.link.clone(),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub subtotal: String,
    pub count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(Into::into).collect(),
            subtotal: cart.subtotal().to_string(),
            count: cart.total_quantity(),
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
    /// Delete the whole line instead of decrementing.
    #[serde(default)]
    pub remove_all: bool,
}

/// Cart page query parameters.
#[derive(Debug, Deserialize)]
pub struct CartPageQuery {
    pub notice: Option<String>,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    /// Checkout bounced back because the cart was empty.
    pub notice_empty: bool,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Items fragment plus the trigger that refreshes the count badge.
fn items_response(cart: &Cart) -> Response {
    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(cart),
        },
    )
        .into_response()
}

/// Display the cart page.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CartPageQuery>,
) -> impl IntoResponse {
    let cart = cart_store::load(&session, state.link_base()).await;

    CartShowTemplate {
        cart: CartView::from(&cart),
        notice_empty: query.notice.as_deref() == Some("empty"),
    }
}

/// Add one unit of a product to the cart (HTMX).
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Response {
    let id = ProductId::new(form.product_id);
    let Some(product) = state.catalog().product_by_id(&id).await else {
        tracing::warn!(id = %id, "Add to cart for unknown product");
        return (
            StatusCode::NOT_FOUND,
            Html("<span class=\"error\">Product is no longer available</span>"),
        )
            .into_response();
    };

    let mut cart = cart_store::load(&session, state.link_base()).await;
    cart.add(product, state.link_base());
    cart_store::save(&session, &cart).await;

    items_response(&cart)
}

/// Remove one unit, or the whole line with `remove_all` (HTMX).
///
/// Removing a product that is not in the cart is a no-op.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Response {
    let mut cart = cart_store::load(&session, state.link_base()).await;
    cart.remove(&ProductId::new(form.product_id), form.remove_all);
    cart_store::save(&session, &cart).await;

    items_response(&cart)
}

/// Empty the cart (HTMX).
#[instrument(skip(state, session))]
pub async fn clear(State(state): State<AppState>, session: Session) -> Response {
    let mut cart = cart_store::load(&session, state.link_base()).await;
    cart.clear();
    cart_store::save(&session, &cart).await;

    items_response(&cart)
}

/// Get the cart count badge (HTMX).
#[instrument(skip(state, session))]
pub async fn count(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let cart = cart_store::load(&session, state.link_base()).await;
    CartCountTemplate {
        count: cart.total_quantity(),
    }
}

/// Hand the order off to WhatsApp.
///
/// An empty cart never reaches WhatsApp: the user is sent back to the cart
/// page with a blocking notice instead.
#[instrument(skip(state, session))]
pub async fn checkout(State(state): State<AppState>, session: Session) -> Response {
    let cart = cart_store::load(&session, state.link_base()).await;

    match whatsapp::order_link(&state.config().whatsapp_phone, &cart) {
        Some(url) => Redirect::to(&url).into_response(),
        None => Redirect::to("/cart?notice=empty").into_response(),
    }
}
