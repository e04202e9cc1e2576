//! Session-backed cart persistence.
//!
//! The cart snapshot lives in a single session slot as a JSON string, the
//! storefront's durable per-browser storage. Every mutation re-serializes
//! the full cart into the slot (last-write-wins; concurrent tabs are not
//! merged).
//!
//! A snapshot that fails to parse is discarded: hydration substitutes an
//! empty cart and overwrites the slot so the corruption does not reappear on
//! the next load.

use solara_core::Cart;
use tower_sessions::Session;

/// Session slot holding the serialized cart snapshot.
pub const CART_KEY: &str = "cart";

/// Load the cart from the session.
///
/// Missing slot means a fresh, empty cart. A corrupt slot is logged,
/// cleared, and replaced with an empty cart.
pub async fn load(session: &Session, link_base: &str) -> Cart {
    let raw = match session.get::<String>(CART_KEY).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return Cart::new(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read cart from session");
            return Cart::new();
        }
    };

    match Cart::from_snapshot(&raw, link_base) {
        Ok(cart) => cart,
        Err(e) => {
            tracing::warn!(error = %e, "Discarding corrupt cart snapshot");
            let empty = Cart::new();
            save(session, &empty).await;
            empty
        }
    }
}

/// Persist the cart's current state into the session slot.
///
/// Serialization or session failures are logged, never surfaced: a cart
/// mutation always succeeds from the user's point of view.
pub async fn save(session: &Session, cart: &Cart) {
    let snapshot = match cart.to_snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize cart snapshot");
            return;
        }
    };
    if let Err(e) = session.insert(CART_KEY, snapshot).await {
        tracing::error!(error = %e, "Failed to persist cart to session");
    }
}
