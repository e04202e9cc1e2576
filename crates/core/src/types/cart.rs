//! Shopping cart state and its persisted snapshot format.
//!
//! The cart is an ordered collection of items keyed by product id: at most
//! one item per product, insertion order preserved. It is mutated only
//! through [`Cart::add`], [`Cart::remove`], and [`Cart::clear`]; callers are
//! expected to persist a fresh snapshot after every mutation
//! (last-write-wins, no merging across browser tabs).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Price, Product, ProductId};

/// A product in the cart with its quantity and resolved link.
///
/// Invariant: `quantity >= 1`. An item whose quantity would reach zero is
/// removed from the cart instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
    /// Always usable: the catalog link when present, otherwise the
    /// deterministic fallback computed at add or hydration time.
    pub link: String,
}

impl CartItem {
    /// Price of this line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Error parsing a persisted cart snapshot.
///
/// Hydration treats this as "corrupt slot": the snapshot is discarded and an
/// empty cart substituted. Deliberate fail-safe, not data loss to paper over.
#[derive(Debug, Error)]
#[error("invalid cart snapshot: {0}")]
pub struct SnapshotError(#[from] serde_json::Error);

/// The in-memory shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuild a cart from already-parsed items.
    ///
    /// Zero-quantity items are dropped, duplicate product ids collapse into
    /// the first occurrence, and missing links are synthesized with the same
    /// fallback rule as [`add`](Self::add), so every hydrated item honors the
    /// cart invariants regardless of what was persisted.
    #[must_use]
    pub fn hydrate(items: Vec<CartItem>, link_base: &str) -> Self {
        let mut cart = Self::new();
        for mut item in items {
            if item.quantity == 0 || cart.find(&item.product.id).is_some() {
                continue;
            }
            if item.link.trim().is_empty() {
                item.link = fallback_link(link_base, &item.product.id);
            }
            cart.items.push(item);
        }
        cart
    }

    /// Add one unit of `product`.
    ///
    /// An existing item's quantity is incremented; otherwise a new item is
    /// appended at quantity 1, with a fallback link synthesized from
    /// `link_base` when the product has none. Always succeeds.
    pub fn add(&mut self, product: Product, link_base: &str) {
        if let Some(item) = self.find_mut(&product.id) {
            item.quantity += 1;
            return;
        }
        let link = product
            .link
            .clone()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| fallback_link(link_base, &product.id));
        self.items.push(CartItem {
            product,
            quantity: 1,
            link,
        });
    }

    /// Remove one unit of the product, or the whole line.
    ///
    /// No-op when the product is not in the cart. The line is deleted
    /// entirely when `remove_all` is set or its quantity is exactly 1;
    /// otherwise the quantity is decremented.
    pub fn remove(&mut self, id: &ProductId, remove_all: bool) {
        let Some(pos) = self.items.iter().position(|item| &item.product.id == id) else {
            return;
        };
        match self.items.get_mut(pos) {
            Some(item) if !remove_all && item.quantity > 1 => item.quantity -= 1,
            _ => {
                self.items.remove(pos);
            }
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items in insertion order (first added first).
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities; the item count shown to the user.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of line totals.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Serialize the cart to its snapshot form: a JSON list of items.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if serialization fails; with these types
    /// that does not happen in practice, but the persistence layer still
    /// logs rather than panics.
    pub fn to_snapshot(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(&self.items)?)
    }

    /// Parse a persisted snapshot back into a cart.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] when the snapshot is not a valid item list;
    /// the caller discards the slot and starts empty.
    pub fn from_snapshot(raw: &str, link_base: &str) -> Result<Self, SnapshotError> {
        let items: Vec<CartItem> = serde_json::from_str(raw)?;
        Ok(Self::hydrate(items, link_base))
    }

    fn find(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.product.id == id)
    }

    fn find_mut(&mut self, id: &ProductId) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| &item.product.id == id)
    }
}

/// Deterministic fallback link for a product without a catalog link.
#[must_use]
pub fn fallback_link(link_base: &str, id: &ProductId) -> String {
    format!("{}/products/{id}", link_base.trim_end_matches('/'))
}
