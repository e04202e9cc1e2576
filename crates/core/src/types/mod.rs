//! Core types for the Solara storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod category;
pub mod filter;
pub mod id;
pub mod price;
pub mod product;

pub use cart::{Cart, CartItem, SnapshotError, fallback_link};
pub use category::{Category, dedupe_preserving_first, slugify};
pub use filter::{FilterCriteria, FilterField};
pub use id::*;
pub use price::Price;
pub use product::Product;
