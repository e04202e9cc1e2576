//! Solara Core - Shared types library.
//!
//! This crate provides the domain types used across the Solara storefront:
//! products, the shopping cart and its snapshot format, derived categories,
//! and the recognized filter criteria.
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Products, cart state, categories, filter criteria

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
