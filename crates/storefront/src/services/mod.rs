//! Application services for the storefront.

pub mod cart;
pub mod whatsapp;
