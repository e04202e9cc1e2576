//! Solara Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused by the binary in `main.rs`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod db;
pub mod filters;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
