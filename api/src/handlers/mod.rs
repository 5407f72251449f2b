//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod discounts;

pub use discounts::get_discounts;
