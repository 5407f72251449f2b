//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Discount records and computed discounts
//! - `ports`: Trait definitions for the store and observability seams

pub mod entities;
pub mod ports;
