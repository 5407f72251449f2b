//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod discount_data;
pub mod observer;

#[cfg(test)]
pub use discount_data::MockDiscountDataSource;
pub use discount_data::DiscountDataSource;
pub use observer::ComputationObserver;
