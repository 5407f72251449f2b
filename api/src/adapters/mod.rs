//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod observability;
pub mod postgres;

pub use observability::{NoopObserver, TracingObserver};
pub use postgres::PostgresDiscountDataSource;
