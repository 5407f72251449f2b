//! Computation observer port
//!
//! Extension points invoked by `DiscountCalculator` around each computation.
//! Implementations must not influence the result.

use crate::domain::entities::{CustomerId, DiscountResult};

/// Hooks called at fixed points of a discount computation
///
/// All methods default to doing nothing.
pub trait ComputationObserver: Send + Sync {
    /// Called once before the store is queried
    fn before_query(&self, _customer: CustomerId) {}

    /// Called with the individual discounts, before the aggregate is prepended
    fn after_conversion(&self, _customer: CustomerId, _discounts: &[DiscountResult]) {}

    /// Called with the aggregate row once it has been computed
    fn after_aggregation(&self, _customer: CustomerId, _aggregate: &DiscountResult) {}
}
