//! Discount data port
//!
//! The calculator only ever sees this trait. The store-backed implementation
//! lives in `adapters::postgres`; tests substitute in-memory or mock sources.

use async_trait::async_trait;

use crate::domain::entities::{CustomerId, RawDiscountRecord};
use crate::error::StoreAccessError;

/// Source of the raw discount rows linked to a customer
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiscountDataSource: Send + Sync {
    /// Fetch every discount associated with `customer`, in store order
    ///
    /// A customer without discounts (or an unknown customer) yields an empty
    /// vector. Fails only when the store cannot be read. Read-only.
    async fn get_discount_data(
        &self,
        customer: CustomerId,
    ) -> Result<Vec<RawDiscountRecord>, StoreAccessError>;
}
