//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{CustomerId, DiscountResult, RawDiscountRecord};
use crate::domain::ports::{ComputationObserver, DiscountDataSource};
use crate::error::StoreAccessError;

// ============================================================================
// In-Memory Discount Data Source
// ============================================================================

#[derive(Default)]
pub struct InMemoryDiscountDataSource {
    records: Arc<RwLock<HashMap<CustomerId, Vec<RawDiscountRecord>>>>,
    pub should_fail: Arc<RwLock<bool>>,
    queries: Arc<RwLock<usize>>,
}

impl InMemoryDiscountDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose every query fails with a store error
    pub fn failing() -> Self {
        Self {
            should_fail: Arc::new(RwLock::new(true)),
            ..Self::default()
        }
    }

    /// Pre-populate the discounts linked to a customer, in store order
    pub fn with_records(self, customer: CustomerId, records: Vec<RawDiscountRecord>) -> Self {
        self.records.write().unwrap().insert(customer, records);
        self
    }

    /// Number of queries served so far
    pub fn query_count(&self) -> usize {
        *self.queries.read().unwrap()
    }
}

#[async_trait]
impl DiscountDataSource for InMemoryDiscountDataSource {
    async fn get_discount_data(
        &self,
        customer: CustomerId,
    ) -> Result<Vec<RawDiscountRecord>, StoreAccessError> {
        *self.queries.write().unwrap() += 1;

        if *self.should_fail.read().unwrap() {
            return Err(StoreAccessError::Query("Mock failure".to_string()));
        }

        let records = self.records.read().unwrap();
        Ok(records.get(&customer).cloned().unwrap_or_default())
    }
}

// ============================================================================
// Recording Observer
// ============================================================================

/// Observer that records every extension point it is called at
#[derive(Default)]
pub struct RecordingObserver {
    events: Arc<RwLock<Vec<String>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.read().unwrap().clone()
    }

    fn record(&self, event: String) {
        self.events.write().unwrap().push(event);
    }
}

impl ComputationObserver for RecordingObserver {
    fn before_query(&self, customer: CustomerId) {
        self.record(format!("before_query:{}", customer));
    }

    fn after_conversion(&self, customer: CustomerId, discounts: &[DiscountResult]) {
        self.record(format!("after_conversion:{}:{}", customer, discounts.len()));
    }

    fn after_aggregation(&self, customer: CustomerId, aggregate: &DiscountResult) {
        self.record(format!(
            "after_aggregation:{}:{}",
            customer, aggregate.percentage
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_customer_yields_empty_records() {
        let source = InMemoryDiscountDataSource::new();

        let records = source.get_discount_data(CustomerId(99)).await.unwrap();

        assert!(records.is_empty());
        assert_eq!(source.query_count(), 1);
    }

    #[tokio::test]
    async fn failing_source_counts_the_attempt() {
        let source = InMemoryDiscountDataSource::failing();

        assert!(source.get_discount_data(CustomerId(1)).await.is_err());
        assert_eq!(source.query_count(), 1);
    }
}
