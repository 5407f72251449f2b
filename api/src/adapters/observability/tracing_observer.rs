use crate::domain::entities::{CustomerId, DiscountResult};
use crate::domain::ports::ComputationObserver;

/// Observer emitting `tracing` events at every extension point
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ComputationObserver for TracingObserver {
    fn before_query(&self, customer: CustomerId) {
        tracing::debug!(customer = %customer, "Querying discounts");
    }

    fn after_conversion(&self, customer: CustomerId, discounts: &[DiscountResult]) {
        for discount in discounts {
            tracing::debug!(customer = %customer, "Granted {}", discount);
        }
        tracing::debug!(
            customer = %customer,
            count = discounts.len(),
            "Converted discounts"
        );
    }

    fn after_aggregation(&self, customer: CustomerId, aggregate: &DiscountResult) {
        tracing::debug!(
            customer = %customer,
            percentage = aggregate.percentage,
            amount = aggregate.amount,
            "Computed aggregate discount"
        );
    }
}

/// Observer that ignores every extension point
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ComputationObserver for NoopObserver {}
