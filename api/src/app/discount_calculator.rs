//! Discount calculator
//!
//! Turns the percentage discounts linked to a customer into monetary amounts
//! against a base price, and prepends the aggregate of all of them.

use std::sync::Arc;

use crate::domain::entities::{CustomerId, DiscountResult};
use crate::domain::ports::{ComputationObserver, DiscountDataSource};
use crate::error::StoreAccessError;

/// Service computing the discounts a customer receives
///
/// Stateless apart from its collaborators, so one instance can serve
/// concurrent callers as long as the data source allows it.
pub struct DiscountCalculator<DS, OB>
where
    DS: DiscountDataSource,
    OB: ComputationObserver,
{
    source: Arc<DS>,
    observer: Arc<OB>,
}

impl<DS, OB> DiscountCalculator<DS, OB>
where
    DS: DiscountDataSource,
    OB: ComputationObserver,
{
    pub fn new(source: Arc<DS>, observer: Arc<OB>) -> Self {
        Self { source, observer }
    }

    /// Compute the discounts `customer` receives on `base`
    ///
    /// Index 0 of the result is the aggregate (`"Aggregate"`, summed
    /// percentages, summed amounts); the individual discounts follow in the
    /// order the data source returned them. Two discounts of 1% and 3% on a
    /// base of 200 give:
    ///
    /// 1. `Aggregate | 4 | 8`
    /// 2. `Discount A | 1 | 2`
    /// 3. `Discount B | 3 | 6`
    ///
    /// A customer without discounts gets exactly `[("Aggregate", 0, 0)]`.
    /// Store errors are returned unchanged and nothing else is produced.
    pub async fn compute_discount(
        &self,
        base: f64,
        customer: CustomerId,
    ) -> Result<Vec<DiscountResult>, StoreAccessError> {
        self.observer.before_query(customer);
        let records = self.source.get_discount_data(customer).await?;

        let individual: Vec<DiscountResult> = records
            .iter()
            .map(|record| DiscountResult::from_record(base, record))
            .collect();
        self.observer.after_conversion(customer, &individual);

        let aggregate = DiscountResult::aggregate_of(&individual);
        self.observer.after_aggregation(customer, &aggregate);

        let mut result = Vec::with_capacity(individual.len() + 1);
        result.push(aggregate);
        result.extend(individual);

        Ok(result)
    }
}
