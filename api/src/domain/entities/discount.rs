//! Discount domain entities
//!
//! A customer is linked to zero or more percentage discounts in the store.
//! Computing a discount turns each of them into a monetary amount against a
//! base price and prepends a synthetic aggregate.

use serde::{Deserialize, Serialize};

/// Label carried by the synthetic summary row
pub const AGGREGATE_LABEL: &str = "Aggregate";

/// Customer number as stored in `customer_discount.customer_id`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub i32);

impl From<i32> for CustomerId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Primary key of a discount row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiscountRecordId(pub i32);

/// A discount row as returned by the store, before any computation
#[derive(Debug, Clone, PartialEq)]
pub struct RawDiscountRecord {
    /// Not used by the computation
    pub id: DiscountRecordId,
    /// Percentage figure, e.g. `19.0` for 19%
    pub percentage: f64,
    pub label: String,
}

impl RawDiscountRecord {
    pub fn new(id: i32, percentage: f64, label: impl Into<String>) -> Self {
        Self {
            id: DiscountRecordId(id),
            percentage,
            label: label.into(),
        }
    }
}

/// A computed discount
///
/// Example: a 15% loyalty discount on a base price of 200 is
/// `("Loyalty discount", 15, 30)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountResult {
    pub label: String,
    pub percentage: f64,
    /// Monetary value, `base * percentage / 100`, unrounded
    pub amount: f64,
}

impl DiscountResult {
    pub fn new(label: impl Into<String>, percentage: f64, amount: f64) -> Self {
        Self {
            label: label.into(),
            percentage,
            amount,
        }
    }

    /// Convert a raw record into a monetary discount against `base`
    ///
    /// Negative or out-of-range percentages pass through uninterpreted.
    pub fn from_record(base: f64, record: &RawDiscountRecord) -> Self {
        Self {
            label: record.label.clone(),
            percentage: record.percentage,
            amount: base * record.percentage / 100.0,
        }
    }

    /// The zero-valued aggregate, `("Aggregate", 0, 0)`
    pub fn empty_aggregate() -> Self {
        Self::new(AGGREGATE_LABEL, 0.0, 0.0)
    }

    /// Sum percentages and amounts of `items` into an aggregate row
    ///
    /// Items are summed left to right, starting from zero.
    pub fn aggregate_of(items: &[DiscountResult]) -> Self {
        items.iter().fold(Self::empty_aggregate(), |acc, item| Self {
            label: acc.label,
            percentage: acc.percentage + item.percentage,
            amount: acc.amount + item.amount,
        })
    }

    /// False when the percentage or amount is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.percentage.is_finite() && self.amount.is_finite()
    }
}

impl std::fmt::Display for DiscountResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {} % | {}", self.label, self.percentage, self.amount)
    }
}
