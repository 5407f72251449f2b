//! Test fixtures
//!
//! The three reference customers also seeded by `sql/discounts.sql`.

use crate::domain::entities::{CustomerId, RawDiscountRecord};

/// Customer granted no discount
pub const CUSTOMER_NO_DISCOUNT: CustomerId = CustomerId(0);

/// Customer granted one discount of 19%
pub const CUSTOMER_SINGLE_DISCOUNT: CustomerId = CustomerId(1);

/// Customer granted 5%, 3% and 19%, 27% altogether
pub const CUSTOMER_MULTIPLE_DISCOUNTS: CustomerId = CustomerId(2);

pub fn single_discount_record() -> Vec<RawDiscountRecord> {
    vec![RawDiscountRecord::new(1, 19.0, "geschenkte Mehrwertsteuer")]
}

pub fn multiple_discount_records() -> Vec<RawDiscountRecord> {
    vec![
        RawDiscountRecord::new(1, 5.0, "Semesterstart"),
        RawDiscountRecord::new(2, 3.0, "Aktionswochen"),
        RawDiscountRecord::new(3, 19.0, "geschenkte Mehrwertsteuer"),
    ]
}

/// In-memory source populated with all three reference customers
pub fn reference_data_source() -> super::InMemoryDiscountDataSource {
    super::InMemoryDiscountDataSource::new()
        .with_records(CUSTOMER_SINGLE_DISCOUNT, single_discount_record())
        .with_records(CUSTOMER_MULTIPLE_DISCOUNTS, multiple_discount_records())
}
