//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod discount;

pub use discount::{
    CustomerId, DiscountRecordId, DiscountResult, RawDiscountRecord, AGGREGATE_LABEL,
};
