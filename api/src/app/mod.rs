//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod discount_calculator;

pub use discount_calculator::DiscountCalculator;
