//! Test utilities
//!
//! Manual in-memory implementations and test fixtures for unit testing.
//!
//! `MockDiscountDataSource` (mockall) is used where a test needs to assert
//! call counts or arguments; everything else uses `InMemoryDiscountDataSource`.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
