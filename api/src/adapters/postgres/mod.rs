//! PostgreSQL adapters
//!
//! Implementations of the data source port using SeaORM and PostgreSQL.

pub mod discount_data_source;


pub use discount_data_source::PostgresDiscountDataSource;
