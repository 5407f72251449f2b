//! SeaORM entities
//!
//! Table mappings for the discount store. Discounts are linked to customers
//! through the `customer_discount` join table.

pub mod customer_discount;
pub mod discount;
