//! Discount handlers
//!
//! Endpoint computing the discounts a customer receives on a base price.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{CustomerId, DiscountResult};
use crate::domain::ports::{ComputationObserver, DiscountDataSource};
use crate::error::AppError;
use crate::AppState;

/// Query string for discount computation
#[derive(Debug, Deserialize)]
pub struct DiscountQuery {
    /// Base price the discounts apply to
    pub base: f64,
}

/// Response body for discount computation
#[derive(Debug, Serialize, Deserialize)]
pub struct DiscountResponse {
    pub customer_id: i32,
    pub base_price: f64,
    /// Aggregate first, then the individual discounts in store order
    pub discounts: Vec<DiscountResult>,
}

/// GET /customers/:customer_id/discounts?base=<price>
///
/// Either the full list is returned or, on a store failure, a 500 with no
/// discounts at all.
pub async fn get_discounts<DS, OB>(
    State(state): State<AppState<DS, OB>>,
    Path(customer_id): Path<i32>,
    Query(query): Query<DiscountQuery>,
) -> Result<Json<DiscountResponse>, AppError>
where
    DS: DiscountDataSource + 'static,
    OB: ComputationObserver + 'static,
{
    if !query.base.is_finite() {
        return Err(AppError::BadRequest(
            "base must be a finite number".to_string(),
        ));
    }

    let discounts = state
        .calculator
        .compute_discount(query.base, CustomerId(customer_id))
        .await?;

    if !discounts.iter().all(DiscountResult::is_finite) {
        return Err(AppError::BadRequest(
            "base too large: discount amount is not a finite number".to_string(),
        ));
    }

    Ok(Json(DiscountResponse {
        customer_id,
        base_price: query.base,
        discounts,
    }))
}
