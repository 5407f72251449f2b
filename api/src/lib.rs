//! Discount API
//!
//! Computes the discounts a customer receives on a purchase from the
//! percentage discounts linked to them in the store.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod entity;
pub mod error;
pub mod handlers;

#[cfg(test)]
mod test_utils;

use app::DiscountCalculator;
use domain::ports::{ComputationObserver, DiscountDataSource};

/// Application state shared across all handlers
pub struct AppState<DS, OB>
where
    DS: DiscountDataSource,
    OB: ComputationObserver,
{
    pub calculator: Arc<DiscountCalculator<DS, OB>>,
}

impl<DS, OB> Clone for AppState<DS, OB>
where
    DS: DiscountDataSource,
    OB: ComputationObserver,
{
    fn clone(&self) -> Self {
        Self {
            calculator: self.calculator.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router around a calculator
pub fn router<DS, OB>(calculator: Arc<DiscountCalculator<DS, OB>>) -> Router
where
    DS: DiscountDataSource + 'static,
    OB: ComputationObserver + 'static,
{
    let state = AppState { calculator };

    Router::new()
        .route("/health", get(health))
        .route(
            "/customers/:customer_id/discounts",
            get(handlers::get_discounts::<DS, OB>),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
