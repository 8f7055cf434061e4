//! Route definitions.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use syndicate_pricing::SyndicatePricingCalculator;

use crate::handlers::{self, AppState};

/// Create the API router.
///
/// # Arguments
/// * `calculator` - The pricing calculator
pub fn create_router(calculator: Arc<SyndicatePricingCalculator>) -> Router {
    let state = Arc::new(AppState { calculator });

    Router::new()
        // Service
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/api/health", get(handlers::health))
        // Pricing
        .route("/api/pricing/calculate", post(handlers::calculate_pricing))
        // Market data
        .route("/api/market/rates", get(handlers::market_rates))
        .route("/api/market/spreads/:sector/:rating", get(handlers::sector_spreads))
        .route("/api/market/adjustments", get(handlers::adjustments))
        .route("/api/market/swap-costs", get(handlers::swap_costs))
        // Form options
        .route("/api/sectors", get(handlers::sectors))
        .route("/api/ratings", get(handlers::ratings))
        .route("/api/currencies", get(handlers::currencies))
        .route("/api/market-conditions", get(handlers::market_conditions))
        // State
        .with_state(state)
}
