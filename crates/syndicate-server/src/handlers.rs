//! Request handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use syndicate_core::{Currency, MarketCondition, Rating, Sector, SyndicateError};
use syndicate_pricing::{
    BondRequest, PricingAnalysis, PricingError, SizeRung, SwapCost, SyndicatePricingCalculator,
};

/// Application state.
pub struct AppState {
    /// The pricing calculator
    pub calculator: Arc<SyndicatePricingCalculator>,
}

// =============================================================================
// ERRORS
// =============================================================================

/// Error response.
#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

impl ErrorResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Handler error, rendered as `{"error": ...}`.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Pricing failed
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// A path parameter did not parse
    #[error(transparent)]
    BadParameter(#[from] SyndicateError),

    /// The request body was not a valid pricing request
    #[error("{}", .0.body_text())]
    BadJson(#[from] JsonRejection),
}

impl ServerError {
    fn status(&self) -> StatusCode {
        match self {
            ServerError::Pricing(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ServerError::Pricing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::BadParameter(_) => StatusCode::BAD_REQUEST,
            ServerError::BadJson(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(error = %self, "request failed");
        }
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// =============================================================================
// SERVICE INFO
// =============================================================================

/// Root response.
#[derive(Serialize)]
pub struct RootResponse {
    message: String,
    version: String,
}

/// Service banner.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "DCM Syndicate Pricing API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// PRICING
// =============================================================================

/// Price a bond across currencies.
pub async fn calculate_pricing(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BondRequest>, JsonRejection>,
) -> Result<Json<PricingAnalysis>, ServerError> {
    let Json(request) = payload?;
    let analysis = state.calculator.generate_pricing_analysis(&request)?;
    Ok(Json(analysis))
}

// =============================================================================
// MARKET DATA
// =============================================================================

/// Government benchmark rates.
pub async fn market_rates(State(state): State<Arc<AppState>>) -> Json<BTreeMap<Currency, Decimal>> {
    Json(state.calculator.market_data().government_rates().clone())
}

/// Credit spreads for a sector and rating.
pub async fn sector_spreads(
    State(state): State<Arc<AppState>>,
    Path((sector, rating)): Path<(String, String)>,
) -> Result<Json<BTreeMap<Currency, i32>>, ServerError> {
    let sector: Sector = sector.parse()?;
    let rating: Rating = rating.parse()?;
    let spreads = state
        .calculator
        .market_data()
        .credit_spreads_for(sector, rating)
        .map_err(PricingError::from)?;
    Ok(Json(spreads))
}

/// Market and size adjustments.
#[derive(Serialize)]
pub struct AdjustmentsResponse {
    market: BTreeMap<MarketCondition, i32>,
    size: Vec<SizeRung>,
}

/// Calendar adjustments and the size ladder.
pub async fn adjustments(State(state): State<Arc<AppState>>) -> Json<AdjustmentsResponse> {
    let md = state.calculator.market_data();
    Json(AdjustmentsResponse {
        market: md.market_adjustments().clone(),
        size: md.size_ladder().to_vec(),
    })
}

/// Quoted swap costs.
pub async fn swap_costs(State(state): State<Arc<AppState>>) -> Json<Vec<SwapCost>> {
    Json(state.calculator.market_data().swap_costs())
}

// =============================================================================
// FORM OPTIONS
// =============================================================================

/// Available sectors.
pub async fn sectors() -> Json<Vec<&'static str>> {
    Json(Sector::all().iter().map(Sector::as_str).collect())
}

/// Available ratings.
pub async fn ratings() -> Json<Vec<&'static str>> {
    Json(Rating::all().iter().map(Rating::as_str).collect())
}

/// Available currencies.
pub async fn currencies() -> Json<Vec<&'static str>> {
    Json(Currency::all().iter().map(Currency::code).collect())
}

/// A dropdown entry.
#[derive(Serialize)]
pub struct OptionEntry {
    value: &'static str,
    label: String,
}

/// Available market conditions with display labels.
pub async fn market_conditions() -> Json<Vec<OptionEntry>> {
    Json(
        MarketCondition::all()
            .iter()
            .map(|c| OptionEntry {
                value: c.as_str(),
                label: c.label(),
            })
            .collect(),
    )
}
