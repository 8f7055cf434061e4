//! Integration tests for the syndicate server API endpoints.

use std::io::Write;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use syndicate_pricing::{DealSizeLimits, SyndicatePricingCalculatorBuilder};
use syndicate_server::routes::create_router;
use syndicate_server::{Server, ServerConfig};

/// Router over the standing tables.
fn create_test_router() -> Router {
    let calculator = SyndicatePricingCalculatorBuilder::new()
        .build()
        .expect("Failed to build calculator");
    create_router(Arc::new(calculator))
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_json(response).await
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn form_request() -> Value {
    json!({
        "company_name": "ABC Corporation",
        "sector": "utility",
        "rating": "A",
        "deal_size_million": 500,
        "preferred_currency": "GBP",
        "market_condition": "normal",
        "base_currency": "GBP"
    })
}

// =============================================================================
// SERVICE
// =============================================================================

#[tokio::test]
async fn test_root_banner() {
    let (status, body) = get_json(create_test_router(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "DCM Syndicate Pricing API");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_health() {
    for uri in ["/health", "/api/health"] {
        let (status, body) = get_json(create_test_router(), uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}

// =============================================================================
// PRICING
// =============================================================================

#[tokio::test]
async fn test_calculate_default_form() {
    let (status, body) =
        post_json(create_test_router(), "/api/pricing/calculate", form_request()).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["company_name"], "ABC Corporation");

    let direct = &body["direct_pricing"];
    assert_eq!(direct["currency"], "GBP");
    assert_eq!(direct["credit_spread_bps"], 120);
    assert_eq!(direct["size_adjustment_bps"], 10);
    assert_eq!(direct["market_adjustment_bps"], 0);
    assert_eq!(direct["swap_cost_bps"], 0);
    assert_eq!(direct["all_in_cost_percent"].as_f64(), Some(5.3));
    assert_eq!(direct["breakdown"]["government_rate"], "4.0%");
    assert_eq!(direct["breakdown"]["market_adjustment"], "+0 bps");
    assert_eq!(direct["breakdown"]["total"], "5.30%");

    let comparison = body["currency_comparison"].as_array().unwrap();
    let currencies: Vec<_> = comparison.iter().map(|c| c["currency"].clone()).collect();
    assert_eq!(currencies, vec![json!("GBP"), json!("EUR"), json!("USD")]);
    assert_eq!(comparison[1]["all_in_cost_percent"].as_f64(), Some(4.65));
    assert_eq!(comparison[2]["all_in_cost_percent"].as_f64(), Some(6.05));

    let impact = &body["financial_impact"];
    assert_eq!(impact["GBP"]["annual_cost_millions"].as_f64(), Some(26.5));
    assert_eq!(impact["recommendation"]["optimal_currency"], "EUR");
    assert_eq!(impact["recommendation"]["savings_vs_base_bps"], 65);

    let recs = &body["recommendations"];
    assert_eq!(recs["optimal_currency"], "EUR");
    assert_eq!(recs["rationale"], "Issue in EUR for lowest all-in cost");
    assert_eq!(
        recs["market_timing"],
        "Neutral market conditions - proceed when ready"
    );
    assert_eq!(recs["alternative_strategies"], json!([]));
}

#[tokio::test]
async fn test_calculate_large_deal_in_busy_week() {
    let mut request = form_request();
    request["deal_size_million"] = json!(1000);
    request["market_condition"] = json!("central_bank_meeting");

    let (status, body) = post_json(create_test_router(), "/api/pricing/calculate", request).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["direct_pricing"]["size_adjustment_bps"], 20);
    assert_eq!(body["direct_pricing"]["market_adjustment_bps"], 20);

    let strategies = body["recommendations"]["alternative_strategies"]
        .as_array()
        .unwrap();
    assert_eq!(strategies.len(), 2);
    assert!(strategies[1]
        .as_str()
        .unwrap()
        .contains("2x £500m deals"));
}

#[tokio::test]
async fn test_calculate_rejects_out_of_range_deal() {
    let mut request = form_request();
    request["deal_size_million"] = json!(5000);

    let (status, body) = post_json(create_test_router(), "/api/pricing/calculate", request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("5000m"));
}

#[tokio::test]
async fn test_calculate_rejects_blank_company() {
    let mut request = form_request();
    request["company_name"] = json!("");

    let (status, body) = post_json(create_test_router(), "/api/pricing/calculate", request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("company name"));
}

#[tokio::test]
async fn test_calculate_rejects_unknown_rating() {
    let mut request = form_request();
    request["rating"] = json!("CCC");

    let (status, body) = post_json(create_test_router(), "/api/pricing/calculate", request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("CCC"));
}

#[tokio::test]
async fn test_calculate_rejects_malformed_body() {
    let response = create_test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/pricing/calculate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"company_name\": "))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let (status, body) = read_json(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_custom_limits_from_builder() {
    let calculator = SyndicatePricingCalculatorBuilder::new()
        .with_deal_size_limits(DealSizeLimits { min: 100, max: 5000 })
        .build()
        .unwrap();
    let router = create_router(Arc::new(calculator));

    let mut request = form_request();
    request["deal_size_million"] = json!(5000);
    let (status, body) = post_json(router, "/api/pricing/calculate", request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["direct_pricing"]["size_adjustment_bps"], 20);
}

// =============================================================================
// MARKET DATA
// =============================================================================

#[tokio::test]
async fn test_market_rates() {
    let (status, body) = get_json(create_test_router(), "/api/market/rates").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["GBP"].as_f64(), Some(4.0));
    assert_eq!(body["EUR"].as_f64(), Some(2.5));
    assert_eq!(body["USD"].as_f64(), Some(4.5));
}

#[tokio::test]
async fn test_sector_spreads() {
    let (status, body) = get_json(create_test_router(), "/api/market/spreads/bank/BBB").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"GBP": 150, "EUR": 165, "USD": 140}));
}

#[tokio::test]
async fn test_sector_spreads_unknown_sector() {
    let (status, body) = get_json(create_test_router(), "/api/market/spreads/retail/A").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unknown sector: retail");
}

#[tokio::test]
async fn test_adjustments() {
    let (status, body) = get_json(create_test_router(), "/api/market/adjustments").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["market"]["quiet_week"], -10);
    assert_eq!(body["market"]["central_bank_meeting"], 20);
    assert_eq!(body["size"].as_array().unwrap().len(), 5);
    assert_eq!(body["size"][4]["deal_size_million"], 1000);
}

#[tokio::test]
async fn test_swap_costs() {
    let (status, body) = get_json(create_test_router(), "/api/market/swap-costs").await;
    assert_eq!(status, StatusCode::OK);
    let swaps = body.as_array().unwrap();
    assert_eq!(swaps.len(), 6);
    assert!(swaps.contains(&json!({"from": "EUR", "to": "GBP", "cost_bps": 80})));
}

// =============================================================================
// FORM OPTIONS
// =============================================================================

#[tokio::test]
async fn test_form_options() {
    let (_, sectors) = get_json(create_test_router(), "/api/sectors").await;
    assert_eq!(sectors, json!(["utility", "bank", "industrial"]));

    let (_, ratings) = get_json(create_test_router(), "/api/ratings").await;
    assert_eq!(ratings, json!(["AAA", "AA", "A", "BBB"]));

    let (_, currencies) = get_json(create_test_router(), "/api/currencies").await;
    assert_eq!(currencies, json!(["GBP", "EUR", "USD"]));
}

#[tokio::test]
async fn test_market_conditions_have_labels() {
    let (status, body) = get_json(create_test_router(), "/api/market-conditions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body[3],
        json!({"value": "central_bank_meeting", "label": "Central Bank Meeting"})
    );
    assert_eq!(body.as_array().unwrap().len(), 4);
}

// =============================================================================
// SERVER WIRING
// =============================================================================

#[tokio::test]
async fn test_server_router_with_cors() {
    let server = Server::from_config(ServerConfig::default()).unwrap();
    let response = server
        .router()
        .oneshot(
            Request::builder()
                .uri("/api/currencies")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
}

async fn get_with_origin(config: ServerConfig, origin: &str) -> axum::response::Response {
    Server::from_config(config)
        .unwrap()
        .router()
        .oneshot(
            Request::builder()
                .uri("/api/currencies")
                .header(header::ORIGIN, origin)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn test_listed_origin_allows_credentials() {
    let response = get_with_origin(ServerConfig::default(), "http://localhost:3000").await;
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
        "true"
    );
}

#[tokio::test]
async fn test_unlisted_origin_gets_no_cors_header() {
    let response = get_with_origin(ServerConfig::default(), "http://evil.example").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_wildcard_origin_allows_any() {
    let config = ServerConfig {
        cors_origins: vec!["*".to_string()],
        ..ServerConfig::default()
    };
    let response = get_with_origin(config, "http://evil.example").await;
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
        .is_none());
}

#[tokio::test]
async fn test_server_with_market_data_file() {
    let content = include_str!("../../../config/market_data.toml").replace("GBP = 4.0", "GBP = 3.0");
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();

    let config = ServerConfig {
        market_data_file: Some(file.path().display().to_string()),
        ..ServerConfig::default()
    };
    let server = Server::from_config(config).unwrap();

    let (status, body) = post_json(server.router(), "/api/pricing/calculate", form_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["direct_pricing"]["breakdown"]["total"], "4.30%");
}
