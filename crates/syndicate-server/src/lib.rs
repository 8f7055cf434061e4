//! # Syndicate Server
//!
//! REST server for the DCM syndicate pricing calculator.
//!
//! ## Features
//!
//! - Bond pricing across GBP, EUR and USD
//! - Market data inspection (rates, spreads, adjustments, swap costs)
//! - Form options for front ends
//! - Configuration via TOML file
//!
//! ## Usage
//!
//! ```ignore
//! use syndicate_server::{Server, ServerConfig};
//!
//! let server = Server::from_config(ServerConfig::default())?;
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod handlers;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use syndicate_pricing::{PricingResult, SyndicatePricingCalculator};

pub use config::ServerConfig;

/// The syndicate pricing server.
pub struct Server {
    config: ServerConfig,
    calculator: Arc<SyndicatePricingCalculator>,
}

impl Server {
    /// Create a new server.
    pub fn new(config: ServerConfig, calculator: Arc<SyndicatePricingCalculator>) -> Self {
        Self { config, calculator }
    }

    /// Create a server whose calculator is built from the configuration.
    pub fn from_config(config: ServerConfig) -> PricingResult<Self> {
        let calculator = Arc::new(config.build_calculator()?);
        Ok(Self::new(config, calculator))
    }

    /// Build the CORS layer from the configured origins.
    ///
    /// Credentials are allowed for listed origins only; browsers reject
    /// credentialed responses that carry a wildcard origin.
    fn cors(&self) -> CorsLayer {
        let layer = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

        if self.config.allows_any_origin() {
            layer.allow_origin(AllowOrigin::any())
        } else {
            let origins: Vec<HeaderValue> = self
                .config
                .cors_origins
                .iter()
                .filter_map(|o| match o.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!(origin = %o, "ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            layer
                .allow_origin(AllowOrigin::list(origins))
                .allow_credentials(true)
        }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        routes::create_router(self.calculator.clone())
            .layer(TraceLayer::new_for_http())
            .layer(self.cors())
    }

    /// Start the server.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr = SocketAddr::new(
            self.config.host.parse().unwrap_or([0, 0, 0, 0].into()),
            self.config.port,
        );

        info!("Starting syndicate pricing server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}
