//! Server configuration.

use serde::{Deserialize, Serialize};

use syndicate_pricing::{
    DealSizeLimits, MarketData, PricingResult, SyndicatePricingCalculator,
    SyndicatePricingCalculatorBuilder,
};

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Browser origins allowed by CORS; `"*"` allows any
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// TOML file replacing the built-in pricing tables
    pub market_data_file: Option<String>,

    /// Accepted deal-size range
    #[serde(default)]
    pub deal_size: DealSizeLimits,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            market_data_file: None,
            deal_size: DealSizeLimits::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, std::io::Error> {
        toml::from_str(content).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// True if any origin may call the API.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }

    /// Build the calculator described by this configuration.
    pub fn build_calculator(&self) -> PricingResult<SyndicatePricingCalculator> {
        let market_data = match &self.market_data_file {
            Some(path) => MarketData::from_file(path)?,
            None => MarketData::default(),
        };
        SyndicatePricingCalculatorBuilder::new()
            .with_market_data(market_data)
            .with_deal_size_limits(self.deal_size)
            .build()
    }
}
