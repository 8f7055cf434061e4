//! Pricing request as submitted by the new-issue form.

use serde::{Deserialize, Serialize};

use syndicate_core::{Currency, MarketCondition, Rating, Sector, SyndicateError, SyndicateResult};

/// Parameters of a proposed bond issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondRequest {
    /// Issuer name, echoed back in the analysis.
    pub company_name: String,
    /// Issuer sector.
    pub sector: Sector,
    /// Issuer rating.
    pub rating: Rating,
    /// Deal size in millions of the base currency.
    pub deal_size_million: u32,
    /// Currency the issuer would like to print in. Informational only.
    #[serde(default)]
    pub preferred_currency: Currency,
    /// Issuance calendar conditions.
    pub market_condition: MarketCondition,
    /// Currency the issuer needs the proceeds in.
    #[serde(default)]
    pub base_currency: Currency,
}

impl Default for BondRequest {
    fn default() -> Self {
        Self {
            company_name: "ABC Corporation".to_string(),
            sector: Sector::Utility,
            rating: Rating::A,
            deal_size_million: 500,
            preferred_currency: Currency::GBP,
            market_condition: MarketCondition::Normal,
            base_currency: Currency::GBP,
        }
    }
}

impl BondRequest {
    /// Checks the request against the accepted deal-size range.
    pub fn validate(&self, limits: &DealSizeLimits) -> SyndicateResult<()> {
        if self.company_name.trim().is_empty() {
            return Err(SyndicateError::invalid_request(
                "company name must not be empty",
            ));
        }
        if !limits.contains(self.deal_size_million) {
            return Err(SyndicateError::invalid_request(format!(
                "deal size {}m is outside the accepted range {}m-{}m",
                self.deal_size_million, limits.min, limits.max
            )));
        }
        Ok(())
    }
}

/// Accepted deal-size range, in millions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealSizeLimits {
    /// Smallest accepted deal
    #[serde(default = "default_min_deal_size")]
    pub min: u32,
    /// Largest accepted deal
    #[serde(default = "default_max_deal_size")]
    pub max: u32,
}

fn default_min_deal_size() -> u32 {
    100
}

fn default_max_deal_size() -> u32 {
    1000
}

impl Default for DealSizeLimits {
    fn default() -> Self {
        Self {
            min: default_min_deal_size(),
            max: default_max_deal_size(),
        }
    }
}

impl DealSizeLimits {
    /// True if `deal_size_million` lies within the inclusive range.
    #[must_use]
    pub fn contains(&self, deal_size_million: u32) -> bool {
        (self.min..=self.max).contains(&deal_size_million)
    }
}
