//! Domain types for new-issue pricing.
//!
//! - [`Currency`]: issuance currencies
//! - [`Sector`]: issuer sector
//! - [`Rating`]: issuer credit rating
//! - [`MarketCondition`]: state of the issuance calendar
//! - [`Spread`]: basis-point cost components

mod currency;
mod market_condition;
mod rating;
mod sector;
mod spread;

pub use currency::Currency;
pub use market_condition::MarketCondition;
pub use rating::Rating;
pub use sector::Sector;
pub use spread::{Spread, SpreadComponent};
