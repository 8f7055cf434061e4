//! # Syndicate Core
//!
//! Core types and errors shared by the syndicate pricing crates.
//!
//! This crate provides the vocabulary of a new-issue pricing request:
//!
//! - **Types**: [`Currency`], [`Sector`], [`Rating`], [`MarketCondition`]
//!   and the basis-point [`Spread`]
//! - **Errors**: [`SyndicateError`] for parsing and validation failures
//!
//! ## Example
//!
//! ```rust
//! use syndicate_core::prelude::*;
//!
//! let rating: Rating = "BBB".parse().unwrap();
//! assert_eq!(rating, Rating::BBB);
//!
//! let spread = Spread::from_bps_i32(-10, SpreadComponent::MarketAdjustment);
//! assert_eq!(spread.signed_label(), "-10 bps");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::should_implement_trait)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{SyndicateError, SyndicateResult};
    pub use crate::types::{Currency, MarketCondition, Rating, Sector, Spread, SpreadComponent};
}

// Re-export commonly used types at crate root
pub use error::{SyndicateError, SyndicateResult};
pub use types::{Currency, MarketCondition, Rating, Sector, Spread, SpreadComponent};
