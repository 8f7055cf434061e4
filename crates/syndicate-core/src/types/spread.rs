//! Basis-point spread components of an all-in cost.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg};

/// The part of the all-in cost a spread stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpreadComponent {
    /// Credit spread over the government rate.
    Credit,
    /// New-issue premium taken from the deal-size ladder.
    SizePremium,
    /// Calendar adjustment for market conditions.
    MarketAdjustment,
    /// Cost of swapping proceeds back into the base currency.
    SwapCost,
}

impl fmt::Display for SpreadComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpreadComponent::Credit => "Credit Spread",
            SpreadComponent::SizePremium => "Size Premium",
            SpreadComponent::MarketAdjustment => "Market Adjustment",
            SpreadComponent::SwapCost => "Swap Cost",
        };
        write!(f, "{name}")
    }
}

/// A spread value in basis points.
///
/// # Example
///
/// ```rust
/// use syndicate_core::types::{Spread, SpreadComponent};
/// use rust_decimal_macros::dec;
///
/// let spread = Spread::new(dec!(125), SpreadComponent::Credit);
/// assert_eq!(spread.as_bps(), dec!(125));
/// assert_eq!(spread.as_percentage(), dec!(1.25));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spread {
    /// Spread value in basis points
    value_bps: Decimal,
    /// What the spread represents
    component: SpreadComponent,
}

impl Spread {
    /// Creates a new spread from basis points.
    #[must_use]
    pub fn new(bps: Decimal, component: SpreadComponent) -> Self {
        Self {
            value_bps: bps,
            component,
        }
    }

    /// Creates a spread from an integer basis point value.
    #[must_use]
    pub fn from_bps_i32(bps: i32, component: SpreadComponent) -> Self {
        Self::new(Decimal::from(bps), component)
    }

    /// A zero spread of the given component.
    #[must_use]
    pub fn zero(component: SpreadComponent) -> Self {
        Self::new(Decimal::ZERO, component)
    }

    /// Returns the spread in basis points.
    #[must_use]
    pub fn as_bps(&self) -> Decimal {
        self.value_bps
    }

    /// Returns the spread in percentage points (125 bps = 1.25).
    #[must_use]
    pub fn as_percentage(&self) -> Decimal {
        self.value_bps / Decimal::ONE_HUNDRED
    }

    /// Returns the component this spread stands for.
    #[must_use]
    pub fn component(&self) -> SpreadComponent {
        self.component
    }

    /// Returns true if the spread adds to the cost.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.value_bps > Decimal::ZERO
    }

    /// Returns true if the spread reduces the cost.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.value_bps < Decimal::ZERO
    }

    /// Returns true if the spread is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value_bps.is_zero()
    }

    /// Whole basis points, truncated toward zero.
    #[must_use]
    pub fn whole_bps(&self) -> i64 {
        self.value_bps.trunc().to_i64().unwrap_or_default()
    }

    /// Label with an explicit sign: `"+120 bps"`, `"-10 bps"`, `"+0 bps"`.
    #[must_use]
    pub fn signed_label(&self) -> String {
        if self.is_negative() {
            format!("{} bps", self.value_bps.normalize())
        } else {
            format!("+{} bps", self.value_bps.normalize())
        }
    }

    /// Sum of several spreads in basis points, regardless of component.
    #[must_use]
    pub fn total_bps(parts: &[Spread]) -> Decimal {
        parts.iter().map(Spread::as_bps).sum()
    }
}

impl Add for Spread {
    type Output = Self;

    /// Adds two spreads of the same component.
    ///
    /// # Panics
    ///
    /// Panics if the components differ.
    fn add(self, rhs: Self) -> Self::Output {
        assert!(
            self.component == rhs.component,
            "Cannot add spreads of different components"
        );
        Self {
            value_bps: self.value_bps + rhs.value_bps,
            component: self.component,
        }
    }
}

impl Neg for Spread {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            value_bps: -self.value_bps,
            component: self.component,
        }
    }
}

impl fmt::Display for Spread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bps ({})", self.value_bps.normalize(), self.component)
    }
}
