//! Primary market conditions for the issuance window.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SyndicateError;

/// State of the new-issue calendar in the week of launch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum MarketCondition {
    /// Light issuance calendar.
    QuietWeek,
    /// Nothing unusual.
    #[default]
    Normal,
    /// Heavy issuance calendar.
    BusyWeek,
    /// A central bank rate decision falls inside the window.
    CentralBankMeeting,
}

impl MarketCondition {
    /// Returns every condition in the order the form lists them.
    #[must_use]
    pub fn all() -> &'static [MarketCondition] {
        &[
            MarketCondition::QuietWeek,
            MarketCondition::Normal,
            MarketCondition::BusyWeek,
            MarketCondition::CentralBankMeeting,
        ]
    }

    /// Wire value, e.g. `"central_bank_meeting"`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketCondition::QuietWeek => "quiet_week",
            MarketCondition::Normal => "normal",
            MarketCondition::BusyWeek => "busy_week",
            MarketCondition::CentralBankMeeting => "central_bank_meeting",
        }
    }

    /// Title-cased label built from the wire value, e.g. `"Central Bank Meeting"`.
    #[must_use]
    pub fn label(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for MarketCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarketCondition {
    type Err = SyndicateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "quiet_week" => Ok(MarketCondition::QuietWeek),
            "normal" => Ok(MarketCondition::Normal),
            "busy_week" => Ok(MarketCondition::BusyWeek),
            "central_bank_meeting" => Ok(MarketCondition::CentralBankMeeting),
            _ => Err(SyndicateError::unknown_value("market condition", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_form_order() {
        assert_eq!(
            MarketCondition::all(),
            &[
                MarketCondition::QuietWeek,
                MarketCondition::Normal,
                MarketCondition::BusyWeek,
                MarketCondition::CentralBankMeeting,
            ]
        );
    }

    #[test]
    fn test_label() {
        assert_eq!(MarketCondition::QuietWeek.label(), "Quiet Week");
        assert_eq!(MarketCondition::Normal.label(), "Normal");
        assert_eq!(
            MarketCondition::CentralBankMeeting.label(),
            "Central Bank Meeting"
        );
    }

    #[test]
    fn test_parse_accepts_dashes() {
        assert_eq!(
            "busy-week".parse::<MarketCondition>().unwrap(),
            MarketCondition::BusyWeek
        );
        assert!("holiday".parse::<MarketCondition>().is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&MarketCondition::CentralBankMeeting).unwrap(),
            "\"central_bank_meeting\""
        );
    }
}
