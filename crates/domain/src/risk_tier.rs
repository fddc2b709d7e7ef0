use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized flood hazard classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    High,
    Medium,
    Low,
    #[default]
    Unknown,
}

/// Return periods at or below this many years are treated as high risk.
pub const HIGH_RETURN_PERIOD_YEARS: f64 = 20.0;
/// Return periods at or below this many years are treated as medium risk.
pub const MEDIUM_RETURN_PERIOD_YEARS: f64 = 100.0;

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::High => "High",
            RiskTier::Medium => "Medium",
            RiskTier::Low => "Low",
            RiskTier::Unknown => "Unknown",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "High" => Some(RiskTier::High),
            "Medium" => Some(RiskTier::Medium),
            "Low" => Some(RiskTier::Low),
            "Unknown" => Some(RiskTier::Unknown),
            _ => None,
        }
    }

    /// Maps an authoritative polygon's category label and return period to a tier.
    ///
    /// Each level checks the textual label before the return period, and the
    /// high level is exhausted before medium is considered, so
    /// `("Low-lying", Some(15))` is `High`.
    pub fn from_category(category: &str, return_period: Option<f64>) -> Self {
        let label = category.to_lowercase();

        if label.contains("high") || return_period.is_some_and(|rp| rp <= HIGH_RETURN_PERIOD_YEARS)
        {
            return RiskTier::High;
        }

        if label.contains("medium")
            || label.contains("moderate")
            || return_period.is_some_and(|rp| rp <= MEDIUM_RETURN_PERIOD_YEARS)
        {
            return RiskTier::Medium;
        }

        RiskTier::Low
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
