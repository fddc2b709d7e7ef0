use crate::risk_tier::RiskTier;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

pub const UNKNOWN_REGION: &str = "Unknown";

/// Where a resolution answer came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionSource {
    Cached,
    Authoritative,
    Heuristic,
    /// Safe default substituted after an internal failure
    Error,
}

impl ResolutionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionSource::Cached => "cached",
            ResolutionSource::Authoritative => "authoritative",
            ResolutionSource::Heuristic => "heuristic",
            ResolutionSource::Error => "error",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "cached" => Some(ResolutionSource::Cached),
            "authoritative" => Some(ResolutionSource::Authoritative),
            "heuristic" => Some(ResolutionSource::Heuristic),
            "error" => Some(ResolutionSource::Error),
            _ => None,
        }
    }
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ResolutionSource {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Normalized answer returned to callers regardless of which tier answered.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionResult {
    pub tier: RiskTier,
    pub region: Arc<str>,
    pub flood_category: Option<Arc<str>>,
    pub return_period: Option<f64>,
    pub from_cache: bool,
    pub source: ResolutionSource,
}

impl ResolutionResult {
    /// The answer given when anything in the resolution chain fails.
    pub fn safe_default() -> Self {
        Self {
            tier: RiskTier::Low,
            region: Arc::from(UNKNOWN_REGION),
            flood_category: None,
            return_period: None,
            from_cache: false,
            source: ResolutionSource::Error,
        }
    }
}
