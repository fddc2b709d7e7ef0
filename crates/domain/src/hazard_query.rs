use crate::coordinate::Coordinate;
use crate::risk_tier::RiskTier;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// A write-once cache entry recording a prior resolution.
///
/// Entries are never updated; a newer entry for the same place supersedes an
/// older one by having a later `queried_at`. An entry without `expires_at`
/// never expires.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedQuery {
    pub id: Option<i64>,
    pub coordinate: Coordinate,
    pub parcel_id: Option<Arc<str>>,
    pub tier: RiskTier,
    pub region: Arc<str>,
    pub flood_category: Option<Arc<str>>,
    pub return_period: Option<f64>,
    pub queried_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl CachedQuery {
    pub fn new(coordinate: Coordinate, tier: RiskTier, region: &str) -> Self {
        Self {
            id: None,
            coordinate,
            parcel_id: None,
            tier,
            region: Arc::from(region),
            flood_category: None,
            return_period: None,
            queried_at: Utc::now(),
            expires_at: None,
        }
    }

    pub fn with_parcel(mut self, parcel_id: Option<&str>) -> Self {
        self.parcel_id = parcel_id.map(Arc::from);
        self
    }

    pub fn with_category(mut self, category: Option<&str>, return_period: Option<f64>) -> Self {
        self.flood_category = category.map(Arc::from);
        self.return_period = return_period;
        self
    }

    pub fn with_expiry(mut self, expires_at: Option<DateTime<Utc>>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at <= now,
            None => false,
        }
    }
}
