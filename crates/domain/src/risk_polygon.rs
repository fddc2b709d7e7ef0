use crate::geometry::MultiPolygon;
use crate::risk_tier::RiskTier;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// An administratively sourced flood hazard boundary.
///
/// Created only by ingestion and never mutated afterwards. `geometry_json`
/// keeps the source geometry text verbatim; `geometry` is its parsed form.
#[derive(Debug, Clone)]
pub struct RiskPolygon {
    pub id: Option<i64>,
    pub flood_category: Arc<str>,
    pub return_period: Option<f64>,
    pub geometry: MultiPolygon,
    pub geometry_json: Arc<str>,
    pub source: Arc<str>,
    pub imported_at: Option<DateTime<Utc>>,
}

impl RiskPolygon {
    pub fn new(
        flood_category: &str,
        return_period: Option<f64>,
        geometry: MultiPolygon,
        geometry_json: &str,
        source: &str,
    ) -> Self {
        Self {
            id: None,
            flood_category: Arc::from(flood_category),
            return_period,
            geometry,
            geometry_json: Arc::from(geometry_json),
            source: Arc::from(source),
            imported_at: None,
        }
    }

    pub fn tier(&self) -> RiskTier {
        RiskTier::from_category(&self.flood_category, self.return_period)
    }

    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        self.geometry.bounds().contains(lon, lat) && self.geometry.contains(lon, lat)
    }
}
