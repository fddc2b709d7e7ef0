use hazard_zone_domain::coordinate::format_e6;
use hazard_zone_domain::{CachedQuery, ResolutionResult};
use serde::{Deserialize, Serialize};

/// Coordinates stay as text so they are parsed exactly, without a float detour.
#[derive(Debug, Clone, Deserialize)]
pub struct HazardQueryParams {
    pub latitude: String,
    pub longitude: String,
    pub parcel_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecentQueryParams {
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardResponse {
    pub flood_zone: String,
    pub region: String,
    pub flood_category: Option<String>,
    pub return_period: Option<f64>,
    pub from_cache: bool,
    pub source: String,
}

impl From<ResolutionResult> for HazardResponse {
    fn from(result: ResolutionResult) -> Self {
        Self {
            flood_zone: result.tier.to_string(),
            region: result.region.to_string(),
            flood_category: result.flood_category.map(|c| c.to_string()),
            return_period: result.return_period,
            from_cache: result.from_cache,
            source: result.source.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedQueryResponse {
    pub id: Option<i64>,
    pub latitude: String,
    pub longitude: String,
    pub parcel_id: Option<String>,
    pub flood_zone: String,
    pub region: String,
    pub flood_category: Option<String>,
    pub return_period: Option<f64>,
    pub queried_at: String,
    pub expires_at: Option<String>,
}

impl CachedQueryResponse {
    pub fn from_entry(entry: CachedQuery) -> Self {
        Self {
            id: entry.id,
            latitude: format_e6(entry.coordinate.latitude_e6()),
            longitude: format_e6(entry.coordinate.longitude_e6()),
            parcel_id: entry.parcel_id.as_ref().map(|s| s.to_string()),
            flood_zone: entry.tier.to_string(),
            region: entry.region.to_string(),
            flood_category: entry.flood_category.as_ref().map(|s| s.to_string()),
            return_period: entry.return_period,
            queried_at: entry.queried_at.to_rfc3339(),
            expires_at: entry.expires_at.map(|t| t.to_rfc3339()),
        }
    }
}
