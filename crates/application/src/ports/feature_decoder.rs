use hazard_zone_domain::{DomainError, RiskPolygon};

/// Turns a feature collection document into polygons ready for insertion.
///
/// Returns `UnreadableFeatureCollection` when the document as a whole is not
/// a feature collection and `MalformedFeature` for the first bad feature.
pub trait FeatureDecoder: Send + Sync {
    fn decode(&self, text: &str, source: &str) -> Result<Vec<RiskPolygon>, DomainError>;
}
