mod feature_decoder;
mod hazard_query_repository;
mod risk_polygon_repository;

pub use feature_decoder::FeatureDecoder;
pub use hazard_query_repository::HazardQueryRepository;
pub use risk_polygon_repository::RiskPolygonRepository;
