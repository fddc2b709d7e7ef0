pub mod hazard_query_repository;
pub mod risk_polygon_repository;

pub use hazard_query_repository::SqliteHazardQueryRepository;
pub use risk_polygon_repository::SqliteRiskPolygonRepository;
