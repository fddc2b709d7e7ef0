//! Hazard Zone Domain Layer
pub mod config;
pub mod coordinate;
pub mod errors;
pub mod geometry;
pub mod hazard_query;
pub mod heuristic;
pub mod resolution;
pub mod risk_polygon;
pub mod risk_tier;

pub use config::{CliOverrides, Config, ConfigError};
pub use coordinate::{Coordinate, PROXIMITY_TOLERANCE_E6};
pub use errors::DomainError;
pub use geometry::{BoundingBox, MultiPolygon, Polygon, Position};
pub use hazard_query::CachedQuery;
pub use resolution::{ResolutionResult, ResolutionSource, UNKNOWN_REGION};
pub use risk_polygon::RiskPolygon;
pub use risk_tier::RiskTier;
