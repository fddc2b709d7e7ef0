use async_trait::async_trait;
use hazard_zone_domain::{Coordinate, DomainError, RiskPolygon};

#[async_trait]
pub trait RiskPolygonRepository: Send + Sync {
    /// Create the polygon table and its index if absent. Safe to repeat.
    async fn initialize(&self) -> Result<(), DomainError>;

    /// Containing polygon with the smallest return period, if any
    async fn find_containing(
        &self,
        coordinate: Coordinate,
    ) -> Result<Option<RiskPolygon>, DomainError>;

    /// Insert every polygon as a new row, all or nothing. No deduplication.
    async fn bulk_insert(&self, polygons: &[RiskPolygon]) -> Result<u64, DomainError>;
}
