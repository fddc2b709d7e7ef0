use async_trait::async_trait;
use hazard_zone_domain::{CachedQuery, Coordinate, DomainError};

/// Append-only store of prior resolutions.
///
/// Expiry is enforced by filtering at read time; implementations never
/// delete or overwrite entries.
#[async_trait]
pub trait HazardQueryRepository: Send + Sync {
    /// Most recent non-expired entry within the proximity tolerance on both axes
    async fn find_by_proximity(
        &self,
        coordinate: Coordinate,
    ) -> Result<Option<CachedQuery>, DomainError>;

    /// Most recent non-expired entry with exactly this parcel id
    async fn find_by_parcel(&self, parcel_id: &str) -> Result<Option<CachedQuery>, DomainError>;

    /// Append a new entry, returning its id
    async fn save(&self, entry: &CachedQuery) -> Result<i64, DomainError>;

    /// Most recent entries regardless of expiry, for diagnostics
    async fn recent(&self, limit: u32) -> Result<Vec<CachedQuery>, DomainError>;
}
