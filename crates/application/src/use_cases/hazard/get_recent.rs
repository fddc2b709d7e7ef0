use crate::ports::HazardQueryRepository;
use hazard_zone_domain::{CachedQuery, DomainError};
use std::sync::Arc;
use tracing::instrument;

pub const DEFAULT_RECENT_LIMIT: u32 = 100;
const MAX_LIMIT: u32 = 1_000;

/// Lists the latest cache entries, expired ones included.
pub struct GetRecentQueriesUseCase {
    repository: Arc<dyn HazardQueryRepository>,
}

impl GetRecentQueriesUseCase {
    pub fn new(repository: Arc<dyn HazardQueryRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, limit: u32) -> Result<Vec<CachedQuery>, DomainError> {
        self.repository.recent(limit.min(MAX_LIMIT)).await
    }
}
