use crate::ports::RiskPolygonRepository;
use hazard_zone_domain::DomainError;
use std::sync::Arc;
use tracing::{error, info, instrument};

pub struct ProvisionStoreUseCase {
    polygon_repo: Arc<dyn RiskPolygonRepository>,
}

impl ProvisionStoreUseCase {
    pub fn new(polygon_repo: Arc<dyn RiskPolygonRepository>) -> Self {
        Self { polygon_repo }
    }

    /// Idempotent. Failures propagate so the operator can react.
    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<(), DomainError> {
        self.polygon_repo.initialize().await.map_err(|e| {
            error!(error = %e, "Failed to provision polygon store");
            e
        })?;

        info!("Polygon store provisioned");
        Ok(())
    }
}
