use super::stages::{
    AuthoritativeStage, CacheStage, HazardRequest, HeuristicStage, ResolverStage, StageAnswer,
};
use crate::ports::{HazardQueryRepository, RiskPolygonRepository};
use crate::services::{StagePolicy, StagePolicyTable};
use chrono::Utc;
use hazard_zone_domain::config::CacheConfig;
use hazard_zone_domain::{CachedQuery, Coordinate, DomainError, ResolutionResult};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Resolves a coordinate to a flood risk tier: cache, then authoritative
/// polygons, then the heuristic table.
///
/// Never fails. Any error anywhere in the chain, including the cache
/// write-back, is logged here and replaced by
/// [`ResolutionResult::safe_default`]. Holds no per-request state, so
/// concurrent duplicate requests may each miss and each write an entry.
pub struct ResolveHazardUseCase {
    stages: Vec<Arc<dyn ResolverStage>>,
    cache: Arc<dyn HazardQueryRepository>,
    policies: StagePolicyTable,
}

impl ResolveHazardUseCase {
    pub fn new(
        cache: Arc<dyn HazardQueryRepository>,
        polygons: Arc<dyn RiskPolygonRepository>,
        config: &CacheConfig,
    ) -> Self {
        let stages: Vec<Arc<dyn ResolverStage>> = vec![
            Arc::new(CacheStage::new(Arc::clone(&cache))),
            Arc::new(AuthoritativeStage::new(polygons)),
            Arc::new(HeuristicStage),
        ];
        Self::with_stages(stages, cache, StagePolicyTable::from_config(config))
    }

    pub fn with_stages(
        stages: Vec<Arc<dyn ResolverStage>>,
        cache: Arc<dyn HazardQueryRepository>,
        policies: StagePolicyTable,
    ) -> Self {
        Self {
            stages,
            cache,
            policies,
        }
    }

    pub async fn execute(&self, coordinate: Coordinate, parcel_id: Option<&str>) -> ResolutionResult {
        self.resolve(&HazardRequest::new(coordinate, parcel_id)).await
    }

    #[instrument(skip(self), fields(coordinate = %request.coordinate))]
    pub async fn resolve(&self, request: &HazardRequest) -> ResolutionResult {
        match self.try_resolve(request).await {
            Ok(result) => result,
            Err(e) => {
                error!(
                    error = %e,
                    latitude = request.coordinate.latitude(),
                    longitude = request.coordinate.longitude(),
                    "Hazard resolution failed, returning safe default"
                );
                ResolutionResult::safe_default()
            }
        }
    }

    async fn try_resolve(&self, request: &HazardRequest) -> Result<ResolutionResult, DomainError> {
        for stage in &self.stages {
            let Some(answer) = stage.resolve(request).await? else {
                continue;
            };

            let policy = self.policies.policy(stage.stage());
            self.write_back(request, &answer, policy).await?;

            info!(
                stage = stage.stage().as_str(),
                tier = %answer.tier,
                region = %answer.region,
                "Hazard resolved"
            );
            return Ok(answer.into_result(policy));
        }

        Err(DomainError::NoResolution)
    }

    async fn write_back(
        &self,
        request: &HazardRequest,
        answer: &StageAnswer,
        policy: &StagePolicy,
    ) -> Result<(), DomainError> {
        if !policy.cache_write.persists() {
            return Ok(());
        }

        let now = Utc::now();
        let entry = CachedQuery {
            id: None,
            coordinate: request.coordinate,
            parcel_id: request.parcel_id.clone(),
            tier: answer.tier,
            region: Arc::clone(&answer.region),
            flood_category: answer.flood_category.clone(),
            return_period: answer.return_period,
            queried_at: now,
            expires_at: policy.cache_write.expires_at(now)?,
        };

        self.cache.save(&entry).await?;
        Ok(())
    }
}
