use crate::ports::{HazardQueryRepository, RiskPolygonRepository};
use crate::services::{ResolutionStage, StagePolicy};
use async_trait::async_trait;
use hazard_zone_domain::heuristic;
use hazard_zone_domain::{
    CachedQuery, Coordinate, DomainError, ResolutionResult, RiskPolygon, RiskTier,
};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct HazardRequest {
    pub coordinate: Coordinate,
    pub parcel_id: Option<Arc<str>>,
}

impl HazardRequest {
    pub fn new(coordinate: Coordinate, parcel_id: Option<&str>) -> Self {
        Self {
            coordinate,
            parcel_id: parcel_id
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(Arc::from),
        }
    }
}

/// A definitive answer from one stage, before the stage policy is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct StageAnswer {
    pub tier: RiskTier,
    pub region: Arc<str>,
    pub flood_category: Option<Arc<str>>,
    pub return_period: Option<f64>,
}

impl StageAnswer {
    pub fn into_result(self, policy: &StagePolicy) -> ResolutionResult {
        ResolutionResult {
            tier: self.tier,
            region: self.region,
            flood_category: self.flood_category,
            return_period: self.return_period,
            from_cache: policy.from_cache,
            source: policy.source,
        }
    }
}

impl From<CachedQuery> for StageAnswer {
    fn from(entry: CachedQuery) -> Self {
        Self {
            tier: entry.tier,
            region: entry.region,
            flood_category: entry.flood_category,
            return_period: entry.return_period,
        }
    }
}

/// One tier of the resolution chain.
///
/// `Ok(None)` means "no answer here, try the next stage". Errors are
/// returned as-is; the orchestrator owns logging and degradation.
#[async_trait]
pub trait ResolverStage: Send + Sync {
    fn stage(&self) -> ResolutionStage;

    async fn resolve(&self, request: &HazardRequest) -> Result<Option<StageAnswer>, DomainError>;
}

pub struct CacheStage {
    repository: Arc<dyn HazardQueryRepository>,
}

impl CacheStage {
    pub fn new(repository: Arc<dyn HazardQueryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ResolverStage for CacheStage {
    fn stage(&self) -> ResolutionStage {
        ResolutionStage::Cache
    }

    async fn resolve(&self, request: &HazardRequest) -> Result<Option<StageAnswer>, DomainError> {
        if let Some(parcel_id) = request.parcel_id.as_deref() {
            if let Some(entry) = self.repository.find_by_parcel(parcel_id).await? {
                debug!(parcel_id, "Cache HIT by parcel");
                return Ok(Some(entry.into()));
            }
        }

        match self.repository.find_by_proximity(request.coordinate).await? {
            Some(entry) => {
                debug!(coordinate = %request.coordinate, "Cache HIT by proximity");
                Ok(Some(entry.into()))
            }
            None => {
                debug!(coordinate = %request.coordinate, "Cache MISS");
                Ok(None)
            }
        }
    }
}

pub struct AuthoritativeStage {
    repository: Arc<dyn RiskPolygonRepository>,
}

impl AuthoritativeStage {
    pub fn new(repository: Arc<dyn RiskPolygonRepository>) -> Self {
        Self { repository }
    }

    fn answer(polygon: &RiskPolygon, coordinate: &Coordinate) -> StageAnswer {
        StageAnswer {
            tier: polygon.tier(),
            region: Arc::from(heuristic::region_of(coordinate)),
            flood_category: Some(Arc::clone(&polygon.flood_category)),
            return_period: polygon.return_period,
        }
    }
}

#[async_trait]
impl ResolverStage for AuthoritativeStage {
    fn stage(&self) -> ResolutionStage {
        ResolutionStage::Authoritative
    }

    async fn resolve(&self, request: &HazardRequest) -> Result<Option<StageAnswer>, DomainError> {
        let polygon = self.repository.find_containing(request.coordinate).await?;
        Ok(polygon.map(|p| Self::answer(&p, &request.coordinate)))
    }
}

/// Always answers; the last stage of the default chain.
pub struct HeuristicStage;

#[async_trait]
impl ResolverStage for HeuristicStage {
    fn stage(&self) -> ResolutionStage {
        ResolutionStage::Heuristic
    }

    async fn resolve(&self, request: &HazardRequest) -> Result<Option<StageAnswer>, DomainError> {
        Ok(Some(StageAnswer {
            tier: heuristic::classify(&request.coordinate),
            region: Arc::from(heuristic::region_of(&request.coordinate)),
            flood_category: None,
            return_period: None,
        }))
    }
}
