#![allow(dead_code)]

use hazard_zone_application::ports::{HazardQueryRepository, RiskPolygonRepository};
use hazard_zone_application::use_cases::{
    GetRecentQueriesUseCase, ImportFeaturesUseCase, ProvisionStoreUseCase, ResolveHazardUseCase,
};
use hazard_zone_domain::config::CacheConfig;
use hazard_zone_domain::Coordinate;
use hazard_zone_infrastructure::database::{create_cache_pool, create_polygon_pool};
use hazard_zone_infrastructure::geojson::GeoJsonFeatureDecoder;
use hazard_zone_infrastructure::repositories::{
    SqliteHazardQueryRepository, SqliteRiskPolygonRepository,
};
use std::sync::Arc;
use tempfile::TempDir;

/// File-backed stores in a temporary directory, wired the way the binary wires them.
pub struct TestStores {
    _dir: TempDir,
    pub cache: Arc<dyn HazardQueryRepository>,
    pub polygons: Arc<dyn RiskPolygonRepository>,
    pub resolve: Arc<ResolveHazardUseCase>,
    pub recent: GetRecentQueriesUseCase,
    pub provision: ProvisionStoreUseCase,
    pub import: ImportFeaturesUseCase,
}

impl TestStores {
    pub async fn start() -> Self {
        Self::with_cache_config(CacheConfig::default()).await
    }

    pub async fn with_cache_config(cache_config: CacheConfig) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let cache_url = format!("sqlite:{}", dir.path().join("cache.db").display());
        let polygon_url = format!("sqlite:{}", dir.path().join("polygons.db").display());

        let cache: Arc<dyn HazardQueryRepository> = Arc::new(SqliteHazardQueryRepository::new(
            create_cache_pool(&cache_url, 8).await.unwrap(),
        ));
        let polygons: Arc<dyn RiskPolygonRepository> = Arc::new(
            SqliteRiskPolygonRepository::new(create_polygon_pool(&polygon_url, 8).await.unwrap()),
        );

        Self {
            resolve: Arc::new(ResolveHazardUseCase::new(
                Arc::clone(&cache),
                Arc::clone(&polygons),
                &cache_config,
            )),
            recent: GetRecentQueriesUseCase::new(Arc::clone(&cache)),
            provision: ProvisionStoreUseCase::new(Arc::clone(&polygons)),
            import: ImportFeaturesUseCase::new(
                Arc::clone(&polygons),
                Arc::new(GeoJsonFeatureDecoder::new()),
            ),
            cache,
            polygons,
            _dir: dir,
        }
    }
}

pub fn coordinate(lat: &str, lon: &str) -> Coordinate {
    Coordinate::parse(lat, lon).unwrap()
}
