use hazard_zone_api::AppState;
use hazard_zone_application::ports::{
    FeatureDecoder, HazardQueryRepository, RiskPolygonRepository,
};
use hazard_zone_application::use_cases::{
    GetRecentQueriesUseCase, ImportFeaturesUseCase, ProvisionStoreUseCase, ResolveHazardUseCase,
};
use hazard_zone_domain::Config;
use hazard_zone_infrastructure::geojson::GeoJsonFeatureDecoder;
use hazard_zone_infrastructure::repositories::{
    SqliteHazardQueryRepository, SqliteRiskPolygonRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct Repositories {
    pub hazard_queries: Arc<dyn HazardQueryRepository>,
    pub risk_polygons: Arc<dyn RiskPolygonRepository>,
    pub decoder: Arc<dyn FeatureDecoder>,
}

impl Repositories {
    pub fn new(cache_pool: SqlitePool, polygon_pool: SqlitePool) -> Self {
        Self {
            hazard_queries: Arc::new(SqliteHazardQueryRepository::new(cache_pool)),
            risk_polygons: Arc::new(SqliteRiskPolygonRepository::new(polygon_pool)),
            decoder: Arc::new(GeoJsonFeatureDecoder::new()),
        }
    }
}

#[derive(Clone)]
pub struct UseCases {
    pub resolve_hazard: Arc<ResolveHazardUseCase>,
    pub get_recent: Arc<GetRecentQueriesUseCase>,
    pub provision_store: Arc<ProvisionStoreUseCase>,
    pub import_features: Arc<ImportFeaturesUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, config: &Config) -> Self {
        Self {
            resolve_hazard: Arc::new(ResolveHazardUseCase::new(
                Arc::clone(&repos.hazard_queries),
                Arc::clone(&repos.risk_polygons),
                &config.cache,
            )),
            get_recent: Arc::new(GetRecentQueriesUseCase::new(Arc::clone(
                &repos.hazard_queries,
            ))),
            provision_store: Arc::new(ProvisionStoreUseCase::new(Arc::clone(
                &repos.risk_polygons,
            ))),
            import_features: Arc::new(ImportFeaturesUseCase::new(
                Arc::clone(&repos.risk_polygons),
                Arc::clone(&repos.decoder),
            )),
        }
    }

    pub fn into_app_state(self) -> AppState {
        AppState {
            resolve_hazard: self.resolve_hazard,
            get_recent: self.get_recent,
            provision_store: self.provision_store,
            import_features: self.import_features,
            import_lock: Arc::new(Mutex::new(())),
        }
    }
}
