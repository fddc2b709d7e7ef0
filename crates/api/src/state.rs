use hazard_zone_application::use_cases::{
    GetRecentQueriesUseCase, ImportFeaturesUseCase, ProvisionStoreUseCase, ResolveHazardUseCase,
};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub resolve_hazard: Arc<ResolveHazardUseCase>,
    pub get_recent: Arc<GetRecentQueriesUseCase>,
    pub provision_store: Arc<ProvisionStoreUseCase>,
    pub import_features: Arc<ImportFeaturesUseCase>,
    /// Held for the duration of an import; imports never overlap.
    pub import_lock: Arc<Mutex<()>>,
}
