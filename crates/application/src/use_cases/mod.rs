pub mod hazard;
pub mod polygons;

// Re-export use cases
pub use hazard::{GetRecentQueriesUseCase, ResolveHazardUseCase};
pub use polygons::{ImportFeaturesUseCase, ProvisionStoreUseCase};
