mod import_features;
mod provision_store;

pub use import_features::ImportFeaturesUseCase;
pub use provision_store::ProvisionStoreUseCase;
