use crate::di::UseCases;
use hazard_zone_api::dto::{CachedQueryResponse, HazardResponse};
use hazard_zone_domain::Coordinate;
use hazard_zone_infrastructure::geojson::{SAMPLE_FEATURE_COLLECTION, SAMPLE_SOURCE};
use std::path::Path;
use tracing::info;

pub async fn provision(use_cases: &UseCases) -> anyhow::Result<()> {
    use_cases.provision_store.execute().await?;
    println!("Polygon store initialized");
    Ok(())
}

pub async fn import(use_cases: &UseCases, path: &Path) -> anyhow::Result<()> {
    if !use_cases.import_features.import_file(path).await? {
        anyhow::bail!(
            "{} was not found or is not a feature collection",
            path.display()
        );
    }

    println!("Imported flood data from {}", path.display());
    Ok(())
}

pub async fn seed_sample(use_cases: &UseCases) -> anyhow::Result<()> {
    use_cases.provision_store.execute().await?;
    let loaded = use_cases
        .import_features
        .import_text(SAMPLE_FEATURE_COLLECTION, SAMPLE_SOURCE)
        .await?;

    info!(count = loaded, "Sample data loaded");
    println!("Loaded {loaded} sample flood polygons");
    Ok(())
}

pub async fn resolve(
    use_cases: &UseCases,
    latitude: &str,
    longitude: &str,
    parcel_id: Option<&str>,
) -> anyhow::Result<()> {
    let coordinate = Coordinate::parse(latitude, longitude)?;
    let result = use_cases.resolve_hazard.execute(coordinate, parcel_id).await;

    let response = HazardResponse::from(result);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

pub async fn recent(use_cases: &UseCases, limit: u32) -> anyhow::Result<()> {
    let entries: Vec<CachedQueryResponse> = use_cases
        .get_recent
        .execute(limit)
        .await?
        .into_iter()
        .map(CachedQueryResponse::from_entry)
        .collect();

    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
