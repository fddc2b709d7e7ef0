//! Ingestion flows: file import into a provisioned store, then resolution
//! against what was imported.

mod common;
use common::{coordinate, TestStores};
use hazard_zone_domain::{DomainError, ResolutionSource, RiskTier};
use std::io::Write;
use tempfile::NamedTempFile;

fn square(category_props: &str, min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> String {
    format!(
        r#"{{"type":"Feature","properties":{{{category_props}}},"geometry":{{"type":"Polygon",
            "coordinates":[[[{min_lon},{min_lat}],[{max_lon},{min_lat}],[{max_lon},{max_lat}],[{min_lon},{max_lat}],[{min_lon},{min_lat}]]]}}}}"#
    )
}

fn write_collection(features: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"type":"FeatureCollection","features":[{}]}}"#,
        features.join(",")
    )
    .unwrap();
    file
}

async fn provisioned() -> TestStores {
    let stores = TestStores::start().await;
    stores.provision.execute().await.unwrap();
    stores
}

// ============================================================================
// Successful imports
// ============================================================================

#[tokio::test]
async fn test_imported_file_answers_queries() {
    // Arrange
    let stores = provisioned().await;
    let file = write_collection(&[
        square(r#""RISK":"Extreme - High","ARI":10"#, 172.60, -43.60, 172.70, -43.50),
        square(r#""Category":"Minor","Years":"500""#, 172.50, -43.70, 172.80, -43.40),
    ]);

    // Act
    let imported = stores.import.import_file(file.path()).await.unwrap();
    let inner = stores
        .resolve
        .execute(coordinate("-43.55", "172.65"), None)
        .await;
    let outer = stores
        .resolve
        .execute(coordinate("-43.45", "172.55"), None)
        .await;

    // Assert
    assert!(imported);
    assert_eq!(inner.tier, RiskTier::High);
    assert_eq!(inner.flood_category.as_deref(), Some("Extreme - High"));
    assert_eq!(inner.source, ResolutionSource::Authoritative);
    assert_eq!(outer.tier, RiskTier::Low);
    assert_eq!(outer.return_period, Some(500.0));
}

#[tokio::test]
async fn test_provisioning_again_keeps_imported_polygons() {
    let stores = provisioned().await;
    let file = write_collection(&[square(r#""flood_category":"Medium""#, 0.0, 0.0, 1.0, 1.0)]);
    stores.import.import_file(file.path()).await.unwrap();

    stores.provision.execute().await.unwrap();

    let found = stores
        .polygons
        .find_containing(coordinate("0.5", "0.5"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.source.as_ref(), file.path().display().to_string());
}

// ============================================================================
// Rejected imports
// ============================================================================

#[tokio::test]
async fn test_missing_and_unreadable_files_return_false() {
    let stores = provisioned().await;
    let dir = tempfile::tempdir().unwrap();
    let mut not_geojson = NamedTempFile::new().unwrap();
    write!(not_geojson, "id,category\n1,High\n").unwrap();

    let missing = stores
        .import
        .import_file(&dir.path().join("absent.geojson"))
        .await
        .unwrap();
    let unreadable = stores.import.import_file(not_geojson.path()).await.unwrap();

    assert!(!missing);
    assert!(!unreadable);
}

#[tokio::test]
async fn test_bad_feature_aborts_whole_import() {
    let stores = provisioned().await;
    let file = write_collection(&[
        square(r#""flood_category":"High""#, 0.0, 0.0, 1.0, 1.0),
        r#"{"type":"Feature","properties":{},"geometry":{"type":"LineString","coordinates":[[0,0],[1,1]]}}"#
            .to_string(),
    ]);

    let result = stores.import.import_file(file.path()).await;

    assert!(matches!(
        result,
        Err(DomainError::MalformedFeature { index: 1, .. })
    ));
    assert!(stores
        .polygons
        .find_containing(coordinate("0.5", "0.5"))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_import_into_unprovisioned_store_fails() {
    let stores = TestStores::start().await;
    let file = write_collection(&[square(r#""flood_category":"High""#, 0.0, 0.0, 1.0, 1.0)]);

    let result = stores.import.import_file(file.path()).await;

    assert!(matches!(result, Err(DomainError::DatabaseError(_))));
}
