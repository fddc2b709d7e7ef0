//! Resolution flows across real cache and polygon stores:
//! miss → authoritative → cached, heuristic fallback, degradation and concurrency.

mod common;
use common::{coordinate, TestStores};
use futures::future::join_all;
use hazard_zone_domain::config::CacheConfig;
use hazard_zone_domain::{ResolutionSource, RiskTier};
use hazard_zone_infrastructure::geojson::{SAMPLE_FEATURE_COLLECTION, SAMPLE_SOURCE};
use std::sync::Arc;

async fn seeded() -> TestStores {
    let stores = TestStores::start().await;
    stores.provision.execute().await.unwrap();
    stores
        .import
        .import_text(SAMPLE_FEATURE_COLLECTION, SAMPLE_SOURCE)
        .await
        .unwrap();
    stores
}

// ============================================================================
// Tier progression
// ============================================================================

#[tokio::test]
async fn test_authoritative_answer_is_cached_for_nearby_points() {
    // Arrange
    let stores = seeded().await;

    // Act
    let first = stores
        .resolve
        .execute(coordinate("-36.845", "174.765"), None)
        .await;
    let nearby = stores
        .resolve
        .execute(coordinate("-36.8455", "174.7655"), None)
        .await;

    // Assert
    assert_eq!(first.tier, RiskTier::High);
    assert_eq!(first.source, ResolutionSource::Authoritative);
    assert_eq!(first.region.as_ref(), "Auckland");
    assert!(!first.from_cache);

    assert_eq!(nearby.tier, RiskTier::High);
    assert_eq!(nearby.source, ResolutionSource::Cached);
    assert_eq!(nearby.flood_category.as_deref(), Some("High Risk"));
    assert_eq!(nearby.return_period, Some(20.0));
    assert!(nearby.from_cache);
}

#[tokio::test]
async fn test_point_just_beyond_tolerance_is_resolved_again() {
    let stores = seeded().await;

    stores
        .resolve
        .execute(coordinate("-36.845", "174.765"), None)
        .await;
    let beyond = stores
        .resolve
        .execute(coordinate("-36.846001", "174.765"), None)
        .await;

    assert_eq!(beyond.source, ResolutionSource::Authoritative);
    assert_eq!(stores.recent.execute(10).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_heuristic_fallback_outside_polygons() {
    let stores = seeded().await;

    let thames = stores
        .resolve
        .execute(coordinate("-37.14", "175.54"), None)
        .await;
    let again = stores
        .resolve
        .execute(coordinate("-37.14", "175.54"), None)
        .await;

    assert_eq!(thames.tier, RiskTier::High);
    assert_eq!(thames.source, ResolutionSource::Heuristic);
    assert_eq!(thames.region.as_ref(), "Unknown");
    assert_eq!(again.source, ResolutionSource::Cached);
    assert_eq!(again.tier, RiskTier::High);
}

#[tokio::test]
async fn test_auckland_point_without_center_is_low() {
    let stores = seeded().await;

    let result = stores
        .resolve
        .execute(coordinate("-36.70", "174.90"), None)
        .await;

    assert_eq!(result.tier, RiskTier::Low);
    assert_eq!(result.region.as_ref(), "Auckland");
    assert_eq!(result.source, ResolutionSource::Heuristic);
}

#[tokio::test]
async fn test_parcel_match_ignores_distance() {
    let stores = seeded().await;

    stores
        .resolve
        .execute(coordinate("-36.845", "174.765"), Some("LOT-42"))
        .await;
    let by_parcel = stores
        .resolve
        .execute(coordinate("-41.0", "170.0"), Some("LOT-42"))
        .await;

    assert_eq!(by_parcel.source, ResolutionSource::Cached);
    assert_eq!(by_parcel.tier, RiskTier::High);
}

// ============================================================================
// Expiry
// ============================================================================

#[tokio::test]
async fn test_permanent_authoritative_entries_when_ttl_zero() {
    let stores = TestStores::with_cache_config(CacheConfig {
        authoritative_ttl_days: 0,
        heuristic_ttl_days: 7,
    })
    .await;
    stores.provision.execute().await.unwrap();
    stores
        .import
        .import_text(SAMPLE_FEATURE_COLLECTION, SAMPLE_SOURCE)
        .await
        .unwrap();

    stores
        .resolve
        .execute(coordinate("-36.96", "174.79"), None)
        .await;
    stores
        .resolve
        .execute(coordinate("-41.75", "171.60"), None)
        .await;

    let recent = stores.recent.execute(10).await.unwrap();
    let manukau = recent.iter().find(|e| e.region.as_ref() == "Auckland").unwrap();
    let westport = recent.iter().find(|e| e.region.as_ref() == "Unknown").unwrap();

    assert_eq!(manukau.expires_at, None);
    let ttl = westport.expires_at.unwrap() - westport.queried_at;
    assert_eq!(ttl.num_days(), 7);
}

// ============================================================================
// Degradation
// ============================================================================

#[tokio::test]
async fn test_unprovisioned_polygon_store_degrades() {
    let stores = TestStores::start().await;

    let result = stores
        .resolve
        .execute(coordinate("-36.845", "174.765"), None)
        .await;

    assert_eq!(result.tier, RiskTier::Low);
    assert_eq!(result.region.as_ref(), "Unknown");
    assert_eq!(result.source, ResolutionSource::Error);
    assert!(!result.from_cache);
    assert!(stores.recent.execute(10).await.unwrap().is_empty());
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn test_concurrent_requests_all_answer() {
    let stores = seeded().await;
    let resolve = Arc::clone(&stores.resolve);

    let points = [
        ("-36.845", "174.765"),
        ("-36.850", "174.550"),
        ("-36.960", "174.790"),
        ("-41.210", "174.910"),
        ("-43.530", "172.630"),
    ];

    let tasks = (0..4).flat_map(|_| points.iter()).map(|(lat, lon)| {
        let resolve = Arc::clone(&resolve);
        let point = coordinate(lat, lon);
        tokio::spawn(async move { resolve.execute(point, None).await })
    });
    let results: Vec<_> = join_all(tasks)
        .await
        .into_iter()
        .map(|r| r.unwrap())
        .collect();

    assert_eq!(results.len(), 20);
    assert!(results.iter().all(|r| r.source != ResolutionSource::Error));
    for chunk in results.chunks(points.len()) {
        assert_eq!(chunk[0].tier, RiskTier::High);
        assert_eq!(chunk[1].tier, RiskTier::Medium);
        assert_eq!(chunk[2].tier, RiskTier::Medium);
        assert_eq!(chunk[3].tier, RiskTier::High);
        assert_eq!(chunk[4].tier, RiskTier::Low);
    }
}
