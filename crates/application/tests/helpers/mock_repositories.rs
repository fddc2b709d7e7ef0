#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use hazard_zone_application::ports::{
    FeatureDecoder, HazardQueryRepository, RiskPolygonRepository,
};
use hazard_zone_domain::{
    CachedQuery, Coordinate, DomainError, MultiPolygon, Polygon, RiskPolygon, RiskTier,
    PROXIMITY_TOLERANCE_E6,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

// ============================================================================
// Mock HazardQueryRepository
// ============================================================================

#[derive(Clone, Default)]
pub struct MockHazardQueryRepository {
    entries: Arc<RwLock<Vec<CachedQuery>>>,
    proximity_lookups: Arc<AtomicUsize>,
    parcel_lookups: Arc<AtomicUsize>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
}

impl MockHazardQueryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_entries(entries: Vec<CachedQuery>) -> Self {
        let repo = Self::new();
        *repo.entries.write().await = entries;
        repo
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub async fn saved(&self) -> Vec<CachedQuery> {
        self.entries.read().await.clone()
    }

    pub fn proximity_lookups(&self) -> usize {
        self.proximity_lookups.load(Ordering::SeqCst)
    }

    pub fn parcel_lookups(&self) -> usize {
        self.parcel_lookups.load(Ordering::SeqCst)
    }

    fn check_reads(&self) -> Result<(), DomainError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("cache unavailable".to_string()));
        }
        Ok(())
    }

    fn latest<'a>(candidates: impl Iterator<Item = &'a CachedQuery>) -> Option<CachedQuery> {
        candidates
            .filter(|e| !e.is_expired(Utc::now()))
            .max_by_key(|e| (e.queried_at, e.id))
            .cloned()
    }
}

#[async_trait]
impl HazardQueryRepository for MockHazardQueryRepository {
    async fn find_by_proximity(
        &self,
        coordinate: Coordinate,
    ) -> Result<Option<CachedQuery>, DomainError> {
        self.proximity_lookups.fetch_add(1, Ordering::SeqCst);
        self.check_reads()?;

        let entries = self.entries.read().await;
        Ok(Self::latest(
            entries
                .iter()
                .filter(|e| e.coordinate.is_within(&coordinate, PROXIMITY_TOLERANCE_E6)),
        ))
    }

    async fn find_by_parcel(&self, parcel_id: &str) -> Result<Option<CachedQuery>, DomainError> {
        self.parcel_lookups.fetch_add(1, Ordering::SeqCst);
        self.check_reads()?;

        let entries = self.entries.read().await;
        Ok(Self::latest(
            entries
                .iter()
                .filter(|e| e.parcel_id.as_deref() == Some(parcel_id)),
        ))
    }

    async fn save(&self, entry: &CachedQuery) -> Result<i64, DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("cache write failed".to_string()));
        }

        let mut entries = self.entries.write().await;
        let id = entries.len() as i64 + 1;
        let mut stored = entry.clone();
        stored.id = Some(id);
        entries.push(stored);
        Ok(id)
    }

    async fn recent(&self, limit: u32) -> Result<Vec<CachedQuery>, DomainError> {
        self.check_reads()?;

        let mut entries = self.entries.read().await.clone();
        entries.sort_by(|a, b| (b.queried_at, b.id).cmp(&(a.queried_at, a.id)));
        entries.truncate(limit as usize);
        Ok(entries)
    }
}

// ============================================================================
// Mock RiskPolygonRepository
// ============================================================================

#[derive(Clone, Default)]
pub struct MockRiskPolygonRepository {
    polygons: Arc<RwLock<Vec<RiskPolygon>>>,
    containment_lookups: Arc<AtomicUsize>,
    initialize_calls: Arc<AtomicUsize>,
    fail: Arc<AtomicBool>,
}

impl MockRiskPolygonRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_polygons(polygons: Vec<RiskPolygon>) -> Self {
        let repo = Self::new();
        *repo.polygons.write().await = polygons;
        repo
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn containment_lookups(&self) -> usize {
        self.containment_lookups.load(Ordering::SeqCst)
    }

    pub fn initialize_calls(&self) -> usize {
        self.initialize_calls.load(Ordering::SeqCst)
    }

    pub async fn count(&self) -> usize {
        self.polygons.read().await.len()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("polygon store unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl RiskPolygonRepository for MockRiskPolygonRepository {
    async fn initialize(&self) -> Result<(), DomainError> {
        self.initialize_calls.fetch_add(1, Ordering::SeqCst);
        self.check()
    }

    async fn find_containing(
        &self,
        coordinate: Coordinate,
    ) -> Result<Option<RiskPolygon>, DomainError> {
        self.containment_lookups.fetch_add(1, Ordering::SeqCst);
        self.check()?;

        let polygons = self.polygons.read().await;
        let mut matches: Vec<&RiskPolygon> = polygons
            .iter()
            .filter(|p| p.contains(coordinate.longitude(), coordinate.latitude()))
            .collect();
        matches.sort_by(|a, b| {
            let a_rp = a.return_period.unwrap_or(f64::INFINITY);
            let b_rp = b.return_period.unwrap_or(f64::INFINITY);
            a_rp.total_cmp(&b_rp)
        });
        Ok(matches.first().map(|p| (*p).clone()))
    }

    async fn bulk_insert(&self, polygons: &[RiskPolygon]) -> Result<u64, DomainError> {
        self.check()?;

        let mut stored = self.polygons.write().await;
        for polygon in polygons {
            let mut polygon = polygon.clone();
            polygon.id = Some(stored.len() as i64 + 1);
            polygon.imported_at = Some(Utc::now());
            stored.push(polygon);
        }
        Ok(polygons.len() as u64)
    }
}

// ============================================================================
// Mock FeatureDecoder
// ============================================================================

/// Decodes a tiny line format: one `category;return_period` square per line
/// around a fixed Auckland point. `!unreadable` and `!malformed` trigger errors.
#[derive(Clone, Default)]
pub struct MockFeatureDecoder {
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockFeatureDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sources(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl FeatureDecoder for MockFeatureDecoder {
    fn decode(&self, text: &str, source: &str) -> Result<Vec<RiskPolygon>, DomainError> {
        self.calls.lock().unwrap().push(source.to_string());

        if text.starts_with("!unreadable") {
            return Err(DomainError::UnreadableFeatureCollection(
                "no features array".to_string(),
            ));
        }

        text.lines()
            .filter(|l| !l.trim().is_empty())
            .enumerate()
            .map(|(index, line)| {
                if line.starts_with("!malformed") {
                    return Err(DomainError::MalformedFeature {
                        index,
                        reason: "missing geometry".to_string(),
                    });
                }
                let (category, rp) = line.split_once(';').unwrap_or((line, ""));
                Ok(make_polygon(category, rp.parse().ok(), square(174.76, -36.85, 174.77, -36.84))
                    .with_source(source))
            })
            .collect()
    }
}

// ============================================================================
// Builders
// ============================================================================

pub fn coordinate(lat: &str, lon: &str) -> Coordinate {
    Coordinate::parse(lat, lon).unwrap()
}

pub fn square(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> MultiPolygon {
    MultiPolygon::new(vec![Polygon {
        exterior: vec![
            [min_lon, min_lat],
            [max_lon, min_lat],
            [max_lon, max_lat],
            [min_lon, max_lat],
            [min_lon, min_lat],
        ],
        holes: vec![],
    }])
    .unwrap()
}

pub fn make_polygon(category: &str, return_period: Option<f64>, geometry: MultiPolygon) -> RiskPolygon {
    RiskPolygon::new(category, return_period, geometry, "{}", "test")
}

pub fn make_cached(lat: &str, lon: &str, tier: RiskTier) -> CachedQuery {
    CachedQuery::new(coordinate(lat, lon), tier, "Auckland")
}

pub trait WithSource {
    fn with_source(self, source: &str) -> Self;
}

impl WithSource for RiskPolygon {
    fn with_source(mut self, source: &str) -> Self {
        self.source = Arc::from(source);
        self
    }
}
