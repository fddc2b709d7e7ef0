use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hazard_zone_application::ports::HazardQueryRepository;
use hazard_zone_domain::{
    CachedQuery, Coordinate, DomainError, RiskTier, PROXIMITY_TOLERANCE_E6,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{debug, error, instrument};

type HazardQueryRow = (
    i64,
    i64,
    i64,
    Option<String>,
    String,
    String,
    Option<String>,
    Option<f64>,
    i64,
    Option<i64>,
);

const SELECT_COLUMNS: &str = "SELECT id, latitude_e6, longitude_e6, parcel_id, risk_tier, region,
            flood_category, return_period, queried_at, expires_at
     FROM hazard_queries";

/// SQLite-backed resolution cache.
///
/// Insert-only: rows are never updated or deleted here, and expired rows are
/// excluded by the `expires_at` predicate at read time.
pub struct SqliteHazardQueryRepository {
    pool: SqlitePool,
}

impl SqliteHazardQueryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_query(row: HazardQueryRow) -> Result<CachedQuery, DomainError> {
        let (
            id,
            latitude_e6,
            longitude_e6,
            parcel_id,
            risk_tier,
            region,
            flood_category,
            return_period,
            queried_at,
            expires_at,
        ) = row;

        Ok(CachedQuery {
            id: Some(id),
            coordinate: Coordinate::from_micro_degrees(latitude_e6, longitude_e6)?,
            parcel_id: parcel_id.map(|s| Arc::from(s.as_str())),
            tier: RiskTier::from_str(&risk_tier).unwrap_or_default(),
            region: Arc::from(region.as_str()),
            flood_category: flood_category.map(|s| Arc::from(s.as_str())),
            return_period,
            queried_at: from_millis(queried_at)?,
            expires_at: expires_at.map(from_millis).transpose()?,
        })
    }

    fn map_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
        move |e| {
            error!(error = %e, "{}", context);
            DomainError::DatabaseError(e.to_string())
        }
    }
}

fn from_millis(millis: i64) -> Result<DateTime<Utc>, DomainError> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| DomainError::DatabaseError(format!("invalid timestamp {millis}")))
}

#[async_trait]
impl HazardQueryRepository for SqliteHazardQueryRepository {
    #[instrument(skip(self))]
    async fn find_by_proximity(
        &self,
        coordinate: Coordinate,
    ) -> Result<Option<CachedQuery>, DomainError> {
        let now = Utc::now().timestamp_millis();
        let sql = format!(
            "{SELECT_COLUMNS}
             WHERE latitude_e6 BETWEEN ? AND ?
               AND longitude_e6 BETWEEN ? AND ?
               AND (expires_at IS NULL OR expires_at > ?)
             ORDER BY queried_at DESC, id DESC
             LIMIT 1"
        );

        let row = sqlx::query_as::<_, HazardQueryRow>(&sql)
            .bind(coordinate.latitude_e6() - PROXIMITY_TOLERANCE_E6)
            .bind(coordinate.latitude_e6() + PROXIMITY_TOLERANCE_E6)
            .bind(coordinate.longitude_e6() - PROXIMITY_TOLERANCE_E6)
            .bind(coordinate.longitude_e6() + PROXIMITY_TOLERANCE_E6)
            .bind(now)
            .fetch_optional(&self.pool)
            .await
            .map_err(Self::map_error("Failed to query cache by proximity"))?;

        debug!(hit = row.is_some(), "Proximity lookup");
        row.map(Self::row_to_query).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_parcel(&self, parcel_id: &str) -> Result<Option<CachedQuery>, DomainError> {
        let now = Utc::now().timestamp_millis();
        let sql = format!(
            "{SELECT_COLUMNS}
             WHERE parcel_id = ?
               AND (expires_at IS NULL OR expires_at > ?)
             ORDER BY queried_at DESC, id DESC
             LIMIT 1"
        );

        let row = sqlx::query_as::<_, HazardQueryRow>(&sql)
            .bind(parcel_id)
            .bind(now)
            .fetch_optional(&self.pool)
            .await
            .map_err(Self::map_error("Failed to query cache by parcel"))?;

        row.map(Self::row_to_query).transpose()
    }

    #[instrument(skip(self, entry), fields(coordinate = %entry.coordinate, tier = %entry.tier))]
    async fn save(&self, entry: &CachedQuery) -> Result<i64, DomainError> {
        let result = sqlx::query(
            "INSERT INTO hazard_queries
                (latitude_e6, longitude_e6, parcel_id, risk_tier, region,
                 flood_category, return_period, queried_at, expires_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(entry.coordinate.latitude_e6())
        .bind(entry.coordinate.longitude_e6())
        .bind(entry.parcel_id.as_deref())
        .bind(entry.tier.as_str())
        .bind(&*entry.region)
        .bind(entry.flood_category.as_deref())
        .bind(entry.return_period)
        .bind(entry.queried_at.timestamp_millis())
        .bind(entry.expires_at.map(|t| t.timestamp_millis()))
        .execute(&self.pool)
        .await
        .map_err(Self::map_error("Failed to save cache entry"))?;

        Ok(result.last_insert_rowid())
    }

    #[instrument(skip(self))]
    async fn recent(&self, limit: u32) -> Result<Vec<CachedQuery>, DomainError> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY queried_at DESC, id DESC LIMIT ?");

        let rows = sqlx::query_as::<_, HazardQueryRow>(&sql)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(Self::map_error("Failed to query recent cache entries"))?;

        rows.into_iter().map(Self::row_to_query).collect()
    }
}
