use crate::geojson::parse_geometry_str;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hazard_zone_application::ports::RiskPolygonRepository;
use hazard_zone_domain::{Coordinate, DomainError, RiskPolygon};
use sqlx::SqlitePool;
use tracing::{debug, error, info, instrument};

type RiskPolygonRow = (i64, String, Option<f64>, String, String, Option<i64>);

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS risk_polygons (
        id             INTEGER PRIMARY KEY AUTOINCREMENT,
        flood_category TEXT    NOT NULL,
        return_period  REAL,
        geometry       TEXT    NOT NULL,
        min_lon        REAL    NOT NULL,
        min_lat        REAL    NOT NULL,
        max_lon        REAL    NOT NULL,
        max_lat        REAL    NOT NULL,
        source         TEXT    NOT NULL,
        imported_at    INTEGER NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_risk_polygons_bbox
        ON risk_polygons (min_lon, max_lon, min_lat, max_lat)",
];

/// SQLite-backed polygon store.
///
/// Bounding-box columns narrow the candidates in SQL; the exact ring test
/// runs here over the parsed geometry of each candidate.
pub struct SqliteRiskPolygonRepository {
    pool: SqlitePool,
}

impl SqliteRiskPolygonRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_polygon(row: RiskPolygonRow) -> Result<RiskPolygon, DomainError> {
        let (id, flood_category, return_period, geometry_json, source, imported_at) = row;

        let geometry = parse_geometry_str(&geometry_json)?;
        let mut polygon = RiskPolygon::new(
            &flood_category,
            return_period,
            geometry,
            &geometry_json,
            &source,
        );
        polygon.id = Some(id);
        polygon.imported_at = imported_at.and_then(DateTime::from_timestamp_millis);
        Ok(polygon)
    }
}

#[async_trait]
impl RiskPolygonRepository for SqliteRiskPolygonRepository {
    #[instrument(skip(self))]
    async fn initialize(&self) -> Result<(), DomainError> {
        for statement in SCHEMA {
            sqlx::query(*statement)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    error!(error = %e, "Failed to provision polygon store");
                    DomainError::DatabaseError(e.to_string())
                })?;
        }

        info!("Polygon store provisioned");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_containing(
        &self,
        coordinate: Coordinate,
    ) -> Result<Option<RiskPolygon>, DomainError> {
        let lon = coordinate.longitude();
        let lat = coordinate.latitude();

        let rows = sqlx::query_as::<_, RiskPolygonRow>(
            "SELECT id, flood_category, return_period, geometry, source, imported_at
             FROM risk_polygons
             WHERE min_lon <= ? AND max_lon >= ?
               AND min_lat <= ? AND max_lat >= ?
             ORDER BY return_period IS NULL, return_period ASC, id ASC",
        )
        .bind(lon)
        .bind(lon)
        .bind(lat)
        .bind(lat)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query polygon candidates");
            DomainError::DatabaseError(e.to_string())
        })?;

        let candidates = rows.len();
        for row in rows {
            let id = row.0;
            let polygon = Self::row_to_polygon(row).inspect_err(|e| {
                error!(id, error = %e, "Stored polygon has unreadable geometry");
            })?;

            if polygon.contains(lon, lat) {
                debug!(id, candidates, "Containing polygon found");
                return Ok(Some(polygon));
            }
        }

        debug!(candidates, "No containing polygon");
        Ok(None)
    }

    #[instrument(skip(self, polygons), fields(count = polygons.len()))]
    async fn bulk_insert(&self, polygons: &[RiskPolygon]) -> Result<u64, DomainError> {
        let db_error = |context: &'static str| {
            move |e: sqlx::Error| {
                error!(error = %e, "{}", context);
                DomainError::DatabaseError(e.to_string())
            }
        };

        let imported_at = Utc::now().timestamp_millis();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin polygon import"))?;

        let mut inserted = 0u64;
        for polygon in polygons {
            let bounds = polygon.geometry.bounds();
            let result = sqlx::query(
                "INSERT INTO risk_polygons
                    (flood_category, return_period, geometry,
                     min_lon, min_lat, max_lon, max_lat, source, imported_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(&*polygon.flood_category)
            .bind(polygon.return_period)
            .bind(&*polygon.geometry_json)
            .bind(bounds.min_lon)
            .bind(bounds.min_lat)
            .bind(bounds.max_lon)
            .bind(bounds.max_lat)
            .bind(&*polygon.source)
            .bind(imported_at)
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to insert polygon"))?;

            inserted += result.rows_affected();
        }

        tx.commit()
            .await
            .map_err(db_error("Failed to commit polygon import"))?;

        Ok(inserted)
    }
}
