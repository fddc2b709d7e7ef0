//! Planar multi-polygon geometry in WGS84 longitude/latitude degrees.
//!
//! Only what the polygon store needs: bounds for index pre-filtering and an
//! even-odd point-in-polygon test that honours holes.

use crate::errors::DomainError;

/// `[longitude, latitude]`, matching GeoJSON position order.
pub type Position = [f64; 2];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    fn empty() -> Self {
        Self {
            min_lon: f64::INFINITY,
            min_lat: f64::INFINITY,
            max_lon: f64::NEG_INFINITY,
            max_lat: f64::NEG_INFINITY,
        }
    }

    fn extend(&mut self, [lon, lat]: Position) {
        self.min_lon = self.min_lon.min(lon);
        self.max_lon = self.max_lon.max(lon);
        self.min_lat = self.min_lat.min(lat);
        self.max_lat = self.max_lat.max(lat);
    }

    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        lon >= self.min_lon && lon <= self.max_lon && lat >= self.min_lat && lat <= self.max_lat
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub exterior: Vec<Position>,
    pub holes: Vec<Vec<Position>>,
}

impl Polygon {
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        ring_contains(&self.exterior, lon, lat)
            && !self.holes.iter().any(|hole| ring_contains(hole, lon, lat))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    pub polygons: Vec<Polygon>,
}

impl MultiPolygon {
    /// Builds a multi-polygon from raw rings, rejecting anything that is not a
    /// closed ring of at least four finite positions inside WGS84 bounds.
    pub fn new(polygons: Vec<Polygon>) -> Result<Self, DomainError> {
        if polygons.is_empty() {
            return Err(DomainError::InvalidGeometry(
                "multi-polygon has no parts".to_string(),
            ));
        }

        for polygon in &polygons {
            validate_ring(&polygon.exterior)?;
            for hole in &polygon.holes {
                validate_ring(hole)?;
            }
        }

        Ok(Self { polygons })
    }

    pub fn bounds(&self) -> BoundingBox {
        let mut bbox = BoundingBox::empty();
        for polygon in &self.polygons {
            for &position in &polygon.exterior {
                bbox.extend(position);
            }
        }
        bbox
    }

    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        self.polygons.iter().any(|p| p.contains(lon, lat))
    }
}

fn validate_ring(ring: &[Position]) -> Result<(), DomainError> {
    if ring.len() < 4 {
        return Err(DomainError::InvalidGeometry(format!(
            "ring has {} positions, at least 4 required",
            ring.len()
        )));
    }

    for &[lon, lat] in ring {
        if !lon.is_finite() || !lat.is_finite() {
            return Err(DomainError::InvalidGeometry(
                "ring contains a non-finite position".to_string(),
            ));
        }
        if !(-180.0..=180.0).contains(&lon) || !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::InvalidGeometry(format!(
                "position [{lon}, {lat}] is outside WGS84 bounds"
            )));
        }
    }

    if ring.first() != ring.last() {
        return Err(DomainError::InvalidGeometry("ring is not closed".to_string()));
    }

    Ok(())
}

/// Even-odd ray cast towards +longitude.
fn ring_contains(ring: &[Position], lon: f64, lat: f64) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let [xi, yi] = ring[i];
        let [xj, yj] = ring[j];

        if (yi > lat) != (yj > lat) {
            let x_cross = (xj - xi) * (lat - yi) / (yj - yi) + xi;
            if lon < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
