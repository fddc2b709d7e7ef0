use hazard_zone_domain::{DomainError, MultiPolygon, Polygon, Position};
use serde_json::Value;

/// Parses a GeoJSON `Polygon` or `MultiPolygon` geometry object.
pub fn parse_geometry(value: &Value) -> Result<MultiPolygon, DomainError> {
    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid("geometry has no type"))?;
    let coordinates = value
        .get("coordinates")
        .ok_or_else(|| invalid("geometry has no coordinates"))?;

    let polygons = match kind {
        "Polygon" => vec![parse_polygon(coordinates)?],
        "MultiPolygon" => as_array(coordinates, "multi-polygon")?
            .iter()
            .map(parse_polygon)
            .collect::<Result<Vec<_>, _>>()?,
        other => return Err(invalid(&format!("unsupported geometry type {other}"))),
    };

    MultiPolygon::new(polygons)
}

pub fn parse_geometry_str(text: &str) -> Result<MultiPolygon, DomainError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| invalid(&format!("geometry is not JSON: {e}")))?;
    parse_geometry(&value)
}

fn parse_polygon(value: &Value) -> Result<Polygon, DomainError> {
    let mut rings = as_array(value, "polygon")?
        .iter()
        .map(parse_ring)
        .collect::<Result<Vec<_>, _>>()?
        .into_iter();

    let exterior = rings.next().ok_or_else(|| invalid("polygon has no rings"))?;
    Ok(Polygon {
        exterior,
        holes: rings.collect(),
    })
}

fn parse_ring(value: &Value) -> Result<Vec<Position>, DomainError> {
    as_array(value, "ring")?.iter().map(parse_position).collect()
}

fn parse_position(value: &Value) -> Result<Position, DomainError> {
    let parts = as_array(value, "position")?;
    match (
        parts.first().and_then(Value::as_f64),
        parts.get(1).and_then(Value::as_f64),
    ) {
        (Some(lon), Some(lat)) => Ok([lon, lat]),
        _ => Err(invalid("position needs numeric longitude and latitude")),
    }
}

fn as_array<'a>(value: &'a Value, what: &str) -> Result<&'a Vec<Value>, DomainError> {
    value
        .as_array()
        .ok_or_else(|| invalid(&format!("{what} is not an array")))
}

fn invalid(reason: &str) -> DomainError {
    DomainError::InvalidGeometry(reason.to_string())
}
