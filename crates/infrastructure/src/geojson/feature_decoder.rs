use super::geometry::parse_geometry;
use hazard_zone_application::ports::FeatureDecoder;
use hazard_zone_domain::{DomainError, RiskPolygon};
use serde_json::value::RawValue;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

const CATEGORY_KEYS: &[&str] = &[
    "flood_category",
    "FloodCategory",
    "FLOOD_CAT",
    "Category",
    "CATEGORY",
    "Risk",
    "RISK",
];

const RETURN_PERIOD_KEYS: &[&str] = &["return_period", "ReturnPeriod", "RETURN_PER", "ARI", "Years"];

const UNKNOWN_CATEGORY: &str = "Unknown";

/// Decodes GeoJSON feature collections.
///
/// Property names vary between data providers, so category and return period
/// are probed under several keys in a fixed order.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeoJsonFeatureDecoder;

impl GeoJsonFeatureDecoder {
    pub fn new() -> Self {
        Self
    }

    fn decode_feature(feature: &RawValue, source: &str) -> Result<RiskPolygon, String> {
        let fields: BTreeMap<String, &RawValue> = serde_json::from_str(feature.get())
            .map_err(|_| "feature is not an object".to_string())?;

        // Kept as the exact input text
        let geometry_text = match fields.get("geometry") {
            Some(raw) if raw.get() != "null" => raw.get(),
            _ => return Err("feature has no geometry".to_string()),
        };
        let geometry_value: Value =
            serde_json::from_str(geometry_text).map_err(|e| e.to_string())?;
        let geometry = parse_geometry(&geometry_value).map_err(|e| e.to_string())?;

        let properties = match fields.get("properties") {
            Some(raw) => serde_json::from_str::<Value>(raw.get())
                .map_err(|e| e.to_string())?
                .as_object()
                .cloned()
                .unwrap_or_default(),
            None => Map::new(),
        };

        let category = category_of(&properties);
        let return_period = return_period_of(&properties);

        Ok(RiskPolygon::new(
            &category,
            return_period,
            geometry,
            geometry_text,
            source,
        ))
    }
}

impl FeatureDecoder for GeoJsonFeatureDecoder {
    fn decode(&self, text: &str, source: &str) -> Result<Vec<RiskPolygon>, DomainError> {
        let document: BTreeMap<String, &RawValue> = serde_json::from_str(text)
            .map_err(|e| DomainError::UnreadableFeatureCollection(e.to_string()))?;

        let features: Vec<&RawValue> = document
            .get("features")
            .and_then(|raw| serde_json::from_str(raw.get()).ok())
            .ok_or_else(|| {
                DomainError::UnreadableFeatureCollection("no features array".to_string())
            })?;

        let polygons = features
            .into_iter()
            .enumerate()
            .map(|(index, feature)| {
                Self::decode_feature(feature, source)
                    .map_err(|reason| DomainError::MalformedFeature { index, reason })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = polygons.len(), source, "Decoded feature collection");
        Ok(polygons)
    }
}

fn category_of(properties: &Map<String, Value>) -> String {
    CATEGORY_KEYS
        .iter()
        .filter_map(|key| properties.get(*key))
        .find(|value| !value.is_null())
        .map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string())
}

fn return_period_of(properties: &Map<String, Value>) -> Option<f64> {
    let value = RETURN_PERIOD_KEYS
        .iter()
        .find_map(|key| properties.get(*key))?;

    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|rp| rp.is_finite())
}
