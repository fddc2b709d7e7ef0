/// Provenance label stored on polygons seeded from [`SAMPLE_FEATURE_COLLECTION`].
pub const SAMPLE_SOURCE: &str = "builtin:auckland-sample";

/// Four Auckland flood zones used for demos and smoke tests.
pub const SAMPLE_FEATURE_COLLECTION: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": {
        "flood_category": "High Risk",
        "return_period": 20,
        "area_name": "Auckland Waterfront"
      },
      "geometry": {
        "type": "MultiPolygon",
        "coordinates": [[[[174.76, -36.84], [174.77, -36.84], [174.77, -36.85], [174.76, -36.85], [174.76, -36.84]]]]
      }
    },
    {
      "type": "Feature",
      "properties": {
        "flood_category": "Medium Risk",
        "return_period": 50,
        "area_name": "West Auckland"
      },
      "geometry": {
        "type": "MultiPolygon",
        "coordinates": [[[[174.54, -36.84], [174.56, -36.84], [174.56, -36.86], [174.54, -36.86], [174.54, -36.84]]]]
      }
    },
    {
      "type": "Feature",
      "properties": {
        "flood_category": "Medium Risk",
        "return_period": 100,
        "area_name": "Manukau Harbour Area"
      },
      "geometry": {
        "type": "MultiPolygon",
        "coordinates": [[[[174.78, -36.95], [174.80, -36.95], [174.80, -36.97], [174.78, -36.97], [174.78, -36.95]]]]
      }
    },
    {
      "type": "Feature",
      "properties": {
        "flood_category": "Low Risk",
        "return_period": 100,
        "area_name": "Central Auckland"
      },
      "geometry": {
        "type": "MultiPolygon",
        "coordinates": [[[[174.74, -36.86], [174.76, -36.86], [174.76, -36.88], [174.74, -36.88], [174.74, -36.86]]]]
      }
    }
  ]
}"#;
