pub mod feature_decoder;
pub mod geometry;
pub mod sample_data;

pub use feature_decoder::GeoJsonFeatureDecoder;
pub use geometry::{parse_geometry, parse_geometry_str};
pub use sample_data::{SAMPLE_FEATURE_COLLECTION, SAMPLE_SOURCE};
