pub mod database;
pub mod geojson;
pub mod repositories;
