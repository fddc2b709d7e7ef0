use serde::{Deserialize, Serialize};

/// Locations of the two stores. Both may point at the same SQLite file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the resolution cache database (default: "./hazard-cache.db")
    #[serde(default = "default_cache_path")]
    pub cache_path: String,

    /// Path to the authoritative polygon database (default: "./hazard-polygons.db")
    #[serde(default = "default_polygon_path")]
    pub polygon_path: String,

    /// Upper bound on pooled connections per store (default: 8)
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn cache_url(&self) -> String {
        sqlite_url(&self.cache_path)
    }

    pub fn polygon_url(&self) -> String {
        sqlite_url(&self.polygon_path)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            cache_path: default_cache_path(),
            polygon_path: default_polygon_path(),
            max_connections: default_max_connections(),
        }
    }
}

fn sqlite_url(path: &str) -> String {
    if path.starts_with("sqlite:") {
        path.to_string()
    } else {
        format!("sqlite:{path}")
    }
}

fn default_cache_path() -> String {
    "./hazard-cache.db".to_string()
}

fn default_polygon_path() -> String {
    "./hazard-polygons.db".to_string()
}

fn default_max_connections() -> u32 {
    8
}
