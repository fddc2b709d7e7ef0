use serde::{Deserialize, Serialize};

/// Upper bound for either TTL, roughly a century
pub const MAX_TTL_DAYS: u32 = 36_500;

/// Expiry applied to cache entries written after a cache miss
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Days an authoritative answer stays cached (default: 30, 0 = never expires)
    #[serde(default = "default_authoritative_ttl_days")]
    pub authoritative_ttl_days: u32,

    /// Days a heuristic answer stays cached (default: 7, must be > 0)
    #[serde(default = "default_heuristic_ttl_days")]
    pub heuristic_ttl_days: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            authoritative_ttl_days: default_authoritative_ttl_days(),
            heuristic_ttl_days: default_heuristic_ttl_days(),
        }
    }
}

fn default_authoritative_ttl_days() -> u32 {
    30
}

fn default_heuristic_ttl_days() -> u32 {
    7
}
