use chrono::{DateTime, Duration, Utc};
use hazard_zone_domain::config::CacheConfig;
use hazard_zone_domain::{DomainError, ResolutionSource};

/// The ordered tiers of the resolution chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionStage {
    Cache,
    Authoritative,
    Heuristic,
}

impl ResolutionStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionStage::Cache => "cache",
            ResolutionStage::Authoritative => "authoritative",
            ResolutionStage::Heuristic => "heuristic",
        }
    }
}

/// What happens to the cache after a stage answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheWrite {
    /// Nothing is written (the answer already came from the cache)
    Skip,
    /// Written with an expiry this far in the future
    Expiring(Duration),
    /// Written without an expiry
    Permanent,
}

impl CacheWrite {
    pub fn from_days(days: u32) -> Self {
        if days == 0 {
            CacheWrite::Permanent
        } else {
            CacheWrite::Expiring(Duration::days(i64::from(days)))
        }
    }

    pub fn expires_at(&self, now: DateTime<Utc>) -> Result<Option<DateTime<Utc>>, DomainError> {
        match self {
            CacheWrite::Expiring(ttl) => now.checked_add_signed(*ttl).map(Some).ok_or_else(|| {
                DomainError::ExpiryOutOfRange(format!("{} days after {now}", ttl.num_days()))
            }),
            CacheWrite::Skip | CacheWrite::Permanent => Ok(None),
        }
    }

    pub fn persists(&self) -> bool {
        !matches!(self, CacheWrite::Skip)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StagePolicy {
    pub source: ResolutionSource,
    pub from_cache: bool,
    pub cache_write: CacheWrite,
}

/// Stage -> (source tag, cache flag, cache write) in one place.
#[derive(Debug, Clone)]
pub struct StagePolicyTable {
    cache: StagePolicy,
    authoritative: StagePolicy,
    heuristic: StagePolicy,
}

impl StagePolicyTable {
    pub fn from_config(config: &CacheConfig) -> Self {
        Self {
            cache: StagePolicy {
                source: ResolutionSource::Cached,
                from_cache: true,
                cache_write: CacheWrite::Skip,
            },
            authoritative: StagePolicy {
                source: ResolutionSource::Authoritative,
                from_cache: false,
                cache_write: CacheWrite::from_days(config.authoritative_ttl_days),
            },
            heuristic: StagePolicy {
                source: ResolutionSource::Heuristic,
                from_cache: false,
                // A heuristic answer always expires so authoritative coverage
                // gets a chance to replace it.
                cache_write: CacheWrite::Expiring(Duration::days(i64::from(
                    config.heuristic_ttl_days.max(1),
                ))),
            },
        }
    }

    pub fn policy(&self, stage: ResolutionStage) -> &StagePolicy {
        match stage {
            ResolutionStage::Cache => &self.cache,
            ResolutionStage::Authoritative => &self.authoritative,
            ResolutionStage::Heuristic => &self.heuristic,
        }
    }
}

impl Default for StagePolicyTable {
    fn default() -> Self {
        Self::from_config(&CacheConfig::default())
    }
}
