use crate::ports::{FeatureDecoder, RiskPolygonRepository};
use hazard_zone_domain::DomainError;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Loads a feature collection into the polygon store.
///
/// Not meant to run concurrently with itself against the same store;
/// callers serialize imports. Every feature is decoded before anything is
/// written, and the insert is a single all-or-nothing batch, so one bad
/// feature aborts the whole import instead of being skipped.
pub struct ImportFeaturesUseCase {
    polygon_repo: Arc<dyn RiskPolygonRepository>,
    decoder: Arc<dyn FeatureDecoder>,
}

impl ImportFeaturesUseCase {
    pub fn new(
        polygon_repo: Arc<dyn RiskPolygonRepository>,
        decoder: Arc<dyn FeatureDecoder>,
    ) -> Self {
        Self {
            polygon_repo,
            decoder,
        }
    }

    /// Returns the number of polygons inserted.
    #[instrument(skip(self, text), fields(bytes = text.len()))]
    pub async fn import_text(&self, text: &str, source: &str) -> Result<u64, DomainError> {
        let polygons = self.decoder.decode(text, source)?;
        let inserted = self.polygon_repo.bulk_insert(&polygons).await?;

        info!(count = inserted, source, "Imported flood polygons");
        Ok(inserted)
    }

    /// `Ok(false)` when the file is missing or is not a feature collection at
    /// all; errors for bad features and failed inserts.
    #[instrument(skip(self))]
    pub async fn import_file(&self, path: &Path) -> Result<bool, DomainError> {
        let text = match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "Feature collection file not found");
                return Ok(false);
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                warn!(path = %path.display(), error = %e, "Feature collection file is not text");
                return Ok(false);
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to read feature collection");
                return Err(DomainError::IoError(e.to_string()));
            }
        };

        match self.import_text(&text, &path.display().to_string()).await {
            Ok(_) => Ok(true),
            Err(DomainError::UnreadableFeatureCollection(reason)) => {
                warn!(path = %path.display(), reason = %reason, "Not a feature collection");
                Ok(false)
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Feature import aborted");
                Err(e)
            }
        }
    }
}
