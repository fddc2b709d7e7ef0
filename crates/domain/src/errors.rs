use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Input is not a readable feature collection: {0}")]
    UnreadableFeatureCollection(String),

    #[error("Malformed feature at index {index}: {reason}")]
    MalformedFeature { index: usize, reason: String },

    #[error("Cache expiry out of range: {0}")]
    ExpiryOutOfRange(String),

    #[error("No resolver stage produced an answer")]
    NoResolution,
}
