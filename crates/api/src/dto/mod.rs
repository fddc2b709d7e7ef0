pub mod admin;
pub mod hazard;

pub use admin::{ErrorResponse, ImportRequest, MessageResponse};
pub use hazard::{CachedQueryResponse, HazardQueryParams, HazardResponse, RecentQueryParams};
