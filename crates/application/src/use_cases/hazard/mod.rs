mod get_recent;
mod resolve_hazard;
pub mod stages;

pub use get_recent::{GetRecentQueriesUseCase, DEFAULT_RECENT_LIMIT};
pub use resolve_hazard::ResolveHazardUseCase;
pub use stages::{HazardRequest, ResolverStage, StageAnswer};
