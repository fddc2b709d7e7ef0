mod stage_policy;

pub use stage_policy::{CacheWrite, ResolutionStage, StagePolicy, StagePolicyTable};
