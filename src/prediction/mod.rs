pub mod heuristic;
pub mod random;
pub mod remote;
pub mod types;

use async_trait::async_trait;

use crate::errors::Result;

pub use heuristic::{HeuristicEstimator, ScoreBreakdown};
pub use random::{FixedRandom, RandomSource, SeededRandom, ThreadRandom};
pub use remote::RemoteEstimator;
pub use types::{
    round1, ModelDescriptor, PredictionRequest, PredictionResult, RatingTier, DEFAULT_MEMBERS,
};

/// Anything that turns a feature selection into a rating estimate.
/// Fails with `InvalidRequest` when no genre is selected.
#[async_trait]
pub trait ScoreEstimator: Send + Sync {
    async fn estimate(&self, request: &PredictionRequest) -> Result<PredictionResult>;
}
