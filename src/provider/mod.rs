pub mod remote;
pub mod static_table;

use async_trait::async_trait;

use crate::domain::{
    GenreCount, GenreFrequency, GenreScore, ModelStats, PopularityPoint, RatingBucketCount,
    StudioScore, YearCount,
};
use crate::errors::Result;

pub use remote::RemoteProvider;
pub use static_table::StaticProvider;

/// Read-only source of pre-aggregated chart rows.
///
/// Implementations return rows in the order documented on each method and
/// must be indistinguishable to callers.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// (genre, count, percentage), descending count, ties in first-seen order
    async fn genre_distribution(&self) -> Result<Vec<GenreCount>>;

    /// (genre, frequency), descending
    async fn genre_frequency(&self) -> Result<Vec<GenreFrequency>>;

    /// Mean rating per genre, descending
    async fn genre_scores(&self) -> Result<Vec<GenreScore>>;

    /// Mean rating and title count per studio, descending
    async fn studio_scores(&self) -> Result<Vec<StudioScore>>;

    /// Titles per year, ascending by year
    async fn year_distribution(&self) -> Result<Vec<YearCount>>;

    /// One point per title, unsorted
    async fn popularity_vs_score(&self) -> Result<Vec<PopularityPoint>>;

    /// Titles per fixed rating range
    async fn rating_distribution(&self) -> Result<Vec<RatingBucketCount>>;

    /// Genre labels the predictor understands
    async fn available_genres(&self) -> Result<Vec<String>>;

    async fn model_stats(&self) -> Result<ModelStats>;
}
