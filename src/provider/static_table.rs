use async_trait::async_trait;
use log::info;

use super::DataProvider;
use crate::aggregation;
use crate::config::AppConfig;
use crate::domain::seed::{available_genres, seed_records};
use crate::domain::{
    AnimeRecord, GenreCount, GenreFrequency, GenreScore, ModelStats, PopularityPoint,
    RatingBucketCount, StudioScore, YearCount,
};
use crate::errors::Result;

/// In-process table of aggregates, computed once at construction
pub struct StaticProvider {
    genre_distribution: Vec<GenreCount>,
    genre_frequency: Vec<GenreFrequency>,
    genre_scores: Vec<GenreScore>,
    studio_scores: Vec<StudioScore>,
    year_distribution: Vec<YearCount>,
    popularity_vs_score: Vec<PopularityPoint>,
    rating_distribution: Vec<RatingBucketCount>,
    available_genres: Vec<String>,
    model_stats: ModelStats,
}

impl StaticProvider {
    /// Provider over the built-in seed dataset
    pub fn seeded(config: &AppConfig) -> Self {
        Self::from_records(&seed_records(), available_genres(), config)
    }

    pub fn from_records(records: &[AnimeRecord], genres: Vec<String>, config: &AppConfig) -> Self {
        info!("Building static aggregates over {} records", records.len());

        let model_stats = ModelStats {
            algorithm: config.model.algorithm.to_string(),
            neighbors: config.predictor.neighbor_count,
            features: genres.len() as u32 + 1,
            training_samples: config.model.training_samples,
            cross_validation_folds: config.model.cross_validation_folds,
            average_mse: config.model.average_mse,
            dataset_source: config.model.dataset_source.to_string(),
        };

        Self {
            genre_distribution: aggregation::genre_distribution(records),
            genre_frequency: aggregation::genre_frequency(records),
            genre_scores: aggregation::genre_scores(records),
            studio_scores: aggregation::studio_scores(records),
            year_distribution: aggregation::year_distribution(records),
            popularity_vs_score: aggregation::popularity_vs_score(records),
            rating_distribution: aggregation::rating_distribution(records),
            available_genres: genres,
            model_stats,
        }
    }

    pub fn genres(&self) -> &[String] {
        &self.available_genres
    }
}

#[async_trait]
impl DataProvider for StaticProvider {
    async fn genre_distribution(&self) -> Result<Vec<GenreCount>> {
        Ok(self.genre_distribution.clone())
    }

    async fn genre_frequency(&self) -> Result<Vec<GenreFrequency>> {
        Ok(self.genre_frequency.clone())
    }

    async fn genre_scores(&self) -> Result<Vec<GenreScore>> {
        Ok(self.genre_scores.clone())
    }

    async fn studio_scores(&self) -> Result<Vec<StudioScore>> {
        Ok(self.studio_scores.clone())
    }

    async fn year_distribution(&self) -> Result<Vec<YearCount>> {
        Ok(self.year_distribution.clone())
    }

    async fn popularity_vs_score(&self) -> Result<Vec<PopularityPoint>> {
        Ok(self.popularity_vs_score.clone())
    }

    async fn rating_distribution(&self) -> Result<Vec<RatingBucketCount>> {
        Ok(self.rating_distribution.clone())
    }

    async fn available_genres(&self) -> Result<Vec<String>> {
        Ok(self.available_genres.clone())
    }

    async fn model_stats(&self) -> Result<ModelStats> {
        Ok(self.model_stats.clone())
    }
}
