use async_trait::async_trait;
use log::info;

use super::DataProvider;
use crate::config::ApiSettings;
use crate::domain::{
    GenreCount, GenreFrequency, GenreScore, ModelStats, PopularityPoint, RatingBucketCount,
    StudioScore, YearCount,
};
use crate::errors::Result;
use crate::http::ApiClient;

pub const GENRE_DISTRIBUTION_PATH: &str = "/genres/distribution";
pub const GENRE_FREQUENCY_PATH: &str = "/genres/frequency";
pub const GENRE_SCORES_PATH: &str = "/genres/scores";
pub const STUDIO_SCORES_PATH: &str = "/studios/scores";
pub const YEAR_DISTRIBUTION_PATH: &str = "/years/distribution";
pub const POPULARITY_RATING_PATH: &str = "/popularity-rating";
pub const RATING_DISTRIBUTION_PATH: &str = "/ratings/distribution";
pub const AVAILABLE_GENRES_PATH: &str = "/genres/available";
pub const MODEL_STATS_PATH: &str = "/model/stats";

/// Fetches aggregates from a remote `/api` server on every call
pub struct RemoteProvider {
    client: ApiClient,
}

impl RemoteProvider {
    pub fn new(settings: &ApiSettings) -> anyhow::Result<Self> {
        info!("Using remote data provider at {}", settings.base_url);
        Ok(Self {
            client: ApiClient::new(settings)?,
        })
    }

    pub fn with_client(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataProvider for RemoteProvider {
    async fn genre_distribution(&self) -> Result<Vec<GenreCount>> {
        self.client
            .get_json(GENRE_DISTRIBUTION_PATH, "genre distribution")
            .await
    }

    async fn genre_frequency(&self) -> Result<Vec<GenreFrequency>> {
        self.client
            .get_json(GENRE_FREQUENCY_PATH, "genre frequency")
            .await
    }

    async fn genre_scores(&self) -> Result<Vec<GenreScore>> {
        self.client.get_json(GENRE_SCORES_PATH, "genre scores").await
    }

    async fn studio_scores(&self) -> Result<Vec<StudioScore>> {
        self.client.get_json(STUDIO_SCORES_PATH, "studio scores").await
    }

    async fn year_distribution(&self) -> Result<Vec<YearCount>> {
        self.client
            .get_json(YEAR_DISTRIBUTION_PATH, "year distribution")
            .await
    }

    async fn popularity_vs_score(&self) -> Result<Vec<PopularityPoint>> {
        self.client
            .get_json(POPULARITY_RATING_PATH, "popularity vs rating")
            .await
    }

    async fn rating_distribution(&self) -> Result<Vec<RatingBucketCount>> {
        self.client
            .get_json(RATING_DISTRIBUTION_PATH, "rating distribution")
            .await
    }

    async fn available_genres(&self) -> Result<Vec<String>> {
        self.client
            .get_json(AVAILABLE_GENRES_PATH, "available genres")
            .await
    }

    async fn model_stats(&self) -> Result<ModelStats> {
        self.client.get_json(MODEL_STATS_PATH, "model stats").await
    }
}
