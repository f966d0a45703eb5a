use colored::Color;
use serde::Serialize;

use crate::domain::MediaType;
use crate::errors::{Error, Result};

/// Member count assumed when a request does not give one
pub const DEFAULT_MEMBERS: u64 = 100_000;

/// Features submitted for one prediction. Genres are kept distinct in
/// submission order.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    genres: Vec<String>,
    pub popularity: u64,
    pub episode_count: Option<u32>,
    pub release_year: Option<i32>,
    pub media_type: Option<MediaType>,
    pub studio: Option<String>,
}

impl PredictionRequest {
    pub fn new<I, S>(genres: I, popularity: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut distinct: Vec<String> = Vec::new();
        for genre in genres {
            let genre = genre.into();
            if !distinct.contains(&genre) {
                distinct.push(genre);
            }
        }

        Self {
            genres: distinct,
            popularity,
            episode_count: None,
            release_year: None,
            media_type: None,
            studio: None,
        }
    }

    pub fn with_episodes(mut self, episodes: Option<u32>) -> Self {
        self.episode_count = episodes;
        self
    }

    pub fn with_year(mut self, year: Option<i32>) -> Self {
        self.release_year = year;
        self
    }

    pub fn with_media_type(mut self, media_type: Option<MediaType>) -> Self {
        self.media_type = media_type;
        self
    }

    pub fn with_studio(mut self, studio: Option<String>) -> Self {
        self.studio = studio;
        self
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// Rejects requests that cannot be scored
    pub fn validate(&self) -> Result<()> {
        if self.genres.is_empty() {
            return Err(Error::InvalidRequest(
                "Select at least one genre".to_string(),
            ));
        }
        if self.episode_count == Some(0) {
            return Err(Error::InvalidRequest(
                "Episode count must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDescriptor {
    pub algorithm_name: String,
    pub neighbor_count: u32,
    pub feature_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    /// Rounded to one decimal
    pub predicted_score: f64,
    pub unrounded_score: f64,
    /// Fraction in [0, 1]
    pub confidence: f64,
    pub model: ModelDescriptor,
}

impl PredictionResult {
    pub fn tier(&self) -> RatingTier {
        RatingTier::from_score(self.predicted_score)
    }
}

/// Rounds to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Display band of a predicted score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingTier {
    Excellent,
    VeryGood,
    Good,
    Fair,
}

impl RatingTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 9.0 {
            RatingTier::Excellent
        } else if score >= 8.0 {
            RatingTier::VeryGood
        } else if score >= 7.0 {
            RatingTier::Good
        } else {
            RatingTier::Fair
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RatingTier::Excellent => "Excellent",
            RatingTier::VeryGood => "Very Good",
            RatingTier::Good => "Good",
            RatingTier::Fair => "Fair",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            RatingTier::Excellent => Color::Green,
            RatingTier::VeryGood => Color::Blue,
            RatingTier::Good => Color::Yellow,
            RatingTier::Fair => Color::Red,
        }
    }
}
