use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::Error;

/// Release format of an anime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    #[serde(rename = "TV")]
    Tv,
    Movie,
    #[serde(rename = "OVA")]
    Ova,
    #[serde(rename = "ONA")]
    Ona,
    Special,
}

impl MediaType {
    pub const ALL: [MediaType; 5] = [
        MediaType::Tv,
        MediaType::Movie,
        MediaType::Ova,
        MediaType::Ona,
        MediaType::Special,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Tv => "TV",
            MediaType::Movie => "Movie",
            MediaType::Ova => "OVA",
            MediaType::Ona => "ONA",
            MediaType::Special => "Special",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::InvalidRequest(format!("Unknown media type: {}", s)))
    }
}

/// One anime entry of the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeRecord {
    pub title: String,
    pub release_year: i32,
    pub genres: Vec<String>,
    pub studio: String,
    pub source_rating: f64,
    pub popularity: u64,
    pub episode_count: Option<u32>,
    pub media_type: Option<MediaType>,
    pub source: Option<String>,
    pub episode_duration_minutes: Option<u32>,
}

impl AnimeRecord {
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

// --- Aggregate rows ---
// Field names follow the JSON served under /api.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreFrequency {
    pub genre: String,
    pub frequency: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreScore {
    pub genre: String,
    pub average_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudioScore {
    pub studio: String,
    pub average_score: f64,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearCount {
    pub year: i32,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularityPoint {
    pub name: String,
    #[serde(rename = "members")]
    pub popularity: u64,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingBucketCount {
    pub range: String,
    pub count: u32,
}

/// Static description of the prediction model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelStats {
    pub algorithm: String,
    pub neighbors: u32,
    pub features: u32,
    pub training_samples: u32,
    pub cross_validation_folds: u32,
    pub average_mse: f64,
    pub dataset_source: String,
}
