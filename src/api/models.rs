use serde::{Deserialize, Serialize};

use crate::domain::MediaType;
use crate::prediction::{ModelDescriptor, PredictionRequest, PredictionResult, DEFAULT_MEMBERS};

/// Body of `POST /predict`. Missing genres fall through to validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictBody {
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default = "default_members")]
    pub members: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episodes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub studio: Option<String>,
}

fn default_members() -> u64 {
    DEFAULT_MEMBERS
}

impl From<&PredictionRequest> for PredictBody {
    fn from(request: &PredictionRequest) -> Self {
        Self {
            genres: request.genres().to_vec(),
            members: request.popularity,
            episodes: request.episode_count,
            year: request.release_year,
            media_type: request.media_type,
            studio: request.studio.clone(),
        }
    }
}

impl From<PredictBody> for PredictionRequest {
    fn from(body: PredictBody) -> Self {
        PredictionRequest::new(body.genres, body.members)
            .with_episodes(body.episodes)
            .with_year(body.year)
            .with_media_type(body.media_type)
            .with_studio(body.studio)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub algorithm: String,
    pub neighbors: u32,
    pub features_used: u32,
}

/// Reply of `POST /predict`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predicted_score: f64,
    pub confidence: f64,
    pub model_info: ModelInfo,
}

impl From<PredictionResult> for PredictResponse {
    fn from(result: PredictionResult) -> Self {
        Self {
            predicted_score: result.predicted_score,
            confidence: result.confidence,
            model_info: ModelInfo {
                algorithm: result.model.algorithm_name,
                neighbors: result.model.neighbor_count,
                features_used: result.model.feature_count,
            },
        }
    }
}

impl From<PredictResponse> for PredictionResult {
    fn from(response: PredictResponse) -> Self {
        Self {
            predicted_score: response.predicted_score,
            unrounded_score: response.predicted_score,
            confidence: response.confidence,
            model: ModelDescriptor {
                algorithm_name: response.model_info.algorithm,
                neighbor_count: response.model_info.neighbors,
                feature_count: response.model_info.features_used,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
