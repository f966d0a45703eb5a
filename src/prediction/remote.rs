use async_trait::async_trait;
use log::info;

use super::types::{PredictionRequest, PredictionResult};
use super::ScoreEstimator;
use crate::api::models::{PredictBody, PredictResponse};
use crate::config::ApiSettings;
use crate::errors::Result;
use crate::http::ApiClient;

pub const PREDICT_PATH: &str = "/predict";

/// Delegates scoring to a remote `/api/predict` endpoint
pub struct RemoteEstimator {
    client: ApiClient,
}

impl RemoteEstimator {
    pub fn new(settings: &ApiSettings) -> anyhow::Result<Self> {
        Ok(Self {
            client: ApiClient::new(settings)?,
        })
    }

    pub fn with_client(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ScoreEstimator for RemoteEstimator {
    async fn estimate(&self, request: &PredictionRequest) -> Result<PredictionResult> {
        // invalid requests never reach the network
        request.validate()?;

        info!(
            "Requesting remote prediction for {} genre(s) from {}",
            request.genres().len(),
            self.client.base_url()
        );
        let body = PredictBody::from(request);
        let response: PredictResponse = self
            .client
            .post_json(PREDICT_PATH, &body, "prediction")
            .await?;

        Ok(response.into())
    }
}
