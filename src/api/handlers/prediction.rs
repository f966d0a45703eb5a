use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::{info, warn};
use std::sync::Arc;

use super::{error_response, AppState};
use crate::api::models::{ErrorBody, PredictBody, PredictResponse};
use crate::prediction::PredictionRequest;

pub async fn predict_score(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PredictBody>, JsonRejection>,
) -> impl IntoResponse {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            warn!("Rejected prediction body: {}", rejection.body_text());
            let body = ErrorBody {
                error: rejection.body_text(),
            };
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };
    let request = PredictionRequest::from(body);

    match state.estimator.estimate(&request).await {
        Ok(result) => {
            info!(
                "Predicted {:.1} for genres {:?}",
                result.predicted_score,
                request.genres()
            );
            Json(PredictResponse::from(result)).into_response()
        }
        Err(e) => error_response(e),
    }
}
