use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::error;
use serde::Serialize;
use std::sync::Arc;

use crate::api::models::ErrorBody;
use crate::errors::{Error, Result};
use crate::prediction::ScoreEstimator;
use crate::provider::DataProvider;

pub mod charts;
pub mod prediction;

pub struct AppState {
    pub provider: Arc<dyn DataProvider>,
    pub estimator: Arc<dyn ScoreEstimator>,
}

/// JSON body on success, status plus `{"error": ..}` otherwise
pub(crate) fn respond<T: Serialize>(result: Result<T>) -> Response {
    match result {
        Ok(body) => Json(body).into_response(),
        Err(e) => error_response(e),
    }
}

pub(crate) fn error_response(err: Error) -> Response {
    let status = match &err {
        Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        Error::Retrieval { .. } => {
            error!("Request failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let body = ErrorBody {
        error: err.user_message(),
    };
    (status, Json(body)).into_response()
}
