use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    charts::{
        get_available_genres, get_genre_distribution, get_genre_frequency, get_genre_scores,
        get_model_stats, get_popularity_rating, get_rating_distribution, get_studio_scores,
        get_year_distribution,
    },
    prediction::predict_score,
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/genres/distribution", get(get_genre_distribution))
        .route("/api/genres/frequency", get(get_genre_frequency))
        .route("/api/genres/scores", get(get_genre_scores))
        .route("/api/genres/available", get(get_available_genres))
        .route("/api/studios/scores", get(get_studio_scores))
        .route("/api/years/distribution", get(get_year_distribution))
        .route("/api/popularity-rating", get(get_popularity_rating))
        .route("/api/ratings/distribution", get(get_rating_distribution))
        .route("/api/model/stats", get(get_model_stats))
        .route("/api/predict", post(predict_score))
        .with_state(state)
}
