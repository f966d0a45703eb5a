use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

use super::{respond, AppState};

pub async fn get_genre_distribution(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    respond(state.provider.genre_distribution().await)
}

pub async fn get_genre_frequency(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    respond(state.provider.genre_frequency().await)
}

pub async fn get_genre_scores(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    respond(state.provider.genre_scores().await)
}

pub async fn get_studio_scores(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    respond(state.provider.studio_scores().await)
}

pub async fn get_year_distribution(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    respond(state.provider.year_distribution().await)
}

pub async fn get_popularity_rating(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    respond(state.provider.popularity_vs_score().await)
}

pub async fn get_rating_distribution(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    respond(state.provider.rating_distribution().await)
}

pub async fn get_available_genres(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    respond(state.provider.available_genres().await)
}

pub async fn get_model_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    respond(state.provider.model_stats().await)
}
