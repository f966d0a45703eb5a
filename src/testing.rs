//! Helpers shared by tests that need a live `/api` server
use axum::Router;
use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::config::{AppConfig, PredictorSettings};
use crate::domain::seed::available_genres;
use crate::prediction::{FixedRandom, HeuristicEstimator};
use crate::provider::StaticProvider;

/// Seed-backed state with the simple heuristic and no jitter
pub fn test_state() -> Arc<AppState> {
    let config = AppConfig::new();
    let estimator = HeuristicEstimator::with_random(
        PredictorSettings::simple(),
        Arc::new(FixedRandom::no_jitter()),
    )
    .with_known_genres(available_genres());

    Arc::new(AppState {
        provider: Arc::new(StaticProvider::seeded(&config)),
        estimator: Arc::new(estimator),
    })
}

pub fn test_router() -> Router {
    create_router(test_state())
}

/// Serves `app` on an ephemeral localhost port, returns `http://host:port`
pub async fn serve_app(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{}", addr)
}

/// Base URL of a seed-backed `/api` server
pub async fn spawn_api() -> String {
    format!("{}/api", serve_app(test_router()).await)
}
