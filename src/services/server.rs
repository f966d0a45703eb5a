use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::AppConfig;
use crate::prediction::HeuristicEstimator;
use crate::provider::StaticProvider;

/// Serves the `/api` surface from the seed dataset and the heuristic
pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let provider = StaticProvider::seeded(&self.config);
        let estimator = HeuristicEstimator::new(self.config.predictor.clone())
            .with_known_genres(provider.genres().to_vec());

        info!("Predictor variant: {}", self.config.predictor.algorithm_name);

        let state = Arc::new(AppState {
            provider: Arc::new(provider),
            estimator: Arc::new(estimator),
        });

        let app = create_router(state).layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
