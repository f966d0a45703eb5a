use anyhow::Result;
use colored::Colorize;
use std::sync::Arc;

use crate::prediction::{PredictionRequest, PredictionResult, ScoreBreakdown, ScoreEstimator};

/// Runs one prediction and prints the outcome
pub struct PredictionService {
    estimator: Arc<dyn ScoreEstimator>,
    breakdown: Option<ScoreBreakdown>,
}

impl PredictionService {
    pub fn new(estimator: Arc<dyn ScoreEstimator>) -> Self {
        Self {
            estimator,
            breakdown: None,
        }
    }

    /// Also print the deterministic components of the score
    pub fn with_breakdown(mut self, breakdown: Option<ScoreBreakdown>) -> Self {
        self.breakdown = breakdown;
        self
    }

    pub async fn run(&self, request: &PredictionRequest) -> Result<PredictionResult> {
        let result = self.estimator.estimate(request).await?;
        for line in self.render(&result) {
            println!("{}", line);
        }
        Ok(result)
    }

    pub fn render(&self, result: &PredictionResult) -> Vec<String> {
        let tier = result.tier();
        let score = format!("{:.1}", result.predicted_score);
        let mut out = vec![
            format!(
                "Predicted score: {} ({})",
                score.as_str().color(tier.color()).bold(),
                tier.label().color(tier.color())
            ),
            format!("Confidence:      {:.0}%", result.confidence * 100.0),
            format!(
                "Model:           {} ({} neighbors, {} features)",
                result.model.algorithm_name, result.model.neighbor_count, result.model.feature_count
            ),
        ];

        if let Some(b) = &self.breakdown {
            out.push(String::new());
            out.push("Breakdown".bold().to_string());
            for (name, value) in [
                ("base", b.base),
                ("genres", b.genre),
                ("popularity", b.popularity),
                ("episodes", b.episodes),
                ("year", b.year),
                ("type", b.media_type),
                ("studio", b.studio),
            ] {
                out.push(format!("  {:<12} {:+.2}", name, value));
            }
            out.push(format!("  {:<12} {:.2}", "raw", b.raw_score()));
        }

        out
    }
}
