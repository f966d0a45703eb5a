use async_trait::async_trait;
use log::{debug, warn};
use std::collections::HashSet;
use std::sync::Arc;

use super::random::{RandomSource, ThreadRandom};
use super::types::{round1, ModelDescriptor, PredictionRequest, PredictionResult};
use super::ScoreEstimator;
use crate::config::{ConfidenceRule, PopularityScale, PredictorSettings, Tier};
use crate::errors::Result;

/// Additive parts of a score before jitter and clamping
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub base: f64,
    pub genre: f64,
    pub popularity: f64,
    pub episodes: f64,
    pub year: f64,
    pub media_type: f64,
    pub studio: f64,
}

impl ScoreBreakdown {
    pub fn raw_score(&self) -> f64 {
        self.base + self.genre + self.popularity + self.episodes + self.year + self.media_type + self.studio
    }
}

/// Linear heuristic standing in for a trained model.
///
/// Stateless apart from the injected random source, which supplies the
/// jitter term.
pub struct HeuristicEstimator {
    settings: PredictorSettings,
    random: Arc<dyn RandomSource>,
    known_genres: Option<HashSet<String>>,
}

impl HeuristicEstimator {
    pub fn new(settings: PredictorSettings) -> Self {
        Self::with_random(settings, Arc::new(ThreadRandom))
    }

    pub fn with_random(settings: PredictorSettings, random: Arc<dyn RandomSource>) -> Self {
        Self {
            settings,
            random,
            known_genres: None,
        }
    }

    /// Restricts feature counting to these labels; others are ignored
    pub fn with_known_genres(mut self, genres: Vec<String>) -> Self {
        self.known_genres = Some(genres.into_iter().collect());
        self
    }

    pub fn settings(&self) -> &PredictorSettings {
        &self.settings
    }

    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult> {
        request.validate()?;

        let breakdown = self.breakdown(request);
        let jitter = self.jitter();
        let score = (breakdown.raw_score() + jitter)
            .clamp(self.settings.lower_bound, self.settings.upper_bound);

        debug!(
            "Heuristic {}: raw {:.3}, jitter {:+.3}, clamped {:.3}",
            self.settings.algorithm_name,
            breakdown.raw_score(),
            jitter,
            score
        );

        Ok(PredictionResult {
            predicted_score: round1(score),
            unrounded_score: score,
            confidence: self.confidence(request.popularity),
            model: ModelDescriptor {
                algorithm_name: self.settings.algorithm_name.to_string(),
                neighbor_count: self.settings.neighbor_count,
                feature_count: self.feature_count(request),
            },
        })
    }

    /// Deterministic part of the score
    pub fn breakdown(&self, request: &PredictionRequest) -> ScoreBreakdown {
        let s = &self.settings;

        ScoreBreakdown {
            base: s.base_score,
            genre: self.popular_genre_matches(request) as f64 * s.genre_bonus,
            popularity: popularity_bonus(request.popularity, &s.popularity),
            episodes: request
                .episode_count
                .map_or(0.0, |n| tier_bonus(&s.episode_tiers, n as i64)),
            year: request
                .release_year
                .map_or(0.0, |y| tier_bonus(&s.year_tiers, y as i64)),
            media_type: request.media_type.map_or(0.0, |t| {
                s.media_type_bonuses
                    .iter()
                    .find(|(kind, _)| *kind == t)
                    .map_or(0.0, |(_, bonus)| *bonus)
            }),
            studio: match &request.studio {
                Some(studio) if s.top_studios.contains(&studio.as_str()) => s.studio_bonus,
                _ => 0.0,
            },
        }
    }

    fn popular_genre_matches(&self, request: &PredictionRequest) -> usize {
        request
            .genres()
            .iter()
            .filter(|g| self.settings.popular_genres.contains(&g.as_str()))
            .count()
    }

    fn jitter(&self) -> f64 {
        (self.random.next_unit() - 0.5) * self.settings.jitter_amplitude
    }

    fn confidence(&self, popularity: u64) -> f64 {
        match self.settings.confidence {
            ConfidenceRule::Fixed(value) => value,
            ConfidenceRule::PopularityScaled { base, span, ceiling } => {
                let percent = (base + (popularity as f64 / 100.0) * span).min(ceiling);
                percent.round() / 100.0
            }
        }
    }

    fn feature_count(&self, request: &PredictionRequest) -> u32 {
        let s = &self.settings;
        let genres = match &self.known_genres {
            Some(known) => {
                let (kept, unknown): (Vec<&String>, Vec<&String>) =
                    request.genres().iter().partition(|g| known.contains(*g));
                if !unknown.is_empty() {
                    warn!("Ignoring unknown genres: {:?}", unknown);
                }
                kept.len()
            }
            None => request.genres().len(),
        };

        let optional = [
            request.episode_count.is_some() && !s.episode_tiers.is_empty(),
            request.release_year.is_some() && !s.year_tiers.is_empty(),
            request.media_type.is_some() && !s.media_type_bonuses.is_empty(),
            request.studio.is_some() && !s.top_studios.is_empty(),
        ]
        .iter()
        .filter(|used| **used)
        .count();

        (genres + 1 + optional) as u32
    }
}

fn popularity_bonus(popularity: u64, scale: &PopularityScale) -> f64 {
    let normalized = popularity as f64 / scale.divisor;
    scale.cap.map_or(normalized, |cap| normalized.min(cap)) * scale.weight
}

fn tier_bonus(tiers: &[Tier], value: i64) -> f64 {
    tiers
        .iter()
        .find(|tier| value > tier.above)
        .map_or(0.0, |tier| tier.bonus)
}

#[async_trait]
impl ScoreEstimator for HeuristicEstimator {
    async fn estimate(&self, request: &PredictionRequest) -> Result<PredictionResult> {
        self.predict(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MediaType;
    use crate::prediction::random::{FixedRandom, SeededRandom};

    fn fixed(settings: PredictorSettings, unit: f64) -> HeuristicEstimator {
        HeuristicEstimator::with_random(settings, Arc::new(FixedRandom(unit)))
    }

    #[test]
    fn test_action_drama_two_million_members() {
        let estimator = fixed(PredictorSettings::simple(), 0.5);
        let request = PredictionRequest::new(["Action", "Drama"], 2_000_000);

        let result = estimator.predict(&request).unwrap();

        assert_eq!(result.predicted_score, 8.8);
        assert!((result.unrounded_score - 8.8).abs() < 1e-9);
    }

    #[test]
    fn test_simple_secondary_bonuses() {
        let estimator = fixed(PredictorSettings::simple(), 0.5);
        let request = PredictionRequest::new(["Comedy"], 0)
            .with_episodes(Some(64))
            .with_year(Some(2019))
            .with_media_type(Some(MediaType::Movie))
            .with_studio(Some("Bones".to_string()));

        let breakdown = estimator.breakdown(&request);

        assert_eq!(breakdown.episodes, 0.2);
        assert_eq!(breakdown.year, 0.3);
        assert_eq!(breakdown.media_type, 0.2);
        // studio prestige is not part of the simple formula
        assert_eq!(breakdown.studio, 0.0);
        assert_eq!(estimator.predict(&request).unwrap().predicted_score, 7.7);
    }

    #[test]
    fn test_tiers_use_strict_thresholds() {
        let estimator = fixed(PredictorSettings::simple(), 0.5);
        let at = |episodes, year| {
            estimator.breakdown(
                &PredictionRequest::new(["Comedy"], 0)
                    .with_episodes(Some(episodes))
                    .with_year(Some(year)),
            )
        };

        assert_eq!(at(50, 2015).episodes, 0.1);
        assert_eq!(at(50, 2015).year, 0.1);
        assert_eq!(at(20, 2010).episodes, 0.0);
        assert_eq!(at(20, 2010).year, 0.0);
        assert_eq!(at(51, 2016).episodes, 0.2);
    }

    #[test]
    fn test_popularity_bonus_saturates() {
        let estimator = fixed(PredictorSettings::simple(), 0.5);
        let big = estimator.breakdown(&PredictionRequest::new(["Comedy"], 1_500_000));
        let huge = estimator.breakdown(&PredictionRequest::new(["Comedy"], 10_000_000));

        assert_eq!(big.popularity, huge.popularity);
        assert!((huge.popularity - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_genre_matching_is_case_sensitive() {
        let estimator = fixed(PredictorSettings::simple(), 0.5);
        let breakdown = estimator.breakdown(&PredictionRequest::new(["action", "Fantasy"], 0));

        assert_eq!(breakdown.genre, 0.3);
    }

    #[test]
    fn test_studio_aware_formula() {
        let estimator = fixed(PredictorSettings::studio_aware(), 0.5);
        let request = PredictionRequest::new(["Action", "Fantasy", "Romance"], 80)
            .with_year(Some(2012))
            .with_studio(Some("Studio Ghibli".to_string()));

        let result = estimator.predict(&request).unwrap();

        // 7.0 + 0.2 genres + 1.2 popularity + 0.2 year + 0.5 studio
        assert_eq!(result.predicted_score, 9.1);
        assert_eq!(result.confidence, 0.9);
    }

    #[test]
    fn test_studio_aware_popularity_is_uncapped() {
        let estimator = fixed(PredictorSettings::studio_aware(), 0.5);
        let request = PredictionRequest::new(["Comedy"], 200);

        // 7.0 + 3.0 popularity, then clamped
        assert!((estimator.breakdown(&request).popularity - 3.0).abs() < 1e-9);
        assert_eq!(estimator.predict(&request).unwrap().predicted_score, 10.0);
    }

    #[test]
    fn test_studio_aware_confidence_ceiling() {
        let estimator = fixed(PredictorSettings::studio_aware(), 0.5);
        let result = estimator
            .predict(&PredictionRequest::new(["Drama"], 10_000_000))
            .unwrap();

        assert_eq!(result.confidence, 0.95);
    }

    #[test]
    fn test_simple_confidence_is_fixed() {
        let estimator = fixed(PredictorSettings::simple(), 0.5);
        let result = estimator.predict(&PredictionRequest::new(["Drama"], 5)).unwrap();

        assert_eq!(result.confidence, 0.85);
    }

    #[test]
    fn test_score_stays_within_bounds_for_extreme_inputs() {
        for settings in [PredictorSettings::simple(), PredictorSettings::studio_aware()] {
            let (lower, upper) = (settings.lower_bound, settings.upper_bound);
            for unit in [0.0, 0.5, 0.999_999] {
                let estimator = fixed(settings.clone(), unit);
                let extreme = PredictionRequest::new(["Action", "Adventure", "Fantasy", "Drama"], 10_000_000)
                    .with_episodes(Some(5000))
                    .with_year(Some(2024))
                    .with_media_type(Some(MediaType::Movie))
                    .with_studio(Some("Mappa".to_string()));
                let minimal = PredictionRequest::new(["Comedy"], 0)
                    .with_episodes(Some(1))
                    .with_year(Some(1960))
                    .with_media_type(Some(MediaType::Special));

                for request in [extreme, minimal] {
                    let result = estimator.predict(&request).unwrap();
                    assert!(result.predicted_score >= lower && result.predicted_score <= upper);
                    assert!(result.unrounded_score >= lower && result.unrounded_score <= upper);
                }
            }
        }
    }

    #[test]
    fn test_extreme_simple_request_clamps_to_upper_bound() {
        let estimator = fixed(PredictorSettings::simple(), 0.999_999);
        let request = PredictionRequest::new(["Action", "Adventure", "Fantasy", "Drama"], 10_000_000)
            .with_episodes(Some(5000))
            .with_year(Some(2024))
            .with_media_type(Some(MediaType::Movie));

        assert_eq!(estimator.predict(&request).unwrap().predicted_score, 10.0);
    }

    #[test]
    fn test_jitter_is_bounded() {
        let low = fixed(PredictorSettings::simple(), 0.0);
        let high = fixed(PredictorSettings::simple(), 0.999_999);
        let request = PredictionRequest::new(["Comedy"], 0);

        let low_score = low.predict(&request).unwrap().unrounded_score;
        let high_score = high.predict(&request).unwrap().unrounded_score;

        assert!((low_score - 6.8).abs() < 1e-9);
        assert!(high_score < 7.2 && high_score > 7.19);
    }

    #[test]
    fn test_seeded_estimators_agree() {
        let request = PredictionRequest::new(["Action"], 300_000);
        let a = HeuristicEstimator::with_random(PredictorSettings::simple(), Arc::new(SeededRandom::new(7)));
        let b = HeuristicEstimator::with_random(PredictorSettings::simple(), Arc::new(SeededRandom::new(7)));

        for _ in 0..3 {
            assert_eq!(a.predict(&request).unwrap(), b.predict(&request).unwrap());
        }
    }

    #[test]
    fn test_empty_genres_rejected() {
        let estimator = fixed(PredictorSettings::simple(), 0.5);
        let err = estimator
            .predict(&PredictionRequest::new(Vec::<String>::new(), 1000))
            .unwrap_err();

        assert!(err.is_invalid_request());
    }

    #[test]
    fn test_feature_count_ignores_unknown_genres() {
        let estimator = fixed(PredictorSettings::studio_aware(), 0.5)
            .with_known_genres(vec!["Action".to_string(), "Drama".to_string()]);
        let request = PredictionRequest::new(["Action", "Isekai"], 50)
            .with_year(Some(2020))
            .with_episodes(Some(12));

        let result = estimator.predict(&request).unwrap();

        // Action + popularity + year; episodes are not a studio-aware feature
        assert_eq!(result.model.feature_count, 3);
        assert_eq!(result.model.neighbor_count, 5);
        assert_eq!(result.model.algorithm_name, "heuristic-studio-aware");
    }

    #[tokio::test]
    async fn test_estimate_through_trait_object() {
        let estimator: Arc<dyn ScoreEstimator> = Arc::new(fixed(PredictorSettings::simple(), 0.5));
        let result = estimator
            .estimate(&PredictionRequest::new(["Action", "Drama"], 2_000_000))
            .await
            .unwrap();

        assert_eq!(result.predicted_score, 8.8);
    }
}
