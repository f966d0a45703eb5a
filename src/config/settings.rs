use clap::ValueEnum;

use crate::domain::MediaType;

pub const API_URL_ENV: &str = "ANIME_INSIGHTS_API_URL";

/// A step bonus applied when a value is strictly above `above`.
/// Tiers are checked in order and the first match wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub above: i64,
    pub bonus: f64,
}

/// Normalizes popularity, optionally caps it, then weights it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopularityScale {
    pub divisor: f64,
    pub cap: Option<f64>,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfidenceRule {
    /// Same confidence for every prediction (fraction in [0, 1])
    Fixed(f64),
    /// `min(ceiling, base + (popularity / 100) * span)` in percent
    PopularityScaled { base: f64, span: f64, ceiling: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PredictorVariant {
    /// Genres, members, episodes, year and type
    Simple,
    /// Genres, 0-100 popularity, year and studio
    StudioAware,
}

#[derive(Debug, Clone)]
pub struct PredictorSettings {
    pub algorithm_name: &'static str,
    pub neighbor_count: u32,
    pub base_score: f64,
    pub popular_genres: &'static [&'static str],
    pub genre_bonus: f64,
    pub popularity: PopularityScale,
    pub episode_tiers: Vec<Tier>,
    pub year_tiers: Vec<Tier>,
    pub media_type_bonuses: Vec<(MediaType, f64)>,
    pub top_studios: &'static [&'static str],
    pub studio_bonus: f64,
    pub jitter_amplitude: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub confidence: ConfidenceRule,
}

const POPULAR_GENRES: &[&str] = &["Action", "Adventure", "Fantasy", "Drama"];
const TOP_STUDIOS: &[&str] = &["Studio Ghibli", "Madhouse", "Bones", "Mappa", "Ufotable"];

impl PredictorSettings {
    pub fn for_variant(variant: PredictorVariant) -> Self {
        match variant {
            PredictorVariant::Simple => Self::simple(),
            PredictorVariant::StudioAware => Self::studio_aware(),
        }
    }

    /// Widget formula: popularity is an absolute member count
    pub fn simple() -> Self {
        Self {
            algorithm_name: "heuristic-simple",
            neighbor_count: 5,
            base_score: 7.0,
            popular_genres: POPULAR_GENRES,
            genre_bonus: 0.3,
            popularity: PopularityScale {
                divisor: 1_000_000.0,
                cap: Some(1.5),
                weight: 0.8,
            },
            episode_tiers: vec![Tier { above: 50, bonus: 0.2 }, Tier { above: 20, bonus: 0.1 }],
            year_tiers: vec![Tier { above: 2015, bonus: 0.3 }, Tier { above: 2010, bonus: 0.1 }],
            media_type_bonuses: vec![(MediaType::Movie, 0.2), (MediaType::Tv, 0.1)],
            top_studios: &[],
            studio_bonus: 0.0,
            jitter_amplitude: 0.4,
            lower_bound: 5.0,
            upper_bound: 10.0,
            confidence: ConfidenceRule::Fixed(0.85),
        }
    }

    /// Mock service formula: popularity is on a 0-100 scale
    pub fn studio_aware() -> Self {
        Self {
            algorithm_name: "heuristic-studio-aware",
            neighbor_count: 5,
            base_score: 7.0,
            popular_genres: POPULAR_GENRES,
            genre_bonus: 0.1,
            popularity: PopularityScale {
                divisor: 100.0,
                cap: None,
                weight: 1.5,
            },
            episode_tiers: Vec::new(),
            year_tiers: vec![
                Tier { above: 2015, bonus: 0.3 },
                Tier { above: 2010, bonus: 0.2 },
                Tier { above: 2000, bonus: 0.1 },
            ],
            media_type_bonuses: Vec::new(),
            top_studios: TOP_STUDIOS,
            studio_bonus: 0.5,
            jitter_amplitude: 0.4,
            lower_bound: 1.0,
            upper_bound: 10.0,
            confidence: ConfidenceRule::PopularityScaled {
                base: 70.0,
                span: 25.0,
                ceiling: 95.0,
            },
        }
    }
}

impl Default for PredictorSettings {
    fn default() -> Self {
        Self::simple()
    }
}

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            user_agent: "AnimeInsights/0.1",
            timeout_secs: 10,
        }
    }
}

impl ApiSettings {
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            settings.base_url = url;
        }
        settings
    }
}

/// Descriptor reported at `/model/stats`
#[derive(Debug, Clone)]
pub struct ModelSettings {
    pub algorithm: &'static str,
    pub training_samples: u32,
    pub cross_validation_folds: u32,
    pub average_mse: f64,
    pub dataset_source: &'static str,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            algorithm: "K-Nearest Neighbors (KNN)",
            training_samples: 1000,
            cross_validation_folds: 10,
            average_mse: 0.85,
            dataset_source: "Kaggle Anime Recommendation Database 2020",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub predictor: PredictorSettings,
    pub api: ApiSettings,
    pub model: ModelSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            predictor: PredictorSettings::default(),
            api: ApiSettings::from_env(),
            model: ModelSettings::default(),
        }
    }

    pub fn with_variant(mut self, variant: PredictorVariant) -> Self {
        self.predictor = PredictorSettings::for_variant(variant);
        self
    }

    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.api.base_url = url;
        }
        self
    }
}
