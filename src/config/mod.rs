pub mod settings;

pub use settings::{
    ApiSettings, AppConfig, ConfidenceRule, ModelSettings, PopularityScale, PredictorSettings,
    PredictorVariant, Tier,
};
