use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::config::PredictorVariant;
use crate::domain::MediaType;
use crate::prediction::DEFAULT_MEMBERS;

#[derive(Parser, Debug)]
#[command(author, version, about = "anime-insights dashboard backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

/// Where aggregates and predictions come from
#[derive(Args, Debug, Clone, PartialEq)]
pub struct SourceArgs {
    /// Use the remote API instead of the built-in dataset
    #[arg(long)]
    pub remote: bool,
    /// Remote API base URL (defaults to $ANIME_INSIGHTS_API_URL or http://localhost:5000/api)
    #[arg(long)]
    pub api_url: Option<String>,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct PredictArgs {
    /// Comma-separated genres, e.g. Action,Drama
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub genres: Vec<String>,
    /// Member count (simple) or 0-100 popularity (studio-aware)
    #[arg(short, long, default_value_t = DEFAULT_MEMBERS)]
    pub members: u64,
    #[arg(long)]
    pub episodes: Option<u32>,
    #[arg(long)]
    pub year: Option<i32>,
    /// TV, Movie, OVA, ONA or Special
    #[arg(long = "type", value_parser = parse_media_type)]
    pub media_type: Option<MediaType>,
    #[arg(long)]
    pub studio: Option<String>,
    #[arg(long, value_enum, default_value_t = PredictorVariant::Simple)]
    pub variant: PredictorVariant,
    /// Seed the jitter for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
    /// Print the score components
    #[arg(long)]
    pub explain: bool,
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the API server
    Serve {
        /// Port number (optional, defaults to 5000)
        #[arg(short, long, default_value_t = 5000)]
        port: u16,
        #[arg(long, value_enum, default_value_t = PredictorVariant::Simple)]
        variant: PredictorVariant,
    },
    /// Print all dashboard aggregates
    Summary {
        /// How many genres to list in the frequency chart
        #[arg(long, default_value_t = 10)]
        top: usize,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Estimate a rating for a feature selection
    Predict(PredictArgs),
    /// List genres accepted by the predictor
    Genres {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Show the prediction model descriptor
    Model {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

fn parse_media_type(value: &str) -> Result<MediaType, String> {
    value.parse().map_err(|e: crate::errors::Error| e.to_string())
}
