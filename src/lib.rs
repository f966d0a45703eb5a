pub mod aggregation;
pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod prediction;
pub mod provider;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::{Cli, PredictArgs, SourceArgs};
use log::info;
use std::sync::Arc;

use crate::cli::Command;
use crate::config::{AppConfig, PredictorVariant};
use crate::prediction::{
    HeuristicEstimator, PredictionRequest, RandomSource, RemoteEstimator, ScoreEstimator,
    SeededRandom, ThreadRandom,
};
use crate::provider::{DataProvider, RemoteProvider, StaticProvider};
use crate::services::prediction::PredictionService;
use crate::services::server::ServerService;
use crate::services::summary::SummaryService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

/// Runs one parsed subcommand to completion
pub fn execute(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port, variant } => handle_serve(*port, *variant),
        Command::Summary { top, source } => handle_summary(source, *top),
        Command::Predict(args) => handle_predict(args),
        Command::Genres { source } => handle_genres(source),
        Command::Model { source } => handle_model(source),
        Command::Completions { shell } => handle_completions(*shell),
    }
}

/// Picks the data backend once, at composition time
pub fn build_provider(source: &SourceArgs, config: &AppConfig) -> Result<Arc<dyn DataProvider>> {
    if source.remote {
        Ok(Arc::new(RemoteProvider::new(&config.api)?))
    } else {
        Ok(Arc::new(StaticProvider::seeded(config)))
    }
}

pub fn handle_serve(port: u16, variant: PredictorVariant) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new().with_variant(variant);
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_summary(source: &SourceArgs, top: usize) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new().with_api_url(source.api_url.clone());
        let provider = build_provider(source, &config)?;
        SummaryService::new(provider, top).run().await
    })
}

pub fn handle_predict(args: &PredictArgs) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new()
            .with_variant(args.variant)
            .with_api_url(args.source.api_url.clone());

        let request = PredictionRequest::new(args.genres.clone(), args.members)
            .with_episodes(args.episodes)
            .with_year(args.year)
            .with_media_type(args.media_type)
            .with_studio(args.studio.clone());

        let service = if args.source.remote {
            let estimator: Arc<dyn ScoreEstimator> = Arc::new(RemoteEstimator::new(&config.api)?);
            PredictionService::new(estimator)
        } else {
            let estimator = build_heuristic(args, &config).await?;
            let breakdown = args.explain.then(|| estimator.breakdown(&request));
            PredictionService::new(Arc::new(estimator)).with_breakdown(breakdown)
        };

        service.run(&request).await?;
        Ok(())
    })
}

async fn build_heuristic(args: &PredictArgs, config: &AppConfig) -> Result<HeuristicEstimator> {
    let random: Arc<dyn RandomSource> = match args.seed {
        Some(seed) => Arc::new(SeededRandom::new(seed)),
        None => Arc::new(ThreadRandom),
    };
    let estimator = HeuristicEstimator::with_random(config.predictor.clone(), random);

    // the studio-aware variant only counts genres the provider knows about
    if args.variant == PredictorVariant::StudioAware {
        let provider = build_provider(&args.source, config)?;
        let genres = provider.available_genres().await?;
        info!("Loaded {} known genres", genres.len());
        return Ok(estimator.with_known_genres(genres));
    }
    Ok(estimator)
}

pub fn handle_genres(source: &SourceArgs) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new().with_api_url(source.api_url.clone());
        let provider = build_provider(source, &config)?;
        for genre in provider.available_genres().await? {
            println!("{}", genre);
        }
        Ok(())
    })
}

pub fn handle_model(source: &SourceArgs) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new().with_api_url(source.api_url.clone());
        let provider = build_provider(source, &config)?;
        let stats = provider.model_stats().await?;
        println!("{}", serde_json::to_string_pretty(&stats)?);
        Ok(())
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
