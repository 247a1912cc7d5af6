//! Krishi Mitra command-line entry point
//!
//! Answers one farmer query and prints the advisory as JSON on stdout.
//! Logs go to stderr so the output stays machine-readable.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use krishi_mitra_agent::AdvisoryPipeline;
use krishi_mitra_config::constants::env::ENVIRONMENT_VAR;
use krishi_mitra_config::{load_settings, Settings};
use krishi_mitra_core::RealTimeData;

/// Agricultural advisory for a single farmer query
#[derive(Parser)]
#[command(name = "krishi-mitra")]
#[command(about = "Agricultural advisory for Hindi/English farmer queries")]
struct Args {
    /// Farmer query (e.g., "gehun mein kab paani de")
    query: Vec<String>,

    /// JSON file with real-time data: {"weather": {"current": {...}}, "market": {...}}
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Knowledge file (YAML/JSON), overrides the configured path
    #[arg(short, long)]
    knowledge: Option<PathBuf>,

    /// Print only the response instead of the full advisory
    #[arg(long)]
    response_only: bool,

    /// Compact single-line JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Priority: env vars > config/{env}.yaml > config/default.yaml > defaults
    let env = std::env::var(ENVIRONMENT_VAR).ok();
    let mut config = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };
    if let Some(path) = &args.knowledge {
        config.knowledge.path = Some(path.display().to_string());
    }

    init_tracing(&config);

    tracing::debug!(
        environment = ?config.environment,
        config_path = env.as_deref().unwrap_or("default"),
        knowledge = config.knowledge.path.as_deref().unwrap_or("builtin"),
        "Configuration loaded"
    );

    let pipeline =
        AdvisoryPipeline::from_settings(&config).context("Failed to build advisory pipeline")?;
    tracing::debug!(
        crops = pipeline.knowledge().crops().count(),
        "Advisory pipeline ready"
    );

    let data = match &args.data {
        Some(path) => load_realtime_data(path)?,
        None => RealTimeData::empty(),
    };

    let query = args.query.join(" ");
    let advisory = pipeline.process(&query, &data);

    let output = if args.response_only {
        serde_json::to_value(&advisory.response)?
    } else {
        serde_json::to_value(&advisory)?
    };
    let rendered = if args.compact {
        serde_json::to_string(&output)?
    } else {
        serde_json::to_string_pretty(&output)?
    };
    println!("{}", rendered);

    Ok(())
}

/// Read a real-time snapshot; unknown or mistyped fields fall back to defaults
fn load_realtime_data(path: &Path) -> Result<RealTimeData> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read real-time data {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;
    Ok(RealTimeData::from_json(&value))
}

fn init_tracing(config: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.observability.log_level;
        format!("krishi_mitra={}", level).into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    // production always logs JSON
    let fmt_layer = if config.observability.log_json || config.environment.is_production() {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };
    subscriber.with(fmt_layer).init();
}
