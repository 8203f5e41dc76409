use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qa_sweep_core::{
    load_config, run_sweep, validate_config, SanitizedConfig, SubmitOutcome, ZendeskClient,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Config may have failed before the subscriber existed, so
            // report fatal errors on stderr directly.
            eprintln!("Fatal error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    // Determine config path
    let config_path = std::env::var("QA_SWEEP_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    // Initialize logging; the verbose flag only sets the default filter,
    // RUST_LOG still wins.
    let default_filter = if config.review.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Loaded configuration from {:?}", config_path);
    info!(config = ?SanitizedConfig::from(&config), "Effective configuration");

    let client = ZendeskClient::new(&config.zendesk).context("Failed to create API client")?;

    let report = run_sweep(&client, config).await.context("QA sweep failed")?;

    // Per-author breakdown
    for (author, articles) in &report.per_author {
        for article in articles {
            match &article.outcome {
                SubmitOutcome::Created(id) => {
                    info!(author = author.display_name(), ticket = id, article = %article.title, "Filed")
                }
                SubmitOutcome::DryRun => {
                    info!(author = author.display_name(), article = %article.title, "Would file (read-only)")
                }
                SubmitOutcome::Failed(e) => {
                    warn!(author = author.display_name(), article = %article.title, error = %e, "Not filed")
                }
            }
        }
    }

    info!(
        eligible = report.eligible_count,
        selected = report.submitted_count(),
        created = report.created_count(),
        failed = report.failed_count(),
        "Sweep complete"
    );

    Ok(())
}
