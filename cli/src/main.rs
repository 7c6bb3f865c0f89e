//! CLI entrypoint for complog
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use complog_domain::{LogLevel, LogPayload};
use complog_infrastructure::{ConfigLoader, build_logger};
use complog_presentation::{Cli, ExampleComponent};
use std::path::Path;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered diagnostics are written on exit
    let _guard = init_tracing(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting complog");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    config.validate()?;

    // === Dependency Injection ===
    let logger = build_logger(&config)?;

    if let Some(name) = &cli.component {
        logger.set_component_name(name.as_str());
    }

    if cli.demo {
        let mut component = ExampleComponent::new(logger.clone(), cli.record_id.clone());
        component.run_lifecycle().await;
    } else {
        let Some(message) = cli.message.as_deref() else {
            bail!("Message is required. Use --demo to run the demo component.");
        };

        let data = cli
            .data
            .as_deref()
            .map(serde_json::from_str::<serde_json::Value>)
            .transpose()
            .context("--data is not valid JSON")?
            .map(LogPayload::from);

        if cli.sync {
            let level: LogLevel = cli.level.parse()?;
            logger.log_sync(level, message, cli.record_id.as_deref(), data);
        } else {
            logger
                .log_str(&cli.level, message, cli.record_id.as_deref(), data)
                .await?;
        }
    }

    // Detached deliveries must finish before the runtime shuts down
    logger.flush().await;

    info!(
        transaction_id = ?logger.session().transaction_id().map(|id| id.as_str()),
        "Done"
    );

    Ok(())
}

/// Initialize logging based on verbosity level.
///
/// With `log_file`, diagnostics go to that file through a non-blocking
/// writer; the returned guard flushes it on drop.
fn init_tracing(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("--log-file must name a file: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        dir, file_name,
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}
