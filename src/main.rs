//! # Element Feed Entry Point
//!
//! Command-line front end for the feed. An external scheduler runs `day`
//! once per day and `hour` once per hour; `convert` is rerun only when the
//! raw PubChem export changes.
//!
//! ```text
//! element-feed convert
//! element-feed day [--at 2026-01-17T14:00:00Z] [--stdout] [--from-source]
//! element-feed hour [--at ...] [--stdout] [--from-source]
//! element-feed validate
//! ```
//!
//! The system clock is read here and nowhere else; every library call gets
//! the timestamp as an argument.

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::{DateTime, FixedOffset, Local, Utc};
use clap::{Args, Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use element_feed::config::{Config, CONFIG_FILE};
use element_feed::snapshot::{self, Cycle};
use element_feed::{normalizer, renderer, selector, storage, validate, ElementRecord};

#[derive(Parser, Debug)]
#[command(name = "element-feed", version, about = "Element of the day/hour feed generator")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, value_name = "FILE", default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert the raw PubChem export into the flat dataset.
    Convert,
    /// Publish the element of the day.
    Day(PublishArgs),
    /// Publish the element of the hour.
    Hour(PublishArgs),
    /// Check the flat dataset against its invariants.
    Validate,
}

#[derive(Args, Debug)]
struct PublishArgs {
    /// Instant to publish for (RFC 3339); defaults to now.
    #[arg(long, value_parser = parse_instant)]
    at: Option<DateTime<FixedOffset>>,

    /// Print a preview and the JSON instead of writing files.
    #[arg(long)]
    stdout: bool,

    /// Select from the raw source table instead of the flat dataset.
    #[arg(long)]
    from_source: bool,
}

fn parse_instant(value: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(value).map_err(|e| format!("invalid RFC 3339 timestamp: {e}"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load_from_path(&cli.config);

    match cli.command {
        Command::Convert => convert(&config),
        Command::Day(args) => publish(&config, Cycle::Day, &args),
        Command::Hour(args) => publish(&config, Cycle::Hour, &args),
        Command::Validate => validate_dataset(&config),
    }
}

fn convert(config: &Config) -> anyhow::Result<()> {
    let source = &config.paths.source;
    let text = std::fs::read_to_string(source)
        .with_context(|| format!("reading source {}", source.display()))?;
    let dataset = normalizer::convert_json(&text, &config.metadata_labels(), Utc::now())
        .with_context(|| format!("converting {}", source.display()))?;

    storage::write_dataset(&dataset, &config.paths.dataset)
        .with_context(|| format!("writing {}", config.paths.dataset.display()))?;
    info!(
        count = dataset.elements.len(),
        path = %config.paths.dataset.display(),
        "dataset written"
    );
    Ok(())
}

fn load_elements(config: &Config, from_source: bool) -> anyhow::Result<Vec<ElementRecord>> {
    if from_source {
        let source = storage::load_source(&config.paths.source)
            .with_context(|| format!("loading source {}", config.paths.source.display()))?;
        Ok(normalizer::normalize_elements(&source))
    } else {
        let dataset = storage::load_dataset(&config.paths.dataset)
            .with_context(|| format!("loading dataset {}", config.paths.dataset.display()))?;
        Ok(dataset.elements)
    }
}

fn publish(config: &Config, cycle: Cycle, args: &PublishArgs) -> anyhow::Result<()> {
    let elements = load_elements(config, args.from_source)?;

    // Day selection follows the local calendar, hour selection is UTC-only.
    let now = match args.at {
        Some(at) => at.with_timezone(&Local),
        None => Local::now(),
    };
    let output = snapshot::generate(cycle, &elements, &now)?;

    if args.stdout {
        renderer::draw_ascii(&output, cycle);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let written = storage::write_snapshot(&output, cycle, &config.paths.output_dir)
        .with_context(|| format!("writing {} snapshot", cycle.label()))?;
    let element = &output.element;
    info!(
        cycle = cycle.label(),
        element = %format!("{} ({})", element.name, element.symbol),
        updated_at = %element.updated_at,
        files = written.len(),
        "snapshot published"
    );
    if cycle == Cycle::Hour {
        info!(hour_id = selector::hour_identifier(&now), "hour identifier");
    }
    Ok(())
}

fn validate_dataset(config: &Config) -> anyhow::Result<()> {
    let dataset = storage::load_dataset(&config.paths.dataset)
        .with_context(|| format!("loading dataset {}", config.paths.dataset.display()))?;
    let issues = validate::validate_dataset(&dataset);

    if issues.is_empty() {
        info!(count = dataset.elements.len(), "dataset is valid");
        return Ok(());
    }
    for issue in &issues {
        error!("{issue}");
    }
    bail!(element_feed::FeedError::Validation(issues.len()))
}
