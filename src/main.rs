use anyhow::Context;
use clap::Parser;
use portal_schema_sync::{read_config, run};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "portal-sync.json";

/// Copy custom property groups and properties between HubSpot portals
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON file listing portals and pairs
    #[arg(short, long, env = "PORTAL_SYNC_CONFIG", default_value = DEFAULT_CONFIG)]
    config: PathBuf,

    /// Override the API base URL from the config file
    #[arg(long, env = "HUBSPOT_BASE_URL")]
    base_url: Option<String>,

    /// Object type to sync; repeat to sync several.
    /// Overrides the config file. Example: --object-type contact --object-type deal
    #[arg(long = "object-type")]
    object_types: Vec<String>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = read_config(&args.config)
        .await
        .with_context(|| format!("Failed to load {}", args.config.display()))?;

    config.apply_overrides(args.base_url, &args.object_types);

    info!(
        pairs = config.pairs.len(),
        object_types = config.object_types.len(),
        "Starting portal schema sync"
    );

    let summary = run(&config).await;

    println!("Requires manual attention:");
    println!("{}", summary.messages.join("\n"));

    if !summary.aborted.is_empty() {
        println!();
        println!("Aborted:");
        for triple in &summary.aborted {
            println!(
                "{}->{} ({}): {}",
                triple.source, triple.target, triple.object_type, triple.reason
            );
        }
    }

    info!(
        elapsed_ms = (summary.finished_at - summary.started_at).num_milliseconds(),
        "Portal schema sync finished"
    );

    Ok(if summary.aborted.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
