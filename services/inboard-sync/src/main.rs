//! Inboard sync CLI
//!
//! Pushes local dashboard HTML files into the hosted `dashboards` table,
//! skipping files whose stored content hash is unchanged.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use inboard_sync::{sync_directory, HttpClient, ReqwestHttpClient, SupabaseClient, SyncConfig};
use tracing::Level;

#[derive(Parser)]
#[command(name = "inboard-sync")]
#[command(about = "Push local dashboard HTML files to the hosted dashboards table")]
#[command(version)]
struct Args {
    /// Directory containing dashboard HTML files
    #[arg(short, long, default_value = "dashboards")]
    dir: PathBuf,

    /// Report what would be synced without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    // Credentials are checked before any network traffic happens.
    let config = match SyncConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::default());
    let client = SupabaseClient::new(&config, http);

    tracing::info!("Starting sync from {:?}", args.dir);
    let report = sync_directory(&client, &args.dir, args.dry_run).await?;
    tracing::info!(
        "Sync complete: {} synced, {} skipped, {} failed",
        report.synced,
        report.skipped,
        report.failed
    );

    Ok(())
}
