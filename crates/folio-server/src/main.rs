//! folio server binary.
//!
//! Reads `folio.toml` (or the path specified with `--config`) layered under
//! `FOLIO_*` environment variables, opens the contacts store, and serves the
//! portfolio API over HTTP.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use folio_server::ServerConfig;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Folio portfolio API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "folio.toml")]
  config: PathBuf,

  /// Override the configured listen port.
  #[arg(short, long)]
  port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let mut config = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to read config from {:?}", cli.config))?;
  if let Some(port) = cli.port {
    config.port = port;
  }

  folio_server::run(config).await
}
