use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use fruitdb::config::Config;
use fruitdb::server::Server;
use fruitdb::store::Store;
use tracing::info;

/// In-memory fruit catalogue served over HTTP
#[derive(Debug, Parser)]
#[command(name = "fruitdb", version)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Listening address, overrides `server_addr`
    #[arg(long)]
    addr: Option<String>,

    /// Log level, overrides `log.level`
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(addr) = &self.addr {
            config.server_addr = addr.clone();
        }
        if let Some(level) = &self.log_level {
            config.log.level = level.clone();
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.load_config()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.level)),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting FruitDB");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(Store::new());
    let server = Server::bind(&config.server_addr, store)
        .await
        .with_context(|| format!("Failed to bind {}", config.server_addr))?;
    info!("Server listening on: {}", server.local_addr());

    server.run(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
