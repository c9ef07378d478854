use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marquee_server::{
    AppState, create_app,
    infra::{
        config::{Config, ConfigLoad, ConfigLoader, ConfigOverrides},
        startup::{load_catalog, log_config_warnings},
    },
};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "marquee-server")]
#[command(about = "HTTP API over an in-memory movie and TV catalog")]
struct Cli {
    /// Path to a marquee.toml configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to a JSON catalog file (overrides config)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Server port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_runtime_config(&cli)?;
    let catalog = Arc::new(load_catalog(&config.catalog)?);
    let state = AppState::new(catalog, Arc::clone(&config));
    let router = create_app(state);

    let listener = tokio::net::TcpListener::bind(config.server.bind_target())
        .await
        .with_context(|| {
            format!(
                "failed to bind {}:{}",
                config.server.host, config.server.port
            )
        })?;
    info!(
        "Starting Marquee (HTTP) on {}",
        listener.local_addr().context("listener has no local address")?
    );

    axum::serve(listener, router).await?;

    Ok(())
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            server_host: self.host.clone(),
            server_port: self.port,
            catalog_path: self.catalog.clone(),
        }
    }
}

fn load_runtime_config(cli: &Cli) -> anyhow::Result<Arc<Config>> {
    let mut loader = ConfigLoader::new().with_overrides(cli.overrides());
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }

    let ConfigLoad { config, warnings } =
        loader.load().context("failed to load configuration")?;

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "configuration file loaded");
    }
    log_config_warnings(&warnings);

    Ok(Arc::new(config))
}
