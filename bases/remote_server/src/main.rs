// bases/remote_server/src/main.rs
use clap::Parser;
use color_eyre::Result;
use std::sync::Arc;

mod config;
mod dispatch;
mod error;
mod server;

use player_control::{MpvPlayer, PlayerControl};
use stream_catalog::StreamCatalog;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "remote_server=info,tower_http=info".into()),
        )
        .init();

    // Parse CLI arguments
    let args = config::CliArgs::parse();
    let config = config::Config::from_args(args);

    // The catalog is fixed for the lifetime of the process
    let catalog = match &config.catalog_path {
        Some(path) => StreamCatalog::from_file(path)?,
        None => StreamCatalog::builtin(),
    };
    tracing::info!("Loaded {} stations", catalog.len());

    let player: Arc<dyn PlayerControl> = Arc::new(MpvPlayer::new(
        config.player_binary.as_str(),
        &config.socket_path,
    ));
    if let Err(err) = player.check_available().await {
        tracing::warn!("{err}; launching streams will fail until it is installed");
    }

    // Start HTTP server
    server::run(player, catalog, config).await?;

    Ok(())
}
