// bases/remote_server/src/config.rs
use clap::Parser;
use std::path::PathBuf;

/// Remote server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on
    pub port: u16,

    /// Optional JSON station catalog; `None` means the built-in list
    pub catalog_path: Option<PathBuf>,

    /// Path of the player's IPC control socket
    pub socket_path: PathBuf,

    /// Player binary spawned for new streams
    pub player_binary: String,
}

/// Airwave - local-network remote control for mpv
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Port to listen on
    #[arg(short, long, default_value_t = 5000)]
    pub port: u16,

    /// Path to a JSON station catalog (array of {"name", "url"} entries)
    ///
    /// Without this flag the built-in SomaFM list is served.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Path of the mpv IPC control socket
    #[arg(long, default_value = "/tmp/mpvsocket")]
    pub socket: PathBuf,

    /// Player binary to spawn for new streams
    #[arg(long, default_value = "mpv")]
    pub player: String,
}

impl Config {
    /// Create configuration from CLI arguments
    pub fn from_args(args: CliArgs) -> Self {
        Self {
            port: args.port,
            catalog_path: args.catalog,
            socket_path: args.socket,
            player_binary: args.player,
        }
    }
}
