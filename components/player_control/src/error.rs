use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("no player instance reachable at {socket}")]
    Unreachable {
        socket: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start player binary {binary}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("player binary not found on PATH: {0}")]
    BinaryNotFound(String),

    #[error("failed to encode IPC command: {0}")]
    Encode(#[from] serde_json::Error),
}
