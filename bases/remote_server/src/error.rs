use player_control::PlayerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("unknown action: {0}")]
    InvalidAction(String),

    #[error("play-stream requires a stream source")]
    MissingStream,

    #[error("invalid stream source {given}: {source}")]
    InvalidStream {
        given: String,
        #[source]
        source: url::ParseError,
    },

    #[error("player operation failed: {0}")]
    Player(#[from] PlayerError),
}
