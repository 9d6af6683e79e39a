// bases/remote_server/src/dispatch.rs
use crate::error::DispatchError;
use player_control::{PlayerControl, PlayerError, SignalKind};
use std::sync::Arc;
use tracing::{info, warn};
use url::Url;

/// A validated user request against the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    TogglePause,
    VolumeUp,
    VolumeDown,
    Stop,
    PlayStream(Url),
}

impl Action {
    /// Parse an action identifier and its optional stream payload.
    ///
    /// Only `play-stream` reads the payload; anything outside the fixed set
    /// is rejected before touching the player.
    pub fn parse(name: &str, stream: Option<&str>) -> Result<Self, DispatchError> {
        match name {
            "toggle-pause" => Ok(Action::TogglePause),
            "volume-up" => Ok(Action::VolumeUp),
            "volume-down" => Ok(Action::VolumeDown),
            "stop" => Ok(Action::Stop),
            "play-stream" => {
                let raw = stream.ok_or(DispatchError::MissingStream)?;
                let url = Url::parse(raw).map_err(|source| DispatchError::InvalidStream {
                    given: raw.to_string(),
                    source,
                })?;
                Ok(Action::PlayStream(url))
            }
            other => Err(DispatchError::InvalidAction(other.to_string())),
        }
    }
}

/// Maps each action to exactly one player operation. Fire-and-forget: no
/// confirmation is read back from the player.
pub struct Dispatcher {
    player: Arc<dyn PlayerControl>,
}

impl Dispatcher {
    pub fn new(player: Arc<dyn PlayerControl>) -> Self {
        Self { player }
    }

    pub async fn dispatch(&self, action: Action) -> Result<(), DispatchError> {
        match action {
            Action::TogglePause => self.send_signal(SignalKind::TogglePause).await,
            Action::VolumeUp => self.send_signal(SignalKind::VolumeUp).await,
            Action::VolumeDown => self.send_signal(SignalKind::VolumeDown).await,
            Action::Stop => self.send_signal(SignalKind::Stop).await,
            Action::PlayStream(url) => {
                info!("launching player for {}", url);
                self.player.spawn(&url).await.map_err(DispatchError::from)
            }
        }
    }

    async fn send_signal(&self, kind: SignalKind) -> Result<(), DispatchError> {
        match self.player.signal(kind).await {
            Ok(()) => Ok(()),
            // Best-effort: a signal with no player to receive it is dropped,
            // not surfaced to the user.
            Err(PlayerError::Unreachable { socket, .. }) => {
                warn!(
                    "no player instance at {}, {:?} dropped",
                    socket.display(),
                    kind
                );
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}
