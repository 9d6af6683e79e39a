// components/player_control/src/mpv.rs
use crate::error::PlayerError;
use crate::signal::SignalKind;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::net::UnixStream;
use tokio::process::Command;
use tracing::{debug, warn};
use url::Url;

/// The player-facing seam: deliver a control signal to whatever instance is
/// currently addressable, or start a new instance for a stream source.
#[async_trait]
pub trait PlayerControl: Send + Sync {
    /// Check that the player binary can be invoked at all.
    async fn check_available(&self) -> Result<(), PlayerError>;

    /// Best-effort, fire-and-forget delivery of one control signal.
    async fn signal(&self, kind: SignalKind) -> Result<(), PlayerError>;

    /// Start a new player instance playing `source`, detached from the caller.
    async fn spawn(&self, source: &Url) -> Result<(), PlayerError>;
}

/// Controls mpv through its JSON IPC socket and spawns new instances with
/// `--input-ipc-server` pointing at the same socket.
pub struct MpvPlayer {
    binary: String,
    socket_path: PathBuf,
    /// PID of the most recently spawned instance. Tracking is observational:
    /// spawning while an earlier instance runs is permitted, only logged.
    last_spawned: Mutex<Option<u32>>,
}

impl MpvPlayer {
    pub fn new(binary: impl Into<String>, socket_path: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            socket_path: socket_path.into(),
            last_spawned: Mutex::new(None),
        }
    }
}

#[async_trait]
impl PlayerControl for MpvPlayer {
    async fn check_available(&self) -> Result<(), PlayerError> {
        which::which(&self.binary)
            .map(|_| ())
            .map_err(|_| PlayerError::BinaryNotFound(self.binary.clone()))
    }

    async fn signal(&self, kind: SignalKind) -> Result<(), PlayerError> {
        let mut stream =
            UnixStream::connect(&self.socket_path)
                .await
                .map_err(|source| PlayerError::Unreachable {
                    socket: self.socket_path.clone(),
                    source,
                })?;

        let mut line = serde_json::to_vec(&kind.ipc_command())?;
        line.push(b'\n');

        // One request per connection, no response read: the player applies
        // the command whether or not anyone is listening for the reply.
        stream
            .write_all(&line)
            .await
            .map_err(|source| PlayerError::Unreachable {
                socket: self.socket_path.clone(),
                source,
            })?;

        debug!("sent {:?} to {}", kind, self.socket_path.display());
        Ok(())
    }

    async fn spawn(&self, source: &Url) -> Result<(), PlayerError> {
        let child = Command::new(&self.binary)
            .arg(format!("--input-ipc-server={}", self.socket_path.display()))
            .arg(source.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| PlayerError::Spawn {
                binary: self.binary.clone(),
                source: err,
            })?;

        let pid = child.id();
        let previous = std::mem::replace(&mut *self.last_spawned.lock(), pid);
        if let Some(prev) = previous {
            warn!(
                "spawned player instance (pid {:?}) while pid {} may still be running",
                pid, prev
            );
        } else {
            debug!("spawned player instance (pid {:?}) for {}", pid, source);
        }

        // Dropping the child handle leaves the process running; the player
        // must outlive the request that launched it.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn test_url() -> Url {
        Url::parse("https://somafm.com/groovesalad.pls").unwrap()
    }

    #[tokio::test]
    async fn signal_without_running_player_is_unreachable() {
        let dir = tempfile::tempdir().unwrap();
        let player = MpvPlayer::new("mpv", dir.path().join("no-such-socket"));

        let err = player.signal(SignalKind::Stop).await.unwrap_err();
        assert_matches!(err, PlayerError::Unreachable { .. });
    }

    #[tokio::test]
    async fn spawn_with_missing_binary_fails() {
        let player = MpvPlayer::new("definitely-not-a-player-binary", "/tmp/airwave-test-sock");

        let err = player.spawn(&test_url()).await.unwrap_err();
        assert_matches!(err, PlayerError::Spawn { binary, .. } => {
            assert_eq!(binary, "definitely-not-a-player-binary");
        });
    }

    #[tokio::test]
    async fn check_available_reports_missing_binary() {
        let player = MpvPlayer::new("definitely-not-a-player-binary", "/tmp/airwave-test-sock");

        assert_matches!(
            player.check_available().await,
            Err(PlayerError::BinaryNotFound(_))
        );
    }

    #[tokio::test]
    async fn spawn_detaches_and_tracks_pid() {
        // `true` exits immediately and ignores its arguments, standing in
        // for the player binary.
        let player = MpvPlayer::new("true", "/tmp/airwave-test-sock");

        player.spawn(&test_url()).await.unwrap();
        assert!(player.last_spawned.lock().is_some());
    }

    #[tokio::test]
    async fn second_spawn_is_permitted() {
        let player = MpvPlayer::new("true", "/tmp/airwave-test-sock");

        player.spawn(&test_url()).await.unwrap();
        player.spawn(&test_url()).await.unwrap();
    }

    #[tokio::test]
    async fn signal_reaches_a_listening_socket() {
        use tokio::io::AsyncBufReadExt;
        use tokio::net::UnixListener;

        let dir = tempfile::tempdir().unwrap();
        let socket = dir.path().join("mpv-sock");
        let listener = UnixListener::bind(&socket).unwrap();

        let player = MpvPlayer::new("mpv", &socket);
        player.signal(SignalKind::TogglePause).await.unwrap();

        let (stream, _) = listener.accept().await.unwrap();
        let mut line = String::new();
        tokio::io::BufReader::new(stream)
            .read_line(&mut line)
            .await
            .unwrap();

        let request: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(request, SignalKind::TogglePause.ipc_command());
    }
}
