// components/player_control/src/signal.rs
use serde_json::{json, Value};

/// One-shot control instructions deliverable to a running player instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    TogglePause,
    VolumeUp,
    VolumeDown,
    Stop,
}

impl SignalKind {
    /// The mpv JSON IPC request for this signal.
    ///
    /// Volume deltas are relative: mpv's volume property runs 0-100, so
    /// `add volume 10` is a +10% step, never an absolute set.
    pub fn ipc_command(&self) -> Value {
        match self {
            SignalKind::TogglePause => json!({"command": ["cycle", "pause"]}),
            SignalKind::VolumeUp => json!({"command": ["add", "volume", 10]}),
            SignalKind::VolumeDown => json!({"command": ["add", "volume", -10]}),
            SignalKind::Stop => json!({"command": ["quit"]}),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_pause_cycles_pause_property() {
        assert_eq!(
            SignalKind::TogglePause.ipc_command(),
            json!({"command": ["cycle", "pause"]})
        );
    }

    #[test]
    fn volume_signals_are_relative_deltas() {
        assert_eq!(
            SignalKind::VolumeUp.ipc_command(),
            json!({"command": ["add", "volume", 10]})
        );
        assert_eq!(
            SignalKind::VolumeDown.ipc_command(),
            json!({"command": ["add", "volume", -10]})
        );
    }

    #[test]
    fn stop_terminates_the_instance() {
        assert_eq!(SignalKind::Stop.ipc_command(), json!({"command": ["quit"]}));
    }
}
