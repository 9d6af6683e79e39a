mod error;
mod mpv;
mod signal;

pub use error::PlayerError;
pub use mpv::{MpvPlayer, PlayerControl};
pub use signal::SignalKind;
