//! Playback control
//!
//! - `session` - player screen state machine with a renderer outbox
//! - `controls` - auto-hide timer for the controls overlay
//! - `ipc` - mpv JSON IPC requests and events
//! - `mpv` - the mpv process and its socket

pub mod controls;
pub mod ipc;
pub mod mpv;
pub mod session;

pub use controls::{ControlsTimer, HIDE_CONTROLS_DELAY};
pub use ipc::{decode_event, Encoder, RendererEvent, RendererRequest};
pub use mpv::{MpvOptions, MpvRenderer, RendererError};
pub use session::{BackOutcome, PlayerSession, NO_SERVERS_MESSAGE, SEEK_STEP_SECS};
