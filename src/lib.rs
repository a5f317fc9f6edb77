//! cinemabox - movies and live TV in the terminal
//!
//! A keyboard-driven browser for a built-in catalog of movies and live
//! channels, with playback in mpv controlled from the terminal.
//!
//! # Modules
//!
//! - `models` - Movie, channel and streaming server records
//! - `catalog` - Built-in listings, category tabs and search
//! - `player` - Player session state machine and the mpv renderer
//! - `ui` - TUI components
//! - `app` - Application state and navigation
//! - `cli` - Scriptable subcommands and JSON output
//! - `config` - User settings
//! - `logging` - tracing setup

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod player;
pub mod ui;

// Re-export commonly used types
pub use models::{Movie, Playable, StreamingServer, TvChannel};

pub use app::{App, AppState, Navigation};
pub use catalog::{Catalog, ChannelCategory, MovieCategory, SearchType};
pub use config::Config;
pub use player::{MpvRenderer, PlayerSession, RendererEvent, RendererRequest};
