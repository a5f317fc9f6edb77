//! Configuration management for cinemabox
//!
//! Config is stored at ~/.config/cinemabox/config.toml. Every key is optional
//! in the file; missing keys fall back to the defaults below.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

/// Mobile browser user agent sent with every stream request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 10; SM-G973F) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/90.0.4430.66 Mobile Safari/537.36";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// mpv command or absolute path
    pub player: String,
    /// User agent passed to the player
    pub user_agent: String,
    /// Seconds of inactivity before the player controls hide
    pub hide_controls_secs: u64,
    /// Show English titles instead of Arabic ones
    pub prefer_english_titles: bool,
    /// Log file used while the TUI owns the terminal
    pub log_file: Option<PathBuf>,
    /// Extra arguments appended to the player command line
    pub extra_player_args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player: "mpv".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            hide_controls_secs: 5,
            prefer_english_titles: false,
            log_file: None,
            extra_player_args: Vec::new(),
        }
    }
}

impl Config {
    /// Get config file path (~/.config/cinemabox/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cinemabox").join("config.toml"))
    }

    /// Default log file (~/.local/share/cinemabox/cinemabox.log)
    pub fn default_log_file() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("cinemabox").join("cinemabox.log"))
    }

    /// Load config from the default path, or return defaults if not found
    pub fn load() -> Self {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load config from `path`; unreadable or malformed files give defaults
    pub fn load_from(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => return Self::default(),
        };
        match toml::from_str(&text) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring malformed config");
                Self::default()
            }
        }
    }

    pub fn hide_controls_delay(&self) -> Duration {
        Duration::from_secs(self.hide_controls_secs.max(1))
    }

    /// Configured log file or the default location
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(Self::default_log_file)
    }
}
