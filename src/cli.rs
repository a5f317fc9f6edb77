//! CLI - Command Line Interface for cinemabox
//!
//! Every screen has a scriptable counterpart. All output is JSON-parseable
//! with `--json`.
//!
//! # Examples
//!
//! ```bash
//! # Browse
//! cinemabox movies --category action
//! cinemabox channels --tab 1 --json
//!
//! # Search and play
//! cinemabox search "العراب"
//! cinemabox servers 7
//! cinemabox play 7 --server 2
//! cinemabox watch 1
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::catalog::SearchType;
use crate::models::StreamingServer;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    /// General error
    Error = 1,
    InvalidArgs = 2,
    /// Movie or channel id not in the catalog
    NotFound = 4,
    /// Record has no streaming servers
    NoStreams = 5,
    /// mpv could not be started or failed to load the stream
    PlayerFailed = 6,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// cinemabox - movies and live TV in the terminal
///
/// Run without arguments to launch interactive TUI.
/// Use subcommands for scriptable automation.
#[derive(Parser, Debug)]
#[command(
    name = "cinemabox",
    version,
    about = "Browse movies and live TV, play them in mpv",
    long_about = "A keyboard-driven browser for a built-in catalog of movies and \
                  Arabic live TV channels. Playback runs in mpv, controlled \
                  from the terminal.\n\n\
                  Run without arguments to launch the interactive TUI.\n\
                  Use subcommands for automation and scripting.",
    after_help = "EXAMPLES:\n\
                  cinemabox                          Launch interactive TUI\n\
                  cinemabox movies --category drama  List drama movies\n\
                  cinemabox search jazeera -t channels\n\
                  cinemabox play 7 --server 2        Play a movie on server 2"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List movies by section or genre
    #[command(visible_alias = "m")]
    Movies(MoviesCmd),

    /// List live TV channels
    #[command(visible_alias = "ch")]
    Channels(ChannelsCmd),

    /// Search movie and channel titles
    #[command(visible_alias = "s")]
    Search(SearchCmd),

    /// Show the streaming servers of a movie or channel
    #[command(visible_alias = "sv")]
    Servers(ServersCmd),

    /// Play a movie in mpv
    #[command(visible_alias = "p")]
    Play(PlayCmd),

    /// Watch a live channel in mpv
    #[command(visible_alias = "w")]
    Watch(WatchCmd),
}

/// Movie rows as shown on the movies screen
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionArg {
    Popular,
    Recent,
    TopRated,
    #[default]
    All,
}

/// List movies
#[derive(Args, Debug)]
pub struct MoviesCmd {
    /// Section to list
    #[arg(long, short = 's', value_enum, default_value_t = SectionArg::All)]
    pub section: SectionArg,

    /// Genre tab by label (action, comedy, sci-fi, ...); filters the All section
    #[arg(long, conflicts_with = "tab")]
    pub category: Option<String>,

    /// Genre tab by index (0 = All)
    #[arg(long)]
    pub tab: Option<usize>,
}

/// List channels
#[derive(Args, Debug)]
pub struct ChannelsCmd {
    /// Category by label (news, sports, kids, ...)
    #[arg(long, conflicts_with = "tab")]
    pub category: Option<String>,

    /// Category tab by index (0 = All)
    #[arg(long)]
    pub tab: Option<usize>,
}

/// Which records a search covers
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchTypeArg {
    #[default]
    All,
    Movies,
    Channels,
}

impl From<SearchTypeArg> for SearchType {
    fn from(arg: SearchTypeArg) -> Self {
        match arg {
            SearchTypeArg::All => SearchType::All,
            SearchTypeArg::Movies => SearchType::Movies,
            SearchTypeArg::Channels => SearchType::Channels,
        }
    }
}

/// Search titles
#[derive(Args, Debug)]
pub struct SearchCmd {
    /// Text to look for in Arabic or English titles
    #[arg(required = true)]
    pub query: String,

    /// Restrict to movies or channels
    #[arg(long = "type", short = 't', value_enum, default_value_t = SearchTypeArg::All)]
    pub search_type: SearchTypeArg,

    /// Maximum results to show
    #[arg(long, short = 'n', default_value = "20")]
    pub limit: usize,
}

/// Show servers
#[derive(Args, Debug)]
pub struct ServersCmd {
    /// Movie id (or channel id with --channel)
    #[arg(required = true)]
    pub id: String,

    /// Treat the id as a channel id
    #[arg(long)]
    pub channel: bool,
}

/// Play a movie
#[derive(Args, Debug)]
pub struct PlayCmd {
    /// Movie id
    #[arg(required = true)]
    pub id: String,

    /// Server number, starting at 1
    #[arg(long, short = 's', default_value = "1")]
    pub server: usize,

    /// Start in fullscreen
    #[arg(long, short = 'f')]
    pub fullscreen: bool,

    /// Do not attach the Arabic subtitle track
    #[arg(long)]
    pub no_subtitles: bool,
}

impl PlayCmd {
    /// Zero-based server index, or None for 0
    pub fn server_index(&self) -> Option<usize> {
        self.server.checked_sub(1)
    }
}

/// Watch a live channel
#[derive(Args, Debug)]
pub struct WatchCmd {
    /// Channel id
    #[arg(required = true)]
    pub id: String,

    /// Start in fullscreen
    #[arg(long, short = 'f')]
    pub fullscreen: bool,
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

/// Servers of one record
#[derive(Debug, Serialize, Deserialize)]
pub struct ServersResponse {
    pub id: String,
    pub title: String,
    pub live: bool,
    pub servers: Vec<StreamingServer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle_url: Option<String>,
}

/// Result of a finished playback session
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaybackResponse {
    pub status: String,
    pub title: String,
    pub server: String,
    pub url: String,
    pub subtitles: bool,
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data as JSON
    pub fn print<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Ok(())
    }

    /// Print a human-readable line (stdout, not suppressed)
    pub fn line(&self, msg: impl std::fmt::Display) {
        println!("{}", msg);
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_is_tui_mode() {
        let cli = Cli::parse_from(["cinemabox"]);
        assert!(!cli.is_cli_mode());
    }

    #[test]
    fn test_movies_defaults() {
        let cli = Cli::parse_from(["cinemabox", "movies"]);
        if let Some(Command::Movies(cmd)) = cli.command {
            assert_eq!(cmd.section, SectionArg::All);
            assert!(cmd.category.is_none());
            assert!(cmd.tab.is_none());
        } else {
            panic!("Expected Movies command");
        }
    }

    #[test]
    fn test_category_and_tab_conflict() {
        let res = Cli::try_parse_from(["cinemabox", "channels", "--category", "news", "--tab", "1"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_search_type_flag() {
        let cli = Cli::parse_from(["cinemabox", "search", "mbc", "-t", "channels"]);
        if let Some(Command::Search(cmd)) = cli.command {
            assert_eq!(cmd.query, "mbc");
            assert_eq!(SearchType::from(cmd.search_type), SearchType::Channels);
            assert_eq!(cmd.limit, 20);
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_play_server_index() {
        let cli = Cli::parse_from(["cinemabox", "--json", "play", "7", "--server", "2"]);
        assert!(cli.json);
        if let Some(Command::Play(cmd)) = cli.command {
            assert_eq!(cmd.server_index(), Some(1));
        } else {
            panic!("Expected Play command");
        }

        let cmd = PlayCmd {
            id: "7".into(),
            server: 0,
            fullscreen: false,
            no_subtitles: false,
        };
        assert_eq!(cmd.server_index(), None);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::InvalidArgs), 2);
        assert_eq!(i32::from(ExitCode::NotFound), 4);
        assert_eq!(i32::from(ExitCode::NoStreams), 5);
        assert_eq!(i32::from(ExitCode::PlayerFailed), 6);
    }

    #[test]
    fn test_json_error_shape() {
        let out = JsonOutput::<()>::error_msg("Movie 99 not found", ExitCode::NotFound);
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["error"], "Movie 99 not found");
        assert_eq!(json["exit_code"], 4);
        assert!(json.get("data").is_none());
    }
}
