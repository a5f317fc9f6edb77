//! cinemabox - movies and live TV in the terminal
//!
//! Browse a built-in catalog of movies and Arabic live channels, then play
//! them in mpv with the player controlled from the keyboard.
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! cinemabox
//!
//! # CLI mode (for automation)
//! cinemabox search "العراب"
//! cinemabox play 7 --server 2
//! cinemabox channels --category news --json
//! ```

mod commands;

use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{error, info};

use cinemabox::app::App;
use cinemabox::catalog::Catalog;
use cinemabox::cli::{Cli, Command, ExitCode, Output};
use cinemabox::config::Config;
use cinemabox::logging;
use cinemabox::player::{MpvOptions, MpvRenderer, RendererEvent};
use cinemabox::ui;

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        if let Err(e) = logging::init_stderr(cli.quiet) {
            eprintln!("{}", e);
        }
        let exit_code = run_cli(cli, &config).await;
        std::process::exit(exit_code.into());
    } else {
        // TUI mode: launch interactive interface
        if let Some(path) = config.log_path() {
            if let Err(e) = logging::init_file(&path) {
                eprintln!("Logging disabled: {}", e);
            }
        }
        run_tui(config).await
    }
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli, config: &Config) -> ExitCode {
    let output = Output::new(&cli);
    let catalog = Catalog::load();

    match cli.command {
        Some(Command::Movies(cmd)) => commands::movies_cmd(cmd, &catalog, config, &output),
        Some(Command::Channels(cmd)) => commands::channels_cmd(cmd, &catalog, config, &output),
        Some(Command::Search(cmd)) => commands::search_cmd(cmd, &catalog, config, &output),
        Some(Command::Servers(cmd)) => commands::servers_cmd(cmd, &catalog, config, &output),
        Some(Command::Play(cmd)) => commands::play_cmd(cmd, &catalog, config, &output).await,
        Some(Command::Watch(cmd)) => commands::watch_cmd(cmd, &catalog, config, &output).await,
        None => {
            // This shouldn't happen (handled by is_cli_mode check)
            ExitCode::Success
        }
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui(config: Config) -> Result<()> {
    let mut terminal = init_terminal()?;
    let mut app = App::with_config(Catalog::load(), &config);
    let mut player = PlayerHost::new(MpvOptions::from(&config));
    info!("tui started");

    let result = run_event_loop(&mut terminal, &mut app, &mut player).await;

    player.stop().await;
    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - handles input, updates state, renders UI
async fn run_event_loop(terminal: &mut Tui, app: &mut App, player: &mut PlayerHost) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    while app.running {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        player.pump(app).await;
    }

    Ok(())
}

// =============================================================================
// Renderer host
// =============================================================================

/// Owns the mpv process behind the player screen
struct PlayerHost {
    options: MpvOptions,
    renderer: Option<MpvRenderer>,
    events: Option<UnboundedReceiver<RendererEvent>>,
}

impl PlayerHost {
    fn new(options: MpvOptions) -> Self {
        Self {
            options,
            renderer: None,
            events: None,
        }
    }

    /// Deliver queued requests, feed renderer events back and run the timers
    async fn pump(&mut self, app: &mut App) {
        let requests = app.take_renderer_requests();
        if !requests.is_empty() && app.player.is_some() {
            if let Err(e) = self.ensure_started().await {
                error!(error = %e, "renderer unavailable");
                app.on_renderer_event(RendererEvent::LoadFailed(e.to_string()), Instant::now());
            } else if let Some(renderer) = self.renderer.as_mut() {
                for request in &requests {
                    if let Err(e) = renderer.send(request).await {
                        error!(error = %e, "renderer request failed");
                        app.on_renderer_event(
                            RendererEvent::LoadFailed(e.to_string()),
                            Instant::now(),
                        );
                        break;
                    }
                }
            }
        }

        if let Some(events) = self.events.as_mut() {
            while let Ok(event) = events.try_recv() {
                app.on_renderer_event(event, Instant::now());
            }
        }

        app.tick(Instant::now());

        if app.player.is_none() {
            self.stop().await;
        }
    }

    async fn ensure_started(&mut self) -> Result<(), cinemabox::player::RendererError> {
        if self.renderer.is_some() {
            return Ok(());
        }
        let (tx, rx) = mpsc::unbounded_channel();
        let renderer = MpvRenderer::spawn(&self.options, tx).await?;
        self.renderer = Some(renderer);
        self.events = Some(rx);
        Ok(())
    }

    async fn stop(&mut self) {
        self.events = None;
        if let Some(renderer) = self.renderer.take() {
            renderer.shutdown().await;
        }
    }
}
