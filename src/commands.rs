//! CLI Command Handlers
//!
//! Implements all CLI commands against the built-in catalog. Each handler
//! takes CLI args and Output, returns ExitCode.

use std::str::FromStr;
use std::time::Instant;

use tokio::sync::mpsc;
use tracing::{debug, info};

use cinemabox::catalog::{
    filter_channels, filter_channels_by_tab, filter_movies, filter_movies_by_tab, Catalog,
    ChannelCategory, MovieCategory,
};
use cinemabox::cli::{
    ChannelsCmd, ExitCode, MoviesCmd, Output, PlayCmd, PlaybackResponse, SearchCmd, SectionArg,
    ServersCmd, ServersResponse, WatchCmd,
};
use cinemabox::config::Config;
use cinemabox::models::{Movie, Playable, TvChannel};
use cinemabox::player::{MpvOptions, MpvRenderer, PlayerSession, RendererEvent};

// =============================================================================
// Movies Command
// =============================================================================

pub fn movies_cmd(cmd: MoviesCmd, catalog: &Catalog, config: &Config, output: &Output) -> ExitCode {
    let movies: Vec<Movie> = match cmd.section {
        SectionArg::Popular => catalog.movies.popular.clone(),
        SectionArg::Recent => catalog.movies.recent.clone(),
        SectionArg::TopRated => catalog.movies.top_rated.clone(),
        SectionArg::All => {
            if let Some(label) = &cmd.category {
                match MovieCategory::from_str(label) {
                    Ok(category) => filter_movies(&catalog.movies.all, category),
                    Err(e) => return output.error(e.to_string(), ExitCode::InvalidArgs),
                }
            } else {
                filter_movies_by_tab(&catalog.movies.all, cmd.tab.unwrap_or(0))
            }
        }
    };

    if output.json {
        return print_or_fail(output, &movies);
    }
    for movie in &movies {
        output.line(format!(
            "{:>8}  {}  {}  {}  ★ {}",
            movie.id,
            movie.display_title(config.prefer_english_titles),
            movie.year,
            movie.genre,
            movie.formatted_rating()
        ));
    }
    output.info(format!("{} movies", movies.len()));
    ExitCode::Success
}

// =============================================================================
// Channels Command
// =============================================================================

pub fn channels_cmd(
    cmd: ChannelsCmd,
    catalog: &Catalog,
    config: &Config,
    output: &Output,
) -> ExitCode {
    let channels: Vec<TvChannel> = if let Some(label) = &cmd.category {
        match ChannelCategory::from_str(label) {
            Ok(category) => filter_channels(&catalog.channels, category),
            Err(e) => return output.error(e.to_string(), ExitCode::InvalidArgs),
        }
    } else {
        filter_channels_by_tab(&catalog.channels, cmd.tab.unwrap_or(0))
    };

    if output.json {
        return print_or_fail(output, &channels);
    }
    for channel in &channels {
        output.line(format!(
            "{:>4}  ● {}  [{}]",
            channel.id,
            channel.display_title(config.prefer_english_titles),
            channel.category
        ));
    }
    output.info(format!("{} channels", channels.len()));
    ExitCode::Success
}

// =============================================================================
// Search Command
// =============================================================================

pub fn search_cmd(cmd: SearchCmd, catalog: &Catalog, config: &Config, output: &Output) -> ExitCode {
    if cmd.query.trim().is_empty() {
        return output.error("Search query is empty", ExitCode::InvalidArgs);
    }

    output.info(format!("Searching for: {}", cmd.query));
    let mut results = catalog.search(&cmd.query, cmd.search_type.into());
    results.truncate(cmd.limit);

    if output.json {
        return print_or_fail(output, &results);
    }
    if results.is_empty() {
        output.info("No results");
    }
    for result in &results {
        let kind = if result.is_live() { "live " } else { "movie" };
        output.line(format!(
            "{}  {:>8}  {}",
            kind,
            result.id(),
            result.display_title(config.prefer_english_titles)
        ));
    }
    ExitCode::Success
}

// =============================================================================
// Servers Command
// =============================================================================

pub fn servers_cmd(cmd: ServersCmd, catalog: &Catalog, config: &Config, output: &Output) -> ExitCode {
    let playable = match lookup(catalog, &cmd.id, cmd.channel) {
        Ok(p) => p,
        Err(code) => return not_found(output, &cmd.id, cmd.channel, code),
    };

    let response = ServersResponse {
        id: playable.id().to_string(),
        title: playable.display_title(config.prefer_english_titles).to_string(),
        live: playable.is_live(),
        servers: playable.streaming_servers(),
        subtitle_url: playable.subtitle_url().map(String::from),
    };

    if response.servers.is_empty() {
        return output.error(
            format!("No servers available for '{}'", response.title),
            ExitCode::NoStreams,
        );
    }

    if output.json {
        return print_or_fail(output, &response);
    }
    output.line(&response.title);
    for (i, server) in response.servers.iter().enumerate() {
        output.line(format!("  [{}] {}  {}", i + 1, server, server.url));
    }
    if let Some(url) = &response.subtitle_url {
        output.line(format!("  subtitles: {}", url));
    }
    ExitCode::Success
}

// =============================================================================
// Play / Watch Commands
// =============================================================================

pub async fn play_cmd(cmd: PlayCmd, catalog: &Catalog, config: &Config, output: &Output) -> ExitCode {
    let Some(server) = cmd.server_index() else {
        return output.error("Server numbers start at 1", ExitCode::InvalidArgs);
    };
    let playable = match lookup(catalog, &cmd.id, false) {
        Ok(p) => p,
        Err(code) => return not_found(output, &cmd.id, false, code),
    };
    let playback = Playback {
        server,
        fullscreen: cmd.fullscreen,
        subtitles: !cmd.no_subtitles,
    };
    play_headless(playable, playback, config, output).await
}

pub async fn watch_cmd(cmd: WatchCmd, catalog: &Catalog, config: &Config, output: &Output) -> ExitCode {
    let playable = match lookup(catalog, &cmd.id, true) {
        Ok(p) => p,
        Err(code) => return not_found(output, &cmd.id, true, code),
    };
    let playback = Playback {
        server: 0,
        fullscreen: cmd.fullscreen,
        subtitles: false,
    };
    play_headless(playable, playback, config, output).await
}

struct Playback {
    server: usize,
    fullscreen: bool,
    subtitles: bool,
}

/// Drive a player session without the TUI until mpv exits or Ctrl-C
async fn play_headless(
    playable: Playable,
    playback: Playback,
    config: &Config,
    output: &Output,
) -> ExitCode {
    let title = playable.display_title(config.prefer_english_titles).to_string();
    let mut session = PlayerSession::new(playable, &config.user_agent, config.hide_controls_delay());
    let now = Instant::now();
    session.start(now);
    if let Some(msg) = session.error() {
        return output.error(msg, ExitCode::NoStreams);
    }

    if playback.server > 0 {
        session.take_requests();
        if !session.select_server(playback.server, now) {
            return output.error(
                format!(
                    "Server {} does not exist ({} available)",
                    playback.server + 1,
                    session.servers().len()
                ),
                ExitCode::InvalidArgs,
            );
        }
    }
    if playback.fullscreen {
        session.toggle_fullscreen(now);
    }

    let (tx, mut rx) = mpsc::unbounded_channel();
    let options = MpvOptions::from(config);
    let mut renderer = match MpvRenderer::spawn(&options, tx).await {
        Ok(r) => r,
        Err(e) => return output.error(e.to_string(), ExitCode::PlayerFailed),
    };

    let server = session
        .current_server()
        .map(|s| (s.to_string(), s.url.clone()))
        .unwrap_or_default();
    output.info(format!("Playing {} on {}", title, server.0));

    let mut failure: Option<String> = None;
    loop {
        for request in session.take_requests() {
            if let Err(e) = renderer.send(&request).await {
                failure = Some(e.to_string());
            }
        }
        if failure.is_some() {
            break;
        }

        let event = tokio::select! {
            event = rx.recv() => event.unwrap_or(RendererEvent::Exited),
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                break;
            }
        };
        session.on_event(event, Instant::now());

        if let Some(msg) = session.error() {
            failure = Some(msg.to_string());
            break;
        }
        if !playback.subtitles && session.subtitles_visible() {
            session.toggle_subtitles(Instant::now());
        }
        if session.has_finished() || session.has_exited() {
            debug!(finished = session.has_finished(), "playback over");
            break;
        }
    }
    renderer.shutdown().await;

    if let Some(msg) = failure {
        return output.error(msg, ExitCode::PlayerFailed);
    }
    let response = PlaybackResponse {
        status: "finished".to_string(),
        title,
        server: server.0,
        url: server.1,
        subtitles: session.subtitle_attached(),
    };
    if output.json {
        return print_or_fail(output, &response);
    }
    output.info("Playback finished");
    ExitCode::Success
}

// =============================================================================
// Helpers
// =============================================================================

fn lookup(catalog: &Catalog, id: &str, channel: bool) -> Result<Playable, ExitCode> {
    let found = if channel {
        catalog.channel(id).cloned().map(Playable::from)
    } else {
        catalog.movie(id).cloned().map(Playable::from)
    };
    found.ok_or(ExitCode::NotFound)
}

fn not_found(output: &Output, id: &str, channel: bool, code: ExitCode) -> ExitCode {
    let kind = if channel { "Channel" } else { "Movie" };
    output.error(format!("{} '{}' not found", kind, id), code)
}

fn print_or_fail<T: serde::Serialize>(output: &Output, data: T) -> ExitCode {
    if let Err(e) = output.print(data) {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}
