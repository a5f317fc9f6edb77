//! End-to-end flow tests for cinemabox
//!
//! Drives the TUI state machine with key events and fake renderer callbacks:
//! browse -> select -> play -> control -> back.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use cinemabox::app::{App, AppState, InputMode, LoadingState, MovieSection, Navigation};
use cinemabox::catalog::{Catalog, ChannelCategory, SearchType};
use cinemabox::config::Config;
use cinemabox::models::Playable;
use cinemabox::player::{RendererEvent, RendererRequest, NO_SERVERS_MESSAGE};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

fn loads(requests: &[RendererRequest]) -> Vec<&str> {
    requests
        .iter()
        .filter_map(|r| match r {
            RendererRequest::Load { url, .. } => Some(url.as_str()),
            _ => None,
        })
        .collect()
}

// =============================================================================
// Search -> Player
// =============================================================================

#[test]
fn test_search_to_playback_flow() {
    let now = Instant::now();
    let mut app = App::new();

    // Home search box
    app.handle_key(key(KeyCode::Char('/')));
    type_text(&mut app, "godfather");
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.state, AppState::Search);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(!app.search.results.is_empty());

    // Open the first hit
    app.handle_key_at(key(KeyCode::Enter), now);
    assert_eq!(app.state, AppState::Player);
    let session = app.player.as_ref().expect("player session");
    assert!(matches!(session.playable(), Playable::Movie(m) if m.title_english.contains("Godfather")));

    let requests = app.take_renderer_requests();
    assert_eq!(loads(&requests).len(), 1);

    // mpv reports the file loaded, subtitle follows
    app.on_renderer_event(RendererEvent::LoadStarted, now);
    app.on_renderer_event(RendererEvent::LoadFinished, now);
    let requests = app.take_renderer_requests();
    assert!(matches!(
        requests.as_slice(),
        [RendererRequest::AttachSubtitle { lang, .. }] if lang == "ar"
    ));
    assert_eq!(
        app.player.as_ref().map(LoadingState::from),
        Some(LoadingState::Idle)
    );

    // Pause round trip
    app.handle_key_at(key(KeyCode::Char(' ')), now);
    assert_eq!(app.take_renderer_requests(), vec![RendererRequest::TogglePause]);
    app.on_renderer_event(RendererEvent::PauseChanged(true), now);
    assert_eq!(app.player.as_ref().map(|s| s.is_playing()), Some(false));

    // Back returns to the results with the query intact
    app.handle_key_at(key(KeyCode::Esc), now);
    assert_eq!(app.state, AppState::Search);
    assert_eq!(app.search.query(), "godfather");
    assert!(app.player.is_none());
}

#[test]
fn test_search_type_toggle_while_typing() {
    let mut app = App::new();
    app.navigate(Navigation::Search {
        query: None,
        search_type: SearchType::All,
    });
    assert_eq!(app.input_mode, InputMode::Editing);

    type_text(&mut app, "mbc");
    let all = app.search.results.len();
    assert!(all > 0);

    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.search.search_type, SearchType::Movies);
    assert!(app.search.results.is_empty());

    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.search.search_type, SearchType::Channels);
    assert_eq!(app.search.results.len(), all);

    app.handle_key(key(KeyCode::Backspace));
    assert_eq!(app.search.query(), "mb");
}

// =============================================================================
// Live TV -> Player
// =============================================================================

#[test]
fn test_live_channel_failure_and_retry() {
    let now = Instant::now();
    let mut app = App::new();
    app.handle_key(key(KeyCode::Char('l')));
    assert_eq!(app.state, AppState::LiveTv);

    // Sports tab
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.live_tv.category, ChannelCategory::Sports);
    let expected = app.live_tv.channels[1].stream_url.clone();

    app.handle_key(key(KeyCode::Down));
    app.handle_key_at(key(KeyCode::Enter), now);
    assert_eq!(loads(&app.take_renderer_requests()), vec![expected.as_str()]);

    app.on_renderer_event(RendererEvent::LoadFailed("HTTP error 403 Forbidden".into()), now);
    let state = app.player.as_ref().map(LoadingState::from);
    assert_eq!(
        state,
        Some(LoadingState::Error(
            "Failed to load video: HTTP error 403 Forbidden".into()
        ))
    );

    app.handle_key_at(key(KeyCode::Char('r')), now);
    assert_eq!(loads(&app.take_renderer_requests()), vec![expected.as_str()]);

    // channels have no favorites
    app.handle_key_at(key(KeyCode::Char('h')), now);
    assert_eq!(
        app.notice.as_deref(),
        Some("Favorites are only available for movies")
    );
}

// =============================================================================
// Movies -> Player
// =============================================================================

#[test]
fn test_movie_sections_and_server_switch() {
    let now = Instant::now();
    let mut app = App::new();
    app.handle_key(key(KeyCode::Char('m')));
    assert_eq!(app.state, AppState::Movies);
    assert_eq!(app.movies.section, MovieSection::Popular);

    app.handle_key(key(KeyCode::Right));
    assert_eq!(app.movies.section, MovieSection::Recent);
    assert_eq!(app.movies.items, app.catalog.movies.recent);

    app.handle_key(key(KeyCode::Left));
    app.handle_key(key(KeyCode::Left));
    assert_eq!(app.movies.section, MovieSection::All);

    app.handle_key_at(key(KeyCode::Enter), now);
    app.take_renderer_requests();

    // digit keys pick a server
    app.handle_key_at(key(KeyCode::Char('2')), now);
    let requests = app.take_renderer_requests();
    let urls = loads(&requests);
    assert_eq!(urls.len(), 1);
    assert!(urls[0].starts_with("https://embedme.top/embed/movie/"));
    assert_eq!(app.player.as_ref().map(|s| s.current_server_index()), Some(1));

    // server 9 does not exist
    app.handle_key_at(key(KeyCode::Char('9')), now);
    assert!(app.take_renderer_requests().is_empty());
}

#[test]
fn test_controls_hide_through_app_tick() {
    let now = Instant::now();
    let catalog = Catalog::load();
    let config = Config {
        hide_controls_secs: 2,
        ..Config::default()
    };
    let mut app = App::with_config(catalog, &config);
    app.navigate(Navigation::Movies);
    app.handle_key_at(key(KeyCode::Enter), now);
    app.on_renderer_event(RendererEvent::LoadFinished, now);

    app.tick(now + Duration::from_secs(1));
    assert_eq!(app.player.as_ref().map(|s| s.controls_visible()), Some(true));

    app.tick(now + Duration::from_secs(2));
    assert_eq!(app.player.as_ref().map(|s| s.controls_visible()), Some(false));

    // Enter taps the surface and brings them back
    app.handle_key_at(key(KeyCode::Enter), now + Duration::from_secs(3));
    assert_eq!(app.player.as_ref().map(|s| s.controls_visible()), Some(true));
}

#[test]
fn test_fullscreen_back_before_leaving() {
    let now = Instant::now();
    let mut app = App::new();
    app.navigate(Navigation::Movies);
    app.handle_key_at(key(KeyCode::Enter), now);
    app.handle_key_at(key(KeyCode::Char('f')), now);

    app.handle_key_at(key(KeyCode::Esc), now);
    assert_eq!(app.state, AppState::Player);
    assert_eq!(app.player.as_ref().map(|s| s.is_fullscreen()), Some(false));

    app.handle_key_at(key(KeyCode::Backspace), now);
    assert_eq!(app.state, AppState::Movies);
}

#[test]
fn test_record_without_servers_shows_error() {
    let mut app = App::new();
    let mut movie = app.catalog.movies.popular[0].clone();
    movie.stream_url_1 = None;
    movie.stream_url_2 = None;

    app.navigate(Navigation::Player(movie.into()));
    assert_eq!(app.state, AppState::Player);
    assert!(app.take_renderer_requests().is_empty());
    assert_eq!(
        app.player.as_ref().and_then(|s| s.error()),
        Some(NO_SERVERS_MESSAGE)
    );
}

#[test]
fn test_ctrl_c_quits_anywhere() {
    let mut app = App::new();
    app.navigate(Navigation::LiveTv);
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!app.running);
}
