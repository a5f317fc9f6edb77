//! Player tests for cinemabox
//!
//! Drives `PlayerSession` through renderer callbacks with an explicit clock,
//! and checks the mpv IPC codec and the mpv event forwarder.
//!
//! ## Test Cases
//! - Load flow: start, load finished, subtitle attach, auto-hide
//! - Load failure: error surface, retry, server switch
//! - Controls: tap, hide timer, fullscreen, subtitles
//! - IPC: command encoding and event decoding

use std::time::{Duration, Instant};

use cinemabox::models::{Movie, Playable, TvChannel};
use cinemabox::player::ipc::{encode_command, observe_pause};
use cinemabox::player::{
    decode_event, ControlsTimer, Encoder, PlayerSession, RendererEvent, RendererRequest,
    NO_SERVERS_MESSAGE, SEEK_STEP_SECS,
};
use serde_json::json;

const HIDE: Duration = Duration::from_secs(5);

fn movie(slot1: Option<&str>, slot2: Option<&str>) -> Playable {
    Movie::new(
        "238",
        "العراب",
        "The Godfather",
        "",
        "",
        1972,
        9.2,
        "175 دقيقة",
        "Crime/Drama",
        slot1.map(String::from),
        slot2.map(String::from),
    )
    .into()
}

fn two_server_session() -> PlayerSession {
    PlayerSession::new(
        movie(Some("https://vidsrc.to/embed/movie/238"), Some("https://embedme.top/embed/movie/238")),
        "UA",
        HIDE,
    )
}

fn loaded_session(now: Instant) -> PlayerSession {
    let mut s = two_server_session();
    s.start(now);
    s.on_event(RendererEvent::LoadStarted, now);
    s.on_event(RendererEvent::LoadFinished, now);
    s.take_requests();
    s
}

// =============================================================================
// LOAD FLOW
// =============================================================================

#[test]
fn test_load_finished_attaches_arabic_subtitle_once() {
    let now = Instant::now();
    let mut s = two_server_session();
    s.start(now);
    s.take_requests();

    s.on_event(RendererEvent::LoadFinished, now);
    assert!(!s.is_loading());
    assert!(s.is_playing());
    assert!(s.subtitle_attached());
    assert!(s.subtitles_visible());
    assert_eq!(
        s.take_requests(),
        vec![RendererRequest::AttachSubtitle {
            url: "https://dl.opensubtitles.org/ar/download/sub/238/ar".into(),
            label: "العربية".into(),
            lang: "ar".into(),
        }]
    );

    // a second load-finished (seek past a cache boundary) does not re-add it
    s.on_event(RendererEvent::LoadFinished, now);
    assert!(s.take_requests().is_empty());
}

#[test]
fn test_no_servers_shows_error_without_loading() {
    let now = Instant::now();
    let mut s = PlayerSession::new(movie(None, None), "UA", HIDE);
    s.start(now);

    assert_eq!(s.error(), Some(NO_SERVERS_MESSAGE));
    assert!(!s.is_loading());
    assert!(s.take_requests().is_empty());
    assert!(s.current_server().is_none());
}

#[test]
fn test_second_slot_only_is_single_server() {
    let now = Instant::now();
    let mut s = PlayerSession::new(movie(None, Some("https://b/238")), "UA", HIDE);
    s.start(now);

    assert_eq!(s.servers().len(), 1);
    assert_eq!(s.current_server().map(|sv| sv.url.as_str()), Some("https://b/238"));
}

#[test]
fn test_live_channel_loads_hls_url() {
    let now = Instant::now();
    let ch = TvChannel::new(
        "1",
        "الجزيرة",
        "Al Jazeera",
        "https://live-hls-web-aje.getaj.net/AJE/index.m3u8",
        "",
        "News",
        "",
    );
    let mut s = PlayerSession::new(ch.into(), "UA", HIDE);
    s.start(now);

    assert_eq!(
        s.take_requests(),
        vec![RendererRequest::Load {
            url: "https://live-hls-web-aje.getaj.net/AJE/index.m3u8".into(),
            user_agent: "UA".into(),
        }]
    );
}

// =============================================================================
// FAILURE AND RECOVERY
// =============================================================================

#[test]
fn test_load_failed_surfaces_error_and_keeps_controls() {
    let now = Instant::now();
    let mut s = two_server_session();
    s.start(now);
    s.on_event(RendererEvent::LoadFailed("loading failed".into()), now);

    assert_eq!(s.error(), Some("Failed to load video: loading failed"));
    assert!(!s.is_loading());
    assert!(!s.is_playing());
    assert!(s.controls_visible());

    // error stays on screen past the hide delay
    assert!(!s.tick(now + HIDE * 2));
    assert!(s.controls_visible());
}

#[test]
fn test_retry_reloads_current_server() {
    let now = Instant::now();
    let mut s = two_server_session();
    s.start(now);
    s.take_requests();
    s.on_event(RendererEvent::LoadFailed("x".into()), now);

    s.retry(now);
    assert!(s.error().is_none());
    assert!(s.is_loading());
    assert_eq!(
        s.take_requests(),
        vec![RendererRequest::Load {
            url: "https://vidsrc.to/embed/movie/238".into(),
            user_agent: "UA".into(),
        }]
    );
}

#[test]
fn test_select_server_switches_and_closes_menu() {
    let now = Instant::now();
    let mut s = loaded_session(now);
    s.toggle_server_menu(now);
    assert!(s.server_menu_open());

    assert!(s.select_server(1, now));
    assert_eq!(s.current_server_index(), 1);
    assert!(!s.server_menu_open());
    assert!(!s.subtitle_attached());
    assert_eq!(
        s.take_requests(),
        vec![RendererRequest::Load {
            url: "https://embedme.top/embed/movie/238".into(),
            user_agent: "UA".into(),
        }]
    );

    // subtitle is attached again for the new stream
    s.on_event(RendererEvent::LoadFinished, now);
    assert!(s.subtitle_attached());
}

#[test]
fn test_select_server_out_of_range_ignored() {
    let now = Instant::now();
    let mut s = loaded_session(now);
    assert!(!s.select_server(5, now));
    assert_eq!(s.current_server_index(), 0);
    assert!(s.take_requests().is_empty());
}

#[test]
fn test_renderer_exit_marks_session() {
    let now = Instant::now();
    let mut s = loaded_session(now);
    s.on_event(RendererEvent::Exited, now);
    assert!(s.has_exited());
    assert!(!s.is_playing());
}

// =============================================================================
// CONTROLS
// =============================================================================

#[test]
fn test_controls_hide_after_delay() {
    let now = Instant::now();
    let mut s = loaded_session(now);
    assert!(s.controls_visible());
    assert!(s.hide_pending());

    assert!(!s.tick(now + Duration::from_secs(4)));
    assert!(s.controls_visible());

    assert!(s.tick(now + HIDE));
    assert!(!s.controls_visible());
    // fires once
    assert!(!s.tick(now + HIDE * 3));
}

#[test]
fn test_interaction_restarts_hide_timer() {
    let now = Instant::now();
    let mut s = loaded_session(now);

    let later = now + Duration::from_secs(4);
    s.seek_forward(later);
    assert!(!s.tick(now + HIDE));
    assert!(s.tick(later + HIDE));
}

#[test]
fn test_tap_toggles_controls() {
    let now = Instant::now();
    let mut s = loaded_session(now);

    s.tap(now);
    assert!(!s.controls_visible());
    assert!(!s.hide_pending());

    s.tap(now);
    assert!(s.controls_visible());
    assert!(s.hide_pending());
}

/// Hidden controls with no hide pending, `HIDE` after `now`
fn hidden_session(now: Instant) -> PlayerSession {
    let mut s = loaded_session(now);
    assert!(s.tick(now + HIDE));
    assert!(!s.controls_visible());
    assert!(!s.hide_pending());
    s
}

#[test]
fn test_fullscreen_shows_hidden_controls_and_reschedules() {
    let now = Instant::now();
    let mut s = hidden_session(now);
    let later = now + HIDE * 2;

    s.toggle_fullscreen(later);
    assert!(s.controls_visible());
    assert!(s.hide_pending());
    assert!(!s.tick(later + Duration::from_secs(4)));
    assert!(s.tick(later + HIDE));
    assert!(!s.tick(later + HIDE * 2));

    // leaving fullscreen does the same
    let exit = later + HIDE * 3;
    s.toggle_fullscreen(exit);
    assert!(!s.is_fullscreen());
    assert!(s.controls_visible());
    assert!(s.hide_pending());
    assert!(s.tick(exit + HIDE));
    assert!(!s.tick(exit + HIDE * 2));
}

#[test]
fn test_server_panel_shows_hidden_controls_and_reschedules() {
    let now = Instant::now();
    let mut s = loaded_session(now);
    s.tap(now);
    assert!(!s.controls_visible());

    let later = now + Duration::from_secs(30);
    s.toggle_server_menu(later);
    assert!(s.server_menu_open());
    assert!(s.controls_visible());
    assert!(s.hide_pending());
    assert!(!s.tick(later + Duration::from_secs(4)));
    assert!(s.tick(later + HIDE));
    assert!(!s.tick(later + HIDE * 2));
}

#[test]
fn test_load_finished_keeps_user_hidden_controls() {
    let now = Instant::now();
    let mut s = two_server_session();
    s.start(now);
    s.tap(now);
    assert!(!s.controls_visible());

    s.on_event(RendererEvent::LoadFinished, now);
    assert!(!s.controls_visible());
    assert!(!s.hide_pending());
    assert!(!s.tick(now + HIDE));
}

#[test]
fn test_pause_report_during_load_ignored() {
    let now = Instant::now();
    let mut s = two_server_session();
    s.start(now);

    // observer reply arrives before the file is up
    s.on_event(RendererEvent::PauseChanged(false), now);
    assert!(!s.is_playing());

    s.on_event(RendererEvent::LoadFinished, now);
    s.on_event(RendererEvent::PauseChanged(true), now);
    assert!(!s.is_playing());
}

#[test]
fn test_end_of_stream_finishes_session() {
    let now = Instant::now();
    let mut s = loaded_session(now);
    assert!(s.tick(now + HIDE));

    let end = now + Duration::from_secs(60);
    s.on_event(RendererEvent::Finished, end);
    assert!(s.has_finished());
    assert!(!s.has_exited());
    assert!(!s.is_playing());
    assert!(s.controls_visible());

    // retry plays it again
    s.retry(end);
    assert!(!s.has_finished());
    assert!(s.is_loading());
}

#[test]
fn test_seek_requests() {
    let now = Instant::now();
    let mut s = loaded_session(now);
    s.seek_forward(now);
    s.seek_backward(now);
    assert_eq!(
        s.take_requests(),
        vec![
            RendererRequest::SeekRelative(SEEK_STEP_SECS),
            RendererRequest::SeekRelative(-SEEK_STEP_SECS),
        ]
    );
}

#[test]
fn test_fullscreen_toggle_requests() {
    let now = Instant::now();
    let mut s = loaded_session(now);
    s.toggle_fullscreen(now);
    s.toggle_fullscreen(now);
    assert!(!s.is_fullscreen());
    assert_eq!(
        s.take_requests(),
        vec![
            RendererRequest::SetFullscreen(true),
            RendererRequest::SetFullscreen(false),
        ]
    );
}

#[test]
fn test_subtitle_toggle_after_attach() {
    let now = Instant::now();
    let mut s = loaded_session(now);
    s.toggle_subtitles(now);
    assert!(!s.subtitles_visible());
    assert_eq!(
        s.take_requests(),
        vec![RendererRequest::SetSubtitleVisibility(false)]
    );
}

#[test]
fn test_subtitle_toggle_before_attach_is_noop() {
    let now = Instant::now();
    let mut s = two_server_session();
    s.start(now);
    s.take_requests();
    s.toggle_subtitles(now);
    assert!(!s.subtitles_visible());
    assert!(s.take_requests().is_empty());
}

#[test]
fn test_favorite_toggles_movie_copy() {
    let now = Instant::now();
    let mut s = loaded_session(now);
    assert_eq!(s.toggle_favorite(now), Some(true));
    assert_eq!(s.toggle_favorite(now), Some(false));
}

#[test]
fn test_controls_timer_cancel() {
    let now = Instant::now();
    let mut timer = ControlsTimer::new(HIDE);
    timer.schedule(now);
    assert_eq!(timer.remaining(now), Some(HIDE));
    timer.cancel();
    assert!(!timer.is_pending());
    assert!(!timer.poll(now + HIDE));
}

// =============================================================================
// IPC CODEC
// =============================================================================

#[test]
fn test_load_encodes_user_agent_then_loadfile() {
    let mut enc = Encoder::new();
    let lines = enc.encode(&RendererRequest::Load {
        url: "https://a/1".into(),
        user_agent: "UA".into(),
    });
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    let second: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
    assert_eq!(first["command"], json!(["set_property", "user-agent", "UA"]));
    assert_eq!(second["command"], json!(["loadfile", "https://a/1", "replace"]));
    assert_eq!(second["request_id"], 2);
}

#[test]
fn test_subtitle_attach_command() {
    let cmds = RendererRequest::AttachSubtitle {
        url: "https://s/1.srt".into(),
        label: "العربية".into(),
        lang: "ar".into(),
    }
    .commands();
    assert_eq!(cmds, vec![json!(["sub-add", "https://s/1.srt", "select", "العربية", "ar"])]);
}

#[test]
fn test_observe_pause_line() {
    let line = encode_command(observe_pause(), 1);
    assert!(line.ends_with('\n'));
    let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
    assert_eq!(value["command"], json!(["observe_property", 1, "pause"]));
}

#[test]
fn test_decode_events() {
    assert_eq!(
        decode_event(r#"{"event":"start-file","playlist_entry_id":1}"#),
        Some(RendererEvent::LoadStarted)
    );
    assert_eq!(
        decode_event(r#"{"event":"file-loaded"}"#),
        Some(RendererEvent::LoadFinished)
    );
    assert_eq!(
        decode_event(r#"{"event":"end-file","reason":"error","file_error":"loading failed"}"#),
        Some(RendererEvent::LoadFailed("loading failed".into()))
    );
    assert_eq!(
        decode_event(r#"{"event":"end-file","reason":"error"}"#),
        Some(RendererEvent::LoadFailed("unknown error".into()))
    );
    assert_eq!(
        decode_event(r#"{"event":"property-change","id":1,"name":"pause","data":true}"#),
        Some(RendererEvent::PauseChanged(true))
    );
    assert_eq!(decode_event(r#"{"event":"shutdown"}"#), Some(RendererEvent::Exited));
}

#[test]
fn test_decode_ignores_noise() {
    assert_eq!(decode_event(""), None);
    assert_eq!(decode_event("not json"), None);
    assert_eq!(
        decode_event(r#"{"event":"property-change","name":"volume","data":50}"#),
        None
    );
    assert_eq!(decode_event(r#"{"event":"playback-restart"}"#), None);
}
