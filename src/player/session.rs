//! Playback control state
//!
//! `PlayerSession` owns everything the player screen shows: the playing and
//! fullscreen flags, the controls overlay, the server panel, the loading and
//! error surface. It never talks to mpv directly; every action queues
//! [`RendererRequest`]s in an outbox that the caller drains with
//! [`PlayerSession::take_requests`], and renderer callbacks come back in
//! through [`PlayerSession::on_event`].
//!
//! Time is passed in as `now` so the hide timer is deterministic.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use super::controls::ControlsTimer;
use super::ipc::{RendererEvent, RendererRequest};
use crate::models::{Playable, StreamingServer};

pub const SEEK_STEP_SECS: i64 = 10;
pub const SUBTITLE_LABEL: &str = "العربية";
pub const SUBTITLE_LANG: &str = "ar";
pub const NO_SERVERS_MESSAGE: &str = "No servers available for playback";

/// Outcome of the back key inside the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// Closed an overlay or left fullscreen
    Handled,
    /// Leave the player screen
    Exit,
}

#[derive(Debug)]
pub struct PlayerSession {
    playable: Playable,
    servers: Vec<StreamingServer>,
    current_server: usize,
    user_agent: String,

    is_playing: bool,
    is_fullscreen: bool,
    controls_visible: bool,
    server_menu_open: bool,
    subtitle_attached: bool,
    subtitles_visible: bool,
    loading: bool,
    finished: bool,
    exited: bool,
    error: Option<String>,

    timer: ControlsTimer,
    outbox: Vec<RendererRequest>,
}

impl PlayerSession {
    pub fn new(playable: Playable, user_agent: impl Into<String>, hide_delay: Duration) -> Self {
        let servers = playable.streaming_servers();
        Self {
            playable,
            servers,
            current_server: 0,
            user_agent: user_agent.into(),
            is_playing: false,
            is_fullscreen: false,
            controls_visible: true,
            server_menu_open: false,
            subtitle_attached: false,
            subtitles_visible: false,
            loading: false,
            finished: false,
            exited: false,
            error: None,
            timer: ControlsTimer::new(hide_delay),
            outbox: Vec::new(),
        }
    }

    /// Begin playback on the first server, or surface the no-server error
    pub fn start(&mut self, now: Instant) {
        info!(id = self.playable.id(), servers = self.servers.len(), "opening player");
        self.show_controls(now);
        self.load_current();
    }

    fn load_current(&mut self) {
        let Some(server) = self.servers.get(self.current_server) else {
            warn!(id = self.playable.id(), "no streaming servers");
            self.loading = false;
            self.error = Some(NO_SERVERS_MESSAGE.to_string());
            return;
        };
        info!(server = %server, url = %server.url, "loading stream");
        self.outbox.push(RendererRequest::Load {
            url: server.url.clone(),
            user_agent: self.user_agent.clone(),
        });
        self.loading = true;
        self.finished = false;
        self.error = None;
        self.subtitle_attached = false;
        self.subtitles_visible = false;
    }

    // =========================================================================
    // Renderer callbacks
    // =========================================================================

    pub fn on_event(&mut self, event: RendererEvent, now: Instant) {
        debug!(?event, "renderer event");
        match event {
            RendererEvent::LoadStarted => {
                self.loading = true;
            }
            RendererEvent::LoadFinished => {
                self.loading = false;
                self.error = None;
                self.is_playing = true;
                self.attach_subtitle();
                if self.controls_visible {
                    self.timer.schedule(now);
                }
            }
            RendererEvent::LoadFailed(description) => {
                warn!(%description, "stream failed to load");
                self.loading = false;
                self.is_playing = false;
                self.error = Some(format!("Failed to load video: {}", description));
                // keep the retry visible
                self.controls_visible = true;
                self.timer.cancel();
            }
            RendererEvent::Finished => {
                info!(id = self.playable.id(), "playback finished");
                self.finished = true;
                self.is_playing = false;
                self.show_controls(now);
            }
            // mpv answers the pause observer before the first file is up
            RendererEvent::PauseChanged(_) if self.loading => {}
            RendererEvent::PauseChanged(paused) => {
                self.is_playing = !paused;
            }
            RendererEvent::Exited => {
                self.exited = true;
                self.is_playing = false;
                self.loading = false;
            }
        }
    }

    fn attach_subtitle(&mut self) {
        if self.subtitle_attached {
            return;
        }
        let Some(url) = self.playable.subtitle_url() else {
            return;
        };
        self.outbox.push(RendererRequest::AttachSubtitle {
            url: url.to_string(),
            label: SUBTITLE_LABEL.to_string(),
            lang: SUBTITLE_LANG.to_string(),
        });
        self.subtitle_attached = true;
        self.subtitles_visible = true;
    }

    // =========================================================================
    // Controls
    // =========================================================================

    fn show_controls(&mut self, now: Instant) {
        self.controls_visible = true;
        self.timer.schedule(now);
    }

    fn hide_controls(&mut self) {
        self.controls_visible = false;
        self.timer.cancel();
    }

    /// Tap on the video surface
    pub fn tap(&mut self, now: Instant) {
        if self.controls_visible {
            self.hide_controls();
        } else {
            self.show_controls(now);
        }
    }

    pub fn toggle_play_pause(&mut self, now: Instant) {
        self.show_controls(now);
        self.outbox.push(RendererRequest::TogglePause);
    }

    pub fn seek_forward(&mut self, now: Instant) {
        self.show_controls(now);
        self.outbox.push(RendererRequest::SeekRelative(SEEK_STEP_SECS));
    }

    pub fn seek_backward(&mut self, now: Instant) {
        self.show_controls(now);
        self.outbox.push(RendererRequest::SeekRelative(-SEEK_STEP_SECS));
    }

    pub fn toggle_fullscreen(&mut self, now: Instant) {
        self.is_fullscreen = !self.is_fullscreen;
        self.show_controls(now);
        self.outbox.push(RendererRequest::SetFullscreen(self.is_fullscreen));
    }

    /// Show or hide the attached track; no-op before one is attached
    pub fn toggle_subtitles(&mut self, now: Instant) {
        self.show_controls(now);
        if !self.subtitle_attached {
            return;
        }
        self.subtitles_visible = !self.subtitles_visible;
        self.outbox
            .push(RendererRequest::SetSubtitleVisibility(self.subtitles_visible));
    }

    /// Flip the favorite flag; returns the new value for movies only
    pub fn toggle_favorite(&mut self, now: Instant) -> Option<bool> {
        self.show_controls(now);
        match &mut self.playable {
            Playable::Movie(movie) => {
                movie.toggle_favorite();
                Some(movie.is_favorite)
            }
            Playable::Channel(_) => None,
        }
    }

    pub fn toggle_server_menu(&mut self, now: Instant) {
        self.server_menu_open = !self.server_menu_open;
        self.show_controls(now);
    }

    /// Switch to server `index` and reload; out-of-range indices are ignored
    pub fn select_server(&mut self, index: usize, now: Instant) -> bool {
        self.show_controls(now);
        if index >= self.servers.len() {
            return false;
        }
        self.current_server = index;
        self.server_menu_open = false;
        self.load_current();
        true
    }

    /// Reload the current server after an error
    pub fn retry(&mut self, now: Instant) {
        self.show_controls(now);
        self.load_current();
    }

    /// Server panel first, then fullscreen, then leave
    pub fn back(&mut self, now: Instant) -> BackOutcome {
        if self.server_menu_open {
            self.server_menu_open = false;
            self.show_controls(now);
            BackOutcome::Handled
        } else if self.is_fullscreen {
            self.toggle_fullscreen(now);
            BackOutcome::Handled
        } else {
            BackOutcome::Exit
        }
    }

    /// Advance the hide timer; returns true when the controls just hid
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.timer.poll(now) {
            self.controls_visible = false;
            true
        } else {
            false
        }
    }

    pub fn take_requests(&mut self) -> Vec<RendererRequest> {
        std::mem::take(&mut self.outbox)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn playable(&self) -> &Playable {
        &self.playable
    }

    pub fn servers(&self) -> &[StreamingServer] {
        &self.servers
    }

    pub fn current_server_index(&self) -> usize {
        self.current_server
    }

    pub fn current_server(&self) -> Option<&StreamingServer> {
        self.servers.get(self.current_server)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    pub fn server_menu_open(&self) -> bool {
        self.server_menu_open
    }

    pub fn subtitle_attached(&self) -> bool {
        self.subtitle_attached
    }

    pub fn subtitles_visible(&self) -> bool {
        self.subtitles_visible
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The current stream reached its end
    pub fn has_finished(&self) -> bool {
        self.finished
    }

    pub fn has_exited(&self) -> bool {
        self.exited
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn hide_pending(&self) -> bool {
        self.timer.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Movie, TvChannel};

    fn session() -> PlayerSession {
        let movie = Movie::new(
            "7",
            "العراب",
            "The Godfather",
            "",
            "",
            1972,
            9.2,
            "",
            "Crime/Drama",
            Some("https://a/7".into()),
            Some("https://b/7".into()),
        );
        PlayerSession::new(movie.into(), "UA", Duration::from_secs(5))
    }

    #[test]
    fn test_start_queues_first_server() {
        let mut s = session();
        s.start(Instant::now());
        assert!(s.is_loading());
        assert_eq!(
            s.take_requests(),
            vec![RendererRequest::Load {
                url: "https://a/7".into(),
                user_agent: "UA".into()
            }]
        );
    }

    #[test]
    fn test_back_order() {
        let now = Instant::now();
        let mut s = session();
        s.start(now);
        s.toggle_fullscreen(now);
        s.toggle_server_menu(now);

        assert_eq!(s.back(now), BackOutcome::Handled);
        assert!(!s.server_menu_open());
        assert!(s.is_fullscreen());

        assert_eq!(s.back(now), BackOutcome::Handled);
        assert!(!s.is_fullscreen());

        assert_eq!(s.back(now), BackOutcome::Exit);
    }

    #[test]
    fn test_pause_state_follows_renderer() {
        let now = Instant::now();
        let mut s = session();
        s.start(now);
        s.on_event(RendererEvent::LoadFinished, now);
        assert!(s.is_playing());

        s.toggle_play_pause(now);
        // unchanged until mpv reports
        assert!(s.is_playing());
        s.on_event(RendererEvent::PauseChanged(true), now);
        assert!(!s.is_playing());
    }

    #[test]
    fn test_channel_has_no_favorite_or_subtitle() {
        let now = Instant::now();
        let ch = TvChannel::new("1", "", "Al Jazeera", "https://live/1.m3u8", "", "News", "");
        let mut s = PlayerSession::new(ch.into(), "UA", Duration::from_secs(5));
        s.start(now);
        s.take_requests();
        s.on_event(RendererEvent::LoadFinished, now);
        assert!(s.take_requests().is_empty());
        assert_eq!(s.toggle_favorite(now), None);
    }
}
