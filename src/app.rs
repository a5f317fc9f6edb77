//! App state and core application logic
//!
//! Manages the screen state machine, the navigation stack and the player
//! session. Screens pass records to each other by value through
//! [`Navigation`] messages.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

use crate::catalog::{
    filter_channels, filter_movies, Catalog, ChannelCategory, MovieCategory, SearchType,
    TabCategory,
};
use crate::config::Config;
use crate::models::{Movie, Playable, TvChannel};
use crate::player::{BackOutcome, PlayerSession, RendererEvent, RendererRequest};

// =============================================================================
// App State Enum
// =============================================================================

/// Application state enum representing current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Main menu with search box
    #[default]
    Home,
    /// Movie sections and genre tabs
    Movies,
    /// Live channels by category
    LiveTv,
    /// Title search over movies and channels
    Search,
    /// Playback controls for the running renderer
    Player,
}

/// Message used to move between screens; records travel as owned copies
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    Home,
    Movies,
    LiveTv,
    Search {
        query: Option<String>,
        search_type: SearchType,
    },
    Player(Playable),
}

// =============================================================================
// Input Mode
// =============================================================================

/// Current input mode for keyboard handling
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Text input mode (search box focused)
    Editing,
}

// =============================================================================
// Loading State
// =============================================================================

/// Loading state shown over the player
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadingState {
    /// Idle - no loading in progress
    #[default]
    Idle,
    /// Loading with optional message
    Loading(Option<String>),
    /// Error with message
    Error(String),
}

impl From<&PlayerSession> for LoadingState {
    fn from(session: &PlayerSession) -> Self {
        if let Some(err) = session.error() {
            LoadingState::Error(err.to_string())
        } else if session.is_loading() {
            let msg = session
                .current_server()
                .map(|s| format!("Loading {}...", s.name));
            LoadingState::Loading(msg)
        } else {
            LoadingState::Idle
        }
    }
}

// =============================================================================
// Selection State (per-view)
// =============================================================================

/// Selection state for list views
#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// Currently selected index
    pub selected: usize,
    /// Scroll offset for viewport
    pub offset: usize,
    /// Total number of items
    pub len: usize,
}

impl ListState {
    pub fn new(len: usize) -> Self {
        Self {
            selected: 0,
            offset: 0,
            len,
        }
    }

    pub fn up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            if self.selected < self.offset {
                self.offset = self.selected;
            }
        }
    }

    pub fn down(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    pub fn page_up(&mut self, page_size: usize) {
        self.selected = self.selected.saturating_sub(page_size);
        if self.selected < self.offset {
            self.offset = self.selected;
        }
    }

    pub fn page_down(&mut self, page_size: usize) {
        if self.len > 0 {
            self.selected = (self.selected + page_size).min(self.len - 1);
        }
    }

    pub fn first(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    pub fn last(&mut self) {
        if self.len > 0 {
            self.selected = self.len - 1;
        }
    }

    pub fn reset(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    /// Update length, clamping the selection
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
        if self.offset > self.selected {
            self.offset = self.selected;
        }
    }

    /// Shared key handling for vertical lists
    fn handle_nav_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.up(),
            KeyCode::Down | KeyCode::Char('j') => self.down(),
            KeyCode::PageUp => self.page_up(10),
            KeyCode::PageDown => self.page_down(10),
            KeyCode::Home => self.first(),
            KeyCode::End => self.last(),
            _ => return false,
        }
        true
    }
}

// =============================================================================
// Text Input
// =============================================================================

/// Single-line text field; `cursor` counts characters, not bytes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn set(&mut self, value: impl Into<String>) {
        *self = Self::new(value);
    }

    /// Apply an editing key; returns true if the text changed
    fn handle_edit_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => {
                self.cursor_left();
                return false;
            }
            KeyCode::Right => {
                self.cursor_right();
                return false;
            }
            KeyCode::Home => {
                self.cursor_home();
                return false;
            }
            KeyCode::End => {
                self.cursor_end();
                return false;
            }
            _ => return false,
        }
        true
    }
}

// =============================================================================
// View-Specific State
// =============================================================================

/// Entries on the home menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeEntry {
    Movies,
    LiveTv,
    Search,
}

impl HomeEntry {
    pub const ALL: [HomeEntry; 3] = [HomeEntry::Movies, HomeEntry::LiveTv, HomeEntry::Search];

    pub fn label(self) -> &'static str {
        match self {
            HomeEntry::Movies => "Movies",
            HomeEntry::LiveTv => "Live TV",
            HomeEntry::Search => "Search",
        }
    }
}

/// Home view state
#[derive(Debug, Clone)]
pub struct HomeState {
    pub menu: ListState,
    pub search_box: TextInput,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            menu: ListState::new(HomeEntry::ALL.len()),
            search_box: TextInput::default(),
        }
    }
}

impl HomeState {
    pub fn selected_entry(&self) -> HomeEntry {
        HomeEntry::ALL
            .get(self.menu.selected)
            .copied()
            .unwrap_or(HomeEntry::Movies)
    }
}

/// Rows on the movies screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovieSection {
    #[default]
    Popular,
    Recent,
    TopRated,
    All,
}

impl MovieSection {
    pub const ALL: [MovieSection; 4] = [
        MovieSection::Popular,
        MovieSection::Recent,
        MovieSection::TopRated,
        MovieSection::All,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MovieSection::Popular => "Popular",
            MovieSection::Recent => "Recent",
            MovieSection::TopRated => "Top Rated",
            MovieSection::All => "All Movies",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Movies view state
#[derive(Debug, Clone, Default)]
pub struct MoviesState {
    pub section: MovieSection,
    /// Genre tab applied to the All section
    pub category: MovieCategory,
    /// Movies currently listed
    pub items: Vec<Movie>,
    pub list: ListState,
}

impl MoviesState {
    pub fn refresh(&mut self, catalog: &Catalog) {
        self.items = match self.section {
            MovieSection::Popular => catalog.movies.popular.clone(),
            MovieSection::Recent => catalog.movies.recent.clone(),
            MovieSection::TopRated => catalog.movies.top_rated.clone(),
            MovieSection::All => filter_movies(&catalog.movies.all, self.category),
        };
        self.list.set_len(self.items.len());
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        self.items.get(self.list.selected)
    }
}

/// Live TV view state
#[derive(Debug, Clone, Default)]
pub struct LiveTvState {
    pub category: ChannelCategory,
    pub channels: Vec<TvChannel>,
    pub list: ListState,
}

impl LiveTvState {
    pub fn refresh(&mut self, catalog: &Catalog) {
        self.channels = filter_channels(&catalog.channels, self.category);
        self.list.set_len(self.channels.len());
    }

    pub fn selected_channel(&self) -> Option<&TvChannel> {
        self.channels.get(self.list.selected)
    }
}

/// Search view state
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub input: TextInput,
    pub search_type: SearchType,
    pub results: Vec<Playable>,
    pub list: ListState,
}

impl SearchState {
    pub fn query(&self) -> &str {
        &self.input.value
    }

    pub fn run(&mut self, catalog: &Catalog) {
        self.results = catalog.search(&self.input.value, self.search_type);
        self.list.reset();
        self.list.set_len(self.results.len());
    }

    pub fn selected_result(&self) -> Option<&Playable> {
        self.results.get(self.list.selected)
    }
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Current state/screen
    pub state: AppState,
    /// Navigation history stack
    pub nav_stack: Vec<AppState>,
    /// Whether the app is running
    pub running: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Status line message, cleared on the next key
    pub notice: Option<String>,

    pub catalog: Catalog,
    pub prefer_english: bool,
    user_agent: String,
    hide_delay: Duration,

    // View-specific states
    pub home: HomeState,
    pub movies: MoviesState,
    pub live_tv: LiveTvState,
    pub search: SearchState,
    pub player: Option<PlayerSession>,
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Catalog::load(), &Config::default())
    }
}

impl App {
    /// Create an App over the built-in catalog with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(catalog: Catalog, config: &Config) -> Self {
        Self {
            state: AppState::Home,
            nav_stack: Vec::new(),
            running: true,
            input_mode: InputMode::Normal,
            notice: None,

            catalog,
            prefer_english: config.prefer_english_titles,
            user_agent: config.user_agent.clone(),
            hide_delay: config.hide_controls_delay(),

            home: HomeState::default(),
            movies: MoviesState::default(),
            live_tv: LiveTvState::default(),
            search: SearchState::default(),
            player: None,
        }
    }

    /// Push the current screen and switch to `state`
    fn push_state(&mut self, state: AppState) {
        if self.state != state {
            self.nav_stack.push(self.state);
            self.state = state;
        }
        self.input_mode = InputMode::Normal;
    }

    /// Handle a navigation message
    pub fn navigate(&mut self, nav: Navigation) {
        self.navigate_at(nav, Instant::now());
    }

    pub fn navigate_at(&mut self, nav: Navigation, now: Instant) {
        match nav {
            Navigation::Home => {
                self.nav_stack.clear();
                self.state = AppState::Home;
                self.input_mode = InputMode::Normal;
            }
            Navigation::Movies => {
                self.movies.refresh(&self.catalog);
                self.push_state(AppState::Movies);
            }
            Navigation::LiveTv => {
                self.live_tv.refresh(&self.catalog);
                self.push_state(AppState::LiveTv);
            }
            Navigation::Search { query, search_type } => {
                self.search.search_type = search_type;
                match query {
                    Some(q) => self.search.input.set(q),
                    None => self.search.input.clear(),
                }
                self.search.run(&self.catalog);
                self.push_state(AppState::Search);
                if self.search.query().is_empty() {
                    self.input_mode = InputMode::Editing;
                }
            }
            Navigation::Player(playable) => {
                info!(id = playable.id(), live = playable.is_live(), "open player");
                let mut session =
                    PlayerSession::new(playable, self.user_agent.clone(), self.hide_delay);
                session.start(now);
                self.player = Some(session);
                self.push_state(AppState::Player);
            }
        }
    }

    /// Go back to previous state
    pub fn back(&mut self) -> bool {
        if self.input_mode == InputMode::Editing {
            self.input_mode = InputMode::Normal;
            return true;
        }

        if let Some(prev) = self.nav_stack.pop() {
            if self.state == AppState::Player {
                self.player = None;
            }
            self.state = prev;
            true
        } else {
            false
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_notice(&mut self, msg: impl Into<String>) {
        self.notice = Some(msg.into());
    }

    /// Title for a record in the configured language
    pub fn title_of<'a>(&self, playable: &'a Playable) -> &'a str {
        playable.display_title(self.prefer_english)
    }

    // -------------------------------------------------------------------------
    // Player plumbing
    // -------------------------------------------------------------------------

    /// Feed a renderer callback into the player; leaves the player if mpv went away
    pub fn on_renderer_event(&mut self, event: RendererEvent, now: Instant) {
        let Some(session) = self.player.as_mut() else {
            return;
        };
        session.on_event(event, now);
        if session.has_exited() && self.state == AppState::Player {
            info!("renderer exited, leaving player");
            self.input_mode = InputMode::Normal;
            self.back();
        }
    }

    pub fn take_renderer_requests(&mut self) -> Vec<RendererRequest> {
        self.player
            .as_mut()
            .map(PlayerSession::take_requests)
            .unwrap_or_default()
    }

    /// Periodic tick from the event loop
    pub fn tick(&mut self, now: Instant) {
        if let Some(session) = self.player.as_mut() {
            session.tick(now);
        }
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle keyboard event, returns true if event was consumed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.handle_key_at(key, Instant::now())
    }

    pub fn handle_key_at(&mut self, key: KeyEvent, now: Instant) -> bool {
        self.notice = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }

        if self.input_mode == InputMode::Editing {
            self.handle_editing_key(key, now)
        } else {
            self.handle_normal_key(key, now)
        }
    }

    /// Handle keys in editing (text input) mode
    fn handle_editing_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        match (self.state, key.code) {
            (_, KeyCode::Esc) => {
                self.input_mode = InputMode::Normal;
                true
            }
            (AppState::Home, KeyCode::Enter) => {
                self.input_mode = InputMode::Normal;
                let query = self.home.search_box.value.trim().to_string();
                if !query.is_empty() {
                    self.navigate_at(
                        Navigation::Search {
                            query: Some(query),
                            search_type: SearchType::All,
                        },
                        now,
                    );
                }
                true
            }
            (AppState::Home, code) => {
                self.home.search_box.handle_edit_key(code);
                true
            }
            (AppState::Search, KeyCode::Enter) | (AppState::Search, KeyCode::Down) => {
                self.input_mode = InputMode::Normal;
                true
            }
            (AppState::Search, KeyCode::Tab) => {
                self.search.search_type = self.search.search_type.next();
                self.search.run(&self.catalog);
                true
            }
            (AppState::Search, code) => {
                if self.search.input.handle_edit_key(code) {
                    self.search.run(&self.catalog);
                }
                true
            }
            _ => {
                self.input_mode = InputMode::Normal;
                false
            }
        }
    }

    /// Handle keys in normal navigation mode
    fn handle_normal_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if self.state == AppState::Player {
            return self.handle_player_key(key, now);
        }

        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                return true;
            }
            KeyCode::Esc => {
                return self.back();
            }
            _ => {}
        }

        match self.state {
            AppState::Home => self.handle_home_key(key, now),
            AppState::Movies => self.handle_movies_key(key, now),
            AppState::LiveTv => self.handle_live_tv_key(key, now),
            AppState::Search => self.handle_search_key(key, now),
            AppState::Player => false,
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if self.home.menu.handle_nav_key(key.code) {
            return true;
        }
        match key.code {
            KeyCode::Enter => {
                let nav = match self.home.selected_entry() {
                    HomeEntry::Movies => Navigation::Movies,
                    HomeEntry::LiveTv => Navigation::LiveTv,
                    HomeEntry::Search => Navigation::Search {
                        query: None,
                        search_type: SearchType::All,
                    },
                };
                self.navigate_at(nav, now);
                true
            }
            KeyCode::Char('/') => {
                self.input_mode = InputMode::Editing;
                true
            }
            KeyCode::Char('m') => {
                self.navigate_at(Navigation::Movies, now);
                true
            }
            KeyCode::Char('l') => {
                self.navigate_at(Navigation::LiveTv, now);
                true
            }
            _ => false,
        }
    }

    fn handle_movies_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if self.movies.list.handle_nav_key(key.code) {
            return true;
        }
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.movies.section = self.movies.section.prev();
                self.movies.list.reset();
                self.movies.refresh(&self.catalog);
                true
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.movies.section = self.movies.section.next();
                self.movies.list.reset();
                self.movies.refresh(&self.catalog);
                true
            }
            KeyCode::Tab | KeyCode::BackTab => {
                let step = if key.code == KeyCode::Tab { 1 } else { MovieCategory::TABS.len() - 1 };
                let next = (self.movies.category.index() + step) % MovieCategory::TABS.len();
                self.select_movie_tab(next);
                true
            }
            KeyCode::Enter => {
                if let Some(movie) = self.movies.selected_movie().cloned() {
                    self.navigate_at(Navigation::Player(movie.into()), now);
                }
                true
            }
            KeyCode::Char('/') => {
                self.navigate_at(
                    Navigation::Search {
                        query: None,
                        search_type: SearchType::Movies,
                    },
                    now,
                );
                true
            }
            _ => false,
        }
    }

    /// Pick a genre tab; the tab always applies to the All section
    pub fn select_movie_tab(&mut self, index: usize) {
        self.movies.category = MovieCategory::from_index(index);
        self.movies.section = MovieSection::All;
        self.movies.list.reset();
        self.movies.refresh(&self.catalog);
    }

    fn handle_live_tv_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if self.live_tv.list.handle_nav_key(key.code) {
            return true;
        }
        let tabs = ChannelCategory::TABS.len();
        match key.code {
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                self.select_channel_tab((self.live_tv.category.index() + 1) % tabs);
                true
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.select_channel_tab((self.live_tv.category.index() + tabs - 1) % tabs);
                true
            }
            KeyCode::Enter => {
                if let Some(channel) = self.live_tv.selected_channel().cloned() {
                    self.navigate_at(Navigation::Player(channel.into()), now);
                }
                true
            }
            KeyCode::Char('/') => {
                self.navigate_at(
                    Navigation::Search {
                        query: None,
                        search_type: SearchType::Channels,
                    },
                    now,
                );
                true
            }
            _ => false,
        }
    }

    pub fn select_channel_tab(&mut self, index: usize) {
        self.live_tv.category = ChannelCategory::from_index(index);
        self.live_tv.list.reset();
        self.live_tv.refresh(&self.catalog);
    }

    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if self.search.list.handle_nav_key(key.code) {
            return true;
        }
        match key.code {
            KeyCode::Char('/') => {
                self.input_mode = InputMode::Editing;
                true
            }
            KeyCode::Tab | KeyCode::Char('t') => {
                self.search.search_type = self.search.search_type.next();
                self.search.run(&self.catalog);
                true
            }
            KeyCode::Enter => {
                if let Some(result) = self.search.selected_result().cloned() {
                    self.navigate_at(Navigation::Player(result), now);
                }
                true
            }
            _ => false,
        }
    }

    fn handle_player_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let Some(session) = self.player.as_mut() else {
            return self.back();
        };
        match key.code {
            KeyCode::Char(' ') | KeyCode::Char('p') => session.toggle_play_pause(now),
            KeyCode::Left => session.seek_backward(now),
            KeyCode::Right => session.seek_forward(now),
            KeyCode::Char('f') => session.toggle_fullscreen(now),
            KeyCode::Char('u') => session.toggle_subtitles(now),
            KeyCode::Char('s') => session.toggle_server_menu(now),
            KeyCode::Char('r') => session.retry(now),
            KeyCode::Enter => session.tap(now),
            KeyCode::Char(c @ '1'..='9') => {
                let idx = (c as usize) - ('1' as usize);
                session.select_server(idx, now);
            }
            KeyCode::Char('h') => match session.toggle_favorite(now) {
                Some(true) => self.set_notice("Added to favorites"),
                Some(false) => self.set_notice("Removed from favorites"),
                None => self.set_notice("Favorites are only available for movies"),
            },
            KeyCode::Esc | KeyCode::Backspace => {
                if session.back(now) == BackOutcome::Exit {
                    return self.back();
                }
            }
            KeyCode::Char('q') => self.quit(),
            _ => return false,
        }
        true
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
