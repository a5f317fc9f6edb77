//! Data records for cinemabox
//!
//! Plain value types shared by the catalog, the screens and the player:
//! - **Movie**: a film with up to two stream slots and derived subtitle URLs
//! - **TvChannel**: a live channel with a single HLS stream
//! - **StreamingServer**: one playable URL derived from a record's slots
//!
//! Records are passed between screens by value and serialize with serde.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Streaming Servers
// =============================================================================

/// A playable source derived from a record's stream slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamingServer {
    pub name: String,
    pub url: String,
    pub quality: String,
}

impl StreamingServer {
    pub fn new(name: impl Into<String>, url: impl Into<String>, quality: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            quality: quality.into(),
        }
    }
}

impl fmt::Display for StreamingServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.quality)
    }
}

/// Treat empty strings the same as a missing slot
fn non_empty(url: Option<String>) -> Option<String> {
    url.filter(|u| !u.trim().is_empty())
}

// =============================================================================
// Movie
// =============================================================================

/// A movie record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title_arabic: String,
    pub title_english: String,
    pub description: String,
    pub poster_url: String,
    pub backdrop_url: Option<String>,
    pub year: u16,
    pub rating: f32,
    pub duration: String,
    pub genre: String,
    /// Primary streaming server
    pub stream_url_1: Option<String>,
    /// Secondary streaming server
    pub stream_url_2: Option<String>,
    /// Arabic subtitles, derived from `id`
    pub subtitle_urls: Vec<String>,
    pub cast: Vec<String>,
    pub director: Option<String>,
    pub trailer_url: Option<String>,
    pub is_favorite: bool,
    pub country: Option<String>,
    pub language: Option<String>,
}

impl Movie {
    /// Build a movie from its listing fields; subtitles are derived from the id
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        title_arabic: impl Into<String>,
        title_english: impl Into<String>,
        description: impl Into<String>,
        poster_url: impl Into<String>,
        year: u16,
        rating: f32,
        duration: impl Into<String>,
        genre: impl Into<String>,
        stream_url_1: Option<String>,
        stream_url_2: Option<String>,
    ) -> Self {
        let id = id.into();
        let subtitle_urls = Self::subtitle_urls_for(&id);
        Self {
            id,
            title_arabic: title_arabic.into(),
            title_english: title_english.into(),
            description: description.into(),
            poster_url: poster_url.into(),
            backdrop_url: None,
            year,
            rating,
            duration: duration.into(),
            genre: genre.into(),
            stream_url_1: non_empty(stream_url_1),
            stream_url_2: non_empty(stream_url_2),
            subtitle_urls,
            cast: Vec::new(),
            director: None,
            trailer_url: None,
            is_favorite: false,
            country: None,
            language: None,
        }
    }

    /// Deterministic Arabic subtitle URLs for a movie id
    pub fn subtitle_urls_for(id: &str) -> Vec<String> {
        vec![
            format!("https://dl.opensubtitles.org/ar/download/sub/{}/ar", id),
            format!("https://subtitle-api.com/api/files/arabic/{}.srt", id),
        ]
    }

    /// Arabic title if available, otherwise English
    pub fn title(&self) -> &str {
        if self.title_arabic.is_empty() {
            &self.title_english
        } else {
            &self.title_arabic
        }
    }

    /// Title in the configured display language, falling back to the other one
    pub fn display_title(&self, prefer_english: bool) -> &str {
        if prefer_english && !self.title_english.is_empty() {
            &self.title_english
        } else {
            self.title()
        }
    }

    pub fn formatted_rating(&self) -> String {
        format!("{:.1}", self.rating)
    }

    pub fn year_string(&self) -> String {
        self.year.to_string()
    }

    /// At least one stream slot is populated
    pub fn has_valid_stream_urls(&self) -> bool {
        self.stream_url_1.is_some() || self.stream_url_2.is_some()
    }

    /// First available stream URL, slot 1 before slot 2
    pub fn best_quality_url(&self) -> Option<&str> {
        self.stream_url_1
            .as_deref()
            .or(self.stream_url_2.as_deref())
    }

    /// One server per populated slot, in slot order
    pub fn streaming_servers(&self) -> Vec<StreamingServer> {
        let mut servers = Vec::with_capacity(2);
        if let Some(url) = &self.stream_url_1 {
            servers.push(StreamingServer::new("Server 1", url.clone(), "1080p"));
        }
        if let Some(url) = &self.stream_url_2 {
            servers.push(StreamingServer::new("Server 2", url.clone(), "720p"));
        }
        servers
    }

    /// Subtitle track attached on load
    pub fn arabic_subtitle_url(&self) -> Option<&str> {
        self.subtitle_urls.first().map(String::as_str)
    }

    pub fn toggle_favorite(&mut self) {
        self.is_favorite = !self.is_favorite;
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    pub fn with_cast(mut self, cast: &[&str]) -> Self {
        self.cast = cast.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_origin(mut self, country: impl Into<String>, language: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self.language = Some(language.into());
        self
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {} - ⭐ {}",
            self.title_english,
            self.year,
            self.genre,
            self.formatted_rating()
        )
    }
}

// =============================================================================
// Live TV
// =============================================================================

/// A live TV channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TvChannel {
    pub id: String,
    pub name_arabic: String,
    pub name_english: String,
    pub stream_url: String,
    pub logo_url: String,
    pub category: String,
    pub description: String,
}

impl TvChannel {
    pub fn new(
        id: impl Into<String>,
        name_arabic: impl Into<String>,
        name_english: impl Into<String>,
        stream_url: impl Into<String>,
        logo_url: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name_arabic: name_arabic.into(),
            name_english: name_english.into(),
            stream_url: stream_url.into(),
            logo_url: logo_url.into(),
            category: category.into(),
            description: description.into(),
        }
    }

    pub fn title(&self) -> &str {
        if self.name_arabic.is_empty() {
            &self.name_english
        } else {
            &self.name_arabic
        }
    }

    pub fn display_title(&self, prefer_english: bool) -> &str {
        if prefer_english && !self.name_english.is_empty() {
            &self.name_english
        } else {
            self.title()
        }
    }

    /// A channel has a single live server when its URL is set
    pub fn streaming_servers(&self) -> Vec<StreamingServer> {
        if self.stream_url.trim().is_empty() {
            Vec::new()
        } else {
            vec![StreamingServer::new("Live", self.stream_url.clone(), "auto")]
        }
    }
}

impl fmt::Display for TvChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name_english, self.category)
    }
}

// =============================================================================
// Playable records
// =============================================================================

/// Anything the player can open
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Playable {
    Movie(Movie),
    Channel(TvChannel),
}

impl Playable {
    pub fn id(&self) -> &str {
        match self {
            Playable::Movie(m) => &m.id,
            Playable::Channel(c) => &c.id,
        }
    }

    pub fn display_title(&self, prefer_english: bool) -> &str {
        match self {
            Playable::Movie(m) => m.display_title(prefer_english),
            Playable::Channel(c) => c.display_title(prefer_english),
        }
    }

    pub fn streaming_servers(&self) -> Vec<StreamingServer> {
        match self {
            Playable::Movie(m) => m.streaming_servers(),
            Playable::Channel(c) => c.streaming_servers(),
        }
    }

    /// Channels carry no subtitles
    pub fn subtitle_url(&self) -> Option<&str> {
        match self {
            Playable::Movie(m) => m.arabic_subtitle_url(),
            Playable::Channel(_) => None,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Playable::Channel(_))
    }
}

impl From<Movie> for Playable {
    fn from(movie: Movie) -> Self {
        Playable::Movie(movie)
    }
}

impl From<TvChannel> for Playable {
    fn from(channel: TvChannel) -> Self {
        Playable::Channel(channel)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(slot1: Option<&str>, slot2: Option<&str>) -> Movie {
        Movie::new(
            "42",
            "العراب",
            "The Godfather",
            "",
            "https://image.tmdb.org/t/p/w500/x.jpg",
            1972,
            9.2,
            "175 min",
            "Crime/Drama",
            slot1.map(String::from),
            slot2.map(String::from),
        )
    }

    #[test]
    fn test_subtitles_derived_from_id() {
        let m = movie(Some("https://a"), None);
        assert_eq!(
            m.subtitle_urls,
            vec![
                "https://dl.opensubtitles.org/ar/download/sub/42/ar".to_string(),
                "https://subtitle-api.com/api/files/arabic/42.srt".to_string(),
            ]
        );
        assert_eq!(
            m.arabic_subtitle_url(),
            Some("https://dl.opensubtitles.org/ar/download/sub/42/ar")
        );
    }

    #[test]
    fn test_title_prefers_arabic() {
        let mut m = movie(None, None);
        assert_eq!(m.title(), "العراب");
        assert_eq!(m.display_title(true), "The Godfather");

        m.title_arabic.clear();
        assert_eq!(m.title(), "The Godfather");
    }

    #[test]
    fn test_best_quality_url_slot_priority() {
        assert_eq!(movie(Some("https://a"), Some("https://b")).best_quality_url(), Some("https://a"));
        assert_eq!(movie(None, Some("https://b")).best_quality_url(), Some("https://b"));
        assert_eq!(movie(None, None).best_quality_url(), None);
    }

    #[test]
    fn test_empty_slot_is_absent() {
        let m = movie(Some(""), Some("https://b"));
        assert!(m.stream_url_1.is_none());
        assert_eq!(m.streaming_servers().len(), 1);
        assert!(!movie(Some(" "), None).has_valid_stream_urls());
    }

    #[test]
    fn test_servers_in_slot_order() {
        let servers = movie(Some("https://a"), Some("https://b")).streaming_servers();
        assert_eq!(servers.len(), 2);
        assert_eq!(servers[0], StreamingServer::new("Server 1", "https://a", "1080p"));
        assert_eq!(servers[1], StreamingServer::new("Server 2", "https://b", "720p"));
    }

    #[test]
    fn test_formatted_rating() {
        let mut m = movie(None, None);
        m.rating = 8.0;
        assert_eq!(m.formatted_rating(), "8.0");
        assert_eq!(m.year_string(), "1972");
    }

    #[test]
    fn test_toggle_favorite() {
        let mut m = movie(None, None);
        assert!(!m.is_favorite);
        m.toggle_favorite();
        assert!(m.is_favorite);
        m.toggle_favorite();
        assert!(!m.is_favorite);
    }

    #[test]
    fn test_channel_single_live_server() {
        let ch = TvChannel::new("1", "الجزيرة", "Al Jazeera", "https://x/index.m3u8", "", "News", "");
        let servers = ch.streaming_servers();
        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].url, "https://x/index.m3u8");

        let dead = TvChannel { stream_url: String::new(), ..ch };
        assert!(dead.streaming_servers().is_empty());
    }

    #[test]
    fn test_playable_serde_tagged() {
        let ch = TvChannel::new("1", "", "Al Jazeera", "https://x", "", "News", "");
        let json = serde_json::to_value(Playable::from(ch.clone())).unwrap();
        assert_eq!(json["kind"], "channel");

        let back: Playable = serde_json::from_value(json).unwrap();
        assert_eq!(back, Playable::Channel(ch));
    }

    #[test]
    fn test_movie_display() {
        assert_eq!(
            movie(None, None).to_string(),
            "The Godfather (1972) - Crime/Drama - ⭐ 9.2"
        );
    }
}
