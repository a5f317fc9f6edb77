//! In-memory content catalog
//!
//! - `movies` - movie rows (popular, recent, top rated, all)
//! - `channels` - live TV channels
//! - `filter` - category tabs and filtering

pub mod channels;
pub mod filter;
pub mod movies;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{Movie, Playable, TvChannel};

pub use channels::{find_channel, load_channels};
pub use filter::{
    filter_channels, filter_channels_by_tab, filter_movies, filter_movies_by_tab,
    ChannelCategory, MovieCategory, TabCategory, UnknownCategory,
};
pub use movies::MovieCatalog;

/// Which records a search covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    #[default]
    All,
    Movies,
    Channels,
}

impl SearchType {
    pub fn label(self) -> &'static str {
        match self {
            SearchType::All => "all",
            SearchType::Movies => "movies",
            SearchType::Channels => "channels",
        }
    }

    /// Cycle all -> movies -> channels
    pub fn next(self) -> Self {
        match self {
            SearchType::All => SearchType::Movies,
            SearchType::Movies => SearchType::Channels,
            SearchType::Channels => SearchType::All,
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SearchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(SearchType::All),
            "movies" | "movie" => Ok(SearchType::Movies),
            "channels" | "channel" | "live" => Ok(SearchType::Channels),
            other => Err(format!("unknown search type '{}'", other)),
        }
    }
}

/// The whole catalog as loaded at startup
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub movies: MovieCatalog,
    pub channels: Vec<TvChannel>,
}

impl Catalog {
    pub fn load() -> Self {
        Self {
            movies: MovieCatalog::load(),
            channels: load_channels(),
        }
    }

    pub fn movie(&self, id: &str) -> Option<&Movie> {
        self.movies.find(id)
    }

    pub fn channel(&self, id: &str) -> Option<&TvChannel> {
        find_channel(&self.channels, id)
    }

    /// Case-insensitive title search over either title language.
    /// Movies come before channels; an empty query matches nothing.
    pub fn search(&self, query: &str, kind: SearchType) -> Vec<Playable> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut results = Vec::new();
        if kind != SearchType::Channels {
            results.extend(
                self.movies
                    .all
                    .iter()
                    .filter(|m| title_matches(&needle, &m.title_arabic, &m.title_english))
                    .cloned()
                    .map(Playable::Movie),
            );
        }
        if kind != SearchType::Movies {
            results.extend(
                self.channels
                    .iter()
                    .filter(|c| title_matches(&needle, &c.name_arabic, &c.name_english))
                    .cloned()
                    .map(Playable::Channel),
            );
        }
        results
    }
}

fn title_matches(needle: &str, arabic: &str, english: &str) -> bool {
    arabic.to_lowercase().contains(needle) || english.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_both_languages() {
        let catalog = Catalog::load();
        let english = catalog.search("godfather", SearchType::Movies);
        assert_eq!(english.len(), 1);
        assert_eq!(english[0].id(), "7");

        let arabic = catalog.search("العراب", SearchType::All);
        assert_eq!(arabic.len(), 1);
    }

    #[test]
    fn test_search_type_restricts_records() {
        let catalog = Catalog::load();
        // "MBC" only names channels
        assert!(catalog.search("mbc", SearchType::Movies).is_empty());
        let channels = catalog.search("mbc", SearchType::Channels);
        assert!(!channels.is_empty());
        assert!(channels.iter().all(Playable::is_live));
    }

    #[test]
    fn test_search_empty_query() {
        let catalog = Catalog::load();
        assert!(catalog.search("   ", SearchType::All).is_empty());
    }

    #[test]
    fn test_search_type_parse_and_cycle() {
        assert_eq!("Channels".parse::<SearchType>(), Ok(SearchType::Channels));
        assert!("books".parse::<SearchType>().is_err());
        assert_eq!(SearchType::Channels.next(), SearchType::All);
    }
}
