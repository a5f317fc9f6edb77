//! Category tabs and list filtering
//!
//! Both screens show a row of tabs; tab 0 is always "All". Selecting a tab
//! filters the source list without reordering it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{Movie, TvChannel};

/// A fixed row of category tabs
pub trait TabCategory: Copy + PartialEq + fmt::Display + 'static {
    /// Tabs in display order; index 0 is the unfiltered tab
    const TABS: &'static [Self];

    fn label(self) -> &'static str;

    /// Map a tab index to its category; indices past the end mean "All"
    fn from_index(index: usize) -> Self {
        Self::TABS.get(index).copied().unwrap_or(Self::TABS[0])
    }

    fn index(self) -> usize {
        Self::TABS.iter().position(|c| *c == self).unwrap_or(0)
    }

    fn is_all(self) -> bool {
        self.index() == 0
    }
}

/// Error returned when a category label is not in the tab table
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

fn parse_label<C: TabCategory>(s: &str) -> Result<C, UnknownCategory> {
    let wanted = s.trim();
    C::TABS
        .iter()
        .copied()
        .find(|c| c.label().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| UnknownCategory(s.to_string()))
}

// =============================================================================
// Movie categories
// =============================================================================

/// Movie genre tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MovieCategory {
    #[default]
    All,
    Action,
    Comedy,
    Drama,
    Horror,
    Romance,
    SciFi,
    Thriller,
    Animation,
}

impl TabCategory for MovieCategory {
    const TABS: &'static [Self] = &[
        MovieCategory::All,
        MovieCategory::Action,
        MovieCategory::Comedy,
        MovieCategory::Drama,
        MovieCategory::Horror,
        MovieCategory::Romance,
        MovieCategory::SciFi,
        MovieCategory::Thriller,
        MovieCategory::Animation,
    ];

    fn label(self) -> &'static str {
        match self {
            MovieCategory::All => "All",
            MovieCategory::Action => "Action",
            MovieCategory::Comedy => "Comedy",
            MovieCategory::Drama => "Drama",
            MovieCategory::Horror => "Horror",
            MovieCategory::Romance => "Romance",
            MovieCategory::SciFi => "Sci-Fi",
            MovieCategory::Thriller => "Thriller",
            MovieCategory::Animation => "Animation",
        }
    }
}

impl MovieCategory {
    /// Case-insensitive substring match against the genre string
    pub fn matches(self, movie: &Movie) -> bool {
        if self.is_all() {
            return true;
        }
        movie
            .genre
            .to_lowercase()
            .contains(&self.label().to_lowercase())
    }
}

impl fmt::Display for MovieCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MovieCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s)
    }
}

// =============================================================================
// Channel categories
// =============================================================================

/// Live TV tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChannelCategory {
    #[default]
    All,
    News,
    Sports,
    Entertainment,
    Kids,
    Music,
    Movies,
    Series,
}

impl TabCategory for ChannelCategory {
    const TABS: &'static [Self] = &[
        ChannelCategory::All,
        ChannelCategory::News,
        ChannelCategory::Sports,
        ChannelCategory::Entertainment,
        ChannelCategory::Kids,
        ChannelCategory::Music,
        ChannelCategory::Movies,
        ChannelCategory::Series,
    ];

    fn label(self) -> &'static str {
        match self {
            ChannelCategory::All => "All",
            ChannelCategory::News => "News",
            ChannelCategory::Sports => "Sports",
            ChannelCategory::Entertainment => "Entertainment",
            ChannelCategory::Kids => "Kids",
            ChannelCategory::Music => "Music",
            ChannelCategory::Movies => "Movies",
            ChannelCategory::Series => "Series",
        }
    }
}

impl ChannelCategory {
    /// Exact, case-sensitive match against the channel category
    pub fn matches(self, channel: &TvChannel) -> bool {
        self.is_all() || channel.category == self.label()
    }
}

impl fmt::Display for ChannelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChannelCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s)
    }
}

// =============================================================================
// Filtering
// =============================================================================

pub fn filter_movies(movies: &[Movie], category: MovieCategory) -> Vec<Movie> {
    movies
        .iter()
        .filter(|m| category.matches(m))
        .cloned()
        .collect()
}

pub fn filter_channels(channels: &[TvChannel], category: ChannelCategory) -> Vec<TvChannel> {
    channels
        .iter()
        .filter(|c| category.matches(c))
        .cloned()
        .collect()
}

/// Filter movies by tab index; an unknown tab keeps every movie
pub fn filter_movies_by_tab(movies: &[Movie], tab: usize) -> Vec<Movie> {
    filter_movies(movies, MovieCategory::from_index(tab))
}

/// Filter channels by tab index; an unknown tab matches no channel
pub fn filter_channels_by_tab(channels: &[TvChannel], tab: usize) -> Vec<TvChannel> {
    match ChannelCategory::TABS.get(tab) {
        Some(category) => filter_channels(channels, *category),
        None => Vec::new(),
    }
}
