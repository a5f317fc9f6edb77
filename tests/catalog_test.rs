//! Catalog tests for cinemabox
//!
//! Covers the built-in listings, category tabs and title search.

use cinemabox::catalog::{
    filter_channels, filter_channels_by_tab, filter_movies, filter_movies_by_tab, load_channels,
    Catalog, ChannelCategory, MovieCategory, SearchType, TabCategory,
};
use cinemabox::models::{Movie, Playable};

fn movie_with_genre(id: &str, genre: &str) -> Movie {
    Movie::new(id, "", id, "", "", 2020, 7.0, "", genre, None, None)
}

// =============================================================================
// LISTINGS
// =============================================================================

#[test]
fn test_every_movie_is_playable() {
    let catalog = Catalog::load();
    assert!(!catalog.movies.all.is_empty());
    for movie in &catalog.movies.all {
        assert!(movie.has_valid_stream_urls(), "{} has no stream", movie.id);
        assert_eq!(movie.streaming_servers().len(), 2);
        assert_eq!(movie.subtitle_urls.len(), 2);
    }
}

#[test]
fn test_all_row_contains_every_section() {
    let catalog = Catalog::load();
    for movie in catalog
        .movies
        .popular
        .iter()
        .chain(&catalog.movies.recent)
        .chain(&catalog.movies.top_rated)
    {
        assert!(catalog.movies.all.contains(movie), "{} missing from all", movie.id);
    }
}

#[test]
fn test_featured_is_first_popular() {
    let catalog = Catalog::load();
    assert_eq!(catalog.movies.featured(), catalog.movies.popular.first());
}

#[test]
fn test_channel_list() {
    let channels = load_channels();
    assert_eq!(channels.len(), 29);
    assert!(channels.iter().all(|c| c.stream_url.ends_with(".m3u8")));
    assert_eq!(filter_channels(&channels, ChannelCategory::News).len(), 5);
    assert_eq!(filter_channels(&channels, ChannelCategory::Series).len(), 3);
}

#[test]
fn test_channel_lookup() {
    let catalog = Catalog::load();
    let ch = catalog.channel("1").expect("channel 1");
    assert_eq!(ch.name_english, "Al Jazeera");
    assert!(catalog.channel("999").is_none());
}

// =============================================================================
// CATEGORY TABS
// =============================================================================

#[test]
fn test_tab_zero_is_unfiltered() {
    let catalog = Catalog::load();
    assert_eq!(filter_movies_by_tab(&catalog.movies.all, 0), catalog.movies.all);
    assert_eq!(filter_channels_by_tab(&catalog.channels, 0), catalog.channels);
}

#[test]
fn test_out_of_range_movie_tab_keeps_all() {
    let catalog = Catalog::load();
    assert_eq!(filter_movies_by_tab(&catalog.movies.all, 99), catalog.movies.all);
}

#[test]
fn test_out_of_range_channel_tab_is_empty() {
    let catalog = Catalog::load();
    assert_eq!(filter_channels_by_tab(&catalog.channels, 7).len(), 3);
    assert!(filter_channels_by_tab(&catalog.channels, 8).is_empty());
    assert!(filter_channels_by_tab(&catalog.channels, 42).is_empty());
}

#[test]
fn test_genre_match_is_case_insensitive_substring() {
    let movies = vec![
        movie_with_genre("a", "Action/Adventure"),
        movie_with_genre("b", "Crime/Drama"),
        movie_with_genre("c", "sci-fi/thriller"),
    ];
    let action = filter_movies(&movies, MovieCategory::Action);
    assert_eq!(action.len(), 1);
    assert_eq!(action[0].id, "a");

    let scifi = filter_movies(&movies, MovieCategory::SciFi);
    assert_eq!(scifi.len(), 1);
    assert_eq!(scifi[0].id, "c");
}

#[test]
fn test_filter_preserves_order() {
    let movies = vec![
        movie_with_genre("3", "Drama"),
        movie_with_genre("1", "Comedy"),
        movie_with_genre("2", "Drama/Romance"),
    ];
    let ids: Vec<_> = filter_movies(&movies, MovieCategory::Drama)
        .into_iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(ids, vec!["3", "2"]);
}

#[test]
fn test_tab_indices() {
    assert_eq!(MovieCategory::from_index(1), MovieCategory::Action);
    assert_eq!(ChannelCategory::from_index(2), ChannelCategory::Sports);
    assert_eq!(ChannelCategory::Kids.index(), 4);
    assert!(MovieCategory::All.is_all());
    assert_eq!(MovieCategory::TABS.len(), 9);
    assert_eq!(ChannelCategory::TABS.len(), 8);
}

#[test]
fn test_category_labels_parse() {
    assert_eq!("sci-fi".parse::<MovieCategory>(), Ok(MovieCategory::SciFi));
    assert_eq!(" NEWS ".parse::<ChannelCategory>(), Ok(ChannelCategory::News));
    let err = "westerns".parse::<MovieCategory>().unwrap_err();
    assert_eq!(err.to_string(), "unknown category 'westerns'");
}

// =============================================================================
// SEARCH
// =============================================================================

#[test]
fn test_search_english_title_case_insensitive() {
    let catalog = Catalog::load();
    let results = catalog.search("AL JAZEERA", SearchType::All);
    assert!(results
        .iter()
        .any(|r| matches!(r, Playable::Channel(c) if c.id == "1")));
}

#[test]
fn test_search_type_restricts_records() {
    let catalog = Catalog::load();
    let movies = catalog.search("a", SearchType::Movies);
    let channels = catalog.search("a", SearchType::Channels);
    assert!(!movies.is_empty());
    assert!(!channels.is_empty());
    assert!(movies.iter().all(|r| !r.is_live()));
    assert!(channels.iter().all(Playable::is_live));
}

#[test]
fn test_search_movies_before_channels() {
    let catalog = Catalog::load();
    let results = catalog.search("a", SearchType::All);
    let first_channel = results.iter().position(Playable::is_live);
    if let Some(pos) = first_channel {
        assert!(results[pos..].iter().all(Playable::is_live));
    }
}

#[test]
fn test_search_blank_query_returns_nothing() {
    let catalog = Catalog::load();
    assert!(catalog.search("   ", SearchType::All).is_empty());
    assert!(catalog.search("zzzzqqqq", SearchType::All).is_empty());
}
