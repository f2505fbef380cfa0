//! Paginated and mixed-media result types.

use serde::{Deserialize, Serialize};

use super::filters::MediaType;
use super::movie::Movie;
use super::person::Person;
use super::tv::TvShow;

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<T> {
    /// Page number (1-based).
    pub page: u32,
    /// Results on this page.
    pub results: Vec<T>,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of results.
    pub total_results: u32,
}

impl<T> SearchResult<T> {
    /// Returns `true` when there is a page after this one.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Entry of a multi-search or trending response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mediaType", rename_all = "lowercase")]
pub enum MediaResult {
    /// A movie.
    Movie(Movie),
    /// A TV show.
    Tv(TvShow),
    /// A person.
    Person(Person),
}

/// Entry of a `search/multi` response.
pub type MultiSearchResult = MediaResult;

/// Entry of a `trending/{media_type}/{time_window}` response.
pub type TrendingResult = MediaResult;

impl MediaResult {
    /// TMDB ID of the entry.
    #[must_use]
    pub const fn id(&self) -> u64 {
        match self {
            Self::Movie(m) => m.id,
            Self::Tv(t) => t.id,
            Self::Person(p) => p.id,
        }
    }

    /// Title for movies, name for TV shows and people.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Movie(m) => &m.title,
            Self::Tv(t) => &t.name,
            Self::Person(p) => &p.name,
        }
    }

    /// Media type of the entry.
    #[must_use]
    pub const fn media_type(&self) -> MediaType {
        match self {
            Self::Movie(_) => MediaType::Movie,
            Self::Tv(_) => MediaType::Tv,
            Self::Person(_) => MediaType::Person,
        }
    }

    /// Popularity score of the entry.
    #[must_use]
    pub const fn popularity(&self) -> f64 {
        match self {
            Self::Movie(m) => m.popularity,
            Self::Tv(t) => t.popularity,
            Self::Person(p) => p.popularity,
        }
    }
}
