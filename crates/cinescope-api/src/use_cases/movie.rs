//! Movie search, discovery and lists.

use std::sync::Arc;

use tracing::instrument;

use super::{DEFAULT_PAGE, page_or_default, require_query};
use crate::error::Result;
use crate::models::{DiscoverMovieFilters, Movie, MovieDetails, SearchFilters, SearchResult};
use crate::repositories::LocalMovieRepository;

/// Parameters for a movie title search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieSearchRequest {
    /// Search text. Must not be blank.
    pub query: String,
    /// Page number, defaults to 1.
    pub page: Option<u32>,
    /// Include adult titles, defaults to `false`.
    pub include_adult: Option<bool>,
    /// Release year.
    pub year: Option<i32>,
    /// Primary release year.
    pub primary_release_year: Option<i32>,
    /// Response language.
    pub language: Option<String>,
    /// Region (ISO 3166-1).
    pub region: Option<String>,
}

impl MovieSearchRequest {
    /// Creates a request for `query` with every option unset.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    fn into_filters(self) -> Result<SearchFilters> {
        require_query(&self.query)?;
        Ok(SearchFilters {
            query: Some(self.query),
            page: Some(self.page.unwrap_or(DEFAULT_PAGE)),
            include_adult: Some(self.include_adult.unwrap_or(false)),
            region: self.region,
            year: self.year,
            primary_release_year: self.primary_release_year,
            language: self.language,
        })
    }
}

/// Movie operations over a [`LocalMovieRepository`].
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct MovieSearchUseCase<R> {
    repository: Arc<R>,
}

impl<R> Clone for MovieSearchUseCase<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: LocalMovieRepository> MovieSearchUseCase<R> {
    /// Creates a use case over a shared repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Searches movies by title.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a blank query, otherwise any repository error.
    #[instrument(skip_all)]
    pub async fn search(&self, request: MovieSearchRequest) -> Result<SearchResult<Movie>> {
        let filters = request.into_filters()?;
        self.repository.search_movies(&filters).await
    }

    /// Lists movies matching `filters`, defaulting page and adult content.
    ///
    /// # Errors
    ///
    /// Returns any repository error.
    #[instrument(skip_all)]
    pub async fn discover(&self, mut filters: DiscoverMovieFilters) -> Result<SearchResult<Movie>> {
        filters.page.get_or_insert(DEFAULT_PAGE);
        filters.include_adult.get_or_insert(false);
        self.repository.discover_movies(&filters).await
    }

    /// Fetches full details for movie `id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID, otherwise any repository error.
    pub async fn details(&self, id: u64) -> Result<MovieDetails> {
        self.repository.get_movie_details(id).await
    }

    /// Lists popular movies.
    ///
    /// # Errors
    ///
    /// Returns any repository error.
    pub async fn popular(&self, page: Option<u32>) -> Result<SearchResult<Movie>> {
        self.repository.get_popular_movies(page_or_default(page)).await
    }

    /// Lists top-rated movies.
    ///
    /// # Errors
    ///
    /// Returns any repository error.
    pub async fn top_rated(&self, page: Option<u32>) -> Result<SearchResult<Movie>> {
        self.repository
            .get_top_rated_movies(page_or_default(page))
            .await
    }

    /// Lists upcoming movies.
    ///
    /// # Errors
    ///
    /// Returns any repository error.
    pub async fn upcoming(&self, page: Option<u32>) -> Result<SearchResult<Movie>> {
        self.repository
            .get_upcoming_movies(page_or_default(page))
            .await
    }

    /// Lists movies now in theatres.
    ///
    /// # Errors
    ///
    /// Returns any repository error.
    pub async fn now_playing(&self, page: Option<u32>) -> Result<SearchResult<Movie>> {
        self.repository
            .get_now_playing_movies(page_or_default(page))
            .await
    }

    /// Lists movies similar to `id`.
    ///
    /// # Errors
    ///
    /// Returns any repository error.
    pub async fn similar(&self, id: u64, page: Option<u32>) -> Result<SearchResult<Movie>> {
        self.repository
            .get_similar_movies(id, page_or_default(page))
            .await
    }

    /// Lists movies recommended from `id`.
    ///
    /// # Errors
    ///
    /// Returns any repository error.
    pub async fn recommendations(&self, id: u64, page: Option<u32>) -> Result<SearchResult<Movie>> {
        self.repository
            .get_recommended_movies(id, page_or_default(page))
            .await
    }
}
