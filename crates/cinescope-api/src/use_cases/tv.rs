//! TV show search, discovery and lists.

use std::sync::Arc;

use tracing::instrument;

use super::{DEFAULT_PAGE, page_or_default, require_query};
use crate::error::Result;
use crate::models::{DiscoverTvFilters, SearchFilters, SearchResult, TvShow, TvShowDetails};
use crate::repositories::LocalTvShowRepository;

/// Parameters for a TV show name search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TvShowSearchRequest {
    /// Search text. Must not be blank.
    pub query: String,
    /// Page number, defaults to 1.
    pub page: Option<u32>,
    /// Include adult titles, defaults to `false`.
    pub include_adult: Option<bool>,
    /// First-air-date year.
    pub year: Option<i32>,
    /// Response language.
    pub language: Option<String>,
}

impl TvShowSearchRequest {
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
            year: self.year,
            language: self.language,
            ..SearchFilters::default()
        })
    }
}

/// TV show operations over a [`LocalTvShowRepository`].
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TvShowSearchUseCase<R> {
    repository: Arc<R>,
}

impl<R> Clone for TvShowSearchUseCase<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: LocalTvShowRepository> TvShowSearchUseCase<R> {
    /// Creates a use case over a shared repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Searches TV shows by name.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a blank query, otherwise any repository error.
    #[instrument(skip_all)]
    pub async fn search(&self, request: TvShowSearchRequest) -> Result<SearchResult<TvShow>> {
        let filters = request.into_filters()?;
        self.repository.search_tv_shows(&filters).await
    }

    /// Lists TV shows matching `filters`, defaulting the page.
    ///
    /// # Errors
    ///
    /// Returns any repository error.
    #[instrument(skip_all)]
    pub async fn discover(&self, mut filters: DiscoverTvFilters) -> Result<SearchResult<TvShow>> {
        filters.page.get_or_insert(DEFAULT_PAGE);
        self.repository.discover_tv_shows(&filters).await
    }

    /// Fetches full details for TV show `id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID, otherwise any repository error.
    pub async fn details(&self, id: u64) -> Result<TvShowDetails> {
        self.repository.get_tv_show_details(id).await
    }

    /// Lists popular TV shows.
    ///
    /// # Errors
    ///
    /// Returns any repository error.
    pub async fn popular(&self, page: Option<u32>) -> Result<SearchResult<TvShow>> {
        self.repository
            .get_popular_tv_shows(page_or_default(page))
            .await
    }

    /// Lists top-rated TV shows.
    ///
    /// # Errors
    ///
    /// Returns any repository error.
    pub async fn top_rated(&self, page: Option<u32>) -> Result<SearchResult<TvShow>> {
        self.repository
            .get_top_rated_tv_shows(page_or_default(page))
            .await
    }

    /// Lists shows with an episode airing today.
    ///
    /// # Errors
    ///
    /// Returns any repository error.
    pub async fn airing_today(&self, page: Option<u32>) -> Result<SearchResult<TvShow>> {
        self.repository
            .get_airing_today_tv_shows(page_or_default(page))
            .await
    }

    /// Lists shows airing in the next seven days.
    ///
    /// # Errors
    ///
    /// Returns any repository error.
    pub async fn on_the_air(&self, page: Option<u32>) -> Result<SearchResult<TvShow>> {
        self.repository
            .get_on_the_air_tv_shows(page_or_default(page))
            .await
    }

    /// Lists shows similar to `id`.
    ///
    /// # Errors
    ///
    /// Returns any repository error.
    pub async fn similar(&self, id: u64, page: Option<u32>) -> Result<SearchResult<TvShow>> {
        self.repository
            .get_similar_tv_shows(id, page_or_default(page))
            .await
    }

    /// Lists shows recommended from `id`.
    ///
    /// # Errors
    ///
    /// Returns any repository error.
    pub async fn recommendations(
        &self,
        id: u64,
        page: Option<u32>,
    ) -> Result<SearchResult<TvShow>> {
        self.repository
            .get_recommended_tv_shows(id, page_or_default(page))
            .await
    }
}
