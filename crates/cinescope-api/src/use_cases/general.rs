//! Multi-search and trending.

use std::sync::Arc;

use tracing::instrument;

use super::{DEFAULT_PAGE, page_or_default, require_query};
use crate::error::Result;
use crate::models::{
    MediaType, MultiSearchResult, SearchFilters, SearchResult, TimeWindow, TrendingResult,
};
use crate::repositories::LocalSearchRepository;

/// Parameters for a search across movies, TV shows and people.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiSearchRequest {
    /// Search text. Must not be blank.
    pub query: String,
    /// Page number, defaults to 1.
    pub page: Option<u32>,
    /// Include adult results, defaults to `false`.
    pub include_adult: Option<bool>,
    /// Response language.
    pub language: Option<String>,
}

impl MultiSearchRequest {
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
            language: self.language,
            ..SearchFilters::default()
        })
    }
}

/// Mixed-media operations over a [`LocalSearchRepository`].
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct GeneralSearchUseCase<R> {
    repository: Arc<R>,
}

impl<R> Clone for GeneralSearchUseCase<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: LocalSearchRepository> GeneralSearchUseCase<R> {
    /// Creates a use case over a shared repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Searches movies, TV shows and people at once.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a blank query or an unknown media type,
    /// otherwise any repository error.
    #[instrument(skip_all)]
    pub async fn multi_search(
        &self,
        request: MultiSearchRequest,
    ) -> Result<SearchResult<MultiSearchResult>> {
        let filters = request.into_filters()?;
        self.repository.multi_search(&filters).await
    }

    /// Lists trending entries of `media_type` over `time_window`. The page
    /// defaults to 1.
    ///
    /// # Errors
    ///
    /// Returns any repository error.
    pub async fn trending(
        &self,
        media_type: MediaType,
        time_window: TimeWindow,
        page: Option<u32>,
    ) -> Result<SearchResult<TrendingResult>> {
        self.repository
            .get_trending(media_type, time_window, page_or_default(page))
            .await
    }

    /// Trending movies, over a week unless `time_window` says otherwise.
    ///
    /// # Errors
    ///
    /// Returns any repository error.
    pub async fn get_trending_movies(
        &self,
        time_window: Option<TimeWindow>,
        page: Option<u32>,
    ) -> Result<SearchResult<TrendingResult>> {
        self.trending(MediaType::Movie, time_window.unwrap_or_default(), page)
            .await
    }

    /// Trending TV shows, over a week unless `time_window` says otherwise.
    ///
    /// # Errors
    ///
    /// Returns any repository error.
    pub async fn get_trending_tv_shows(
        &self,
        time_window: Option<TimeWindow>,
        page: Option<u32>,
    ) -> Result<SearchResult<TrendingResult>> {
        self.trending(MediaType::Tv, time_window.unwrap_or_default(), page)
            .await
    }

    /// Trending people, over a week unless `time_window` says otherwise.
    ///
    /// # Errors
    ///
    /// Returns any repository error.
    pub async fn get_trending_people(
        &self,
        time_window: Option<TimeWindow>,
        page: Option<u32>,
    ) -> Result<SearchResult<TrendingResult>> {
        self.trending(MediaType::Person, time_window.unwrap_or_default(), page)
            .await
    }

    /// Trending entries of every type, over a week unless `time_window` says
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns any repository error.
    pub async fn get_trending_all(
        &self,
        time_window: Option<TimeWindow>,
        page: Option<u32>,
    ) -> Result<SearchResult<TrendingResult>> {
        self.trending(MediaType::All, time_window.unwrap_or_default(), page)
            .await
    }
}
