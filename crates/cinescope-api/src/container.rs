//! `AppContainer` - wires configuration, transport, client, repositories and
//! use cases.
//!
//! Everything is built once in [`AppContainer::build`] and shared through
//! `Arc`; building performs no I/O.

use std::sync::Arc;

use tracing::instrument;

use crate::client::TmdbClient;
use crate::config::TmdbConfig;
use crate::error::{Result, TmdbError};
use crate::repositories::{
    TmdbMovieRepository, TmdbPersonRepository, TmdbSearchRepository, TmdbTvShowRepository,
};
use crate::transport::HttpTransport;
use crate::use_cases::{
    GeneralSearchUseCase, MovieSearchUseCase, PersonSearchUseCase, TvShowSearchUseCase,
};

/// Fully assembled TMDB stack.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct AppContainer {
    config: Arc<TmdbConfig>,
    client: Arc<TmdbClient>,
    movie_repository: Arc<TmdbMovieRepository>,
    tv_show_repository: Arc<TmdbTvShowRepository>,
    person_repository: Arc<TmdbPersonRepository>,
    search_repository: Arc<TmdbSearchRepository>,
    movies: Arc<MovieSearchUseCase<TmdbMovieRepository>>,
    tv_shows: Arc<TvShowSearchUseCase<TmdbTvShowRepository>>,
    people: Arc<PersonSearchUseCase<TmdbPersonRepository>>,
    general: Arc<GeneralSearchUseCase<TmdbSearchRepository>>,
}

impl AppContainer {
    /// Builds the stack from resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TmdbError::Configuration`] if the API key is empty or the
    /// HTTP client cannot be created.
    #[instrument(skip_all)]
    pub fn build(config: TmdbConfig) -> Result<Self> {
        let transport = HttpTransport::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TmdbError::Configuration(e.message))?;
        let client = Arc::new(TmdbClient::from_config(&config, transport)?);

        let movie_repository = Arc::new(TmdbMovieRepository::new(Arc::clone(&client)));
        let tv_show_repository = Arc::new(TmdbTvShowRepository::new(Arc::clone(&client)));
        let person_repository = Arc::new(TmdbPersonRepository::new(Arc::clone(&client)));
        let search_repository = Arc::new(TmdbSearchRepository::new(Arc::clone(&client)));

        let movies = Arc::new(MovieSearchUseCase::new(Arc::clone(&movie_repository)));
        let tv_shows = Arc::new(TvShowSearchUseCase::new(Arc::clone(&tv_show_repository)));
        let people = Arc::new(PersonSearchUseCase::new(Arc::clone(&person_repository)));
        let general = Arc::new(GeneralSearchUseCase::new(Arc::clone(&search_repository)));

        tracing::debug!(base_url = %config.base_url, "TMDB container built");

        Ok(Self {
            config: Arc::new(config),
            client,
            movie_repository,
            tv_show_repository,
            person_repository,
            search_repository,
            movies,
            tv_shows,
            people,
            general,
        })
    }

    /// Loads configuration from the environment, then builds the stack.
    ///
    /// # Errors
    ///
    /// Returns [`TmdbError::Configuration`] before any network object is
    /// created if `TMDB_API_KEY` is missing or a value fails to parse.
    pub fn from_env() -> Result<Self> {
        Self::build(TmdbConfig::from_env()?)
    }

    /// Resolved configuration.
    #[must_use]
    pub fn config(&self) -> &TmdbConfig {
        &self.config
    }

    /// Shared API client.
    #[must_use]
    pub fn client(&self) -> Arc<TmdbClient> {
        Arc::clone(&self.client)
    }

    /// Movie repository.
    #[must_use]
    pub fn movie_repository(&self) -> Arc<TmdbMovieRepository> {
        Arc::clone(&self.movie_repository)
    }

    /// TV show repository.
    #[must_use]
    pub fn tv_show_repository(&self) -> Arc<TmdbTvShowRepository> {
        Arc::clone(&self.tv_show_repository)
    }

    /// Person repository.
    #[must_use]
    pub fn person_repository(&self) -> Arc<TmdbPersonRepository> {
        Arc::clone(&self.person_repository)
    }

    /// Multi-search and trending repository.
    #[must_use]
    pub fn search_repository(&self) -> Arc<TmdbSearchRepository> {
        Arc::clone(&self.search_repository)
    }

    /// Movie use case.
    #[must_use]
    pub fn movies(&self) -> Arc<MovieSearchUseCase<TmdbMovieRepository>> {
        Arc::clone(&self.movies)
    }

    /// TV show use case.
    #[must_use]
    pub fn tv_shows(&self) -> Arc<TvShowSearchUseCase<TmdbTvShowRepository>> {
        Arc::clone(&self.tv_shows)
    }

    /// Person use case.
    #[must_use]
    pub fn people(&self) -> Arc<PersonSearchUseCase<TmdbPersonRepository>> {
        Arc::clone(&self.people)
    }

    /// Multi-search and trending use case.
    #[must_use]
    pub fn general(&self) -> Arc<GeneralSearchUseCase<TmdbSearchRepository>> {
        Arc::clone(&self.general)
    }
}
