//! Repository trait definitions.
#![allow(clippy::future_not_send)]

use crate::error::Result;
use crate::models::{
    DiscoverMovieFilters, DiscoverTvFilters, MediaType, Movie, MovieDetails, MultiSearchResult,
    Person, PersonDetails, PersonMovieCredits, PersonTvCredits, SearchFilters, SearchResult,
    TimeWindow, TrendingResult, TvShow, TvShowDetails,
};

/// Movie repository.
///
/// Abstracts movie lookups for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(MovieRepository: Send)]
pub trait LocalMovieRepository {
    /// Searches movies by title (`search/movie`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request or mapping fails.
    async fn search_movies(&self, filters: &SearchFilters) -> Result<SearchResult<Movie>>;

    /// Lists movies matching discover filters (`discover/movie`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request or mapping fails.
    async fn discover_movies(&self, filters: &DiscoverMovieFilters)
    -> Result<SearchResult<Movie>>;

    /// Fetches full movie details (`movie/{id}`).
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID, or any request/mapping error.
    async fn get_movie_details(&self, id: u64) -> Result<MovieDetails>;

    /// Lists popular movies (`movie/popular`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request or mapping fails.
    async fn get_popular_movies(&self, page: Option<u32>) -> Result<SearchResult<Movie>>;

    /// Lists top-rated movies (`movie/top_rated`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request or mapping fails.
    async fn get_top_rated_movies(&self, page: Option<u32>) -> Result<SearchResult<Movie>>;

    /// Lists upcoming movies (`movie/upcoming`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request or mapping fails.
    async fn get_upcoming_movies(&self, page: Option<u32>) -> Result<SearchResult<Movie>>;

    /// Lists movies now in theatres (`movie/now_playing`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request or mapping fails.
    async fn get_now_playing_movies(&self, page: Option<u32>) -> Result<SearchResult<Movie>>;

    /// Lists movies similar to `id` (`movie/{id}/similar`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request or mapping fails.
    async fn get_similar_movies(&self, id: u64, page: Option<u32>)
    -> Result<SearchResult<Movie>>;

    /// Lists movies recommended from `id` (`movie/{id}/recommendations`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request or mapping fails.
    async fn get_recommended_movies(
        &self,
        id: u64,
        page: Option<u32>,
    ) -> Result<SearchResult<Movie>>;
}

/// TV show repository.
///
/// Abstracts TV lookups for mock substitution in tests.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TvShowRepository: Send)]
pub trait LocalTvShowRepository {
    /// Searches TV shows by name (`search/tv`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request or mapping fails.
    async fn search_tv_shows(&self, filters: &SearchFilters) -> Result<SearchResult<TvShow>>;

    /// Lists TV shows matching discover filters (`discover/tv`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request or mapping fails.
    async fn discover_tv_shows(&self, filters: &DiscoverTvFilters)
    -> Result<SearchResult<TvShow>>;

    /// Fetches full TV show details (`tv/{id}`).
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID, or any request/mapping error.
    async fn get_tv_show_details(&self, id: u64) -> Result<TvShowDetails>;

    /// Lists popular TV shows (`tv/popular`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request or mapping fails.
    async fn get_popular_tv_shows(&self, page: Option<u32>) -> Result<SearchResult<TvShow>>;

    /// Lists top-rated TV shows (`tv/top_rated`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request or mapping fails.
    async fn get_top_rated_tv_shows(&self, page: Option<u32>) -> Result<SearchResult<TvShow>>;

    /// Lists TV shows airing today (`tv/airing_today`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request or mapping fails.
    async fn get_airing_today_tv_shows(&self, page: Option<u32>)
    -> Result<SearchResult<TvShow>>;

    /// Lists TV shows airing in the next 7 days (`tv/on_the_air`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request or mapping fails.
    async fn get_on_the_air_tv_shows(&self, page: Option<u32>) -> Result<SearchResult<TvShow>>;

    /// Lists TV shows similar to `id` (`tv/{id}/similar`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request or mapping fails.
    async fn get_similar_tv_shows(
        &self,
        id: u64,
        page: Option<u32>,
    ) -> Result<SearchResult<TvShow>>;

    /// Lists TV shows recommended from `id` (`tv/{id}/recommendations`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request or mapping fails.
    async fn get_recommended_tv_shows(
        &self,
        id: u64,
        page: Option<u32>,
    ) -> Result<SearchResult<TvShow>>;
}

/// Person repository.
///
/// Abstracts person lookups for mock substitution in tests.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(PersonRepository: Send)]
pub trait LocalPersonRepository {
    /// Searches people by name (`search/person`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request or mapping fails.
    async fn search_people(&self, filters: &SearchFilters) -> Result<SearchResult<Person>>;

    /// Fetches full person details (`person/{id}`).
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID, or any request/mapping error.
    async fn get_person_details(&self, id: u64) -> Result<PersonDetails>;

    /// Lists popular people (`person/popular`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request or mapping fails.
    async fn get_popular_people(&self, page: Option<u32>) -> Result<SearchResult<Person>>;

    /// Fetches a person's movie credits (`person/{id}/movie_credits`).
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID, or any request/mapping error.
    async fn get_person_movie_credits(&self, id: u64) -> Result<PersonMovieCredits>;

    /// Fetches a person's TV credits (`person/{id}/tv_credits`).
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID, or any request/mapping error.
    async fn get_person_tv_credits(&self, id: u64) -> Result<PersonTvCredits>;
}

/// Mixed-media search repository.
///
/// Abstracts multi-search and trending for mock substitution in tests.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(SearchRepository: Send)]
pub trait LocalSearchRepository {
    /// Searches movies, TV shows and people at once (`search/multi`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or an entry has an unknown
    /// media type.
    async fn multi_search(&self, filters: &SearchFilters)
    -> Result<SearchResult<MultiSearchResult>>;

    /// Lists trending entries (`trending/{media_type}/{time_window}`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or an entry has an unknown
    /// media type.
    async fn get_trending(
        &self,
        media_type: MediaType,
        time_window: TimeWindow,
        page: Option<u32>,
    ) -> Result<SearchResult<TrendingResult>>;
}
