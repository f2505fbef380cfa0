//! `TmdbMovieRepository` - movie endpoints.

use std::sync::Arc;

use tracing::instrument;

use super::api::LocalMovieRepository;
use super::schema::TmdbPage;
use super::schema::movie::{TmdbMovie, TmdbMovieDetails, map_movie, map_movie_details};
use super::{log_failure, page_query};
use crate::client::TmdbClient;
use crate::error::Result;
use crate::models::{DiscoverMovieFilters, Movie, MovieDetails, SearchFilters, SearchResult};
use crate::query::QueryParams;

/// Movie repository backed by the TMDB API.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbMovieRepository {
    client: Arc<TmdbClient>,
}

impl TmdbMovieRepository {
    /// Creates a repository over a shared client.
    #[must_use]
    pub const fn new(client: Arc<TmdbClient>) -> Self {
        Self { client }
    }

    async fn movie_page(&self, path: &str, params: QueryParams) -> Result<SearchResult<Movie>> {
        let page: TmdbPage<TmdbMovie> = self.client.get_json(path, params).await?;
        page.try_map(map_movie)
    }
}

/// `search/movie` parameters.
fn search_query(filters: &SearchFilters) -> QueryParams {
    QueryParams::new()
        .opt("query", filters.query.as_deref())
        .opt("page", filters.page)
        .opt("include_adult", filters.include_adult)
        .opt("region", filters.region.as_deref())
        .opt("year", filters.year)
        .opt("primary_release_year", filters.primary_release_year)
        .opt("language", filters.language.as_deref())
}

/// `discover/movie` parameters.
fn discover_query(f: &DiscoverMovieFilters) -> QueryParams {
    QueryParams::new()
        .opt("page", f.page)
        .opt("language", f.language.as_deref())
        .opt("region", f.region.as_deref())
        .opt("sort_by", f.sort_by)
        .opt("include_adult", f.include_adult)
        .opt("include_video", f.include_video)
        .opt("primary_release_year", f.primary_release_year)
        .opt("primary_release_date.gte", f.primary_release_date_gte)
        .opt("primary_release_date.lte", f.primary_release_date_lte)
        .opt("release_date.gte", f.release_date_gte)
        .opt("release_date.lte", f.release_date_lte)
        .list("with_release_type", &f.with_release_type)
        .opt("year", f.year)
        .opt("vote_count.gte", f.vote_count_gte)
        .opt("vote_count.lte", f.vote_count_lte)
        .opt("vote_average.gte", f.vote_average_gte)
        .opt("vote_average.lte", f.vote_average_lte)
        .opt("with_cast", f.with_cast.as_deref())
        .opt("with_crew", f.with_crew.as_deref())
        .opt("with_people", f.with_people.as_deref())
        .opt("with_companies", f.with_companies.as_deref())
        .opt("without_companies", f.without_companies.as_deref())
        .opt("with_genres", f.with_genres.as_deref())
        .opt("without_genres", f.without_genres.as_deref())
        .opt("with_keywords", f.with_keywords.as_deref())
        .opt("without_keywords", f.without_keywords.as_deref())
        .opt("with_runtime.gte", f.with_runtime_gte)
        .opt("with_runtime.lte", f.with_runtime_lte)
        .opt("with_original_language", f.with_original_language.as_deref())
        .opt("with_watch_providers", f.with_watch_providers.as_deref())
        .opt("watch_region", f.watch_region.as_deref())
        .list(
            "with_watch_monetization_types",
            &f.with_watch_monetization_types,
        )
}

impl LocalMovieRepository for TmdbMovieRepository {
    #[instrument(skip_all)]
    async fn search_movies(&self, filters: &SearchFilters) -> Result<SearchResult<Movie>> {
        self.movie_page("search/movie", search_query(filters))
            .await
            .inspect_err(|e| log_failure("search_movies", e))
    }

    #[instrument(skip_all)]
    async fn discover_movies(
        &self,
        filters: &DiscoverMovieFilters,
    ) -> Result<SearchResult<Movie>> {
        self.movie_page("discover/movie", discover_query(filters))
            .await
            .inspect_err(|e| log_failure("discover_movies", e))
    }

    #[instrument(skip_all, fields(id = id))]
    async fn get_movie_details(&self, id: u64) -> Result<MovieDetails> {
        let path = format!("movie/{id}");
        let result = match self
            .client
            .get_json::<TmdbMovieDetails>(&path, QueryParams::new())
            .await
        {
            Ok(raw) => map_movie_details(raw),
            Err(e) => Err(e.for_resource("movie", id)),
        };
        result.inspect_err(|e| log_failure("get_movie_details", e))
    }

    #[instrument(skip_all)]
    async fn get_popular_movies(&self, page: Option<u32>) -> Result<SearchResult<Movie>> {
        self.movie_page("movie/popular", page_query(page))
            .await
            .inspect_err(|e| log_failure("get_popular_movies", e))
    }

    #[instrument(skip_all)]
    async fn get_top_rated_movies(&self, page: Option<u32>) -> Result<SearchResult<Movie>> {
        self.movie_page("movie/top_rated", page_query(page))
            .await
            .inspect_err(|e| log_failure("get_top_rated_movies", e))
    }

    #[instrument(skip_all)]
    async fn get_upcoming_movies(&self, page: Option<u32>) -> Result<SearchResult<Movie>> {
        self.movie_page("movie/upcoming", page_query(page))
            .await
            .inspect_err(|e| log_failure("get_upcoming_movies", e))
    }

    #[instrument(skip_all)]
    async fn get_now_playing_movies(&self, page: Option<u32>) -> Result<SearchResult<Movie>> {
        self.movie_page("movie/now_playing", page_query(page))
            .await
            .inspect_err(|e| log_failure("get_now_playing_movies", e))
    }

    #[instrument(skip_all, fields(id = id))]
    async fn get_similar_movies(
        &self,
        id: u64,
        page: Option<u32>,
    ) -> Result<SearchResult<Movie>> {
        self.movie_page(&format!("movie/{id}/similar"), page_query(page))
            .await
            .inspect_err(|e| log_failure("get_similar_movies", e))
    }

    #[instrument(skip_all, fields(id = id))]
    async fn get_recommended_movies(
        &self,
        id: u64,
        page: Option<u32>,
    ) -> Result<SearchResult<Movie>> {
        self.movie_page(&format!("movie/{id}/recommendations"), page_query(page))
            .await
            .inspect_err(|e| log_failure("get_recommended_movies", e))
    }
}
