//! `TmdbTvShowRepository` - TV endpoints.

use std::sync::Arc;

use tracing::instrument;

use super::api::LocalTvShowRepository;
use super::schema::TmdbPage;
use super::schema::tv::{TmdbTvDetails, TmdbTvShow, map_tv_details, map_tv_show};
use super::{log_failure, page_query};
use crate::client::TmdbClient;
use crate::error::Result;
use crate::models::{DiscoverTvFilters, SearchFilters, SearchResult, TvShow, TvShowDetails};
use crate::query::QueryParams;

/// TV show repository backed by the TMDB API.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbTvShowRepository {
    client: Arc<TmdbClient>,
}

impl TmdbTvShowRepository {
    /// Creates a repository over a shared client.
    #[must_use]
    pub const fn new(client: Arc<TmdbClient>) -> Self {
        Self { client }
    }

    async fn show_page(&self, path: &str, params: QueryParams) -> Result<SearchResult<TvShow>> {
        let page: TmdbPage<TmdbTvShow> = self.client.get_json(path, params).await?;
        page.try_map(map_tv_show)
    }
}

/// `search/tv` parameters. `year` is sent as `first_air_date_year`.
fn search_query(filters: &SearchFilters) -> QueryParams {
    QueryParams::new()
        .opt("query", filters.query.as_deref())
        .opt("page", filters.page)
        .opt("include_adult", filters.include_adult)
        .opt("first_air_date_year", filters.year)
        .opt("language", filters.language.as_deref())
}

/// `discover/tv` parameters.
fn discover_query(f: &DiscoverTvFilters) -> QueryParams {
    QueryParams::new()
        .opt("page", f.page)
        .opt("language", f.language.as_deref())
        .opt("sort_by", f.sort_by)
        .opt("air_date.gte", f.air_date_gte)
        .opt("air_date.lte", f.air_date_lte)
        .opt("first_air_date.gte", f.first_air_date_gte)
        .opt("first_air_date.lte", f.first_air_date_lte)
        .opt("first_air_date_year", f.first_air_date_year)
        .opt("timezone", f.timezone.as_deref())
        .opt("vote_average.gte", f.vote_average_gte)
        .opt("vote_count.gte", f.vote_count_gte)
        .opt("with_genres", f.with_genres.as_deref())
        .opt("without_genres", f.without_genres.as_deref())
        .opt("with_networks", f.with_networks.as_deref())
        .opt("with_runtime.gte", f.with_runtime_gte)
        .opt("with_runtime.lte", f.with_runtime_lte)
        .opt("include_null_first_air_dates", f.include_null_first_air_dates)
        .opt("with_original_language", f.with_original_language.as_deref())
        .opt("with_keywords", f.with_keywords.as_deref())
        .opt("without_keywords", f.without_keywords.as_deref())
        .opt("screened_theatrically", f.screened_theatrically)
        .opt("with_companies", f.with_companies.as_deref())
        .opt("without_companies", f.without_companies.as_deref())
        .opt("with_watch_providers", f.with_watch_providers.as_deref())
        .opt("watch_region", f.watch_region.as_deref())
        .list(
            "with_watch_monetization_types",
            &f.with_watch_monetization_types,
        )
        .list("with_status", &f.with_status)
        .list("with_type", &f.with_type)
}

impl LocalTvShowRepository for TmdbTvShowRepository {
    #[instrument(skip_all)]
    async fn search_tv_shows(&self, filters: &SearchFilters) -> Result<SearchResult<TvShow>> {
        self.show_page("search/tv", search_query(filters))
            .await
            .inspect_err(|e| log_failure("search_tv_shows", e))
    }

    #[instrument(skip_all)]
    async fn discover_tv_shows(
        &self,
        filters: &DiscoverTvFilters,
    ) -> Result<SearchResult<TvShow>> {
        self.show_page("discover/tv", discover_query(filters))
            .await
            .inspect_err(|e| log_failure("discover_tv_shows", e))
    }

    #[instrument(skip_all, fields(id = id))]
    async fn get_tv_show_details(&self, id: u64) -> Result<TvShowDetails> {
        let path = format!("tv/{id}");
        let result = match self
            .client
            .get_json::<TmdbTvDetails>(&path, QueryParams::new())
            .await
        {
            Ok(raw) => map_tv_details(raw),
            Err(e) => Err(e.for_resource("tv show", id)),
        };
        result.inspect_err(|e| log_failure("get_tv_show_details", e))
    }

    #[instrument(skip_all)]
    async fn get_popular_tv_shows(&self, page: Option<u32>) -> Result<SearchResult<TvShow>> {
        self.show_page("tv/popular", page_query(page))
            .await
            .inspect_err(|e| log_failure("get_popular_tv_shows", e))
    }

    #[instrument(skip_all)]
    async fn get_top_rated_tv_shows(&self, page: Option<u32>) -> Result<SearchResult<TvShow>> {
        self.show_page("tv/top_rated", page_query(page))
            .await
            .inspect_err(|e| log_failure("get_top_rated_tv_shows", e))
    }

    #[instrument(skip_all)]
    async fn get_airing_today_tv_shows(
        &self,
        page: Option<u32>,
    ) -> Result<SearchResult<TvShow>> {
        self.show_page("tv/airing_today", page_query(page))
            .await
            .inspect_err(|e| log_failure("get_airing_today_tv_shows", e))
    }

    #[instrument(skip_all)]
    async fn get_on_the_air_tv_shows(&self, page: Option<u32>) -> Result<SearchResult<TvShow>> {
        self.show_page("tv/on_the_air", page_query(page))
            .await
            .inspect_err(|e| log_failure("get_on_the_air_tv_shows", e))
    }

    #[instrument(skip_all, fields(id = id))]
    async fn get_similar_tv_shows(
        &self,
        id: u64,
        page: Option<u32>,
    ) -> Result<SearchResult<TvShow>> {
        self.show_page(&format!("tv/{id}/similar"), page_query(page))
            .await
            .inspect_err(|e| log_failure("get_similar_tv_shows", e))
    }

    #[instrument(skip_all, fields(id = id))]
    async fn get_recommended_tv_shows(
        &self,
        id: u64,
        page: Option<u32>,
    ) -> Result<SearchResult<TvShow>> {
        self.show_page(&format!("tv/{id}/recommendations"), page_query(page))
            .await
            .inspect_err(|e| log_failure("get_recommended_tv_shows", e))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use chrono::NaiveDate;

    use super::*;
    use crate::error::TmdbError;
    use crate::models::{TvSortBy, TvStatus, TvType};

    const SEARCH_JSON: &str = include_str!("../../../../fixtures/tmdb/search_tv_breaking_bad.json");

    fn repository(server: &wiremock::MockServer) -> TmdbTvShowRepository {
        let base_url = format!("{}/3/", server.uri());
        let client = TmdbClient::builder()
            .base_url(base_url.parse().unwrap())
            .api_key("test-key")
            .user_agent("test/0.0.0")
            .build()
            .unwrap();
        TmdbTvShowRepository::new(Arc::new(client))
    }

    #[test]
    fn test_search_query_sends_year_as_first_air_date_year() {
        // Arrange
        let filters = SearchFilters::new("Breaking Bad").year(2008);

        // Act
        let params = search_query(&filters);

        // Assert
        assert_eq!(params.get("first_air_date_year"), Some("2008"));
        assert!(!params.contains("year"));
        assert!(!params.contains("region"));
    }

    #[test]
    fn test_discover_query_mapping() {
        // Arrange
        let filters = DiscoverTvFilters {
            sort_by: Some(TvSortBy::FirstAirDateDesc),
            first_air_date_gte: NaiveDate::from_ymd_opt(2020, 1, 1),
            with_networks: Some(String::from("213")),
            include_null_first_air_dates: Some(false),
            with_status: vec![TvStatus::ReturningSeries, TvStatus::Ended],
            with_type: vec![TvType::Scripted],
            ..DiscoverTvFilters::default()
        };

        // Act
        let params = discover_query(&filters);

        // Assert
        assert_eq!(params.get("sort_by"), Some("first_air_date.desc"));
        assert_eq!(params.get("first_air_date.gte"), Some("2020-01-01"));
        assert_eq!(params.get("with_networks"), Some("213"));
        assert_eq!(params.get("include_null_first_air_dates"), Some("false"));
        assert_eq!(params.get("with_status"), Some("0|3"));
        assert_eq!(params.get("with_type"), Some("4"));
        assert_eq!(params.len(), 6);
    }

    #[tokio::test]
    async fn test_search_tv_shows_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/search/tv"))
            .and(wiremock::matchers::query_param("query", "Breaking Bad"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(SEARCH_JSON))
            .expect(1)
            .mount(&mock_server)
            .await;
        let repo = repository(&mock_server);

        // Act
        let result = repo
            .search_tv_shows(&SearchFilters::new("Breaking Bad"))
            .await
            .unwrap();

        // Assert
        assert_eq!(result.results[0].id, 1396);
        assert!(result.results[1].origin_country.is_empty());
    }

    #[tokio::test]
    async fn test_get_tv_show_details_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/tv_details_1396.json");
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/tv/1396"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;
        let repo = repository(&mock_server);

        // Act
        let details = repo.get_tv_show_details(1396).await.unwrap();

        // Assert
        assert_eq!(details.show.name, "Breaking Bad");
        assert_eq!(details.number_of_seasons, 5);
    }

    #[tokio::test]
    async fn test_get_tv_show_details_not_found() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/error_not_found.json");
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(404).set_body_string(json_body))
            .mount(&mock_server)
            .await;
        let repo = repository(&mock_server);

        // Act
        let err = repo.get_tv_show_details(42).await.unwrap_err();

        // Assert
        assert_eq!(err.to_string(), "tv show with id 42 not found");
    }

    #[tokio::test]
    async fn test_list_endpoints_paths() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        for endpoint in [
            "/3/tv/popular",
            "/3/tv/top_rated",
            "/3/tv/airing_today",
            "/3/tv/on_the_air",
            "/3/tv/1396/similar",
            "/3/tv/1396/recommendations",
        ] {
            wiremock::Mock::given(wiremock::matchers::method("GET"))
                .and(wiremock::matchers::path(endpoint))
                .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(SEARCH_JSON))
                .expect(1)
                .mount(&mock_server)
                .await;
        }
        let repo = repository(&mock_server);

        // Act
        let results = [
            repo.get_popular_tv_shows(None).await.unwrap(),
            repo.get_top_rated_tv_shows(None).await.unwrap(),
            repo.get_airing_today_tv_shows(None).await.unwrap(),
            repo.get_on_the_air_tv_shows(Some(3)).await.unwrap(),
            repo.get_similar_tv_shows(1396, None).await.unwrap(),
            repo.get_recommended_tv_shows(1396, None).await.unwrap(),
        ];

        // Assert
        assert!(results.iter().all(|r| r.results.len() == 2));
    }

    #[tokio::test]
    async fn test_invalid_api_key() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/error_invalid_api_key.json");
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(401).set_body_string(json_body))
            .mount(&mock_server)
            .await;
        let repo = repository(&mock_server);

        // Act
        let err = repo.get_popular_tv_shows(None).await.unwrap_err();

        // Assert
        assert!(matches!(err, TmdbError::Authentication(_)));
    }
}
