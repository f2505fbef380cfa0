//! `TmdbSearchRepository` - multi-search and trending.

use std::sync::Arc;

use tracing::instrument;

use super::api::LocalSearchRepository;
use super::log_failure;
use super::schema::TmdbPage;
use super::schema::search::{TmdbMediaItem, map_media_item};
use crate::client::TmdbClient;
use crate::error::Result;
use crate::models::{
    MediaType, MultiSearchResult, SearchFilters, SearchResult, TimeWindow, TrendingResult,
};
use crate::query::QueryParams;

/// Mixed-media repository backed by the TMDB API.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbSearchRepository {
    client: Arc<TmdbClient>,
}

impl TmdbSearchRepository {
    /// Creates a repository over a shared client.
    #[must_use]
    pub const fn new(client: Arc<TmdbClient>) -> Self {
        Self { client }
    }
}

/// `search/multi` parameters.
fn search_query(filters: &SearchFilters) -> QueryParams {
    QueryParams::new()
        .opt("query", filters.query.as_deref())
        .opt("page", filters.page)
        .opt("include_adult", filters.include_adult)
        .opt("language", filters.language.as_deref())
}

impl LocalSearchRepository for TmdbSearchRepository {
    #[instrument(skip_all)]
    async fn multi_search(
        &self,
        filters: &SearchFilters,
    ) -> Result<SearchResult<MultiSearchResult>> {
        let result = match self
            .client
            .get_json::<TmdbPage<TmdbMediaItem>>("search/multi", search_query(filters))
            .await
        {
            Ok(page) => page.try_map(|item| map_media_item(item, None)),
            Err(e) => Err(e),
        };
        result.inspect_err(|e| log_failure("multi_search", e))
    }

    #[instrument(skip_all, fields(media_type = %media_type, time_window = %time_window))]
    async fn get_trending(
        &self,
        media_type: MediaType,
        time_window: TimeWindow,
        page: Option<u32>,
    ) -> Result<SearchResult<TrendingResult>> {
        let path = format!("trending/{media_type}/{time_window}");
        let fallback = (media_type != MediaType::All).then_some(media_type);
        let result = match self
            .client
            .get_json::<TmdbPage<TmdbMediaItem>>(&path, QueryParams::new().opt("page", page))
            .await
        {
            Ok(raw) => raw.try_map(|item| map_media_item(item, fallback)),
            Err(e) => Err(e),
        };
        result.inspect_err(|e| log_failure("get_trending", e))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;
    use crate::error::TmdbError;
    use crate::models::MediaResult;

    fn repository(server: &wiremock::MockServer) -> TmdbSearchRepository {
        let base_url = format!("{}/3/", server.uri());
        let client = TmdbClient::builder()
            .base_url(base_url.parse().unwrap())
            .api_key("test-key")
            .user_agent("test/0.0.0")
            .build()
            .unwrap();
        TmdbSearchRepository::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_multi_search_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/search_multi_nolan.json");
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/search/multi"))
            .and(wiremock::matchers::query_param("query", "Nolan"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;
        let repo = repository(&mock_server);

        // Act
        let result = repo.multi_search(&SearchFilters::new("Nolan")).await.unwrap();

        // Assert
        assert_eq!(result.results.len(), 3);
        assert_eq!(result.results[0].media_type(), MediaType::Person);
        assert_eq!(result.results[1].media_type(), MediaType::Movie);
        assert_eq!(result.results[2].media_type(), MediaType::Tv);
    }

    #[tokio::test]
    async fn test_multi_search_unknown_media_type_fails() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let body = r#"{"page":1,"results":[{"id":1,"media_type":"collection","name":"Box"}],"total_pages":1,"total_results":1}"#;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(body))
            .mount(&mock_server)
            .await;
        let repo = repository(&mock_server);

        // Act
        let err = repo
            .multi_search(&SearchFilters::new("Box"))
            .await
            .unwrap_err();

        // Assert
        assert!(matches!(
            err,
            TmdbError::Validation { ref field, .. } if field.as_deref() == Some("media_type")
        ));
    }

    #[tokio::test]
    async fn test_get_trending_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/trending_all_week.json");
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/trending/all/week"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;
        let repo = repository(&mock_server);

        // Act
        let result = repo
            .get_trending(MediaType::All, TimeWindow::Week, None)
            .await
            .unwrap();

        // Assert
        assert_eq!(result.total_pages, 500);
        assert!(matches!(&result.results[0], MediaResult::Movie(m) if m.title == "Oppenheimer"));
        assert!(matches!(&result.results[2], MediaResult::Person(p) if p.known_for.is_empty()));
    }

    #[tokio::test]
    async fn test_get_trending_single_type_without_tags() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let body = r#"{"page":1,"results":[{"id":1396,"name":"Breaking Bad"}],"total_pages":1,"total_results":1}"#;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/trending/tv/day"))
            .and(wiremock::matchers::query_param("page", "2"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(body))
            .mount(&mock_server)
            .await;
        let repo = repository(&mock_server);

        // Act
        let result = repo
            .get_trending(MediaType::Tv, TimeWindow::Day, Some(2))
            .await
            .unwrap();

        // Assert
        assert!(matches!(&result.results[0], MediaResult::Tv(t) if t.id == 1396));
    }
}
