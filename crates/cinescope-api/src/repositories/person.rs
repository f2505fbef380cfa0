//! `TmdbPersonRepository` - person endpoints.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::instrument;

use super::api::LocalPersonRepository;
use super::schema::TmdbPage;
use super::schema::person::{
    TmdbPerson, TmdbPersonDetails, TmdbPersonMovieCredits, TmdbPersonTvCredits,
    map_movie_credits, map_person, map_person_details, map_tv_credits,
};
use super::{log_failure, page_query};
use crate::client::TmdbClient;
use crate::error::Result;
use crate::models::{
    Person, PersonDetails, PersonMovieCredits, PersonTvCredits, SearchFilters, SearchResult,
};
use crate::query::QueryParams;

/// Person repository backed by the TMDB API.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbPersonRepository {
    client: Arc<TmdbClient>,
}

impl TmdbPersonRepository {
    /// Creates a repository over a shared client.
    #[must_use]
    pub const fn new(client: Arc<TmdbClient>) -> Self {
        Self { client }
    }

    async fn person_page(&self, path: &str, params: QueryParams) -> Result<SearchResult<Person>> {
        let page: TmdbPage<TmdbPerson> = self.client.get_json(path, params).await?;
        page.try_map(map_person)
    }

    /// Fetches `path` for person `id`, re-labelling a 404.
    async fn by_id<T: DeserializeOwned>(&self, path: &str, id: u64) -> Result<T> {
        self.client
            .get_json(path, QueryParams::new())
            .await
            .map_err(|e| e.for_resource("person", id))
    }
}

/// `search/person` parameters.
fn search_query(filters: &SearchFilters) -> QueryParams {
    QueryParams::new()
        .opt("query", filters.query.as_deref())
        .opt("page", filters.page)
        .opt("include_adult", filters.include_adult)
        .opt("language", filters.language.as_deref())
}

impl LocalPersonRepository for TmdbPersonRepository {
    #[instrument(skip_all)]
    async fn search_people(&self, filters: &SearchFilters) -> Result<SearchResult<Person>> {
        self.person_page("search/person", search_query(filters))
            .await
            .inspect_err(|e| log_failure("search_people", e))
    }

    #[instrument(skip_all, fields(id = id))]
    async fn get_person_details(&self, id: u64) -> Result<PersonDetails> {
        self.by_id::<TmdbPersonDetails>(&format!("person/{id}"), id)
            .await
            .and_then(map_person_details)
            .inspect_err(|e| log_failure("get_person_details", e))
    }

    #[instrument(skip_all)]
    async fn get_popular_people(&self, page: Option<u32>) -> Result<SearchResult<Person>> {
        self.person_page("person/popular", page_query(page))
            .await
            .inspect_err(|e| log_failure("get_popular_people", e))
    }

    #[instrument(skip_all, fields(id = id))]
    async fn get_person_movie_credits(&self, id: u64) -> Result<PersonMovieCredits> {
        self.by_id::<TmdbPersonMovieCredits>(&format!("person/{id}/movie_credits"), id)
            .await
            .and_then(map_movie_credits)
            .inspect_err(|e| log_failure("get_person_movie_credits", e))
    }

    #[instrument(skip_all, fields(id = id))]
    async fn get_person_tv_credits(&self, id: u64) -> Result<PersonTvCredits> {
        self.by_id::<TmdbPersonTvCredits>(&format!("person/{id}/tv_credits"), id)
            .await
            .and_then(map_tv_credits)
            .inspect_err(|e| log_failure("get_person_tv_credits", e))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;
    use crate::error::TmdbError;
    use crate::models::KnownFor;

    fn repository(server: &wiremock::MockServer) -> TmdbPersonRepository {
        let base_url = format!("{}/3/", server.uri());
        let client = TmdbClient::builder()
            .base_url(base_url.parse().unwrap())
            .api_key("test-key")
            .user_agent("test/0.0.0")
            .build()
            .unwrap();
        TmdbPersonRepository::new(Arc::new(client))
    }

    #[test]
    fn test_search_query() {
        // Arrange
        let filters = SearchFilters::new("Nolan").page(2).region("GB");

        // Act
        let params = search_query(&filters);

        // Assert
        assert_eq!(params.get("query"), Some("Nolan"));
        assert_eq!(params.get("page"), Some("2"));
        assert!(!params.contains("region"));
    }

    #[tokio::test]
    async fn test_search_people_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/search_person_nolan.json");
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/search/person"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;
        let repo = repository(&mock_server);

        // Act
        let result = repo.search_people(&SearchFilters::new("Nolan")).await.unwrap();

        // Assert
        let nolan = &result.results[0];
        assert_eq!(nolan.name, "Christopher Nolan");
        assert!(matches!(nolan.known_for[1], KnownFor::Tv(_)));
    }

    #[tokio::test]
    async fn test_get_popular_people_path() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/search_person_nolan.json");
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/person/popular"))
            .and(wiremock::matchers::query_param("page", "4"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;
        let repo = repository(&mock_server);

        // Act
        let result = repo.get_popular_people(Some(4)).await.unwrap();

        // Assert
        assert_eq!(result.results.len(), 1);
    }

    #[tokio::test]
    async fn test_get_person_details_and_credits() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let details = include_str!("../../../../fixtures/tmdb/person_details_525.json");
        let movie_credits = include_str!("../../../../fixtures/tmdb/person_525_movie_credits.json");
        let tv_credits = include_str!("../../../../fixtures/tmdb/person_17419_tv_credits.json");
        for (endpoint, body) in [
            ("/3/person/525", details),
            ("/3/person/525/movie_credits", movie_credits),
            ("/3/person/17419/tv_credits", tv_credits),
        ] {
            wiremock::Mock::given(wiremock::matchers::method("GET"))
                .and(wiremock::matchers::path(endpoint))
                .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(body))
                .expect(1)
                .mount(&mock_server)
                .await;
        }
        let repo = repository(&mock_server);

        // Act
        let person = repo.get_person_details(525).await.unwrap();
        let movies = repo.get_person_movie_credits(525).await.unwrap();
        let shows = repo.get_person_tv_credits(17_419).await.unwrap();

        // Assert
        assert_eq!(person.place_of_birth.as_deref(), Some("Westminster, London, England, UK"));
        assert_eq!(movies.crew[0].job, "Director");
        assert_eq!(shows.cast[0].character, "Walter White");
    }

    #[tokio::test]
    async fn test_get_person_details_not_found() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../fixtures/tmdb/error_not_found.json");
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(404).set_body_string(json_body))
            .mount(&mock_server)
            .await;
        let repo = repository(&mock_server);

        // Act
        let err = repo.get_person_movie_credits(7).await.unwrap_err();

        // Assert
        assert!(matches!(err, TmdbError::NotFound(ref r) if r.resource == "person" && r.id == Some(7)));
        assert!(matches!(
            err,
            TmdbError::NotFound(ref r)
                if r.message.as_deref() == Some("The resource you requested could not be found.")
        ));
    }
}
