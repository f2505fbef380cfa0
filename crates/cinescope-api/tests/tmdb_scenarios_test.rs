#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]

use std::collections::HashMap;

use chrono::NaiveDate;
use cinescope_api::models::{MediaResult, MediaType, TimeWindow};
use cinescope_api::use_cases::{MovieSearchRequest, MultiSearchRequest, PersonSearchRequest};
use cinescope_api::{AppContainer, TmdbConfig, TmdbError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn container(server: &MockServer) -> AppContainer {
    let base_url = format!("{}/3/", server.uri());
    let env = HashMap::from([
        (String::from("TMDB_API_KEY"), String::from("integration-key")),
        (String::from("TMDB_BASE_URL"), base_url),
    ]);
    let config = TmdbConfig::from_lookup(|key| env.get(key).cloned()).unwrap();
    AppContainer::build(config).unwrap()
}

#[tokio::test]
async fn test_inception_search_scenario() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/search/movie"))
        .and(query_param("query", "Inception"))
        .and(query_param("page", "1"))
        .and(query_param("include_adult", "false"))
        .and(query_param("api_key", "integration-key"))
        .and(query_param("language", "en-US"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(include_str!("../../../fixtures/tmdb/search_movie_inception.json")),
        )
        .expect(1)
        .mount(&server)
        .await;
    let container = container(&server);

    // Act
    let page = container
        .movies()
        .search(MovieSearchRequest::new("Inception"))
        .await
        .unwrap();

    // Assert
    let inception = &page.results[0];
    assert_eq!(inception.id, 27205);
    assert_eq!(inception.title, "Inception");
    assert!((inception.vote_average - 8.8).abs() < f64::EPSILON);
    assert_eq!(inception.vote_count, 31000);
    assert_eq!(inception.genre_ids, vec![28, 878, 12]);
    assert_eq!(inception.release_date, NaiveDate::from_ymd_opt(2010, 7, 16));

    let undated = &page.results[1];
    assert!(undated.vote_average.abs() < f64::EPSILON);
    assert_eq!(undated.vote_count, 0);
    assert_eq!(undated.release_date, None);

    assert!(page.results[2].genre_ids.is_empty());
}

#[tokio::test]
async fn test_unknown_movie_is_not_found() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/movie/999999999"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(include_str!("../../../fixtures/tmdb/error_not_found.json")),
        )
        .expect(1)
        .mount(&server)
        .await;
    let container = container(&server);

    // Act
    let err = container.movies().details(999_999_999).await.unwrap_err();

    // Assert
    match err {
        TmdbError::NotFound(resource) => {
            assert_eq!(resource.resource, "movie");
            assert_eq!(resource.id, Some(999_999_999));
        }
        other => unreachable!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_is_not_retried() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/search/person"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_string(include_str!("../../../fixtures/tmdb/error_rate_limit.json")),
        )
        .expect(1)
        .mount(&server)
        .await;
    let container = container(&server);

    // Act
    let err = container
        .people()
        .search(PersonSearchRequest::new("Nolan"))
        .await
        .unwrap_err();

    // Assert
    assert!(matches!(err, TmdbError::RateLimit(_)));
    assert_eq!(err.status(), Some(429));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[test]
fn test_missing_api_key_fails_before_any_network_object() {
    // Arrange
    let env: HashMap<String, String> =
        HashMap::from([(String::from("TMDB_BASE_URL"), String::from("http://127.0.0.1:1/3/"))]);

    // Act
    let err = TmdbConfig::from_lookup(|key| env.get(key).cloned()).unwrap_err();

    // Assert
    assert!(matches!(err, TmdbError::Configuration(_)));
    assert!(err.to_string().contains("TMDB_API_KEY"));
}

#[tokio::test]
async fn test_multi_search_mixes_media_types() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/search/multi"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(include_str!("../../../fixtures/tmdb/search_multi_nolan.json")),
        )
        .mount(&server)
        .await;
    let container = container(&server);

    // Act
    let page = container
        .general()
        .multi_search(MultiSearchRequest::new("Nolan"))
        .await
        .unwrap();

    // Assert
    let kinds: Vec<MediaType> = page.results.iter().map(MediaResult::media_type).collect();
    assert_eq!(kinds, vec![MediaType::Person, MediaType::Movie, MediaType::Tv]);
    assert_eq!(page.results[1].display_name(), "Nolan");
}

#[tokio::test]
async fn test_trending_all_defaults_to_week_and_first_page() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/trending/all/week"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(include_str!("../../../fixtures/tmdb/trending_all_week.json")),
        )
        .expect(1)
        .mount(&server)
        .await;
    let container = container(&server);

    // Act
    let page = container
        .general()
        .get_trending_all(None, None)
        .await
        .unwrap();

    // Assert
    assert!(page.has_next_page());
    assert_eq!(page.results.len(), 3);
    assert!(matches!(&page.results[2], MediaResult::Person(p) if p.id == 17419));
}

#[tokio::test]
async fn test_trending_day_window_in_path() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/trending/all/day"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(include_str!("../../../fixtures/tmdb/trending_all_week.json")),
        )
        .expect(1)
        .mount(&server)
        .await;
    let container = container(&server);

    // Act
    let result = container
        .general()
        .get_trending_all(Some(TimeWindow::Day), Some(2))
        .await;

    // Assert
    assert!(result.is_ok());
}
