//! Person search, details and credits.

use std::sync::Arc;

use tracing::instrument;

use super::{DEFAULT_PAGE, page_or_default, require_query};
use crate::error::Result;
use crate::models::{
    Person, PersonDetails, PersonMovieCredits, PersonTvCredits, SearchFilters, SearchResult,
};
use crate::repositories::LocalPersonRepository;

/// Parameters for a person name search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonSearchRequest {
    /// Search text. Must not be blank.
    pub query: String,
    /// Page number, defaults to 1.
    pub page: Option<u32>,
    /// Include adult profiles, defaults to `false`.
    pub include_adult: Option<bool>,
    /// Response language.
    pub language: Option<String>,
}

impl PersonSearchRequest {
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

/// Person operations over a [`LocalPersonRepository`].
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct PersonSearchUseCase<R> {
    repository: Arc<R>,
}

impl<R> Clone for PersonSearchUseCase<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: LocalPersonRepository> PersonSearchUseCase<R> {
    /// Creates a use case over a shared repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Searches people by name.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a blank query, otherwise any repository error.
    #[instrument(skip_all)]
    pub async fn search(&self, request: PersonSearchRequest) -> Result<SearchResult<Person>> {
        let filters = request.into_filters()?;
        self.repository.search_people(&filters).await
    }

    /// Fetches full details for person `id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID, otherwise any repository error.
    pub async fn details(&self, id: u64) -> Result<PersonDetails> {
        self.repository.get_person_details(id).await
    }

    /// Lists popular people.
    ///
    /// # Errors
    ///
    /// Returns any repository error.
    pub async fn popular(&self, page: Option<u32>) -> Result<SearchResult<Person>> {
        self.repository
            .get_popular_people(page_or_default(page))
            .await
    }

    /// Fetches movie cast and crew credits for person `id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID, otherwise any repository error.
    pub async fn movie_credits(&self, id: u64) -> Result<PersonMovieCredits> {
        self.repository.get_person_movie_credits(id).await
    }

    /// Fetches TV cast and crew credits for person `id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID, otherwise any repository error.
    pub async fn tv_credits(&self, id: u64) -> Result<PersonTvCredits> {
        self.repository.get_person_tv_credits(id).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use crate::error::TmdbError;

    /// Mock repository that records searches and counts calls.
    #[derive(Default)]
    struct MockPersonRepository {
        call_count: AtomicU32,
        last_search: Mutex<Option<SearchFilters>>,
        last_page: Mutex<Option<u32>>,
    }

    impl LocalPersonRepository for MockPersonRepository {
        async fn search_people(&self, filters: &SearchFilters) -> Result<SearchResult<Person>> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            *self.last_search.lock().unwrap() = Some(filters.clone());
            Ok(SearchResult {
                page: 1,
                results: vec![],
                total_pages: 0,
                total_results: 0,
            })
        }

        async fn get_person_details(&self, _id: u64) -> Result<PersonDetails> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            Err(TmdbError::Authentication(String::from("Invalid API key")))
        }

        async fn get_popular_people(&self, page: Option<u32>) -> Result<SearchResult<Person>> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            *self.last_page.lock().unwrap() = page;
            Ok(SearchResult {
                page: page.unwrap_or(1),
                results: vec![],
                total_pages: 0,
                total_results: 0,
            })
        }

        async fn get_person_movie_credits(&self, id: u64) -> Result<PersonMovieCredits> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            Ok(PersonMovieCredits {
                id,
                cast: vec![],
                crew: vec![],
            })
        }

        async fn get_person_tv_credits(&self, id: u64) -> Result<PersonTvCredits> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            Ok(PersonTvCredits {
                id,
                cast: vec![],
                crew: vec![],
            })
        }
    }

    fn use_case() -> (Arc<MockPersonRepository>, PersonSearchUseCase<MockPersonRepository>) {
        let repo = Arc::new(MockPersonRepository::default());
        (Arc::clone(&repo), PersonSearchUseCase::new(repo))
    }

    #[tokio::test]
    async fn test_search_fills_defaults() {
        // Arrange
        let (repo, people) = use_case();
        let request = PersonSearchRequest {
            language: Some(String::from("ja-JP")),
            ..PersonSearchRequest::new("Nolan")
        };

        // Act
        people.search(request).await.unwrap();

        // Assert
        let filters = repo.last_search.lock().unwrap().clone().unwrap();
        assert_eq!(filters.page, Some(1));
        assert_eq!(filters.include_adult, Some(false));
        assert_eq!(filters.language.as_deref(), Some("ja-JP"));
    }

    #[tokio::test]
    async fn test_search_blank_query() {
        // Arrange
        let (repo, people) = use_case();

        // Act
        let err = people.search(PersonSearchRequest::new(" ")).await.unwrap_err();

        // Assert
        assert_eq!(err.status(), None);
        assert_eq!(repo.call_count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_popular_page_defaults_to_one() {
        // Arrange
        let (repo, people) = use_case();

        // Act
        people.popular(None).await.unwrap();

        // Assert
        assert_eq!(*repo.last_page.lock().unwrap(), Some(1));
    }

    #[tokio::test]
    async fn test_credits_and_errors_pass_through() {
        // Arrange
        let (repo, people) = use_case();

        // Act
        let movies = people.movie_credits(525).await.unwrap();
        let shows = people.tv_credits(525).await.unwrap();
        let err = people.details(525).await.unwrap_err();

        // Assert
        assert_eq!(movies.id, 525);
        assert_eq!(shows.id, 525);
        assert!(matches!(err, TmdbError::Authentication(_)));
        assert_eq!(repo.call_count.load(Ordering::SeqCst), 3);
    }
}
