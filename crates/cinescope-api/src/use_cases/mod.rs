//! Use cases over the repositories.
//!
//! Each use case is generic over its repository trait and fills request
//! defaults (`page = 1`, `include_adult = false`) before delegating.
//! Errors are returned unchanged.
#![allow(clippy::future_not_send)]

mod general;
mod movie;
mod person;
mod tv;

#[allow(clippy::module_name_repetitions)]
pub use general::{GeneralSearchUseCase, MultiSearchRequest};
#[allow(clippy::module_name_repetitions)]
pub use movie::{MovieSearchRequest, MovieSearchUseCase};
#[allow(clippy::module_name_repetitions)]
pub use person::{PersonSearchRequest, PersonSearchUseCase};
#[allow(clippy::module_name_repetitions)]
pub use tv::{TvShowSearchRequest, TvShowSearchUseCase};

use crate::error::{Result, TmdbError};

/// Page used when the caller does not pick one.
pub const DEFAULT_PAGE: u32 = 1;

/// Rejects a blank search query.
fn require_query(query: &str) -> Result<()> {
    if query.trim().is_empty() {
        return Err(TmdbError::validation("query", "search query must not be empty"));
    }
    Ok(())
}

/// Fills the default page for list endpoints.
fn page_or_default(page: Option<u32>) -> Option<u32> {
    Some(page.unwrap_or(DEFAULT_PAGE))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_require_query_rejects_blank() {
        // Arrange
        let inputs = ["", "   ", "\t\n"];

        // Act & Assert
        for input in inputs {
            let err = require_query(input).unwrap_err();
            assert!(matches!(
                err,
                TmdbError::Validation { ref field, .. } if field.as_deref() == Some("query")
            ));
        }
        assert!(require_query(" Inception ").is_ok());
    }

    #[test]
    fn test_page_or_default() {
        assert_eq!(page_or_default(None), Some(1));
        assert_eq!(page_or_default(Some(7)), Some(7));
    }
}
