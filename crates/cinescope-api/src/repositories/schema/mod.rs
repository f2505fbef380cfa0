//! Upstream JSON schema types and their mappings to domain types.
//!
//! Each family (movie, tv, person, mixed media) has its own raw types and
//! its own mapping functions. Raw fields are optional so that missing and
//! `null` values can be defaulted in one place.

pub mod movie;
pub mod person;
pub mod search;
pub mod tv;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{Result, TmdbError};
use crate::models::SearchResult;

/// Paginated response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPage<T> {
    /// Page number.
    #[serde(default = "first_page")]
    pub page: u32,
    /// Raw results.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    /// Total pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Total results.
    #[serde(default)]
    pub total_results: u32,
}

const fn first_page() -> u32 {
    1
}

impl<T> TmdbPage<T> {
    /// Maps every result with `f`, failing on the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map<U>(self, f: impl FnMut(T) -> Result<U>) -> Result<SearchResult<U>> {
        let results = self.results.into_iter().map(f).collect::<Result<Vec<_>>>()?;
        Ok(SearchResult {
            page: self.page,
            results,
            total_pages: self.total_pages,
            total_results: self.total_results,
        })
    }
}

/// Parses an upstream `YYYY-MM-DD` date. Missing or empty means unknown.
///
/// # Errors
///
/// Returns [`TmdbError::Validation`] naming `field` for any other format.
pub fn parse_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => NaiveDate::parse_from_str(v, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| TmdbError::validation(field, format!("invalid date in {field}: {v:?}"))),
    }
}

/// Returns the value of a field the selected variant cannot do without.
///
/// # Errors
///
/// Returns [`TmdbError::Validation`] naming `field` when it is missing.
pub fn required(field: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| TmdbError::validation(field, format!("missing required field {field}")))
}

/// Drops empty strings, which TMDB sends for unknown optional text.
#[must_use]
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_parse_date() {
        // Arrange & Act & Assert
        assert_eq!(
            parse_date("release_date", Some("2010-07-16")).unwrap(),
            NaiveDate::from_ymd_opt(2010, 7, 16)
        );
        assert_eq!(parse_date("release_date", Some("")).unwrap(), None);
        assert_eq!(parse_date("release_date", None).unwrap(), None);
    }

    #[test]
    fn test_parse_date_invalid() {
        // Arrange & Act
        let err = parse_date("release_date", Some("16/07/2010")).unwrap_err();

        // Assert
        assert!(matches!(
            err,
            TmdbError::Validation { ref field, .. } if field.as_deref() == Some("release_date")
        ));
    }

    #[test]
    fn test_page_defaults() {
        // Arrange
        let json = r#"{"results":[]}"#;

        // Act
        let page: TmdbPage<u32> = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_results, 0);
    }

    #[test]
    fn test_try_map_stops_on_error() {
        // Arrange
        let page = TmdbPage {
            page: 1,
            results: vec![1_u32, 2, 3],
            total_pages: 1,
            total_results: 3,
        };

        // Act
        let result = page.try_map(|n| {
            if n == 2 {
                Err(TmdbError::validation("n", "two"))
            } else {
                Ok(n)
            }
        });

        // Assert
        assert!(matches!(result, Err(TmdbError::Validation { .. })));
    }

    #[test]
    fn test_non_empty() {
        // Arrange & Act & Assert
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some(String::from("x"))).as_deref(), Some("x"));
        assert_eq!(non_empty(None), None);
    }
}
