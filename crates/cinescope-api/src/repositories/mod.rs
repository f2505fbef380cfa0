//! Repositories over the TMDB API.
//!
//! Each repository turns typed filters into query parameters, calls
//! [`crate::client::TmdbClient`] and maps the upstream schema into domain
//! types. Failures are logged at `warn` and returned unchanged.

mod api;
mod movie;
mod person;
pub mod schema;
mod search;
mod tv;

#[allow(clippy::module_name_repetitions)]
pub use api::{
    LocalMovieRepository, LocalPersonRepository, LocalSearchRepository, LocalTvShowRepository,
    MovieRepository, PersonRepository, SearchRepository, TvShowRepository,
};
#[allow(clippy::module_name_repetitions)]
pub use movie::TmdbMovieRepository;
#[allow(clippy::module_name_repetitions)]
pub use person::TmdbPersonRepository;
#[allow(clippy::module_name_repetitions)]
pub use search::TmdbSearchRepository;
#[allow(clippy::module_name_repetitions)]
pub use tv::TmdbTvShowRepository;

use crate::error::TmdbError;
use crate::query::QueryParams;

/// Query for list endpoints that only take a page.
fn page_query(page: Option<u32>) -> QueryParams {
    QueryParams::new().opt("page", page)
}

/// Logs a failed repository operation.
fn log_failure(operation: &str, err: &TmdbError) {
    tracing::warn!(operation, error = %err, "TMDB repository call failed");
}
