//! TMDB v3 client library for cinescope.
//!
//! Searches, discovers and looks up movies, TV shows and people, and maps
//! TMDB responses into typed domain records. [`AppContainer`] wires the
//! whole stack from [`TmdbConfig`]:
//!
//! ```no_run
//! # async fn run() -> cinescope_api::error::Result<()> {
//! use cinescope_api::AppContainer;
//! use cinescope_api::use_cases::MovieSearchRequest;
//!
//! let container = AppContainer::from_env()?;
//! let page = container
//!     .movies()
//!     .search(MovieSearchRequest::new("Inception"))
//!     .await?;
//! println!("{} results", page.total_results);
//! # Ok(())
//! # }
//! ```
//!
//! The library logs through `tracing` and never installs a subscriber.

/// TMDB API client.
pub mod client;
/// Layered configuration.
pub mod config;
/// Dependency assembly.
pub mod container;
/// Error taxonomy.
pub mod error;
/// Display helpers.
pub mod format;
/// Domain types and filters.
pub mod models;
/// Query-string builder.
pub mod query;
/// Repositories over the TMDB API.
pub mod repositories;
/// HTTP transport.
pub mod transport;
/// Use cases.
pub mod use_cases;

pub use client::TmdbClient;
pub use config::TmdbConfig;
pub use container::AppContainer;
pub use error::{Result, TmdbError};
