//! Domain types.
//!
//! Immutable value records built from API responses. They serialize with
//! camelCase keys and are independent of the upstream JSON layout.

mod filters;
mod movie;
mod person;
mod search;
mod tv;

pub use filters::{
    DiscoverMovieFilters, DiscoverTvFilters, MediaType, ReleaseType, SearchFilters, SortBy,
    TimeWindow, TvSortBy, TvStatus, TvType, WatchMonetizationType,
};
pub use movie::{
    Collection, Genre, Movie, MovieDetails, ProductionCompany, ProductionCountry, SpokenLanguage,
};
pub use person::{
    KnownFor, MovieCastCredit, MovieCrewCredit, Person, PersonDetails, PersonMovieCredits,
    PersonTvCredits, TvCastCredit, TvCrewCredit,
};
pub use search::{MediaResult, MultiSearchResult, SearchResult, TrendingResult};
pub use tv::{Creator, Network, SeasonSummary, TvShow, TvShowDetails};
