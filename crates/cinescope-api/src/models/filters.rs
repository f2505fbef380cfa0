//! Search and discover filters.
//!
//! Every field is optional; unset fields are left out of the request.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Movie discover sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortBy {
    /// `popularity.asc`
    #[serde(rename = "popularity.asc")]
    PopularityAsc,
    /// `popularity.desc`
    #[serde(rename = "popularity.desc")]
    PopularityDesc,
    /// `release_date.asc`
    #[serde(rename = "release_date.asc")]
    ReleaseDateAsc,
    /// `release_date.desc`
    #[serde(rename = "release_date.desc")]
    ReleaseDateDesc,
    /// `revenue.asc`
    #[serde(rename = "revenue.asc")]
    RevenueAsc,
    /// `revenue.desc`
    #[serde(rename = "revenue.desc")]
    RevenueDesc,
    /// `primary_release_date.asc`
    #[serde(rename = "primary_release_date.asc")]
    PrimaryReleaseDateAsc,
    /// `primary_release_date.desc`
    #[serde(rename = "primary_release_date.desc")]
    PrimaryReleaseDateDesc,
    /// `original_title.asc`
    #[serde(rename = "original_title.asc")]
    OriginalTitleAsc,
    /// `original_title.desc`
    #[serde(rename = "original_title.desc")]
    OriginalTitleDesc,
    /// `vote_average.asc`
    #[serde(rename = "vote_average.asc")]
    VoteAverageAsc,
    /// `vote_average.desc`
    #[serde(rename = "vote_average.desc")]
    VoteAverageDesc,
    /// `vote_count.asc`
    #[serde(rename = "vote_count.asc")]
    VoteCountAsc,
    /// `vote_count.desc`
    #[serde(rename = "vote_count.desc")]
    VoteCountDesc,
}

impl SortBy {
    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PopularityAsc => "popularity.asc",
            Self::PopularityDesc => "popularity.desc",
            Self::ReleaseDateAsc => "release_date.asc",
            Self::ReleaseDateDesc => "release_date.desc",
            Self::RevenueAsc => "revenue.asc",
            Self::RevenueDesc => "revenue.desc",
            Self::PrimaryReleaseDateAsc => "primary_release_date.asc",
            Self::PrimaryReleaseDateDesc => "primary_release_date.desc",
            Self::OriginalTitleAsc => "original_title.asc",
            Self::OriginalTitleDesc => "original_title.desc",
            Self::VoteAverageAsc => "vote_average.asc",
            Self::VoteAverageDesc => "vote_average.desc",
            Self::VoteCountAsc => "vote_count.asc",
            Self::VoteCountDesc => "vote_count.desc",
        }
    }
}

/// TV discover sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TvSortBy {
    /// `vote_average.desc`
    #[serde(rename = "vote_average.desc")]
    VoteAverageDesc,
    /// `vote_average.asc`
    #[serde(rename = "vote_average.asc")]
    VoteAverageAsc,
    /// `first_air_date.desc`
    #[serde(rename = "first_air_date.desc")]
    FirstAirDateDesc,
    /// `first_air_date.asc`
    #[serde(rename = "first_air_date.asc")]
    FirstAirDateAsc,
    /// `popularity.desc`
    #[serde(rename = "popularity.desc")]
    PopularityDesc,
    /// `popularity.asc`
    #[serde(rename = "popularity.asc")]
    PopularityAsc,
}

impl TvSortBy {
    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VoteAverageDesc => "vote_average.desc",
            Self::VoteAverageAsc => "vote_average.asc",
            Self::FirstAirDateDesc => "first_air_date.desc",
            Self::FirstAirDateAsc => "first_air_date.asc",
            Self::PopularityDesc => "popularity.desc",
            Self::PopularityAsc => "popularity.asc",
        }
    }
}

/// Movie release type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReleaseType {
    /// 1
    Premiere,
    /// 2
    TheatricalLimited,
    /// 3
    Theatrical,
    /// 4
    Digital,
    /// 5
    Physical,
    /// 6
    Tv,
}

impl ReleaseType {
    /// Wire value.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Premiere => 1,
            Self::TheatricalLimited => 2,
            Self::Theatrical => 3,
            Self::Digital => 4,
            Self::Physical => 5,
            Self::Tv => 6,
        }
    }
}

/// Watch-provider monetization type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchMonetizationType {
    /// Subscription.
    Flatrate,
    /// Free.
    Free,
    /// Ad-supported.
    Ads,
    /// Rental.
    Rent,
    /// Purchase.
    Buy,
}

impl WatchMonetizationType {
    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flatrate => "flatrate",
            Self::Free => "free",
            Self::Ads => "ads",
            Self::Rent => "rent",
            Self::Buy => "buy",
        }
    }
}

/// TV series status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TvStatus {
    /// 0
    ReturningSeries,
    /// 1
    Planned,
    /// 2
    InProduction,
    /// 3
    Ended,
    /// 4
    Cancelled,
    /// 5
    Pilot,
}

impl TvStatus {
    /// Wire value.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::ReturningSeries => 0,
            Self::Planned => 1,
            Self::InProduction => 2,
            Self::Ended => 3,
            Self::Cancelled => 4,
            Self::Pilot => 5,
        }
    }
}

/// TV series type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TvType {
    /// 0
    Documentary,
    /// 1
    News,
    /// 2
    Miniseries,
    /// 3
    Reality,
    /// 4
    Scripted,
    /// 5
    TalkShow,
    /// 6
    Video,
}

impl TvType {
    /// Wire value.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Documentary => 0,
            Self::News => 1,
            Self::Miniseries => 2,
            Self::Reality => 3,
            Self::Scripted => 4,
            Self::TalkShow => 5,
            Self::Video => 6,
        }
    }
}

/// Trending time window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    /// Last 24 hours.
    Day,
    /// Last 7 days.
    #[default]
    Week,
}

impl TimeWindow {
    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
        }
    }
}

/// Media type selector for trending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Every media type.
    #[default]
    All,
    /// Movies.
    Movie,
    /// TV shows.
    Tv,
    /// People.
    Person,
}

impl MediaType {
    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Movie => "movie",
            Self::Tv => "tv",
            Self::Person => "person",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

macro_rules! display_code {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.code())
            }
        })*
    };
}

display_as_str!(SortBy, TvSortBy, WatchMonetizationType, TimeWindow, MediaType);
display_code!(ReleaseType, TvStatus, TvType);

/// Filters for `search/movie`, `search/tv`, `search/person` and `search/multi`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Search text.
    pub query: Option<String>,
    /// Page number (1-based).
    pub page: Option<u32>,
    /// Include adult content.
    pub include_adult: Option<bool>,
    /// Region (ISO 3166-1).
    pub region: Option<String>,
    /// Release year (movies) or first-air-date year (TV).
    pub year: Option<i32>,
    /// Primary release year (movies only).
    pub primary_release_year: Option<i32>,
    /// Response language.
    pub language: Option<String>,
}

impl SearchFilters {
    /// Creates filters for `query`.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    /// Sets the page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets `include_adult`.
    #[must_use]
    pub const fn include_adult(mut self, include: bool) -> Self {
        self.include_adult = Some(include);
        self
    }

    /// Sets the year.
    #[must_use]
    pub const fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the region.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

/// Filters for `discover/movie`.
///
/// `with_*` ID lists are passed through as TMDB expressions
/// (`,` for AND, `|` for OR).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverMovieFilters {
    /// Page number (1-based).
    pub page: Option<u32>,
    /// Response language.
    pub language: Option<String>,
    /// Region (ISO 3166-1).
    pub region: Option<String>,
    /// Sort order.
    pub sort_by: Option<SortBy>,
    /// Include adult content.
    pub include_adult: Option<bool>,
    /// Include video releases.
    pub include_video: Option<bool>,
    /// Primary release year.
    pub primary_release_year: Option<i32>,
    /// Primary release date lower bound.
    pub primary_release_date_gte: Option<NaiveDate>,
    /// Primary release date upper bound.
    pub primary_release_date_lte: Option<NaiveDate>,
    /// Release date lower bound.
    pub release_date_gte: Option<NaiveDate>,
    /// Release date upper bound.
    pub release_date_lte: Option<NaiveDate>,
    /// Release types (OR).
    pub with_release_type: Vec<ReleaseType>,
    /// Release year.
    pub year: Option<i32>,
    /// Vote count lower bound.
    pub vote_count_gte: Option<u32>,
    /// Vote count upper bound.
    pub vote_count_lte: Option<u32>,
    /// Vote average lower bound.
    pub vote_average_gte: Option<f64>,
    /// Vote average upper bound.
    pub vote_average_lte: Option<f64>,
    /// Cast person IDs.
    pub with_cast: Option<String>,
    /// Crew person IDs.
    pub with_crew: Option<String>,
    /// Cast or crew person IDs.
    pub with_people: Option<String>,
    /// Company IDs.
    pub with_companies: Option<String>,
    /// Excluded company IDs.
    pub without_companies: Option<String>,
    /// Genre IDs.
    pub with_genres: Option<String>,
    /// Excluded genre IDs.
    pub without_genres: Option<String>,
    /// Keyword IDs.
    pub with_keywords: Option<String>,
    /// Excluded keyword IDs.
    pub without_keywords: Option<String>,
    /// Runtime lower bound in minutes.
    pub with_runtime_gte: Option<u32>,
    /// Runtime upper bound in minutes.
    pub with_runtime_lte: Option<u32>,
    /// Original language (ISO 639-1).
    pub with_original_language: Option<String>,
    /// Watch provider IDs.
    pub with_watch_providers: Option<String>,
    /// Region for watch providers.
    pub watch_region: Option<String>,
    /// Monetization types (OR).
    pub with_watch_monetization_types: Vec<WatchMonetizationType>,
}

/// Filters for `discover/tv`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverTvFilters {
    /// Page number (1-based).
    pub page: Option<u32>,
    /// Response language.
    pub language: Option<String>,
    /// Sort order.
    pub sort_by: Option<TvSortBy>,
    /// Episode air date lower bound.
    pub air_date_gte: Option<NaiveDate>,
    /// Episode air date upper bound.
    pub air_date_lte: Option<NaiveDate>,
    /// First air date lower bound.
    pub first_air_date_gte: Option<NaiveDate>,
    /// First air date upper bound.
    pub first_air_date_lte: Option<NaiveDate>,
    /// First air date year.
    pub first_air_date_year: Option<i32>,
    /// Timezone for air-date filters.
    pub timezone: Option<String>,
    /// Vote average lower bound.
    pub vote_average_gte: Option<f64>,
    /// Vote count lower bound.
    pub vote_count_gte: Option<u32>,
    /// Genre IDs.
    pub with_genres: Option<String>,
    /// Excluded genre IDs.
    pub without_genres: Option<String>,
    /// Network IDs.
    pub with_networks: Option<String>,
    /// Runtime lower bound in minutes.
    pub with_runtime_gte: Option<u32>,
    /// Runtime upper bound in minutes.
    pub with_runtime_lte: Option<u32>,
    /// Include shows without a first air date.
    pub include_null_first_air_dates: Option<bool>,
    /// Original language (ISO 639-1).
    pub with_original_language: Option<String>,
    /// Keyword IDs.
    pub with_keywords: Option<String>,
    /// Excluded keyword IDs.
    pub without_keywords: Option<String>,
    /// Only shows screened theatrically.
    pub screened_theatrically: Option<bool>,
    /// Company IDs.
    pub with_companies: Option<String>,
    /// Excluded company IDs.
    pub without_companies: Option<String>,
    /// Watch provider IDs.
    pub with_watch_providers: Option<String>,
    /// Region for watch providers.
    pub watch_region: Option<String>,
    /// Monetization types (OR).
    pub with_watch_monetization_types: Vec<WatchMonetizationType>,
    /// Series statuses (OR).
    pub with_status: Vec<TvStatus>,
    /// Series types (OR).
    pub with_type: Vec<TvType>,
}
