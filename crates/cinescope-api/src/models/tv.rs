//! TV show domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::movie::{Genre, ProductionCompany};

/// TV show summary, as returned by search and list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TvShow {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Name in the original language.
    pub original_name: String,
    /// Plot summary (empty when unknown).
    pub overview: String,
    /// First air date.
    pub first_air_date: Option<NaiveDate>,
    /// Relative poster image path.
    pub poster_path: Option<String>,
    /// Relative backdrop image path.
    pub backdrop_path: Option<String>,
    /// Genre IDs.
    pub genre_ids: Vec<u32>,
    /// Popularity score (0.0 when unknown).
    pub popularity: f64,
    /// Average rating (0.0 when unknown).
    pub vote_average: f64,
    /// Number of votes (0 when unknown).
    pub vote_count: u32,
    /// Adult content flag.
    pub adult: bool,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Countries of origin (ISO 3166-1).
    pub origin_country: Vec<String>,
}

/// Broadcast network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// Network ID.
    pub id: u64,
    /// Network name.
    pub name: String,
    /// Relative logo image path.
    pub logo_path: Option<String>,
    /// Country of origin (ISO 3166-1).
    pub origin_country: String,
}

/// Series creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    /// Person ID.
    pub id: u64,
    /// Person name.
    pub name: String,
    /// Credit ID.
    pub credit_id: String,
    /// Relative profile image path.
    pub profile_path: Option<String>,
}

/// Season entry in a TV show's details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonSummary {
    /// Season ID.
    pub id: u64,
    /// Season name.
    pub name: String,
    /// Season overview.
    pub overview: String,
    /// Air date of the first episode.
    pub air_date: Option<NaiveDate>,
    /// Number of episodes.
    pub episode_count: u32,
    /// Relative poster image path.
    pub poster_path: Option<String>,
    /// Season number (0 = specials).
    pub season_number: u32,
    /// Average rating.
    pub vote_average: f64,
}

/// Full TV show record from `tv/{id}`.
///
/// `show.genre_ids` is derived from `genres`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TvShowDetails {
    /// Summary fields.
    #[serde(flatten)]
    pub show: TvShow,
    /// Total episode count.
    pub number_of_episodes: u32,
    /// Total season count.
    pub number_of_seasons: u32,
    /// Broadcast networks.
    pub networks: Vec<Network>,
    /// Creators.
    pub created_by: Vec<Creator>,
    /// Series status (e.g. `Returning Series`, `Ended`).
    pub status: String,
    /// Series type (e.g. `Scripted`).
    #[serde(rename = "type")]
    pub show_type: String,
    /// Episode runtimes in minutes.
    pub episode_run_time: Vec<u32>,
    /// Genres.
    pub genres: Vec<Genre>,
    /// Official homepage.
    pub homepage: Option<String>,
    /// Whether the series is still in production.
    pub in_production: bool,
    /// Spoken languages (ISO 639-1).
    pub languages: Vec<String>,
    /// Last air date.
    pub last_air_date: Option<NaiveDate>,
    /// Production companies.
    pub production_companies: Vec<ProductionCompany>,
    /// Seasons.
    pub seasons: Vec<SeasonSummary>,
    /// Tagline.
    pub tagline: Option<String>,
}
