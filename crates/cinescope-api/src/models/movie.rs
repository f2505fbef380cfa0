//! Movie domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Movie summary, as returned by search and list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Title in the original language.
    pub original_title: String,
    /// Plot summary (empty when unknown).
    pub overview: String,
    /// Release date.
    pub release_date: Option<NaiveDate>,
    /// Relative poster image path.
    pub poster_path: Option<String>,
    /// Relative backdrop image path.
    pub backdrop_path: Option<String>,
    /// Average rating (0.0 when unknown).
    pub vote_average: f64,
    /// Number of votes (0 when unknown).
    pub vote_count: u32,
    /// Popularity score (0.0 when unknown).
    pub popularity: f64,
    /// Adult content flag.
    pub adult: bool,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Genre IDs.
    pub genre_ids: Vec<u32>,
    /// Whether the entry is a video release.
    pub video: bool,
}

/// Genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    /// Genre ID.
    pub id: u32,
    /// Genre name.
    pub name: String,
}

/// Production company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionCompany {
    /// Company ID.
    pub id: u64,
    /// Company name.
    pub name: String,
    /// Relative logo image path.
    pub logo_path: Option<String>,
    /// Country of origin (ISO 3166-1).
    pub origin_country: String,
}

/// Production country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionCountry {
    /// ISO 3166-1 code.
    pub country_code: String,
    /// Country name.
    pub name: String,
}

/// Spoken language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpokenLanguage {
    /// English name.
    pub english_name: String,
    /// ISO 639-1 code.
    pub language_code: String,
    /// Native name.
    pub name: String,
}

/// Collection a movie belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// Collection ID.
    pub id: u64,
    /// Collection name.
    pub name: String,
    /// Relative poster image path.
    pub poster_path: Option<String>,
    /// Relative backdrop image path.
    pub backdrop_path: Option<String>,
}

/// Full movie record from `movie/{id}`.
///
/// `movie.genre_ids` is derived from `genres`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetails {
    /// Summary fields.
    #[serde(flatten)]
    pub movie: Movie,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Genres.
    pub genres: Vec<Genre>,
    /// Budget in USD (0 when unknown).
    pub budget: u64,
    /// Revenue in USD (0 when unknown).
    pub revenue: u64,
    /// Production companies.
    pub production_companies: Vec<ProductionCompany>,
    /// Production countries.
    pub production_countries: Vec<ProductionCountry>,
    /// Spoken languages.
    pub spoken_languages: Vec<SpokenLanguage>,
    /// Parent collection.
    pub belongs_to_collection: Option<Collection>,
    /// Official homepage.
    pub homepage: Option<String>,
    /// IMDb ID (e.g. `tt1375666`).
    pub imdb_id: Option<String>,
    /// Release status (e.g. `Released`).
    pub status: String,
    /// Tagline.
    pub tagline: Option<String>,
}
