//! Person and credit domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::movie::Movie;
use super::tv::TvShow;

/// Work a person is known for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mediaType", rename_all = "lowercase")]
pub enum KnownFor {
    /// A movie.
    Movie(Movie),
    /// A TV show.
    Tv(TvShow),
}

/// Person summary, as returned by search and list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// TMDB person ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Name in the original script.
    pub original_name: String,
    /// Biography (empty for list results).
    pub biography: String,
    /// Date of birth.
    pub birthday: Option<NaiveDate>,
    /// Gender code (0 unknown, 1 female, 2 male, 3 non-binary).
    pub gender: u8,
    /// Relative profile image path.
    pub profile_path: Option<String>,
    /// Primary department (e.g. `Acting`).
    pub known_for_department: Option<String>,
    /// Popularity score (0.0 when unknown).
    pub popularity: f64,
    /// Adult content flag.
    pub adult: bool,
    /// Alternative names.
    pub also_known_as: Vec<String>,
    /// Notable works.
    pub known_for: Vec<KnownFor>,
}

/// Full person record from `person/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDetails {
    /// Summary fields.
    #[serde(flatten)]
    pub person: Person,
    /// Date of death.
    pub deathday: Option<NaiveDate>,
    /// Place of birth.
    pub place_of_birth: Option<String>,
    /// Official homepage.
    pub homepage: Option<String>,
    /// IMDb ID (e.g. `nm0000138`).
    pub imdb_id: Option<String>,
}

/// Acting credit in a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieCastCredit {
    /// Movie fields.
    #[serde(flatten)]
    pub movie: Movie,
    /// Character name.
    pub character: String,
    /// Credit ID.
    pub credit_id: String,
    /// Billing order.
    pub order: u32,
}

/// Crew credit in a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieCrewCredit {
    /// Movie fields.
    #[serde(flatten)]
    pub movie: Movie,
    /// Department (e.g. `Directing`).
    pub department: String,
    /// Job (e.g. `Director`).
    pub job: String,
    /// Credit ID.
    pub credit_id: String,
}

/// Acting credit in a TV show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TvCastCredit {
    /// Show fields.
    #[serde(flatten)]
    pub show: TvShow,
    /// Character name.
    pub character: String,
    /// Credit ID.
    pub credit_id: String,
    /// Number of episodes.
    pub episode_count: u32,
}

/// Crew credit in a TV show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TvCrewCredit {
    /// Show fields.
    #[serde(flatten)]
    pub show: TvShow,
    /// Department.
    pub department: String,
    /// Job.
    pub job: String,
    /// Credit ID.
    pub credit_id: String,
    /// Number of episodes.
    pub episode_count: u32,
}

/// Movie credits of a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonMovieCredits {
    /// Person ID.
    pub id: u64,
    /// Cast credits.
    pub cast: Vec<MovieCastCredit>,
    /// Crew credits.
    pub crew: Vec<MovieCrewCredit>,
}

/// TV credits of a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonTvCredits {
    /// Person ID.
    pub id: u64,
    /// Cast credits.
    pub cast: Vec<TvCastCredit>,
    /// Crew credits.
    pub crew: Vec<TvCrewCredit>,
}
