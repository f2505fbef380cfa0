//! Person schema types (`search/person`, `person/*`).

use serde::Deserialize;

use super::movie::{TmdbMovie, map_movie};
use super::search::TmdbMediaItem;
use super::tv::{TmdbTvShow, map_tv_show};
use super::{non_empty, parse_date, required};
use crate::error::{Result, TmdbError};
use crate::models::{
    KnownFor, MovieCastCredit, MovieCrewCredit, Person, PersonDetails, PersonMovieCredits,
    PersonTvCredits, TvCastCredit, TvCrewCredit,
};

/// External key to domain key, for every [`Person`] field.
pub const PERSON_FIELD_MAP: &[(&str, &str)] = &[
    ("id", "id"),
    ("name", "name"),
    ("original_name", "originalName"),
    ("biography", "biography"),
    ("birthday", "birthday"),
    ("gender", "gender"),
    ("profile_path", "profilePath"),
    ("known_for_department", "knownForDepartment"),
    ("popularity", "popularity"),
    ("adult", "adult"),
    ("also_known_as", "alsoKnownAs"),
    ("known_for", "knownFor"),
];

/// Person summary as sent by TMDB.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbPerson {
    /// Person ID.
    pub id: u64,
    /// Name.
    pub name: Option<String>,
    /// Original name.
    pub original_name: Option<String>,
    /// Biography (details only).
    pub biography: Option<String>,
    /// Birthday (details only).
    pub birthday: Option<String>,
    /// Gender code.
    pub gender: Option<u8>,
    /// Profile path.
    pub profile_path: Option<String>,
    /// Primary department.
    pub known_for_department: Option<String>,
    /// Popularity.
    pub popularity: Option<f64>,
    /// Adult flag.
    pub adult: Option<bool>,
    /// Alternative names (details only).
    pub also_known_as: Option<Vec<String>>,
    /// Notable works (list results only).
    pub known_for: Option<Vec<TmdbMediaItem>>,
}

/// Response of `person/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPersonDetails {
    /// Summary fields.
    #[serde(flatten)]
    pub person: TmdbPerson,
    /// Date of death.
    pub deathday: Option<String>,
    /// Place of birth.
    pub place_of_birth: Option<String>,
    /// Homepage.
    pub homepage: Option<String>,
    /// IMDb ID.
    pub imdb_id: Option<String>,
}

/// Movie credit entry (cast or crew).
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieCredit {
    /// Movie fields.
    #[serde(flatten)]
    pub movie: TmdbMovie,
    /// Character (cast only).
    pub character: Option<String>,
    /// Credit ID.
    pub credit_id: Option<String>,
    /// Billing order (cast only).
    pub order: Option<u32>,
    /// Department (crew only).
    pub department: Option<String>,
    /// Job (crew only).
    pub job: Option<String>,
}

/// TV credit entry (cast or crew).
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbTvCredit {
    /// Show fields.
    #[serde(flatten)]
    pub show: TmdbTvShow,
    /// Character (cast only).
    pub character: Option<String>,
    /// Credit ID.
    pub credit_id: Option<String>,
    /// Episode count.
    pub episode_count: Option<u32>,
    /// Department (crew only).
    pub department: Option<String>,
    /// Job (crew only).
    pub job: Option<String>,
}

/// Response of `person/{id}/movie_credits`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPersonMovieCredits {
    /// Person ID.
    pub id: u64,
    /// Cast entries.
    #[serde(default)]
    pub cast: Vec<TmdbMovieCredit>,
    /// Crew entries.
    #[serde(default)]
    pub crew: Vec<TmdbMovieCredit>,
}

/// Response of `person/{id}/tv_credits`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPersonTvCredits {
    /// Person ID.
    pub id: u64,
    /// Cast entries.
    #[serde(default)]
    pub cast: Vec<TmdbTvCredit>,
    /// Crew entries.
    #[serde(default)]
    pub crew: Vec<TmdbTvCredit>,
}

/// Maps a `known_for` entry. Only movies and TV shows are accepted.
///
/// # Errors
///
/// Returns a validation error on `media_type` for any other tag.
pub fn map_known_for(raw: TmdbMediaItem) -> Result<KnownFor> {
    match raw.media_type.as_deref() {
        Some("movie") => Ok(KnownFor::Movie(map_movie(raw.into_movie())?)),
        Some("tv") => Ok(KnownFor::Tv(map_tv_show(raw.into_tv_show())?)),
        other => Err(TmdbError::validation(
            "media_type",
            format!("unknown known_for media type: {}", other.unwrap_or("<missing>")),
        )),
    }
}

/// Maps a raw person summary.
///
/// # Errors
///
/// Returns a validation error if `name` is missing or `birthday` is malformed.
/// Invalid `known_for` entries are dropped with a warning.
pub fn map_person(raw: TmdbPerson) -> Result<Person> {
    let name = required("name", raw.name)?;
    let person_id = raw.id;
    let known_for = raw
        .known_for
        .unwrap_or_default()
        .into_iter()
        .filter_map(|item| {
            map_known_for(item)
                .inspect_err(|e| {
                    tracing::warn!(person_id, error = %e, "Skipping known_for entry");
                })
                .ok()
        })
        .collect();

    Ok(Person {
        id: raw.id,
        original_name: raw.original_name.unwrap_or_else(|| name.clone()),
        name,
        biography: raw.biography.unwrap_or_default(),
        birthday: parse_date("birthday", raw.birthday.as_deref())?,
        gender: raw.gender.unwrap_or_default(),
        profile_path: raw.profile_path,
        known_for_department: non_empty(raw.known_for_department),
        popularity: raw.popularity.unwrap_or_default(),
        adult: raw.adult.unwrap_or_default(),
        also_known_as: raw.also_known_as.unwrap_or_default(),
        known_for,
    })
}

/// Maps a raw `person/{id}` response.
///
/// # Errors
///
/// Same as [`map_person`], plus a malformed `deathday`.
pub fn map_person_details(raw: TmdbPersonDetails) -> Result<PersonDetails> {
    Ok(PersonDetails {
        person: map_person(raw.person)?,
        deathday: parse_date("deathday", raw.deathday.as_deref())?,
        place_of_birth: non_empty(raw.place_of_birth),
        homepage: non_empty(raw.homepage),
        imdb_id: non_empty(raw.imdb_id),
    })
}

/// Maps a raw `person/{id}/movie_credits` response.
///
/// # Errors
///
/// Returns the first entry mapping error.
pub fn map_movie_credits(raw: TmdbPersonMovieCredits) -> Result<PersonMovieCredits> {
    let cast = raw
        .cast
        .into_iter()
        .map(|c| {
            Ok(MovieCastCredit {
                movie: map_movie(c.movie)?,
                character: c.character.unwrap_or_default(),
                credit_id: c.credit_id.unwrap_or_default(),
                order: c.order.unwrap_or_default(),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let crew = raw
        .crew
        .into_iter()
        .map(|c| {
            Ok(MovieCrewCredit {
                movie: map_movie(c.movie)?,
                department: c.department.unwrap_or_default(),
                job: c.job.unwrap_or_default(),
                credit_id: c.credit_id.unwrap_or_default(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PersonMovieCredits {
        id: raw.id,
        cast,
        crew,
    })
}

/// Maps a raw `person/{id}/tv_credits` response.
///
/// # Errors
///
/// Returns the first entry mapping error.
pub fn map_tv_credits(raw: TmdbPersonTvCredits) -> Result<PersonTvCredits> {
    let cast = raw
        .cast
        .into_iter()
        .map(|c| {
            Ok(TvCastCredit {
                show: map_tv_show(c.show)?,
                character: c.character.unwrap_or_default(),
                credit_id: c.credit_id.unwrap_or_default(),
                episode_count: c.episode_count.unwrap_or_default(),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let crew = raw
        .crew
        .into_iter()
        .map(|c| {
            Ok(TvCrewCredit {
                show: map_tv_show(c.show)?,
                department: c.department.unwrap_or_default(),
                job: c.job.unwrap_or_default(),
                credit_id: c.credit_id.unwrap_or_default(),
                episode_count: c.episode_count.unwrap_or_default(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PersonTvCredits {
        id: raw.id,
        cast,
        crew,
    })
}
