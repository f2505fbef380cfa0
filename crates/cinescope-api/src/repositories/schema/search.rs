//! Mixed-media schema types (`search/multi`, `trending/*`, `known_for`).

use serde::Deserialize;

use super::movie::{TmdbMovie, map_movie};
use super::person::{TmdbPerson, map_person};
use super::tv::{TmdbTvShow, map_tv_show};
use crate::error::{Result, TmdbError};
use crate::models::{MediaResult, MediaType};

/// Entry of a mixed-media list, tagged by `media_type`.
///
/// Carries the union of movie, TV and person fields; the tag decides
/// which subset is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbMediaItem {
    /// `movie`, `tv` or `person`.
    pub media_type: Option<String>,
    /// TMDB ID.
    pub id: u64,
    /// Movie title.
    pub title: Option<String>,
    /// Movie original title.
    pub original_title: Option<String>,
    /// Movie release date.
    pub release_date: Option<String>,
    /// Movie video flag.
    pub video: Option<bool>,
    /// TV or person name.
    pub name: Option<String>,
    /// TV or person original name.
    pub original_name: Option<String>,
    /// TV first air date.
    pub first_air_date: Option<String>,
    /// TV countries of origin.
    pub origin_country: Option<Vec<String>>,
    /// Person gender code.
    pub gender: Option<u8>,
    /// Person primary department.
    pub known_for_department: Option<String>,
    /// Person profile path.
    pub profile_path: Option<String>,
    /// Person notable works.
    pub known_for: Option<Vec<TmdbMediaItem>>,
    /// Overview.
    pub overview: Option<String>,
    /// Poster path.
    pub poster_path: Option<String>,
    /// Backdrop path.
    pub backdrop_path: Option<String>,
    /// Average rating.
    pub vote_average: Option<f64>,
    /// Vote count.
    pub vote_count: Option<u32>,
    /// Popularity.
    pub popularity: Option<f64>,
    /// Adult flag.
    pub adult: Option<bool>,
    /// Original language.
    pub original_language: Option<String>,
    /// Genre IDs.
    pub genre_ids: Option<Vec<u32>>,
}

impl TmdbMediaItem {
    /// Movie subset.
    #[must_use]
    pub fn into_movie(self) -> TmdbMovie {
        TmdbMovie {
            id: self.id,
            title: self.title,
            original_title: self.original_title,
            overview: self.overview,
            release_date: self.release_date,
            poster_path: self.poster_path,
            backdrop_path: self.backdrop_path,
            vote_average: self.vote_average,
            vote_count: self.vote_count,
            popularity: self.popularity,
            adult: self.adult,
            original_language: self.original_language,
            genre_ids: self.genre_ids,
            video: self.video,
        }
    }

    /// TV subset.
    #[must_use]
    pub fn into_tv_show(self) -> TmdbTvShow {
        TmdbTvShow {
            id: self.id,
            name: self.name,
            original_name: self.original_name,
            overview: self.overview,
            first_air_date: self.first_air_date,
            poster_path: self.poster_path,
            backdrop_path: self.backdrop_path,
            genre_ids: self.genre_ids,
            popularity: self.popularity,
            vote_average: self.vote_average,
            vote_count: self.vote_count,
            adult: self.adult,
            original_language: self.original_language,
            origin_country: self.origin_country,
        }
    }

    /// Person subset.
    #[must_use]
    pub fn into_person(self) -> TmdbPerson {
        TmdbPerson {
            id: self.id,
            name: self.name,
            original_name: self.original_name,
            gender: self.gender,
            profile_path: self.profile_path,
            known_for_department: self.known_for_department,
            popularity: self.popularity,
            adult: self.adult,
            known_for: self.known_for,
            ..TmdbPerson::default()
        }
    }
}

/// Maps a mixed-media entry by its `media_type` tag.
///
/// `fallback` is used only when the entry carries no tag, which happens on
/// single-type trending lists.
///
/// # Errors
///
/// - Unknown or missing tag: validation error on `media_type`.
/// - Missing `title` (movie) or `name` (tv, person): validation error.
pub fn map_media_item(raw: TmdbMediaItem, fallback: Option<MediaType>) -> Result<MediaResult> {
    let tag = raw
        .media_type
        .clone()
        .or_else(|| fallback.map(|m| String::from(m.as_str())));

    match tag.as_deref() {
        Some("movie") => Ok(MediaResult::Movie(map_movie(raw.into_movie())?)),
        Some("tv") => Ok(MediaResult::Tv(map_tv_show(raw.into_tv_show())?)),
        Some("person") => Ok(MediaResult::Person(map_person(raw.into_person())?)),
        Some(other) => Err(TmdbError::validation(
            "media_type",
            format!("unknown media type: {other}"),
        )),
        None => Err(TmdbError::validation("media_type", "missing media type")),
    }
}
