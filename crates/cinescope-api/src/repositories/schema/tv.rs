//! TV schema types (`search/tv`, `discover/tv`, `tv/*`).

use serde::Deserialize;

use super::movie::{TmdbGenre, TmdbProductionCompany};
use super::{non_empty, parse_date, required};
use crate::error::Result;
use crate::models::{
    Creator, Genre, Network, ProductionCompany, SeasonSummary, TvShow, TvShowDetails,
};

/// External key to domain key, for every [`TvShow`] field.
pub const TV_SHOW_FIELD_MAP: &[(&str, &str)] = &[
    ("id", "id"),
    ("name", "name"),
    ("original_name", "originalName"),
    ("overview", "overview"),
    ("first_air_date", "firstAirDate"),
    ("poster_path", "posterPath"),
    ("backdrop_path", "backdropPath"),
    ("genre_ids", "genreIds"),
    ("popularity", "popularity"),
    ("vote_average", "voteAverage"),
    ("vote_count", "voteCount"),
    ("adult", "adult"),
    ("original_language", "originalLanguage"),
    ("origin_country", "originCountry"),
];

/// TV show summary as sent by TMDB.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbTvShow {
    /// Series ID.
    pub id: u64,
    /// Localized name.
    pub name: Option<String>,
    /// Original name.
    pub original_name: Option<String>,
    /// Overview.
    pub overview: Option<String>,
    /// First air date (`YYYY-MM-DD` or empty).
    pub first_air_date: Option<String>,
    /// Poster path.
    pub poster_path: Option<String>,
    /// Backdrop path.
    pub backdrop_path: Option<String>,
    /// Genre IDs (absent on details responses).
    pub genre_ids: Option<Vec<u32>>,
    /// Popularity.
    pub popularity: Option<f64>,
    /// Average rating.
    pub vote_average: Option<f64>,
    /// Vote count.
    pub vote_count: Option<u32>,
    /// Adult flag.
    pub adult: Option<bool>,
    /// Original language.
    pub original_language: Option<String>,
    /// Countries of origin.
    pub origin_country: Option<Vec<String>>,
}

/// Network.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbNetwork {
    /// Network ID.
    pub id: u64,
    /// Network name.
    #[serde(default)]
    pub name: String,
    /// Logo path.
    pub logo_path: Option<String>,
    /// Country of origin.
    #[serde(default)]
    pub origin_country: String,
}

/// Creator.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCreator {
    /// Person ID.
    pub id: u64,
    /// Person name.
    #[serde(default)]
    pub name: String,
    /// Credit ID.
    #[serde(default)]
    pub credit_id: String,
    /// Profile path.
    pub profile_path: Option<String>,
}

/// Season summary.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbSeason {
    /// Season ID.
    pub id: u64,
    /// Season name.
    #[serde(default)]
    pub name: String,
    /// Overview.
    pub overview: Option<String>,
    /// Air date.
    pub air_date: Option<String>,
    /// Episode count.
    pub episode_count: Option<u32>,
    /// Poster path.
    pub poster_path: Option<String>,
    /// Season number.
    pub season_number: u32,
    /// Average rating.
    pub vote_average: Option<f64>,
}

/// Response of `tv/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbTvDetails {
    /// Summary fields.
    #[serde(flatten)]
    pub show: TmdbTvShow,
    /// Total episodes.
    pub number_of_episodes: Option<u32>,
    /// Total seasons.
    pub number_of_seasons: Option<u32>,
    /// Networks.
    pub networks: Option<Vec<TmdbNetwork>>,
    /// Creators.
    pub created_by: Option<Vec<TmdbCreator>>,
    /// Series status.
    pub status: Option<String>,
    /// Series type.
    #[serde(rename = "type")]
    pub show_type: Option<String>,
    /// Episode runtimes.
    pub episode_run_time: Option<Vec<u32>>,
    /// Genres.
    pub genres: Option<Vec<TmdbGenre>>,
    /// Homepage.
    pub homepage: Option<String>,
    /// In production flag.
    pub in_production: Option<bool>,
    /// Languages.
    pub languages: Option<Vec<String>>,
    /// Last air date.
    pub last_air_date: Option<String>,
    /// Production companies.
    pub production_companies: Option<Vec<TmdbProductionCompany>>,
    /// Seasons.
    pub seasons: Option<Vec<TmdbSeason>>,
    /// Tagline.
    pub tagline: Option<String>,
}

/// Maps a raw TV show summary.
///
/// # Errors
///
/// Returns a validation error if `name` is missing or `first_air_date` is
/// malformed.
pub fn map_tv_show(raw: TmdbTvShow) -> Result<TvShow> {
    let name = required("name", raw.name)?;
    Ok(TvShow {
        id: raw.id,
        original_name: raw.original_name.unwrap_or_else(|| name.clone()),
        name,
        overview: raw.overview.unwrap_or_default(),
        first_air_date: parse_date("first_air_date", raw.first_air_date.as_deref())?,
        poster_path: raw.poster_path,
        backdrop_path: raw.backdrop_path,
        genre_ids: raw.genre_ids.unwrap_or_default(),
        popularity: raw.popularity.unwrap_or_default(),
        vote_average: raw.vote_average.unwrap_or_default(),
        vote_count: raw.vote_count.unwrap_or_default(),
        adult: raw.adult.unwrap_or_default(),
        original_language: raw.original_language.unwrap_or_default(),
        origin_country: raw.origin_country.unwrap_or_default(),
    })
}

fn map_season(raw: TmdbSeason) -> Result<SeasonSummary> {
    Ok(SeasonSummary {
        id: raw.id,
        name: raw.name,
        overview: raw.overview.unwrap_or_default(),
        air_date: parse_date("seasons.air_date", raw.air_date.as_deref())?,
        episode_count: raw.episode_count.unwrap_or_default(),
        poster_path: raw.poster_path,
        season_number: raw.season_number,
        vote_average: raw.vote_average.unwrap_or_default(),
    })
}

/// Maps a raw `tv/{id}` response. `genre_ids` is taken from `genres`.
///
/// # Errors
///
/// Same as [`map_tv_show`], plus malformed `last_air_date` or season dates.
pub fn map_tv_details(raw: TmdbTvDetails) -> Result<TvShowDetails> {
    let genres: Vec<Genre> = raw
        .genres
        .unwrap_or_default()
        .into_iter()
        .map(|g| Genre {
            id: g.id,
            name: g.name,
        })
        .collect();

    let mut show = map_tv_show(raw.show)?;
    show.genre_ids = genres.iter().map(|g| g.id).collect();

    let seasons = raw
        .seasons
        .unwrap_or_default()
        .into_iter()
        .map(map_season)
        .collect::<Result<Vec<_>>>()?;

    Ok(TvShowDetails {
        show,
        number_of_episodes: raw.number_of_episodes.unwrap_or_default(),
        number_of_seasons: raw.number_of_seasons.unwrap_or_default(),
        networks: raw
            .networks
            .unwrap_or_default()
            .into_iter()
            .map(|n| Network {
                id: n.id,
                name: n.name,
                logo_path: n.logo_path,
                origin_country: n.origin_country,
            })
            .collect(),
        created_by: raw
            .created_by
            .unwrap_or_default()
            .into_iter()
            .map(|c| Creator {
                id: c.id,
                name: c.name,
                credit_id: c.credit_id,
                profile_path: c.profile_path,
            })
            .collect(),
        status: raw.status.unwrap_or_default(),
        show_type: raw.show_type.unwrap_or_default(),
        episode_run_time: raw.episode_run_time.unwrap_or_default(),
        genres,
        homepage: non_empty(raw.homepage),
        in_production: raw.in_production.unwrap_or_default(),
        languages: raw.languages.unwrap_or_default(),
        last_air_date: parse_date("last_air_date", raw.last_air_date.as_deref())?,
        production_companies: raw
            .production_companies
            .unwrap_or_default()
            .into_iter()
            .map(|c| ProductionCompany {
                id: c.id,
                name: c.name,
                logo_path: c.logo_path,
                origin_country: c.origin_country,
            })
            .collect(),
        seasons,
        tagline: non_empty(raw.tagline),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]
    #![allow(clippy::float_cmp)]

    use chrono::NaiveDate;

    use super::*;
    use crate::error::TmdbError;
    use crate::repositories::schema::TmdbPage;

    const SEARCH_JSON: &str = include_str!("../../../../../fixtures/tmdb/search_tv_breaking_bad.json");

    #[test]
    fn test_parse_search_tv_fixture() {
        // Arrange
        let page: TmdbPage<TmdbTvShow> = serde_json::from_str(SEARCH_JSON).unwrap();

        // Act
        let result = page.try_map(map_tv_show).unwrap();

        // Assert
        let first = &result.results[0];
        assert_eq!(first.id, 1396);
        assert_eq!(first.name, "Breaking Bad");
        assert_eq!(first.first_air_date, NaiveDate::from_ymd_opt(2008, 1, 20));
        assert_eq!(first.origin_country, vec![String::from("US")]);
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        // Arrange
        let page: TmdbPage<TmdbTvShow> = serde_json::from_str(SEARCH_JSON).unwrap();

        // Act
        let result = page.try_map(map_tv_show).unwrap();

        // Assert
        let second = &result.results[1];
        assert!(second.genre_ids.is_empty());
        assert!(second.origin_country.is_empty());
        assert_eq!(second.first_air_date, None);
        assert_eq!(second.vote_average, 0.0);
    }

    #[test]
    fn test_missing_name_is_validation_error() {
        // Arrange
        let raw: TmdbTvShow = serde_json::from_str(r#"{"id":5}"#).unwrap();

        // Act
        let err = map_tv_show(raw).unwrap_err();

        // Assert
        assert!(matches!(
            err,
            TmdbError::Validation { ref field, .. } if field.as_deref() == Some("name")
        ));
    }

    #[test]
    fn test_field_map_round_trip() {
        // Arrange
        let raw_page: serde_json::Value = serde_json::from_str(SEARCH_JSON).unwrap();
        let external = &raw_page["results"][0];
        let raw: TmdbTvShow = serde_json::from_value(external.clone()).unwrap();

        // Act
        let internal = serde_json::to_value(map_tv_show(raw).unwrap()).unwrap();

        // Assert
        assert_eq!(internal.as_object().unwrap().len(), TV_SHOW_FIELD_MAP.len());
        for (external_key, internal_key) in TV_SHOW_FIELD_MAP {
            assert_eq!(
                internal[internal_key], external[external_key],
                "{external_key} -> {internal_key}"
            );
        }
    }

    #[test]
    fn test_parse_tv_details_fixture() {
        // Arrange
        let json = include_str!("../../../../../fixtures/tmdb/tv_details_1396.json");
        let raw: TmdbTvDetails = serde_json::from_str(json).unwrap();

        // Act
        let details = map_tv_details(raw).unwrap();

        // Assert
        assert_eq!(details.show.id, 1396);
        assert_eq!(details.show.genre_ids, vec![18, 80]);
        assert_eq!(details.number_of_seasons, 5);
        assert_eq!(details.number_of_episodes, 62);
        assert_eq!(details.networks[0].name, "AMC");
        assert_eq!(details.created_by[0].name, "Vince Gilligan");
        assert_eq!(details.show_type, "Scripted");
        assert_eq!(details.episode_run_time, vec![45, 47]);
        assert_eq!(details.last_air_date, NaiveDate::from_ymd_opt(2013, 9, 29));
        assert_eq!(details.seasons.len(), 3);
        assert_eq!(details.seasons[0].season_number, 0);
        assert_eq!(details.seasons[2].air_date, None);
        assert!(!details.in_production);
    }

    #[test]
    fn test_details_type_key() {
        // Arrange
        let json = include_str!("../../../../../fixtures/tmdb/tv_details_1396.json");
        let details = map_tv_details(serde_json::from_str(json).unwrap()).unwrap();

        // Act
        let value = serde_json::to_value(&details).unwrap();

        // Assert
        assert_eq!(value["type"], "Scripted");
        assert_eq!(value["name"], "Breaking Bad");
        assert_eq!(value["numberOfSeasons"], 5);
    }
}
