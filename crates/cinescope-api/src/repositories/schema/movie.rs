//! Movie schema types (`search/movie`, `discover/movie`, `movie/*`).

use serde::Deserialize;

use super::{non_empty, parse_date, required};
use crate::error::Result;
use crate::models::{
    Collection, Genre, Movie, MovieDetails, ProductionCompany, ProductionCountry, SpokenLanguage,
};

/// External key to domain key, for every [`Movie`] field.
pub const MOVIE_FIELD_MAP: &[(&str, &str)] = &[
    ("id", "id"),
    ("title", "title"),
    ("original_title", "originalTitle"),
    ("overview", "overview"),
    ("release_date", "releaseDate"),
    ("poster_path", "posterPath"),
    ("backdrop_path", "backdropPath"),
    ("vote_average", "voteAverage"),
    ("vote_count", "voteCount"),
    ("popularity", "popularity"),
    ("adult", "adult"),
    ("original_language", "originalLanguage"),
    ("genre_ids", "genreIds"),
    ("video", "video"),
];

/// Movie summary as sent by TMDB.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbMovie {
    /// Movie ID.
    pub id: u64,
    /// Localized title.
    pub title: Option<String>,
    /// Original title.
    pub original_title: Option<String>,
    /// Overview.
    pub overview: Option<String>,
    /// Release date (`YYYY-MM-DD` or empty).
    pub release_date: Option<String>,
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
    /// Genre IDs (absent on details responses).
    pub genre_ids: Option<Vec<u32>>,
    /// Video flag.
    pub video: Option<bool>,
}

/// Genre.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenre {
    /// Genre ID.
    pub id: u32,
    /// Genre name.
    #[serde(default)]
    pub name: String,
}

/// Production company.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbProductionCompany {
    /// Company ID.
    pub id: u64,
    /// Company name.
    #[serde(default)]
    pub name: String,
    /// Logo path.
    pub logo_path: Option<String>,
    /// Country of origin.
    #[serde(default)]
    pub origin_country: String,
}

/// Production country.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbProductionCountry {
    /// ISO 3166-1 code.
    pub iso_3166_1: String,
    /// Country name.
    #[serde(default)]
    pub name: String,
}

/// Spoken language.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbSpokenLanguage {
    /// English name.
    #[serde(default)]
    pub english_name: String,
    /// ISO 639-1 code.
    pub iso_639_1: String,
    /// Native name.
    #[serde(default)]
    pub name: String,
}

/// Collection.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCollection {
    /// Collection ID.
    pub id: u64,
    /// Collection name.
    #[serde(default)]
    pub name: String,
    /// Poster path.
    pub poster_path: Option<String>,
    /// Backdrop path.
    pub backdrop_path: Option<String>,
}

/// Response of `movie/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetails {
    /// Summary fields.
    #[serde(flatten)]
    pub movie: TmdbMovie,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Genres.
    pub genres: Option<Vec<TmdbGenre>>,
    /// Budget.
    pub budget: Option<u64>,
    /// Revenue.
    pub revenue: Option<u64>,
    /// Production companies.
    pub production_companies: Option<Vec<TmdbProductionCompany>>,
    /// Production countries.
    pub production_countries: Option<Vec<TmdbProductionCountry>>,
    /// Spoken languages.
    pub spoken_languages: Option<Vec<TmdbSpokenLanguage>>,
    /// Parent collection.
    pub belongs_to_collection: Option<TmdbCollection>,
    /// Homepage.
    pub homepage: Option<String>,
    /// IMDb ID.
    pub imdb_id: Option<String>,
    /// Release status.
    pub status: Option<String>,
    /// Tagline.
    pub tagline: Option<String>,
}

/// Maps a raw movie summary.
///
/// # Errors
///
/// Returns a validation error if `title` is missing or `release_date` is
/// malformed.
pub fn map_movie(raw: TmdbMovie) -> Result<Movie> {
    let title = required("title", raw.title)?;
    Ok(Movie {
        id: raw.id,
        original_title: raw.original_title.unwrap_or_else(|| title.clone()),
        title,
        overview: raw.overview.unwrap_or_default(),
        release_date: parse_date("release_date", raw.release_date.as_deref())?,
        poster_path: raw.poster_path,
        backdrop_path: raw.backdrop_path,
        vote_average: raw.vote_average.unwrap_or_default(),
        vote_count: raw.vote_count.unwrap_or_default(),
        popularity: raw.popularity.unwrap_or_default(),
        adult: raw.adult.unwrap_or_default(),
        original_language: raw.original_language.unwrap_or_default(),
        genre_ids: raw.genre_ids.unwrap_or_default(),
        video: raw.video.unwrap_or_default(),
    })
}

/// Maps a raw `movie/{id}` response. `genre_ids` is taken from `genres`.
///
/// # Errors
///
/// Same as [`map_movie`].
pub fn map_movie_details(raw: TmdbMovieDetails) -> Result<MovieDetails> {
    let genres: Vec<Genre> = raw
        .genres
        .unwrap_or_default()
        .into_iter()
        .map(|g| Genre {
            id: g.id,
            name: g.name,
        })
        .collect();

    let mut movie = map_movie(raw.movie)?;
    movie.genre_ids = genres.iter().map(|g| g.id).collect();

    Ok(MovieDetails {
        movie,
        runtime: raw.runtime.filter(|r| *r > 0),
        genres,
        budget: raw.budget.unwrap_or_default(),
        revenue: raw.revenue.unwrap_or_default(),
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
        production_countries: raw
            .production_countries
            .unwrap_or_default()
            .into_iter()
            .map(|c| ProductionCountry {
                country_code: c.iso_3166_1,
                name: c.name,
            })
            .collect(),
        spoken_languages: raw
            .spoken_languages
            .unwrap_or_default()
            .into_iter()
            .map(|l| SpokenLanguage {
                english_name: l.english_name,
                language_code: l.iso_639_1,
                name: l.name,
            })
            .collect(),
        belongs_to_collection: raw.belongs_to_collection.map(|c| Collection {
            id: c.id,
            name: c.name,
            poster_path: c.poster_path,
            backdrop_path: c.backdrop_path,
        }),
        homepage: non_empty(raw.homepage),
        imdb_id: non_empty(raw.imdb_id),
        status: raw.status.unwrap_or_default(),
        tagline: non_empty(raw.tagline),
    })
}
