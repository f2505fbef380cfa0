//! Display helpers for domain data.
//!
//! Pure functions; nothing here touches the network or the configuration.

use chrono::{Datelike, NaiveDate};

use crate::models::Genre;

/// Image size token for posters.
pub const POSTER_SIZE: &str = "w500";
/// Image size token for backdrops.
pub const BACKDROP_SIZE: &str = "w780";
/// Image size token for profile pictures.
pub const PROFILE_SIZE: &str = "w185";
/// Image size token for the original upload.
pub const ORIGINAL_SIZE: &str = "original";

/// Placeholder for unknown values.
const NOT_AVAILABLE: &str = "N/A";

/// Builds `{base}{size}{path}` for a relative image path.
///
/// Returns `None` when there is no image.
#[must_use]
pub fn image_url(base: &str, size: &str, path: Option<&str>) -> Option<String> {
    let path = path.filter(|p| !p.is_empty())?;
    Some(format!("{base}{size}{path}"))
}

/// Poster URL at [`POSTER_SIZE`].
#[must_use]
pub fn poster_url(base: &str, path: Option<&str>) -> Option<String> {
    image_url(base, POSTER_SIZE, path)
}

/// Backdrop URL at [`BACKDROP_SIZE`].
#[must_use]
pub fn backdrop_url(base: &str, path: Option<&str>) -> Option<String> {
    image_url(base, BACKDROP_SIZE, path)
}

/// Profile picture URL at [`PROFILE_SIZE`].
#[must_use]
pub fn profile_url(base: &str, path: Option<&str>) -> Option<String> {
    image_url(base, PROFILE_SIZE, path)
}

/// Year of `date`, or `"N/A"`.
#[must_use]
pub fn year_label(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| String::from(NOT_AVAILABLE), |d| d.year().to_string())
}

/// Vote average with one decimal (`8.8`).
#[must_use]
pub fn format_vote_average(vote_average: f64) -> String {
    format!("{vote_average:.1}")
}

/// Runtime in minutes as `"2h 28m"`, or `"N/A"` when unknown or zero.
#[must_use]
pub fn format_runtime(minutes: Option<u32>) -> String {
    match minutes {
        None | Some(0) => String::from(NOT_AVAILABLE),
        Some(m) if m < 60 => format!("{m}m"),
        Some(m) => format!("{}h {}m", m / 60, m % 60),
    }
}

/// Episode run times as `"45, 60 minutes"`, or `"N/A"` when empty.
#[must_use]
pub fn format_episode_run_time(run_times: &[u32]) -> String {
    if run_times.is_empty() {
        return String::from(NOT_AVAILABLE);
    }
    let joined = run_times
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{joined} minutes")
}

/// Genre names joined with `", "`.
#[must_use]
pub fn genre_names(genres: &[Genre]) -> String {
    genres
        .iter()
        .map(|g| g.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Human label for a TMDB gender code.
#[must_use]
pub const fn gender_label(gender: u8) -> &'static str {
    match gender {
        1 => "Female",
        2 => "Male",
        3 => "Non-binary",
        _ => "Not specified",
    }
}

/// Age in whole years at `deathday`, or at `today` for the living.
///
/// Returns `None` without a birthday or when the end date precedes it.
#[must_use]
pub fn age_on(
    birthday: Option<NaiveDate>,
    deathday: Option<NaiveDate>,
    today: NaiveDate,
) -> Option<u32> {
    let end = deathday.unwrap_or(today);
    end.years_since(birthday?)
}
