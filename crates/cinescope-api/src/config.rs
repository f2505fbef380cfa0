//! `TmdbConfig` - client configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file
//! (`[tmdb]` table), then environment variables.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::{Result, TmdbError};

/// Default TMDB API v3 base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// Default image CDN base URL.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/";

/// Default response language.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Default region.
pub const DEFAULT_REGION: &str = "US";

const DEFAULT_PAGE_SIZE: u32 = 20;
const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);
const DEFAULT_RETRY_ATTEMPTS: u32 = 3;
const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1_000);

const ENV_API_KEY: &str = "TMDB_API_KEY";
const ENV_BASE_URL: &str = "TMDB_BASE_URL";
const ENV_IMAGE_BASE_URL: &str = "TMDB_IMAGE_BASE_URL";
const ENV_LANGUAGE: &str = "DEFAULT_LANGUAGE";
const ENV_REGION: &str = "DEFAULT_REGION";
const ENV_PAGE_SIZE: &str = "DEFAULT_PAGE_SIZE";
const ENV_TIMEOUT: &str = "API_TIMEOUT";
const ENV_RETRY_ATTEMPTS: &str = "RETRY_ATTEMPTS";
const ENV_RETRY_DELAY: &str = "RETRY_DELAY";

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmdbConfig {
    /// TMDB API key, sent as `api_key` on every request.
    pub api_key: String,
    /// API base URL (always ends with `/`).
    pub base_url: Url,
    /// Image CDN base URL, joined with a size token and a relative path.
    pub image_base_url: String,
    /// Language sent when a call does not specify one.
    pub default_language: String,
    /// Default region (ISO 3166-1).
    pub default_region: String,
    /// Page size reported by TMDB. Informational only.
    pub default_page_size: u32,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Retry attempts. Carried for consumers; the client never retries.
    pub retry_attempts: u32,
    /// Delay between retries. Carried for consumers; the client never retries.
    pub retry_delay: Duration,
}

/// Config file layout.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
struct ConfigFile {
    #[serde(default)]
    tmdb: FileSettings,
}

/// `[tmdb]` table. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
struct FileSettings {
    api_key: Option<String>,
    base_url: Option<String>,
    image_base_url: Option<String>,
    default_language: Option<String>,
    default_region: Option<String>,
    default_page_size: Option<u32>,
    timeout_ms: Option<u64>,
    retry_attempts: Option<u32>,
    retry_delay_ms: Option<u64>,
}

impl TmdbConfig {
    /// Loads configuration from environment variables only.
    ///
    /// # Errors
    ///
    /// Returns [`TmdbError::Configuration`] if `TMDB_API_KEY` is missing or
    /// any value fails to parse.
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Loads configuration from an optional TOML file, then the environment.
    ///
    /// # Errors
    ///
    /// Returns [`TmdbError::Configuration`] if the file cannot be read or
    /// parsed, the API key is missing, or any value is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Loads configuration from an optional TOML file and a variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`TmdbConfig::load`].
    pub fn load_with(
        path: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let file = match path {
            Some(p) => read_config_file(p)?,
            None => FileSettings::default(),
        };
        Self::resolve(file, lookup)
    }

    /// Loads configuration from a variable lookup only.
    ///
    /// # Errors
    ///
    /// Same as [`TmdbConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Self::resolve(FileSettings::default(), lookup)
    }

    fn resolve(file: FileSettings, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = var(ENV_API_KEY)
            .or(file.api_key)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                TmdbError::Configuration(format!(
                    "{ENV_API_KEY} is required. Set it in the environment or the [tmdb] table of the config file."
                ))
            })?;

        let base_url = var(ENV_BASE_URL)
            .or(file.base_url)
            .map_or_else(|| Url::parse(DEFAULT_BASE_URL).map_err(invalid_url), |raw| {
                parse_base_url(&raw)
            })?;

        let image_base_url = var(ENV_IMAGE_BASE_URL)
            .or(file.image_base_url)
            .unwrap_or_else(|| String::from(DEFAULT_IMAGE_BASE_URL));

        let default_page_size = match var(ENV_PAGE_SIZE) {
            Some(v) => parse_number(ENV_PAGE_SIZE, &v)?,
            None => file.default_page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        };

        let timeout = match var(ENV_TIMEOUT) {
            Some(v) => Duration::from_millis(parse_number(ENV_TIMEOUT, &v)?),
            None => file.timeout_ms.map_or(DEFAULT_TIMEOUT, Duration::from_millis),
        };
        if timeout.is_zero() {
            return Err(TmdbError::Configuration(format!(
                "{ENV_TIMEOUT} must be greater than 0"
            )));
        }

        let retry_attempts = match var(ENV_RETRY_ATTEMPTS) {
            Some(v) => parse_number(ENV_RETRY_ATTEMPTS, &v)?,
            None => file.retry_attempts.unwrap_or(DEFAULT_RETRY_ATTEMPTS),
        };

        let retry_delay = match var(ENV_RETRY_DELAY) {
            Some(v) => Duration::from_millis(parse_number(ENV_RETRY_DELAY, &v)?),
            None => file
                .retry_delay_ms
                .map_or(DEFAULT_RETRY_DELAY, Duration::from_millis),
        };

        Ok(Self {
            api_key,
            base_url,
            image_base_url,
            default_language: var(ENV_LANGUAGE)
                .or(file.default_language)
                .unwrap_or_else(|| String::from(DEFAULT_LANGUAGE)),
            default_region: var(ENV_REGION)
                .or(file.default_region)
                .unwrap_or_else(|| String::from(DEFAULT_REGION)),
            default_page_size,
            timeout,
            retry_attempts,
            retry_delay,
        })
    }

    /// Builds an absolute image URL for a relative `path` at `size`.
    #[must_use]
    pub fn image_url(&self, path: Option<&str>, size: &str) -> Option<String> {
        crate::format::image_url(&self.image_base_url, size, path)
    }
}

/// Reads the `[tmdb]` table. A missing file yields empty settings.
fn read_config_file(path: &Path) -> Result<FileSettings> {
    if !path.exists() {
        return Ok(FileSettings::default());
    }
    let content = std::fs::read_to_string(path).map_err(|e| {
        TmdbError::Configuration(format!("failed to read {}: {e}", path.display()))
    })?;
    let parsed: ConfigFile = toml::from_str(&content).map_err(|e| {
        TmdbError::Configuration(format!("failed to parse {}: {e}", path.display()))
    })?;
    Ok(parsed.tmdb)
}

/// Parses a base URL, appending the trailing `/` that `Url::join` relies on.
fn parse_base_url(raw: &str) -> Result<Url> {
    let normalized = if raw.ends_with('/') {
        String::from(raw)
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalized).map_err(invalid_url)
}

fn invalid_url(err: url::ParseError) -> TmdbError {
    TmdbError::Configuration(format!("invalid {ENV_BASE_URL}: {err}"))
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| TmdbError::Configuration(format!("{key} must be a number, got {value:?}")))
}

/// Resolves the config file path.
///
/// - If `dir` is `Some`, returns `{dir}/config.toml`.
/// - Otherwise returns `~/.config/cinescope/config.toml`.
///
/// # Errors
///
/// Returns an error if `HOME` is not set (when `dir` is `None`).
pub fn resolve_config_path(dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(d) = dir {
        return Ok(d.join("config.toml"));
    }

    let home = std::env::var("HOME").map_err(|_| {
        TmdbError::Configuration(String::from("HOME environment variable is not set"))
    })?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("cinescope")
        .join("config.toml"))
}
