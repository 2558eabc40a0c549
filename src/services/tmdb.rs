//! TMDB API client.
//!
//! Thin HTTP layer implementing [`MetadataProvider`]. Empty search results
//! map to `Ok(None)` so lookups that find nothing stay a normal outcome.

use crate::core::resolver::MetadataProvider;
use crate::models::media::{EpisodeInfo, MovieInfo, SeriesInfo};
use crate::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;

const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// TMDB client configuration.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    /// API key or Bearer token (JWT)
    pub api_key: String,
    pub language: String,
    /// Whether to use Bearer token authentication (API v4 style)
    pub use_bearer: bool,
}

impl TmdbConfig {
    /// Create config from environment variable.
    /// Supports both API key (v3) and Bearer token (v4) formats.
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var("TMDB_API_KEY").map_err(|_| crate::Error::TmdbApiKeyMissing)?;

        // Bearer tokens start with "eyJ" (base64 encoded JWT header)
        let use_bearer = api_key.starts_with("eyJ");

        Ok(Self {
            api_key,
            language: "en-US".to_string(),
            use_bearer,
        })
    }
}

/// TMDB API client.
pub struct TmdbClient {
    config: TmdbConfig,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct MovieSearchResult {
    results: Vec<MovieSearchItem>,
}

#[derive(Debug, Deserialize)]
struct MovieSearchItem {
    title: String,
    release_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TvSearchResult {
    results: Vec<TvSearchItem>,
}

#[derive(Debug, Deserialize)]
struct TvSearchItem {
    id: u64,
    name: String,
    first_air_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TvDetails {
    seasons: Vec<SeasonSummary>,
}

#[derive(Debug, Deserialize)]
struct SeasonSummary {
    season_number: u32,
}

#[derive(Debug, Deserialize)]
struct SeasonDetails {
    episodes: Vec<EpisodeItem>,
}

#[derive(Debug, Deserialize)]
struct EpisodeItem {
    episode_number: u32,
    name: String,
}

/// Parse the year from a TMDB date string (YYYY-MM-DD).
fn year_of(date: Option<&str>) -> Option<u16> {
    date?.get(..4)?.parse().ok()
}

impl TmdbClient {
    /// Create a new TMDB client.
    pub fn new(config: TmdbConfig) -> Self {
        let client = reqwest::Client::new();
        Self { config, client }
    }

    /// Create a new TMDB client from environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(TmdbConfig::from_env()?))
    }

    /// Build a request with proper authentication.
    fn build_request(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.client.get(url);
        if self.config.use_bearer {
            request.header("Authorization", format!("Bearer {}", self.config.api_key))
        } else {
            request
        }
    }

    /// Build URL with optional api_key parameter (only for v3 style).
    fn build_url(&self, path: &str, extra_params: &str) -> String {
        if self.config.use_bearer {
            format!(
                "{}/{}?language={}{}",
                TMDB_BASE_URL, path, self.config.language, extra_params
            )
        } else {
            format!(
                "{}/{}?api_key={}&language={}{}",
                TMDB_BASE_URL, path, self.config.api_key, self.config.language, extra_params
            )
        }
    }

    /// Full episode listing for a show, season by season.
    async fn fetch_episodes(
        &self,
        tv_id: u64,
    ) -> Result<BTreeMap<u32, BTreeMap<u32, EpisodeInfo>>> {
        let url = self.build_url(&format!("tv/{}", tv_id), "");
        let details: TvDetails = self.build_request(&url).send().await?.json().await?;

        let mut episodes = BTreeMap::new();
        for season in details.seasons {
            let url = self.build_url(
                &format!("tv/{}/season/{}", tv_id, season.season_number),
                "",
            );
            let season_details: SeasonDetails =
                self.build_request(&url).send().await?.json().await?;

            let listing: BTreeMap<u32, EpisodeInfo> = season_details
                .episodes
                .into_iter()
                .map(|e| (e.episode_number, EpisodeInfo { title: e.name }))
                .collect();
            episodes.insert(season.season_number, listing);
        }

        Ok(episodes)
    }
}

#[async_trait]
impl MetadataProvider for TmdbClient {
    async fn search_movie(&self, query: &str) -> Result<Option<MovieInfo>> {
        let url = self.build_url(
            "search/movie",
            &format!("&query={}", urlencoding::encode(query)),
        );
        let resp: MovieSearchResult = self.build_request(&url).send().await?.json().await?;

        let Some(first) = resp.results.into_iter().next() else {
            return Ok(None);
        };

        tracing::debug!("movie match for \"{}\": {}", query, first.title);
        Ok(Some(MovieInfo {
            year: year_of(first.release_date.as_deref()),
            title: first.title,
        }))
    }

    async fn search_series(&self, query: &str) -> Result<Option<SeriesInfo>> {
        let url = self.build_url(
            "search/tv",
            &format!("&query={}", urlencoding::encode(query)),
        );
        let resp: TvSearchResult = self.build_request(&url).send().await?.json().await?;

        let Some(first) = resp.results.into_iter().next() else {
            return Ok(None);
        };

        tracing::debug!("tv match for \"{}\": {}", query, first.name);
        let episodes = self.fetch_episodes(first.id).await?;

        Ok(Some(SeriesInfo {
            year: year_of(first.first_air_date.as_deref()),
            title: first.name,
            episodes,
        }))
    }
}
